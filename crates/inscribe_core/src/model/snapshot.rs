//! Full backend snapshot delivered once per session.

use crate::model::label::Label;
use crate::model::note::Note;
use serde::{Deserialize, Serialize};

/// Notes, archives, trash and labels as returned by the backend on startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub archives: Vec<Note>,
    #[serde(default)]
    pub trash: Vec<Note>,
    #[serde(default)]
    pub labels: Vec<Label>,
}
