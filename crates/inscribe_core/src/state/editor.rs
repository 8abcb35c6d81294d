//! Note editor form state.

use crate::model::note::NoteId;
use serde::{Deserialize, Serialize};

/// Whether the note form is open and which note it edits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorState {
    pub show_new_note_form: bool,
    /// `Some` while an existing note is being edited.
    pub editing: Option<NoteId>,
}

impl EditorState {
    /// Form hidden, nothing being edited.
    pub fn closed() -> Self {
        Self::default()
    }

    /// Form open for a brand-new note.
    pub fn new_note() -> Self {
        Self {
            show_new_note_form: true,
            editing: None,
        }
    }

    /// Form open on an existing note.
    pub fn editing(id: NoteId) -> Self {
        Self {
            show_new_note_form: true,
            editing: Some(id),
        }
    }

    pub fn is_open(&self) -> bool {
        self.show_new_note_form
    }
}
