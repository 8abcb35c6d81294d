//! Dispatchable actions and their wire decoding.
//!
//! # Responsibility
//! - Define the closed set of state transitions as one tagged enum.
//! - Decode actions delivered as JSON (`{"type": ..., "payload": ...}`).
//!
//! # Invariants
//! - An unknown `type` never decodes; it surfaces as `ActionError`.
//! - Payload field names follow backend `camelCase`.

use crate::model::label::{Label, LabelId};
use crate::model::note::{Note, NoteId};
use crate::model::snapshot::Snapshot;
use crate::state::selection::{LabelFilter, PriorityFilter, SortSelection};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// State transition request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "payload",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum NotesAction {
    /// Replaces every collection and the label registry from a backend snapshot.
    InitializeSnapshot(Snapshot),
    /// Replaces active notes after a single-note create/update/delete.
    ReplaceActive {
        notes: Vec<Note>,
        trash: Option<Vec<Note>>,
    },
    /// Moves notes between active and archived.
    ReplaceArchives {
        notes: Vec<Note>,
        archives: Vec<Note>,
    },
    /// Edits archived notes, or trashes one of them.
    EditArchives {
        archives: Vec<Note>,
        trash: Option<Vec<Note>>,
    },
    /// Replaces all three collections at once.
    RestoreFromTrash {
        notes: Vec<Note>,
        archives: Vec<Note>,
        trash: Vec<Note>,
    },
    SetTrash {
        trash: Vec<Note>,
    },
    /// Appends a label whose id was generated by the caller.
    AddLabel {
        label: String,
        id: LabelId,
    },
    SetSort {
        sort_by: SortSelection,
    },
    SetLabelFilter {
        filter_by_label: Vec<LabelFilter>,
    },
    SetPriorityFilter {
        filter_by_priority: Vec<PriorityFilter>,
    },
    /// Clears sort and every label/priority filter flag.
    ResetFilters,
    /// Updates fetch status flags only.
    SetLoaderError {
        loading: bool,
        error: Option<String>,
    },
    SetSearchTerm {
        term: String,
    },
    /// Opens or closes the note form.
    SetEditor {
        show_new_note_form: bool,
        editing: Option<NoteId>,
    },
    /// Returns to the initial state, e.g. on logout.
    Reset,
}

impl NotesAction {
    /// Decodes one action from its JSON form.
    pub fn from_json(raw: &str) -> Result<Self, ActionError> {
        serde_json::from_str(raw).map_err(ActionError::InvalidAction)
    }

    /// Decodes one action from an already parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ActionError> {
        serde_json::from_value(value).map_err(ActionError::InvalidAction)
    }

    pub fn add_label(label: &Label) -> Self {
        Self::AddLabel {
            label: label.label.clone(),
            id: label.id,
        }
    }

    /// Stable kind name, identical to the wire `type`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InitializeSnapshot(_) => "INITIALIZE_SNAPSHOT",
            Self::ReplaceActive { .. } => "REPLACE_ACTIVE",
            Self::ReplaceArchives { .. } => "REPLACE_ARCHIVES",
            Self::EditArchives { .. } => "EDIT_ARCHIVES",
            Self::RestoreFromTrash { .. } => "RESTORE_FROM_TRASH",
            Self::SetTrash { .. } => "SET_TRASH",
            Self::AddLabel { .. } => "ADD_LABEL",
            Self::SetSort { .. } => "SET_SORT",
            Self::SetLabelFilter { .. } => "SET_LABEL_FILTER",
            Self::SetPriorityFilter { .. } => "SET_PRIORITY_FILTER",
            Self::ResetFilters => "RESET_FILTERS",
            Self::SetLoaderError { .. } => "SET_LOADER_ERROR",
            Self::SetSearchTerm { .. } => "SET_SEARCH_TERM",
            Self::SetEditor { .. } => "SET_EDITOR",
            Self::Reset => "RESET",
        }
    }
}

/// Action decoding error.
#[derive(Debug)]
pub enum ActionError {
    /// Unknown action kind or malformed payload.
    InvalidAction(serde_json::Error),
}

impl Display for ActionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAction(err) => write!(f, "invalid dispatch action: {err}"),
        }
    }
}

impl Error for ActionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidAction(err) => Some(err),
        }
    }
}
