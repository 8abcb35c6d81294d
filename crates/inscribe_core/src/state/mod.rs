//! Aggregate session state.
//!
//! # Responsibility
//! - Bundle label registry, lifecycle store, view selection, editor state
//!   and fetch status into one value owned by the store.
//! - Report invariant violations without failing.
//!
//! # Invariants
//! - The state is replaced, never mutated in place, by `reducer::reduce`.
//! - `loading` starts as `true` until the first snapshot arrives.

pub mod editor;
pub mod labels;
pub mod lifecycle;
pub mod selection;

use crate::model::label::LabelId;
use crate::model::note::{Collection, Note, NoteId, Priority};
use crate::projection::project;
use editor::EditorState;
use labels::LabelRegistry;
use lifecycle::LifecycleStore;
use selection::ViewSelection;
use std::fmt::{Display, Formatter};

/// Aggregate state observed by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesState {
    pub labels: LabelRegistry,
    pub lifecycle: LifecycleStore,
    pub selection: ViewSelection,
    pub editor: EditorState,
    /// A backend fetch is in flight.
    pub loading: bool,
    /// Last upstream failure message, shown by the UI.
    pub error: Option<String>,
}

impl Default for NotesState {
    fn default() -> Self {
        Self {
            labels: LabelRegistry::new(),
            lifecycle: LifecycleStore::new(),
            selection: ViewSelection::new(),
            editor: EditorState::closed(),
            loading: true,
            error: None,
        }
    }
}

impl NotesState {
    pub fn notes(&self) -> Vec<&Note> {
        self.lifecycle.notes()
    }

    pub fn archives(&self) -> Vec<&Note> {
        self.lifecycle.archives()
    }

    pub fn trash(&self) -> Vec<&Note> {
        self.lifecycle.trash()
    }

    /// Projects one collection through the current selection.
    pub fn visible(&self, collection: Collection) -> Vec<&Note> {
        project(self.lifecycle.iter(collection), &self.selection)
    }

    /// Lists consistency problems the transition function does not prevent.
    ///
    /// Collection exclusivity needs no check here: the lifecycle arena keeps
    /// one entry per id.
    pub fn invariant_violations(&self) -> Vec<InvariantViolation> {
        let mut violations = Vec::new();

        for (collection, note) in self.lifecycle.entries() {
            for tag in &note.tags {
                if !self.labels.contains(tag.id) {
                    violations.push(InvariantViolation::DanglingTag {
                        note_id: note.id,
                        label_id: tag.id,
                    });
                }
            }
            match (collection, note.trashed_from) {
                (Collection::Trash, None) => {
                    violations.push(InvariantViolation::TrashWithoutOrigin(note.id));
                }
                (Collection::Notes | Collection::Archives, Some(_)) => {
                    violations.push(InvariantViolation::StaleOrigin {
                        note_id: note.id,
                        collection,
                    });
                }
                _ => {}
            }
        }

        let priorities: Vec<Priority> = self
            .selection
            .priority_filters()
            .iter()
            .map(|filter| filter.priority)
            .collect();
        if priorities != Priority::ALL {
            violations.push(InvariantViolation::PriorityCandidates(priorities.len()));
        }

        violations
    }
}

/// Consistency problem found in the aggregate state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A note tag references a label missing from the registry.
    DanglingTag { note_id: NoteId, label_id: LabelId },
    /// A trashed note has no recorded origin, so it cannot be restored.
    TrashWithoutOrigin(NoteId),
    /// A live note still carries a trash origin.
    StaleOrigin {
        note_id: NoteId,
        collection: Collection,
    },
    /// Priority candidates are not exactly one per priority value.
    PriorityCandidates(usize),
}

impl Display for InvariantViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DanglingTag { note_id, label_id } => {
                write!(f, "note {note_id} references unknown label {label_id}")
            }
            Self::TrashWithoutOrigin(note_id) => {
                write!(f, "trashed note {note_id} has no origin")
            }
            Self::StaleOrigin {
                note_id,
                collection,
            } => write!(f, "note {note_id} in {collection} still has a trash origin"),
            Self::PriorityCandidates(count) => write!(
                f,
                "expected {} priority candidates, found {count}",
                Priority::ALL.len()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{InvariantViolation, NotesState};
    use crate::model::label::Label;
    use crate::model::note::{Collection, Note, Tag};
    use uuid::Uuid;

    #[test]
    fn default_state_is_loading_and_consistent() {
        let state = NotesState::default();
        assert!(state.loading);
        assert!(state.error.is_none());
        assert!(state.invariant_violations().is_empty());
    }

    #[test]
    fn reports_dangling_tag_and_missing_origin() {
        let unknown = Label::new("ghost");
        let note = Note::with_id(Uuid::new_v4(), "t", "c", 1).with_tags([Tag::from(&unknown)]);
        let mut state = NotesState::default();
        state.lifecycle.replace(Collection::Trash, vec![note.clone()]);

        let violations = state.invariant_violations();
        assert!(violations.contains(&InvariantViolation::DanglingTag {
            note_id: note.id,
            label_id: unknown.id,
        }));
        assert!(violations.contains(&InvariantViolation::TrashWithoutOrigin(note.id)));
    }
}
