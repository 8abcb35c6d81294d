//! Session-owned notes store.
//!
//! # Responsibility
//! - Hold the aggregate state for one signed-in session.
//! - Serialize every mutation through `dispatch`.
//! - Offer use-case shortcuts that build and dispatch lifecycle and
//!   selection actions in one call.
//!
//! # Invariants
//! - `dispatch` takes `&mut self`; two transitions can never interleave.
//! - Logs carry ids, counts and kinds only, never note text.

use crate::model::label::{Label, LabelId};
use crate::model::note::{Collection, Note, NoteId, Priority};
use crate::model::snapshot::Snapshot;
use crate::reducer::{reduce, ActionError, NotesAction};
use crate::service::lifecycle::{self, LifecycleError};
use crate::state::selection::SortSelection;
use crate::state::NotesState;
use log::{debug, error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-level error for use-case calls.
#[derive(Debug)]
pub enum StoreError {
    /// Label text is empty after trimming.
    BlankLabel,
    /// Action could not be decoded.
    Action(ActionError),
    /// Lifecycle intent does not fit the current state.
    Lifecycle(LifecycleError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankLabel => write!(f, "label text must not be blank"),
            Self::Action(err) => write!(f, "{err}"),
            Self::Lifecycle(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::BlankLabel => None,
            Self::Action(err) => Some(err),
            Self::Lifecycle(err) => Some(err),
        }
    }
}

impl From<ActionError> for StoreError {
    fn from(value: ActionError) -> Self {
        Self::Action(value)
    }
}

impl From<LifecycleError> for StoreError {
    fn from(value: LifecycleError) -> Self {
        Self::Lifecycle(value)
    }
}

/// Explicitly owned store for one session.
#[derive(Debug, Default)]
pub struct NotesStore {
    state: NotesState,
}

impl NotesStore {
    /// Creates a store holding default state (empty, loading).
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the current aggregate state.
    pub fn state(&self) -> &NotesState {
        &self.state
    }

    /// Loads the backend snapshot at session start.
    pub fn init(&mut self, snapshot: Snapshot) {
        info!(
            "event=session_init module=store status=ok notes={} archives={} trash={} labels={}",
            snapshot.notes.len(),
            snapshot.archives.len(),
            snapshot.trash.len(),
            snapshot.labels.len()
        );
        self.dispatch(NotesAction::InitializeSnapshot(snapshot));
    }

    /// Drops all session data, e.g. on logout.
    pub fn dispose(&mut self) {
        info!("event=session_dispose module=store status=ok");
        self.dispatch(NotesAction::Reset);
    }

    /// Applies one action through the transition function.
    pub fn dispatch(&mut self, action: NotesAction) {
        let kind = action.kind();
        if let NotesAction::AddLabel { id, .. } = &action {
            if self.state.labels.contains(*id) {
                warn!("event=label_add module=store status=skipped reason=duplicate_id label_id={id}");
            }
        }

        self.state = reduce(&self.state, action);
        debug!(
            "event=dispatch module=store status=ok kind={} notes={} archives={} trash={}",
            kind,
            self.state.lifecycle.count(Collection::Notes),
            self.state.lifecycle.count(Collection::Archives),
            self.state.lifecycle.count(Collection::Trash)
        );

        if cfg!(debug_assertions) {
            for violation in self.state.invariant_violations() {
                warn!("event=invariant_violation module=store kind={kind} detail={violation}");
            }
        }
    }

    /// Decodes and applies one JSON action.
    ///
    /// Unknown kinds and malformed payloads fail without touching the state.
    pub fn dispatch_json(&mut self, raw: &str) -> Result<(), StoreError> {
        let action = NotesAction::from_json(raw).map_err(|err| {
            error!("event=dispatch module=store status=error reason=invalid_action detail={err}");
            err
        })?;
        self.dispatch(action);
        Ok(())
    }

    /// Projects one collection through the current selection.
    pub fn visible(&self, collection: Collection) -> Vec<&Note> {
        self.state.visible(collection)
    }

    /// Registers a new label with a generated id.
    pub fn add_label(&mut self, text: &str) -> Result<Label, StoreError> {
        if text.trim().is_empty() {
            return Err(StoreError::BlankLabel);
        }
        let label = Label::new(text);
        self.dispatch(NotesAction::add_label(&label));
        info!("event=label_add module=store status=ok label_id={}", label.id);
        Ok(label)
    }

    pub fn archive(&mut self, id: NoteId) -> Result<(), StoreError> {
        self.apply_lifecycle("archive", id, lifecycle::archive)
    }

    pub fn unarchive(&mut self, id: NoteId) -> Result<(), StoreError> {
        self.apply_lifecycle("unarchive", id, lifecycle::unarchive)
    }

    pub fn trash(&mut self, id: NoteId) -> Result<(), StoreError> {
        self.apply_lifecycle("trash", id, lifecycle::trash)
    }

    pub fn restore(&mut self, id: NoteId) -> Result<(), StoreError> {
        self.apply_lifecycle("restore", id, lifecycle::restore)
    }

    pub fn delete_forever(&mut self, id: NoteId) -> Result<(), StoreError> {
        self.apply_lifecycle("delete_forever", id, lifecycle::delete_forever)
    }

    pub fn set_sort(&mut self, sort_by: SortSelection) {
        self.dispatch(NotesAction::SetSort { sort_by });
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.dispatch(NotesAction::SetSearchTerm { term: term.into() });
    }

    /// Flips one label filter candidate.
    pub fn toggle_label_filter(&mut self, label_id: LabelId) {
        let filter_by_label = self
            .state
            .selection
            .toggled_label(&self.state.labels, label_id);
        self.dispatch(NotesAction::SetLabelFilter { filter_by_label });
    }

    /// Flips one priority filter candidate.
    pub fn toggle_priority_filter(&mut self, priority: Priority) {
        let filter_by_priority = self.state.selection.toggled_priority(priority);
        self.dispatch(NotesAction::SetPriorityFilter { filter_by_priority });
    }

    pub fn reset_filters(&mut self) {
        self.dispatch(NotesAction::ResetFilters);
    }

    fn apply_lifecycle(
        &mut self,
        intent: &str,
        id: NoteId,
        build: fn(&NotesState, NoteId) -> Result<NotesAction, LifecycleError>,
    ) -> Result<(), StoreError> {
        match build(&self.state, id) {
            Ok(action) => {
                self.dispatch(action);
                info!("event=note_{intent} module=store status=ok note_id={id}");
                Ok(())
            }
            Err(err) => {
                warn!("event=note_{intent} module=store status=error note_id={id} detail={err}");
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NotesStore, StoreError};

    #[test]
    fn add_label_rejects_blank_text() {
        let mut store = NotesStore::new();
        let err = store.add_label("   ").unwrap_err();
        assert!(matches!(err, StoreError::BlankLabel));
        assert!(store.state().labels.is_empty());
    }

    #[test]
    fn dispatch_json_leaves_state_untouched_on_unknown_kind() {
        let mut store = NotesStore::new();
        let before = store.state().clone();
        let err = store
            .dispatch_json(r#"{"type":"NOT_A_KIND","payload":{}}"#)
            .unwrap_err();
        assert!(matches!(err, StoreError::Action(_)));
        assert_eq!(store.state(), &before);
    }
}
