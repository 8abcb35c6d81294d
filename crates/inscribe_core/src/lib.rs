//! Core domain logic for Inscribe notes.
//! This crate is the single source of truth for note lifecycle, label and
//! view-selection invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod projection;
pub mod reducer;
pub mod service;
pub mod state;

pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::label::{Label, LabelId};
pub use model::note::{now_epoch_ms, Collection, Note, NoteId, Priority, Shelf, Tag};
pub use model::snapshot::Snapshot;
pub use projection::{label_groups, project, LabelGroup};
pub use reducer::{reduce, ActionError, NotesAction};
pub use service::lifecycle::LifecycleError;
pub use service::store::{NotesStore, StoreError};
pub use state::editor::EditorState;
pub use state::labels::LabelRegistry;
pub use state::lifecycle::LifecycleStore;
pub use state::selection::{
    DateOrder, LabelFilter, PriorityFilter, PriorityOrder, SortSelection, ViewSelection,
};
pub use state::{InvariantViolation, NotesState};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
