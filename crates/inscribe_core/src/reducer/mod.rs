//! State transition function.
//!
//! # Responsibility
//! - Fold one `NotesAction` into the previous `NotesState`.
//! - Stay free of I/O; backend calls happen outside and come back as actions.
//!
//! # Invariants
//! - Every mutation of the aggregate state flows through `reduce`.
//! - Replacing a collection moves notes out of any other collection, so a
//!   note id is never in two collections after a transition.

pub mod action;
mod transition;

pub use action::{ActionError, NotesAction};
pub use transition::reduce;
