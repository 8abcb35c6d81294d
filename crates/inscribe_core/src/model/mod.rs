//! Domain model for notes, labels and backend snapshots.
//!
//! # Responsibility
//! - Define the value types exchanged with the backend collaborator.
//! - Keep wire naming (`camelCase`) in one place via serde attributes.
//!
//! # Invariants
//! - Every note and label is identified by a stable UUID.
//! - A trashed note records the shelf it came from in `trashed_from`.

pub mod label;
pub mod note;
pub mod snapshot;
