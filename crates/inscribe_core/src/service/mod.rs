//! Core use-case services.
//!
//! # Responsibility
//! - Turn single-note intents into transition actions.
//! - Own the session store that the UI layer reads and dispatches into.

pub mod lifecycle;
pub mod store;
