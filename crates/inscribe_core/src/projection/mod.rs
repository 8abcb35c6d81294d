//! Projection engine: what the user sees for a collection.
//!
//! # Responsibility
//! - Filter a collection by search text, labels and priorities.
//! - Order the result by the active sort selection.
//! - Group notes per label for the labels page.
//!
//! # Invariants
//! - Pure and deterministic; inputs are never mutated.
//! - Filters combine with AND across axes and OR within one axis.
//! - Without a sort, collection order is preserved.

mod filter;
mod labels;
mod sort;

pub use labels::{label_groups, LabelGroup};

use crate::model::note::Note;
use crate::state::selection::ViewSelection;
use filter::NoteFilter;

/// Computes the ordered list of notes to display.
///
/// Steps run in order: text, label, priority, sort. Each step is skipped
/// when its part of `selection` is empty.
pub fn project<'a, I>(notes: I, selection: &ViewSelection) -> Vec<&'a Note>
where
    I: IntoIterator<Item = &'a Note>,
{
    let filter = NoteFilter::new(selection);
    let mut visible: Vec<&Note> = notes.into_iter().filter(|note| filter.matches(note)).collect();
    sort::sort_notes(&mut visible, selection.sort_by());
    visible
}
