use crate::model::note::Note;
use crate::state::selection::{DateOrder, PriorityOrder, SortSelection};
use std::cmp::Ordering;

/// Orders `notes` in place. Sorting is stable, so equal keys keep
/// collection order.
pub(super) fn sort_notes(notes: &mut [&Note], sort_by: SortSelection) {
    match sort_by {
        SortSelection::None => {}
        SortSelection::ByDate(DateOrder::NewestFirst) => {
            notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        }
        SortSelection::ByDate(DateOrder::OldestFirst) => {
            notes.sort_by(|a, b| a.updated_at.cmp(&b.updated_at));
        }
        SortSelection::ByPriority(order) => {
            notes.sort_by(|a, b| by_priority(a, b, order));
        }
    }
}

/// Priority rank per `order`, then most recently updated first.
fn by_priority(a: &Note, b: &Note, order: PriorityOrder) -> Ordering {
    let rank = match order {
        PriorityOrder::HighToLow => b.priority.rank().cmp(&a.priority.rank()),
        PriorityOrder::LowToHigh => a.priority.rank().cmp(&b.priority.rank()),
    };
    rank.then_with(|| b.updated_at.cmp(&a.updated_at))
}
