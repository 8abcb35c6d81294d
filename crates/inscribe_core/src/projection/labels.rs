use crate::model::label::Label;
use crate::model::note::{Collection, Note};
use crate::state::NotesState;

/// Notes carrying one label, split by live collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelGroup<'a> {
    pub label: &'a Label,
    pub notes: Vec<&'a Note>,
    pub archives: Vec<&'a Note>,
}

/// Groups active and archived notes under every registered label.
///
/// Groups follow registry order; trash is not included. Labels without any
/// note still get an (empty) group.
pub fn label_groups(state: &NotesState) -> Vec<LabelGroup<'_>> {
    state
        .labels
        .labels()
        .iter()
        .map(|label| LabelGroup {
            label,
            notes: tagged(state, Collection::Notes, label),
            archives: tagged(state, Collection::Archives, label),
        })
        .collect()
}

fn tagged<'a>(state: &'a NotesState, collection: Collection, label: &Label) -> Vec<&'a Note> {
    state
        .lifecycle
        .iter(collection)
        .filter(|note| note.has_label(label.id))
        .collect()
}
