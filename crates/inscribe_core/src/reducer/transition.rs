use crate::model::label::Label;
use crate::model::note::{Collection, Note};
use crate::reducer::action::NotesAction;
use crate::state::editor::EditorState;
use crate::state::labels::LabelRegistry;
use crate::state::lifecycle::{payloads_disjoint, LifecycleStore};
use crate::state::NotesState;

/// Computes the next state from `prev` and `action`.
///
/// Pure and synchronous: `prev` is left untouched and no I/O happens here.
pub fn reduce(prev: &NotesState, action: NotesAction) -> NotesState {
    let mut next = prev.clone();
    apply(&mut next, action);
    next
}

fn apply(state: &mut NotesState, action: NotesAction) {
    match action {
        NotesAction::InitializeSnapshot(snapshot) => {
            assert_disjoint(&[
                snapshot.notes.as_slice(),
                snapshot.archives.as_slice(),
                snapshot.trash.as_slice(),
            ]);
            let mut lifecycle = LifecycleStore::new();
            lifecycle.replace(Collection::Notes, snapshot.notes);
            lifecycle.replace(Collection::Archives, snapshot.archives);
            lifecycle.replace(Collection::Trash, snapshot.trash);
            state.lifecycle = lifecycle;
            state.labels = LabelRegistry::from_labels(snapshot.labels);
            state.selection.sync_label_candidates(&state.labels);
            state.loading = false;
            state.error = None;
            state.editor = EditorState::closed();
        }
        NotesAction::ReplaceActive { notes, trash } => {
            if let Some(trash) = &trash {
                assert_disjoint(&[notes.as_slice(), trash.as_slice()]);
            }
            state.lifecycle.replace(Collection::Notes, notes);
            if let Some(trash) = trash {
                state.lifecycle.replace(Collection::Trash, trash);
            }
            state.editor = EditorState::closed();
        }
        NotesAction::ReplaceArchives { notes, archives } => {
            assert_disjoint(&[notes.as_slice(), archives.as_slice()]);
            state.lifecycle.replace(Collection::Notes, notes);
            state.lifecycle.replace(Collection::Archives, archives);
        }
        NotesAction::EditArchives { archives, trash } => {
            if let Some(trash) = &trash {
                assert_disjoint(&[archives.as_slice(), trash.as_slice()]);
            }
            state.lifecycle.replace(Collection::Archives, archives);
            if let Some(trash) = trash {
                state.lifecycle.replace(Collection::Trash, trash);
            }
            state.editor = EditorState::closed();
        }
        NotesAction::RestoreFromTrash {
            notes,
            archives,
            trash,
        } => {
            assert_disjoint(&[notes.as_slice(), archives.as_slice(), trash.as_slice()]);
            state.lifecycle.replace(Collection::Notes, notes);
            state.lifecycle.replace(Collection::Archives, archives);
            state.lifecycle.replace(Collection::Trash, trash);
        }
        NotesAction::SetTrash { trash } => {
            state.lifecycle.replace(Collection::Trash, trash);
        }
        NotesAction::AddLabel { label, id } => {
            if state.labels.push(Label::with_id(id, label)) {
                state.selection.sync_label_candidates(&state.labels);
            }
        }
        NotesAction::SetSort { sort_by } => state.selection.set_sort(sort_by),
        NotesAction::SetLabelFilter { filter_by_label } => {
            state.selection.set_label_filters(filter_by_label);
        }
        NotesAction::SetPriorityFilter { filter_by_priority } => {
            state.selection.set_priority_filters(&filter_by_priority);
        }
        NotesAction::ResetFilters => state.selection.reset_filters(),
        NotesAction::SetLoaderError { loading, error } => {
            state.loading = loading;
            state.error = error;
        }
        NotesAction::SetSearchTerm { term } => state.selection.set_search_term(term),
        NotesAction::SetEditor {
            show_new_note_form,
            editing,
        } => {
            state.editor = EditorState {
                show_new_note_form,
                editing,
            };
        }
        NotesAction::Reset => *state = NotesState::default(),
    }
}

fn assert_disjoint(payloads: &[&[Note]]) {
    debug_assert!(
        payloads_disjoint(payloads),
        "one note id appears in more than one collection payload"
    );
}
