use inscribe_core::{
    reduce, Collection, DateOrder, Label, Note, NotesAction, NotesState, NotesStore, Priority,
    PriorityFilter, Shelf, Snapshot, SortSelection, Tag,
};
use std::collections::HashSet;
use uuid::Uuid;

fn note(title: &str, updated_at: i64) -> Note {
    Note::with_id(Uuid::new_v4(), title, "", updated_at)
}

fn seeded() -> (NotesState, Vec<Note>, Label) {
    let work = Label::new("work");
    let active = vec![
        note("a", 1).with_tags([Tag::from(&work)]),
        note("b", 2),
        note("c", 3),
    ];
    let mut archived = note("d", 4);
    archived.priority = Priority::High;
    let mut trashed = note("e", 5);
    trashed.trashed_from = Some(Shelf::Archives);

    let state = reduce(
        &NotesState::default(),
        NotesAction::InitializeSnapshot(Snapshot {
            notes: active.clone(),
            archives: vec![archived.clone()],
            trash: vec![trashed.clone()],
            labels: vec![work.clone()],
        }),
    );
    let mut all = active;
    all.push(archived);
    all.push(trashed);
    (state, all, work)
}

fn assert_exclusive(state: &NotesState, ids: &[Uuid]) {
    let mut seen = HashSet::new();
    for collection in Collection::ALL {
        for note in state.lifecycle.iter(collection) {
            assert!(seen.insert(note.id), "note {} listed twice", note.id);
        }
    }
    for id in ids {
        let hits = Collection::ALL
            .iter()
            .filter(|c| state.lifecycle.iter(**c).any(|n| n.id == *id))
            .count();
        assert_eq!(hits, 1, "note {id} must be in exactly one collection");
    }
}

#[test]
fn initialize_snapshot_replaces_everything_and_clears_status() {
    let loading = reduce(
        &NotesState::default(),
        NotesAction::SetLoaderError {
            loading: true,
            error: Some("timeout".to_string()),
        },
    );
    let (seeded_state, _, work) = seeded();
    let snapshot = Snapshot {
        notes: seeded_state.notes().into_iter().cloned().collect(),
        archives: seeded_state.archives().into_iter().cloned().collect(),
        trash: seeded_state.trash().into_iter().cloned().collect(),
        labels: vec![work.clone()],
    };

    let state = reduce(&loading, NotesAction::InitializeSnapshot(snapshot));
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.notes().len(), 3);
    assert_eq!(state.archives().len(), 1);
    assert_eq!(state.trash().len(), 1);
    assert_eq!(state.labels.labels(), &[work.clone()]);
    assert_eq!(state.selection.label_filters().len(), 1);
    assert_eq!(state.selection.label_filters()[0].id, work.id);
    assert!(state.invariant_violations().is_empty());
}

#[test]
fn every_note_stays_in_exactly_one_collection_across_lifecycle_sequence() {
    let (state, all, _) = seeded();
    let ids: Vec<Uuid> = all.iter().map(|n| n.id).collect();
    let mut store = NotesStore::new();
    store.init(Snapshot {
        notes: state.notes().into_iter().cloned().collect(),
        archives: state.archives().into_iter().cloned().collect(),
        trash: state.trash().into_iter().cloned().collect(),
        labels: state.labels.labels().to_vec(),
    });
    assert_exclusive(store.state(), &ids);

    store.archive(ids[0]).unwrap();
    assert_exclusive(store.state(), &ids);
    store.trash(ids[1]).unwrap();
    assert_exclusive(store.state(), &ids);
    store.trash(ids[0]).unwrap();
    assert_exclusive(store.state(), &ids);
    store.restore(ids[4]).unwrap();
    assert_exclusive(store.state(), &ids);
    store.unarchive(ids[3]).unwrap();
    assert_exclusive(store.state(), &ids);
    store.restore(ids[0]).unwrap();
    assert_exclusive(store.state(), &ids);

    assert_eq!(store.state().lifecycle.collection_of(ids[0]), Some(Collection::Archives));
    assert_eq!(store.state().lifecycle.collection_of(ids[1]), Some(Collection::Trash));
    assert_eq!(store.state().lifecycle.collection_of(ids[3]), Some(Collection::Notes));
    assert_eq!(store.state().lifecycle.collection_of(ids[4]), Some(Collection::Archives));
}

#[test]
fn replace_active_refreshes_trash_only_when_given() {
    let (state, all, _) = seeded();
    let kept: Vec<Note> = all[..2].to_vec();

    let next = reduce(
        &state,
        NotesAction::ReplaceActive {
            notes: kept.clone(),
            trash: None,
        },
    );
    assert_eq!(next.notes().len(), 2);
    assert_eq!(next.trash().len(), 1);

    let next = reduce(
        &state,
        NotesAction::ReplaceActive {
            notes: kept,
            trash: Some(Vec::new()),
        },
    );
    assert!(next.trash().is_empty());
    assert_eq!(next.archives().len(), 1);
}

#[test]
fn replace_active_closes_the_editor() {
    let (state, all, _) = seeded();
    let editing = reduce(
        &state,
        NotesAction::SetEditor {
            show_new_note_form: true,
            editing: Some(all[0].id),
        },
    );
    assert!(editing.editor.is_open());

    let next = reduce(
        &editing,
        NotesAction::ReplaceActive {
            notes: state.notes().into_iter().cloned().collect(),
            trash: None,
        },
    );
    assert!(!next.editor.is_open());
    assert!(next.editor.editing.is_none());
}

#[test]
fn restore_from_trash_replaces_all_three_collections() {
    let (state, all, _) = seeded();
    let mut restored = all[4].clone();
    restored.trashed_from = None;

    let next = reduce(
        &state,
        NotesAction::RestoreFromTrash {
            notes: state.notes().into_iter().cloned().collect(),
            archives: vec![all[3].clone(), restored],
            trash: Vec::new(),
        },
    );
    assert_eq!(next.lifecycle.collection_of(all[4].id), Some(Collection::Archives));
    assert!(next.trash().is_empty());
}

#[test]
fn reset_filters_clears_every_axis_and_keeps_priority_complement() {
    let (state, _, work) = seeded();
    let state = reduce(
        &state,
        NotesAction::SetSort {
            sort_by: SortSelection::ByDate(DateOrder::OldestFirst),
        },
    );
    let state = reduce(
        &state,
        NotesAction::SetLabelFilter {
            filter_by_label: state.selection.toggled_label(&state.labels, work.id),
        },
    );
    let state = reduce(
        &state,
        NotesAction::SetPriorityFilter {
            filter_by_priority: vec![PriorityFilter {
                priority: Priority::High,
                filtered: true,
            }],
        },
    );
    assert!(state.selection.is_active());

    let cleared = reduce(&state, NotesAction::ResetFilters);
    assert_eq!(cleared.selection.sort_by(), SortSelection::None);
    assert!(cleared.selection.label_filters().iter().all(|f| !f.filtered));
    assert_eq!(cleared.selection.label_filters().len(), 1);
    let priorities: Vec<Priority> = cleared
        .selection
        .priority_filters()
        .iter()
        .map(|f| f.priority)
        .collect();
    assert_eq!(priorities, Priority::ALL.to_vec());
    assert!(cleared.selection.priority_filters().iter().all(|f| !f.filtered));
}

#[test]
fn set_loader_error_touches_only_status_flags() {
    let (state, _, _) = seeded();
    let next = reduce(
        &state,
        NotesAction::SetLoaderError {
            loading: false,
            error: Some("backend unavailable".to_string()),
        },
    );
    assert_eq!(next.error.as_deref(), Some("backend unavailable"));
    assert_eq!(next.lifecycle, state.lifecycle);
    assert_eq!(next.labels, state.labels);
    assert_eq!(next.selection, state.selection);
}

#[test]
fn add_label_appends_and_permits_duplicate_text() {
    let (state, _, _) = seeded();
    let twin = Label::new("work");
    let next = reduce(&state, NotesAction::add_label(&twin));
    assert_eq!(next.labels.len(), 2);
    assert_eq!(next.labels.labels()[1], twin);
    assert_eq!(next.selection.label_filters().len(), 2);
}

#[test]
fn reset_returns_initial_state() {
    let (state, _, _) = seeded();
    let next = reduce(&state, NotesAction::Reset);
    assert_eq!(next, NotesState::default());
}

#[test]
fn unknown_action_kind_fails_instead_of_returning_previous_state() {
    let mut store = NotesStore::new();
    let err = store
        .dispatch_json(r#"{"type":"SHOW_NEW_NOTE_FORM_V2","payload":{"showNewNoteForm":true}}"#)
        .expect_err("unknown kind must fail");
    assert!(err.to_string().contains("invalid dispatch action"));
}

#[test]
fn json_actions_drive_the_store() {
    let mut store = NotesStore::new();
    let id = Uuid::new_v4();
    store
        .dispatch_json(&format!(
            r#"{{"type":"INITIALIZE_SNAPSHOT","payload":{{
                "notes":[{{"id":"{id}","title":"t","content":"c","tags":[],
                           "priority":"low","createdAt":1,"updatedAt":2}}],
                "archives":[],"trash":[],"labels":[]}}}}"#
        ))
        .expect("snapshot action should decode");
    store
        .dispatch_json(r#"{"type":"SET_SEARCH_TERM","payload":{"term":"T"}}"#)
        .expect("search action should decode");

    assert_eq!(store.state().notes()[0].priority, Priority::Low);
    assert_eq!(store.state().selection.search_term(), "T");
    assert_eq!(store.visible(Collection::Notes).len(), 1);
}
