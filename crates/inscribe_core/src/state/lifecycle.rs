//! Note lifecycle store.
//!
//! # Responsibility
//! - Own every note of the session together with its lifecycle collection.
//! - Provide wholesale collection replacement used by the transition function.
//!
//! # Invariants
//! - A note id appears in at most one entry, so it belongs to exactly one
//!   collection. Exclusivity is structural, not checked after the fact.
//! - Each collection view preserves the order entries were placed in.

use crate::model::note::{Collection, Note, NoteId};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    collection: Collection,
    note: Note,
}

/// Arena of notes keyed by id, each tagged with its collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LifecycleStore {
    entries: Vec<Entry>,
}

impl LifecycleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the content of `collection` with `notes`.
    ///
    /// Every entry currently in `collection` is dropped, and any note of
    /// `notes` that lives in another collection is moved out of it. The
    /// payload order becomes the collection order. Repeated ids inside
    /// `notes` keep their first occurrence.
    pub fn replace(&mut self, collection: Collection, notes: Vec<Note>) {
        debug_assert!(
            has_unique_ids(&notes),
            "duplicate note id in `{collection}` payload"
        );

        let incoming: HashSet<NoteId> = notes.iter().map(|note| note.id).collect();
        self.entries
            .retain(|entry| entry.collection != collection && !incoming.contains(&entry.note.id));

        let mut seen = HashSet::with_capacity(notes.len());
        self.entries.extend(
            notes
                .into_iter()
                .filter(|note| seen.insert(note.id))
                .map(|note| Entry { collection, note }),
        );
    }

    /// Iterates one collection in order.
    pub fn iter(&self, collection: Collection) -> impl Iterator<Item = &Note> + '_ {
        self.entries
            .iter()
            .filter(move |entry| entry.collection == collection)
            .map(|entry| &entry.note)
    }

    /// Snapshot of one collection in order.
    pub fn collection(&self, collection: Collection) -> Vec<&Note> {
        self.iter(collection).collect()
    }

    /// Owned copy of one collection, used to build replacement payloads.
    pub fn cloned(&self, collection: Collection) -> Vec<Note> {
        self.iter(collection).cloned().collect()
    }

    pub fn notes(&self) -> Vec<&Note> {
        self.collection(Collection::Notes)
    }

    pub fn archives(&self) -> Vec<&Note> {
        self.collection(Collection::Archives)
    }

    pub fn trash(&self) -> Vec<&Note> {
        self.collection(Collection::Trash)
    }

    /// Looks up a note and the collection holding it.
    pub fn get(&self, id: NoteId) -> Option<(Collection, &Note)> {
        self.entries
            .iter()
            .find(|entry| entry.note.id == id)
            .map(|entry| (entry.collection, &entry.note))
    }

    pub fn collection_of(&self, id: NoteId) -> Option<Collection> {
        self.get(id).map(|(collection, _)| collection)
    }

    pub fn count(&self, collection: Collection) -> usize {
        self.iter(collection).count()
    }

    /// Iterates all notes with their collection, in arena order.
    pub fn entries(&self) -> impl Iterator<Item = (Collection, &Note)> + '_ {
        self.entries
            .iter()
            .map(|entry| (entry.collection, &entry.note))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Returns whether every note in `notes` has a distinct id.
pub(crate) fn has_unique_ids(notes: &[Note]) -> bool {
    let mut seen = HashSet::with_capacity(notes.len());
    notes.iter().all(|note| seen.insert(note.id))
}

/// Returns whether no id is shared between any two payloads.
pub(crate) fn payloads_disjoint(payloads: &[&[Note]]) -> bool {
    let mut seen = HashSet::new();
    payloads
        .iter()
        .flat_map(|payload| payload.iter())
        .all(|note| seen.insert(note.id))
}

#[cfg(test)]
mod tests {
    use super::{payloads_disjoint, LifecycleStore};
    use crate::model::note::{Collection, Note};
    use uuid::Uuid;

    fn note(title: &str) -> Note {
        Note::with_id(Uuid::new_v4(), title, "", 1_000)
    }

    #[test]
    fn replace_keeps_payload_order() {
        let mut store = LifecycleStore::new();
        let (a, b, c) = (note("a"), note("b"), note("c"));
        store.replace(Collection::Notes, vec![c.clone(), a.clone(), b.clone()]);

        let titles: Vec<&str> = store.notes().iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["c", "a", "b"]);
    }

    #[test]
    fn replace_moves_note_out_of_previous_collection() {
        let mut store = LifecycleStore::new();
        let a = note("a");
        store.replace(Collection::Notes, vec![a.clone()]);
        store.replace(Collection::Archives, vec![a.clone()]);

        assert_eq!(store.len(), 1);
        assert_eq!(store.collection_of(a.id), Some(Collection::Archives));
        assert!(store.notes().is_empty());
    }

    #[test]
    fn replace_leaves_other_collections_untouched() {
        let mut store = LifecycleStore::new();
        let (a, b) = (note("a"), note("b"));
        store.replace(Collection::Notes, vec![a.clone()]);
        store.replace(Collection::Trash, vec![b.clone()]);
        store.replace(Collection::Notes, Vec::new());

        assert_eq!(store.collection_of(a.id), None);
        assert_eq!(store.collection_of(b.id), Some(Collection::Trash));
    }

    #[test]
    fn payloads_disjoint_detects_shared_ids() {
        let a = note("a");
        let b = note("b");
        let active = vec![a.clone()];
        let archived = vec![b.clone()];
        let overlapping = vec![b, a];
        assert!(payloads_disjoint(&[active.as_slice(), archived.as_slice()]));
        assert!(!payloads_disjoint(&[active.as_slice(), overlapping.as_slice()]));
    }
}
