//! Lifecycle protocol: archive, trash and restore as action builders.
//!
//! # Responsibility
//! - Translate one user intent on one note into the replacement action the
//!   transition function understands.
//! - Stamp and clear the `trashed_from` origin on the way in and out of trash.
//!
//! # Invariants
//! - Builders only read the state; dispatching the result is the caller's job.
//! - A note leaves its source collection in the same action that places it
//!   in the target collection.

use crate::model::note::{Collection, Note, NoteId, Shelf};
use crate::reducer::NotesAction;
use crate::state::NotesState;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lifecycle intent that cannot be expressed for the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    /// No collection holds this note.
    NoteNotFound(NoteId),
    /// The note exists but not where the intent expects it.
    WrongCollection {
        id: NoteId,
        expected: Collection,
        actual: Collection,
    },
    /// A trashed note carries no origin, so its restore target is unknown.
    MissingOrigin(NoteId),
}

impl Display for LifecycleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::WrongCollection {
                id,
                expected,
                actual,
            } => write!(f, "note {id} is in {actual}, expected {expected}"),
            Self::MissingOrigin(id) => write!(f, "trashed note {id} has no recorded origin"),
        }
    }
}

impl Error for LifecycleError {}

/// Moves an active note to the end of archives.
pub fn archive(state: &NotesState, id: NoteId) -> Result<NotesAction, LifecycleError> {
    let note = require(state, id, Collection::Notes)?.clone();
    let mut archives = state.lifecycle.cloned(Collection::Archives);
    archives.push(note);
    Ok(NotesAction::ReplaceArchives {
        notes: without(state, Collection::Notes, id),
        archives,
    })
}

/// Moves an archived note back to the end of active notes.
pub fn unarchive(state: &NotesState, id: NoteId) -> Result<NotesAction, LifecycleError> {
    let note = require(state, id, Collection::Archives)?.clone();
    let mut notes = state.lifecycle.cloned(Collection::Notes);
    notes.push(note);
    Ok(NotesAction::ReplaceArchives {
        notes,
        archives: without(state, Collection::Archives, id),
    })
}

/// Moves an active or archived note to trash, recording where it came from.
pub fn trash(state: &NotesState, id: NoteId) -> Result<NotesAction, LifecycleError> {
    let (collection, note) = state
        .lifecycle
        .get(id)
        .ok_or(LifecycleError::NoteNotFound(id))?;
    let origin = match collection {
        Collection::Notes => Shelf::Notes,
        Collection::Archives => Shelf::Archives,
        Collection::Trash => {
            return Err(LifecycleError::WrongCollection {
                id,
                expected: Collection::Notes,
                actual: Collection::Trash,
            })
        }
    };

    let mut trashed = note.clone();
    trashed.trashed_from = Some(origin);
    let mut trash = state.lifecycle.cloned(Collection::Trash);
    trash.push(trashed);

    Ok(match origin {
        Shelf::Notes => NotesAction::ReplaceActive {
            notes: without(state, Collection::Notes, id),
            trash: Some(trash),
        },
        Shelf::Archives => NotesAction::EditArchives {
            archives: without(state, Collection::Archives, id),
            trash: Some(trash),
        },
    })
}

/// Returns a trashed note to the collection recorded in `trashed_from`.
pub fn restore(state: &NotesState, id: NoteId) -> Result<NotesAction, LifecycleError> {
    let note = require(state, id, Collection::Trash)?;
    let origin = note.trashed_from.ok_or(LifecycleError::MissingOrigin(id))?;

    let mut restored = note.clone();
    restored.trashed_from = None;
    let mut notes = state.lifecycle.cloned(Collection::Notes);
    let mut archives = state.lifecycle.cloned(Collection::Archives);
    match origin {
        Shelf::Notes => notes.push(restored),
        Shelf::Archives => archives.push(restored),
    }

    Ok(NotesAction::RestoreFromTrash {
        notes,
        archives,
        trash: without(state, Collection::Trash, id),
    })
}

/// Drops a trashed note for good.
pub fn delete_forever(state: &NotesState, id: NoteId) -> Result<NotesAction, LifecycleError> {
    require(state, id, Collection::Trash)?;
    Ok(NotesAction::SetTrash {
        trash: without(state, Collection::Trash, id),
    })
}

fn require(state: &NotesState, id: NoteId, expected: Collection) -> Result<&Note, LifecycleError> {
    match state.lifecycle.get(id) {
        None => Err(LifecycleError::NoteNotFound(id)),
        Some((actual, note)) if actual == expected => Ok(note),
        Some((actual, _)) => Err(LifecycleError::WrongCollection {
            id,
            expected,
            actual,
        }),
    }
}

fn without(state: &NotesState, collection: Collection, id: NoteId) -> Vec<Note> {
    state
        .lifecycle
        .iter(collection)
        .filter(|note| note.id != id)
        .cloned()
        .collect()
}
