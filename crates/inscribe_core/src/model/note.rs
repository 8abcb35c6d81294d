//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record delivered by the backend.
//! - Define priority ranking and the lifecycle collection tags.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `trashed_from` is `Some` exactly while the note sits in trash.
//! - `updated_at >= created_at` is expected but not enforced here.

use crate::model::label::{Label, LabelId};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier of a note.
pub type NoteId = Uuid;

/// Fixed priority scale for notes.
///
/// Declaration order is rank order, highest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
    /// No priority assigned. Also used when the payload omits the field.
    #[default]
    None,
}

impl Priority {
    /// Every priority value, in rank order (high first).
    pub const ALL: [Priority; 4] = [
        Priority::High,
        Priority::Medium,
        Priority::Low,
        Priority::None,
    ];

    /// Numeric rank; larger means more important.
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
            Self::None => 0,
        }
    }

    /// Stable wire string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::None => "none",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the two live collections a note can be restored into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shelf {
    Notes,
    Archives,
}

/// Lifecycle collection a note currently belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Notes,
    Archives,
    Trash,
}

impl Collection {
    pub const ALL: [Collection; 3] = [Collection::Notes, Collection::Archives, Collection::Trash];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Notes => "notes",
            Self::Archives => "archives",
            Self::Trash => "trash",
        }
    }
}

impl From<Shelf> for Collection {
    fn from(value: Shelf) -> Self {
        match value {
            Shelf::Notes => Self::Notes,
            Shelf::Archives => Self::Archives,
        }
    }
}

impl Display for Collection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label reference carried by a note, denormalized at tagging time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub id: LabelId,
    pub label: String,
}

impl From<&Label> for Tag {
    fn from(value: &Label) -> Self {
        Self {
            id: value.id,
            label: value.label.clone(),
        }
    }
}

/// Canonical note record, in the backend payload shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    /// Body text.
    pub content: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub priority: Priority,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Unix epoch milliseconds. Drives date sorting.
    pub updated_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Shelf the note was trashed from; `None` outside trash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trashed_from: Option<Shelf>,
}

impl Note {
    /// Creates a note with a generated ID, stamped with the current time.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title, content, now_epoch_ms())
    }

    /// Creates a note with a caller-provided ID and creation time.
    ///
    /// Used by import paths and tests where identity already exists.
    pub fn with_id(
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
        created_at: i64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            tags: Vec::new(),
            priority: Priority::None,
            created_at,
            updated_at: created_at,
            color: None,
            trashed_from: None,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    pub fn with_updated_at(mut self, updated_at: i64) -> Self {
        self.updated_at = updated_at;
        self
    }

    /// Returns whether this note references the given label.
    pub fn has_label(&self, label_id: LabelId) -> bool {
        self.tags.iter().any(|tag| tag.id == label_id)
    }
}

/// Current wall-clock time in Unix epoch milliseconds.
///
/// Falls back to `0` if the clock reads earlier than the epoch.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
