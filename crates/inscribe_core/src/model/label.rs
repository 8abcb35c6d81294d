//! Label (tag definition) model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a label definition.
pub type LabelId = Uuid;

/// A distinct tag definition usable by notes.
///
/// Identifiers are unique; display text may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label {
    pub id: LabelId,
    /// Display text, serialized as `label` to match the backend payload.
    pub label: String,
}

impl Label {
    /// Creates a label with a freshly generated identifier.
    ///
    /// Surrounding whitespace is trimmed from `text`.
    pub fn new(text: impl AsRef<str>) -> Self {
        Self::with_id(Uuid::new_v4(), text)
    }

    /// Creates a label with a caller-provided identifier.
    pub fn with_id(id: LabelId, text: impl AsRef<str>) -> Self {
        Self {
            id,
            label: text.as_ref().trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Label;

    #[test]
    fn new_trims_text_and_generates_distinct_ids() {
        let first = Label::new("  work ");
        let second = Label::new("work");
        assert_eq!(first.label, "work");
        assert_eq!(first.label, second.label);
        assert_ne!(first.id, second.id);
        assert!(!first.id.is_nil());
    }
}
