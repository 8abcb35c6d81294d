//! Label registry.
//!
//! # Invariants
//! - Label identifiers are unique inside the registry.
//! - Registration order is preserved; there is no delete or rename.

use crate::model::label::{Label, LabelId};

/// Ordered set of label definitions usable by notes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelRegistry {
    labels: Vec<Label>,
}

impl LabelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from backend labels, dropping repeated ids.
    pub fn from_labels(labels: impl IntoIterator<Item = Label>) -> Self {
        let mut registry = Self::new();
        for label in labels {
            registry.push(label);
        }
        registry
    }

    /// Generates a fresh identifier for `text` and appends the label.
    pub fn add_label(&mut self, text: impl AsRef<str>) -> Label {
        let label = Label::new(text);
        self.labels.push(label.clone());
        label
    }

    /// Appends an already identified label.
    ///
    /// Returns `false` and leaves the registry unchanged when the id is
    /// already registered. Duplicate display text is accepted.
    pub fn push(&mut self, label: Label) -> bool {
        if self.contains(label.id) {
            return false;
        }
        self.labels.push(label);
        true
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn get(&self, id: LabelId) -> Option<&Label> {
        self.labels.iter().find(|label| label.id == id)
    }

    pub fn contains(&self, id: LabelId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
