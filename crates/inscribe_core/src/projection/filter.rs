use crate::model::label::LabelId;
use crate::model::note::{Note, Priority};
use crate::state::selection::ViewSelection;
use regex::{Regex, RegexBuilder};
use std::collections::HashSet;

/// Case-insensitive substring match over title and content.
enum TextFilter {
    Any,
    Pattern(Regex),
    /// Used only if the escaped pattern exceeds regex size limits.
    Lowercase(String),
}

impl TextFilter {
    fn new(term: &str) -> Self {
        let term = term.trim();
        if term.is_empty() {
            return Self::Any;
        }
        match RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .build()
        {
            Ok(pattern) => Self::Pattern(pattern),
            Err(_) => Self::Lowercase(term.to_lowercase()),
        }
    }

    fn matches(&self, note: &Note) -> bool {
        match self {
            Self::Any => true,
            Self::Pattern(pattern) => {
                pattern.is_match(&note.title) || pattern.is_match(&note.content)
            }
            Self::Lowercase(term) => {
                note.title.to_lowercase().contains(term.as_str())
                    || note.content.to_lowercase().contains(term.as_str())
            }
        }
    }
}

/// Combined text, label and priority predicate for one selection.
pub(super) struct NoteFilter {
    text: TextFilter,
    labels: HashSet<LabelId>,
    priorities: Vec<Priority>,
}

impl NoteFilter {
    pub(super) fn new(selection: &ViewSelection) -> Self {
        Self {
            text: TextFilter::new(selection.search_term()),
            labels: selection.selected_label_ids(),
            priorities: selection.selected_priorities(),
        }
    }

    pub(super) fn matches(&self, note: &Note) -> bool {
        self.text.matches(note) && self.matches_labels(note) && self.matches_priority(note)
    }

    fn matches_labels(&self, note: &Note) -> bool {
        self.labels.is_empty() || note.tags.iter().any(|tag| self.labels.contains(&tag.id))
    }

    fn matches_priority(&self, note: &Note) -> bool {
        self.priorities.is_empty() || self.priorities.contains(&note.priority)
    }
}
