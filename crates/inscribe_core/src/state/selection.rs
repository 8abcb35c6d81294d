//! View selection state: sort mode, filters and search term.
//!
//! # Responsibility
//! - Hold what the user asked to see, independent of note data.
//! - Produce toggled candidate lists for callers building filter actions.
//!
//! # Invariants
//! - Sort is a single tagged value, so date and priority sorting are
//!   mutually exclusive by construction.
//! - Priority candidates always hold one entry per `Priority` value, in rank
//!   order. Only the `filtered` flags change.

use crate::model::label::LabelId;
use crate::model::note::Priority;
use crate::state::labels::LabelRegistry;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Direction for date sorting (by last update).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateOrder {
    NewestFirst,
    OldestFirst,
}

/// Direction for priority sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PriorityOrder {
    HighToLow,
    LowToHigh,
}

/// Active sort key, at most one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortSelection {
    /// Keep collection order.
    #[default]
    None,
    ByDate(DateOrder),
    ByPriority(PriorityOrder),
}

impl SortSelection {
    pub fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    /// Short user-facing description of the active sort.
    pub fn description(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::ByDate(DateOrder::NewestFirst) => Some("Newest first"),
            Self::ByDate(DateOrder::OldestFirst) => Some("Oldest first"),
            Self::ByPriority(PriorityOrder::HighToLow) => Some("High to low"),
            Self::ByPriority(PriorityOrder::LowToHigh) => Some("Low to high"),
        }
    }
}

/// Label filter candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelFilter {
    pub id: LabelId,
    pub label: String,
    #[serde(default)]
    pub filtered: bool,
}

/// Priority filter candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityFilter {
    pub priority: Priority,
    #[serde(default)]
    pub filtered: bool,
}

/// Current sort/filter/search selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSelection {
    sort_by: SortSelection,
    label_filters: Vec<LabelFilter>,
    priority_filters: Vec<PriorityFilter>,
    search_term: String,
}

impl Default for ViewSelection {
    fn default() -> Self {
        Self {
            sort_by: SortSelection::None,
            label_filters: Vec::new(),
            priority_filters: cleared_priority_filters(),
            search_term: String::new(),
        }
    }
}

impl ViewSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sort(mut self, sort_by: SortSelection) -> Self {
        self.set_sort(sort_by);
        self
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.set_search_term(term);
        self
    }

    pub fn with_label_filters(mut self, filters: Vec<LabelFilter>) -> Self {
        self.set_label_filters(filters);
        self
    }

    pub fn with_priority_filters(mut self, filters: &[PriorityFilter]) -> Self {
        self.set_priority_filters(filters);
        self
    }

    pub fn sort_by(&self) -> SortSelection {
        self.sort_by
    }

    pub fn label_filters(&self) -> &[LabelFilter] {
        &self.label_filters
    }

    pub fn priority_filters(&self) -> &[PriorityFilter] {
        &self.priority_filters
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Label ids whose candidate is currently `filtered`.
    pub fn selected_label_ids(&self) -> HashSet<LabelId> {
        self.label_filters
            .iter()
            .filter(|filter| filter.filtered)
            .map(|filter| filter.id)
            .collect()
    }

    /// Priorities whose candidate is currently `filtered`, in rank order.
    pub fn selected_priorities(&self) -> Vec<Priority> {
        self.priority_filters
            .iter()
            .filter(|filter| filter.filtered)
            .map(|filter| filter.priority)
            .collect()
    }

    /// Whether any sort or filter is applied. The search term is not counted.
    pub fn is_active(&self) -> bool {
        !self.sort_by.is_none()
            || self.label_filters.iter().any(|filter| filter.filtered)
            || self.priority_filters.iter().any(|filter| filter.filtered)
    }

    /// Label candidates aligned with `registry`, keeping current flags.
    pub fn label_candidates(&self, registry: &LabelRegistry) -> Vec<LabelFilter> {
        registry
            .labels()
            .iter()
            .map(|label| LabelFilter {
                id: label.id,
                label: label.label.clone(),
                filtered: self
                    .label_filters
                    .iter()
                    .any(|filter| filter.id == label.id && filter.filtered),
            })
            .collect()
    }

    /// Candidate list with the flag of `label_id` flipped.
    ///
    /// Unknown ids leave every flag as is.
    pub fn toggled_label(&self, registry: &LabelRegistry, label_id: LabelId) -> Vec<LabelFilter> {
        let mut candidates = self.label_candidates(registry);
        for candidate in candidates.iter_mut().filter(|c| c.id == label_id) {
            candidate.filtered = !candidate.filtered;
        }
        candidates
    }

    /// Priority candidate list with the flag of `priority` flipped.
    pub fn toggled_priority(&self, priority: Priority) -> Vec<PriorityFilter> {
        self.priority_filters
            .iter()
            .map(|filter| PriorityFilter {
                priority: filter.priority,
                filtered: if filter.priority == priority {
                    !filter.filtered
                } else {
                    filter.filtered
                },
            })
            .collect()
    }

    pub(crate) fn set_sort(&mut self, sort_by: SortSelection) {
        self.sort_by = sort_by;
    }

    pub(crate) fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub(crate) fn set_label_filters(&mut self, filters: Vec<LabelFilter>) {
        self.label_filters = filters;
    }

    /// Applies `filters` flags onto the full priority complement.
    pub(crate) fn set_priority_filters(&mut self, filters: &[PriorityFilter]) {
        self.priority_filters = Priority::ALL
            .iter()
            .map(|&priority| PriorityFilter {
                priority,
                filtered: filters
                    .iter()
                    .any(|filter| filter.priority == priority && filter.filtered),
            })
            .collect();
    }

    /// Re-aligns label candidates with the registry, keeping flags.
    pub(crate) fn sync_label_candidates(&mut self, registry: &LabelRegistry) {
        self.label_filters = self.label_candidates(registry);
    }

    /// Clears sort and every filter flag. The search term is kept.
    pub(crate) fn reset_filters(&mut self) {
        self.sort_by = SortSelection::None;
        for filter in &mut self.label_filters {
            filter.filtered = false;
        }
        self.priority_filters = cleared_priority_filters();
    }
}

fn cleared_priority_filters() -> Vec<PriorityFilter> {
    Priority::ALL
        .iter()
        .map(|&priority| PriorityFilter {
            priority,
            filtered: false,
        })
        .collect()
}
