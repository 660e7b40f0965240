//! Client-side text filtering for entity lists
//!
//! A search term is trimmed and lowercased once; an entity passes when any of
//! its searchable fields contains the term (case-insensitive substring). An
//! empty or whitespace-only term lets every entity through. Order is always
//! preserved.

use shared::{Customer, DiningTable, Restaurant};

/// Entity that can be matched against a search term
pub trait Searchable {
    /// `term` is already trimmed, lowercased and non-empty
    fn matches(&self, term: &str) -> bool;
}

impl Searchable for Restaurant {
    fn matches(&self, term: &str) -> bool {
        contains_ci(&self.name, term)
            || contains_ci(&self.address, term)
            || self.phone_number.as_deref().is_some_and(|p| contains_ci(p, term))
    }
}

impl Searchable for Customer {
    fn matches(&self, term: &str) -> bool {
        contains_ci(&self.name, term)
            || self.email.as_deref().is_some_and(|e| contains_ci(e, term))
            || self.phone_number.as_deref().is_some_and(|p| contains_ci(p, term))
    }
}

impl Searchable for DiningTable {
    fn matches(&self, term: &str) -> bool {
        self.capacity.to_string().contains(term)
    }
}

fn contains_ci(field: &str, term: &str) -> bool {
    field.to_lowercase().contains(term)
}

/// Trim and lowercase a raw search term; `None` means "no filter"
pub fn normalize_term(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

/// Entities matching `raw_term`, in their original order
pub fn filter_entities<E: Searchable + Clone>(entities: &[E], raw_term: &str) -> Vec<E> {
    match normalize_term(raw_term) {
        None => entities.to_vec(),
        Some(term) => entities
            .iter()
            .filter(|e| e.matches(&term))
            .cloned()
            .collect(),
    }
}

/// Filtered snapshot published to a list view
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView<E> {
    /// Entities that passed the filter
    pub items: Vec<E>,
    /// Raw term the items were filtered with
    pub term: String,
    /// Incremented on every recomputation
    pub revision: u64,
}

/// State of a list filter: the latest entity list and the latest term
///
/// Pure: feeding it a new term or a new entity list returns the recomputed
/// view. A term equal to the current one is ignored.
#[derive(Debug, Clone)]
pub struct FilterState<E> {
    entities: Vec<E>,
    term: String,
    visible: Vec<E>,
    revision: u64,
}

impl<E: Searchable + Clone> FilterState<E> {
    /// Initial state with an empty term; counts as the first computation
    pub fn new(entities: Vec<E>) -> Self {
        let mut state = Self {
            entities,
            term: String::new(),
            visible: Vec::new(),
            revision: 0,
        };
        state.recompute();
        state
    }

    /// Apply a (debounced) term. Returns the new view, or `None` if the term
    /// did not change.
    pub fn apply_term(&mut self, term: &str) -> Option<FilteredView<E>> {
        if term == self.term {
            return None;
        }
        self.term = term.to_string();
        self.recompute();
        Some(self.view())
    }

    /// Apply a new entity list with the current term
    pub fn apply_entities(&mut self, entities: Vec<E>) -> FilteredView<E> {
        self.entities = entities;
        self.recompute();
        self.view()
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn total(&self) -> usize {
        self.entities.len()
    }

    pub fn view(&self) -> FilteredView<E> {
        FilteredView {
            items: self.visible.clone(),
            term: self.term.clone(),
            revision: self.revision,
        }
    }

    fn recompute(&mut self) {
        self.visible = filter_entities(&self.entities, &self.term);
        self.revision += 1;
    }
}
