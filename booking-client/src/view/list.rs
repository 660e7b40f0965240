use std::time::Duration;

use tokio::sync::watch;

use crate::FetchError;
use crate::filter::{FilteredView, Searchable};
use crate::pipeline::FilteredList;
use crate::store::{Entity, EntityQuery, Selection};

/// Searchable entity list shared by every list screen
///
/// Owns the filter pipeline; destroying the view (or dropping it) stops it.
pub struct ListView<E: Entity> {
    query: EntityQuery<E>,
    filtered: FilteredList<E>,
}

impl<E: Entity + Searchable> ListView<E> {
    pub fn new(name: &'static str, query: EntityQuery<E>, debounce: Duration) -> Self {
        let filtered = FilteredList::spawn(name, &query, debounce);
        Self { query, filtered }
    }
}

impl<E: Entity> ListView<E> {
    pub fn on_search(&self, term: impl Into<String>) {
        self.filtered.on_search(term);
    }

    pub fn current_search_term(&self) -> String {
        self.filtered.current_search_term()
    }

    /// Entities currently passing the filter
    pub fn visible(&self) -> Vec<E> {
        self.filtered.visible().items
    }

    pub fn view(&self) -> FilteredView<E> {
        self.filtered.visible()
    }

    pub fn subscribe(&self) -> watch::Receiver<FilteredView<E>> {
        self.filtered.subscribe()
    }

    pub fn is_loading(&self) -> bool {
        self.query.is_loading()
    }

    pub fn error(&self) -> Option<FetchError> {
        self.query.get_error()
    }

    pub fn select_loading(&self) -> Selection<E, bool> {
        self.query.select_loading()
    }

    pub fn select_error(&self) -> Selection<E, Option<FetchError>> {
        self.query.select_error()
    }

    pub fn query(&self) -> &EntityQuery<E> {
        &self.query
    }

    pub fn destroy(&self) {
        self.filtered.destroy();
    }

    pub fn is_destroyed(&self) -> bool {
        self.filtered.is_destroyed()
    }
}
