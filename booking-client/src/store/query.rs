//! Read facades over entity stores

use std::fmt;
use std::sync::Arc;

use futures::Stream;
use tokio::sync::watch;

use super::{Entity, EntityState, EntityStore};
use crate::FetchError;

type Projection<E, T> = Arc<dyn Fn(&EntityState<E>) -> T + Send + Sync>;

/// Read-only view of an [`EntityStore`]
///
/// `get_*` read the current state, `select_*` return a [`Selection`] that is
/// pushed a new value whenever the projected value changes.
pub struct EntityQuery<E: Entity> {
    store: EntityStore<E>,
}

impl<E: Entity> Clone for EntityQuery<E> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<E: Entity> fmt::Debug for EntityQuery<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityQuery")
            .field("store", &self.store)
            .finish()
    }
}

impl<E: Entity> EntityQuery<E> {
    pub fn new(store: EntityStore<E>) -> Self {
        Self { store }
    }

    pub fn name(&self) -> &'static str {
        self.store.name()
    }

    // ========== Snapshots ==========

    pub fn get_all(&self) -> Vec<E> {
        self.store.with_state(|s| s.entities().to_vec())
    }

    pub fn get_entity(&self, id: E::Id) -> Option<E> {
        self.store.with_state(|s| s.get(id).cloned())
    }

    pub fn has_entity(&self, id: E::Id) -> bool {
        self.store.with_state(|s| s.get(id).is_some())
    }

    pub fn get_active_id(&self) -> Option<E::Id> {
        self.store.with_state(|s| s.active_id())
    }

    pub fn get_active(&self) -> Option<E> {
        self.store.with_state(|s| s.active().cloned())
    }

    pub fn get_count(&self) -> usize {
        self.store.with_state(|s| s.len())
    }

    pub fn is_loading(&self) -> bool {
        self.store.with_state(|s| s.loading())
    }

    pub fn get_error(&self) -> Option<FetchError> {
        self.store.with_state(|s| s.error().cloned())
    }

    // ========== Selections ==========

    /// Select an arbitrary projection of the store
    pub fn select<T, F>(&self, project: F) -> Selection<E, T>
    where
        T: Clone + PartialEq,
        F: Fn(&EntityState<E>) -> T + Send + Sync + 'static,
    {
        Selection::new(self.store.subscribe(), Arc::new(project))
    }

    pub fn select_all(&self) -> Selection<E, Vec<E>> {
        self.select(|s| s.entities().to_vec())
    }

    pub fn select_loading(&self) -> Selection<E, bool> {
        self.select(|s| s.loading())
    }

    pub fn select_error(&self) -> Selection<E, Option<FetchError>> {
        self.select(|s| s.error().cloned())
    }

    pub fn select_active(&self) -> Selection<E, Option<E>> {
        self.select(|s| s.active().cloned())
    }

    pub fn select_active_id(&self) -> Selection<E, Option<E::Id>> {
        self.select(|s| s.active_id())
    }

    pub fn select_count(&self) -> Selection<E, usize> {
        self.select(|s| s.len())
    }
}

/// Push-based derived view of a store
///
/// The first [`next`](Selection::next) resolves immediately with the current
/// value; later calls wait until the projection yields a different value.
/// `next` returns `None` once the store is gone.
pub struct Selection<E: Entity, T> {
    rx: watch::Receiver<EntityState<E>>,
    project: Projection<E, T>,
    last: Option<T>,
}

impl<E: Entity, T: Clone + PartialEq> Selection<E, T> {
    fn new(rx: watch::Receiver<EntityState<E>>, project: Projection<E, T>) -> Self {
        Self {
            rx,
            project,
            last: None,
        }
    }

    /// Current value, without touching the change tracking
    pub fn get(&self) -> T {
        (self.project)(&self.rx.borrow())
    }

    /// Current value, marked as seen: the next [`next`](Selection::next) waits
    /// for a change
    pub fn take_current(&mut self) -> T {
        let value = (self.project)(&self.rx.borrow_and_update());
        self.last = Some(value.clone());
        value
    }

    /// Next distinct value. Cancel-safe.
    pub async fn next(&mut self) -> Option<T> {
        if self.last.is_none() {
            return Some(self.take_current());
        }
        loop {
            self.rx.changed().await.ok()?;
            let value = (self.project)(&self.rx.borrow_and_update());
            if self.last.as_ref() != Some(&value) {
                self.last = Some(value.clone());
                return Some(value);
            }
        }
    }

    pub fn into_stream(self) -> impl Stream<Item = T>
    where
        T: Send + 'static,
    {
        futures::stream::unfold(self, |mut selection| async move {
            let value = selection.next().await?;
            Some((value, selection))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use shared::Restaurant;

    fn restaurant(id: i64, name: &str) -> Restaurant {
        Restaurant {
            id,
            name: name.to_string(),
            address: String::new(),
            phone_number: None,
        }
    }

    #[tokio::test]
    async fn test_selection_emits_current_then_changes() {
        let store = EntityStore::new("restaurant");
        let query = EntityQuery::new(store.clone());
        let mut all = query.select_all();

        assert_eq!(all.next().await, Some(Vec::new()));

        store.set(vec![restaurant(1, "A")]);
        assert_eq!(all.next().await, Some(vec![restaurant(1, "A")]));
    }

    #[tokio::test]
    async fn test_selection_skips_unrelated_changes() {
        let store = EntityStore::new("restaurant");
        let query = EntityQuery::new(store.clone());
        let mut loading = query.select_loading();
        assert_eq!(loading.next().await, Some(false));

        // Only the entity list changes, loading stays false
        store.set(vec![restaurant(1, "A")]);
        store.set_loading(true);
        assert_eq!(loading.next().await, Some(true));
    }

    #[tokio::test]
    async fn test_select_active_follows_entities() {
        let store = EntityStore::new("restaurant");
        let query = EntityQuery::new(store.clone());
        let mut active = query.select_active();

        store.set_active(Some(2));
        assert_eq!(active.next().await, Some(None));
        assert_eq!(query.get_active_id(), Some(2));

        store.set(vec![restaurant(1, "A"), restaurant(2, "B")]);
        assert_eq!(active.next().await, Some(Some(restaurant(2, "B"))));
    }

    #[tokio::test]
    async fn test_selection_ends_with_store() {
        let store: EntityStore<Restaurant> = EntityStore::new("restaurant");
        let mut count = EntityQuery::new(store.clone()).select_count();
        assert_eq!(count.take_current(), 0);

        drop(store);
        assert_eq!(count.next().await, None);
    }

    #[tokio::test]
    async fn test_into_stream() {
        let store = EntityStore::new("restaurant");
        let query = EntityQuery::new(store.clone());
        let mut counts = Box::pin(query.select_count().into_stream());

        assert_eq!(counts.next().await, Some(0));
        store.set(vec![restaurant(1, "A"), restaurant(2, "B")]);
        assert_eq!(counts.next().await, Some(2));
    }

    #[test]
    fn test_snapshot_getters() {
        let store = EntityStore::new("restaurant");
        let query = EntityQuery::new(store.clone());
        store.set(vec![restaurant(1, "A"), restaurant(2, "B")]);
        store.set_active(Some(1));

        assert_eq!(query.get_count(), 2);
        assert!(query.has_entity(2));
        assert_eq!(query.get_entity(2).map(|r| r.name), Some("B".to_string()));
        assert_eq!(query.get_active().map(|r| r.id), Some(1));
        assert!(!query.is_loading());
        assert!(query.get_error().is_none());
    }
}
