//! Entity stores
//!
//! One store per vertical (restaurants, customers, dining tables). A store
//! is an ordered collection of entities, unique by id, plus `loading`,
//! `error` and `active_id` metadata. Every mutation is published through a
//! [`tokio::sync::watch`] channel so read facades re-derive on push.
//!
//! # Fetch generations
//!
//! Each fetch is started with [`EntityStore::begin_fetch`], which hands out a
//! [`FetchTicket`]. Only the ticket of the newest fetch may settle the store;
//! a response from a superseded fetch is dropped and logged instead of
//! overwriting newer data. `loading` therefore stays `true` until the newest
//! fetch settles.

mod query;

pub use query::{EntityQuery, Selection};

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use shared::{Customer, DiningTable, Restaurant};
use tokio::sync::watch;

use crate::{ClientResult, FetchError};

/// An entity that can live in an [`EntityStore`]
pub trait Entity: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {
    type Id: Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static;

    fn id(&self) -> Self::Id;
}

impl Entity for Restaurant {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Entity for Customer {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Entity for DiningTable {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

/// Snapshot of a store
#[derive(Debug, Clone)]
pub struct EntityState<E: Entity> {
    entities: Vec<E>,
    loading: bool,
    error: Option<FetchError>,
    active_id: Option<E::Id>,
    generation: u64,
}

impl<E: Entity> Default for EntityState<E> {
    fn default() -> Self {
        Self {
            entities: Vec::new(),
            loading: false,
            error: None,
            active_id: None,
            generation: 0,
        }
    }
}

impl<E: Entity> EntityState<E> {
    /// All entities, in store order
    pub fn entities(&self) -> &[E] {
        &self.entities
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    pub fn active_id(&self) -> Option<E::Id> {
        self.active_id
    }

    /// The entity whose id is the active id, if it is present
    pub fn active(&self) -> Option<&E> {
        self.active_id.and_then(|id| self.get(id))
    }

    pub fn get(&self, id: E::Id) -> Option<&E> {
        self.entities.iter().find(|e| e.id() == id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

struct StoreInner<E: Entity> {
    name: &'static str,
    state: watch::Sender<EntityState<E>>,
}

/// Handle to a per-vertical entity store
///
/// Clones share the same state. A store is created by the application
/// context and injected into the services and queries that use it.
pub struct EntityStore<E: Entity> {
    inner: Arc<StoreInner<E>>,
}

impl<E: Entity> Clone for EntityStore<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E: Entity> fmt::Debug for EntityStore<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.borrow();
        f.debug_struct("EntityStore")
            .field("name", &self.inner.name)
            .field("len", &state.len())
            .field("loading", &state.loading)
            .field("active_id", &state.active_id)
            .finish()
    }
}

impl<E: Entity> EntityStore<E> {
    pub fn new(name: &'static str) -> Self {
        let (state, _) = watch::channel(EntityState::default());
        Self {
            inner: Arc::new(StoreInner { name, state }),
        }
    }

    pub fn name(&self) -> &'static str {
        self.inner.name
    }

    /// Replace every entity. Nothing from the previous collection survives.
    ///
    /// Ids stay unique: for a repeated id the first position is kept and the
    /// last value wins.
    pub fn set(&self, entities: Vec<E>) {
        let entities = dedupe_by_id(entities);
        tracing::debug!(store = self.name(), count = entities.len(), "Store set");
        self.inner.state.send_modify(|state| state.entities = entities);
    }

    pub fn set_loading(&self, loading: bool) {
        self.inner
            .state
            .send_if_modified(|state| std::mem::replace(&mut state.loading, loading) != loading);
    }

    pub fn set_error(&self, error: impl Into<FetchError>) {
        let error = error.into();
        self.inner.state.send_modify(|state| state.error = Some(error));
    }

    pub fn clear_error(&self) {
        self.inner
            .state
            .send_if_modified(|state| state.error.take().is_some());
    }

    /// Point the active id at `id`, or clear it with `None`.
    ///
    /// The id is not checked against the store: an unknown id simply makes
    /// the active entity absent.
    pub fn set_active(&self, id: Option<E::Id>) {
        tracing::debug!(store = self.name(), active_id = ?id, "Store set active");
        self.inner
            .state
            .send_if_modified(|state| std::mem::replace(&mut state.active_id, id) != id);
    }

    /// Back to the initial state. In-flight fetches are superseded.
    pub fn reset(&self) {
        tracing::debug!(store = self.name(), "Store reset");
        self.inner.state.send_modify(|state| {
            *state = EntityState {
                generation: state.generation + 1,
                ..EntityState::default()
            };
        });
    }

    /// Run `f` against the current state without cloning it
    pub fn with_state<R>(&self, f: impl FnOnce(&EntityState<E>) -> R) -> R {
        f(&self.inner.state.borrow())
    }

    pub fn snapshot(&self) -> EntityState<E> {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<EntityState<E>> {
        self.inner.state.subscribe()
    }

    /// Start a fetch: `loading` goes up, the previous error is cleared and
    /// any fetch still in flight is superseded.
    pub fn begin_fetch(&self) -> FetchTicket<E> {
        let mut generation = 0;
        self.inner.state.send_modify(|state| {
            state.generation += 1;
            state.loading = true;
            state.error = None;
            generation = state.generation;
        });
        FetchTicket {
            store: self.clone(),
            generation,
            settled: false,
        }
    }

    fn finish_fetch(&self, generation: u64, outcome: Option<ClientResult<Vec<E>>>) -> bool {
        let abandoned = outcome.is_none();
        let mut latest = 0;
        let applied = self.inner.state.send_if_modified(|state| {
            latest = state.generation;
            if state.generation != generation {
                return false;
            }
            match outcome {
                Some(Ok(entities)) => {
                    state.entities = dedupe_by_id(entities);
                    state.error = None;
                }
                Some(Err(error)) => state.error = Some(FetchError::new(error)),
                None => {}
            }
            state.loading = false;
            true
        });
        if !applied && abandoned {
            tracing::debug!(
                store = self.name(),
                generation,
                latest,
                "Abandoned fetch was already superseded"
            );
        } else if !applied {
            tracing::warn!(
                store = self.name(),
                generation,
                latest,
                "Discarding result of superseded fetch"
            );
        }
        applied
    }
}

/// Right to settle one fetch on a store
///
/// Dropping an unsettled ticket (task aborted or panicked) still lowers
/// `loading` if the ticket is the newest one.
#[must_use = "a fetch ticket settles the store; drop it only to abandon the fetch"]
pub struct FetchTicket<E: Entity> {
    store: EntityStore<E>,
    generation: u64,
    settled: bool,
}

impl<E: Entity> FetchTicket<E> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Apply the fetch outcome. Returns `false` when a newer fetch has
    /// started since, in which case the store is left untouched.
    pub fn settle(mut self, result: ClientResult<Vec<E>>) -> bool {
        self.settled = true;
        self.store.finish_fetch(self.generation, Some(result))
    }
}

impl<E: Entity> Drop for FetchTicket<E> {
    fn drop(&mut self) {
        if !self.settled {
            self.store.finish_fetch(self.generation, None);
        }
    }
}

fn dedupe_by_id<E: Entity>(entities: Vec<E>) -> Vec<E> {
    let mut index: HashMap<E::Id, usize> = HashMap::with_capacity(entities.len());
    let mut out: Vec<E> = Vec::with_capacity(entities.len());
    for entity in entities {
        match index.entry(entity.id()) {
            Entry::Occupied(slot) => out[*slot.get()] = entity,
            Entry::Vacant(slot) => {
                slot.insert(out.len());
                out.push(entity);
            }
        }
    }
    out
}
