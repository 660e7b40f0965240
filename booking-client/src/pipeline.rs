//! Debounced filtered-list pipeline
//!
//! Combines the entity list of a store with a user search term:
//!
//! ```text
//! store ──▶ select_all() ─────────────────────────────┐
//!                                                     ├──▶ FilterState ──▶ watch<FilteredView>
//! on_search() ──▶ debounce(window) ──▶ distinct ──────┘
//! ```
//!
//! The term side is seeded with `""`, so the first view is available as soon
//! as the pipeline is built. Entity changes re-filter immediately; term
//! changes wait until no new input arrived for the debounce window. The
//! background task runs until [`FilteredList::destroy`] (or drop).

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::filter::{FilterState, FilteredView, Searchable};
use crate::store::{Entity, EntityQuery, Selection};

/// Live, filtered view of a store driven by a debounced search term
pub struct FilteredList<E: Entity> {
    name: &'static str,
    search_tx: watch::Sender<String>,
    view_rx: watch::Receiver<FilteredView<E>>,
    cancel: CancellationToken,
    destroyed: AtomicBool,
    task: JoinHandle<()>,
}

impl<E: Entity + Searchable> FilteredList<E> {
    /// Build the pipeline and spawn its task. Must be called within a tokio
    /// runtime.
    pub fn spawn(name: &'static str, query: &EntityQuery<E>, debounce: Duration) -> Self {
        let mut all = query.select_all();
        let state = FilterState::new(all.take_current());
        let (view_tx, view_rx) = watch::channel(state.view());
        let (search_tx, search_rx) = watch::channel(String::new());
        let cancel = CancellationToken::new();

        let task = tokio::spawn(run(
            name,
            all,
            search_rx,
            state,
            view_tx,
            debounce,
            cancel.clone(),
        ));
        tracing::debug!(
            view = name,
            debounce_ms = debounce.as_millis() as u64,
            "Filter pipeline started"
        );

        Self {
            name,
            search_tx,
            view_rx,
            cancel,
            destroyed: AtomicBool::new(false),
            task,
        }
    }
}

impl<E: Entity> FilteredList<E> {
    /// Push raw user input. Filtering happens after the debounce window.
    pub fn on_search(&self, term: impl Into<String>) {
        let term = term.into();
        tracing::trace!(view = self.name, term = %term, "Search input");
        self.search_tx.send_replace(term);
    }

    /// Latest raw input, before debouncing
    pub fn current_search_term(&self) -> String {
        self.search_tx.borrow().clone()
    }

    /// Current filtered snapshot
    pub fn visible(&self) -> FilteredView<E> {
        self.view_rx.borrow().clone()
    }

    /// Receiver notified on every recomputation
    pub fn subscribe(&self) -> watch::Receiver<FilteredView<E>> {
        self.view_rx.clone()
    }

    /// Stop the pipeline. Idempotent; only the first call has an effect.
    pub fn destroy(&self) {
        if self.destroyed.swap(true, Ordering::SeqCst) {
            return;
        }
        self.cancel.cancel();
        tracing::debug!(view = self.name, "Filter pipeline destroyed");
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed.load(Ordering::SeqCst)
    }

    /// Whether the background task is still alive
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl<E: Entity> Drop for FilteredList<E> {
    fn drop(&mut self) {
        self.destroy();
    }
}

async fn run<E: Entity + Searchable>(
    name: &'static str,
    mut all: Selection<E, Vec<E>>,
    mut search_rx: watch::Receiver<String>,
    mut state: FilterState<E>,
    view_tx: watch::Sender<FilteredView<E>>,
    debounce: Duration,
    cancel: CancellationToken,
) {
    let mut pending: Option<(String, Instant)> = None;
    let mut store_open = true;

    loop {
        let deadline = pending.as_ref().map(|(_, at)| *at);
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            changed = search_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                // Each keystroke restarts the window
                let term = search_rx.borrow_and_update().clone();
                pending = Some((term, Instant::now() + debounce));
            }
            _ = sleep_until(deadline) => {
                let Some((term, _)) = pending.take() else { continue };
                match state.apply_term(&term) {
                    Some(view) => publish(name, &view_tx, &state, view),
                    None => tracing::trace!(view = name, term = %term, "Search term unchanged"),
                }
            }
            next = all.next(), if store_open => match next {
                Some(entities) => {
                    let view = state.apply_entities(entities);
                    publish(name, &view_tx, &state, view);
                }
                None => store_open = false,
            },
        }
    }

    tracing::debug!(view = name, "Filter pipeline stopped");
}

fn publish<E: Entity + Searchable>(
    name: &'static str,
    view_tx: &watch::Sender<FilteredView<E>>,
    state: &FilterState<E>,
    view: FilteredView<E>,
) {
    tracing::debug!(
        view = name,
        total = state.total(),
        visible = view.items.len(),
        term = %state.term(),
        revision = view.revision,
        "Filtering"
    );
    view_tx.send_replace(view);
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending().await,
    }
}
