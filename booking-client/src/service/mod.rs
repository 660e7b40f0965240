//! Fetch services
//!
//! One service per vertical. A `load_*` call marks the store as loading,
//! spawns the GET and returns at once; the outcome lands in the store and is
//! observed through its query. The returned [`JoinHandle`] may be dropped.

mod customer;
mod dining_table;
mod restaurant;

pub use customer::CustomerService;
pub use dining_table::{DiningTableService, owning_restaurant};
pub use restaurant::RestaurantService;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::task::JoinHandle;

use crate::HttpClient;
use crate::store::{Entity, EntityStore};

/// Fetch a collection at `path` into `store`, decoding rows as `R`
pub(crate) fn spawn_load<E, R, H>(
    store: &EntityStore<E>,
    http: &Arc<H>,
    path: String,
) -> JoinHandle<()>
where
    E: Entity,
    R: DeserializeOwned + Into<E> + Send + 'static,
    H: HttpClient + 'static,
{
    let ticket = store.begin_fetch();
    let http = Arc::clone(http);
    let store_name = store.name();
    tracing::debug!(
        store = store_name,
        path = %path,
        generation = ticket.generation(),
        "Fetch started"
    );

    tokio::spawn(async move {
        let result = http
            .get::<Vec<R>>(&path)
            .await
            .map(|rows| rows.into_iter().map(Into::into).collect::<Vec<E>>());

        match &result {
            Ok(entities) => tracing::debug!(
                store = store_name,
                path = %path,
                count = entities.len(),
                "Fetch succeeded"
            ),
            Err(e) => tracing::warn!(
                store = store_name,
                path = %path,
                error = %e,
                "Fetch failed"
            ),
        }
        ticket.settle(result);
    })
}
