use std::sync::Arc;

use shared::{DiningTable, DiningTableResponse, Restaurant};
use tokio::task::JoinHandle;

use super::spawn_load;
use crate::HttpClient;
use crate::store::{EntityQuery, EntityStore};

/// Tables of one restaurant: `GET /api/tables/restaurant/{id}`
///
/// Each load replaces the whole table store, whatever restaurant it held.
pub struct DiningTableService<H> {
    store: EntityStore<DiningTable>,
    http: Arc<H>,
}

impl<H> Clone for DiningTableService<H> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            http: Arc::clone(&self.http),
        }
    }
}

impl<H: HttpClient + 'static> DiningTableService<H> {
    pub fn new(store: EntityStore<DiningTable>, http: Arc<H>) -> Self {
        Self { store, http }
    }

    pub fn load_for_restaurant(&self, restaurant_id: i64) -> JoinHandle<()> {
        spawn_load::<DiningTable, DiningTableResponse, H>(
            &self.store,
            &self.http,
            format!("/api/tables/restaurant/{}", restaurant_id),
        )
    }

    pub fn set_active_table(&self, table_id: i64) {
        tracing::debug!(table_id, "Setting active dining table");
        self.store.set_active(Some(table_id));
    }

    pub fn get_active_table(&self) -> Option<DiningTable> {
        self.store.with_state(|s| s.active().cloned())
    }

    pub fn clear_active_table(&self) {
        self.store.set_active(None);
    }

    pub fn reset_store(&self) {
        self.store.reset();
    }

    pub fn query(&self) -> EntityQuery<DiningTable> {
        EntityQuery::new(self.store.clone())
    }
}

/// Restaurant owning `table`, looked up in the restaurant store
///
/// `None` when that restaurant is not loaded.
pub fn owning_restaurant(
    table: &DiningTable,
    restaurants: &EntityQuery<Restaurant>,
) -> Option<Restaurant> {
    restaurants.get_entity(table.restaurant_id)
}
