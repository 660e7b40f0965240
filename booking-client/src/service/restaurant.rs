use std::sync::Arc;

use shared::Restaurant;
use tokio::task::JoinHandle;

use super::spawn_load;
use crate::HttpClient;
use crate::store::{EntityQuery, EntityStore};

/// Restaurant list: `GET /api/restaurants`
pub struct RestaurantService<H> {
    store: EntityStore<Restaurant>,
    http: Arc<H>,
}

impl<H> Clone for RestaurantService<H> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            http: Arc::clone(&self.http),
        }
    }
}

impl<H: HttpClient + 'static> RestaurantService<H> {
    pub fn new(store: EntityStore<Restaurant>, http: Arc<H>) -> Self {
        Self { store, http }
    }

    pub fn load_restaurants(&self) -> JoinHandle<()> {
        spawn_load::<Restaurant, Restaurant, H>(&self.store, &self.http, "/api/restaurants".into())
    }

    pub fn set_active_restaurant(&self, id: i64) {
        self.store.set_active(Some(id));
    }

    pub fn clear_active_restaurant(&self) {
        self.store.set_active(None);
    }

    pub fn reset_store(&self) {
        self.store.reset();
    }

    pub fn query(&self) -> EntityQuery<Restaurant> {
        EntityQuery::new(self.store.clone())
    }
}
