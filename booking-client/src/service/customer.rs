use std::sync::Arc;

use shared::Customer;
use tokio::task::JoinHandle;

use super::spawn_load;
use crate::HttpClient;
use crate::store::{EntityQuery, EntityStore};

/// Customer list: `GET /api/customers`
pub struct CustomerService<H> {
    store: EntityStore<Customer>,
    http: Arc<H>,
}

impl<H> Clone for CustomerService<H> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            http: Arc::clone(&self.http),
        }
    }
}

impl<H: HttpClient + 'static> CustomerService<H> {
    pub fn new(store: EntityStore<Customer>, http: Arc<H>) -> Self {
        Self { store, http }
    }

    pub fn load_customers(&self) -> JoinHandle<()> {
        spawn_load::<Customer, Customer, H>(&self.store, &self.http, "/api/customers".into())
    }

    pub fn set_active_customer(&self, id: i64) {
        tracing::debug!(customer_id = id, "Setting active customer");
        self.store.set_active(Some(id));
    }

    pub fn get_active_customer(&self) -> Option<Customer> {
        self.store.with_state(|s| s.active().cloned())
    }

    pub fn clear_active_customer(&self) {
        self.store.set_active(None);
    }

    pub fn reset_store(&self) {
        self.store.reset();
    }

    pub fn query(&self) -> EntityQuery<Customer> {
        EntityQuery::new(self.store.clone())
    }
}
