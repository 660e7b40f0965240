//! Application context
//!
//! Owns one store per vertical and the services and navigator built on top
//! of them. Nothing is global: two contexts never share state.

use std::sync::Arc;

use shared::{Customer, DiningTable, Restaurant};

use crate::route::{Navigator, NoopNavigator};
use crate::service::{CustomerService, DiningTableService, RestaurantService};
use crate::store::{EntityQuery, EntityStore};
use crate::view::{CustomerListView, DiningTableListView, RestaurantDetailView, RestaurantListView};
use crate::{ClientConfig, ClientResult, HttpClient, NetworkHttpClient};

pub struct AppContext<H> {
    config: ClientConfig,
    restaurants: RestaurantService<H>,
    customers: CustomerService<H>,
    tables: DiningTableService<H>,
    navigator: Arc<dyn Navigator>,
}

impl AppContext<NetworkHttpClient> {
    /// Context talking to the API at `config.base_url`, without navigation
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let http = Arc::new(config.build_http_client()?);
        Ok(Self::with_http(config, http, Arc::new(NoopNavigator)))
    }
}

impl<H: HttpClient + 'static> AppContext<H> {
    pub fn with_http(config: ClientConfig, http: Arc<H>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            restaurants: RestaurantService::new(EntityStore::new("restaurant"), Arc::clone(&http)),
            customers: CustomerService::new(EntityStore::new("customer"), Arc::clone(&http)),
            tables: DiningTableService::new(EntityStore::new("dining_table"), http),
            config,
            navigator,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn navigator(&self) -> Arc<dyn Navigator> {
        Arc::clone(&self.navigator)
    }

    // ========== Services & queries ==========

    pub fn restaurant_service(&self) -> &RestaurantService<H> {
        &self.restaurants
    }

    pub fn customer_service(&self) -> &CustomerService<H> {
        &self.customers
    }

    pub fn dining_table_service(&self) -> &DiningTableService<H> {
        &self.tables
    }

    pub fn restaurant_query(&self) -> EntityQuery<Restaurant> {
        self.restaurants.query()
    }

    pub fn customer_query(&self) -> EntityQuery<Customer> {
        self.customers.query()
    }

    pub fn dining_table_query(&self) -> EntityQuery<DiningTable> {
        self.tables.query()
    }

    // ========== Views ==========

    pub fn restaurant_list(&self) -> RestaurantListView<H> {
        RestaurantListView::open(
            self.restaurants.clone(),
            self.navigator(),
            self.config.search_debounce,
        )
    }

    pub fn customer_list(&self) -> CustomerListView<H> {
        CustomerListView::open(
            self.customers.clone(),
            self.navigator(),
            self.config.search_debounce,
        )
    }

    pub fn dining_table_list(&self, restaurant_id: i64) -> DiningTableListView<H> {
        DiningTableListView::open(
            restaurant_id,
            self.tables.clone(),
            &self.restaurants,
            self.config.search_debounce,
        )
    }

    pub fn restaurant_detail(&self, restaurant_id: i64) -> RestaurantDetailView<H> {
        RestaurantDetailView::open(
            restaurant_id,
            self.restaurants.clone(),
            &self.tables,
            self.navigator(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeHttpClient, RecordingNavigator, restaurants_json};

    fn context(http: FakeHttpClient) -> AppContext<FakeHttpClient> {
        AppContext::with_http(
            ClientConfig::default(),
            Arc::new(http),
            Arc::new(RecordingNavigator::default()),
        )
    }

    #[tokio::test]
    async fn test_contexts_are_isolated() {
        let http = FakeHttpClient::new();
        http.respond("/api/restaurants", restaurants_json());
        let first = context(http);
        let second = context(FakeHttpClient::new());

        first.restaurant_service().load_restaurants().await.unwrap();

        assert_eq!(first.restaurant_query().get_count(), 2);
        assert_eq!(second.restaurant_query().get_count(), 0);
        assert_eq!(first.customer_query().get_count(), 0);
    }

    #[test]
    fn test_network_context() {
        let ctx = AppContext::new(ClientConfig::default()).unwrap();
        assert_eq!(ctx.config().base_url, "http://localhost:8080");
        assert!(ctx.dining_table_query().get_all().is_empty());
    }
}
