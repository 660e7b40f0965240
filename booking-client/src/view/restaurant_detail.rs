use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use shared::{DiningTable, Restaurant};

use crate::route::{Navigator, Route};
use crate::service::{DiningTableService, RestaurantService};
use crate::store::{EntityQuery, Selection};
use crate::{FetchError, HttpClient};

/// `/restaurants/:id`: one restaurant and its table count
///
/// Opening makes the restaurant active and loads its tables; destroying the
/// view clears the active restaurant.
pub struct RestaurantDetailView<H: HttpClient + 'static> {
    restaurant_id: i64,
    restaurants: RestaurantService<H>,
    restaurant_query: EntityQuery<Restaurant>,
    table_query: EntityQuery<DiningTable>,
    navigator: Arc<dyn Navigator>,
    destroyed: AtomicBool,
}

impl<H: HttpClient + 'static> RestaurantDetailView<H> {
    pub fn open(
        restaurant_id: i64,
        restaurants: RestaurantService<H>,
        tables: &DiningTableService<H>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        tracing::info!(restaurant_id, "Restaurant detail - loading restaurant");
        restaurants.set_active_restaurant(restaurant_id);
        tables.load_for_restaurant(restaurant_id);
        Self {
            restaurant_id,
            restaurant_query: restaurants.query(),
            restaurants,
            table_query: tables.query(),
            navigator,
            destroyed: AtomicBool::new(false),
        }
    }

    /// Id from the route this view was opened with
    pub fn restaurant_id(&self) -> i64 {
        self.restaurant_id
    }

    pub fn restaurant(&self) -> Option<Restaurant> {
        self.restaurant_query.get_active()
    }

    pub fn select_restaurant(&self) -> Selection<Restaurant, Option<Restaurant>> {
        self.restaurant_query.select_active()
    }

    pub fn is_loading(&self) -> bool {
        self.restaurant_query.is_loading()
    }

    pub fn error(&self) -> Option<FetchError> {
        self.restaurant_query.get_error()
    }

    pub fn table_count(&self) -> usize {
        self.table_query.get_count()
    }

    pub fn select_table_count(&self) -> Selection<DiningTable, usize> {
        self.table_query.select_count()
    }

    // ========== Navigation ==========

    pub fn go_back(&self) {
        self.navigator.navigate(Route::Restaurants);
    }

    pub fn view_tables(&self) {
        match self.restaurant_query.get_active_id() {
            Some(id) => self.navigator.navigate(Route::RestaurantTables(id)),
            None => tracing::warn!("View tables requested without an active restaurant"),
        }
    }

    /// Edit form does not exist yet
    pub fn edit_restaurant(&self) {
        let restaurant_id = self.restaurant_query.get_active_id();
        tracing::info!(restaurant_id = ?restaurant_id, "Edit restaurant requested");
    }

    /// Bookings screen does not exist yet
    pub fn view_bookings(&self) {
        let restaurant_id = self.restaurant_query.get_active_id();
        tracing::info!(restaurant_id = ?restaurant_id, "View bookings requested");
    }

    /// Reports screen does not exist yet
    pub fn view_reports(&self) {
        tracing::info!("View reports requested");
    }

    pub fn destroy(&self) {
        if self.destroyed.swap(true, Ordering::SeqCst) {
            return;
        }
        self.restaurants.clear_active_restaurant();
        tracing::debug!(restaurant_id = self.restaurant_id, "Restaurant detail destroyed");
    }
}

impl<H: HttpClient + 'static> Drop for RestaurantDetailView<H> {
    fn drop(&mut self) {
        self.destroy();
    }
}
