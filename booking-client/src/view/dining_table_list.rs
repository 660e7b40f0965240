use std::time::Duration;

use shared::{DiningTable, Restaurant};

use super::ListView;
use crate::HttpClient;
use crate::service::{DiningTableService, RestaurantService, owning_restaurant};
use crate::store::{EntityQuery, Selection};

/// `/restaurants/:id/tables`: tables of one restaurant, searchable by
/// capacity
pub struct DiningTableListView<H> {
    restaurant_id: i64,
    list: ListView<DiningTable>,
    service: DiningTableService<H>,
    restaurants: EntityQuery<Restaurant>,
}

impl<H: HttpClient + 'static> DiningTableListView<H> {
    /// Build the view for the restaurant named by the route
    ///
    /// The restaurant becomes active and its tables are loaded, whatever was
    /// active before.
    pub fn open(
        restaurant_id: i64,
        service: DiningTableService<H>,
        restaurants: &RestaurantService<H>,
        debounce: Duration,
    ) -> Self {
        let list = ListView::new("dining-table-list", service.query(), debounce);
        tracing::info!(restaurant_id, "Dining table list - loading tables");
        restaurants.set_active_restaurant(restaurant_id);
        service.load_for_restaurant(restaurant_id);
        Self {
            restaurant_id,
            list,
            service,
            restaurants: restaurants.query(),
        }
    }

    /// Id from the route this view was opened with
    pub fn restaurant_id(&self) -> i64 {
        self.restaurant_id
    }

    pub fn list(&self) -> &ListView<DiningTable> {
        &self.list
    }

    pub fn active_restaurant(&self) -> Option<Restaurant> {
        self.restaurants.get_active()
    }

    pub fn select_active_restaurant(&self) -> Selection<Restaurant, Option<Restaurant>> {
        self.restaurants.select_active()
    }

    pub fn restaurant_of(&self, table: &DiningTable) -> Option<Restaurant> {
        owning_restaurant(table, &self.restaurants)
    }

    pub fn select_table(&self, table: &DiningTable) {
        let restaurant = self.restaurant_of(table).map(|r| r.name);
        tracing::info!(table_id = table.id, restaurant = ?restaurant, "Dining table selected");
        self.service.set_active_table(table.id);
    }

    /// Booking flow is not available yet
    pub fn make_reservation(&self, table: &DiningTable) {
        let restaurant = self.restaurant_of(table).map(|r| r.name);
        tracing::info!(table_id = table.id, restaurant = ?restaurant, "Reservation requested");
    }

    pub fn destroy(&self) {
        self.list.destroy();
    }
}
