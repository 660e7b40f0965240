use std::sync::Arc;
use std::time::Duration;

use shared::Restaurant;

use super::ListView;
use crate::HttpClient;
use crate::route::{Navigator, Route};
use crate::service::RestaurantService;

/// `/restaurants`: searchable restaurant list
pub struct RestaurantListView<H> {
    list: ListView<Restaurant>,
    service: RestaurantService<H>,
    navigator: Arc<dyn Navigator>,
}

impl<H: HttpClient + 'static> RestaurantListView<H> {
    /// Build the view and load the restaurants
    pub fn open(
        service: RestaurantService<H>,
        navigator: Arc<dyn Navigator>,
        debounce: Duration,
    ) -> Self {
        let list = ListView::new("restaurant-list", service.query(), debounce);
        tracing::info!("Restaurant list - loading restaurants");
        service.load_restaurants();
        Self {
            list,
            service,
            navigator,
        }
    }

    pub fn list(&self) -> &ListView<Restaurant> {
        &self.list
    }

    /// Make `restaurant` active and open its detail screen
    pub fn select(&self, restaurant: &Restaurant) {
        tracing::info!(
            restaurant_id = restaurant.id,
            name = %restaurant.name,
            "Restaurant selected"
        );
        self.service.set_active_restaurant(restaurant.id);
        self.navigator.navigate(Route::RestaurantDetail(restaurant.id));
    }

    /// Booking flow is not available yet
    pub fn reserve(&self, restaurant: &Restaurant) {
        tracing::info!(
            restaurant_id = restaurant.id,
            name = %restaurant.name,
            "Reservation requested"
        );
    }

    pub fn destroy(&self) {
        self.list.destroy();
    }
}
