//! Headless views
//!
//! Each view mirrors one screen of the back office: it triggers the fetch it
//! needs when opened, exposes read-only state for rendering and implements
//! the screen's actions. Rendering itself is left to the embedding UI.

mod customer_list;
mod dining_table_list;
mod list;
mod restaurant_detail;
mod restaurant_list;

pub use customer_list::CustomerListView;
pub use dining_table_list::DiningTableListView;
pub use list::ListView;
pub use restaurant_detail::RestaurantDetailView;
pub use restaurant_list::RestaurantListView;
