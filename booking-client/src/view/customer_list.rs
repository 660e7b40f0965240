use std::sync::Arc;
use std::time::Duration;

use shared::Customer;

use super::ListView;
use crate::HttpClient;
use crate::route::{Navigator, Route};
use crate::service::CustomerService;

/// `/customers`: customer list searchable by name, email or phone
pub struct CustomerListView<H> {
    list: ListView<Customer>,
    service: CustomerService<H>,
    navigator: Arc<dyn Navigator>,
}

impl<H: HttpClient + 'static> CustomerListView<H> {
    /// Build the view and load the customers
    pub fn open(
        service: CustomerService<H>,
        navigator: Arc<dyn Navigator>,
        debounce: Duration,
    ) -> Self {
        let list = ListView::new("customer-list", service.query(), debounce);
        tracing::info!("Customer list - loading customers");
        service.load_customers();
        Self {
            list,
            service,
            navigator,
        }
    }

    pub fn list(&self) -> &ListView<Customer> {
        &self.list
    }

    pub fn select(&self, customer: &Customer) {
        tracing::info!(customer_id = customer.id, name = %customer.name, "Customer selected");
        self.service.set_active_customer(customer.id);
        self.navigator.navigate(Route::CustomerDetail(customer.id));
    }

    /// Customer creation form does not exist yet
    pub fn add_customer(&self) {
        tracing::info!("Add new customer requested");
    }

    /// Whether the store holds any customer, regardless of the search term
    pub fn has_customers(&self) -> bool {
        self.list.query().get_count() > 0
    }

    pub fn has_no_customers(&self) -> bool {
        !self.has_customers()
    }

    pub fn destroy(&self) {
        self.list.destroy();
    }
}
