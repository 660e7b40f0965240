//! Client-side routes and navigation

use std::fmt;
use std::str::FromStr;

use crate::ClientError;

/// Navigable screens of the back office
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/restaurants`
    Restaurants,
    /// `/restaurants/:id`
    RestaurantDetail(i64),
    /// `/restaurants/:id/tables`
    RestaurantTables(i64),
    /// `/customers`
    Customers,
    /// `/customers/:id`
    CustomerDetail(i64),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Restaurants => write!(f, "/restaurants"),
            Route::RestaurantDetail(id) => write!(f, "/restaurants/{}", id),
            Route::RestaurantTables(id) => write!(f, "/restaurants/{}/tables", id),
            Route::Customers => write!(f, "/customers"),
            Route::CustomerDetail(id) => write!(f, "/customers/{}", id),
        }
    }
}

impl FromStr for Route {
    type Err = ClientError;

    /// The empty path redirects to the restaurant list
    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = path
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();
        let id = |raw: &str| {
            raw.parse::<i64>()
                .map_err(|_| ClientError::InvalidRoute(path.to_string()))
        };

        match segments.as_slice() {
            [] | ["restaurants"] => Ok(Route::Restaurants),
            ["restaurants", raw] => Ok(Route::RestaurantDetail(id(*raw)?)),
            ["restaurants", raw, "tables"] => Ok(Route::RestaurantTables(id(*raw)?)),
            ["customers"] => Ok(Route::Customers),
            ["customers", raw] => Ok(Route::CustomerDetail(id(*raw)?)),
            _ => Err(ClientError::InvalidRoute(path.to_string())),
        }
    }
}

/// Performs navigation on behalf of views
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Navigator for headless use: only logs
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&self, route: Route) {
        tracing::info!(route = %route, "Navigate");
    }
}
