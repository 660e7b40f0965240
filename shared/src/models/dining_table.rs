//! Dining Table Model
//!
//! The API embeds the owning restaurant in every table. The client keeps only
//! the foreign key ([`DiningTable::restaurant_id`]); the full restaurant is
//! looked up on demand from the restaurant cache.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Restaurant;

/// Dining table status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiningTableStatus {
    Available,
    Maintenance,
    /// Any status this client does not know about yet
    #[serde(other)]
    Unknown,
}

impl DiningTableStatus {
    /// Human readable label, as shown in the back office
    pub fn display_name(&self) -> &'static str {
        match self {
            DiningTableStatus::Available => "Disponible",
            DiningTableStatus::Maintenance => "En maintenance",
            DiningTableStatus::Unknown => "Inconnu",
        }
    }
}

impl fmt::Display for DiningTableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Dining table entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTable {
    pub id: i64,
    pub capacity: i32,
    pub status: DiningTableStatus,
    pub restaurant_id: i64,
}

/// Dining table as returned by `GET /api/tables/restaurant/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTableResponse {
    pub id: i64,
    pub capacity: i32,
    pub status: DiningTableStatus,
    pub restaurant: Restaurant,
}

impl From<DiningTableResponse> for DiningTable {
    fn from(resp: DiningTableResponse) -> Self {
        Self {
            id: resp.id,
            capacity: resp.capacity,
            status: resp.status,
            restaurant_id: resp.restaurant.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_embedded_restaurant_to_foreign_key() {
        let json = r#"{
            "id": 7,
            "capacity": 4,
            "status": "AVAILABLE",
            "restaurant": {"id": 2, "name": "Chez Paul", "address": "2 Oak Ave", "phoneNumber": null}
        }"#;
        let resp: DiningTableResponse = serde_json::from_str(json).unwrap();
        let table = DiningTable::from(resp);
        assert_eq!(table.id, 7);
        assert_eq!(table.capacity, 4);
        assert_eq!(table.status, DiningTableStatus::Available);
        assert_eq!(table.restaurant_id, 2);
    }

    #[test]
    fn test_unknown_status_is_tolerated() {
        let status: DiningTableStatus = serde_json::from_str(r#""RESERVED""#).unwrap();
        assert_eq!(status, DiningTableStatus::Unknown);
        assert_eq!(DiningTableStatus::Maintenance.to_string(), "En maintenance");
    }
}
