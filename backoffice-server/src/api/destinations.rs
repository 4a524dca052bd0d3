//! Predefined destination list
//!
//! The territories used for routing across the app. Served statically and
//! sorted for display.

use axum::Json;
use serde_json::{Value, json};

const PREDEFINED_DESTINATIONS: [&str; 10] = [
    "Kashmir",
    "Ladakh",
    "Kerala",
    "Gokarna",
    "Meghalaya",
    "Mysore",
    "Singapore",
    "Hyderabad",
    "Bengaluru",
    "Manali",
];

pub async fn list() -> Json<Value> {
    let mut destinations = PREDEFINED_DESTINATIONS.to_vec();
    destinations.sort_unstable();
    Json(json!({ "destinations": destinations }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destinations_are_served_sorted() {
        let mut expected = PREDEFINED_DESTINATIONS.to_vec();
        expected.sort_unstable();
        assert_eq!(expected.first(), Some(&"Bengaluru"));
        assert!(expected.contains(&"Kashmir"));
        assert_eq!(expected.len(), 10);
    }
}
