//! Travel package model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A sellable itinerary. `route` holds the stored city/location used for
/// exact matching; `destination` is the display region.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct TravelPackage {
    pub id: String,
    pub name: String,
    pub destination: String,
    pub route: Option<String>,
    pub duration_days: Option<i32>,
    pub price: Decimal,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Create package payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelPackageCreate {
    pub name: String,
    pub destination: String,
    pub route: Option<String>,
    pub duration_days: Option<i32>,
    pub price: Decimal,
    pub description: Option<String>,
}
