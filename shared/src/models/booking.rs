//! Booking model

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A confirmed or pending trip booking.
///
/// The `razorpay_*` fields are opaque pass-through values produced by the
/// external payment tooling; this service stores and returns them verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Booking {
    pub id: String,
    pub lead_id: Option<String>,
    pub customer: String,
    pub email: String,
    pub phone: Option<String>,
    pub package_id: Option<String>,
    pub package_name: String,
    pub destination: String,
    pub travelers: i32,
    pub amount: Decimal,
    pub status: String,
    pub payment_status: String,
    pub travel_date: Option<NaiveDate>,
    pub assigned_agent: Option<String>,
    pub itinerary_details: Option<serde_json::Value>,
    pub razorpay_order_id: Option<String>,
    pub razorpay_payment_link: Option<String>,
    pub razorpay_payment_id: Option<String>,
    pub booking_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create booking payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCreate {
    pub lead_id: Option<String>,
    pub customer: String,
    pub email: String,
    pub phone: Option<String>,
    pub package_id: Option<String>,
    pub package_name: String,
    pub destination: String,
    #[serde(default = "default_travelers")]
    pub travelers: i32,
    pub amount: Decimal,
    pub travel_date: Option<NaiveDate>,
    pub assigned_agent: Option<String>,
    pub itinerary_details: Option<serde_json::Value>,
    pub razorpay_order_id: Option<String>,
    pub razorpay_payment_link: Option<String>,
}

fn default_travelers() -> i32 {
    1
}

/// Update booking payload (id travels in the body, as the UI sends it)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingUpdate {
    #[serde(default)]
    pub id: String,
    pub status: Option<String>,
    pub payment_status: Option<String>,
    pub razorpay_payment_id: Option<String>,
}
