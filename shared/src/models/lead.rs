//! Lead model — a prospective customer inquiry routed to staff

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A customer inquiry record.
///
/// The `assigned_employee_*` fields are a point-in-time snapshot taken when
/// the lead is assigned. They are not re-synced if the employee record later
/// changes. `assigned_employee_id` is set if and only if `assigned_at` is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub destination: String,
    pub travel_date: Option<NaiveDate>,
    pub travelers: i32,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub assigned_employee_id: Option<String>,
    pub assigned_employee_name: Option<String>,
    pub assigned_employee_email: Option<String>,
    pub assigned_at: Option<DateTime<Utc>>,
}

/// Create lead payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadCreate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub destination: String,
    pub travel_date: Option<NaiveDate>,
    #[serde(default = "default_travelers")]
    pub travelers: i32,
    pub notes: Option<String>,
}

fn default_travelers() -> i32 {
    1
}

/// Update lead payload (lifecycle fields only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadUpdate {
    pub status: Option<String>,
    pub notes: Option<String>,
}
