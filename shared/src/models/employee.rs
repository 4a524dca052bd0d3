//! Employee model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A staff record. `destination` is the single preferred territory used as
/// a routing/filter key. Email and phone are unique across employees.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub destination: String,
    pub role: String,
    pub status: String,
    /// Back-reference into the external auth provider, if a user was created
    pub auth_user_id: Option<String>,
    pub is_first_login: bool,
    pub created_at: DateTime<Utc>,
}

/// Contact projection read by the assignment flow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct EmployeeContact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Create employee payload
///
/// The password is forwarded to the external auth provider and the
/// credentials email; it is never persisted here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub destination: String,
    #[serde(default = "default_role")]
    pub role: String,
    pub password: String,
}

fn default_role() -> String {
    "employee".to_string()
}

/// Update employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub destination: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
}
