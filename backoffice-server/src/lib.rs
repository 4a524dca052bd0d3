//! backoffice-server — Travloger back-office service
//!
//! Long-running service that:
//! - Serves the admin panel / employee portal CRUD API (leads, employees,
//!   bookings, travel packages) backed by PostgreSQL
//! - Runs the lead-to-employee assignment workflow with a best-effort
//!   customer notification
//! - Talks to two external collaborators over HTTP: the notification
//!   sender (email service) and the auth provider's admin API

pub mod api;
pub mod assignment;
pub mod auth_provider;
pub mod config;
pub mod db;
pub mod error;
pub mod notify;
pub mod state;

pub use config::Config;
pub use state::AppState;
