//! Shared types for the Travloger back-office
//!
//! Common types used across crates: the unified error system, data models
//! for leads, employees, bookings and travel packages, and small utilities.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
