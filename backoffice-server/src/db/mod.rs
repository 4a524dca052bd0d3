//! Database access layer

pub mod bookings;
pub mod employees;
pub mod leads;
pub mod packages;
