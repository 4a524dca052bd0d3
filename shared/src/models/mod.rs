//! Data models

pub mod booking;
pub mod employee;
pub mod lead;
pub mod travel_package;

pub use booking::{Booking, BookingCreate, BookingUpdate};
pub use employee::{Employee, EmployeeContact, EmployeeCreate, EmployeeUpdate};
pub use lead::{Lead, LeadCreate, LeadUpdate};
pub use travel_package::{TravelPackage, TravelPackageCreate};
