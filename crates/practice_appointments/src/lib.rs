// --- File: crates/practice_appointments/src/lib.rs ---
// Declare modules within this crate
pub mod doc;
pub mod handlers;
pub mod logic;
#[cfg(test)]
mod logic_proptest;
#[cfg(test)]
mod logic_test;
pub mod pages;
pub mod routes;
pub mod service;

pub use handlers::BookingState;
pub use routes::routes;
pub use service::AppointmentService;
