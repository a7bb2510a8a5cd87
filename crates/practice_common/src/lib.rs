// --- File: crates/practice_common/src/lib.rs ---

// Declare modules within this crate
pub mod models;   // Appointment records and booking payloads
pub mod error;    // Error handling
pub mod http;     // HTTP error mapping
pub mod services; // Service abstractions
pub mod logging;  // Logging utilities

// Re-export error types and utilities for easier access
pub use error::{
    PracticeError,
    HttpStatusCode,
    config_error,
    validation_error,
    not_found,
    conflict,
    auth_error,
    external_service_error,
};

// Re-export HTTP utilities for easier access
pub use http::{IntoHttpResponse, handle_json_result};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level, log_result};

pub use models::{Appointment, AppointmentStatus, AppointmentUpdate, BookingRequest, NewAppointment};
