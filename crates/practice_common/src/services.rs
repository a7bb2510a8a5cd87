// --- File: crates/practice_common/src/services.rs ---
//! Service abstractions for the outbound side of a booking.
//!
//! The booking flow only knows [`AppointmentNotifier`]; the mailer crate
//! implements it on top of a [`NotificationService`] transport.

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

use crate::models::Appointment;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A trait for message delivery.
pub trait NotificationService: Send + Sync {
    /// Error type returned by notification service operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Send a plain-text email.
    fn send_email(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> BoxFuture<'_, NotificationResult, Self::Error>;
}

/// Told about every appointment that has just been booked.
///
/// Implementations must not fail: delivery problems are logged and reported
/// through the returned flag, which callers are free to ignore.
pub trait AppointmentNotifier: Send + Sync {
    fn notify<'a>(
        &'a self,
        appointment: &'a Appointment,
    ) -> Pin<Box<dyn Future<Output = bool> + Send + 'a>>;
}

/// Represents the result of a notification operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationResult {
    /// The ID the transport assigned to the message.
    pub id: String,
    /// The status reported by the transport.
    pub status: String,
}
