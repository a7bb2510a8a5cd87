//! Repository for appointments
//!
//! The record store behind the booking flow: create, fetch, list and
//! partially update appointment rows. Rows are never deleted.

use crate::error::DbError;
use practice_common::models::{Appointment, AppointmentUpdate, NewAppointment};

/// Repository for appointments
///
/// Every operation is atomic on its own; none of them are combined into a
/// transaction.
pub trait AppointmentRepository: Send + Sync {
    /// Create the `appointments` table if it does not exist yet.
    fn init_schema(&self) -> impl std::future::Future<Output = Result<(), DbError>> + Send;

    /// Store a new appointment.
    ///
    /// The store assigns the id, sets the status to `scheduled` and stamps
    /// `created_at`. Returns the stored record.
    fn create(
        &self,
        appointment: NewAppointment,
    ) -> impl std::future::Future<Output = Result<Appointment, DbError>> + Send;

    /// Fetch one appointment by id.
    fn get(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<Option<Appointment>, DbError>> + Send;

    /// All appointments, oldest id first.
    fn list_all(&self) -> impl std::future::Future<Output = Result<Vec<Appointment>, DbError>> + Send;

    /// Apply a partial update.
    ///
    /// # Returns
    ///
    /// `true` if a row with that id existed, `false` otherwise
    fn update(
        &self,
        id: i64,
        update: AppointmentUpdate,
    ) -> impl std::future::Future<Output = Result<bool, DbError>> + Send;

    /// Drop and recreate the table. Maintenance only.
    fn reset(&self) -> impl std::future::Future<Output = Result<(), DbError>> + Send;
}
