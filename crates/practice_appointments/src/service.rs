// --- File: crates/practice_appointments/src/service.rs ---
//! Appointment lifecycle: booking, status changes and rescheduling.

use crate::logic::{self, is_slot};
use practice_common::models::{Appointment, AppointmentStatus, AppointmentUpdate, BookingRequest};
use practice_common::services::AppointmentNotifier;
use practice_common::{conflict, not_found, validation_error, PracticeError};
use practice_db::AppointmentRepository;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Books appointments and moves them through their lifecycle.
///
/// The slot check in [`book`](Self::book) and the insert that follows are
/// separate store calls, so two simultaneous bookings can both pass the
/// check.
pub struct AppointmentService<R> {
    repository: R,
    notifier: Option<Arc<dyn AppointmentNotifier>>,
}

impl<R: AppointmentRepository> AppointmentService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            notifier: None,
        }
    }

    /// Attach the notifier told about every new booking.
    pub fn with_notifier(mut self, notifier: Arc<dyn AppointmentNotifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Validate, check availability, store, then notify in the background.
    ///
    /// # Errors
    ///
    /// * `ValidationError` if a required field is missing or `time` is not a slot
    /// * `ConflictError` if the date is blocked or the slot is taken
    pub async fn book(&self, request: BookingRequest) -> Result<Appointment, PracticeError> {
        let new_appointment = request.validate()?;
        if !is_slot(&new_appointment.time) {
            return Err(validation_error(format!(
                "'{}' is not a bookable time",
                new_appointment.time
            )));
        }

        let existing = self.repository.list_all().await?;
        if logic::blocked_dates(&existing).contains(&new_appointment.date) {
            return Err(conflict(format!(
                "{} is fully booked",
                new_appointment.date
            )));
        }
        if !logic::available_slots(&existing, &new_appointment.date).contains(&new_appointment.time)
        {
            return Err(conflict(format!(
                "{} on {} is already taken",
                new_appointment.time, new_appointment.date
            )));
        }

        let appointment = self.repository.create(new_appointment).await?;
        info!(
            "Booked appointment {} for {} on {} at {}",
            appointment.id, appointment.name, appointment.date, appointment.time
        );

        self.dispatch_notification(&appointment);
        Ok(appointment)
    }

    /// Set the status of an existing appointment. Nothing else changes.
    pub async fn set_status(
        &self,
        id: i64,
        status: AppointmentStatus,
    ) -> Result<Appointment, PracticeError> {
        if !self
            .repository
            .update(id, AppointmentUpdate::status(status))
            .await?
        {
            return Err(not_found(format!("appointment {}", id)));
        }
        info!("Appointment {} marked {}", id, status);
        self.fetch(id).await
    }

    /// Move an appointment to a new date and time and mark it postponed.
    ///
    /// The new slot is not checked against availability.
    pub async fn reschedule(
        &self,
        id: i64,
        new_date: &str,
        new_time: &str,
    ) -> Result<Appointment, PracticeError> {
        let new_date = new_date.trim();
        let new_time = new_time.trim();
        if new_date.is_empty() || new_time.is_empty() {
            return Err(validation_error("new_date and new_time are required"));
        }

        let update = AppointmentUpdate::reschedule(new_date.to_string(), new_time.to_string());
        if !self.repository.update(id, update).await? {
            return Err(not_found(format!("appointment {}", id)));
        }
        info!("Appointment {} rescheduled to {} at {}", id, new_date, new_time);
        self.fetch(id).await
    }

    /// Every appointment, oldest first.
    pub async fn list(&self) -> Result<Vec<Appointment>, PracticeError> {
        Ok(self.repository.list_all().await?)
    }

    pub async fn blocked_dates(&self) -> Result<BTreeSet<String>, PracticeError> {
        let appointments = self.repository.list_all().await?;
        Ok(logic::blocked_dates(&appointments))
    }

    pub async fn available_slots(&self, date: &str) -> Result<Vec<String>, PracticeError> {
        let appointments = self.repository.list_all().await?;
        Ok(logic::available_slots(&appointments, date))
    }

    async fn fetch(&self, id: i64) -> Result<Appointment, PracticeError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| not_found(format!("appointment {}", id)))
    }

    // Detached: the booking result never waits on, or sees, delivery.
    fn dispatch_notification(&self, appointment: &Appointment) {
        let Some(notifier) = self.notifier.clone() else {
            debug!("No notifier configured, skipping notification");
            return;
        };
        let appointment = appointment.clone();
        tokio::spawn(async move {
            if !notifier.notify(&appointment).await {
                warn!("Notification for appointment {} was not delivered", appointment.id);
            }
        });
    }
}
