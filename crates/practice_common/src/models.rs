// --- File: crates/practice_common/src/models.rs ---

// Appointment records and the payloads that create or change them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{validation_error, PracticeError};

/// Lifecycle state of an appointment.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Postponed,
    Completed,
    NoShow,
}

impl AppointmentStatus {
    /// Wire and storage form.
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Postponed => "postponed",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::NoShow => "no-show",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = PracticeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "scheduled" => Ok(AppointmentStatus::Scheduled),
            "postponed" => Ok(AppointmentStatus::Postponed),
            "completed" => Ok(AppointmentStatus::Completed),
            "no-show" => Ok(AppointmentStatus::NoShow),
            other => Err(validation_error(format!("unknown status '{}'", other))),
        }
    }
}

/// A stored appointment.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    /// Assigned by the store on creation
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub id_number: Option<String>,
    pub service: String,
    /// Calendar date as entered, normally `YYYY-MM-DD`
    pub date: String,
    /// One of the hourly slot labels, e.g. `"14:00"`
    pub time: String,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

/// Raw booking input as submitted by the form.
///
/// Every field is optional here so a missing one can be reported by name.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub id_number: Option<String>,
    pub service: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

/// Validated fields for a new appointment.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAppointment {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub id_number: Option<String>,
    pub service: String,
    pub date: String,
    pub time: String,
}

fn required(value: Option<String>, field: &str) -> Result<String, PracticeError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(validation_error(format!("{} is required", field))),
    }
}

impl BookingRequest {
    /// Checks that name, email, phone, service, date and time are present.
    ///
    /// Values are trimmed; a blank value counts as missing. A blank
    /// `id_number` becomes `None`.
    pub fn validate(self) -> Result<NewAppointment, PracticeError> {
        Ok(NewAppointment {
            name: required(self.name, "name")?,
            email: required(self.email, "email")?,
            phone: required(self.phone, "phone")?,
            id_number: self
                .id_number
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            service: required(self.service, "service")?,
            date: required(self.date, "date")?,
            time: required(self.time, "time")?,
        })
    }
}

/// Partial update applied by the record store. `None` leaves a column as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentUpdate {
    pub date: Option<String>,
    pub time: Option<String>,
    pub status: Option<AppointmentStatus>,
}

impl AppointmentUpdate {
    pub fn status(status: AppointmentStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Move to a new date and time; always marks the appointment postponed.
    pub fn reschedule(date: String, time: String) -> Self {
        Self {
            date: Some(date),
            time: Some(time),
            status: Some(AppointmentStatus::Postponed),
        }
    }
}
