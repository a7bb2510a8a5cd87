// --- File: crates/practice_appointments/src/logic.rs ---
use practice_common::models::{Appointment, AppointmentStatus};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// A date is blocked once this many scheduled appointments fall on it.
pub const DAILY_CAP: usize = 3;

/// The bookable hourly slots, in display order.
pub const TIME_SLOTS: [&str; 9] = [
    "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00", "17:00",
];

/// Whether `time` is one of the bookable slot labels.
pub fn is_slot(time: &str) -> bool {
    TIME_SLOTS.contains(&time)
}

// --- Data Structures ---
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct AvailabilityQuery {
    /// Date in YYYY-MM-DD format
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2026-02-11"))]
    pub date: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct AvailableSlotsResponse {
    pub slots: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BlockedDatesResponse {
    pub blocked_dates: Vec<String>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct UpdateStatusRequest {
    #[cfg_attr(feature = "openapi", schema(example = "completed"))]
    pub status: String,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct RescheduleRequest {
    #[cfg_attr(feature = "openapi", schema(example = "2026-03-01"))]
    pub new_date: String,
    #[cfg_attr(feature = "openapi", schema(example = "10:00"))]
    pub new_time: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct AppointmentResponse {
    pub success: bool,
    pub appointment: Appointment,
}

#[derive(Deserialize, Debug, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct AdminQuery {
    pub password: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct HomeQuery {
    pub booked: Option<String>,
}

// --- Availability Logic ---

/// Dates whose scheduled appointments have reached [`DAILY_CAP`].
///
/// Only `Scheduled` appointments count; postponed, completed and no-show
/// rows free their day.
pub fn blocked_dates(appointments: &[Appointment]) -> BTreeSet<String> {
    let mut per_date: HashMap<&str, usize> = HashMap::new();
    for appointment in appointments
        .iter()
        .filter(|a| a.status == AppointmentStatus::Scheduled)
    {
        *per_date.entry(appointment.date.as_str()).or_insert(0) += 1;
    }

    per_date
        .into_iter()
        .filter(|(_, count)| *count >= DAILY_CAP)
        .map(|(date, _)| date.to_string())
        .collect()
}

/// The slots of [`TIME_SLOTS`] not held by a scheduled appointment on `date`.
pub fn available_slots(appointments: &[Appointment], date: &str) -> Vec<String> {
    let taken: Vec<&str> = appointments
        .iter()
        .filter(|a| a.status == AppointmentStatus::Scheduled && a.date == date)
        .map(|a| a.time.as_str())
        .collect();

    TIME_SLOTS
        .iter()
        .filter(|slot| !taken.contains(*slot))
        .map(|slot| slot.to_string())
        .collect()
}
