// File: crates/practice_appointments/src/doc.rs

#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::logic::{
    AppointmentResponse, AvailableSlotsResponse, BlockedDatesResponse, RescheduleRequest,
    UpdateStatusRequest,
};
use practice_common::models::{Appointment, AppointmentStatus};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::view_appointments_handler,
        crate::handlers::update_status_handler,
        crate::handlers::reschedule_handler,
        crate::handlers::blocked_dates_handler,
        crate::handlers::available_slots_handler
    ),
    components(
        schemas(
            Appointment,
            AppointmentStatus,
            AppointmentResponse,
            AvailableSlotsResponse,
            BlockedDatesResponse,
            RescheduleRequest,
            UpdateStatusRequest
        )
    ),
    tags(
        (name = "Availability", description = "Blocked dates and open slots"),
        (name = "Admin", description = "Appointment administration")
    )
)]
pub struct BookingApiDoc;
