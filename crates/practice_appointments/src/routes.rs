// --- File: crates/practice_appointments/src/routes.rs ---

use crate::handlers::{
    available_slots_handler, blocked_dates_handler, booking_form_handler, home_handler,
    reschedule_handler, submit_booking_handler, update_status_handler,
    view_appointments_handler, BookingState,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Creates the router with the public pages, the admin actions and the
/// availability API.
pub fn routes(state: Arc<BookingState>) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/booking", get(booking_form_handler).post(submit_booking_handler))
        .route("/view-appointments", get(view_appointments_handler))
        .route("/update-status/{id}", post(update_status_handler))
        .route("/reschedule/{id}", post(reschedule_handler))
        .route("/api/blocked-dates", get(blocked_dates_handler))
        .route("/api/available-slots", get(available_slots_handler))
        .with_state(state)
}
