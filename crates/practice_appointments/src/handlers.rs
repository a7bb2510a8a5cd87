// File: crates/practice_appointments/src/handlers.rs
use crate::logic::{
    AdminQuery, AppointmentResponse, AvailabilityQuery, AvailableSlotsResponse,
    BlockedDatesResponse, HomeQuery, RescheduleRequest, UpdateStatusRequest,
};
use crate::pages;
use crate::service::AppointmentService;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Json, Redirect, Response},
    Form,
};
use practice_common::models::{AppointmentStatus, BookingRequest};
use practice_common::{
    auth_error, handle_json_result, validation_error, HttpStatusCode, PracticeError,
};
use practice_config::AppConfig;
use practice_db::SqlAppointmentRepository;
use std::sync::Arc;
use tracing::{info, warn};

// Shared state for the booking routes
pub struct BookingState {
    pub config: Arc<AppConfig>,
    pub service: AppointmentService<SqlAppointmentRepository>,
}

/// Where a successful booking sends the browser.
pub const BOOKED_REDIRECT: &str = "/?booked=1";

fn status_of(err: &PracticeError) -> StatusCode {
    StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

// Extractor rejections become JSON validation errors like every other failure.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, PracticeError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| validation_error(rejection.body_text()))
}

fn appointment_id(id: Result<Path<i64>, PathRejection>) -> Result<i64, PracticeError> {
    id.map(|Path(id)| id)
        .map_err(|rejection| validation_error(rejection.body_text()))
}

fn check_admin_password(config: &AppConfig, given: Option<&str>) -> Result<(), PracticeError> {
    if given == Some(config.admin.password.as_str()) {
        Ok(())
    } else {
        Err(auth_error("a valid password is required to view appointments"))
    }
}

pub async fn home_handler(Query(query): Query<HomeQuery>) -> Html<String> {
    let booked = query.booked.as_deref() == Some("1");
    Html(pages::home(booked))
}

pub async fn booking_form_handler() -> Html<String> {
    Html(pages::booking_form(None))
}

/// Accepts the booking form. Redirects on success; otherwise re-renders the
/// form with the error and its status code.
pub async fn submit_booking_handler(
    State(state): State<Arc<BookingState>>,
    Form(request): Form<BookingRequest>,
) -> Response {
    match state.service.book(request).await {
        Ok(_) => Redirect::to(BOOKED_REDIRECT).into_response(),
        Err(err) => {
            info!("Booking rejected: {}", err);
            (status_of(&err), Html(pages::booking_form(Some(&err.to_string())))).into_response()
        }
    }
}

#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/view-appointments",
    params(AdminQuery),
    responses(
        (status = 200, description = "Appointment table (HTML)"),
        (status = 401, description = "Missing or wrong password")
    ),
    tag = "Admin"
))]
pub async fn view_appointments_handler(
    State(state): State<Arc<BookingState>>,
    Query(query): Query<AdminQuery>,
) -> Response {
    if let Err(err) = check_admin_password(&state.config, query.password.as_deref()) {
        warn!("Rejected admin access: {}", err);
        return (status_of(&err), Html(pages::access_denied())).into_response();
    }

    match state.service.list().await {
        Ok(appointments) => Html(pages::admin(&appointments)).into_response(),
        Err(err) => err.into_response(),
    }
}

#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/update-status/{id}",
    params(("id" = i64, Path, description = "Appointment id")),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status changed", body = AppointmentResponse),
        (status = 400, description = "Unknown status value or malformed request"),
        (status = 404, description = "No appointment with this id")
    ),
    tag = "Admin"
))]
pub async fn update_status_handler(
    State(state): State<Arc<BookingState>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Result<Json<AppointmentResponse>, Response> {
    let result = async {
        let id = appointment_id(id)?;
        let payload = json_body(payload)?;
        let status: AppointmentStatus = payload.status.parse()?;
        let appointment = state.service.set_status(id, status).await?;
        Ok::<_, PracticeError>(AppointmentResponse {
            success: true,
            appointment,
        })
    }
    .await;
    handle_json_result(result)
}

#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/reschedule/{id}",
    params(("id" = i64, Path, description = "Appointment id")),
    request_body = RescheduleRequest,
    responses(
        (status = 200, description = "Moved and marked postponed", body = AppointmentResponse),
        (status = 400, description = "Blank date or time, or malformed request"),
        (status = 404, description = "No appointment with this id")
    ),
    tag = "Admin"
))]
pub async fn reschedule_handler(
    State(state): State<Arc<BookingState>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<RescheduleRequest>, JsonRejection>,
) -> Result<Json<AppointmentResponse>, Response> {
    let result = async {
        let id = appointment_id(id)?;
        let payload = json_body(payload)?;
        let appointment = state
            .service
            .reschedule(id, &payload.new_date, &payload.new_time)
            .await?;
        Ok::<_, PracticeError>(AppointmentResponse {
            success: true,
            appointment,
        })
    }
    .await;
    handle_json_result(result)
}

#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/blocked-dates",
    responses(
        (status = 200, description = "Dates that are fully booked", body = BlockedDatesResponse)
    ),
    tag = "Availability"
))]
pub async fn blocked_dates_handler(
    State(state): State<Arc<BookingState>>,
) -> Result<Json<BlockedDatesResponse>, Response> {
    let result = state
        .service
        .blocked_dates()
        .await
        .map(|dates| BlockedDatesResponse {
            blocked_dates: dates.into_iter().collect(),
        });
    handle_json_result(result)
}

#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/available-slots",
    params(AvailabilityQuery),
    responses(
        (status = 200, description = "Open slots for the date", body = AvailableSlotsResponse),
        (status = 400, description = "Missing date")
    ),
    tag = "Availability"
))]
pub async fn available_slots_handler(
    State(state): State<Arc<BookingState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailableSlotsResponse>, Response> {
    let Some(date) = query.date.filter(|d| !d.trim().is_empty()) else {
        return Err(validation_error("date is required").into_response());
    };

    let result = state
        .service
        .available_slots(date.trim())
        .await
        .map(|slots| AvailableSlotsResponse { slots });
    handle_json_result(result)
}
