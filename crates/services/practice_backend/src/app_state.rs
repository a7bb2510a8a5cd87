// --- File: crates/services/practice_backend/src/app_state.rs ---
use practice_appointments::{AppointmentService, BookingState};
use practice_common::{log_result, PracticeError};
use practice_config::{AppConfig, DEV_SECRET_KEY};
use practice_db::{AppointmentRepository, DbClient, SqlAppointmentRepository};
use practice_mailer::MailNotifier;
use std::sync::Arc;
use tracing::{info, warn};

/// Connects the store, prepares the schema and wires the notifier.
///
/// Mail is optional: when it is switched off or misconfigured the site still
/// takes bookings and only logs that no emails go out.
pub async fn build_state(config: Arc<AppConfig>) -> Result<Arc<BookingState>, PracticeError> {
    if config.security.secret_key == DEV_SECRET_KEY {
        warn!("Using the development secret key; set SECRET_KEY in production");
    }

    let db_client = DbClient::new(&config).await?;
    if !db_client.is_healthy().await {
        return Err(PracticeError::DatabaseError(
            "database did not answer a health check".to_string(),
        ));
    }
    info!("Connected to database");
    let repository = SqlAppointmentRepository::new(db_client);
    log_result(
        repository.init_schema().await,
        "Appointment schema ready",
        "Failed to prepare appointment schema",
    )?;

    let mut service = AppointmentService::new(repository);
    match config.mail_settings() {
        Some(mail) => match MailNotifier::from_config(mail) {
            Ok(notifier) => {
                info!("Email notifications enabled via {}", mail.api_url);
                service = service.with_notifier(Arc::new(notifier));
            }
            Err(e) => warn!("Email notifications disabled: {}", e),
        },
        None => info!("Email notifications disabled (use_mail is off)"),
    }

    Ok(Arc::new(BookingState { config, service }))
}
