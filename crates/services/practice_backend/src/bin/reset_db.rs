// File: services/practice_backend/src/bin/reset_db.rs
//! Drops and recreates the appointments table, then inserts one sample row.

use practice_common::log_result;
use practice_common::models::NewAppointment;
use practice_config::load_config;
use practice_db::{AppointmentRepository, DbClient, SqlAppointmentRepository};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    practice_common::logging::init();

    let config = load_config()?;
    let db_client = DbClient::new(&config).await?;
    info!("Resetting appointments table");

    let repository = SqlAppointmentRepository::new(db_client);
    log_result(
        repository.reset().await,
        "Appointments table recreated",
        "Failed to recreate appointments table",
    )?;

    let sample = repository
        .create(NewAppointment {
            name: "Test Client".to_string(),
            email: "test@example.com".to_string(),
            phone: "1234567890".to_string(),
            id_number: Some("TEST123456".to_string()),
            service: "Individual therapy".to_string(),
            date: "2026-02-11".to_string(),
            time: "14:00".to_string(),
        })
        .await?;
    info!("Inserted sample appointment {}", sample.id);

    let count = repository.list_all().await?.len();
    println!("Database reset. Appointments in table: {}", count);
    Ok(())
}
