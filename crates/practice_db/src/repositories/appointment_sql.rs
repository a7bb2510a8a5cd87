//! SQL implementation of the appointment repository

use crate::error::DbError;
use crate::repositories::appointment::AppointmentRepository;
use crate::DbClient;
use chrono::{DateTime, Utc};
use practice_common::models::{Appointment, AppointmentStatus, AppointmentUpdate, NewAppointment};
use sqlx::any::AnyRow;
use sqlx::Row;
use tracing::{debug, error, info};

// The `Any` driver cannot decode a NULL column, so a missing id number is
// read back as an empty string.
const SELECT_COLUMNS: &str = "SELECT id, name, email, phone, COALESCE(id_number, '') AS id_number, \
     service, date, time, status, created_at FROM appointments";

/// SQL implementation of the appointment repository
///
/// `created_at` is kept as RFC 3339 text and `status` as its wire string,
/// since the `Any` driver cannot decode chrono types.
#[derive(Debug, Clone)]
pub struct SqlAppointmentRepository {
    db_client: DbClient,
}

impl SqlAppointmentRepository {
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }

    pub fn db_client(&self) -> &DbClient {
        &self.db_client
    }
}

fn decode_row(row: &AnyRow) -> Result<Appointment, DbError> {
    let status: String = row.try_get("status")?;
    let status = status
        .parse::<AppointmentStatus>()
        .map_err(|e| DbError::DecodeError(e.to_string()))?;
    let id_number: String = row.try_get("id_number")?;
    let created_at: String = row.try_get("created_at")?;
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map_err(|e| DbError::DecodeError(format!("created_at '{}': {}", created_at, e)))?
        .with_timezone(&Utc);

    Ok(Appointment {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        id_number: Some(id_number).filter(|v| !v.is_empty()),
        service: row.try_get("service")?,
        date: row.try_get("date")?,
        time: row.try_get("time")?,
        status,
        created_at,
    })
}

impl AppointmentRepository for SqlAppointmentRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing appointment schema");

        let query = r#"
            CREATE TABLE IF NOT EXISTS appointments (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                phone TEXT NOT NULL,
                id_number TEXT,
                service TEXT NOT NULL,
                date TEXT NOT NULL,
                time TEXT NOT NULL,
                status TEXT NOT NULL DEFAULT 'scheduled',
                created_at TEXT NOT NULL
            )
        "#;

        self.db_client.execute(query).await?;

        info!("Appointment schema initialized successfully");
        Ok(())
    }

    async fn create(&self, appointment: NewAppointment) -> Result<Appointment, DbError> {
        debug!(
            "Storing appointment for {} on {} at {}",
            appointment.name, appointment.date, appointment.time
        );

        let status = AppointmentStatus::Scheduled;
        let created_at = Utc::now();

        let query = r#"
            INSERT INTO appointments (name, email, phone, id_number, service, date, time, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
        "#;

        let row = sqlx::query(query)
            .bind(&appointment.name)
            .bind(&appointment.email)
            .bind(&appointment.phone)
            .bind(appointment.id_number.as_deref())
            .bind(&appointment.service)
            .bind(&appointment.date)
            .bind(&appointment.time)
            .bind(status.as_str())
            .bind(created_at.to_rfc3339())
            .fetch_one(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to insert appointment: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        let id: i64 = row.try_get("id")?;
        info!("Appointment {} created", id);

        Ok(Appointment {
            id,
            name: appointment.name,
            email: appointment.email,
            phone: appointment.phone,
            id_number: appointment.id_number,
            service: appointment.service,
            date: appointment.date,
            time: appointment.time,
            status,
            created_at,
        })
    }

    async fn get(&self, id: i64) -> Result<Option<Appointment>, DbError> {
        debug!("Finding appointment {}", id);

        let query = format!("{} WHERE id = $1", SELECT_COLUMNS);
        let result = sqlx::query(&query)
            .bind(id)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to find appointment: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        result.as_ref().map(decode_row).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Appointment>, DbError> {
        debug!("Listing all appointments");

        let query = format!("{} ORDER BY id", SELECT_COLUMNS);
        let rows = sqlx::query(&query)
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to list appointments: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        rows.iter().map(decode_row).collect()
    }

    async fn update(&self, id: i64, update: AppointmentUpdate) -> Result<bool, DbError> {
        debug!("Updating appointment {}: {:?}", id, update);

        let query = r#"
            UPDATE appointments
            SET date = COALESCE($1, date),
                time = COALESCE($2, time),
                status = COALESCE($3, status)
            WHERE id = $4
        "#;

        let result = sqlx::query(query)
            .bind(update.date)
            .bind(update.time)
            .bind(update.status.map(|s| s.as_str()))
            .bind(id)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to update appointment: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn reset(&self) -> Result<(), DbError> {
        info!("Dropping appointments table");
        self.db_client
            .execute("DROP TABLE IF EXISTS appointments")
            .await?;
        self.init_schema().await
    }
}
