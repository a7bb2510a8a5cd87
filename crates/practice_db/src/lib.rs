//! Appointment storage for the practice booking service
//!
//! A thin record store over SQLx. The pool uses the `Any` driver so the same
//! code runs against SQLite (the default), PostgreSQL or MySQL, selected by
//! feature flag and database URL.
//!
//! # Example
//!
//! ```rust,no_run
//! use practice_db::{AppointmentRepository, DbClient, SqlAppointmentRepository};
//!
//! async fn setup() -> Result<SqlAppointmentRepository, practice_db::DbError> {
//!     let db_client = DbClient::from_url("sqlite:appointments.db").await?;
//!     let repository = SqlAppointmentRepository::new(db_client);
//!     repository.init_schema().await?;
//!     Ok(repository)
//! }
//! ```

pub mod client;
pub mod error;
pub mod repositories;

pub use client::DbClient;
pub use error::DbError;
pub use repositories::{AppointmentRepository, SqlAppointmentRepository};
