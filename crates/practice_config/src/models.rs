// --- File: crates/practice_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

// --- Database Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub url: String, // e.g. sqlite:appointments.db, overridden by DATABASE_URL
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:appointments.db".to_string(),
        }
    }
}

// --- Security Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SecurityConfig {
    pub secret_key: String, // overridden by SECRET_KEY
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            secret_key: DEV_SECRET_KEY.to_string(),
        }
    }
}

/// Secret key shipped for local development only.
pub const DEV_SECRET_KEY: &str = "dev-secret-key-12345";

// --- Admin Config ---
// Plaintext shared password for the appointment list. Not a security boundary.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AdminConfig {
    pub password: String, // overridden by ADMIN_PASSWORD
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            password: "admin".to_string(),
        }
    }
}

// --- Mail Config ---
// Credentials for the HTTP mail API. Password usually "secret_from_env".
// Fields default to empty so MAIL_* overrides alone still deserialize; the
// mailer rejects an incomplete section at start-up.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct MailConfig {
    pub api_url: String,
    pub username: String,
    pub password: String,
    pub sender: String,
    /// Where staff notifications for new bookings go.
    pub staff_address: String,
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// Send booking emails. Needs a `mail` section as well.
    #[serde(default)]
    pub use_mail: bool,

    #[serde(default)]
    pub database: Option<DatabaseConfig>,
    #[serde(default)]
    pub security: SecurityConfig,
    #[serde(default)]
    pub admin: AdminConfig,
    #[serde(default)]
    pub mail: Option<MailConfig>,
}

impl AppConfig {
    /// The mail section, but only when mail delivery is switched on.
    pub fn mail_settings(&self) -> Option<&MailConfig> {
        if self.use_mail {
            self.mail.as_ref()
        } else {
            None
        }
    }
}
