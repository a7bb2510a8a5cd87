use practice_common::services::{BoxFuture, NotificationResult, NotificationService};
use practice_common::{config_error, external_service_error, PracticeError};
use practice_config::MailConfig;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error, info};

/// Mail delivery error types.
#[derive(Error, Debug)]
pub enum MailError {
    /// Error occurred during a mail API request
    #[error("Mail API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Error returned by the mail API
    #[error("Mail API returned an error: {message} (Status: {status_code})")]
    ApiError { status_code: u16, message: String },

    /// Missing or incomplete mail configuration
    #[error("Mail configuration missing or incomplete: {0}")]
    ConfigError(String),
}

impl From<MailError> for PracticeError {
    fn from(err: MailError) -> Self {
        match err {
            MailError::ConfigError(message) => config_error(message),
            other => external_service_error("mail", other),
        }
    }
}

// Mailgun answers `{"id": "...", "message": "Queued. Thank you."}`
#[derive(Deserialize, Debug, Default)]
struct MailApiResponse {
    #[serde(default)]
    id: String,
    #[serde(default)]
    message: String,
}

/// Sends email by POSTing a form to a Mailgun-compatible HTTP API.
pub struct HttpMailService {
    client: Client,
    api_url: String,
    username: String,
    password: String,
    sender: String,
}

impl HttpMailService {
    /// Create a mail service from the mail settings.
    ///
    /// # Errors
    ///
    /// `MailError::ConfigError` if the API URL or the sender is empty.
    pub fn new(config: &MailConfig) -> Result<Self, MailError> {
        if config.api_url.trim().is_empty() {
            return Err(MailError::ConfigError("mail.api_url is empty".to_string()));
        }
        if config.sender.trim().is_empty() {
            return Err(MailError::ConfigError("mail.sender is empty".to_string()));
        }

        Ok(Self {
            client: Client::new(),
            api_url: config.api_url.clone(),
            username: config.username.clone(),
            password: config.password.clone(),
            sender: config.sender.clone(),
        })
    }
}

impl NotificationService for HttpMailService {
    type Error = MailError;

    fn send_email(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> BoxFuture<'_, NotificationResult, Self::Error> {
        let to = to.to_string();
        let subject = subject.to_string();
        let body = body.to_string();

        Box::pin(async move {
            let params = [
                ("from", self.sender.as_str()),
                ("to", to.as_str()),
                ("subject", subject.as_str()),
                ("text", body.as_str()),
            ];
            debug!("Sending email to {}: {}", to, subject);

            let resp = self
                .client
                .post(&self.api_url)
                .basic_auth(&self.username, Some(&self.password))
                .form(&params)
                .send()
                .await?;

            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();

            if !status.is_success() {
                error!("Mail API returned {}: {}", status, text);
                return Err(MailError::ApiError {
                    status_code: status.as_u16(),
                    message: text,
                });
            }

            let parsed: MailApiResponse = serde_json::from_str(&text).unwrap_or_default();
            info!("Email sent to {}: {}", to, subject);
            Ok(NotificationResult {
                id: parsed.id,
                status: if parsed.message.is_empty() {
                    status.to_string()
                } else {
                    parsed.message
                },
            })
        })
    }
}
