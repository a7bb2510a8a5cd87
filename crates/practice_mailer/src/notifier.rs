use crate::service::{HttpMailService, MailError};
use practice_common::models::Appointment;
use practice_common::services::{AppointmentNotifier, NotificationService};
use practice_config::MailConfig;
use std::future::Future;
use std::pin::Pin;
use tracing::{error, info};

pub const STAFF_SUBJECT_PREFIX: &str = "New appointment: ";
pub const CLIENT_SUBJECT: &str = "Your appointment is confirmed";

/// A rendered email, before it is handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// The message telling staff about a new booking, with every client detail.
pub fn staff_message(appointment: &Appointment, staff_address: &str) -> Message {
    let body = format!(
        "A new appointment has been booked.\n\n\
         Name: {}\n\
         Email: {}\n\
         Phone: {}\n\
         ID number: {}\n\
         Service: {}\n\
         Date: {}\n\
         Time: {}\n\
         Appointment ID: {}\n",
        appointment.name,
        appointment.email,
        appointment.phone,
        appointment.id_number.as_deref().unwrap_or("-"),
        appointment.service,
        appointment.date,
        appointment.time,
        appointment.id,
    );
    Message {
        to: staff_address.to_string(),
        subject: format!("{}{}", STAFF_SUBJECT_PREFIX, appointment.name),
        body,
    }
}

/// The confirmation sent to the client. Carries no contact or id details.
pub fn client_message(appointment: &Appointment) -> Message {
    let body = format!(
        "Dear {},\n\n\
         your appointment has been booked.\n\n\
         Service: {}\n\
         Date: {}\n\
         Time: {}\n\n\
         We look forward to seeing you.\n",
        appointment.name, appointment.service, appointment.date, appointment.time,
    );
    Message {
        to: appointment.email.clone(),
        subject: CLIENT_SUBJECT.to_string(),
        body,
    }
}

/// Emails staff and the client about each new appointment.
pub struct MailNotifier<S> {
    transport: S,
    staff_address: String,
}

impl MailNotifier<HttpMailService> {
    /// Build a notifier sending through the configured mail API.
    pub fn from_config(config: &MailConfig) -> Result<Self, MailError> {
        if config.staff_address.trim().is_empty() {
            return Err(MailError::ConfigError(
                "mail.staff_address is empty".to_string(),
            ));
        }
        Ok(Self::new(HttpMailService::new(config)?, config.staff_address.clone()))
    }
}

impl<S: NotificationService> MailNotifier<S> {
    pub fn new(transport: S, staff_address: impl Into<String>) -> Self {
        Self {
            transport,
            staff_address: staff_address.into(),
        }
    }

    pub fn transport(&self) -> &S {
        &self.transport
    }

    async fn deliver(&self, message: &Message, appointment_id: i64) -> bool {
        match self
            .transport
            .send_email(&message.to, &message.subject, &message.body)
            .await
        {
            Ok(result) => {
                info!(
                    "Sent '{}' for appointment {} (id: {}, status: {})",
                    message.subject, appointment_id, result.id, result.status
                );
                true
            }
            Err(e) => {
                error!(
                    "Failed to send '{}' for appointment {} to {}: {}",
                    message.subject, appointment_id, message.to, e
                );
                false
            }
        }
    }
}

impl<S: NotificationService> AppointmentNotifier for MailNotifier<S> {
    fn notify<'a>(
        &'a self,
        appointment: &'a Appointment,
    ) -> Pin<Box<dyn Future<Output = bool> + Send + 'a>> {
        Box::pin(async move {
            // Both are attempted even if the first fails.
            let staff = self
                .deliver(&staff_message(appointment, &self.staff_address), appointment.id)
                .await;
            let client = self
                .deliver(&client_message(appointment), appointment.id)
                .await;
            staff && client
        })
    }
}
