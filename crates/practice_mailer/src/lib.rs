/// Outgoing appointment emails: what is sent and to whom.
pub mod notifier;
/// This module provides the HTTP mail API transport.
pub mod service;

pub use notifier::MailNotifier;
pub use service::{HttpMailService, MailError};
