use crate::mail::error::MailError;
use dto::email::Email;
use std::sync::Arc;

pub mod configuration;
pub mod console;
pub mod error;
pub mod smtp;

/// Anything able to deliver an [Email].
#[rocket::async_trait]
pub trait EmailService: Send + Sync {
    async fn send(&self, email: &Email) -> Result<(), MailError>;
}

/// Whether an [EmailService] has been wired in at startup.
/// Managed by Rocket and never modified afterward.
#[derive(Clone)]
pub enum MailerState {
    Configured(Arc<dyn EmailService>),
    Unconfigured,
}

impl MailerState {
    pub fn email_service(&self) -> Option<&dyn EmailService> {
        match self {
            MailerState::Configured(email_service) => Some(email_service.as_ref()),
            MailerState::Unconfigured => None,
        }
    }
}
