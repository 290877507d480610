use crate::mail::EmailService;
use crate::mail::error::MailError;
use dto::email::Email;
use log::info;

/// Print emails in the logs instead of sending them.
/// Useful for local development, where no SMTP server is available.
#[derive(Debug, Default)]
pub struct ConsoleEmailService;

#[rocket::async_trait]
impl EmailService for ConsoleEmailService {
    async fn send(&self, email: &Email) -> Result<(), MailError> {
        info!(
            "Email sent (console) [to: {}, cc: {:?}, bcc: {:?}, subject: {}]\n{}",
            email.to(),
            email.cc(),
            email.bcc(),
            email.subject(),
            email.body()
        );
        Ok(())
    }
}
