use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum MailError {
    #[error("No email service has been selected")]
    MissingEmailService,
    #[error("Unknown email service: {0}")]
    UnknownEmailService(String),
    #[error("Missing email sender name")]
    MissingEmailSenderName,
    #[error("Missing email sender address")]
    MissingEmailSenderAddress,
    #[error("Missing SMTP login")]
    MissingSmtpLogin,
    #[error("Missing SMTP password")]
    MissingSmtpPassword,
    #[error("Can't connect to SMTP server")]
    CantConnectToSmtpServer,
    #[error("Can't send message")]
    CantSendMessage,
}
