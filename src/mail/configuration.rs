use crate::mail::console::ConsoleEmailService;
use crate::mail::error::MailError;
use crate::mail::error::MailError::{
    MissingEmailSenderAddress, MissingEmailSenderName, MissingEmailService, MissingSmtpLogin,
    MissingSmtpPassword, UnknownEmailService,
};
use crate::mail::smtp::{SmtpConfiguration, SmtpEmailService};
use crate::mail::{EmailService, MailerState};
use crate::tools::env_args::{
    retrieve_arg_value, retrieve_expected_arg_value, retrieve_parsed_arg_value,
};
use log::{error, info, warn};
use std::sync::Arc;

type Result<T, E = MailError> = std::result::Result<T, E>;

const EMAIL_SERVICE_ARG: &str = "--email-service";
const EMAIL_SENDER_NAME_ARG: &str = "--email-sender-name";
const EMAIL_SENDER_ADDRESS_ARG: &str = "--email-sender-address";
const SMTP_SERVER_ARG: &str = "--smtp-server";
const SMTP_PORT_ARG: &str = "--smtp-port";
const SMTP_IMPLICIT_TLS_ARG: &str = "--smtp-implicit-tls";
const SMTP_LOGIN_ARG: &str = "--smtp-login";
const SMTP_PASSWORD_ARG: &str = "--smtp-password";
const DEFAULT_SMTP_SERVER: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 587;

const SMTP_EMAIL_SERVICE: &str = "smtp";
const CONSOLE_EMAIL_SERVICE: &str = "console";

/// Decide which [EmailService] the app will use, based on its args.
/// The app can run without one: emails are then refused.
pub fn build_mailer_state() -> MailerState {
    match build_email_service() {
        Ok(email_service) => MailerState::Configured(email_service),
        Err(MissingEmailService) => {
            warn!("No email service configured, emails won't be sent [arg: {EMAIL_SERVICE_ARG}]");
            MailerState::Unconfigured
        }
        Err(error) => {
            error!("Email service can't be configured, emails won't be sent\n{error:#?}");
            MailerState::Unconfigured
        }
    }
}

fn build_email_service() -> Result<Arc<dyn EmailService>> {
    let email_service = retrieve_expected_arg_value(EMAIL_SERVICE_ARG, MissingEmailService)?;
    match email_service.as_str() {
        SMTP_EMAIL_SERVICE => {
            let configuration = build_smtp_configuration()?;
            info!("Emails will be sent through SMTP [configuration: {configuration:?}]");
            Ok(Arc::new(SmtpEmailService::new(configuration)))
        }
        CONSOLE_EMAIL_SERVICE => {
            info!("Emails will be printed in the logs");
            Ok(Arc::new(ConsoleEmailService))
        }
        _ => Err(UnknownEmailService(email_service)),
    }
}

fn build_smtp_configuration() -> Result<SmtpConfiguration> {
    Ok(SmtpConfiguration::new(
        retrieve_arg_value(SMTP_SERVER_ARG).unwrap_or(DEFAULT_SMTP_SERVER.to_owned()),
        retrieve_parsed_arg_value(SMTP_PORT_ARG, DEFAULT_SMTP_PORT),
        retrieve_parsed_arg_value(SMTP_IMPLICIT_TLS_ARG, false),
        retrieve_expected_arg_value(SMTP_LOGIN_ARG, MissingSmtpLogin)?,
        retrieve_expected_arg_value(SMTP_PASSWORD_ARG, MissingSmtpPassword)?,
        retrieve_expected_arg_value(EMAIL_SENDER_NAME_ARG, MissingEmailSenderName)?,
        retrieve_expected_arg_value(EMAIL_SENDER_ADDRESS_ARG, MissingEmailSenderAddress)?,
    ))
}
