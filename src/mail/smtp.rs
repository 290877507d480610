use crate::mail::EmailService;
use crate::mail::error::MailError;
use crate::mail::error::MailError::{CantConnectToSmtpServer, CantSendMessage};
use crate::tools::log_message_and_return;
use derive_getters::Getters;
use dto::email::Email;
use mail_send::SmtpClientBuilder;
use mail_send::mail_builder::MessageBuilder;
use std::fmt::{Debug, Formatter};

/// Everything needed to reach the SMTP server and to sign emails.
#[derive(Getters, Clone, PartialEq)]
pub struct SmtpConfiguration {
    server: String,
    port: u16,
    implicit_tls: bool,
    login: String,
    password: String,
    sender_name: String,
    sender_address: String,
}

impl SmtpConfiguration {
    pub fn new(
        server: String,
        port: u16,
        implicit_tls: bool,
        login: String,
        password: String,
        sender_name: String,
        sender_address: String,
    ) -> Self {
        Self {
            server,
            port,
            implicit_tls,
            login,
            password,
            sender_name,
            sender_address,
        }
    }
}

impl Debug for SmtpConfiguration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SmtpConfiguration {{server={}, port={}, implicit_tls={}, login={}, password=MASKED, sender_name={}, sender_address={}}}",
            self.server,
            self.port,
            self.implicit_tls,
            self.login,
            self.sender_name,
            self.sender_address
        )
    }
}

/// Send emails through an SMTP server, opening a new connection for each email.
#[derive(Debug)]
pub struct SmtpEmailService {
    configuration: SmtpConfiguration,
}

impl SmtpEmailService {
    pub fn new(configuration: SmtpConfiguration) -> Self {
        Self { configuration }
    }
}

#[rocket::async_trait]
impl EmailService for SmtpEmailService {
    async fn send(&self, email: &Email) -> Result<(), MailError> {
        let message = create_message(&self.configuration, email);
        let configuration = &self.configuration;

        SmtpClientBuilder::new(configuration.server().as_str(), *configuration.port())
            .implicit_tls(*configuration.implicit_tls())
            .credentials((
                configuration.login().as_str(),
                configuration.password().as_str(),
            ))
            .connect()
            .await
            .map_err(log_message_and_return(
                "Couldn't connect to SMTP server",
                CantConnectToSmtpServer,
            ))?
            .send(message)
            .await
            .map_err(log_message_and_return("Couldn't send message", CantSendMessage))
    }
}

fn create_message<'a>(configuration: &'a SmtpConfiguration, email: &'a Email) -> MessageBuilder<'a> {
    let reply_to = email
        .reply_to()
        .as_deref()
        .unwrap_or(configuration.sender_address().as_str());

    let mut message = MessageBuilder::new()
        .from((
            configuration.sender_name().as_str(),
            configuration.sender_address().as_str(),
        ))
        .reply_to(reply_to)
        .to(email.to().as_str())
        .subject(email.subject().as_str())
        .text_body(email.body().as_str());

    if !email.cc().is_empty() {
        message = message.cc(as_addresses(email.cc()));
    }
    if !email.bcc().is_empty() {
        message = message.bcc(as_addresses(email.bcc()));
    }
    if let Some(html_body) = email.html_body() {
        message = message.html_body(html_body.as_str());
    }

    message
}

fn as_addresses(addresses: &[String]) -> Vec<&str> {
    addresses.iter().map(String::as_str).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dto::email::tests::{TEST_BODY, TEST_RECIPIENT, get_test_email};
    use mail_send::mail_builder::headers::HeaderType;
    use mail_send::mail_builder::headers::address::Address;
    use mail_send::mail_builder::mime::BodyPart;

    const TEST_SENDER_NAME: &str = "Sender";
    const TEST_SENDER_ADDRESS: &str = "sender@address.com";

    fn get_test_configuration() -> SmtpConfiguration {
        SmtpConfiguration::new(
            "sandbox.smtp.mailtrap.io".to_owned(),
            25,
            false,
            "login".to_owned(),
            "secret".to_owned(),
            TEST_SENDER_NAME.to_owned(),
            TEST_SENDER_ADDRESS.to_owned(),
        )
    }

    fn find_header<'a>(message: &'a MessageBuilder, name: &str) -> Option<&'a HeaderType<'a>> {
        message
            .headers
            .iter()
            .find(|(header_name, _)| header_name.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    fn address_of(header: Option<&HeaderType>) -> String {
        match header {
            Some(HeaderType::Address(Address::Address(address))) => {
                address.email.as_ref().to_owned()
            }
            other => panic!("Unexpected header: {other:?}"),
        }
    }

    #[test]
    fn should_mask_password() {
        let debug = format!("{:?}", get_test_configuration());

        assert!(!debug.contains("secret"));
        assert!(debug.contains("password=MASKED"));
    }

    #[test]
    fn should_create_message() {
        let configuration = get_test_configuration();
        let email = get_test_email();

        let message = create_message(&configuration, &email);

        assert_eq!(TEST_RECIPIENT, address_of(find_header(&message, "To")));
        assert_eq!(TEST_SENDER_ADDRESS, address_of(find_header(&message, "From")));
        assert_eq!(TEST_SENDER_ADDRESS, address_of(find_header(&message, "Reply-To")));
        assert!(find_header(&message, "Cc").is_none());
        assert!(find_header(&message, "Bcc").is_none());
        assert!(message.html_body.is_none());
        match message.text_body.unwrap().contents {
            BodyPart::Text(text) => assert_eq!(TEST_BODY, text),
            BodyPart::Binary(_) => panic!("Unexpected binary part"),
            BodyPart::Multipart(_) => panic!("Unexpected multipart part"),
        };
    }

    #[test]
    fn should_create_message_with_optional_fields() {
        let configuration = get_test_configuration();
        let email = get_test_email()
            .with_cc(vec!["cc@example.com".to_owned()])
            .with_bcc(vec!["bcc@example.com".to_owned()])
            .with_reply_to("reply@example.com".to_owned())
            .with_html_body("<p>Hello</p>".to_owned());

        let message = create_message(&configuration, &email);

        assert_eq!("reply@example.com", address_of(find_header(&message, "Reply-To")));
        assert!(find_header(&message, "Cc").is_some());
        assert!(find_header(&message, "Bcc").is_some());
        match message.html_body.unwrap().contents {
            BodyPart::Text(text) => assert_eq!("<p>Hello</p>", text),
            BodyPart::Binary(_) => panic!("Unexpected binary part"),
            BodyPart::Multipart(_) => panic!("Unexpected multipart part"),
        };
    }

    #[async_test]
    #[ignore]
    async fn should_send_email() {
        let email_service = SmtpEmailService::new(get_test_configuration());

        let result = email_service.send(&get_test_email()).await;

        assert_eq!(Ok(()), result);
    }
}
