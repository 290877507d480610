use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

/// A message submitted for sending.
/// The sender is not part of the payload: it belongs to whoever actually delivers the message.
#[derive(Getters, Serialize, Deserialize, Validate, Debug, Clone, PartialEq)]
pub struct Email {
    #[validate(email)]
    to: String,
    #[serde(default)]
    #[validate(custom(function = "validate_addresses"))]
    cc: Vec<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_addresses"))]
    bcc: Vec<String>,
    #[serde(default)]
    #[validate(email)]
    reply_to: Option<String>,
    // 998 is the longest header line allowed by RFC 5322
    #[validate(length(max = 998), custom(function = "validate_not_blank"))]
    subject: String,
    #[validate(custom(function = "validate_not_blank"))]
    body: String,
    #[serde(default)]
    html_body: Option<String>,
}

impl Email {
    pub fn new(to: String, subject: String, body: String) -> Self {
        Self {
            to,
            cc: vec![],
            bcc: vec![],
            reply_to: None,
            subject,
            body,
            html_body: None,
        }
    }

    pub fn with_cc(mut self, cc: Vec<String>) -> Self {
        self.cc = cc;
        self
    }

    pub fn with_bcc(mut self, bcc: Vec<String>) -> Self {
        self.bcc = bcc;
        self
    }

    pub fn with_reply_to(mut self, reply_to: String) -> Self {
        self.reply_to = Some(reply_to);
        self
    }

    pub fn with_html_body(mut self, html_body: String) -> Self {
        self.html_body = Some(html_body);
        self
    }
}

/// Check an email before anything is done with it.
/// Errors are reported per field, so that they can be sent back as is.
pub fn validate(email: &Email) -> Result<(), ValidationErrors> {
    email.validate()
}

fn validate_addresses(addresses: &[String]) -> Result<(), ValidationError> {
    if addresses.iter().all(|address| address.validate_email()) {
        Ok(())
    } else {
        Err(ValidationError::new("email").with_message("Invalid email address in list".into()))
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank").with_message("Must not be blank".into()));
    }
    Ok(())
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub const TEST_RECIPIENT: &str = "a@example.com";
    pub const TEST_SUBJECT: &str = "Hi";
    pub const TEST_BODY: &str = "Hello";

    pub fn get_test_email() -> Email {
        Email::new(
            TEST_RECIPIENT.to_owned(),
            TEST_SUBJECT.to_owned(),
            TEST_BODY.to_owned(),
        )
    }

}
