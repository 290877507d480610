use dto::email::{Email, validate};
use log::debug;
use rocket::data::{self, Data, FromData};
use rocket::http::Status;
use rocket::outcome::{Outcome, try_outcome};
use rocket::request::Request;
use rocket::serde::json::Json;

/// An [Email] read from a JSON body, which passed validation.
///
/// Parsing is left to [Json]: a body that isn't valid JSON, or doesn't look like an email,
/// is rejected the same way it would be for any other JSON endpoint.
/// An email with wrong content (invalid address, blank subject...) is then rejected
/// with an Unprocessable Entity status, so that the handler only ever sees valid emails.
#[derive(Debug)]
pub struct ValidEmail(Email);

impl ValidEmail {
    pub fn into_inner(self) -> Email {
        self.0
    }
}

/// Why the body was rejected. Details are only logged.
#[derive(Debug, PartialEq)]
pub enum ValidEmailError {
    Json,
    Validation,
}

#[rocket::async_trait]
impl<'r> FromData<'r> for ValidEmail {
    type Error = ValidEmailError;

    async fn from_data(req: &'r Request<'_>, data: Data<'r>) -> data::Outcome<'r, Self> {
        let email = try_outcome!(
            Json::<Email>::from_data(req, data)
                .await
                .map_error(|(status, error)| {
                    debug!("Unreadable email [status: {status}, error: {error:?}]");
                    (status, ValidEmailError::Json)
                })
        )
        .into_inner();

        match validate(&email) {
            Ok(()) => Outcome::Success(ValidEmail(email)),
            Err(errors) => {
                debug!("Invalid email [errors: {errors}]");
                Outcome::Error((Status::UnprocessableEntity, ValidEmailError::Validation))
            }
        }
    }
}
