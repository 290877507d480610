use crate::mail::MailerState;
use crate::web::api::valid_email::ValidEmail;
use log::{error, info, warn};
use rocket::State;
use rocket::http::Status;
use rocket::response::status::Custom;

/// Hand the email over to the configured email service.
/// Answer with an Internal Server Error when there is none.
///
/// Whether the email service succeeds has no incidence on the response:
/// its failures are logged, then the request is considered as processed.
///
/// Responses have an empty body.
#[post("/send", format = "application/json", data = "<email>")]
pub async fn send(email: ValidEmail, mailer_state: &State<MailerState>) -> Custom<()> {
    let email = email.into_inner();
    info!("{email:?}");

    let Some(email_service) = mailer_state.email_service() else {
        warn!("Email service not configured, email not sent [to: {}]", email.to());
        return Custom(Status::InternalServerError, ());
    };

    if let Err(e) = email_service.send(&email).await {
        error!("Email service couldn't send email [to: {}]\n{e:#?}", email.to());
    }

    Custom(Status::Ok, ())
}
