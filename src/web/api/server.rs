use crate::mail::MailerState;
use crate::mail::configuration::build_mailer_state;
use crate::tools::env_args::retrieve_arg_value;
use crate::web::api::mail_controller;
use crate::web::server::Server;
use rocket::{Build, Rocket};

const MAIL_API_VERSION_ARG: &str = "--mail-api-version";
const DEFAULT_MAIL_API_VERSION: &str = "v1";

/// Serve the mail API under `/<version>/mail`.
pub struct MailServer {
    api_version: String,
    mailer_state: MailerState,
}

impl MailServer {
    pub fn new(api_version: String, mailer_state: MailerState) -> Self {
        Self {
            api_version,
            mailer_state,
        }
    }

    pub fn from_args() -> Self {
        Self::new(get_mail_api_version(), build_mailer_state())
    }

    fn base_path(&self) -> String {
        format!("/{}/mail", self.api_version)
    }
}

impl Server for MailServer {
    fn configure(&self, rocket_build: Rocket<Build>) -> Rocket<Build> {
        rocket_build
            .manage(self.mailer_state.clone())
            .mount(self.base_path(), routes![mail_controller::send])
    }
}

fn get_mail_api_version() -> String {
    retrieve_arg_value(MAIL_API_VERSION_ARG)
        .map(|version| version.trim_matches('/').to_owned())
        .filter(|version| !version.is_empty())
        .unwrap_or(DEFAULT_MAIL_API_VERSION.to_owned())
}
