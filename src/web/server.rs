use rocket::{Build, Rocket};

use crate::tools::env_args::retrieve_parsed_arg_value;
use crate::web::api::server::MailServer;

const PORT_ARG: &str = "--port";
const DEFAULT_PORT: u16 = 8000;

/// A set of routes, along with the state they need.
pub trait Server {
    fn configure(&self, rocket_build: Rocket<Build>) -> Rocket<Build>;
}

pub fn build_server() -> Rocket<Build> {
    let port = get_port();
    let rocket_build =
        rocket::build().configure(rocket::Config::figment().merge(("port", port)));

    let servers: Vec<Box<dyn Server>> = vec![Box::new(MailServer::from_args())];
    servers
        .iter()
        .fold(rocket_build, |rocket_build, server| server.configure(rocket_build))
}

fn get_port() -> u16 {
    retrieve_parsed_arg_value(PORT_ARG, DEFAULT_PORT)
}
