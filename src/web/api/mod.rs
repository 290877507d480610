pub mod mail_controller;
pub mod server;
pub mod valid_email;
