use log::error;
use std::fmt::Debug;

pub mod env_args;

/// Log the error along with a message giving some context,
/// then replace it with `value_to_return`.
/// Meant to be used with `map_err`.
pub fn log_message_and_return<E: Debug, T>(
    message: &str,
    value_to_return: T,
) -> impl FnOnce(E) -> T {
    move |e| {
        error!("{message}\n{e:#?}");
        value_to_return
    }
}
