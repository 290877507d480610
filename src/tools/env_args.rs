#[cfg(not(test))]
use std::env;
#[cfg(test)]
use std::cell::RefCell;
use std::str::FromStr;

/// Retrieve the value of an arg passed to the app as `--name=value`.
///
/// /!\ Args are read from global state,
/// so a function relying on `retrieve_arg_value` needs some care to be tested.
/// Wrap such a test with `with_env_args(args, fn)`, only available in a test context.
pub fn retrieve_arg_value(arg_name: &str) -> Option<String> {
    let arg_prefix = format!("{arg_name}=");
    get_env_args()
        .into_iter()
        .find(|arg| arg.starts_with(&arg_prefix))
        .map(|arg| arg[arg_prefix.len()..].to_owned())
}

/// Retrieve an arg value, or the given error if the arg is missing.
pub fn retrieve_expected_arg_value<E>(arg_name: &str, error_if_missing: E) -> Result<String, E> {
    retrieve_arg_value(arg_name).ok_or(error_if_missing)
}

/// Retrieve and parse an arg value.
/// Missing args and values that can't be parsed both give the default value.
pub fn retrieve_parsed_arg_value<T: FromStr>(arg_name: &str, default_value: T) -> T {
    retrieve_arg_value(arg_name)
        .and_then(|value| value.parse::<T>().ok())
        .unwrap_or(default_value)
}

#[cfg(not(test))]
fn get_env_args() -> Vec<String> {
    env::args().collect()
}

#[cfg(test)]
thread_local! {
    /// Args seen by the app during a test.
    /// `with_env_args` sets them for the duration of the wrapped function.
    static ENV_ARGS: RefCell<Vec<String>> = const { RefCell::new(vec![]) };
}

#[cfg(test)]
fn get_env_args() -> Vec<String> {
    ENV_ARGS.with(|args| args.borrow().clone())
}

#[cfg(test)]
/// Run `function` as if the app had been started with `args`.
/// Previous args are restored afterward.
pub fn with_env_args<F, T>(args: Vec<String>, function: F) -> T
where
    F: FnOnce() -> T,
{
    let old_args = ENV_ARGS.with(|refcell| refcell.replace(args));
    let result = function();
    ENV_ARGS.with(|refcell| refcell.replace(old_args));
    result
}
