//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.

use std::env;
use std::str::FromStr;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

/// Get an optional environment variable. Unset and blank values both read as `None`.
pub fn get_env_opt(name: &'static str) -> Option<String> {
    get_env(name)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

/// Get and parse an environment variable.
pub fn get_env_parse<T: FromStr>(name: &'static str) -> Result<T, Error> {
    let val = get_env(name)?;
    val.trim().parse::<T>().map_err(|_| Error::WrongFormat(name))
}

// region:    --- Error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    MissingEnv(&'static str),
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    // Each test owns a distinct variable name; tests run in parallel threads.

    #[test]
    fn test_get_env_missing() {
        assert_eq!(
            get_env("LIB_UTILS_TEST_UNSET"),
            Err(Error::MissingEnv("LIB_UTILS_TEST_UNSET"))
        );
    }

    #[test]
    fn test_get_env_opt_blank_is_none() {
        env::set_var("LIB_UTILS_TEST_BLANK", "   ");
        assert_eq!(get_env_opt("LIB_UTILS_TEST_BLANK"), None);
    }

    #[test]
    fn test_get_env_opt_trims() {
        env::set_var("LIB_UTILS_TEST_PADDED", "  key-123 ");
        assert_eq!(get_env_opt("LIB_UTILS_TEST_PADDED").as_deref(), Some("key-123"));
    }

    #[test]
    fn test_get_env_parse() {
        env::set_var("LIB_UTILS_TEST_NUMBER", "137");
        assert_eq!(get_env_parse::<u64>("LIB_UTILS_TEST_NUMBER"), Ok(137));

        env::set_var("LIB_UTILS_TEST_NOT_NUMBER", "polygon");
        assert_eq!(
            get_env_parse::<u64>("LIB_UTILS_TEST_NOT_NUMBER"),
            Err(Error::WrongFormat("LIB_UTILS_TEST_NOT_NUMBER"))
        );
    }
}
