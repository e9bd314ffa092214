//! Error types for is-positive

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing query parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid integer for '{name}': {value:?}")]
    InvalidInteger { name: String, value: String },
}

impl Error {
    pub fn missing_parameter(name: impl Into<String>) -> Self {
        Error::MissingParameter(name.into())
    }

    pub fn invalid_integer(name: impl Into<String>, value: impl Into<String>) -> Self {
        Error::InvalidInteger {
            name: name.into(),
            value: value.into(),
        }
    }
}
