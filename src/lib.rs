//! is-positive - tells whether a number is positive or negative
//!
//! A single function handler reads the `number` query parameter of an
//! invocation event and answers `Number is positive` for values above zero and
//! `Number is negative` for everything else. It can be hosted by:
//! - the AWS Lambda runtime ([`lambda`])
//! - a local axum server ([`api`])

pub mod api;
pub mod config;
pub mod error;
pub mod handler;
pub mod lambda;
pub mod types;

pub use error::{Error, Result};
pub use handler::handle;
