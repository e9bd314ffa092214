//! Core types for is-positive

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Status code attached to every successful classification
pub const STATUS_OK: u16 = 200;

/// Invocation event handed over by the hosting platform
///
/// Only the query string is read. API Gateway sends `null` when the request
/// carried no query string, which deserializes to `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvocationEvent {
    #[serde(rename = "queryStringParameters", default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

impl InvocationEvent {
    /// Build an event from a query-string mapping
    pub fn from_query(params: HashMap<String, String>) -> Self {
        Self {
            query_string_parameters: Some(params),
        }
    }

    /// Look up a single query parameter
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query_string_parameters
            .as_ref()
            .and_then(|params| params.get(name))
            .map(String::as_str)
    }
}

/// Response returned to the hosting platform
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvocationResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl InvocationResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status_code: STATUS_OK,
            body: body.into(),
        }
    }
}

/// Outcome of classifying a number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    /// Zero and everything below it
    Negative,
}

impl Sign {
    pub fn message(self) -> &'static str {
        match self {
            Sign::Positive => "Number is positive",
            Sign::Negative => "Number is negative",
        }
    }
}
