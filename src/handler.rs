//! Request handler
//!
//! Reads the `number` query parameter and reports whether it is strictly
//! positive. Zero counts as negative. Lookup and parse failures are returned
//! as errors; the handler never turns them into a response of its own.

use crate::error::{Error, Result};
use crate::types::{InvocationEvent, InvocationResponse, Sign};

/// Name of the query parameter carrying the number
pub const NUMBER_PARAM: &str = "number";

/// Handle a single invocation
pub fn handle(event: &InvocationEvent) -> Result<InvocationResponse> {
    let raw = event
        .query_param(NUMBER_PARAM)
        .ok_or_else(|| Error::missing_parameter(NUMBER_PARAM))?;

    let sign = classify(raw).ok_or_else(|| Error::invalid_integer(NUMBER_PARAM, raw))?;

    Ok(InvocationResponse::ok(sign.message()))
}

/// Classify a base-10 integer literal by sign
///
/// Accepts surrounding whitespace, an optional `+`/`-` and single underscores
/// between digits. Only the sign is needed, so the magnitude is never
/// materialised and any length of digits is accepted.
pub fn classify(raw: &str) -> Option<Sign> {
    let literal = raw.trim();

    let (negative, digits) = match literal.as_bytes().first()? {
        b'-' => (true, &literal[1..]),
        b'+' => (false, &literal[1..]),
        _ => (false, literal),
    };

    let mut seen_digit = false;
    let mut nonzero = false;
    let mut prev_underscore = false;

    for byte in digits.bytes() {
        match byte {
            b'0'..=b'9' => {
                seen_digit = true;
                prev_underscore = false;
                nonzero |= byte != b'0';
            }
            b'_' if seen_digit && !prev_underscore => prev_underscore = true,
            _ => return None,
        }
    }

    if !seen_digit || prev_underscore {
        return None;
    }

    if nonzero && !negative {
        Some(Sign::Positive)
    } else {
        Some(Sign::Negative)
    }
}
