//! Extracts the JSON literal out of the provider's JSONP response.
//!
//! The provider only ever wraps its payload in `jsonrun_Today(...)`.
//! If it starts using another callback name every lookup will fall
//! back until this pattern is updated.

use std::sync::LazyLock;

use regex::Regex;

use super::CalendarError;

static JSONRUN_TODAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"jsonrun_Today\(([\s\S]*)\);?\s*$").expect("Invalid JSONP pattern")
});

/// Returns the text between `jsonrun_Today(` and the closing `)` at the
/// end of the body. An optional `;` and trailing whitespace are allowed
/// after the call, anything else is a shape error.
pub fn extract_payload(body: &str) -> Result<&str, CalendarError> {
    JSONRUN_TODAY
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|payload| !payload.is_empty())
        .ok_or(CalendarError::Shape)
}
