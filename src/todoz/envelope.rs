//! Text rendering of [`Outcome`] envelopes.

use crate::outcome::Outcome;

/// Returned when an outcome cannot be serialized.
pub const SERIALIZATION_FAILURE: &str =
    "{\"status\":\"error\", \"message\":\"Failed to serialize response.\"}";

pub fn render(outcome: &Outcome, pretty: bool) -> String {
    let rendered = if pretty {
        serde_json::to_string_pretty(outcome)
    } else {
        serde_json::to_string(outcome)
    };
    rendered.unwrap_or_else(|_| SERIALIZATION_FAILURE.to_string())
}
