use framebus_channel::MessageEnvelope;
use serde_json::Value;
use tracing::error;

use crate::display::ErrorDisplay;
use crate::error::ValidationError;

/// Check an inbound or outbound wire value for well-formedness.
///
/// True iff the value is a JSON object with a non-empty string `eventCode`
/// and a non-empty string `source`. The two failure modes report
/// differently, and deliberately so:
///
/// - a value that is not an object, or has no usable `eventCode`, fails
///   silently — it is not one of ours;
/// - a value that passes the `eventCode` check but lacks a `source` is a
///   malformed message from a known sender, and is reported through the
///   error display and the diagnostic log.
pub fn format_valid(value: &Value, errors: &dyn ErrorDisplay) -> bool {
    let Some(object) = value.as_object() else {
        return false;
    };
    if !is_nonempty_string(object.get("eventCode")) {
        return false;
    }

    if !is_nonempty_string(object.get("source")) {
        let report = ValidationError::MissingSource.to_string();
        errors.show_error(&report);
        error!(payload = %value, "{report}");
        return false;
    }
    true
}

/// Check a delivered envelope against the expected event code.
///
/// True iff the payload is well-formed per [`format_valid`] and its
/// `eventCode` equals `event_code`.
pub fn receive_valid(envelope: &MessageEnvelope, event_code: &str, errors: &dyn ErrorDisplay) -> bool {
    format_valid(&envelope.payload, errors)
        && envelope.payload.get("eventCode").and_then(Value::as_str) == Some(event_code)
}

fn is_nonempty_string(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_str)
        .is_some_and(|s| !s.is_empty())
}
