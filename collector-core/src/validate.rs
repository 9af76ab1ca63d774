use serde_json::Value;
use tracing::{debug, error};

use crate::error::ShapeError;

/// Top-level keys a current-weather response must carry.
pub const WEATHER_REQUIRED_KEYS: &[&str] = &["dt", "timezone", "main", "weather", "wind"];

/// Checks that `response` is a JSON object holding every key in `required`.
///
/// Only the top level is inspected. The error names the first missing key
/// in `required` order.
pub fn check_response(response: &Value, required: &[&str]) -> Result<(), ShapeError> {
    let Some(object) = response.as_object() else {
        let found = json_type_name(response);
        error!(found, "Unexpected API response type");
        return Err(ShapeError::NotAnObject { found });
    };

    if let Some(missing) = required.iter().find(|key| !object.contains_key(**key)) {
        error!(key = *missing, "API response is missing expected key");
        return Err(ShapeError::MissingKey((*missing).to_string()));
    }

    debug!("API response has the expected shape");
    Ok(())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
