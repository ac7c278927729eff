//! API response validation
//!
//! Checks the shape of the raw `homework_statuses` payload before any
//! submission is read from it. Elements of `homeworks` are not inspected here.

use serde_json::Value;

use crate::error::ValidationError;

pub const HOMEWORKS_KEY: &str = "homeworks";
pub const CURRENT_DATE_KEY: &str = "current_date";

/// Returns the `homeworks` list of a response, possibly empty
pub fn check_response(response: &Value) -> Result<&[Value], ValidationError> {
    let object = response.as_object().ok_or_else(|| {
        ValidationError::MalformedResponse(format!(
            "expected a JSON object, got {}",
            json_kind(response)
        ))
    })?;

    for key in [HOMEWORKS_KEY, CURRENT_DATE_KEY] {
        if !object.contains_key(key) {
            return Err(ValidationError::EmptyResponse(key));
        }
    }

    match &object[HOMEWORKS_KEY] {
        Value::Array(homeworks) => Ok(homeworks.as_slice()),
        other => Err(ValidationError::MalformedResponse(format!(
            "'{}' is not a list, got {}",
            HOMEWORKS_KEY,
            json_kind(other)
        ))),
    }
}

/// Server timestamp of the response, when it is an integer
pub fn current_date(response: &Value) -> Option<i64> {
    response.get(CURRENT_DATE_KEY).and_then(Value::as_i64)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
