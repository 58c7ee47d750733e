//! Backend response envelope unwrapping.

use serde_json::Value;

use super::error::ApiError;

/// The envelope's sole success discriminator.
const SUCCESS_CODE: i64 = 200;

/// Unwrap a 2xx response body.
///
/// A body carrying a `code` field resolves to its `data` when the code is
/// 200 and classifies as an application error otherwise. A body with no
/// `code` field passes through verbatim.
pub fn unwrap(mut body: Value) -> Result<Value, ApiError> {
    let code = match body.get("code") {
        None => return Ok(body),
        Some(value) => value.as_i64(),
    };
    if code == Some(SUCCESS_CODE) {
        // An absent `data` resolves as null, matching an empty-success
        // envelope from the backend.
        return Ok(body.get_mut("data").map(Value::take).unwrap_or(Value::Null));
    }
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(ToString::to_string);
    Err(ApiError::Application {
        code: code.unwrap_or(-1),
        message,
    })
}
