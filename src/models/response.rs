//! The success-or-provider-error envelope returned by every operation.
//!
//! MercadoPago answers failed calls with a JSON body such as
//!
//! ```json
//! {"message": "Malformed access_token: null", "error": "bad_request", "status": 400, "cause": []}
//! ```
//!
//! These payloads are expected outcomes (a wrong id, a rejected token) and
//! are returned as [`ApiResponse::Failure`] rather than as an
//! [`Error`](crate::Error), so callers can inspect them without treating
//! every bad request as an exceptional condition.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Result;

/// Outcome of a MercadoPago API call.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    /// The provider accepted the request and returned a payload.
    Success(T),
    /// The provider returned an error payload.
    Failure(ApiErrorBody),
}

impl<T> ApiResponse<T> {
    /// Returns `true` for [`ApiResponse::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success(_))
    }

    /// Returns `true` for [`ApiResponse::Failure`].
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The success payload, if any.
    pub fn success(&self) -> Option<&T> {
        match self {
            ApiResponse::Success(value) => Some(value),
            ApiResponse::Failure(_) => None,
        }
    }

    /// The error payload, if any.
    pub fn failure(&self) -> Option<&ApiErrorBody> {
        match self {
            ApiResponse::Success(_) => None,
            ApiResponse::Failure(body) => Some(body),
        }
    }

    /// Convert into a standard `Result`.
    pub fn into_result(self) -> std::result::Result<T, ApiErrorBody> {
        match self {
            ApiResponse::Success(value) => Ok(value),
            ApiResponse::Failure(body) => Err(body),
        }
    }

    /// Map the success payload, leaving failures untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        match self {
            ApiResponse::Success(value) => ApiResponse::Success(f(value)),
            ApiResponse::Failure(body) => ApiResponse::Failure(body),
        }
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Interpret a decoded response body.
    ///
    /// A non-2xx status, or a body carrying a string `error` field, is a
    /// failure. Anything else must decode into `T`.
    pub(crate) fn from_parts(status: u16, body: Value) -> Result<Self> {
        let has_error_field = body.get("error").is_some_and(Value::is_string);

        if !(200..300).contains(&status) || has_error_field {
            return Ok(ApiResponse::Failure(ApiErrorBody::from_value(status, &body)));
        }

        Ok(ApiResponse::Success(serde_json::from_value(body)?))
    }
}

/// Error payload returned by the MercadoPago API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code, e.g. `bad_request` or `not_found`
    #[serde(default)]
    pub error: String,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
    /// HTTP status reported in the body (falls back to the response status)
    #[serde(default)]
    pub status: u16,
    /// Detailed causes, when the provider supplies them
    #[serde(default)]
    pub cause: Value,
}

impl ApiErrorBody {
    /// Extract an error payload from an arbitrary response body.
    ///
    /// Missing fields are filled in from the HTTP status so a bare `502`
    /// from a proxy still produces something inspectable.
    pub(crate) fn from_value(status: u16, body: &Value) -> Self {
        let error = body
            .get("error")
            .and_then(Value::as_str)
            .map(String::from)
            .unwrap_or_else(|| format!("http_{}", status));

        let message = match body {
            Value::String(text) => text.clone(),
            _ => body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Unknown API error")
                .to_string(),
        };

        let status = body
            .get("status")
            .and_then(|s| match s {
                Value::Number(n) => n.as_u64(),
                Value::String(s) => s.parse().ok(),
                _ => None,
            })
            .and_then(|s| u16::try_from(s).ok())
            .unwrap_or(status);

        Self {
            error,
            message,
            status,
            cause: body.get("cause").cloned().unwrap_or(Value::Null),
        }
    }
}

impl std::fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {}", self.error, self.status, self.message)
    }
}
