//! Backend error envelope and its normalization into one message.
//!
//! The backend answers failures with `{ "error": "...", "details": [{ "msg":
//! "..." }] }`. Field-level `details` win over the generic `error`, and a
//! missing envelope falls back to a per-operation default.
//!
//! Fields are read independently: a malformed `details` never hides a usable
//! `error`.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub error: Option<String>,
    pub details: Option<Vec<ErrorDetail>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorDetail {
    pub msg: String,
}

impl ErrorEnvelope {
    /// Parse a failure body. Anything that is not an envelope reads as empty.
    #[must_use]
    pub fn parse(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => Self::from_value(&value),
            Err(e) => {
                tracing::debug!(error = %e, "failure body is not JSON");
                Self::default()
            }
        }
    }

    /// Pick the envelope fields out of an arbitrary JSON value. A field with
    /// the wrong shape reads as absent.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let error = value.get("error").and_then(Value::as_str).map(str::to_owned);
        let details = match value.get("details") {
            None | Some(Value::Null) => None,
            Some(raw) => match Vec::<ErrorDetail>::deserialize(raw) {
                Ok(details) => Some(details),
                Err(e) => {
                    tracing::debug!(error = %e, "ignoring malformed error details");
                    None
                }
            },
        };
        Self { error, details }
    }

    /// Message to show for this failure.
    #[must_use]
    pub fn message(&self, fallback: &str) -> String {
        match self.details.as_deref() {
            Some(details) if !details.is_empty() => details
                .iter()
                .map(|detail| detail.msg.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            _ => self.error.clone().unwrap_or_else(|| fallback.to_owned()),
        }
    }
}

/// Normalize a failure body into the message surfaced to the caller.
#[must_use]
pub fn failure_message(body: &str, fallback: &str) -> String {
    ErrorEnvelope::parse(body).message(fallback)
}
