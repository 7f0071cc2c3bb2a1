//! Response Envelope
//!
//! Every backend response is wrapped as
//! `{ status_code, status: "ok" | "error", message, payload }`.
//! Decoding turns that into an explicit `Envelope` instead of poking at keys.

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Deserialize;
use serde_json::Value;

use super::error::{ApiError, ApiResult};
use crate::models::{Card, CardId};

#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<T> {
    Payload(T),
    Error { message: String },
}

#[derive(Deserialize)]
struct RawEnvelope<T> {
    status: Option<String>,
    message: Option<Value>,
    payload: Option<T>,
}

impl<T: DeserializeOwned> Envelope<T> {
    pub fn decode(body: &str) -> ApiResult<Self> {
        let raw: RawEnvelope<T> = serde_json::from_str(body)?;
        if raw.status.as_deref() == Some("error") {
            let message = raw
                .message
                .as_ref()
                .and_then(message_text)
                .unwrap_or_else(|| "Request rejected".to_string());
            return Ok(Envelope::Error { message });
        }
        match raw.payload {
            Some(payload) => Ok(Envelope::Payload(payload)),
            None => Err(ApiError::Decode("response carried no payload".to_string())),
        }
    }
}

impl<T> Envelope<T> {
    pub fn into_result(self) -> ApiResult<T> {
        match self {
            Envelope::Payload(payload) => Ok(payload),
            Envelope::Error { message } => Err(ApiError::Rejected { message }),
        }
    }
}

/// `message` may be a plain string or a structured validation error object
fn message_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Pull the `message` field out of an error body, if there is one
pub fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value.get("message").and_then(message_text)
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Turn a finished HTTP exchange into the payload or an `ApiError`.
/// `fallback` is the message used when a failed response has none.
pub fn interpret<T: DeserializeOwned>(status: u16, body: &str, fallback: &str) -> ApiResult<T> {
    if !is_success(status) {
        let message = error_message(body).unwrap_or_else(|| fallback.to_string());
        return Err(ApiError::Status { status, message });
    }
    Envelope::<T>::decode(body)?.into_result()
}

/// Like `interpret`, for calls whose payload is irrelevant (delete).
/// An empty 2xx body counts as success.
pub fn interpret_ack(status: u16, body: &str, fallback: &str) -> ApiResult<()> {
    if !is_success(status) {
        let message = error_message(body).unwrap_or_else(|| fallback.to_string());
        return Err(ApiError::Status { status, message });
    }
    if body.trim().is_empty() {
        return Ok(());
    }
    let raw: RawEnvelope<IgnoredAny> = serde_json::from_str(body)?;
    if raw.status.as_deref() == Some("error") {
        let message = raw
            .message
            .as_ref()
            .and_then(message_text)
            .unwrap_or_else(|| fallback.to_string());
        return Err(ApiError::Rejected { message });
    }
    Ok(())
}

/// `update` result: the echoed card when the backend sent one. A 2xx body
/// without a usable card is still a successful update.
pub fn interpret_echo(status: u16, body: &str, fallback: &str) -> ApiResult<Option<Card>> {
    match interpret::<Card>(status, body, fallback) {
        Ok(card) => Ok(Some(card)),
        Err(ApiError::Decode(e)) => {
            log::debug!("Update response had no usable card: {}", e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// `GET /cards/?id=` payload: the backend sends a single object, older
/// endpoints wrapped it in an array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(Card),
    Many(Vec<Card>),
}

impl OneOrMany {
    pub fn into_single(self, id: &CardId) -> ApiResult<Option<Card>> {
        match self {
            OneOrMany::One(card) => Ok(Some(card)),
            OneOrMany::Many(mut cards) => match cards.len() {
                0 => Ok(None),
                1 => Ok(cards.pop()),
                count => Err(ApiError::Ambiguous { id: id.clone(), count }),
            },
        }
    }
}
