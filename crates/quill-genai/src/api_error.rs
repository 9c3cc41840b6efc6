//! Non-success responses from the Generative Language API.
//!
//! Errors arrive as `{"error": {"code", "message", "status", "details"}}`.
//! Quota errors (429, `RESOURCE_EXHAUSTED`) carry the wait either in a
//! `Retry-After` header or in a `google.rpc.RetryInfo` detail.

use serde::Deserialize;
use serde_json::Value;

use crate::error::GenAiError;

/// Wait applied when a quota error names no delay.
const DEFAULT_RETRY_SECS: u64 = 60;

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorStatus,
}

#[derive(Debug, Deserialize)]
struct ErrorStatus {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    details: Vec<Value>,
}

/// Pass a successful response through; turn anything else into a [`GenAiError`].
pub async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, GenAiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let retry_after = resp
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok());
    let body = resp.text().await.unwrap_or_default();
    Err(api_error(status.as_u16(), &body, retry_after))
}

/// Map a status and error body to [`GenAiError`].
///
/// `Api.message` is `"<STATUS>: <message>"` from the envelope, or the raw
/// body when it is not one.
fn api_error(status: u16, body: &str, retry_after: Option<u64>) -> GenAiError {
    let envelope = serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.error);

    if status == 429 {
        let retry_after_secs = retry_after
            .or_else(|| envelope.as_ref().and_then(retry_delay))
            .unwrap_or(DEFAULT_RETRY_SECS);
        return GenAiError::RateLimited { retry_after_secs };
    }

    let message = match envelope {
        Some(error) if !error.message.is_empty() => {
            if error.status.is_empty() {
                error.message
            } else {
                format!("{}: {}", error.status, error.message)
            }
        }
        _ => body.trim().to_string(),
    };
    GenAiError::Api { status, message }
}

fn retry_delay(error: &ErrorStatus) -> Option<u64> {
    error
        .details
        .iter()
        .filter(|detail| {
            detail
                .get("@type")
                .and_then(Value::as_str)
                .is_some_and(|kind| kind.ends_with("google.rpc.RetryInfo"))
        })
        .find_map(|detail| detail.get("retryDelay")?.as_str())
        .and_then(parse_duration_secs)
}

/// Protobuf JSON duration (`"37s"`, `"1.5s"`), rounded up to whole seconds.
fn parse_duration_secs(value: &str) -> Option<u64> {
    let digits = value.trim().strip_suffix('s')?;
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    let whole = whole.parse::<u64>().ok()?;
    let round_up = fraction.bytes().any(|b| b != b'0');
    Some(whole + u64::from(round_up))
}
