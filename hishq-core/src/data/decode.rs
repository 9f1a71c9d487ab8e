//! JSONP envelope decoding.
//!
//! The provider answers with a JSON payload wrapped in a named callback:
//! `historySearchHandler([{ "status": "0", "hq": [...], "stat": [...] }])`.
//! Decoding strips the wrapper, checks the status code, and turns the `hq`
//! rows into an ordered history. The positional `stat` array is carried raw
//! for the summary constructor.

use serde::Deserialize;
use serde_json::Value;

use super::provider::QuoteError;
use crate::domain::{QuoteHistory, QuoteRow};

/// Decoded payload: the ordered rows plus the raw positional summary.
#[derive(Debug, Clone, Default)]
pub struct DecodedResponse {
    pub history: QuoteHistory,
    pub stat: Vec<String>,
}

/// First element of the response array.
///
/// `hq` and `stat` are absent on failure responses; `msg` is only present
/// when the provider embeds a rejection message.
#[derive(Debug, Deserialize)]
struct EnvelopeBody {
    status: Value,
    #[serde(default)]
    hq: Vec<Vec<Value>>,
    #[serde(default)]
    stat: Vec<Value>,
    #[serde(default)]
    msg: Option<String>,
}

/// Decode a raw provider response into rows and summary values.
pub fn decode(raw: &str) -> Result<DecodedResponse, QuoteError> {
    let inner = unwrap_callback(raw)?;

    let value: Value =
        serde_json::from_str(inner).map_err(|e| QuoteError::Json(e.to_string()))?;
    let bodies: Vec<EnvelopeBody> =
        serde_json::from_value(value).map_err(|e| QuoteError::Format(e.to_string()))?;
    let body = bodies
        .into_iter()
        .next()
        .ok_or_else(|| QuoteError::Format("response array is empty".into()))?;

    let status = scalar_to_string(&body.status);
    if status != "0" {
        log::warn!("provider rejected request: status {status}");
        return Err(QuoteError::Provider {
            status,
            message: body.msg,
        });
    }

    let mut history = QuoteHistory::new();
    for item in &body.hq {
        let mut values = item.iter().map(scalar_to_string);
        let date = values
            .next()
            .ok_or_else(|| QuoteError::Format("hq row has no date key".into()))?;
        let fields: Vec<String> = values.collect();
        history.insert(date, QuoteRow::from_fields(&fields));
    }

    let stat = body.stat.iter().map(scalar_to_string).collect();
    Ok(DecodedResponse { history, stat })
}

/// Strip the callback wrapper: everything between the first `(` and the
/// last `)`.
fn unwrap_callback(raw: &str) -> Result<&str, QuoteError> {
    let start = raw
        .find('(')
        .ok_or_else(|| QuoteError::Envelope("no opening parenthesis".into()))?;
    let end = raw
        .rfind(')')
        .ok_or_else(|| QuoteError::Envelope("no closing parenthesis".into()))?;
    if end <= start {
        return Err(QuoteError::Envelope(
            "closing parenthesis precedes opening".into(),
        ));
    }
    Ok(&raw[start + 1..end])
}

/// Provider scalars are usually strings, but statuses and some summary
/// positions arrive as bare numbers. Null becomes the empty string.
fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
