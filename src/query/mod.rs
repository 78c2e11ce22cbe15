//! Query composition and response handling shared by the three operations.

pub mod aggregate;
pub mod explore;
pub mod get;

use base64::Engine;
use serde_json::Value;

use crate::error::WeaviateError;

/// One named argument slot in a composed query. Unset clauses are elided
/// entirely; a present-but-falsy value (`0`, `false`) is still emitted.
pub(crate) type Clause = (&'static str, Option<String>);

/// Folds the clauses, in their given canonical order, into a GraphQL
/// argument list containing only the present ones.
pub(crate) fn render_args(clauses: Vec<Clause>) -> String {
    clauses
        .into_iter()
        .filter_map(|(name, value)| value.map(|value| format!("{}: {}", name, value)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Quotes a string-valued argument, escaping backslashes and embedded quotes.
pub(crate) fn quote_string(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Builds a `nearImage` clause value from raw image bytes.
pub fn near_image(image: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(image);
    format!("{{image: \"{}\"}}", encoded)
}

/// Walks the response body to the operation's result path, e.g.
/// `data.Get.Article`. The value is returned verbatim; no parsing or
/// validation is applied.
pub(crate) fn unwrap_result(body: &Value, path: &[&str]) -> Option<Value> {
    let mut current = body;
    for key in path {
        current = current.get(key)?;
    }
    Some(current.clone())
}

/// Extracts the server's error payload from a failed Get/Aggregate response.
///
/// Probes the top-level `errors[].message` list first, then the
/// transport-structured `data.<op>.errors.messages` path. When neither
/// yields anything the raw body is stringified rather than swallowed.
pub(crate) fn extract_error(body: &Value, op: &str) -> WeaviateError {
    if let Some(messages) = top_level_messages(body) {
        return WeaviateError::GraphQl { messages };
    }
    if let Some(messages) = structured_messages(body, op) {
        return WeaviateError::GraphQl { messages };
    }
    tracing::warn!("error response had no recognizable error payload");
    WeaviateError::UnexpectedResponse(body.to_string())
}

fn top_level_messages(body: &Value) -> Option<Vec<String>> {
    let errors = body.get("errors")?.as_array()?;
    let messages: Vec<String> = errors
        .iter()
        .filter_map(|e| e.get("message").and_then(Value::as_str).map(str::to_string))
        .collect();
    if messages.is_empty() {
        None
    } else {
        Some(messages)
    }
}

fn structured_messages(body: &Value, op: &str) -> Option<Vec<String>> {
    let entries = body
        .get("data")?
        .get(op)?
        .get("errors")?
        .get("messages")?
        .as_array()?;
    let messages: Vec<String> = entries
        .iter()
        .filter_map(|m| m.as_str().map(str::to_string))
        .collect();
    if messages.is_empty() {
        None
    } else {
        Some(messages)
    }
}
