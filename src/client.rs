use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{Result, WeaviateError};
use crate::query::aggregate::AggregateRequest;
use crate::query::explore::ExploreRequest;
use crate::query::get::GetRequest;
use crate::query::{extract_error, unwrap_result};
use crate::transport::GraphQlTransport;

/// Facade over the Weaviate GraphQL API.
///
/// Each call composes one query, executes it, and returns the nested result
/// value verbatim. There is no retry or recovery; execution errors are
/// re-raised as [`WeaviateError`] carrying the server's message list.
#[derive(Debug, Clone)]
pub struct WeaviateClient {
    transport: GraphQlTransport,
}

impl WeaviateClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: GraphQlTransport::new(&config)?,
        })
    }

    /// Retrieves objects from a collection. Returns the value at
    /// `data.Get.<class_name>` untouched.
    pub async fn get(&self, request: GetRequest) -> Result<Value> {
        tracing::debug!(class = %request.class_name, "dispatching Get query");
        let body = self
            .transport
            .execute(&request.compose(), request.variables())
            .await?;
        settle(body, "get", &["data", "Get", request.class_name.as_str()])
    }

    /// Runs an aggregation over a collection. Returns the value at
    /// `data.Aggregate.<class_name>` untouched.
    pub async fn aggs(&self, request: AggregateRequest) -> Result<Value> {
        tracing::debug!(class = %request.class_name, "dispatching Aggregate query");
        let body = self
            .transport
            .execute(&request.compose(), request.variables())
            .await?;
        settle(
            body,
            "aggregate",
            &["data", "Aggregate", request.class_name.as_str()],
        )
    }

    /// Cross-collection concept exploration. Returns the value at
    /// `data.Explore` untouched.
    pub async fn explore(&self, request: ExploreRequest) -> Result<Value> {
        tracing::debug!("dispatching Explore query");
        let body = self
            .transport
            .execute(&request.compose(), request.variables())
            .await?;
        settle_explore(body)
    }
}

fn settle(body: Value, op: &str, path: &[&str]) -> Result<Value> {
    if body.get("errors").map_or(false, |e| !e.is_null()) {
        return Err(extract_error(&body, op));
    }
    unwrap_result(&body, path).ok_or_else(|| extract_error(&body, op))
}

/// Explore has no structured error path; a failed response is surfaced as
/// the stringified raw body.
fn settle_explore(body: Value) -> Result<Value> {
    if body.get("errors").map_or(false, |e| !e.is_null()) {
        return Err(WeaviateError::UnexpectedResponse(body.to_string()));
    }
    unwrap_result(&body, &["data", "Explore"])
        .ok_or_else(|| WeaviateError::UnexpectedResponse(body.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_rejects_invalid_base_url() {
        let result = WeaviateClient::new(ClientConfig::new("not a url"));
        assert!(matches!(result, Err(WeaviateError::InvalidUrl(_))));
    }

    #[test]
    fn test_settle_unwraps_result_path() {
        let body = json!({"data": {"Get": {"Article": [{"title": "a"}]}}});
        let result = settle(body, "get", &["data", "Get", "Article"]).unwrap();
        assert_eq!(result, json!([{"title": "a"}]));
    }

    #[test]
    fn test_settle_prefers_top_level_messages() {
        let body = json!({
            "errors": [{"message": "syntax error"}],
            "data": {"get": {"errors": {"messages": ["field X not found"]}}}
        });
        match settle(body, "get", &["data", "Get", "Article"]).unwrap_err() {
            WeaviateError::GraphQl { messages } => {
                assert_eq!(messages, vec!["syntax error"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_settle_raises_structured_error_payload() {
        // Only the transport-structured path carries messages here.
        let body = json!({"data": {"get": {"errors": {"messages": ["field X not found"]}}}});
        match settle(body, "get", &["data", "Get", "Article"]).unwrap_err() {
            WeaviateError::GraphQl { messages } => {
                assert_eq!(messages, vec!["field X not found"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_settle_missing_result_is_not_swallowed() {
        let body = json!({"data": {"Get": {}}});
        assert!(settle(body, "get", &["data", "Get", "Article"]).is_err());
    }

    #[test]
    fn test_settle_explore_stringifies_raw_error() {
        let body = json!({"errors": [{"message": "no structured path"}]});
        let raw = body.to_string();
        match settle_explore(body).unwrap_err() {
            WeaviateError::UnexpectedResponse(text) => assert_eq!(text, raw),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_surfaces_transport_error() {
        let client = WeaviateClient::new(ClientConfig::new("http://127.0.0.1:1")).unwrap();
        let result = client.get(GetRequest::new("Article", "title")).await;
        assert!(matches!(result, Err(WeaviateError::Http(_))));
    }

    #[test]
    fn test_settle_explore_unwraps_top_level_path() {
        let body = json!({"data": {"Explore": [{"beacon": "weaviate://x"}]}});
        let result = settle_explore(body).unwrap();
        assert_eq!(result, json!([{"beacon": "weaviate://x"}]));
    }
}
