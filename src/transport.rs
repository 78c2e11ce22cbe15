use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::config::{build_http_client, ClientConfig};
use crate::error::{Result, WeaviateError};

/// Executes GraphQL requests against a Weaviate endpoint.
///
/// Each call is a single, independent request; connection pooling and reuse
/// are left to the underlying [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct GraphQlTransport {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Value,
}

impl GraphQlTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base = reqwest::Url::parse(&config.base_url)
            .map_err(|e| WeaviateError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        let endpoint = format!("{}/v1/graphql", base.as_str().trim_end_matches('/'));
        let client = build_http_client(config)?;

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key.clone(),
        })
    }

    /// Sends one query with its bound variables and returns the raw response
    /// body. Non-2xx statuses surface as [`WeaviateError::Api`]; GraphQL
    /// execution errors stay in the body for the caller to interpret.
    pub async fn execute(&self, query: &str, variables: Value) -> Result<Value> {
        tracing::debug!(endpoint = %self.endpoint, "executing graphql query");

        let body = GraphQlRequest { query, variables };

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return Err(WeaviateError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(response.json().await?)
    }
}
