use thiserror::Error;

pub type Result<T> = std::result::Result<T, WeaviateError>;

#[derive(Debug, Error)]
pub enum WeaviateError {
    /// The server executed the request and returned GraphQL errors.
    #[error("graphql execution failed: {}", .messages.join("; "))]
    GraphQl { messages: Vec<String> },

    /// The server rejected the request before executing it.
    #[error("server returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The response did not have the expected shape; carries the raw body.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}
