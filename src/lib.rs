//! A thin client for the Weaviate vector database's GraphQL API.
//!
//! The crate does two things: compose GraphQL query strings from sparse sets
//! of optional clauses (`Get`, `Aggregate`, `Explore`), and execute them over
//! HTTP, surfacing the server's error payload as [`WeaviateError`].
//!
//! Clause values are pre-serialized GraphQL substrings; the client performs
//! no schema validation and returns the nested result value verbatim.
//!
//! ```no_run
//! use weaviate_client::{ClientConfig, GetRequest, WeaviateClient};
//!
//! # async fn run() -> Result<(), weaviate_client::WeaviateError> {
//! let client = WeaviateClient::new(ClientConfig::new("http://localhost:8080"))?;
//! let articles = client
//!     .get(
//!         GetRequest::new("Article", "title url")
//!             .near_text("{concepts: [\"climate\"]}")
//!             .limit(5),
//!     )
//!     .await?;
//! println!("{articles}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod query;
pub mod transport;

pub use client::WeaviateClient;
pub use config::{ClientConfig, ProxyConfig};
pub use error::{Result, WeaviateError};
pub use query::aggregate::AggregateRequest;
pub use query::explore::ExploreRequest;
pub use query::get::GetRequest;
pub use query::near_image;
