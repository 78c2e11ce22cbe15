use std::time::Duration;

use reqwest::Client;

use crate::error::{Result, WeaviateError};

/// Connection settings for a Weaviate instance.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the instance, e.g. `http://localhost:8080`.
    pub base_url: String,
    /// API key sent as a bearer token when set.
    pub api_key: Option<String>,
    /// Request timeout in seconds (reqwest's default if None).
    pub timeout_seconds: Option<u64>,
    pub proxy: Option<ProxyConfig>,
}

#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub url: String,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Hosts that bypass the proxy.
    pub no_proxy: Vec<String>,
    pub ignore_ssl_certificates: bool,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout_seconds: None,
            proxy: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = Some(timeout_seconds);
        self
    }

    pub fn with_proxy(mut self, proxy: ProxyConfig) -> Self {
        self.proxy = Some(proxy);
        self
    }
}

/// Builds the HTTP client, applying timeout and proxy configuration.
pub(crate) fn build_http_client(config: &ClientConfig) -> Result<Client> {
    let mut builder = Client::builder();

    if let Some(timeout_seconds) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(timeout_seconds));
    }

    if let Some(proxy_config) = &config.proxy {
        if !proxy_config.url.is_empty() {
            let proxy_url = reqwest::Url::parse(&proxy_config.url).map_err(|e| {
                WeaviateError::InvalidUrl(format!("proxy URL {}: {}", proxy_config.url, e))
            })?;
            match proxy_url.scheme() {
                "http" | "https" | "socks5" => {}
                other => {
                    return Err(WeaviateError::InvalidUrl(format!(
                        "unsupported proxy protocol '{}', only http, https and socks5 are supported",
                        other
                    )));
                }
            }

            if use_proxy_for(&config.base_url, &proxy_config.no_proxy) {
                let mut proxy = reqwest::Proxy::all(proxy_config.url.as_str())?;
                if let (Some(username), Some(password)) =
                    (&proxy_config.username, &proxy_config.password)
                {
                    proxy = proxy.basic_auth(username, password);
                }
                builder = builder.proxy(proxy);
            }
        }

        if proxy_config.ignore_ssl_certificates {
            builder = builder.danger_accept_invalid_certs(true);
        }
    }

    Ok(builder.build()?)
}

/// Checks the target host against the no-proxy list. An unparseable base URL
/// keeps the proxy enabled; URL validation happens in the transport.
fn use_proxy_for(base_url: &str, no_proxy: &[String]) -> bool {
    match reqwest::Url::parse(base_url) {
        Ok(url) => !no_proxy.iter().any(|no_proxy_host| {
            url.host_str()
                .map(|host| host.contains(no_proxy_host.as_str()) || no_proxy_host.contains(host))
                .unwrap_or(false)
        }),
        Err(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proxy(url: &str) -> ProxyConfig {
        ProxyConfig {
            url: url.to_string(),
            username: None,
            password: None,
            no_proxy: vec![],
            ignore_ssl_certificates: false,
        }
    }

    #[test]
    fn test_rejects_unsupported_proxy_scheme() {
        let config = ClientConfig::new("http://localhost:8080").with_proxy(proxy("ftp://proxy:3128"));
        let result = build_http_client(&config);
        assert!(matches!(result, Err(WeaviateError::InvalidUrl(_))));
    }

    #[test]
    fn test_builds_with_http_proxy() {
        let config = ClientConfig::new("http://localhost:8080").with_proxy(proxy("http://proxy:3128"));
        assert!(build_http_client(&config).is_ok());
    }

    #[test]
    fn test_builds_with_timeout() {
        let config = ClientConfig::new("http://localhost:8080").with_timeout(30);
        assert!(build_http_client(&config).is_ok());
    }

    #[test]
    fn test_no_proxy_bypasses_matching_host() {
        assert!(!use_proxy_for(
            "http://weaviate.internal:8080",
            &["weaviate.internal".to_string()]
        ));
        assert!(use_proxy_for(
            "http://weaviate.internal:8080",
            &["other.host".to_string()]
        ));
    }
}
