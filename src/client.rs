use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::{redirect::Policy, tls, Client};
use std::time::Duration;

use crate::config::Configuration;

/// Configuration struct for initializing a reqwest client
pub struct ClientConfig<'a> {
    /// The overall timeout for requests in seconds
    pub timeout: u64,
    /// Seconds allowed to connect, TLS handshake included
    pub connect_timeout: u64,
    /// Seconds an idle pooled connection is kept around
    pub idle_timeout: u64,
    /// Maximum number of idle pooled connections
    pub max_idle_connections: usize,
    /// The User-Agent string to use for requests
    pub user_agent: &'a str,
    /// The Accept header value
    pub accept: &'a str,
    /// The Accept-Language header value
    pub accept_language: &'a str,
}

impl<'a> From<&'a Configuration> for ClientConfig<'a> {
    fn from(config: &'a Configuration) -> Self {
        Self {
            timeout: config.timeout,
            connect_timeout: config.connect_timeout,
            idle_timeout: config.idle_timeout,
            max_idle_connections: config.max_idle_connections,
            user_agent: &config.user_agent,
            accept: &config.accept,
            accept_language: &config.accept_language,
        }
    }
}

/// Create and return an instance of [reqwest::Client](https://docs.rs/reqwest/latest/reqwest/struct.Client.html)
///
/// TLS is pinned to 1.2..=1.3, responses are transparently decompressed, and the client
/// never follows redirects on its own; the fetcher walks redirect chains itself so it can
/// re-attach the original request's cookies on every hop
pub fn initialize(config: ClientConfig<'_>) -> Result<Client> {
    let mut header_map = HeaderMap::new();

    header_map.insert(
        ACCEPT,
        HeaderValue::from_str(config.accept)
            .with_context(|| format!("invalid Accept header value: {}", config.accept))?,
    );
    header_map.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_str(config.accept_language).with_context(|| {
            format!(
                "invalid Accept-Language header value: {}",
                config.accept_language
            )
        })?,
    );

    let client = Client::builder()
        .use_rustls_tls()
        .min_tls_version(tls::Version::TLS_1_2)
        .max_tls_version(tls::Version::TLS_1_3)
        .timeout(Duration::from_secs(config.timeout))
        .connect_timeout(Duration::from_secs(config.connect_timeout))
        .pool_idle_timeout(Duration::from_secs(config.idle_timeout))
        .pool_max_idle_per_host(config.max_idle_connections)
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .user_agent(config.user_agent)
        .default_headers(header_map)
        .redirect(Policy::none())
        .http1_title_case_headers();

    client.build().context("could not build HTTP client")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// create client from the default configuration, expect no error
    fn client_from_default_configuration() {
        let config = Configuration::default();
        let client = initialize(ClientConfig::from(&config));

        assert!(client.is_ok());
    }

    #[test]
    /// header values that can't go on the wire are rejected up front
    fn client_with_bad_accept_language() {
        let config = Configuration {
            accept_language: "zh-TW\nInjected: yes".to_string(),
            ..Default::default()
        };
        let client = initialize(ClientConfig::from(&config));

        assert!(client.is_err());
        assert!(client
            .unwrap_err()
            .to_string()
            .contains("invalid Accept-Language header value"));
    }

    #[test]
    /// ClientConfig mirrors the configuration it was built from
    fn client_config_from_configuration() {
        let config = Configuration {
            timeout: 3,
            user_agent: "stuff".to_string(),
            ..Default::default()
        };
        let client_config = ClientConfig::from(&config);

        assert_eq!(client_config.timeout, 3);
        assert_eq!(client_config.connect_timeout, 10);
        assert_eq!(client_config.idle_timeout, 30);
        assert_eq!(client_config.max_idle_connections, 10);
        assert_eq!(client_config.user_agent, "stuff");
    }
}
