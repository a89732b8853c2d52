use crate::{
    DEFAULT_ACCEPT, DEFAULT_ACCEPT_LANGUAGE, DEFAULT_CONNECT_TIMEOUT, DEFAULT_IDLE_TIMEOUT,
    DEFAULT_MAX_IDLE_CONNECTIONS, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT,
};

/// default overall request timeout
pub(super) fn timeout() -> u64 {
    DEFAULT_TIMEOUT
}

/// default connect/tls handshake timeout
pub(super) fn connect_timeout() -> u64 {
    DEFAULT_CONNECT_TIMEOUT
}

/// default idle connection timeout
pub(super) fn idle_timeout() -> u64 {
    DEFAULT_IDLE_TIMEOUT
}

/// default cap on idle pooled connections
pub(super) fn max_idle_connections() -> usize {
    DEFAULT_MAX_IDLE_CONNECTIONS
}

/// default redirect cap
pub(super) fn max_redirects() -> usize {
    DEFAULT_MAX_REDIRECTS
}

/// default user-agent
pub(super) fn user_agent() -> String {
    String::from(DEFAULT_USER_AGENT)
}

/// default Accept header
pub(super) fn accept() -> String {
    String::from(DEFAULT_ACCEPT)
}

/// default Accept-Language header
pub(super) fn accept_language() -> String {
    String::from(DEFAULT_ACCEPT_LANGUAGE)
}

/// split a `--cookies` value into individual `name=value` pairs
///
/// a single value may hold several cookies separated by `;`, i.e. `-b "a=1; b=2"`; whitespace
/// around names and values is dropped and empty parts are skipped
pub(super) fn split_cookies(raw: &str) -> Vec<String> {
    raw.split(';')
        .filter_map(|part| {
            let trimmed = part.trim();
            if trimmed.is_empty() {
                return None;
            }

            match trimmed.split_once('=') {
                Some((name, value)) => Some(format!("{}={}", name.trim(), value.trim())),
                None => Some(trimmed.to_string()),
            }
        })
        .collect()
}
