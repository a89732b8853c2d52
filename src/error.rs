//! every way a single scrape can fail
use thiserror::Error;

/// Terminal failures of a scrape; none of these are retried
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// No target address was supplied
    #[error("URL is required")]
    MissingTarget,

    /// The target address isn't an absolute http(s) url
    #[error("invalid URL {target}: {reason}")]
    InvalidTarget {
        /// what the caller handed us
        target: String,
        /// why it was rejected
        reason: String,
    },

    /// The redirect chain grew past the configured cap
    #[error("too many redirects: gave up after {limit} hops at {url}")]
    TooManyRedirects {
        /// the url that asked for one redirect too many
        url: String,
        /// the cap that was hit
        limit: usize,
    },

    /// A redirect pointed somewhere that can't be parsed as a url
    #[error("invalid redirect location {location:?} from {url}")]
    InvalidRedirect {
        /// the url that sent the redirect
        url: String,
        /// raw value of the Location header
        location: String,
    },

    /// Connection, TLS, or timeout failure during the fetch
    #[error("request to {url} failed: {source}")]
    Network {
        /// the url being requested
        url: String,
        /// underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// The final response status wasn't 200
    #[error("HTTP {status}")]
    HttpStatus {
        /// numeric status code of the final response
        status: u16,
    },

    /// The response body couldn't be drained/decoded
    #[error("could not read response body from {url}: {source}")]
    Read {
        /// the url whose body failed
        url: String,
        /// underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// Plumbing failure while setting up the client or extractor
    #[error(transparent)]
    Setup(#[from] anyhow::Error),
}

impl ScrapeError {
    /// build an `InvalidTarget` from anything displayable
    pub(crate) fn invalid_target(target: &str, reason: impl std::fmt::Display) -> Self {
        Self::InvalidTarget {
            target: target.to_string(),
            reason: reason.to_string(),
        }
    }
}
