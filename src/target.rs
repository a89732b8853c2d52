use url::Url;

use crate::ScrapeError;

/// Parse the caller supplied address into an absolute http(s) `Url`
///
/// anything that isn't absolute, or that uses a scheme other than http/https, is rejected
/// up front rather than being handed to the client
pub fn parse_target(target: &str) -> Result<Url, ScrapeError> {
    log::trace!("enter: parse_target({})", target);

    let url = Url::parse(target.trim()).map_err(|e| ScrapeError::invalid_target(target, e))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ScrapeError::invalid_target(
            target,
            format!("unsupported scheme {}", url.scheme()),
        ));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(ScrapeError::invalid_target(target, "missing host"));
    }

    log::trace!("exit: parse_target -> {}", url);
    Ok(url)
}

/// small helpers on top of `Url` used when shaping requests and resolving candidates
pub trait UrlExt {
    /// `scheme://host[:port]` of the url, no trailing slash
    ///
    /// the port is only present when it isn't the scheme's default
    fn origin_prefix(&self) -> String;

    /// whether the host contains `domain` anywhere in it
    fn host_contains(&self, domain: &str) -> bool;
}

impl UrlExt for Url {
    fn origin_prefix(&self) -> String {
        let host = self.host_str().unwrap_or_default();

        match self.port() {
            Some(port) => format!("{}://{}:{}", self.scheme(), host, port),
            None => format!("{}://{}", self.scheme(), host),
        }
    }

    fn host_contains(&self, domain: &str) -> bool {
        self.host_str()
            .map(|host| host.contains(domain))
            .unwrap_or(false)
    }
}
