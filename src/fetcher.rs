//! single-page retrieval: browser-like headers, site cookies, and a bounded redirect walk
use std::time::{Duration, Instant};

use reqwest::{
    header::{COOKIE, LOCATION},
    Client, Response, StatusCode, Url,
};

use crate::{
    client::{self, ClientConfig},
    config::Configuration,
    target::UrlExt,
    ScrapeError,
};

/// Cookies certain sites need before they'll serve their real content
///
/// matched against the target's host with a substring match, i.e. `www.ptt.cc` matches `ptt.cc`
const SITE_COOKIES: &[(&str, &str)] = &[
    // ptt's age gate; without it every board page is an "are you over 18?" interstitial
    ("ptt.cc", "over18=1"),
];

/// consent/session cookies to attach for a known host, if any
pub fn site_cookies(target: &Url) -> Option<&'static str> {
    SITE_COOKIES
        .iter()
        .find(|(domain, _)| target.host_contains(domain))
        .map(|(_, cookie)| *cookie)
}

/// Performs the single GET a scrape is built on
#[derive(Debug)]
pub struct Fetcher {
    /// preconfigured client; never follows redirects on its own
    client: Client,

    /// user supplied `name=value` cookies
    cookies: Vec<String>,

    /// number of redirects followed before giving up
    max_redirects: usize,

    /// budget for the whole fetch: every hop plus reading the final body
    timeout: Duration,
}

impl Fetcher {
    /// build a fetcher (and its client) from the given configuration
    pub fn new(config: &Configuration) -> Result<Self, ScrapeError> {
        let client = client::initialize(ClientConfig::from(config))?;

        Ok(Self {
            client,
            cookies: config.cookies.clone(),
            max_redirects: config.max_redirects,
            timeout: Duration::from_secs(config.timeout),
        })
    }

    /// value of the `Cookie` header for the original request to `target`
    ///
    /// site cookies come first, followed by any user supplied cookies
    pub fn cookie_header(&self, target: &Url) -> Option<String> {
        let cookies: Vec<&str> = site_cookies(target)
            .into_iter()
            .chain(self.cookies.iter().map(String::as_str))
            .collect();

        if cookies.is_empty() {
            None
        } else {
            Some(cookies.join("; "))
        }
    }

    /// GET `target` and return its body as text
    ///
    /// redirects (301, 302, 303, 307, 308) are followed up to the configured cap, each hop
    /// carrying the cookies of the original request; the final response must be exactly
    /// `200 OK`
    ///
    /// the configured timeout bounds the fetch as a whole; each hop only gets whatever is left
    /// of it
    pub async fn fetch(&self, target: &Url) -> Result<String, ScrapeError> {
        log::trace!("enter: fetch({})", target);

        let deadline = Instant::now() + self.timeout;
        let cookie_header = self.cookie_header(target);
        let mut current = target.clone();
        let mut redirects = 0;

        let response = loop {
            let response = self
                .send(&current, cookie_header.as_deref(), deadline)
                .await?;

            let Some(next) = redirect_location(&current, &response)? else {
                break response;
            };

            if redirects >= self.max_redirects {
                log::warn!(
                    "{} asked for redirect {} (cap is {})",
                    current,
                    redirects + 1,
                    self.max_redirects
                );
                return Err(ScrapeError::TooManyRedirects {
                    url: current.to_string(),
                    limit: self.max_redirects,
                });
            }

            redirects += 1;
            log::debug!(
                "following redirect {}/{}: {} -> {}",
                redirects,
                self.max_redirects,
                current,
                next
            );
            current = next;
        };

        let status = response.status();

        if status != StatusCode::OK {
            log::debug!("{} responded with {}", current, status);
            return Err(ScrapeError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| {
            if source.is_timeout() {
                ScrapeError::Network {
                    url: current.to_string(),
                    source,
                }
            } else {
                ScrapeError::Read {
                    url: current.to_string(),
                    source,
                }
            }
        })?;

        log::trace!("exit: fetch -> {} bytes from {}", body.len(), current);
        Ok(body)
    }

    /// issue one GET, attaching the original request's cookies
    ///
    /// the request (body included) times out at `deadline`; past it, the request fails at once
    async fn send(
        &self,
        url: &Url,
        cookie_header: Option<&str>,
        deadline: Instant,
    ) -> Result<Response, ScrapeError> {
        let remaining = deadline.saturating_duration_since(Instant::now());
        let mut request = self.client.get(url.clone()).timeout(remaining);

        if let Some(cookies) = cookie_header {
            request = request.header(COOKIE, cookies);
        }

        request.send().await.map_err(|source| ScrapeError::Network {
            url: url.to_string(),
            source,
        })
    }
}

/// where `response` (fetched from `current`) redirects to, if it's a redirect at all
///
/// a redirect status without a Location header isn't followed; it's handed back as the final
/// response and fails the status check like any other non-200
fn redirect_location(current: &Url, response: &Response) -> Result<Option<Url>, ScrapeError> {
    if !matches!(
        response.status(),
        StatusCode::MOVED_PERMANENTLY
            | StatusCode::FOUND
            | StatusCode::SEE_OTHER
            | StatusCode::TEMPORARY_REDIRECT
            | StatusCode::PERMANENT_REDIRECT
    ) {
        return Ok(None);
    }

    let Some(location) = response.headers().get(LOCATION) else {
        return Ok(None);
    };

    let invalid = || ScrapeError::InvalidRedirect {
        url: current.to_string(),
        location: String::from_utf8_lossy(location.as_bytes()).into_owned(),
    };

    let location = location.to_str().map_err(|_| invalid())?;

    // relative locations resolve against the hop that sent them
    current.join(location).map(Some).map_err(|_| invalid())
}
