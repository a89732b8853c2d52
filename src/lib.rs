use std::sync::Arc;

use anyhow::Context;

use crate::{config::Configuration, extractor::ExtractorBuilder, fetcher::Fetcher};

pub mod client;
pub mod config;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod image_set;
pub mod logger;
mod message;
pub mod parser;
pub mod result;
mod traits;
pub mod target;
mod utils;

pub use crate::error::ScrapeError;
pub use crate::result::ScrapeResult;
pub use crate::traits::ScoutSerialize;

/// Overall request timeout in seconds; covers connecting, the TLS handshake and the transfer
pub const DEFAULT_TIMEOUT: u64 = 15;

/// Seconds allowed for the TCP connect + TLS handshake of a single connection
pub const DEFAULT_CONNECT_TIMEOUT: u64 = 10;

/// Seconds an idle pooled connection is kept around
pub const DEFAULT_IDLE_TIMEOUT: u64 = 30;

/// Maximum number of idle pooled connections
pub const DEFAULT_MAX_IDLE_CONNECTIONS: usize = 10;

/// Maximum number of redirects followed before giving up
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Desktop browser User-Agent; plenty of sites serve stripped-down markup to anything else
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Accept header sent with every request
pub const DEFAULT_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Accept-Language header; biased toward zh-TW so bulletin-board sites render their
/// traditional chinese pages
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "zh-TW,zh;q=0.9,en-US;q=0.8,en;q=0.7";

/// Scrape the target named in `config` and fold any failure into the returned [ScrapeResult]
///
/// never fails; a missing/invalid target, a network problem, or a non-200 status all show up
/// as `success: false` with a human readable `error`
pub async fn scrape(config: Arc<Configuration>) -> ScrapeResult {
    log::trace!("enter: scrape({})", config.target_url);

    let result = match try_scrape(&config.target_url, &config).await {
        Ok(images) => ScrapeResult::success(images),
        Err(e) => {
            log::warn!("could not scrape {}: {}", config.target_url, e);
            ScrapeResult::failure(e)
        }
    };

    log::trace!("exit: scrape -> {}", result);
    result
}

/// Fetch `address` and extract every image url referenced by its markup
///
/// no extraction is attempted unless the fetch itself succeeded
pub async fn try_scrape(
    address: &str,
    config: &Configuration,
) -> Result<Vec<String>, ScrapeError> {
    log::trace!("enter: try_scrape({})", address);

    if address.trim().is_empty() {
        return Err(ScrapeError::MissingTarget);
    }

    let target = target::parse_target(address)?;

    let fetcher = Fetcher::new(config)?;
    let body = fetcher.fetch(&target).await?;

    let extractor = ExtractorBuilder::default().base(&target).build()?;

    // rules fan out onto their own threads; keep that off the runtime's workers
    let images = tokio::task::spawn_blocking(move || extractor.extract(&body))
        .await
        .context("extraction task failed")?;

    log::trace!("exit: try_scrape -> {} images", images.len());
    Ok(images)
}
