use std::sync::Arc;

use anyhow::{Context, Result};

use imgscout::{config::Configuration, logger, scrape, ScoutSerialize, ScrapeResult};

/// Build the runtime and drive a single scrape to completion
fn run(config: Configuration) -> Result<ScrapeResult> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Could not build the async runtime")?;

    Ok(runtime.block_on(scrape(Arc::new(config))))
}

fn main() -> Result<()> {
    let config = Configuration::new();

    // setup logging based on the number of -v's used
    if let Err(e) = logger::initialize(config.verbosity) {
        print!("{}", ScrapeResult::failure(format!("{e:#}")).as_json()?);
        return Ok(());
    }

    log::debug!("{:#?}", config);

    let result = run(config).unwrap_or_else(|e| {
        log::error!("{:#}", e);
        ScrapeResult::failure(format!("{e:#}"))
    });

    log::info!("{}", result);
    log::debug!("{}", result.as_str().trim_end());

    print!("{}", result.as_json()?);

    log::trace!("exit: main");

    Ok(())
}
