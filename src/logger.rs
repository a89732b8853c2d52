use std::env;
use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};
use env_logger::{Builder, Target};

use crate::{message::LogMessage, utils::fmt_err};

/// translate the number of -v's into a RUST_LOG filter
///
/// returns `None` when logging should stay at env_logger's default (errors only)
pub(crate) fn filter_for_verbosity(verbosity: u8) -> Option<&'static str> {
    match verbosity {
        0 => None,
        1 => Some("warn"),
        2 => Some("info"),
        3 => Some("imgscout=debug,info"),
        _ => Some("imgscout=trace,info"),
    }
}

/// Create a customized instance of
/// [env_logger::Logger](https://docs.rs/env_logger/latest/env_logger/struct.Logger.html)
/// with timer offset/color and set the log level based on `verbosity`
///
/// everything is written to stderr; stdout carries nothing but the result object
pub fn initialize(verbosity: u8) -> Result<()> {
    // use occurrences of -v on commandline to set the log level for the application;
    // respects already specified RUST_LOG environment variable
    if env::var("RUST_LOG").is_err() {
        if let Some(filter) = filter_for_verbosity(verbosity) {
            env::set_var("RUST_LOG", filter);
        }
    }

    let start = Instant::now();
    let mut builder = Builder::from_default_env();

    builder
        .target(Target::Stderr)
        .format(move |buf, record| {
            let log_entry = LogMessage {
                message: record.args().to_string(),
                level: record.level().to_string(),
                time_offset: start.elapsed().as_secs_f32(),
                module: record.target().to_string(),
            };

            write!(buf, "{}", log_entry.as_str())
        })
        .try_init()
        .with_context(|| fmt_err("Could not initialize logger"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// each additional -v opens the filter further
    fn verbosity_to_filter() {
        assert_eq!(filter_for_verbosity(0), None);
        assert_eq!(filter_for_verbosity(1), Some("warn"));
        assert_eq!(filter_for_verbosity(2), Some("info"));
        assert_eq!(filter_for_verbosity(3), Some("imgscout=debug,info"));
        assert_eq!(filter_for_verbosity(4), Some("imgscout=trace,info"));
        assert_eq!(filter_for_verbosity(9), Some("imgscout=trace,info"));
    }
}
