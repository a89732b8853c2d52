use clap::{crate_authors, crate_description, crate_version, Arg, ArgAction, Command};

/// Create and return an instance of [clap::Command], i.e. the Command Line Interface's configuration
pub fn initialize() -> Command {
    Command::new("imgscout")
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .arg(
            Arg::new("url")
                .short('u')
                .long("url")
                .value_name("URL")
                .num_args(1)
                .help_heading("Target selection")
                .help("The target URL to scrape"),
        )
        .arg(
            Arg::new("target")
                .value_name("TARGET")
                .num_args(1)
                .help_heading("Target selection")
                .help("The target URL to scrape (positional form of --url)"),
        )
        .arg(
            Arg::new("cookies")
                .short('b')
                .long("cookies")
                .value_name("COOKIE")
                .num_args(1)
                .action(ArgAction::Append)
                .help_heading("Request settings")
                .help(
                    "Specify HTTP cookies to be used in the request (ex: -b stuff=things); \
                    they are re-sent on every redirect hop",
                ),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbosity")
                .action(ArgAction::Count)
                .help_heading("Output settings")
                .help("Increase verbosity level (use -vv or more for greater effect. [CAUTION] 4 -v's is probably too much)"),
        )
        .after_long_help(
            "EXAMPLES:\n    \
            Scrape a page:\n        \
            imgscout --url https://example.com/gallery\n\n    \
            Scrape a page that needs a session cookie, with debug logging on stderr:\n        \
            imgscout -u https://example.com/members -b session=abc123 -vvv\n\n    \
            The result is always a single JSON object on stdout:\n        \
            {\"success\":true,\"images\":[\"https://example.com/a.png\"]}",
        )
}
