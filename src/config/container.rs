use super::utils::{
    accept, accept_language, connect_timeout, idle_timeout, max_idle_connections, max_redirects,
    split_cookies, timeout, user_agent,
};
use crate::parser;
use clap::ArgMatches;

/// macro helper to abstract away repetitive configuration updates
macro_rules! update_config_if_present {
    ($conf_val:expr, $matches:ident, $arg_name:expr, $arg_type:ty) => {
        match $matches.get_one::<$arg_type>($arg_name) {
            Some(value) => *$conf_val = value.to_owned(), // Update value
            None => {}
        }
    };
}

/// Represents the final configuration of a single run.
///
/// This struct is the combination of the following:
/// - default configuration values
/// - plus command-line options
///
/// In that order. No config file is read.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// The target URL
    pub target_url: String,

    /// Number of seconds before a request times out, end to end (default: 15)
    pub timeout: u64,

    /// Number of seconds allowed to establish a connection, TLS handshake included (default: 10)
    pub connect_timeout: u64,

    /// Number of seconds an idle pooled connection is kept (default: 30)
    pub idle_timeout: u64,

    /// Maximum number of idle pooled connections (default: 10)
    pub max_idle_connections: usize,

    /// Maximum number of redirects to follow (default: 10)
    pub max_redirects: usize,

    /// Sets the User-Agent (default: a desktop chrome UA)
    pub user_agent: String,

    /// Value of the Accept header
    pub accept: String,

    /// Value of the Accept-Language header
    pub accept_language: String,

    /// Extra cookies (`name=value`) sent with the original request and every redirect hop
    pub cookies: Vec<String>,

    /// Level of verbosity, equates to log level
    pub verbosity: u8,
}

impl Default for Configuration {
    /// Builds the default Configuration for imgscout
    fn default() -> Self {
        Configuration {
            target_url: String::new(),
            timeout: timeout(),
            connect_timeout: connect_timeout(),
            idle_timeout: idle_timeout(),
            max_idle_connections: max_idle_connections(),
            max_redirects: max_redirects(),
            user_agent: user_agent(),
            accept: accept(),
            accept_language: accept_language(),
            cookies: Vec::new(),
            verbosity: 0,
        }
    }
}

impl Configuration {
    /// Creates a [Configuration] object with the following built-in default values
    ///
    /// - **timeout**: `15` seconds
    /// - **connect_timeout**: `10` seconds
    /// - **idle_timeout**: `30` seconds
    /// - **max_idle_connections**: `10`
    /// - **max_redirects**: `10`
    /// - **user_agent**: [DEFAULT_USER_AGENT](crate::DEFAULT_USER_AGENT)
    /// - **accept**: [DEFAULT_ACCEPT](crate::DEFAULT_ACCEPT)
    /// - **accept_language**: [DEFAULT_ACCEPT_LANGUAGE](crate::DEFAULT_ACCEPT_LANGUAGE)
    /// - **cookies**: `None`
    /// - **verbosity**: `0` (no logging enabled)
    ///
    /// Any options/arguments given on the commandline override the built-in defaults.
    pub fn new() -> Self {
        let args = parser::initialize().get_matches();
        Self::from_args(&args)
    }

    /// Given a set of ArgMatches read from the CLI, update and return the default Configuration
    /// settings
    pub fn from_args(args: &ArgMatches) -> Self {
        let mut config = Configuration::default();

        // positional first, so that --url wins when both are given
        update_config_if_present!(&mut config.target_url, args, "target", String);
        update_config_if_present!(&mut config.target_url, args, "url", String);

        if let Some(cookies) = args.get_many::<String>("cookies") {
            config.cookies = cookies.flat_map(|raw| split_cookies(raw)).collect();
        }

        config.verbosity = args.get_count("verbosity");

        config
    }
}
