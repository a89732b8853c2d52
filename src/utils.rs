use console::style;

/// simple wrapper to stay DRY
pub fn fmt_err(msg: &str) -> String {
    format!("{}: {}", status_colorizer("ERROR"), msg)
}

/// Takes in a string and colors it based on what kind of message it looks like
pub fn status_colorizer(status: &str) -> String {
    match status {
        "ERROR" => style(status).red().bright().to_string(),
        _ => status.to_string(),
    }
}
