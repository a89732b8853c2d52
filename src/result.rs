use std::fmt;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{traits::ScoutSerialize, utils::fmt_err};

/// Outcome of a single scrape, written once to stdout as JSON
///
/// success: `{"success":true,"images":["https://..."]}` (`images` omitted when empty)
///
/// failure: `{"success":false,"error":"HTTP 404"}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeResult {
    /// whether the page was fetched with a 200 and scanned
    pub success: bool,

    /// every unique absolute image url found; order carries no meaning
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,

    /// human readable reason for a failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScrapeResult {
    /// successful scrape with the given image urls, possibly none
    pub fn success(images: Vec<String>) -> Self {
        Self {
            success: true,
            images,
            error: None,
        }
    }

    /// failed scrape; never carries images
    pub fn failure(error: impl fmt::Display) -> Self {
        Self {
            success: false,
            images: Vec::new(),
            error: Some(error.to_string()),
        }
    }
}

/// Implement Display for ScrapeResult
impl fmt::Display for ScrapeResult {
    /// formatter for Display
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.error {
            Some(error) => write!(f, "ScrapeResult {{ success: false, error: {} }}", error),
            None => write!(
                f,
                "ScrapeResult {{ success: {}, images: {} }}",
                self.success,
                self.images.len()
            ),
        }
    }
}

impl ScoutSerialize for ScrapeResult {
    /// one image url per line, or the error message
    fn as_str(&self) -> String {
        match &self.error {
            Some(error) => format!("{}\n", fmt_err(error)),
            None => self.images.iter().map(|image| format!("{image}\n")).collect(),
        }
    }

    /// Create an NDJSON representation of the result, newline included
    fn as_json(&self) -> Result<String> {
        let mut json = serde_json::to_string(&self)
            .with_context(|| fmt_err("Could not convert ScrapeResult to JSON"))?;
        json.push('\n');
        Ok(json)
    }
}
