//! extract image urls from html source
mod builder;
mod container;
mod normalize;
#[cfg(test)]
mod tests;

pub use self::builder::ExtractorBuilder;
pub use self::builder::PatternRule;
pub use self::container::Extractor;
pub use self::normalize::{normalize, split_srcset};

use self::container::CompiledRule;
use regex::Regex;
