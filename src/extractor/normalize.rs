use url::Url;

use crate::target::UrlExt;

/// substrings that mark a candidate as a tracking pixel/placeholder
///
/// plain substring match, so `product-pixel-art.png` is dropped too
pub(super) const FILTERED_SUBSTRINGS: [&str; 4] = ["1x1", "pixel", "tracking", "spacer"];

/// Turn a raw candidate into an absolute image url, or `None` if it should be dropped
///
/// - surrounding whitespace is trimmed, empty candidates dropped
/// - `data:` uris and anything containing one of [FILTERED_SUBSTRINGS] are dropped
/// - `//host/path` becomes `https://host/path`
/// - `/path` becomes `<base scheme>://<base host[:port]>/path`
/// - whatever still doesn't start with `http` is dropped (`javascript:`, `mailto:`, bare
///   relative paths, ...)
pub fn normalize(candidate: &str, base: &Url) -> Option<String> {
    let candidate = candidate.trim();

    if candidate.is_empty() {
        return None;
    }

    if candidate.starts_with("data:")
        || FILTERED_SUBSTRINGS
            .iter()
            .any(|needle| candidate.contains(needle))
    {
        log::trace!("filtered candidate: {}", candidate);
        return None;
    }

    let absolute = if let Some(rest) = candidate.strip_prefix("//") {
        format!("https://{rest}")
    } else if candidate.starts_with('/') {
        format!("{}{}", base.origin_prefix(), candidate)
    } else {
        candidate.to_string()
    };

    if !absolute.starts_with("http") {
        log::trace!("dropped non-http candidate: {}", absolute);
        return None;
    }

    Some(absolute)
}

/// url portion of every entry in a srcset list
///
/// `"a.png 1x, b.png 2x"` -> `["a.png", "b.png"]`; entries that are empty after trimming
/// are skipped
pub fn split_srcset(srcset: &str) -> Vec<&str> {
    srcset
        .split(',')
        .filter_map(|entry| entry.split_whitespace().next())
        .collect()
}
