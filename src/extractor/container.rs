use super::*;
use crate::image_set::ImageSet;
use url::Url;
use std::thread;

/// A [PatternRule] along with its compiled regular expressions
#[derive(Debug)]
pub(super) struct CompiledRule {
    /// which rule this is
    pub(super) rule: PatternRule,

    /// compiled forms of `rule.patterns()`
    pub(super) patterns: Vec<Regex>,
}

impl CompiledRule {
    /// every raw candidate this rule finds in `body`, before normalization
    pub(super) fn candidates<'b>(&self, body: &'b str) -> Vec<&'b str> {
        let mut found = Vec::new();

        for pattern in &self.patterns {
            for capture in pattern.captures_iter(body) {
                // capture[0] is the entire match, the candidate is always group 1
                let Some(value) = capture.get(1) else {
                    continue;
                };

                if self.rule.is_srcset() {
                    found.extend(split_srcset(value.as_str()));
                } else {
                    found.push(value.as_str());
                }
            }
        }

        found
    }
}

/// Handles all logic related to extracting image urls from fetched markup
#[derive(Debug)]
pub struct Extractor {
    /// address of the page the markup came from
    pub(super) base: Url,

    /// rules to apply, each scanning the whole document
    pub(super) rules: Vec<CompiledRule>,
}

/// Extractor implementation
impl Extractor {
    /// the page address relative candidates are resolved against
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Run every rule over `body` and return the deduplicated absolute image urls
    ///
    /// each rule runs on its own scoped thread and writes into a shared [ImageSet]; the set
    /// is only read once every rule has finished. The order of the returned urls carries no
    /// meaning.
    pub fn extract(&self, body: &str) -> Vec<String> {
        log::trace!("enter: extract({} bytes from {})", body.len(), self.base);

        let images = ImageSet::default();

        thread::scope(|scope| {
            for compiled in &self.rules {
                let images = &images;

                scope.spawn(move || {
                    let candidates = compiled.candidates(body);
                    let mut added = 0;

                    for candidate in &candidates {
                        if let Some(url) = normalize(candidate, &self.base) {
                            if images.insert(url) {
                                added += 1;
                            }
                        }
                    }

                    log::debug!(
                        "{} found {} candidates, {} new images",
                        compiled.rule,
                        candidates.len(),
                        added
                    );
                });
            }
        });

        let images = images.into_vec();

        log::info!("extracted {} unique images from {}", images.len(), self.base);
        log::trace!("exit: extract -> {:?}", images);
        images
    }

    /// raw candidates a single `rule` finds in `body`, before normalization
    ///
    /// empty if `rule` isn't one of this extractor's rules
    pub fn candidates<'b>(&self, rule: PatternRule, body: &'b str) -> Vec<&'b str> {
        self.rules
            .iter()
            .filter(|compiled| compiled.rule == rule)
            .flat_map(|compiled| compiled.candidates(body))
            .collect()
    }
}
