use super::*;
use anyhow::{bail, Context, Result};
use url::Url;
use std::fmt;

/// `<img ... src="...">`
pub(super) const IMG_SRC_REGEX: &str = r#"<img[^>]+src=["']([^"']+)["']"#;

/// `srcset="a.png 1x, b.png 2x"`; the capture is the whole comma separated list
pub(super) const SRCSET_REGEX: &str = r#"srcset=["']([^"']+)["']"#;

/// `<meta property="og:image" content="...">`
pub(super) const OG_IMAGE_PROPERTY_FIRST_REGEX: &str =
    r#"<meta[^>]+property=["']og:image["'][^>]+content=["']([^"']+)["']"#;

/// `<meta content="..." property="og:image">`
pub(super) const OG_IMAGE_CONTENT_FIRST_REGEX: &str =
    r#"<meta[^>]+content=["']([^"']+)["'][^>]+property=["']og:image["']"#;

/// inline css `background: url(...)` / `background-image: url(...)`, quotes optional
pub(super) const BACKGROUND_IMAGE_REGEX: &str =
    r#"background(?:-image)?:\s*url\(["']?([^"')]+)["']?\)"#;

/// `href` pointing straight at an image file, as forums like ptt tend to do
///
/// the extension match is case-sensitive, exactly as authored
pub(super) const IMAGE_ANCHOR_REGEX: &str =
    r#"href=["'](https?://[^"']+\.(?:jpg|jpeg|png|gif|webp))["']"#;

/// bare imgur links anywhere in the text, attribute or not
pub(super) const IMGUR_LINK_REGEX: &str =
    r#"(https?://(?:i\.)?imgur\.com/[a-zA-Z0-9]+\.(?:jpg|jpeg|png|gif|webp))"#;

/// One independent textual strategy for recovering image references from a markup idiom
///
/// rules are not mutually exclusive; the same url found by several rules is collapsed by the
/// image set
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PatternRule {
    /// `<img>` tag `src` attribute
    ImgSrc,

    /// `srcset` attribute; every entry's url (descriptor dropped) is a candidate
    Srcset,

    /// Open Graph `og:image` meta tag, in either attribute order
    OpenGraph,

    /// inline css background/background-image `url(...)`
    BackgroundImage,

    /// anchors whose `href` is an absolute url to an image file
    ImageAnchor,

    /// bare imgur image links
    ImgurLink,
}

impl PatternRule {
    /// every rule, in the order they're listed above
    pub const ALL: [PatternRule; 6] = [
        PatternRule::ImgSrc,
        PatternRule::Srcset,
        PatternRule::OpenGraph,
        PatternRule::BackgroundImage,
        PatternRule::ImageAnchor,
        PatternRule::ImgurLink,
    ];

    /// raw regular expressions making up this rule; capture group 1 is the candidate
    pub(super) fn patterns(&self) -> &'static [&'static str] {
        match self {
            PatternRule::ImgSrc => &[IMG_SRC_REGEX],
            PatternRule::Srcset => &[SRCSET_REGEX],
            PatternRule::OpenGraph => &[
                OG_IMAGE_PROPERTY_FIRST_REGEX,
                OG_IMAGE_CONTENT_FIRST_REGEX,
            ],
            PatternRule::BackgroundImage => &[BACKGROUND_IMAGE_REGEX],
            PatternRule::ImageAnchor => &[IMAGE_ANCHOR_REGEX],
            PatternRule::ImgurLink => &[IMGUR_LINK_REGEX],
        }
    }

    /// whether the capture is a srcset list that needs splitting
    pub(super) fn is_srcset(&self) -> bool {
        matches!(self, PatternRule::Srcset)
    }
}

impl fmt::Display for PatternRule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            PatternRule::ImgSrc => "img-src",
            PatternRule::Srcset => "srcset",
            PatternRule::OpenGraph => "og-image",
            PatternRule::BackgroundImage => "background-image",
            PatternRule::ImageAnchor => "image-anchor",
            PatternRule::ImgurLink => "imgur-link",
        };
        write!(f, "{name}")
    }
}

/// responsible for building an `Extractor`
pub struct ExtractorBuilder {
    /// address of the page the markup came from; relative candidates resolve against it
    base: Option<Url>,

    /// which rules to run
    rules: Vec<PatternRule>,
}

/// ExtractorBuilder implementation
impl Default for ExtractorBuilder {
    fn default() -> Self {
        Self {
            base: None,
            rules: PatternRule::ALL.to_vec(),
        }
    }
}

/// ExtractorBuilder implementation
impl ExtractorBuilder {
    /// builder call to set `base`
    pub fn base(&mut self, base: &Url) -> &mut Self {
        self.base = Some(base.clone());
        self
    }

    /// builder call to restrict extraction to the given `rules`
    pub fn rules(&mut self, rules: &[PatternRule]) -> &mut Self {
        self.rules = rules.to_vec();
        self
    }

    /// finalize configuration of `ExtractorBuilder` and return an `Extractor`
    ///
    /// requires `base` to have been used in the build process
    pub fn build(&self) -> Result<Extractor> {
        let Some(base) = self.base.as_ref() else {
            bail!("Extractor requires a base URL to resolve relative candidates against")
        };

        let mut rules = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let patterns = rule
                .patterns()
                .iter()
                .map(|raw| {
                    Regex::new(raw).with_context(|| format!("Could not compile {rule} pattern"))
                })
                .collect::<Result<Vec<_>>>()?;

            rules.push(CompiledRule {
                rule: *rule,
                patterns,
            });
        }

        Ok(Extractor {
            base: base.clone(),
            rules,
        })
    }
}
