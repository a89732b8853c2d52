use super::*;
use lazy_static::lazy_static;
use url::Url;

lazy_static! {
    /// page every test document pretends to come from
    static ref BASE: Url = Url::parse("https://site.example/gallery/page").unwrap();

    /// Extractor running every rule against BASE
    static ref EXTRACTOR: Extractor = ExtractorBuilder::default().base(&BASE).build().unwrap();
}

/// extract from `body` with the shared extractor, sorted for stable comparisons
fn extract_sorted(body: &str) -> Vec<String> {
    let mut images = EXTRACTOR.extract(body);
    images.sort();
    images
}

#[test]
/// building without a base url is an error rather than a panic later on
fn builder_without_base_errors() {
    assert!(ExtractorBuilder::default().build().is_err());
}

#[test]
/// the built extractor remembers where the markup came from
fn builder_sets_base() {
    assert_eq!(EXTRACTOR.base(), &*BASE);
}

#[test]
/// markup with nothing image-like yields an empty list
fn extract_with_no_matches_is_empty() {
    assert!(EXTRACTOR.extract("<html><body><p>hello</p></body></html>").is_empty());
    assert!(EXTRACTOR.extract("").is_empty());
}

#[test]
/// absolute, protocol-relative and root-relative img sources all come back absolute
fn extract_img_src_forms() {
    let body = r#"
        <img src="https://cdn.example.com/a.png">
        <img alt="b" src="//cdn.example.com/b.png">
        <img class="c" src='/static/c.png'>
    "#;

    assert_eq!(
        extract_sorted(body),
        vec![
            "https://cdn.example.com/a.png",
            "https://cdn.example.com/b.png",
            "https://site.example/static/c.png",
        ]
    );
}

#[test]
/// root-relative candidates keep a non-default port from the base
fn extract_root_relative_keeps_port() {
    let base = Url::parse("http://127.0.0.1:8080/index.html").unwrap();
    let extractor = ExtractorBuilder::default().base(&base).build().unwrap();

    assert_eq!(
        extractor.extract(r#"<img src="/logo.png">"#),
        vec!["http://127.0.0.1:8080/logo.png"]
    );
}

#[test]
/// every srcset entry is a candidate, with its descriptor dropped
fn srcset_candidates_are_split() {
    let body = r#"<img srcset="a.png 1x, b.png 2x">"#;

    assert_eq!(EXTRACTOR.candidates(PatternRule::Srcset, body), vec!["a.png", "b.png"]);

    // bare relative paths don't survive normalization
    assert!(EXTRACTOR.extract(body).is_empty());
}

#[test]
/// srcset entries that are absolute or rooted make it all the way through
fn extract_srcset_entries() {
    let body = r#"<img srcset="https://cdn.example.com/s.png 480w, /static/m.png 800w,  //cdn.example.com/l.png 1200w">"#;

    assert_eq!(
        extract_sorted(body),
        vec![
            "https://cdn.example.com/l.png",
            "https://cdn.example.com/s.png",
            "https://site.example/static/m.png",
        ]
    );
}

#[test]
/// data uris and tracking/placeholder images are dropped
fn extract_drops_filtered_candidates() {
    let body = r#"
        <img src="data:image/gif;base64,R0lGODlhAQABAAAAACw=">
        <img src="https://site.example/1x1.gif">
        <img src="https://ads.example/pixel.png">
        <img src="https://ads.example/tracking/open.gif">
        <img src="/img/spacer.gif">
        <img src="https://site.example/real.jpg">
    "#;

    assert_eq!(extract_sorted(body), vec!["https://site.example/real.jpg"]);
}

#[test]
/// non-http schemes and bare relative paths are dropped
fn extract_drops_non_http_candidates() {
    let body = r#"
        <img src="javascript:void(0)">
        <img src="images/relative.png">
        <img src="ftp://files.example/a.png">
    "#;

    assert!(EXTRACTOR.extract(body).is_empty());
}

#[test]
/// og:image is found whichever attribute comes first
fn extract_og_image_both_orders() {
    let property_first = r#"<meta property="og:image" content="https://site.example/og1.jpg">"#;
    let content_first = r#"<meta content="https://site.example/og2.jpg" property='og:image'>"#;

    assert_eq!(
        EXTRACTOR.extract(property_first),
        vec!["https://site.example/og1.jpg"]
    );
    assert_eq!(
        EXTRACTOR.extract(content_first),
        vec!["https://site.example/og2.jpg"]
    );
}

#[test]
/// the same url found by different rules appears once
fn extract_deduplicates_across_rules() {
    let body = r#"
        <meta property="og:image" content="https://site.example/cover.jpg">
        <img src="https://site.example/cover.jpg">
        <a href="https://site.example/cover.jpg">full size</a>
    "#;

    assert_eq!(EXTRACTOR.extract(body), vec!["https://site.example/cover.jpg"]);
}

#[test]
/// inline css backgrounds, quoted or not
fn extract_background_images() {
    let body = r#"
        <div style="background-image: url('https://cdn.example.com/bg1.png')"></div>
        <div style="background:url(/static/bg2.png)"></div>
    "#;

    assert_eq!(
        extract_sorted(body),
        vec![
            "https://cdn.example.com/bg1.png",
            "https://site.example/static/bg2.png",
        ]
    );
}

#[test]
/// anchors only count when the extension is one of the lowercase image extensions
fn extract_image_anchors_are_case_sensitive() {
    let body = r#"
        <a href="https://files.example/photo.jpeg">one</a>
        <a href="https://files.example/photo.JPG">two</a>
        <a href="https://files.example/page.html">three</a>
    "#;

    assert_eq!(
        EXTRACTOR.extract(body),
        vec!["https://files.example/photo.jpeg"]
    );
    assert!(EXTRACTOR
        .candidates(PatternRule::ImageAnchor, body)
        .iter()
        .all(|candidate| !candidate.ends_with(".JPG")));
}

#[test]
/// imgur links are found in plain text, not just attributes
fn extract_bare_imgur_links() {
    let body = "推 nice: https://i.imgur.com/AbC123x.jpg and https://imgur.com/zzz9.png\n";

    assert_eq!(
        extract_sorted(body),
        vec![
            "https://i.imgur.com/AbC123x.jpg",
            "https://imgur.com/zzz9.png",
        ]
    );
}

#[test]
/// running twice over the same markup gives the same set
fn extract_is_repeatable() {
    let body = r#"
        <img src="/a.png"><img srcset="//cdn.example.com/b.png 2x">
        <meta content="https://site.example/c.jpg" property="og:image">
        https://i.imgur.com/d.gif
    "#;

    let first = extract_sorted(body);
    let second = extract_sorted(body);

    assert_eq!(first.len(), 4);
    assert_eq!(first, second);
}

#[test]
/// restricting rules means other markup idioms are ignored
fn builder_rules_restricts_extraction() {
    let extractor = ExtractorBuilder::default()
        .base(&BASE)
        .rules(&[PatternRule::ImgSrc])
        .build()
        .unwrap();

    let body = r#"
        <img src="https://site.example/kept.png">
        <meta property="og:image" content="https://site.example/ignored.jpg">
    "#;

    assert_eq!(extractor.extract(body), vec!["https://site.example/kept.png"]);
    assert!(extractor.candidates(PatternRule::OpenGraph, body).is_empty());
}

#[test]
/// every rule has a distinct display name
fn pattern_rule_names_are_unique() {
    let mut names: Vec<String> = PatternRule::ALL.iter().map(|r| r.to_string()).collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), PatternRule::ALL.len());
}

#[test]
/// whitespace is trimmed before anything else happens
fn normalize_trims_whitespace() {
    assert_eq!(
        normalize("  /x.png\n", &BASE),
        Some("https://site.example/x.png".to_string())
    );
    assert_eq!(normalize("   ", &BASE), None);
    assert_eq!(normalize("", &BASE), None);
}

#[test]
/// protocol-relative always becomes https, even from an http page
fn normalize_protocol_relative_is_https() {
    let base = Url::parse("http://plain.example/").unwrap();
    assert_eq!(
        normalize("//cdn.example.com/a.png", &base),
        Some("https://cdn.example.com/a.png".to_string())
    );
}

#[test]
/// filter substrings match anywhere in the candidate
fn normalize_filters_substrings_anywhere() {
    assert_eq!(normalize("https://site.example/art/pixel-art.png", &BASE), None);
    assert_eq!(normalize("https://site.example/img?size=1x1", &BASE), None);
    assert_eq!(normalize("data:image/png;base64,AAAA", &BASE), None);
}

#[test]
/// normalizing an already normalized url changes nothing
fn normalize_is_idempotent() {
    let once = normalize("/static/a.png", &BASE).unwrap();
    assert_eq!(normalize(&once, &BASE), Some(once.clone()));
}

#[test]
/// empty srcset entries are skipped
fn split_srcset_skips_empty_entries() {
    assert_eq!(split_srcset("a.png 1x, , b.png"), vec!["a.png", "b.png"]);
    assert!(split_srcset("").is_empty());
}
