use std::fs;

use crate::extractor::{NOT_FOUND, extract, extract_robots, extract_signals};
use crate::fetcher::FetchError;
use crate::markup::parse;

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("src/extractor/tests/fixtures/{name}"))
        .expect("Failed to read test fixture")
}

#[test]
fn test_extract_complete_page() {
    let doc = parse(&fixture("complete.html"));
    let signals = extract(&doc);

    assert_eq!(signals.title, "Acme Widgets: Durable Tools for Builders");
    assert_eq!(signals.title.chars().count(), 40);
    assert_eq!(signals.meta_description.chars().count(), 130);
    assert_eq!(signals.h1_count, 1);
    assert_eq!(signals.canonical_url, "https://acme.test/");
    assert_eq!(signals.robots_meta, "index,follow");
    assert_eq!(signals.total_images, 5);
    // the spacer's empty alt still counts
    assert_eq!(signals.images_with_alt, 5);
}

#[test]
fn test_extract_sparse_page_uses_sentinels() {
    let doc = parse(&fixture("sparse.html"));
    let signals = extract_signals(&doc, Err(&FetchError::RequestTimeout));

    assert_eq!(signals.title, "");
    assert_eq!(signals.meta_description, NOT_FOUND);
    assert_eq!(signals.canonical_url, NOT_FOUND);
    assert_eq!(signals.robots_meta, NOT_FOUND);
    assert_eq!(signals.h1_count, 2);
    assert_eq!(signals.total_images, 3);
    assert_eq!(signals.images_with_alt, 1);
    assert_eq!(signals.image_alt_ratio, 33.33);
    assert_eq!(signals.robots_txt_body, NOT_FOUND);
    assert!(!signals.has_sitemap_reference);
}

#[test]
fn test_malformed_html() {
    let doc = parse(&fixture("malformed.html"));
    let signals = extract(&doc);

    assert_eq!(signals.title, "Broken page");
    assert_eq!(signals.robots_meta, "NOINDEX");
    assert_eq!(signals.canonical_url, "https://broken.test/page");
    assert_eq!(signals.h1_count, 1);
    assert_eq!(signals.total_images, 2);
    assert_eq!(signals.images_with_alt, 1);
}

#[test]
fn test_only_first_title_is_used() {
    let doc = parse("<title>First</title><title>Second</title>");

    assert_eq!(extract(&doc).title, "First");
}

#[test]
fn test_title_text_is_not_trimmed() {
    let doc = parse("<title>  Padded title </title>");

    assert_eq!(extract(&doc).title, "  Padded title ");
}

#[test]
fn test_attribute_selectors_match_exact_values() {
    let doc = parse(
        r#"<meta name="og:description" content="wrong">
           <link rel="alternate" href="https://x.test/fr">
           <link rel="canonical" href="">"#,
    );
    let signals = extract(&doc);

    assert_eq!(signals.meta_description, NOT_FOUND);
    assert_eq!(signals.canonical_url, NOT_FOUND);
}

#[test]
fn test_page_without_images() {
    let doc = parse("<html><body><h1>Text only</h1></body></html>");
    let signals = extract_signals(&doc, Ok("User-agent: *"));

    assert_eq!(signals.total_images, 0);
    assert_eq!(signals.images_with_alt, 0);
    assert_eq!(signals.image_alt_ratio, 0.0);
    assert_eq!(signals.robots_txt_body, "User-agent: *");
}

#[test]
fn test_robots_and_page_are_independent() {
    let doc = parse(&fixture("complete.html"));
    let robots = extract_robots(Ok("Sitemap: https://acme.test/sitemap.xml"));
    let signals = extract_signals(&doc, Ok("Sitemap: https://acme.test/sitemap.xml"));

    assert!(robots.has_sitemap_reference);
    assert!(signals.has_sitemap_reference);
    assert_eq!(signals.sitemap_urls, robots.sitemap_urls);
    assert_eq!(signals.image_alt_ratio, 100.0);
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(html in ".*", robots in ".*") {
            let doc = parse(&html);
            let _ = extract_signals(&doc, Ok(&robots));
        }

        #[test]
        fn test_alt_counts_stay_consistent(
            alts in proptest::collection::vec(any::<bool>(), 0..40),
        ) {
            let html: String = alts
                .iter()
                .map(|has_alt| if *has_alt { r#"<img src="i.png" alt="i">"# } else { r#"<img src="i.png">"# })
                .collect();
            let signals = extract_signals(&parse(&html), Ok(""));

            prop_assert_eq!(signals.total_images, alts.len());
            prop_assert_eq!(signals.images_with_alt, alts.iter().filter(|a| **a).count());
            prop_assert!(signals.images_with_alt <= signals.total_images);
            prop_assert!((0.0..=100.0).contains(&signals.image_alt_ratio));
        }
    }
}
