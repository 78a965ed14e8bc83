use std::sync::LazyLock;

use scraper::Selector;

use crate::extractor::model::{NOT_FOUND, PageSignals};
use crate::markup::Document;

static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());
static META_DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("meta[name='description']").unwrap());
static META_ROBOTS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("meta[name='robots']").unwrap());
static CANONICAL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("link[rel='canonical']").unwrap());
static H1: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h1").unwrap());
static IMG: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img").unwrap());

pub fn extract(doc: &Document) -> PageSignals {
    let (total_images, images_with_alt) = count_images(doc);

    PageSignals {
        title: doc.first_text(&TITLE).unwrap_or_default(),
        meta_description: attr_or_not_found(doc, &META_DESCRIPTION, "content"),
        h1_count: doc.count(&H1),
        canonical_url: attr_or_not_found(doc, &CANONICAL, "href"),
        robots_meta: attr_or_not_found(doc, &META_ROBOTS, "content"),
        total_images,
        images_with_alt,
    }
}

/// Empty attribute values are treated as missing.
fn attr_or_not_found(doc: &Document, selector: &Selector, name: &str) -> String {
    doc.first_attr(selector, name)
        .filter(|value| !value.is_empty())
        .unwrap_or(NOT_FOUND)
        .to_string()
}

/// `alt=""` counts as present; only a missing attribute does not.
fn count_images(doc: &Document) -> (usize, usize) {
    doc.select(&IMG).fold((0, 0), |(total, with_alt), img| {
        let has_alt = img.value().attr("alt").is_some();
        (total + 1, with_alt + usize::from(has_alt))
    })
}
