//! Lenient HTML parsing.
//!
//! Documents are built with html5ever's tree construction (through
//! `scraper`), so unclosed tags, stray end tags and missing attributes are
//! recovered the same way a browser would. Parsing never fails; the number of
//! recoveries performed is kept for diagnostics.

use scraper::{ElementRef, Html, Selector, html::Select};

/// A parsed, read-only HTML document.
pub struct Document {
    html: Html,
}

pub fn parse(html: &str) -> Document {
    Document {
        html: Html::parse_document(html),
    }
}

impl Document {
    pub fn select<'a, 'b>(&'a self, selector: &'b Selector) -> Select<'a, 'b> {
        self.html.select(selector)
    }

    pub fn first(&self, selector: &Selector) -> Option<ElementRef<'_>> {
        self.html.select(selector).next()
    }

    pub fn count(&self, selector: &Selector) -> usize {
        self.html.select(selector).count()
    }

    /// Attribute `name` of the first element matching `selector`.
    pub fn first_attr(&self, selector: &Selector, name: &str) -> Option<&str> {
        self.first(selector).and_then(|el| el.value().attr(name))
    }

    /// Concatenated text of the first element matching `selector`.
    pub fn first_text(&self, selector: &Selector) -> Option<String> {
        self.first(selector).map(|el| el.text().collect())
    }

    /// Parse errors html5ever recovered from.
    pub fn recovered_errors(&self) -> usize {
        self.html.errors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector(css: &str) -> Selector {
        Selector::parse(css).unwrap()
    }

    #[test]
    fn test_unclosed_tags_are_recovered() {
        let doc = parse("<html><head><title>Broken</title><body><h1>One<h1>Two<p>text");

        assert_eq!(doc.count(&selector("h1")), 2);
        assert_eq!(doc.first_text(&selector("title")).as_deref(), Some("Broken"));
        assert!(doc.recovered_errors() > 0);
    }

    #[test]
    fn test_first_attr_takes_first_match() {
        let doc = parse(
            r#"<head><meta name="robots" content="noindex"><meta name="robots" content="index"></head>"#,
        );

        assert_eq!(
            doc.first_attr(&selector("meta[name='robots']"), "content"),
            Some("noindex")
        );
    }

    #[test]
    fn test_missing_attribute_and_element() {
        let doc = parse(r#"<link rel="canonical"><p>no images</p>"#);

        assert_eq!(doc.first_attr(&selector("link[rel='canonical']"), "href"), None);
        assert!(doc.first(&selector("img")).is_none());
        assert_eq!(doc.first_text(&selector("title")), None);
    }

    #[test]
    fn test_empty_input() {
        let doc = parse("");

        // html5ever still synthesizes html/head/body
        assert_eq!(doc.count(&selector("body")), 1);
        assert_eq!(doc.count(&selector("img")), 0);
    }

    #[test]
    fn test_select_iterates_all_matches() {
        let doc = parse(r#"<img src="a.png" alt="a"><img src="b.png"><img alt="">"#);

        let alts: Vec<Option<&str>> = doc
            .select(&selector("img"))
            .map(|el| el.value().attr("alt"))
            .collect();
        assert_eq!(alts, vec![Some("a"), None, Some("")]);
    }
}
