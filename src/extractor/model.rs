use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Placeholder for a text signal that could not be extracted.
pub const NOT_FOUND: &str = "Not Found";

/// robots.txt body when the file was served but had no content.
pub const EMPTY_ROBOTS: &str = "Empty";

/// Signals read from the page markup.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSignals {
    pub title: String,
    pub meta_description: String,
    pub h1_count: usize,
    pub canonical_url: String,
    pub robots_meta: String,
    pub total_images: usize,
    pub images_with_alt: usize,
}

/// Signals read from the site's robots.txt.
#[derive(Debug, Clone, PartialEq)]
pub struct RobotsSignals {
    pub robots_txt_body: String,
    pub has_sitemap_reference: bool,
    pub sitemap_urls: Vec<String>,
}

impl RobotsSignals {
    pub fn not_found() -> Self {
        Self {
            robots_txt_body: NOT_FOUND.to_string(),
            has_sitemap_reference: false,
            sitemap_urls: Vec::new(),
        }
    }
}

/// The full, normalized signal set for one page. Every field has a sentinel,
/// so consumers never deal with absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeoSignals {
    pub title: String,
    pub meta_description: String,
    #[serde(rename = "h1Tags")]
    pub h1_count: usize,
    #[serde(rename = "canonical")]
    pub canonical_url: String,
    pub robots_meta: String,
    pub total_images: usize,
    pub images_with_alt: usize,
    pub image_alt_ratio: f64,
    #[serde(rename = "robotsTxt")]
    pub robots_txt_body: String,
    #[serde(rename = "hasSitemap")]
    pub has_sitemap_reference: bool,
    pub sitemap_urls: Vec<String>,
}

impl SeoSignals {
    pub fn assemble(page: PageSignals, robots: RobotsSignals) -> Self {
        // imagesWithAlt <= totalImages
        let images_with_alt = page.images_with_alt.min(page.total_images);

        Self {
            image_alt_ratio: image_alt_ratio(images_with_alt, page.total_images),
            title: page.title,
            meta_description: page.meta_description,
            h1_count: page.h1_count,
            canonical_url: page.canonical_url,
            robots_meta: page.robots_meta,
            total_images: page.total_images,
            images_with_alt,
            robots_txt_body: robots.robots_txt_body,
            has_sitemap_reference: robots.has_sitemap_reference,
            sitemap_urls: robots.sitemap_urls,
        }
    }
}

/// Percentage of images carrying an `alt` attribute, rounded to two decimals.
/// Defined as 0 for a page without images.
pub fn image_alt_ratio(images_with_alt: usize, total_images: usize) -> f64 {
    if total_images == 0 {
        return 0.0;
    }
    round2(100.0 * images_with_alt as f64 / total_images as f64)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(total_images: usize, images_with_alt: usize) -> PageSignals {
        PageSignals {
            title: String::new(),
            meta_description: NOT_FOUND.to_string(),
            h1_count: 0,
            canonical_url: NOT_FOUND.to_string(),
            robots_meta: NOT_FOUND.to_string(),
            total_images,
            images_with_alt,
        }
    }

    #[test]
    fn test_alt_ratio_zero_images() {
        assert_eq!(image_alt_ratio(0, 0), 0.0);
    }

    #[test]
    fn test_alt_ratio_rounds_to_two_decimals() {
        assert_eq!(image_alt_ratio(1, 3), 33.33);
        assert_eq!(image_alt_ratio(2, 3), 66.67);
        assert_eq!(image_alt_ratio(5, 5), 100.0);
        assert_eq!(image_alt_ratio(1, 8), 12.5);
    }

    #[test]
    fn test_alt_ratio_always_within_bounds() {
        for total in 0..=50usize {
            for with_alt in 0..=total {
                let ratio = image_alt_ratio(with_alt, total);
                assert!((0.0..=100.0).contains(&ratio), "{with_alt}/{total} -> {ratio}");
                if total > 0 {
                    let expected = (100.0 * with_alt as f64 / total as f64 * 100.0).round() / 100.0;
                    assert_eq!(ratio, expected);
                }
            }
        }
    }

    #[test]
    fn test_assemble_clamps_alt_count() {
        let signals = SeoSignals::assemble(page(2, 5), RobotsSignals::not_found());

        assert_eq!(signals.images_with_alt, 2);
        assert_eq!(signals.image_alt_ratio, 100.0);
    }

    #[test]
    fn test_serialized_field_names() {
        let signals = SeoSignals::assemble(page(0, 0), RobotsSignals::not_found());
        let value = serde_json::to_value(&signals).unwrap();

        for key in [
            "title",
            "metaDescription",
            "h1Tags",
            "canonical",
            "robotsMeta",
            "imageAltRatio",
            "totalImages",
            "imagesWithAlt",
            "robotsTxt",
            "hasSitemap",
            "sitemapUrls",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert_eq!(value["robotsTxt"], "Not Found");
        assert_eq!(value["hasSitemap"], false);
    }
}
