use tracing::debug;

use crate::extractor::model::{EMPTY_ROBOTS, RobotsSignals};
use crate::fetcher::FetchError;

const SITEMAP_MARKER: &str = "sitemap.xml";

/// Normalizes a robots.txt fetch outcome. Every failure collapses into the
/// `"Not Found"` sentinel.
pub fn extract_robots(fetched: Result<&str, &FetchError>) -> RobotsSignals {
    let body = match fetched {
        Ok(body) => body,
        Err(err) => {
            debug!(reason = %err.reason(), error = %err, "robots.txt unavailable");
            return RobotsSignals::not_found();
        }
    };

    if body.trim().is_empty() {
        return RobotsSignals {
            robots_txt_body: EMPTY_ROBOTS.to_string(),
            has_sitemap_reference: false,
            sitemap_urls: Vec::new(),
        };
    }

    RobotsSignals {
        robots_txt_body: body.to_string(),
        has_sitemap_reference: body.to_ascii_lowercase().contains(SITEMAP_MARKER),
        sitemap_urls: sitemap_directives(body),
    }
}

/// Values of `Sitemap:` lines, in file order. The directive is global, so
/// user-agent groups are ignored.
fn sitemap_directives(body: &str) -> Vec<String> {
    body.lines()
        .filter_map(|line| {
            let line = line.split('#').next().unwrap_or("").trim();
            let (key, value) = line.split_once(':')?;
            let value = value.trim();
            (key.trim().eq_ignore_ascii_case("sitemap") && !value.is_empty())
                .then(|| value.to_string())
        })
        .collect()
}
