pub mod error;
pub mod report;

pub use error::{AnalysisError, AnalysisErrorKind};
pub use report::SeoReport;

use std::time::Duration;

use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::config::Config;
use crate::extractor::extract_signals;
use crate::fetcher::{FetchError, Fetcher};
use crate::markup;

/// Runs the fetch → parse → extract → score pipeline for one URL at a time.
/// Holds no per-request state, so one instance serves concurrent callers.
#[derive(Debug, Clone)]
pub struct Analyzer {
    fetcher: Fetcher,
    timeout: Duration,
}

impl Analyzer {
    pub fn new(fetcher: Fetcher, timeout: Duration) -> Self {
        Self { fetcher, timeout }
    }

    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        let fetcher = Fetcher::new(&config.fetcher_config())?;
        Ok(Self::new(fetcher, config.fetch_timeout()))
    }

    #[instrument(skip(self), fields(url = %input))]
    pub async fn analyze(&self, input: &str) -> Result<SeoReport, AnalysisError> {
        let page_url = parse_target(input)?;
        let robots_url = robots_url(&page_url)?;

        let (page, robots) = tokio::join!(
            self.fetcher.fetch(&page_url, self.timeout),
            self.fetcher.fetch(&robots_url, self.timeout),
        );

        let page = page.map_err(|source| {
            warn!(reason = %source.reason(), error = %source, "page fetch failed");
            AnalysisError::FetchFailed {
                url: page_url.to_string(),
                source,
            }
        })?;

        let report = build_report(
            &page_url,
            &page.body_utf8,
            robots.as_ref().map(|r| r.body_utf8.as_str()),
        );

        info!(score = report.score, "analysis complete");
        Ok(report)
    }
}

/// Accepts only absolute http(s) URLs with a host.
pub fn parse_target(input: &str) -> Result<Url, AnalysisError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AnalysisError::invalid_url(input, "empty"));
    }

    let url = Url::parse(trimmed).map_err(|e| AnalysisError::invalid_url(input, e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AnalysisError::invalid_url(
            input,
            format!("unsupported scheme {:?}", url.scheme()),
        ));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(AnalysisError::invalid_url(input, "missing host"));
    }

    Ok(url)
}

/// `scheme://host[:port]/robots.txt` for the page's origin.
pub fn robots_url(page_url: &Url) -> Result<Url, AnalysisError> {
    let origin = page_url.origin().ascii_serialization();
    Url::parse(&format!("{origin}/robots.txt"))
        .map_err(|e| AnalysisError::invalid_url(page_url.as_str(), e.to_string()))
}

/// Parses the page and assembles the scored report. The parsed document stays
/// inside this function, which keeps `analyze` futures `Send`.
pub fn build_report(
    page_url: &Url,
    html: &str,
    robots: Result<&str, &FetchError>,
) -> SeoReport {
    let doc = markup::parse(html);
    let recovered = doc.recovered_errors();
    if recovered > 0 {
        debug!(recovered, "html parser recovered from malformed markup");
    }

    SeoReport::new(page_url.as_str(), extract_signals(&doc, robots))
}
