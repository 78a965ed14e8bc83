pub mod model;
pub mod page;
pub mod robots;

#[cfg(test)]
mod tests;

pub use model::{EMPTY_ROBOTS, NOT_FOUND, PageSignals, RobotsSignals, SeoSignals, image_alt_ratio};
pub use page::extract;
pub use robots::extract_robots;

use crate::fetcher::FetchError;
use crate::markup::Document;

/// Builds the complete signal set from a parsed page and its robots.txt outcome.
pub fn extract_signals(doc: &Document, robots: Result<&str, &FetchError>) -> SeoSignals {
    SeoSignals::assemble(extract(doc), extract_robots(robots))
}
