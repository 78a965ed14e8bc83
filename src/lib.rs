pub mod analysis;
pub mod api;
pub mod app_state;
pub mod config;
pub mod entities;
pub mod extractor;
pub mod fetcher;
pub mod health;
pub mod markup;
pub mod repositories;
pub mod scoring;
pub mod telemetry;

pub use analysis::{AnalysisError, AnalysisErrorKind, Analyzer, SeoReport};
pub use extractor::SeoSignals;
