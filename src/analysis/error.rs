use serde::Serialize;
use thiserror::Error;

use crate::fetcher::FetchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisErrorKind {
    InvalidUrl,
    FetchFailed,
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("invalid url {input:?}: {reason}")]
    InvalidUrl { input: String, reason: String },

    #[error("failed to fetch {url}: {source}")]
    FetchFailed {
        url: String,
        #[source]
        source: FetchError,
    },
}

impl AnalysisError {
    pub fn kind(&self) -> AnalysisErrorKind {
        match self {
            Self::InvalidUrl { .. } => AnalysisErrorKind::InvalidUrl,
            Self::FetchFailed { .. } => AnalysisErrorKind::FetchFailed,
        }
    }

    pub(crate) fn invalid_url(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
