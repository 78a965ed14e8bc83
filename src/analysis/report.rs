use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::extractor::SeoSignals;
use crate::scoring::{self, RuleOutcome};

/// Result of analyzing one page. Signal fields are flattened into the
/// top-level JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeoReport {
    pub source_url: String,
    #[serde(flatten)]
    pub signals: SeoSignals,
    pub score: u8,
    pub breakdown: Vec<RuleOutcome>,
}

impl SeoReport {
    pub fn new(source_url: impl Into<String>, signals: SeoSignals) -> Self {
        let breakdown = scoring::breakdown(&signals);
        let score = scoring::total(&breakdown);

        Self {
            source_url: source_url.into(),
            signals,
            score,
            breakdown,
        }
    }
}
