//! Weighted-rule SEO score.
//!
//! Each [`Rule`] inspects one signal and contributes its full weight when
//! satisfied. Weights sum to 100, so the score is always within `0..=100`.
//! Length thresholds are inclusive and count characters of the extracted text
//! as-is, sentinel values included.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::extractor::{NOT_FOUND, SeoSignals};

pub const TITLE_LENGTH: RangeInclusive<usize> = 30..=65;
pub const META_DESCRIPTION_LENGTH: RangeInclusive<usize> = 100..=160;
pub const MIN_IMAGE_ALT_RATIO: f64 = 80.0;
pub const MAX_SCORE: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    TitleLength,
    MetaDescriptionLength,
    SingleH1,
    ImageAltCoverage,
    CanonicalPresent,
    RobotsIndexable,
    SitemapDeclared,
}

impl Rule {
    pub const ALL: [Rule; 7] = [
        Rule::TitleLength,
        Rule::MetaDescriptionLength,
        Rule::SingleH1,
        Rule::ImageAltCoverage,
        Rule::CanonicalPresent,
        Rule::RobotsIndexable,
        Rule::SitemapDeclared,
    ];

    pub fn weight(self) -> u8 {
        match self {
            Rule::TitleLength
            | Rule::MetaDescriptionLength
            | Rule::SingleH1
            | Rule::ImageAltCoverage => 20,
            Rule::CanonicalPresent => 10,
            Rule::RobotsIndexable | Rule::SitemapDeclared => 5,
        }
    }

    pub fn passes(self, signals: &SeoSignals) -> bool {
        match self {
            Rule::TitleLength => TITLE_LENGTH.contains(&signals.title.chars().count()),
            Rule::MetaDescriptionLength => {
                META_DESCRIPTION_LENGTH.contains(&signals.meta_description.chars().count())
            }
            Rule::SingleH1 => signals.h1_count == 1,
            Rule::ImageAltCoverage => signals.image_alt_ratio >= MIN_IMAGE_ALT_RATIO,
            Rule::CanonicalPresent => signals.canonical_url != NOT_FOUND,
            // "noindex" matches too
            Rule::RobotsIndexable => signals.robots_meta.to_lowercase().contains("index"),
            Rule::SitemapDeclared => signals.has_sitemap_reference,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RuleOutcome {
    pub rule: Rule,
    pub weight: u8,
    pub passed: bool,
}

impl RuleOutcome {
    pub fn points(&self) -> u8 {
        if self.passed { self.weight } else { 0 }
    }
}

/// Outcome of every rule, in [`Rule::ALL`] order.
pub fn breakdown(signals: &SeoSignals) -> Vec<RuleOutcome> {
    Rule::ALL
        .iter()
        .map(|&rule| RuleOutcome {
            rule,
            weight: rule.weight(),
            passed: rule.passes(signals),
        })
        .collect()
}

pub fn total(outcomes: &[RuleOutcome]) -> u8 {
    outcomes.iter().map(RuleOutcome::points).sum()
}

pub fn score(signals: &SeoSignals) -> u8 {
    total(&breakdown(signals))
}
