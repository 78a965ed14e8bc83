use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::repositories::NewAudit;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
});

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AnalyzeQuery {
    /// Absolute http(s) URL of the page to analyze.
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SaveAuditRequest {
    pub email: String,
    pub report_html: String,
    pub score: Option<i32>,
}

impl SaveAuditRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.email.trim().is_empty() || self.report_html.trim().is_empty() {
            return Err("Missing fields".to_string());
        }
        if !EMAIL_REGEX.is_match(self.email.trim()) {
            return Err("Invalid email format".to_string());
        }
        if let Some(score) = self.score
            && !(0..=100).contains(&score)
        {
            return Err("Score must be between 0 and 100".to_string());
        }
        Ok(())
    }

    pub fn into_new_audit(self) -> NewAudit {
        NewAudit {
            email: self.email.trim().to_string(),
            score: self.score,
            report_html: self.report_html,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SaveAuditResponse {
    pub success: bool,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AuditsQuery {
    /// Only return audits saved for this address.
    pub email: Option<String>,
}

impl AuditsQuery {
    pub fn email_filter(&self) -> Option<String> {
        self.email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
            .map(str::to_string)
    }
}
