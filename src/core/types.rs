use serde::{Deserialize, Serialize};
use url::Url;

use crate::core::error::ScoutError;

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeSiteRequest {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestCompetitorsRequest {
    pub user_site: String,
    pub industry: String,
    pub business_model: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeCompetitorsRequest {
    pub competitors: Vec<String>,
}

// ---------------------------------------------------------------------------
// Response envelope
// ---------------------------------------------------------------------------

/// Uniform endpoint envelope: `{success, data}` or `{success, error}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// Domain types
// ---------------------------------------------------------------------------

/// Structured profile of the user's own site, held for the session.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SiteProfile {
    pub url: String,
    pub industry: String,
    pub business_model: String,
    pub products: Vec<String>,
    pub target_market: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<PerformanceSnapshot>,
}

/// The model's classification payload: `SiteProfile` minus url and
/// performance, which are attached by the classifier.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SiteFacts {
    pub industry: String,
    pub business_model: String,
    pub products: Vec<String>,
    pub target_market: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorCandidate {
    pub name: String,
    pub url: String,
    pub icon: String,
    pub reason: String,
    pub similarity_score: u8,
}

/// One suggested competitor as the model returns it, before icon
/// enrichment and score clamping.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SuggestedCompetitor {
    pub name: String,
    pub url: String,
    pub reason: String,
    pub similarity: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SuggestionPayload {
    pub competitors: Vec<SuggestedCompetitor>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Pricing {
    pub plans: Vec<PricingPlan>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    pub name: String,
    pub price: String,
    pub billing_frequency: String,
    pub features: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Messaging {
    pub headline: String,
    pub value_proposition: String,
    pub target_audience: String,
    pub differentiators: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Insights {
    pub strengths: Vec<String>,
    pub positioning: String,
    pub strategy: String,
}

/// The model's per-competitor payload: `CompetitorAnalysis` minus url
/// and performance, which are attached by the analyzer.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorReport {
    pub competitor_name: String,
    pub pricing: Pricing,
    pub products: Vec<String>,
    pub messaging: Messaging,
    pub insights: Insights,
}

/// One fully-assembled competitor analysis. The collection of these is
/// the report held for the session.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorAnalysis {
    pub competitor_name: String,
    pub url: String,
    pub pricing: Pricing,
    pub products: Vec<String>,
    pub messaging: Messaging,
    pub insights: Insights,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<PerformanceSnapshot>,
}

/// Normalized page-performance probe result. Category scores are 0-100
/// integers; metrics are display-formatted strings from the scoring API.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSnapshot {
    pub performance_score: u8,
    pub accessibility_score: u8,
    pub best_practices_score: u8,
    pub seo_score: u8,
    pub metrics: PerformanceMetrics,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    pub largest_contentful_paint: String,
    pub cumulative_layout_shift: String,
    pub total_blocking_time: String,
    pub speed_index: String,
}

/// Bounded plain-text bundle extracted from a fetched page. Internal to
/// the pipeline; feeds prompt construction, never the wire.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PageContent {
    pub title: String,
    pub description: String,
    pub h1s: Vec<String>,
    pub text: String,
    pub fetched_at: String,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Parse a caller-supplied URL, requiring an absolute http(s) URL.
/// Every URL field passes through here before any network call.
pub fn ensure_absolute_url(raw: &str) -> Result<Url, ScoutError> {
    let parsed =
        Url::parse(raw).map_err(|_| ScoutError::Validation("Invalid URL format".to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ScoutError::Validation("Invalid URL format".to_string()));
    }
    Ok(parsed)
}
