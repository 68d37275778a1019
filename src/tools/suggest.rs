//! Competitor Suggester: one aggregate completion for the top direct
//! competitors, each enriched with a deterministic icon reference.
//! Unlike the analyzer this is all-or-nothing; there is no partial
//! candidate list.

use std::sync::Arc;
use tracing::info;
use url::Url;

use crate::core::error::ScoutError;
use crate::core::types::{
    ensure_absolute_url, CompetitorCandidate, SuggestionPayload,
};
use crate::core::AppState;
use crate::tools::{normalize::normalize, prompts};

/// Reason attached to user-entered candidates.
pub const MANUAL_CANDIDATE_REASON: &str = "Manually added competitor";

/// Icon reference for candidates whose URL yields no hostname.
pub const FALLBACK_ICON: &str = "/placeholder-logo.png";

/// Derive an icon reference from a candidate URL's hostname. Never
/// fails; malformed URLs get the placeholder.
pub fn favicon_for(url: &str) -> String {
    match Url::parse(url).ok().and_then(|u| u.host_str().map(str::to_string)) {
        Some(host) => format!("https://www.google.com/s2/favicons?domain={host}&sz=64"),
        None => FALLBACK_ICON.to_string(),
    }
}

/// Build the candidate form of a user-entered competitor URL: hostname
/// as the name, fixed reason, similarity pinned to zero.
pub fn manual_candidate(url: &str) -> Result<CompetitorCandidate, ScoutError> {
    let parsed = ensure_absolute_url(url)?;
    let name = parsed
        .host_str()
        .map(str::to_string)
        .ok_or_else(|| ScoutError::Validation("Invalid URL format".to_string()))?;
    Ok(CompetitorCandidate {
        name,
        url: url.to_string(),
        icon: favicon_for(url),
        reason: MANUAL_CANDIDATE_REASON.to_string(),
        similarity_score: 0,
    })
}

/// Suggest the top direct competitors for a profiled site.
///
/// A gateway or normalization failure aborts the whole suggestion.
pub async fn suggest_competitors(
    state: &Arc<AppState>,
    user_site: &str,
    industry: &str,
    business_model: &str,
) -> Result<Vec<CompetitorCandidate>, ScoutError> {
    ensure_absolute_url(user_site)?;
    info!("suggesting competitors for {}", user_site);

    let prompt = prompts::suggestion_prompt(user_site, industry, business_model);
    let raw = state.completion.complete(&prompt, true).await?;
    let payload: SuggestionPayload = normalize(&raw)?;

    let candidates: Vec<CompetitorCandidate> = payload
        .competitors
        .into_iter()
        .map(|c| {
            let icon = favicon_for(&c.url);
            CompetitorCandidate {
                name: c.name,
                url: c.url,
                icon,
                reason: c.reason,
                similarity_score: c.similarity.clamp(0, 100) as u8,
            }
        })
        .collect();

    info!("model suggested {} competitors", candidates.len());
    Ok(candidates)
}
