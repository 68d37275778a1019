//! Competitor Analyzer: the per-URL batch core. Every URL runs the
//! full extract -> complete -> normalize -> probe chain in isolation;
//! one URL's failure is logged and skipped, never aborting or touching
//! sibling analyses, and never retried within the batch.

use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

use crate::core::error::ScoutError;
use crate::core::types::{ensure_absolute_url, CompetitorAnalysis, CompetitorReport};
use crate::core::AppState;
use crate::tools::{extract, normalize::normalize, pagespeed, prompts};

/// Analyze a batch of competitor URLs concurrently.
///
/// Deduplication is the caller's responsibility. Returns whatever
/// succeeded; partial success is success. Only a fully-empty result is
/// an error ([`ScoutError::BatchExhausted`]). Result order follows
/// completion order, not input order.
pub async fn analyze_competitors(
    state: &Arc<AppState>,
    urls: Vec<String>,
) -> Result<Vec<CompetitorAnalysis>, ScoutError> {
    let start = Instant::now();
    let total = urls.len();
    info!(
        "analyzing {} competitors (concurrency: {})",
        total, state.max_concurrent_analyses
    );

    let analyses: Vec<CompetitorAnalysis> = stream::iter(urls)
        .map(|url| {
            let state = Arc::clone(state);
            async move {
                match analyze_one(&state, &url).await {
                    Ok(analysis) => Some(analysis),
                    Err(e) => {
                        warn!("analysis of {} failed: {}", url, e);
                        None
                    }
                }
            }
        })
        .buffer_unordered(state.max_concurrent_analyses)
        .collect::<Vec<_>>()
        .await
        .into_iter()
        .flatten()
        .collect();

    if analyses.is_empty() {
        return Err(ScoutError::BatchExhausted);
    }

    info!(
        "analyzed {}/{} competitors in {}ms",
        analyses.len(),
        total,
        start.elapsed().as_millis()
    );
    Ok(analyses)
}

/// One competitor's full chain. Extraction absence degrades into the
/// placeholder prompt note; probe absence leaves performance unset.
async fn analyze_one(state: &Arc<AppState>, url: &str) -> Result<CompetitorAnalysis, ScoutError> {
    ensure_absolute_url(url)?;

    let page = extract::fetch_page_cached(state, url).await;
    let prompt = prompts::analysis_prompt(url, page.as_ref());
    let raw = state.completion.complete(&prompt, true).await?;
    let report: CompetitorReport = normalize(&raw)?;
    let performance = pagespeed::probe_performance(state, url).await;

    Ok(CompetitorAnalysis {
        competitor_name: report.competitor_name,
        url: url.to_string(),
        pricing: report.pricing,
        products: report.products,
        messaging: report.messaging,
        insights: report.insights,
        performance,
    })
}
