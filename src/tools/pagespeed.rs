//! Performance Prober: normalizes the Lighthouse scoring API's nested
//! response into four 0-100 category scores and four display metrics.
//! Every failure mode here degrades to absence; a missing snapshot must
//! never sink the analysis that asked for it.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde_json::Value;
use std::sync::{Arc, Once};
use tracing::warn;

use crate::core::types::{PerformanceMetrics, PerformanceSnapshot};
use crate::core::AppState;

const ENDPOINT: &str = "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";
const CATEGORIES: [&str; 4] = ["performance", "accessibility", "best-practices", "seo"];

/// Sentinel for a timing metric the scoring API did not report.
pub const METRIC_UNAVAILABLE: &str = "N/A";

static MISSING_KEY_LOGGED: Once = Once::new();

/// Scores a URL's page performance, or reports absence.
#[async_trait]
pub trait PerformanceProbe: Send + Sync {
    async fn probe(&self, url: &str) -> Option<PerformanceSnapshot>;
}

pub struct PageSpeedProbe {
    http: reqwest::Client,
    api_key: Option<String>,
}

impl PageSpeedProbe {
    pub fn new(http: reqwest::Client, api_key: Option<String>) -> Self {
        Self { http, api_key }
    }
}

#[async_trait]
impl PerformanceProbe for PageSpeedProbe {
    async fn probe(&self, url: &str) -> Option<PerformanceSnapshot> {
        let Some(key) = self.api_key.as_deref() else {
            MISSING_KEY_LOGGED.call_once(|| {
                warn!("PageSpeed API key not configured; performance probes disabled");
            });
            return None;
        };

        let endpoint = format!(
            "{}?url={}&key={}&category={}",
            ENDPOINT,
            utf8_percent_encode(url, NON_ALPHANUMERIC),
            key,
            CATEGORIES.join("&category=")
        );

        let response = match self.http.get(&endpoint).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!("PageSpeed request for {} failed: {}", url, e);
                return None;
            }
        };

        let payload: Value = match response.json().await {
            Ok(v) => v,
            Err(e) => {
                warn!("PageSpeed response for {} unreadable: {}", url, e);
                return None;
            }
        };

        match snapshot_from_payload(&payload) {
            Some(snapshot) => Some(snapshot),
            None => {
                let reason = payload
                    .get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(|m| m.as_str())
                    .unwrap_or("missing lighthouseResult");
                warn!("PageSpeed probe of {} unusable: {}", url, reason);
                None
            }
        }
    }
}

/// Best-effort probe under the process-wide outbound permit.
pub async fn probe_performance(state: &Arc<AppState>, url: &str) -> Option<PerformanceSnapshot> {
    let _permit = state.outbound_limit.acquire().await.expect("semaphore closed");
    state.performance_probe.probe(url).await
}

/// Normalize the scoring API's nested payload.
///
/// Category scores arrive as 0-1 fractions; each is scaled x100,
/// rounded to nearest, clamped to [0,100]. A missing category envelope
/// fails the whole snapshot; a missing audit only defaults its metric.
pub fn snapshot_from_payload(payload: &Value) -> Option<PerformanceSnapshot> {
    let lighthouse = payload.get("lighthouseResult")?;
    let categories = lighthouse.get("categories")?;
    let audits = lighthouse.get("audits").unwrap_or(&Value::Null);

    Some(PerformanceSnapshot {
        performance_score: scaled_score(categories, "performance")?,
        accessibility_score: scaled_score(categories, "accessibility")?,
        best_practices_score: scaled_score(categories, "best-practices")?,
        seo_score: scaled_score(categories, "seo")?,
        metrics: PerformanceMetrics {
            largest_contentful_paint: display_value(audits, "largest-contentful-paint"),
            cumulative_layout_shift: display_value(audits, "cumulative-layout-shift"),
            total_blocking_time: display_value(audits, "total-blocking-time"),
            speed_index: display_value(audits, "speed-index"),
        },
    })
}

fn scaled_score(categories: &Value, name: &str) -> Option<u8> {
    let fraction = categories.get(name)?.get("score")?.as_f64()?;
    Some((fraction * 100.0).round().clamp(0.0, 100.0) as u8)
}

fn display_value(audits: &Value, name: &str) -> String {
    audits
        .get(name)
        .and_then(|a| a.get("displayValue"))
        .and_then(|v| v.as_str())
        .unwrap_or(METRIC_UNAVAILABLE)
        .to_string()
}
