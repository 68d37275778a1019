//! Site Classifier: page bundle + completion + normalization into a
//! [`SiteProfile`], with a best-effort performance snapshot attached.

use std::sync::Arc;
use tracing::info;

use crate::core::error::ScoutError;
use crate::core::types::{ensure_absolute_url, SiteFacts, SiteProfile};
use crate::core::AppState;
use crate::tools::{extract, normalize::normalize, pagespeed, prompts};

/// Upper bound on the products list carried in a profile.
const MAX_PROFILE_PRODUCTS: usize = 5;

/// Classify a site into its profile.
///
/// Extraction and performance-probe failures degrade (the prompt falls
/// back to general knowledge, the snapshot stays absent); only the
/// completion call or its normalization can fail the classification.
pub async fn classify_site(state: &Arc<AppState>, url: &str) -> Result<SiteProfile, ScoutError> {
    ensure_absolute_url(url)?;
    info!("classifying site: {}", url);

    let page = extract::fetch_page_cached(state, url).await;
    if page.is_none() {
        info!("no page content for {}; classifying from general knowledge", url);
    }

    let prompt = prompts::classification_prompt(url, page.as_ref());
    let raw = state.completion.complete(&prompt, true).await?;
    let facts: SiteFacts = normalize(&raw)?;

    let mut products = facts.products;
    products.truncate(MAX_PROFILE_PRODUCTS);

    let performance = pagespeed::probe_performance(state, url).await;

    Ok(SiteProfile {
        url: url.to_string(),
        industry: facts.industry,
        business_model: facts.business_model,
        products,
        target_market: facts.target_market,
        performance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ScoutConfig;
    use crate::core::types::{PageContent, PerformanceMetrics, PerformanceSnapshot};
    use crate::tools::completion::CompletionClient;
    use crate::tools::extract::PageFetcher;
    use crate::tools::pagespeed::PerformanceProbe;
    use async_trait::async_trait;

    struct StaticCompletion(Result<&'static str, ()>);

    #[async_trait]
    impl CompletionClient for StaticCompletion {
        fn is_live(&self) -> bool {
            true
        }
        async fn complete(&self, _prompt: &str, _augmented: bool) -> Result<String, ScoutError> {
            match self.0 {
                Ok(text) => Ok(text.to_string()),
                Err(()) => Err(ScoutError::Gateway("upstream down".to_string())),
            }
        }
    }

    struct NoPage;

    #[async_trait]
    impl PageFetcher for NoPage {
        async fn fetch_page(&self, _url: &str) -> Option<PageContent> {
            None
        }
    }

    struct NoProbe;

    #[async_trait]
    impl PerformanceProbe for NoProbe {
        async fn probe(&self, _url: &str) -> Option<PerformanceSnapshot> {
            None
        }
    }

    struct FixedProbe;

    #[async_trait]
    impl PerformanceProbe for FixedProbe {
        async fn probe(&self, _url: &str) -> Option<PerformanceSnapshot> {
            Some(PerformanceSnapshot {
                performance_score: 90,
                accessibility_score: 95,
                best_practices_score: 100,
                seo_score: 88,
                metrics: PerformanceMetrics {
                    largest_contentful_paint: "1.2 s".to_string(),
                    cumulative_layout_shift: "0.01".to_string(),
                    total_blocking_time: "150 ms".to_string(),
                    speed_index: "2.0 s".to_string(),
                },
            })
        }
    }

    fn state(completion: StaticCompletion) -> Arc<AppState> {
        Arc::new(
            AppState::new(reqwest::Client::new(), &ScoutConfig::default())
                .with_completion_client(Arc::new(completion))
                .with_page_fetcher(Arc::new(NoPage))
                .with_performance_probe(Arc::new(NoProbe)),
        )
    }

    const FACTS: &str = r#"{"industry":"Freelancer Invoicing Software","businessModel":"B2B SaaS","products":["Invoicing","Time Tracking"],"targetMarket":"Independent contractors"}"#;

    #[tokio::test]
    async fn builds_profile_from_completion_plus_url() {
        let profile = classify_site(&state(StaticCompletion(Ok(FACTS))), "https://acme.test")
            .await
            .unwrap();
        assert_eq!(profile.url, "https://acme.test");
        assert_eq!(profile.industry, "Freelancer Invoicing Software");
        assert_eq!(profile.business_model, "B2B SaaS");
        assert_eq!(profile.products, vec!["Invoicing", "Time Tracking"]);
        assert_eq!(profile.target_market, "Independent contractors");
        assert!(profile.performance.is_none());
    }

    #[tokio::test]
    async fn probe_success_is_attached() {
        let state = Arc::new(
            AppState::new(reqwest::Client::new(), &ScoutConfig::default())
                .with_completion_client(Arc::new(StaticCompletion(Ok(FACTS))))
                .with_page_fetcher(Arc::new(NoPage))
                .with_performance_probe(Arc::new(FixedProbe)),
        );
        let profile = classify_site(&state, "https://acme.test").await.unwrap();
        assert_eq!(profile.performance.unwrap().performance_score, 90);
    }

    #[tokio::test]
    async fn gateway_failure_aborts_classification() {
        let err = classify_site(&state(StaticCompletion(Err(()))), "https://acme.test")
            .await
            .unwrap_err();
        assert!(matches!(err, ScoutError::Gateway(_)));
    }

    #[tokio::test]
    async fn malformed_completion_aborts_classification() {
        let err = classify_site(
            &state(StaticCompletion(Ok("no json here"))),
            "https://acme.test",
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ScoutError::MalformedOutput { .. }));
    }

    #[tokio::test]
    async fn products_are_bounded() {
        let many = r#"{"industry":"X","businessModel":"Y","products":["1","2","3","4","5","6","7"],"targetMarket":"Z"}"#;
        let profile = classify_site(&state(StaticCompletion(Ok(many))), "https://acme.test")
            .await
            .unwrap();
        assert_eq!(profile.products.len(), 5);
    }

    #[tokio::test]
    async fn invalid_url_is_rejected_before_any_call() {
        let err = classify_site(&state(StaticCompletion(Ok(FACTS))), "not-a-url")
            .await
            .unwrap_err();
        assert!(matches!(err, ScoutError::Validation(_)));
    }
}
