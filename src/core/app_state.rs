use std::sync::Arc;

use crate::core::config::ScoutConfig;
use crate::core::types::PageContent;
use crate::tools::completion::{CompletionClient, OpenAiCompletionClient};
use crate::tools::extract::{HttpPageFetcher, PageFetcher};
use crate::tools::pagespeed::{PageSpeedProbe, PerformanceProbe};

#[derive(Clone)]
pub struct AppState {
    pub completion: Arc<dyn CompletionClient>,
    pub page_fetcher: Arc<dyn PageFetcher>,
    pub performance_probe: Arc<dyn PerformanceProbe>,
    // Cache for repeated page fetches (suggest -> analyze reuses URLs)
    pub page_cache: moka::future::Cache<String, PageContent>,
    // Concurrency control for external calls
    pub outbound_limit: Arc<tokio::sync::Semaphore>,
    /// Analyzer fan-out width, resolved once at construction.
    pub max_concurrent_analyses: usize,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("completion_live", &self.completion.is_live())
            .field("max_concurrent_analyses", &self.max_concurrent_analyses)
            .finish()
    }
}

impl AppState {
    /// Build the live collaborator set from a resolved config. All
    /// credentials and limits are read here, once; collaborators never
    /// consult the environment afterwards.
    pub fn new(http_client: reqwest::Client, config: &ScoutConfig) -> Self {
        let completion: Arc<dyn CompletionClient> =
            Arc::new(OpenAiCompletionClient::new(http_client.clone(), config));
        let page_fetcher: Arc<dyn PageFetcher> =
            Arc::new(HttpPageFetcher::new(http_client.clone()));
        let performance_probe: Arc<dyn PerformanceProbe> = Arc::new(PageSpeedProbe::new(
            http_client,
            config.resolve_pagespeed_api_key(),
        ));

        Self {
            completion,
            page_fetcher,
            performance_probe,
            page_cache: moka::future::Cache::builder()
                .max_capacity(10_000)
                .time_to_live(std::time::Duration::from_secs(60 * 30))
                .build(),
            outbound_limit: Arc::new(tokio::sync::Semaphore::new(
                config.resolve_outbound_limit(),
            )),
            max_concurrent_analyses: config.resolve_max_concurrent_analyses(),
        }
    }

    pub fn with_completion_client(mut self, completion: Arc<dyn CompletionClient>) -> Self {
        self.completion = completion;
        self
    }

    pub fn with_page_fetcher(mut self, page_fetcher: Arc<dyn PageFetcher>) -> Self {
        self.page_fetcher = page_fetcher;
        self
    }

    pub fn with_performance_probe(mut self, probe: Arc<dyn PerformanceProbe>) -> Self {
        self.performance_probe = probe;
        self
    }
}
