//! Endpoint tests: drive the real Router with fake collaborators
//! injected through the AppState seams. No network anywhere.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

use rival_scout::core::config::ScoutConfig;
use rival_scout::server::build_router;
use rival_scout::tools::completion::CompletionClient;
use rival_scout::tools::extract::PageFetcher;
use rival_scout::tools::pagespeed::PerformanceProbe;
use rival_scout::{AppState, PageContent, PerformanceSnapshot, ScoutError};

// ---------------------------------------------------------------------------
// Fakes
// ---------------------------------------------------------------------------

type Script = fn(&str) -> Result<String, ScoutError>;

struct ScriptedCompletion {
    live: bool,
    script: Script,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl CompletionClient for ScriptedCompletion {
    fn is_live(&self) -> bool {
        self.live
    }
    async fn complete(&self, prompt: &str, _augmented: bool) -> Result<String, ScoutError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.script)(prompt)
    }
}

struct CountingFetcher {
    page: Option<PageContent>,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl PageFetcher for CountingFetcher {
    async fn fetch_page(&self, _url: &str) -> Option<PageContent> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.page.clone()
    }
}

struct CountingProbe {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl PerformanceProbe for CountingProbe {
    async fn probe(&self, _url: &str) -> Option<PerformanceSnapshot> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        None
    }
}

struct Counters {
    completion: Arc<AtomicUsize>,
    fetch: Arc<AtomicUsize>,
    probe: Arc<AtomicUsize>,
}

fn app_with(live: bool, script: Script, page: Option<PageContent>) -> (Router, Counters) {
    let counters = Counters {
        completion: Arc::new(AtomicUsize::new(0)),
        fetch: Arc::new(AtomicUsize::new(0)),
        probe: Arc::new(AtomicUsize::new(0)),
    };

    let state = Arc::new(
        AppState::new(reqwest::Client::new(), &ScoutConfig::default())
            .with_completion_client(Arc::new(ScriptedCompletion {
                live,
                script,
                calls: Arc::clone(&counters.completion),
            }))
            .with_page_fetcher(Arc::new(CountingFetcher {
                page,
                calls: Arc::clone(&counters.fetch),
            }))
            .with_performance_probe(Arc::new(CountingProbe {
                calls: Arc::clone(&counters.probe),
            })),
    );

    (build_router(state), counters)
}

fn no_completion(_prompt: &str) -> Result<String, ScoutError> {
    panic!("completion must not be called");
}

async fn post_json(
    app: Router,
    path: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, value)
}

fn acme_page() -> PageContent {
    PageContent {
        title: "Acme Invoicing".to_string(),
        description: String::new(),
        h1s: vec!["Invoicing for freelancers".to_string()],
        text: "Invoicing built for independent contractors.".to_string(),
        fetched_at: "2026-01-01T00:00:00Z".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Demo mode
// ---------------------------------------------------------------------------

#[tokio::test]
async fn demo_mode_serves_canned_site_profile_without_outbound_calls() {
    let (app, counters) = app_with(false, no_completion, None);
    let (status, body) = post_json(
        app,
        "/analyze-site",
        serde_json::json!({"url": "https://example.com"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["industry"], "Business Analytics & Intelligence");
    assert_eq!(counters.completion.load(Ordering::SeqCst), 0);
    assert_eq!(counters.fetch.load(Ordering::SeqCst), 0);
    assert_eq!(counters.probe.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn demo_mode_serves_canned_competitors() {
    let (app, counters) = app_with(false, no_completion, None);
    let (status, body) = post_json(
        app,
        "/suggest-competitors",
        serde_json::json!({
            "userSite": "https://example.com",
            "industry": "Analytics",
            "businessModel": "SaaS"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
    assert_eq!(body["data"][0]["similarityScore"], 92);
    assert!(body["data"][0]["icon"].as_str().unwrap().contains("favicons"));
    assert_eq!(counters.completion.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn demo_mode_truncates_canned_analyses_to_request_size() {
    let (app, counters) = app_with(false, no_completion, None);
    let (status, body) = post_json(
        app,
        "/analyze-competitors",
        serde_json::json!({"competitors": ["https://a.test", "https://b.test"]}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"][0]["competitorName"], "Example Competitor A");
    assert_eq!(
        body["data"][0]["pricing"]["plans"][0]["billingFrequency"],
        "monthly"
    );
    assert_eq!(counters.completion.load(Ordering::SeqCst), 0);
    assert_eq!(counters.fetch.load(Ordering::SeqCst), 0);
    assert_eq!(counters.probe.load(Ordering::SeqCst), 0);
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn analyze_site_rejects_invalid_url() {
    let (app, _) = app_with(true, no_completion, None);
    let (status, body) =
        post_json(app, "/analyze-site", serde_json::json!({"url": "not-a-url"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Invalid URL format");
}

#[tokio::test]
async fn analyze_competitors_rejects_empty_list() {
    let (app, _) = app_with(true, no_completion, None);
    let (status, body) = post_json(
        app,
        "/analyze-competitors",
        serde_json::json!({"competitors": []}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "At least one competitor required");
}

#[tokio::test]
async fn analyze_competitors_rejects_invalid_member_urls() {
    let (app, _) = app_with(true, no_completion, None);
    let (status, body) = post_json(
        app,
        "/analyze-competitors",
        serde_json::json!({"competitors": ["https://ok.test", "nope"]}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid URL format");
}

// ---------------------------------------------------------------------------
// Live pipeline through the endpoints
// ---------------------------------------------------------------------------

fn acme_classification(prompt: &str) -> Result<String, ScoutError> {
    assert!(prompt.contains("Acme Invoicing"), "extraction not embedded");
    Ok(r#"{"industry":"Freelancer Invoicing Software","businessModel":"B2B SaaS","products":["Invoicing","Time Tracking"],"targetMarket":"Independent contractors"}"#.to_string())
}

#[tokio::test]
async fn analyze_site_returns_profile_plus_url() {
    let (app, _) = app_with(true, acme_classification, Some(acme_page()));
    let (status, body) = post_json(
        app,
        "/analyze-site",
        serde_json::json!({"url": "https://acme.test"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!({
            "success": true,
            "data": {
                "url": "https://acme.test",
                "industry": "Freelancer Invoicing Software",
                "businessModel": "B2B SaaS",
                "products": ["Invoicing", "Time Tracking"],
                "targetMarket": "Independent contractors"
            }
        })
    );
}

fn per_url_reports(prompt: &str) -> Result<String, ScoutError> {
    if prompt.contains("bad.test") {
        return Err(ScoutError::Gateway("upstream down".to_string()));
    }
    Ok(r#"```json
    {
        "competitorName": "Alpha",
        "pricing": {"plans": [{"name": "Pro", "price": "$79/mo", "billingFrequency": "monthly", "features": ["API access"]}]},
        "products": ["Invoicing"],
        "messaging": {"headline": "h", "valueProposition": "v", "targetAudience": "t", "differentiators": ["d"]},
        "insights": {"strengths": ["s"], "positioning": "p", "strategy": "st"}
    }
    ```"#
    .to_string())
}

#[tokio::test]
async fn partial_batch_success_is_success() {
    let (app, _) = app_with(true, per_url_reports, None);
    let (status, body) = post_json(
        app,
        "/analyze-competitors",
        serde_json::json!({"competitors": ["https://a.test", "https://bad.test"]}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["competitorName"], "Alpha");
    assert_eq!(data[0]["url"], "https://a.test");
}

#[tokio::test]
async fn exhausted_batch_is_a_500() {
    let (app, _) = app_with(true, per_url_reports, None);
    let (status, body) = post_json(
        app,
        "/analyze-competitors",
        serde_json::json!({"competitors": ["https://only-bad.test"]}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Failed to analyze any competitors");
}

fn malformed_suggestions(_prompt: &str) -> Result<String, ScoutError> {
    Ok("Here are three competitors I like.".to_string())
}

#[tokio::test]
async fn malformed_suggestion_output_is_a_500_with_no_partial_list() {
    let (app, _) = app_with(true, malformed_suggestions, None);
    let (status, body) = post_json(
        app,
        "/suggest-competitors",
        serde_json::json!({
            "userSite": "https://acme.test",
            "industry": "Invoicing Software",
            "businessModel": "B2B SaaS"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert!(body.get("data").is_none());
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("invalid JSON response from AI"));
}

#[tokio::test]
async fn health_check_reports_service_name() {
    let (app, _) = app_with(false, no_completion, None);
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["service"], "rival-scout");
}
