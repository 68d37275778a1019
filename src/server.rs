//! HTTP surface: the three analysis endpoints plus health checks,
//! sharing one `{success, data | error}` envelope.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::core::error::ScoutError;
use crate::core::sample_data;
use crate::core::types::{
    ensure_absolute_url, AnalyzeCompetitorsRequest, AnalyzeSiteRequest, ApiEnvelope,
    CompetitorAnalysis, CompetitorCandidate, SiteProfile, SuggestCompetitorsRequest,
};
use crate::core::AppState;
use crate::tools::{analyze, classify, suggest};

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/health", get(health_check))
        .route("/analyze-site", post(analyze_site_handler))
        .route("/suggest-competitors", post(suggest_competitors_handler))
        .route("/analyze-competitors", post(analyze_competitors_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

type ApiFailure = (StatusCode, Json<ApiEnvelope<()>>);

fn failure(err: ScoutError) -> ApiFailure {
    err.log();
    let status = match err {
        ScoutError::Validation(_) => StatusCode::BAD_REQUEST,
        ScoutError::Gateway(_)
        | ScoutError::MalformedOutput { .. }
        | ScoutError::BatchExhausted => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ApiEnvelope::failure(err.to_string())))
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "rival-scout",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn analyze_site_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeSiteRequest>,
) -> Result<Json<ApiEnvelope<SiteProfile>>, ApiFailure> {
    ensure_absolute_url(&request.url).map_err(failure)?;

    if !state.completion.is_live() {
        info!("no completion credential configured; serving demo site profile");
        return Ok(Json(ApiEnvelope::ok(sample_data::sample_site_profile())));
    }

    let profile = classify::classify_site(&state, &request.url)
        .await
        .map_err(failure)?;
    Ok(Json(ApiEnvelope::ok(profile)))
}

async fn suggest_competitors_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SuggestCompetitorsRequest>,
) -> Result<Json<ApiEnvelope<Vec<CompetitorCandidate>>>, ApiFailure> {
    ensure_absolute_url(&request.user_site).map_err(failure)?;

    if !state.completion.is_live() {
        info!("no completion credential configured; serving demo competitors");
        return Ok(Json(ApiEnvelope::ok(sample_data::sample_competitors())));
    }

    let candidates = suggest::suggest_competitors(
        &state,
        &request.user_site,
        &request.industry,
        &request.business_model,
    )
    .await
    .map_err(failure)?;
    Ok(Json(ApiEnvelope::ok(candidates)))
}

async fn analyze_competitors_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeCompetitorsRequest>,
) -> Result<Json<ApiEnvelope<Vec<CompetitorAnalysis>>>, ApiFailure> {
    if request.competitors.is_empty() {
        return Err(failure(ScoutError::Validation(
            "At least one competitor required".to_string(),
        )));
    }
    for url in &request.competitors {
        ensure_absolute_url(url).map_err(failure)?;
    }

    if !state.completion.is_live() {
        info!("no completion credential configured; serving demo analyses");
        let canned: Vec<CompetitorAnalysis> = sample_data::sample_competitor_analyses()
            .into_iter()
            .take(request.competitors.len())
            .collect();
        return Ok(Json(ApiEnvelope::ok(canned)));
    }

    let analyses = analyze::analyze_competitors(&state, request.competitors)
        .await
        .map_err(failure)?;
    Ok(Json(ApiEnvelope::ok(analyses)))
}
