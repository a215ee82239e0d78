mod config;
mod metrics;

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber;

use config::AppConfig;
use metrics::{Metrics, MetricsSnapshot};

use extract::{ArticleFields, ExtractionOutcome, Extractor};
use relevance::{Article, Classifier, RelevanceVerdict};
use summary::{Summarizer, SummaryRequest, SummaryResult};

struct AppState {
    extractor: Extractor,
    classifier: Classifier,
    summarizer: Summarizer,
    oracle_url: String,
    metrics: Arc<Metrics>,
}

#[derive(Serialize)]
struct HealthResponse {
    oracle: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();

    let client = llm::ChatClient::new(
        config.oracle.base_url.clone(),
        config.oracle.model.clone(),
    );

    let state = Arc::new(AppState {
        extractor: Extractor::new(client.clone()),
        classifier: Classifier::new(client.clone()),
        summarizer: Summarizer::new(client),
        oracle_url: config.oracle.base_url.clone(),
        metrics: Metrics::new(),
    });

    // Build router
    let app = Router::new()
        .route("/extract", post(extract_article))
        .route("/predict", post(predict_relevance))
        .route("/summarize", post(summarize_events))
        .route("/health", get(health_check))
        .route("/stats", get(get_stats))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind server address");

    tracing::info!("Server listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await.expect("Server error");
}

async fn extract_article(
    State(state): State<Arc<AppState>>,
    Json(article): Json<ArticleFields>,
) -> Json<ExtractionOutcome> {
    let started = Instant::now();
    let outcome = state.extractor.extract(&article).await;

    let unparsed = matches!(outcome, ExtractionOutcome::Unparsed { .. });
    state.metrics.record_extract(started.elapsed(), unparsed);

    Json(outcome)
}

async fn predict_relevance(
    State(state): State<Arc<AppState>>,
    Json(article): Json<Article>,
) -> Json<RelevanceVerdict> {
    let started = Instant::now();
    let verdict = state.classifier.classify(&article).await;

    state.metrics.record_predict(started.elapsed());

    Json(verdict)
}

async fn summarize_events(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SummaryRequest>,
) -> Json<SummaryResult> {
    let started = Instant::now();
    let result = state.summarizer.summarize(&request).await;

    state.metrics.record_summarize(started.elapsed());

    Json(result)
}

async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let oracle = match reqwest::get(&state.oracle_url).await {
        Ok(resp) if resp.status().is_success() => "ok".to_string(),
        Ok(resp) => format!("error: status {}", resp.status()),
        Err(e) => format!("error: {}", e),
    };

    Json(HealthResponse { oracle })
}

async fn get_stats(State(state): State<Arc<AppState>>) -> Json<MetricsSnapshot> {
    Json(state.metrics.snapshot())
}
