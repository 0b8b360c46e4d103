//! Dashboard HTTP server.
//!
//! Serves the single-page dashboard and a small JSON API over the style analyzer.
//!
//! ## Endpoints
//! - `GET /` - dashboard page
//! - `GET /health` - liveness probe
//! - `GET /api/samples` - preset sample texts
//! - `POST /api/analyze` - analyze a text (rate limited per client address)

use axum::extract::rejection::JsonRejection;
use axum::extract::{ConnectInfo, State};
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::{AnalyzeRequest, AnalyzeResponse, HealthResponse};
use crate::rate_limiter::RateLimiter;
use crate::samples::{Sample, SAMPLES};
use crate::style::StyleAnalyzer;

const DASHBOARD_HTML: &str = include_str!("../assets/dashboard.html");

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    analyzer: StyleAnalyzer<'static>,
    config: Arc<AppConfig>,
    limiter: Arc<Mutex<RateLimiter>>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let limiter = RateLimiter::new(config.rate_limit, config.rate_window());
        Self {
            analyzer: StyleAnalyzer::new(),
            config: Arc::new(config),
            limiter: Arc::new(Mutex::new(limiter)),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    fn admit(&self, client: SocketAddr) -> Result<(), AppError> {
        let mut limiter = self
            .limiter
            .lock()
            .map_err(|_| AppError::Internal("Rate limiter lock poisoned".to_string()))?;

        if limiter.check(client.ip()) {
            Ok(())
        } else {
            warn!(client = %client.ip(), "Rate limit exceeded");
            Err(AppError::RateLimited)
        }
    }

    /// Forget clients that have been idle for a whole window
    pub fn prune_limiter(&self) {
        if let Ok(mut limiter) = self.limiter.lock() {
            limiter.prune();
            debug!(clients = limiter.tracked_clients(), "Rate limiter pruned");
        }
    }
}

/// Build the dashboard router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .route("/health", get(health))
        .route("/api/samples", get(samples))
        .route("/api/analyze", post(analyze))
        .with_state(state)
}

pub async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn samples() -> Json<&'static [Sample]> {
    Json(SAMPLES)
}

pub async fn analyze(
    State(state): State<AppState>,
    ConnectInfo(client): ConnectInfo<SocketAddr>,
    body: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    state.admit(client)?;
    let Json(request) = body?;
    request.check(state.config.max_text_chars)?;

    let result = state.analyzer.analyze(&request.text);
    info!("Analyzed text for {}: {}", client.ip(), result.summary());

    Ok(Json(AnalyzeResponse::new(result, request.options)))
}

/// Periodically drop idle rate-limiter entries
pub fn spawn_limiter_janitor(state: AppState) -> tokio::task::JoinHandle<()> {
    let period = state.config.rate_window().max(Duration::from_secs(1));
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            state.prune_limiter();
        }
    })
}

/// Bind and serve until ctrl-c
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.bind_addr()?;
    let state = AppState::new(config);
    let janitor = spawn_limiter_janitor(state.clone());
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("StyleType dashboard listening on http://{}", listener.local_addr()?);

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    janitor.abort();
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
