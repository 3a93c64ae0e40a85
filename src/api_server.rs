// Axum Server Module
//
// Purpose: HTML quiz pages + JSON scoring API over a shared QuizScorer

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use rustc_hash::FxHashMap;
use std::any::Any;
use std::sync::Arc;

use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    services::ServeDir,
    trace::TraceLayer,
};

use crate::answers::ValidationError;
use crate::config::AppConfig;
use crate::narrative::NarrativeSelector;
use crate::providers::{CarbonApiClient, OpenAiClient};
use crate::scorer::{QuizOutcome, QuizScorer};
use crate::web::handlers::pages::{self, ErrorTemplate};

pub const LIVENESS_MESSAGE: &str = "Footprint 2050 server is working!";

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub scorer: Arc<QuizScorer>,
    pub static_dir: String,
}

impl AppState {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let narrator = match &config.text_generation {
            Some(text) => {
                tracing::info!("Text generation enabled ({} via {})", text.model, text.base_url);
                let client = OpenAiClient::new(&text.base_url, &text.api_key, text.timeout)?;
                NarrativeSelector::with_generator(Arc::new(client), &text.model, text.timeout)
            }
            None => {
                tracing::info!("No OPENAI_API_KEY found - using canned stories");
                NarrativeSelector::canned_only()
            }
        };

        let mut scorer = QuizScorer::new(narrator);
        match &config.carbon_api {
            Some(carbon) => {
                tracing::info!("Carbon API enabled ({}, timeout {:?})", carbon.url, carbon.timeout);
                let client = CarbonApiClient::new(&carbon.url, &carbon.api_key, carbon.timeout)?;
                scorer = scorer.with_carbon_api(Arc::new(client), carbon.timeout);
            }
            None => tracing::info!("Carbon API not configured - using local estimates"),
        }

        Ok(Self::from_scorer(scorer, &config.static_dir))
    }

    /// State around an already-built scorer (tests inject fake providers here)
    pub fn from_scorer(scorer: QuizScorer, static_dir: &str) -> Self {
        Self {
            scorer: Arc::new(scorer),
            static_dir: static_dir.to_string(),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        // HTML pages
        .route("/", get(pages::home_page))
        .route("/quiz", get(pages::quiz_page))
        .route("/calculate", post(pages::calculate))

        // JSON API
        .route("/api/calculate", post(calculate_json))

        // Liveness + health
        .route("/test", get(liveness))
        .route("/health", get(health_check))

        .nest_service("/static", static_files)

        // Middleware (applied in reverse order)
        .layer(CatchPanicLayer::custom(handle_panic)) // unexpected failures -> generic 500 page
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "text_generation": state.scorer.narrator().is_delegated(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// JSON twin of the form endpoint
async fn calculate_json(
    State(state): State<AppState>,
    Json(raw): Json<FxHashMap<String, String>>,
) -> Result<Json<QuizOutcome>, AppError> {
    let outcome = state.scorer.handle(&raw).await?;
    Ok(Json(outcome))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!("Request handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        pages::render_error_page(&ErrorTemplate::generic()),
    )
        .into_response()
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum AppError {
    Validation(ValidationError),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({
                    "error": err.to_string(),
                    "missing_fields": err.field_names(),
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
