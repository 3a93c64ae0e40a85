// Page handlers for HTML rendering with Askama

use askama::Template;
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use rustc_hash::FxHashMap;

use crate::answers::ValidationError;
use crate::api_server::AppState;
use crate::narrative::{FootprintTier, NarrativeSource};
use crate::quiz::{Question, QUESTIONS};
use crate::scorer::{FootprintSource, QuizOutcome};

const GENERIC_APOLOGY: &str =
    "Something went wrong while preparing your results. Please try again or contact support if the problem persists.";

// ============================================================================
// Home Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub title: String,
    pub question_count: usize,
}

pub async fn home_page() -> Result<Html<String>, PageError> {
    let template = HomeTemplate {
        title: "Your World in 2050".to_string(),
        question_count: QUESTIONS.len(),
    };
    render(&template)
}

// ============================================================================
// Quiz Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/quiz.html")]
pub struct QuizTemplate {
    pub title: String,
    pub questions: &'static [Question],
}

pub async fn quiz_page() -> Result<Html<String>, PageError> {
    let template = QuizTemplate {
        title: "Lifestyle Quiz".to_string(),
        questions: &QUESTIONS,
    };
    render(&template)
}

// ============================================================================
// Results Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/results.html")]
pub struct ResultsTemplate {
    pub title: String,
    pub carbon_kg: String,
    pub carbon_tonnes: String,
    pub tier_name: &'static str,
    pub generated: bool,
    pub from_carbon_api: bool,
    pub summary: String,
    pub story: String,
    pub tips: Vec<String>,
}

impl From<QuizOutcome> for ResultsTemplate {
    fn from(outcome: QuizOutcome) -> Self {
        let tier_name = FootprintTier::from_footprint(outcome.footprint).display_name();
        let generated = outcome.narrative.source == NarrativeSource::Generated;

        Self {
            title: "Your Results".to_string(),
            carbon_kg: outcome.footprint.to_string(),
            carbon_tonnes: format!("{:.1}", outcome.footprint.tonnes()),
            tier_name,
            generated,
            from_carbon_api: outcome.footprint_source == FootprintSource::CarbonApi,
            summary: outcome.summary,
            story: outcome.narrative.story,
            tips: outcome.narrative.tips.into(),
        }
    }
}

pub async fn calculate(
    State(state): State<AppState>,
    Form(raw): Form<FxHashMap<String, String>>,
) -> Result<Html<String>, PageError> {
    tracing::debug!("Quiz submission with {} fields", raw.len());

    let outcome = state.scorer.handle(&raw).await?;
    render(&ResultsTemplate::from(outcome))
}

// ============================================================================
// Error Pages
// ============================================================================

#[derive(Template)]
#[template(path = "pages/error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub heading: String,
    pub message: String,
    pub missing_fields: Vec<&'static str>,
}

impl ErrorTemplate {
    pub fn generic() -> Self {
        Self {
            title: "Error".to_string(),
            heading: "Oops! Something went wrong.".to_string(),
            message: GENERIC_APOLOGY.to_string(),
            missing_fields: Vec::new(),
        }
    }

    fn missing(err: &ValidationError) -> Self {
        Self {
            title: "Missing answers".to_string(),
            heading: "Some questions were not answered".to_string(),
            message: "Please go back and answer every question.".to_string(),
            missing_fields: err.field_names(),
        }
    }
}

#[derive(Debug)]
pub enum PageError {
    Validation(ValidationError),
    Internal(String),
}

impl From<ValidationError> for PageError {
    fn from(err: ValidationError) -> Self {
        PageError::Validation(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, template) = match self {
            PageError::Validation(err) => {
                tracing::info!("Rejected submission: {}", err);
                (StatusCode::BAD_REQUEST, ErrorTemplate::missing(&err))
            }
            PageError::Internal(msg) => {
                // Details stay in the log; the page only gets the apology
                tracing::error!("Page error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorTemplate::generic())
            }
        };

        (status, render_error_page(&template)).into_response()
    }
}

/// Render an error page, falling back to plain HTML if the template fails
pub fn render_error_page(template: &ErrorTemplate) -> Html<String> {
    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Error template failed: {}", e);
        format!("<h2>{}</h2><a href='/quiz'>← Back to Quiz</a>", template.heading)
    }))
}

fn render<T: Template>(template: &T) -> Result<Html<String>, PageError> {
    template
        .render()
        .map(Html)
        .map_err(|e| PageError::Internal(format!("Template error: {}", e)))
}
