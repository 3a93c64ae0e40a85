//! Footprint 2050
//!
//! Lifestyle quiz that estimates an annual carbon footprint and tells a short
//! story about the world in 2050 if everyone lived the same way.
//!
//! - `answers`: question keys, validated answer sets
//! - `tables`: per-category weights with explicit defaults
//! - `estimator`: weighted-sum footprint estimate
//! - `summary`: lifestyle phrases for the narrative
//! - `narrative`: generated or canned 2050 story + two tips
//! - `providers`: text-generation and carbon-accounting clients
//! - `scorer`: validates a submission and runs the pipeline
//!
//! With the `api` feature: `api_server` (axum router) and `web` (askama pages).

pub mod answers;
pub mod config;
pub mod estimator;
pub mod narrative;
pub mod providers;
pub mod quiz;
pub mod scorer;
pub mod summary;
pub mod tables;

#[cfg(feature = "api")]
pub mod api_server;
#[cfg(feature = "api")]
pub mod web;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use answers::{AnswerSet, QuestionKey, ValidationError};
pub use config::AppConfig;
pub use estimator::{estimate, Footprint};
pub use narrative::{NarrativeResult, NarrativeSelector, NarrativeSource, FootprintTier};
pub use scorer::{FootprintSource, QuizOutcome, QuizScorer};
pub use summary::{summarize, LifestyleSummary};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
