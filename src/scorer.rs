//! Quiz Scorer - Main coordinator for a quiz submission
//!
//! Validates the raw form, computes the footprint (remote carbon-accounting
//! provider first when configured, local estimator otherwise or on failure),
//! summarizes the lifestyle and selects the narrative.
//!
//! Holds only read-only configuration, so one instance is shared across all
//! concurrent requests.

use rustc_hash::FxHashMap;
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::answers::{AnswerSet, ValidationError};
use crate::estimator::{estimate, Footprint};
use crate::narrative::{NarrativeResult, NarrativeSelector};
use crate::providers::{CarbonAccounting, ProviderError};
use crate::summary::summarize;

/// Where the footprint figure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FootprintSource {
    CarbonApi,
    Local,
}

/// Result of a scored submission
#[derive(Debug, Clone, Serialize)]
pub struct QuizOutcome {
    pub footprint: Footprint,
    pub footprint_source: FootprintSource,
    pub summary: String,
    pub narrative: NarrativeResult,
}

/// Main quiz scorer
#[derive(Clone)]
pub struct QuizScorer {
    carbon_api: Option<Arc<dyn CarbonAccounting>>,
    carbon_timeout: Duration,
    narrator: NarrativeSelector,
}

impl QuizScorer {
    /// Local estimator only
    pub fn new(narrator: NarrativeSelector) -> Self {
        Self {
            carbon_api: None,
            carbon_timeout: crate::providers::carbon_api::DEFAULT_TIMEOUT,
            narrator,
        }
    }

    /// Try the carbon-accounting provider before the local estimator
    pub fn with_carbon_api(mut self, provider: Arc<dyn CarbonAccounting>, timeout: Duration) -> Self {
        self.carbon_api = Some(provider);
        self.carbon_timeout = timeout;
        self
    }

    pub fn narrator(&self) -> &NarrativeSelector {
        &self.narrator
    }

    /// Score a raw form submission.
    ///
    /// Only missing answers are an error; provider failures are absorbed.
    pub async fn handle(&self, raw: &FxHashMap<String, String>) -> Result<QuizOutcome, ValidationError> {
        let answers = AnswerSet::from_form(raw)?;
        Ok(self.score(&answers).await)
    }

    /// Score a validated answer set
    pub async fn score(&self, answers: &AnswerSet) -> QuizOutcome {
        let start = Instant::now();

        let (footprint, footprint_source) = self.footprint(answers).await;
        let summary = summarize(answers);
        let narrative = self.narrator.narrate(&summary, footprint).await;

        tracing::info!(
            "Scored submission: {} kg ({:?}), narrative {:?}, in {:?}",
            footprint,
            footprint_source,
            narrative.source,
            start.elapsed()
        );

        QuizOutcome {
            footprint,
            footprint_source,
            summary: summary.to_string(),
            narrative,
        }
    }

    async fn footprint(&self, answers: &AnswerSet) -> (Footprint, FootprintSource) {
        if let Some(provider) = &self.carbon_api {
            match self.remote_footprint(provider.as_ref(), answers).await {
                Ok(footprint) => return (footprint, FootprintSource::CarbonApi),
                Err(e) => tracing::warn!("Carbon API failed, using local estimate: {}", e),
            }
        }
        (estimate(answers), FootprintSource::Local)
    }

    async fn remote_footprint(
        &self,
        provider: &dyn CarbonAccounting,
        answers: &AnswerSet,
    ) -> Result<Footprint, ProviderError> {
        let kg = tokio::time::timeout(self.carbon_timeout, provider.total_kg(answers))
            .await
            .map_err(|_| ProviderError::Timeout(self.carbon_timeout))??;

        Footprint::new(kg).ok_or_else(|| ProviderError::Malformed(format!("non-finite total {}", kg)))
    }
}
