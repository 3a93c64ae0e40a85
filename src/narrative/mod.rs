//! Narrative Selector
//!
//! Produces the "world in 2050" story and two tips for a lifestyle summary
//! and footprint. With a text generator configured, one generation attempt is
//! made under a timeout; any failure (timeout, HTTP error, rejected
//! credentials, unusable text) is logged and the canned narrative for the
//! footprint tier is returned instead. `narrate` never fails.

pub mod canned;
pub mod prompt;

use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use crate::estimator::Footprint;
use crate::providers::{ProviderError, TextGenerator};
use crate::summary::LifestyleSummary;

pub use canned::{canned_narrative, FootprintTier};

/// Where a narrative came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "tier")]
pub enum NarrativeSource {
    Generated,
    Canned(FootprintTier),
}

/// Story plus exactly two tips
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NarrativeResult {
    pub story: String,
    pub tips: [String; 2],
    pub source: NarrativeSource,
}

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Chooses between generated and canned narratives
#[derive(Clone)]
pub struct NarrativeSelector {
    generator: Option<Arc<dyn TextGenerator>>,
    model: String,
    timeout: Duration,
}

impl NarrativeSelector {
    /// Canned narratives only (no credential configured)
    pub fn canned_only() -> Self {
        Self {
            generator: None,
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_generator(generator: Arc<dyn TextGenerator>, model: &str, timeout: Duration) -> Self {
        Self {
            generator: Some(generator),
            model: model.to_string(),
            timeout,
        }
    }

    pub fn is_delegated(&self) -> bool {
        self.generator.is_some()
    }

    pub async fn narrate(&self, summary: &LifestyleSummary, footprint: Footprint) -> NarrativeResult {
        let Some(generator) = &self.generator else {
            tracing::debug!("No text generator configured; using canned narrative");
            return canned_narrative(summary, footprint);
        };

        match self.generate(generator.as_ref(), summary, footprint).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("Text generation failed, using canned narrative: {}", e);
                canned_narrative(summary, footprint)
            }
        }
    }

    async fn generate(
        &self,
        generator: &dyn TextGenerator,
        summary: &LifestyleSummary,
        footprint: Footprint,
    ) -> Result<NarrativeResult, ProviderError> {
        let request = prompt::build_request(&self.model, summary, footprint);

        let text = tokio::time::timeout(self.timeout, generator.generate(&request))
            .await
            .map_err(|_| ProviderError::Timeout(self.timeout))??;

        prompt::parse_generated(&text)
    }
}
