//! Canned 2050 narratives
//!
//! Three fixed stories keyed by footprint tier. Used when no text generator
//! is configured, or when the generator failed.

use serde::{Deserialize, Serialize};

use super::{NarrativeResult, NarrativeSource};
use crate::estimator::Footprint;
use crate::summary::LifestyleSummary;

/// Upper bound (exclusive) of the thriving tier, kg CO2e
pub const THRIVING_BELOW_KG: f64 = 2000.0;
/// Upper bound (exclusive) of the mixed tier, kg CO2e
pub const MIXED_BELOW_KG: f64 = 4000.0;

/// Footprint tier for canned narratives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FootprintTier {
    /// < 2000 kg: sustainable world
    Thriving,
    /// 2000..4000 kg: progress with challenges
    Mixed,
    /// >= 4000 kg: degraded climate, adaptation
    Degraded,
}

impl FootprintTier {
    pub fn from_footprint(footprint: Footprint) -> Self {
        let kg = footprint.kg();
        if kg < THRIVING_BELOW_KG {
            FootprintTier::Thriving
        } else if kg < MIXED_BELOW_KG {
            FootprintTier::Mixed
        } else {
            FootprintTier::Degraded
        }
    }

    /// Friendly name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            FootprintTier::Thriving => "Thriving",
            FootprintTier::Mixed => "Mixed progress",
            FootprintTier::Degraded => "Adapting",
        }
    }

    /// The tier's two fixed tips
    pub fn tips(&self) -> [&'static str; 2] {
        match self {
            FootprintTier::Thriving => [
                "• Continue your sustainable habits and inspire others",
                "• Support community renewable energy projects",
            ],
            FootprintTier::Mixed => [
                "• Reduce meat consumption and food waste further",
                "• Switch to electric vehicles or public transport when possible",
            ],
            FootprintTier::Degraded => [
                "• Shift toward plant-based meals and reduce flights",
                "• Invest in home energy efficiency and support climate policies",
            ],
        }
    }

    fn story(&self, lifestyle: &str) -> String {
        match self {
            FootprintTier::Thriving => format!(
                "In 2050, the world is a vibrant, sustainable paradise. Because everyone adopted \
                 lifestyles like yours ({lifestyle}), cities have transformed into green havens. \
                 Vertical farms provide local food, renewable energy powers everything, and clean \
                 air is the norm. Wildlife thrives in urban parks and restored natural areas. \
                 People enjoy healthier lives with clean transportation and strong communities. \
                 Your sustainable choices created a future where humanity lives in harmony with nature."
            ),
            FootprintTier::Mixed => format!(
                "In 2050, the world shows both progress and challenges. With widespread adoption \
                 of lifestyles like yours ({lifestyle}), some regions thrive while others struggle. \
                 Renewable energy has expanded, but climate impacts still affect vulnerable areas. \
                 Cities have better public transport and green spaces, but occasional extreme \
                 weather reminds us of the work ahead. Your moderate footprint contributes to \
                 gradual positive change, showing that every action matters in building a \
                 sustainable future."
            ),
            FootprintTier::Degraded => format!(
                "In 2050, climate change has significantly reshaped our world. With many people \
                 living like you ({lifestyle}), rising temperatures and extreme weather are common. \
                 Coastal cities face flooding, agriculture struggles with changing seasons, and \
                 biodiversity loss continues. However, innovation thrives as communities adapt \
                 with green technology and sustainable practices. Your awareness of this future \
                 is the first step toward creating positive change and building resilience for \
                 tomorrow."
            ),
        }
    }
}

/// Select the canned narrative for a footprint
pub fn canned_narrative(summary: &LifestyleSummary, footprint: Footprint) -> NarrativeResult {
    let tier = FootprintTier::from_footprint(footprint);
    let [first, second] = tier.tips();

    NarrativeResult {
        story: tier.story(&summary.to_string()),
        tips: [first.to_string(), second.to_string()],
        source: NarrativeSource::Canned(tier),
    }
}
