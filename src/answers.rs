//! Quiz answers
//!
//! The ten question keys, the validated `AnswerSet`, and extraction from a
//! raw form submission. Extraction is the only place that can fail: choice
//! codes themselves are never checked here, unknown codes are handled by the
//! lookup tables' defaults.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Question keys, in quiz order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKey {
    MeatDairy,
    Transport,
    Flights,
    HomeEnergySource,
    HomeEfficiency,
    Recycling,
    SustainableShopping,
    CarbonAwareness,
    DeviceUsage,
    FoodWaste,
}

impl QuestionKey {
    pub const ALL: [QuestionKey; 10] = [
        QuestionKey::MeatDairy,
        QuestionKey::Transport,
        QuestionKey::Flights,
        QuestionKey::HomeEnergySource,
        QuestionKey::HomeEfficiency,
        QuestionKey::Recycling,
        QuestionKey::SustainableShopping,
        QuestionKey::CarbonAwareness,
        QuestionKey::DeviceUsage,
        QuestionKey::FoodWaste,
    ];

    /// Form field name
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKey::MeatDairy => "meat_dairy",
            QuestionKey::Transport => "transport",
            QuestionKey::Flights => "flights",
            QuestionKey::HomeEnergySource => "home_energy_source",
            QuestionKey::HomeEfficiency => "home_efficiency",
            QuestionKey::Recycling => "recycling",
            QuestionKey::SustainableShopping => "sustainable_shopping",
            QuestionKey::CarbonAwareness => "carbon_awareness",
            QuestionKey::DeviceUsage => "device_usage",
            QuestionKey::FoodWaste => "food_waste",
        }
    }
}

impl fmt::Display for QuestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Submission was missing one or more answers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Missing fields: {}", field_list(.missing_fields))]
pub struct ValidationError {
    /// Missing keys in quiz order
    pub missing_fields: Vec<QuestionKey>,
}

fn field_list(fields: &[QuestionKey]) -> String {
    fields.iter().map(|k| k.as_str()).collect::<Vec<_>>().join(", ")
}

impl ValidationError {
    pub fn field_names(&self) -> Vec<&'static str> {
        self.missing_fields.iter().map(|k| k.as_str()).collect()
    }
}

/// A complete set of quiz answers (all ten keys present and non-empty)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    pub meat_dairy: String,
    pub transport: String,
    pub flights: String,
    pub home_energy_source: String,
    pub home_efficiency: String,
    pub recycling: String,
    pub sustainable_shopping: String,
    /// Collected but not used by the estimator or summarizer
    pub carbon_awareness: String,
    pub device_usage: String,
    pub food_waste: String,
}

impl AnswerSet {
    /// Extract and validate the ten answers from a raw form submission.
    ///
    /// Absent, empty and whitespace-only values are all reported as missing.
    /// Present values are stored as submitted, so a padded code such as
    /// `" less_20 "` is an unknown code. Extra form fields are ignored.
    pub fn from_form(raw: &FxHashMap<String, String>) -> Result<Self, ValidationError> {
        let mut values: [String; 10] = Default::default();
        let mut missing_fields = Vec::new();

        for (slot, key) in values.iter_mut().zip(QuestionKey::ALL) {
            match raw.get(key.as_str()) {
                Some(v) if !v.trim().is_empty() => *slot = v.clone(),
                _ => missing_fields.push(key),
            }
        }

        if !missing_fields.is_empty() {
            return Err(ValidationError { missing_fields });
        }

        let [meat_dairy, transport, flights, home_energy_source, home_efficiency, recycling, sustainable_shopping, carbon_awareness, device_usage, food_waste] =
            values;

        Ok(Self {
            meat_dairy,
            transport,
            flights,
            home_energy_source,
            home_efficiency,
            recycling,
            sustainable_shopping,
            carbon_awareness,
            device_usage,
            food_waste,
        })
    }

    /// Choice code for a question
    pub fn get(&self, key: QuestionKey) -> &str {
        match key {
            QuestionKey::MeatDairy => &self.meat_dairy,
            QuestionKey::Transport => &self.transport,
            QuestionKey::Flights => &self.flights,
            QuestionKey::HomeEnergySource => &self.home_energy_source,
            QuestionKey::HomeEfficiency => &self.home_efficiency,
            QuestionKey::Recycling => &self.recycling,
            QuestionKey::SustainableShopping => &self.sustainable_shopping,
            QuestionKey::CarbonAwareness => &self.carbon_awareness,
            QuestionKey::DeviceUsage => &self.device_usage,
            QuestionKey::FoodWaste => &self.food_waste,
        }
    }
}
