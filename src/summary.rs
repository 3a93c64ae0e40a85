//! Lifestyle Summarizer
//!
//! Turns an answer set into a few descriptive phrases for the narrative.
//! Phrases follow a fixed category order: diet, transport, flights, home
//! energy, food waste, recycling, shopping. Middle-of-the-road answers
//! contribute nothing. If no category produced a phrase, the summary is the
//! single phrase `AVERAGE_LIFESTYLE`, so the summary is never empty.

use serde::Serialize;
use std::fmt;

use crate::answers::AnswerSet;

pub const AVERAGE_LIFESTYLE: &str = "lives an average modern lifestyle";

/// Ordered lifestyle phrases
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LifestyleSummary {
    phrases: Vec<&'static str>,
}

impl LifestyleSummary {
    pub fn phrases(&self) -> &[&'static str] {
        &self.phrases
    }

    /// True when no category rule matched
    pub fn is_average(&self) -> bool {
        self.phrases == [AVERAGE_LIFESTYLE]
    }
}

impl fmt::Display for LifestyleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.phrases.join(", "))
    }
}

fn diet(code: &str) -> Option<&'static str> {
    match code {
        "less_20" => Some("mostly plant-based diet"),
        "over_100" => Some("high meat and dairy consumption"),
        _ => None,
    }
}

fn transport(code: &str) -> Option<&'static str> {
    match code {
        "walk_cycle" => Some("active transportation (walking/cycling)"),
        "car_petrol" => Some("petrol car usage"),
        "public" => Some("public transport usage"),
        _ => None,
    }
}

fn flights(code: &str) -> Option<&'static str> {
    match code {
        "3plus" => Some("frequent flying"),
        "none" => Some("no flying"),
        _ => None,
    }
}

fn home_energy(code: &str) -> Option<&'static str> {
    match code {
        "renewable" => Some("renewable home energy"),
        "gas_oil" => Some("fossil fuel home energy"),
        _ => None,
    }
}

fn food_waste(code: &str) -> Option<&'static str> {
    match code {
        "a_lot" => Some("high food waste"),
        "almost_none" => Some("minimal food waste"),
        _ => None,
    }
}

fn recycling(code: &str) -> Option<&'static str> {
    match code {
        "always" => Some("consistent recycling"),
        "rarely" => Some("infrequent recycling"),
        _ => None,
    }
}

fn shopping(code: &str) -> Option<&'static str> {
    match code {
        "most" => Some("mostly second-hand or sustainable shopping"),
        "never" => Some("no second-hand or sustainable shopping"),
        _ => None,
    }
}

/// Summarize notable lifestyle traits.
pub fn summarize(answers: &AnswerSet) -> LifestyleSummary {
    let mut phrases: Vec<&'static str> = [
        diet(&answers.meat_dairy),
        transport(&answers.transport),
        flights(&answers.flights),
        home_energy(&answers.home_energy_source),
        food_waste(&answers.food_waste),
        recycling(&answers.recycling),
        shopping(&answers.sustainable_shopping),
    ]
    .into_iter()
    .flatten()
    .collect();

    if phrases.is_empty() {
        phrases.push(AVERAGE_LIFESTYLE);
    }

    LifestyleSummary { phrases }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{answers, best_answers};

    #[test]
    fn test_best_answers_in_category_order() {
        let summary = summarize(&best_answers());
        assert_eq!(
            summary.to_string(),
            "mostly plant-based diet, active transportation (walking/cycling), no flying, \
             renewable home energy, minimal food waste, consistent recycling, \
             mostly second-hand or sustainable shopping"
        );
        assert!(!summary.is_average());
    }

    #[test]
    fn test_middle_answers_fall_back_to_average() {
        let mid = answers([
            "20_50", "car_electric", "short", "mixed", "some",
            "often", "occasionally", "medium", "2_5", "some",
        ]);
        let summary = summarize(&mid);
        assert_eq!(summary.phrases(), &[AVERAGE_LIFESTYLE]);
        assert!(summary.is_average());
    }

    #[test]
    fn test_unknown_codes_contribute_nothing() {
        let a = answers(["?", "?", "3plus", "?", "?", "rarely", "?", "?", "?", "a_lot"]);
        assert_eq!(
            summarize(&a).phrases(),
            &["frequent flying", "high food waste", "infrequent recycling"]
        );
    }

    #[test]
    fn test_ignores_awareness_and_devices() {
        let base = best_answers();
        let mut other = base.clone();
        other.carbon_awareness = "none".to_string();
        other.device_usage = "8plus".to_string();
        other.home_efficiency = "not_very".to_string();
        assert_eq!(summarize(&base), summarize(&other));
    }
}
