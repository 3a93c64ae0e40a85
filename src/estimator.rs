//! Footprint Estimator
//!
//! Weighted sum over the lookup tables. Additive contributions (diet,
//! transport, flights, home energy) are summed first, then scaled by the
//! recycling and shopping factors, then devices and food waste are added on
//! top unscaled. The result is rounded to one decimal place.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::answers::AnswerSet;
use crate::tables::*;

/// Estimated annual footprint in kg CO2e, rounded to 0.1
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Footprint(f64);

impl Footprint {
    /// Round to one decimal place and clamp to zero.
    ///
    /// Returns None for NaN or infinite input.
    pub fn new(kg: f64) -> Option<Self> {
        if !kg.is_finite() {
            return None;
        }
        Some(Footprint(round_1dp(kg.max(0.0))))
    }

    pub fn kg(&self) -> f64 {
        self.0
    }

    /// Tonnes, for display
    pub fn tonnes(&self) -> f64 {
        self.0 / 1000.0
    }
}

impl fmt::Display for Footprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

#[inline]
fn round_1dp(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Estimate the annual footprint for a completed answer set.
///
/// Never fails: unknown codes take their table's default weight.
pub fn estimate(answers: &AnswerSet) -> Footprint {
    let mut total = 0.0;
    total += MEAT_DAIRY.weight(&answers.meat_dairy);
    total += TRANSPORT.weight(&answers.transport);
    total += FLIGHTS.weight(&answers.flights);

    let base_home = HOME_ENERGY_SOURCE.weight(&answers.home_energy_source);
    total += base_home * HOME_EFFICIENCY.weight(&answers.home_efficiency);

    total *= RECYCLING.weight(&answers.recycling);
    total *= SUSTAINABLE_SHOPPING.weight(&answers.sustainable_shopping);

    total += DEVICE_USAGE.weight(&answers.device_usage) * KWH_TO_KG;
    total += FOOD_WASTE.weight(&answers.food_waste);

    // All table weights are finite and non-negative
    Footprint(round_1dp(total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::answers;
    use approx::assert_relative_eq;

    fn is_one_decimal(v: f64) -> bool {
        ((v * 10.0).round() - v * 10.0).abs() < 1e-6
    }

    #[test]
    fn test_best_choices() {
        let best = answers([
            "less_20", "walk_cycle", "none", "renewable", "very",
            "always", "most", "none", "less_2", "almost_none",
        ]);
        // (1800 + 200 + 0 + 500*0.7) * 0.85 * 0.9 + 300*0.233 + 100 = 1967.65
        assert_relative_eq!(estimate(&best).kg(), 1967.7, epsilon = 1e-9);
    }

    #[test]
    fn test_worst_choices() {
        let worst = answers([
            "over_100", "car_petrol", "3plus", "gas_oil", "not_very",
            "rarely", "rarely", "low", "8plus", "a_lot",
        ]);
        assert_relative_eq!(estimate(&worst).kg(), 13989.5, epsilon = 1e-9);
    }

    #[test]
    fn test_middle_choices() {
        let mid = answers([
            "less_20", "public", "none", "mixed", "some",
            "often", "occasionally", "medium", "2_5", "a_little",
        ]);
        assert_relative_eq!(estimate(&mid).kg(), 3586.2, epsilon = 1e-9);
    }

    #[test]
    fn test_unknown_codes_give_default_estimate() {
        let unknown = answers(["?"; 10]);
        // 3000 + 1000 + 0 + 1500 + 800*0.233 + 500
        assert_relative_eq!(estimate(&unknown).kg(), 6186.4, epsilon = 1e-9);
    }

    #[test]
    fn test_deterministic_and_rounded() {
        let a = answers([
            "50_100", "car_electric", "long", "unsure", "not_sure",
            "sometimes", "never", "high", "5_8", "some",
        ]);
        let first = estimate(&a);
        for _ in 0..10 {
            assert_eq!(estimate(&a), first);
        }
        assert!(first.kg() >= 0.0);
        assert!(is_one_decimal(first.kg()));
    }

    #[test]
    fn test_footprint_new() {
        assert_eq!(Footprint::new(1234.56).unwrap().kg(), 1234.6);
        assert_eq!(Footprint::new(-5.0).unwrap().kg(), 0.0);
        assert!(Footprint::new(f64::NAN).is_none());
        assert!(Footprint::new(f64::INFINITY).is_none());
        assert_eq!(Footprint::new(2000.0).unwrap().to_string(), "2000.0");
    }
}
