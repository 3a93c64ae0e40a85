//! Footprint Lookup Tables
//!
//! Maps each quiz choice code to an annual weight. Most tables are additive
//! kg CO2e; `HOME_EFFICIENCY`, `RECYCLING` and `SUSTAINABLE_SHOPPING` are
//! multiplicative factors, and `DEVICE_USAGE` is kWh (converted by the
//! estimator).
//!
//! Every table carries its own default. A code that is not in the table
//! (including a typo or an option added to the quiz later) resolves to that
//! default rather than an error, which keeps a malformed submission at an
//! average-case estimate.

/// How a table's weight is applied by the estimator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightKind {
    /// kg CO2e added to the running total
    AdditiveKg,
    /// Multiplier on the running total (or on the home energy base)
    Factor,
    /// kWh per year, converted to kg before adding
    Kwh,
}

/// A single category's code → weight table with its fallback
#[derive(Debug, Clone)]
pub struct WeightTable {
    pub category: &'static str,
    pub kind: WeightKind,
    pub entries: &'static [(&'static str, f64)],
    pub default: f64,
}

impl WeightTable {
    /// Weight for a choice code, or the table default for an unknown code.
    pub fn weight(&self, code: &str) -> f64 {
        self.lookup(code).unwrap_or(self.default)
    }

    /// Weight for a choice code if the table knows it.
    pub fn lookup(&self, code: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, w)| *w)
    }
}

// ============================================================================
// EMBEDDED WEIGHTS
// ============================================================================

/// Weekly meat and dairy spend
pub static MEAT_DAIRY: WeightTable = WeightTable {
    category: "meat_dairy",
    kind: WeightKind::AdditiveKg,
    entries: &[("less_20", 1800.0), ("20_50", 2400.0), ("50_100", 3200.0), ("over_100", 4000.0)],
    default: 3000.0,
};

/// Main mode of daily transport
pub static TRANSPORT: WeightTable = WeightTable {
    category: "transport",
    kind: WeightKind::AdditiveKg,
    entries: &[
        ("car_petrol", 2500.0),
        ("car_electric", 800.0),
        ("public", 800.0),
        ("walk_cycle", 200.0),
        ("home", 300.0),
    ],
    default: 1000.0,
};

/// Return flights per year
pub static FLIGHTS: WeightTable = WeightTable {
    category: "flights",
    kind: WeightKind::AdditiveKg,
    entries: &[("none", 0.0), ("short", 500.0), ("long", 2000.0), ("3plus", 3500.0)],
    default: 0.0,
};

/// Home power/heating source (base before efficiency)
pub static HOME_ENERGY_SOURCE: WeightTable = WeightTable {
    category: "home_energy_source",
    kind: WeightKind::AdditiveKg,
    entries: &[("renewable", 500.0), ("mixed", 1200.0), ("gas_oil", 2200.0), ("unsure", 1500.0)],
    default: 1500.0,
};

/// Applied to the home energy base only
pub static HOME_EFFICIENCY: WeightTable = WeightTable {
    category: "home_efficiency",
    kind: WeightKind::Factor,
    entries: &[("very", 0.7), ("some", 0.9), ("not_very", 1.2), ("not_sure", 1.0)],
    default: 1.0,
};

pub static RECYCLING: WeightTable = WeightTable {
    category: "recycling",
    kind: WeightKind::Factor,
    entries: &[("always", 0.85), ("often", 0.9), ("sometimes", 0.95), ("rarely", 1.0)],
    default: 1.0,
};

/// "never" is a quiz option but has no entry; it takes the 1.0 default
pub static SUSTAINABLE_SHOPPING: WeightTable = WeightTable {
    category: "sustainable_shopping",
    kind: WeightKind::Factor,
    entries: &[("most", 0.9), ("occasionally", 0.95), ("rarely", 1.0)],
    default: 1.0,
};

/// Daily device hours, as kWh per year
pub static DEVICE_USAGE: WeightTable = WeightTable {
    category: "device_usage",
    kind: WeightKind::Kwh,
    entries: &[("less_2", 300.0), ("2_5", 600.0), ("5_8", 1000.0), ("8plus", 1500.0)],
    default: 800.0,
};

pub static FOOD_WASTE: WeightTable = WeightTable {
    category: "food_waste",
    kind: WeightKind::AdditiveKg,
    entries: &[("almost_none", 100.0), ("a_little", 300.0), ("some", 600.0), ("a_lot", 1000.0)],
    default: 500.0,
};

/// Grid electricity conversion (kg CO2e per kWh)
pub const KWH_TO_KG: f64 = 0.233;

/// All tables in estimator order
pub static ALL_TABLES: [&WeightTable; 9] = [
    &MEAT_DAIRY,
    &TRANSPORT,
    &FLIGHTS,
    &HOME_ENERGY_SOURCE,
    &HOME_EFFICIENCY,
    &RECYCLING,
    &SUSTAINABLE_SHOPPING,
    &DEVICE_USAGE,
    &FOOD_WASTE,
];
