//! Shared fixtures for unit tests

use crate::answers::AnswerSet;

/// Build an answer set from codes in quiz order
pub fn answers(codes: [&str; 10]) -> AnswerSet {
    AnswerSet {
        meat_dairy: codes[0].to_string(),
        transport: codes[1].to_string(),
        flights: codes[2].to_string(),
        home_energy_source: codes[3].to_string(),
        home_efficiency: codes[4].to_string(),
        recycling: codes[5].to_string(),
        sustainable_shopping: codes[6].to_string(),
        carbon_awareness: codes[7].to_string(),
        device_usage: codes[8].to_string(),
        food_waste: codes[9].to_string(),
    }
}

pub fn best_answers() -> AnswerSet {
    answers([
        "less_20", "walk_cycle", "none", "renewable", "very",
        "always", "most", "high", "less_2", "almost_none",
    ])
}
