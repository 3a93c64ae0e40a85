//! Quiz question catalogue
//!
//! Question wording and option labels for the quiz page. Option codes are the
//! values the lookup tables and summarizer understand.

use crate::answers::QuestionKey;

#[derive(Debug, Clone, Copy)]
pub struct QuizOption {
    pub label: &'static str,
    pub code: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub key: QuestionKey,
    pub text: &'static str,
    pub options: &'static [QuizOption],
}

impl Question {
    pub fn name(&self) -> &'static str {
        self.key.as_str()
    }
}

const fn opt(label: &'static str, code: &'static str) -> QuizOption {
    QuizOption { label, code }
}

pub static QUESTIONS: [Question; 10] = [
    Question {
        key: QuestionKey::MeatDairy,
        text: "How much do you spend on meat and dairy products per week (£)?",
        options: &[
            opt("Less than £20", "less_20"),
            opt("£20–50", "20_50"),
            opt("£50–100", "50_100"),
            opt("Over £100", "over_100"),
        ],
    },
    Question {
        key: QuestionKey::Transport,
        text: "What is your main mode of daily transport?",
        options: &[
            opt("Car (petrol/diesel)", "car_petrol"),
            opt("Car (electric/hybrid)", "car_electric"),
            opt("Public transport", "public"),
            opt("Walking or cycling", "walk_cycle"),
            opt("Work/study from home", "home"),
        ],
    },
    Question {
        key: QuestionKey::Flights,
        text: "How many flights do you take per year (return trips)?",
        options: &[
            opt("None", "none"),
            opt("1–2 short flights", "short"),
            opt("1–2 long flights", "long"),
            opt("3+ flights", "3plus"),
        ],
    },
    Question {
        key: QuestionKey::HomeEnergySource,
        text: "How is your home mainly powered or heated?",
        options: &[
            opt("Electricity from renewable sources", "renewable"),
            opt("Electricity from mixed grid", "mixed"),
            opt("Gas or oil heating", "gas_oil"),
            opt("Unsure", "unsure"),
        ],
    },
    Question {
        key: QuestionKey::HomeEfficiency,
        text: "How energy efficient is your home?",
        options: &[
            opt("Very efficient", "very"),
            opt("Some improvements made", "some"),
            opt("Not very efficient", "not_very"),
            opt("Not sure", "not_sure"),
        ],
    },
    Question {
        key: QuestionKey::Recycling,
        text: "How often do you recycle household waste (plastic, paper, glass, etc.)?",
        options: &[
            opt("Always", "always"),
            opt("Often", "often"),
            opt("Sometimes", "sometimes"),
            opt("Rarely", "rarely"),
        ],
    },
    Question {
        key: QuestionKey::SustainableShopping,
        text: "Do you regularly buy second-hand, repaired, or sustainably sourced products?",
        options: &[
            opt("Yes, most of the time", "most"),
            opt("Occasionally", "occasionally"),
            opt("Rarely", "rarely"),
            opt("Never", "never"),
        ],
    },
    Question {
        key: QuestionKey::CarbonAwareness,
        text: "How much do you think about your carbon footprint when making purchases or travel decisions?",
        options: &[
            opt("Always", "high"),
            opt("Sometimes", "medium"),
            opt("Rarely", "low"),
            opt("Never", "none"),
        ],
    },
    Question {
        key: QuestionKey::DeviceUsage,
        text: "Roughly how many hours per day do you use electronic devices (phone, laptop, TV, etc.)?",
        options: &[
            opt("Less than 2 hours", "less_2"),
            opt("2–5 hours", "2_5"),
            opt("5–8 hours", "5_8"),
            opt("8+ hours", "8plus"),
        ],
    },
    Question {
        key: QuestionKey::FoodWaste,
        text: "How much food ends up being thrown away each week?",
        options: &[
            opt("Almost none (less than 1 meal)", "almost_none"),
            opt("A little (1-2 meals)", "a_little"),
            opt("Some (3-5 meals)", "some"),
            opt("A lot (more than 5 meals)", "a_lot"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::ALL_TABLES;

    #[test]
    fn test_catalogue_follows_key_order() {
        let keys: Vec<_> = QUESTIONS.iter().map(|q| q.key).collect();
        assert_eq!(keys, QuestionKey::ALL.to_vec());
    }

    /// Every option code is known to its weight table, except the
    /// deliberately unweighted "never" shopping option.
    #[test]
    fn test_option_codes_match_tables() {
        for question in QUESTIONS.iter() {
            let Some(table) = ALL_TABLES.iter().find(|t| t.category == question.name()) else {
                assert_eq!(question.key, QuestionKey::CarbonAwareness);
                continue;
            };
            for option in question.options {
                let known = table.lookup(option.code).is_some();
                let exempt = question.key == QuestionKey::SustainableShopping && option.code == "never";
                assert!(known || exempt, "{}={} has no weight", question.name(), option.code);
            }
        }
    }
}
