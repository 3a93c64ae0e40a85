//! Prompt construction and response partitioning for generated narratives
//!
//! Partitioning is a heuristic. Bullet lines (`-` or `•`) are tips. Lines
//! mentioning a tip, suggestion or action only fill tip slots the bullets
//! left open; otherwise they stay in the story. Header lines ending in `:`
//! are dropped. The selector only relies on it yielding a non-empty story.

use super::{NarrativeResult, NarrativeSource};
use crate::estimator::Footprint;
use crate::providers::{ChatMessage, ChatRequest, ProviderError};
use crate::summary::LifestyleSummary;

pub const MAX_TOKENS: u32 = 400;
pub const TEMPERATURE: f32 = 0.8;

const SYSTEM_PROMPT: &str =
    "You are a visionary climate storyteller creating realistic but hopeful visions of the future.";

const TIP_KEYWORDS: [&str; 3] = ["tip", "suggestion", "action"];

/// Used when the generated text contained fewer than two tip lines
pub const GENERIC_TIPS: [&str; 2] = [
    "• Consider reducing meat consumption and food waste",
    "• Explore renewable energy and public transport options",
];

/// Build the chat request for a lifestyle and footprint
pub fn build_request(model: &str, summary: &LifestyleSummary, footprint: Footprint) -> ChatRequest {
    let prompt = format!(
        "Imagine the world in 2050 if everyone lived with this lifestyle: {summary}.\n\
         The annual carbon footprint is {footprint} kg CO2 per person.\n\
         \n\
         Write a vivid 120-150 word description of what the world looks like in 2050 under these conditions.\n\
         Consider:\n\
         - Climate and environment\n\
         - Cities and infrastructure\n\
         - Daily life and society\n\
         - Technology and energy\n\
         - Nature and wildlife\n\
         \n\
         Then provide exactly 2 specific, actionable tips to improve sustainability, \
         each on its own line starting with \"- \".\n\
         \n\
         Make it engaging and thought-provoking, showing both challenges and opportunities."
    );

    ChatRequest {
        model: model.to_string(),
        messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(prompt)],
        max_tokens: MAX_TOKENS,
        temperature: TEMPERATURE,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Header,
    Bullet,
    Keyword,
    Story,
}

fn classify(line: &str) -> LineKind {
    if line.starts_with('-') || line.starts_with('•') {
        return LineKind::Bullet;
    }
    if line.ends_with(':') {
        return LineKind::Header;
    }
    let lower = line.to_lowercase();
    if TIP_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        LineKind::Keyword
    } else {
        LineKind::Story
    }
}

/// Split generated text into story and exactly two tips.
///
/// Extra tip lines are dropped; missing ones are taken from `GENERIC_TIPS`.
/// Fails only when no story text remains.
pub fn parse_generated(text: &str) -> Result<NarrativeResult, ProviderError> {
    let lines: Vec<(&str, LineKind)> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| (l, classify(l)))
        .collect();

    let bullet_count = lines.iter().filter(|(_, kind)| *kind == LineKind::Bullet).count();
    let mut keyword_slots = 2usize.saturating_sub(bullet_count);

    let mut story_lines = Vec::new();
    let mut bullet_tips = Vec::new();
    let mut keyword_tips = Vec::new();

    for (line, kind) in lines {
        match kind {
            LineKind::Header => {}
            LineKind::Bullet => bullet_tips.push(line.to_string()),
            LineKind::Keyword if keyword_slots > 0 => {
                keyword_slots -= 1;
                keyword_tips.push(line.to_string());
            }
            LineKind::Keyword | LineKind::Story => story_lines.push(line),
        }
    }

    let story = story_lines.join(" ");
    if story.is_empty() {
        return Err(ProviderError::Malformed("generated text has no story lines".to_string()));
    }

    let mut tips = bullet_tips.into_iter().chain(keyword_tips);
    let first = tips.next().unwrap_or_else(|| GENERIC_TIPS[0].to_string());
    let second = tips.next().unwrap_or_else(|| GENERIC_TIPS[1].to_string());

    Ok(NarrativeResult {
        story,
        tips: [first, second],
        source: NarrativeSource::Generated,
    })
}
