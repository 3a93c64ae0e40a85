//! Process configuration
//!
//! Read once at startup from environment variables (after `.env` loading in
//! the binary). Missing credentials are a supported configuration: without
//! `OPENAI_API_KEY` narratives are canned, without `CARBON_API_KEY` and
//! `CARBON_API_URL` the footprint is always computed locally.

use std::time::Duration;

use crate::narrative;
use crate::providers::{carbon_api, openai};

#[derive(Debug, Clone, PartialEq)]
pub struct TextGenerationConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarbonApiConfig {
    pub api_key: String,
    pub url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub port: u16,
    pub static_dir: String,
    pub text_generation: Option<TextGenerationConfig>,
    pub carbon_api: Option<CarbonApiConfig>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let secs = |key: &str, default: Duration| {
            get(key)
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|s| *s > 0)
                .map(Duration::from_secs)
                .unwrap_or(default)
        };

        let port = get("PORT").and_then(|p| p.parse().ok()).unwrap_or(3000);
        let static_dir = get("STATIC_DIR").unwrap_or_else(|| "static".to_string());

        let text_generation = get("OPENAI_API_KEY").map(|api_key| TextGenerationConfig {
            api_key,
            base_url: get("OPENAI_BASE_URL").unwrap_or_else(|| openai::DEFAULT_BASE_URL.to_string()),
            model: get("OPENAI_MODEL").unwrap_or_else(|| narrative::DEFAULT_MODEL.to_string()),
            timeout: secs("OPENAI_TIMEOUT_SECS", narrative::DEFAULT_TIMEOUT),
        });

        let carbon_api = match (get("CARBON_API_KEY"), get("CARBON_API_URL")) {
            (Some(api_key), Some(url)) => Some(CarbonApiConfig {
                api_key,
                url,
                timeout: secs("CARBON_API_TIMEOUT_SECS", carbon_api::DEFAULT_TIMEOUT),
            }),
            (Some(_), None) => {
                tracing::warn!("CARBON_API_KEY is set but CARBON_API_URL is not; carbon API disabled");
                None
            }
            _ => None,
        };

        Self {
            port,
            static_dir,
            text_generation,
            carbon_api,
        }
    }
}
