//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use std::time::Duration;

use super::ai_api::AiGatewayConfig;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_SUMMARY_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_EXPERT_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// Generative language API key (`GEMINI_API_KEY`, falls back to `API_KEY`)
    pub api_key: Option<String>,

    /// Base URL of the generative language REST API
    pub api_base: String,

    /// Model used for chat summaries
    pub summary_model: String,

    /// Model used for expert answers
    pub expert_model: String,

    /// Upper bound for a single AI call
    pub timeout: Duration,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_base", &self.api_base)
            .field("summary_model", &self.summary_model)
            .field("expert_model", &self.expert_model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .ok();

        Self {
            api_key,
            api_base: std::env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            summary_model: std::env::var("SUMMARY_MODEL")
                .unwrap_or_else(|_| DEFAULT_SUMMARY_MODEL.to_string()),
            expert_model: std::env::var("EXPERT_MODEL")
                .unwrap_or_else(|_| DEFAULT_EXPERT_MODEL.to_string()),
            timeout: parse_timeout(std::env::var("AI_TIMEOUT_SECS").ok().as_deref()),
        }
    }

    /// Check if an API key is configured (empty counts as missing)
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Settings for the AI proxy router
    pub fn ai_gateway(&self) -> AiGatewayConfig {
        AiGatewayConfig {
            api_base: self.api_base.trim_end_matches('/').to_string(),
            api_key: self.api_key.clone().filter(|k| !k.is_empty()),
            summary_model: self.summary_model.clone(),
            expert_model: self.expert_model.clone(),
            timeout: self.timeout,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Parse `AI_TIMEOUT_SECS`; missing, unparsable or zero values use the default
fn parse_timeout(raw: Option<&str>) -> Duration {
    let secs = raw
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|s| *s > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>) -> Config {
        Config {
            api_key: api_key.map(str::to_string),
            api_base: format!("{}/", DEFAULT_API_BASE),
            summary_model: DEFAULT_SUMMARY_MODEL.to_string(),
            expert_model: DEFAULT_EXPERT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    #[test]
    fn test_has_api_key() {
        assert!(config(Some("key-123")).has_api_key());
        assert!(!config(None).has_api_key());
        assert!(!config(Some("")).has_api_key());
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout(None), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(parse_timeout(Some("12")), Duration::from_secs(12));
        assert_eq!(parse_timeout(Some(" 5 ")), Duration::from_secs(5));
        assert_eq!(parse_timeout(Some("0")), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(parse_timeout(Some("soon")), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_ai_gateway_trims_base_and_empty_key() {
        let gateway = config(Some("")).ai_gateway();
        assert_eq!(gateway.api_base, DEFAULT_API_BASE);
        assert!(gateway.api_key.is_none());
        assert_eq!(gateway.summary_model, DEFAULT_SUMMARY_MODEL);
        assert_eq!(gateway.expert_model, DEFAULT_EXPERT_MODEL);
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment, so only check invariants
        let config = Config::from_env();
        assert!(config.timeout > Duration::ZERO);
        assert!(!config.api_base.is_empty());
    }

    #[test]
    fn test_config_debug() {
        let debug_str = format!("{:?}", config(None));
        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("summary_model"));
        assert!(debug_str.contains("api_key: None"));
    }

    #[test]
    fn test_config_debug_redacts_api_key() {
        let config = config(Some("AIza-secret-key"));
        let debug_str = format!("{:?}", config);
        assert!(!debug_str.contains("AIza-secret-key"));
        assert!(debug_str.contains("<redacted>"));

        let gateway = format!("{:?}", config.ai_gateway());
        assert!(!gateway.contains("AIza-secret-key"));
        assert!(gateway.contains("<redacted>"));
    }
}
