//! Process configuration
//!
//! All settings come from the environment (loaded through dotenv in main).
//! The bot token is required and its absence fails startup; everything else
//! has a default matching the live B3 page and the original cache window.

use crate::errors::{BotError, BotResult};

/// Settlement page for the B3/BM&F trading session adjustments
pub const DEFAULT_AJUSTES_URL: &str =
    "http://www2.bmf.com.br/pages/portal/bmfbovespa/lumis/lum-ajustes-do-pregao-ptBR.asp";

const DEFAULT_CACHE_TTL_SECS: u64 = 6000;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Runtime settings resolved once at startup
#[derive(Debug, Clone)]
pub struct Settings {
    /// Telegram bot token from @BotFather
    pub bot_token: String,
    /// Settlement page endpoint
    pub source_url: String,
    /// Snapshot time-to-live in seconds
    pub cache_ttl_secs: u64,
    /// Upstream fetch timeout in seconds
    pub http_timeout_secs: u64,
}

impl Settings {
    /// Resolve settings from the process environment
    pub fn from_env() -> BotResult<Self> {
        let bot_token = std::env::var("API_KEY").map_err(|_| {
            BotError::Config(
                "API_KEY is not set; export the Telegram bot token before starting".to_string(),
            )
        })?;

        if bot_token.trim().is_empty() {
            return Err(BotError::Config("API_KEY is empty".to_string()));
        }

        let source_url =
            std::env::var("AJUSTES_URL").unwrap_or_else(|_| DEFAULT_AJUSTES_URL.to_string());

        Ok(Self {
            bot_token,
            source_url,
            cache_ttl_secs: env_u64("CACHE_TTL_SECS", DEFAULT_CACHE_TTL_SECS)?,
            http_timeout_secs: env_u64("HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?,
        })
    }
}

fn env_u64(key: &str, default: u64) -> BotResult<u64> {
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|_| {
            BotError::Config(format!("{} must be a positive integer, got '{}'", key, raw))
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment variables are process-global, so every scenario runs
    // inside this single test to keep them from racing each other.
    #[test]
    fn test_settings_from_env() {
        std::env::remove_var("API_KEY");
        std::env::remove_var("AJUSTES_URL");
        std::env::remove_var("CACHE_TTL_SECS");
        std::env::remove_var("HTTP_TIMEOUT_SECS");

        // Missing token fails fast
        let err = Settings::from_env().unwrap_err();
        assert!(matches!(err, BotError::Config(_)));

        // Token alone gets defaults for the rest
        std::env::set_var("API_KEY", "123456:test-token");
        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.source_url, DEFAULT_AJUSTES_URL);
        assert_eq!(settings.cache_ttl_secs, 6000);
        assert_eq!(settings.http_timeout_secs, 10);

        // Overrides are honored
        std::env::set_var("AJUSTES_URL", "http://localhost:8080/ajustes");
        std::env::set_var("CACHE_TTL_SECS", "30");
        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.source_url, "http://localhost:8080/ajustes");
        assert_eq!(settings.cache_ttl_secs, 30);

        // Garbage numeric override is a configuration error
        std::env::set_var("CACHE_TTL_SECS", "soon");
        let err = Settings::from_env().unwrap_err();
        assert!(matches!(err, BotError::Config(_)));

        std::env::remove_var("API_KEY");
        std::env::remove_var("AJUSTES_URL");
        std::env::remove_var("CACHE_TTL_SECS");
    }
}
