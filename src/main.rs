use ajustebot::config::Settings;
use ajustebot::logger::{self, LogTag};
use ajustebot::settlements::SettlementManager;
use ajustebot::telegram;
use std::sync::Arc;

/// Main entry point for AjusteBot
///
/// Loads settings from the environment, wires the settlement pipeline and
/// hands control to the Telegram dispatcher until shutdown.
#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    logger::init();

    logger::info(LogTag::System, "🚀 AjusteBot starting up...");

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            logger::error(LogTag::Config, &e.to_string());
            std::process::exit(1);
        }
    };

    logger::info(
        LogTag::Config,
        &format!(
            "Settlement source: {} (TTL {}s, timeout {}s)",
            settings.source_url, settings.cache_ttl_secs, settings.http_timeout_secs
        ),
    );

    let manager = match SettlementManager::new(&settings) {
        Ok(manager) => Arc::new(manager),
        Err(e) => {
            logger::error(LogTag::Config, &e.to_string());
            std::process::exit(1);
        }
    };

    if let Err(e) = telegram::bot::run(&settings, manager).await {
        logger::error(LogTag::System, &e.to_string());
        std::process::exit(1);
    }
}
