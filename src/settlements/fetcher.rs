//! Settlement page fetcher
//!
//! One GET against the exchange page, bounded by the configured timeout.
//! No retries here; the caller decides what a failed refresh means.

use crate::config::Settings;
use crate::errors::{BotError, BotResult};
use crate::logger::{self, LogTag};
use crate::settlements::PageSource;
use reqwest::Client;
use std::time::Duration;

/// HTTP source for the settlement page
pub struct SettlementFetcher {
    client: Client,
    url: String,
}

impl SettlementFetcher {
    pub fn new(settings: &Settings) -> BotResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.http_timeout_secs))
            .user_agent("AjusteBot/0.1")
            .build()
            .map_err(|e| BotError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: settings.source_url.clone(),
        })
    }
}

#[async_trait::async_trait]
impl PageSource for SettlementFetcher {
    async fn fetch_page(&self) -> BotResult<String> {
        logger::debug(LogTag::Fetch, &format!("GET {}", self.url));

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| BotError::Network(format!("settlement page request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(BotError::Http(format!(
                "settlement page returned status: {}",
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| BotError::Network(format!("failed to read settlement page body: {}", e)))
    }
}
