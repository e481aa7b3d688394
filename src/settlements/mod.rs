//! Settlement data pipeline
//!
//! Fetch, parse and cache of the exchange settlement snapshot. The manager
//! is the only entry point queries use; it hides whether the snapshot came
//! from the cache or a fresh scrape.

use crate::cache::{CacheConfig, CacheManager, Clock, SystemClock};
use crate::config::Settings;
use crate::errors::BotResult;
use crate::logger::{self, LogTag};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

pub mod fetcher;
pub mod parser;
pub mod types;

pub use fetcher::SettlementFetcher;
pub use types::Commodity;

/// Source of the raw settlement page markup
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self) -> BotResult<String>;
}

const SNAPSHOT_KEY: &str = "ajustes";

/// Cached access to the parsed settlement snapshot
pub struct SettlementManager {
    source: Box<dyn PageSource>,
    cache: CacheManager<&'static str, Vec<Commodity>>,
    refresh_lock: Mutex<()>,
}

impl SettlementManager {
    pub fn new(settings: &Settings) -> BotResult<Self> {
        let source = SettlementFetcher::new(settings)?;
        Ok(Self::with_parts(
            Box::new(source),
            CacheConfig::settlement_snapshot(settings.cache_ttl_secs),
            Arc::new(SystemClock),
        ))
    }

    pub fn with_parts(
        source: Box<dyn PageSource>,
        cache_config: CacheConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            source,
            cache: CacheManager::new(cache_config, clock),
            refresh_lock: Mutex::new(()),
        }
    }

    /// Get the settlement snapshot, refreshing it when the cached one has
    /// expired. Fetch and parse failures propagate uncached, so the next
    /// call tries again.
    pub async fn get_all_data(&self) -> BotResult<Vec<Commodity>> {
        if let Some(snapshot) = self.cache.get(&SNAPSHOT_KEY) {
            logger::debug(LogTag::Cache, "snapshot served from cache");
            return Ok(snapshot);
        }

        // Hold the refresh lock across check-fetch-store so a cold cache
        // triggers one upstream fetch, not one per concurrent command.
        let _guard = self.refresh_lock.lock().await;
        if let Some(snapshot) = self.cache.get(&SNAPSHOT_KEY) {
            return Ok(snapshot);
        }

        let body = self.source.fetch_page().await?;
        let snapshot = parser::parse_settlement_table(&body)?;
        self.cache.insert(SNAPSHOT_KEY, snapshot.clone());

        logger::info(
            LogTag::Cache,
            &format!("settlement snapshot refreshed: {} contracts", snapshot.len()),
        );
        Ok(snapshot)
    }
}

/// Exact-match lookup by acronym and due-date code
pub fn filter_by_code<'a>(
    snapshot: &'a [Commodity],
    acronym: &str,
    due_date: &str,
) -> Vec<&'a Commodity> {
    snapshot
        .iter()
        .filter(|c| c.acronym() == acronym && c.due_date == due_date)
        .collect()
}
