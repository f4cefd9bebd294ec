use crate::core::cache::Cache;
use crate::core::price::{PriceRecord, PriceSource, RawPriceRecord, normalize_prices};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, instrument, warn};

#[derive(Debug, Error)]
enum FeedError {
    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP error: {0}")]
    Status(reqwest::StatusCode),
    #[error("Failed to parse price feed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Loads the price list from a remote JSON feed.
///
/// Successful loads are memoized in `cache` under the feed URL; failures
/// degrade to an empty list and are not cached.
pub struct HttpPriceFeed {
    url: String,
    client: reqwest::Client,
    cache: Arc<Cache<String, Vec<PriceRecord>>>,
}

impl HttpPriceFeed {
    pub fn new(url: &str, cache: Arc<Cache<String, Vec<PriceRecord>>>) -> Self {
        HttpPriceFeed {
            url: url.to_string(),
            client: reqwest::Client::new(),
            cache,
        }
    }

    /// Drops the memoized list for this feed and loads it again.
    pub async fn refresh(&self) -> Vec<PriceRecord> {
        self.cache.invalidate(&self.url).await;
        self.load_prices().await
    }

    async fn fetch(&self) -> Result<Vec<RawPriceRecord>, FeedError> {
        debug!("Requesting price feed from {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::USER_AGENT, "swapcalc/0.1")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FeedError::Status(response.status()));
        }

        let text = response.text().await?;
        let values: Vec<serde_json::Value> = serde_json::from_str(&text)?;
        Ok(values.into_iter().filter_map(decode_record).collect())
    }
}

/// Decodes one feed entry, skipping it when it does not match the record shape.
fn decode_record(value: serde_json::Value) -> Option<RawPriceRecord> {
    match serde_json::from_value(value) {
        Ok(record) => Some(record),
        Err(e) => {
            warn!(error = %e, "Skipping malformed price record");
            None
        }
    }
}

#[async_trait]
impl PriceSource for HttpPriceFeed {
    #[instrument(name = "PriceFeedLoad", skip(self), fields(url = %self.url))]
    async fn load_prices(&self) -> Vec<PriceRecord> {
        if let Some(cached) = self.cache.get(&self.url).await {
            return cached;
        }

        match self.fetch().await {
            Ok(raw) => {
                let received = raw.len();
                let prices = normalize_prices(raw);
                debug!(received, kept = prices.len(), "Loaded price feed");
                self.cache.put(self.url.clone(), prices.clone()).await;
                prices
            }
            Err(e) => {
                warn!(error = %e, "Price feed unavailable");
                Vec::new()
            }
        }
    }
}
