use super::{HttpClient, endpoint};
use crate::domain::errors::{AppError, AppResult, NetworkError};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{DateWindow, PriceBar, Ticker};
use crate::infrastructure::config::AppConfig;
use crate::log_info;
use serde::Deserialize;
use url::Url;

#[derive(Debug, Deserialize)]
struct AggregatesResponse {
    #[serde(default)]
    results: Option<Vec<PriceBar>>,
}

/// Daily aggregates from the Polygon REST API
pub struct PolygonClient<H> {
    http: H,
    base_url: String,
    api_key: String,
}

impl<H: HttpClient> PolygonClient<H> {
    pub fn new(http: H, config: &AppConfig) -> Self {
        Self {
            http,
            base_url: config.polygon_base_url.clone(),
            api_key: config.polygon_api_key.clone(),
        }
    }

    pub fn daily_bars_url(&self, ticker: &Ticker, window: &DateWindow) -> AppResult<Url> {
        let from = window.from_iso();
        let to = window.to_iso();
        endpoint(
            &self.base_url,
            &["v2", "aggs", "ticker", ticker.value(), "range", "1", "day", from.as_str(), to.as_str()],
            &[
                ("adjusted", "true"),
                ("sort", "asc"),
                ("limit", "120"),
                ("apiKey", self.api_key.as_str()),
            ],
        )
    }

    /// Bars for `ticker` across `window`, oldest first. An empty result is an error.
    pub async fn daily_bars(&self, ticker: &Ticker, window: &DateWindow) -> AppResult<Vec<PriceBar>> {
        let url = self.daily_bars_url(ticker, window)?;
        let response = self.http.get(&url).await?;

        match response.status {
            404 => return Err(NetworkError::TickerNotFound(ticker.to_string()).into()),
            429 => return Err(NetworkError::RateLimited.into()),
            _ => {}
        }
        let payload: AggregatesResponse = response.ensure_ok()?.json()?;

        let bars = payload.results.unwrap_or_default();
        if bars.is_empty() {
            return Err(AppError::Payload(format!(
                "No data found for ticker \"{ticker}\" in the selected range."
            )));
        }

        log_info!(
            LogComponent::Infrastructure("Polygon"),
            "📈 Loaded {} daily bars for {ticker}",
            bars.len()
        );
        Ok(bars)
    }
}
