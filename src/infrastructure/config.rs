use crate::domain::market_data::DayRange;
use chrono::NaiveDate;
use std::time::Duration;

const QUOTES_BASE_URL: &str = "https://zenquotes.io/api";
const POLYGON_BASE_URL: &str = "https://api.polygon.io";
const TRADESTIE_BASE_URL: &str = "https://tradestie.com/api/v1";
const DOG_CEO_BASE_URL: &str = "https://dog.ceo/api";
const DOG_API_BASE_URL: &str = "https://dogapi.dog/api/v2";

/// Meta tag that can carry the price API key at runtime
pub const API_KEY_META: &str = "polygon-api-key";

/// Endpoints, keys and tunables for every page
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub quotes_base_url: String,
    pub polygon_base_url: String,
    pub polygon_api_key: String,
    pub tradestie_base_url: String,
    pub sentiment_date: NaiveDate,
    pub sentiment_rows: usize,
    pub dog_ceo_base_url: String,
    pub dog_api_base_url: String,
    pub carousel_images: usize,
    pub slider_settle: Duration,
    pub voice_lookup_range: DayRange,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            quotes_base_url: QUOTES_BASE_URL.to_string(),
            polygon_base_url: POLYGON_BASE_URL.to_string(),
            polygon_api_key: option_env!("POLYGON_API_KEY").unwrap_or_default().to_string(),
            tradestie_base_url: TRADESTIE_BASE_URL.to_string(),
            sentiment_date: NaiveDate::from_ymd_opt(2022, 4, 3).unwrap_or_default(),
            sentiment_rows: 5,
            dog_ceo_base_url: DOG_CEO_BASE_URL.to_string(),
            dog_api_base_url: DOG_API_BASE_URL.to_string(),
            carousel_images: 10,
            slider_settle: Duration::from_millis(150),
            voice_lookup_range: DayRange::VOICE_DEFAULT,
        }
    }
}

impl AppConfig {
    pub fn with_polygon_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.polygon_api_key = api_key.into();
        self
    }

    pub fn with_sentiment_date(mut self, date: NaiveDate) -> Self {
        self.sentiment_date = date;
        self
    }

    pub fn with_carousel_images(mut self, count: usize) -> Self {
        self.carousel_images = count.max(1);
        self
    }

    pub fn with_slider_settle(mut self, delay: Duration) -> Self {
        self.slider_settle = delay;
        self
    }

    /// Point every upstream at one base URL (local mocks, proxies)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.quotes_base_url = base_url.clone();
        self.polygon_base_url = base_url.clone();
        self.tradestie_base_url = base_url.clone();
        self.dog_ceo_base_url = base_url.clone();
        self.dog_api_base_url = base_url;
        self
    }

    /// Defaults, with the API key overridden by `<meta name="polygon-api-key">` when present
    pub fn from_document() -> Self {
        let config = Self::default();
        let key = gloo::utils::document()
            .query_selector(&format!("meta[name=\"{API_KEY_META}\"]"))
            .ok()
            .flatten()
            .and_then(|meta| meta.get_attribute("content"))
            .filter(|key| !key.trim().is_empty());
        match key {
            Some(key) => config.with_polygon_api_key(key.trim()),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_upstreams() {
        let config = AppConfig::default();
        assert_eq!(config.sentiment_date.to_string(), "2022-04-03");
        assert_eq!(config.sentiment_rows, 5);
        assert_eq!(config.carousel_images, 10);
        assert_eq!(config.slider_settle, Duration::from_millis(150));
        assert_eq!(config.voice_lookup_range.days(), 30);
    }

    #[test]
    fn base_url_override_applies_everywhere() {
        let config = AppConfig::default().with_base_url("http://localhost:9000");
        assert_eq!(config.polygon_base_url, "http://localhost:9000");
        assert_eq!(config.dog_api_base_url, "http://localhost:9000");
    }
}
