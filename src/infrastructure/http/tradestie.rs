use super::{HttpClient, endpoint};
use crate::domain::errors::{AppError, AppResult};
use crate::domain::market_data::{SentimentIndicator, SentimentRow};
use crate::infrastructure::config::AppConfig;
use chrono::NaiveDate;
use serde_json::Value;
use url::Url;

/// Text a table cell shows for a loosely typed field. Absent and `null` read as empty.
fn cell_text(entry: &Value, field: &str) -> String {
    match entry.get(field) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// Every entry becomes a row, whatever its field types
fn sentiment_row(entry: &Value) -> SentimentRow {
    SentimentRow {
        ticker: cell_text(entry, "ticker"),
        comments: cell_text(entry, "no_of_comments"),
        indicator: SentimentIndicator::from_label(&cell_text(entry, "sentiment")),
    }
}

/// Reddit WallStreetBets sentiment snapshots
pub struct TradestieClient<H> {
    http: H,
    base_url: String,
    date: NaiveDate,
}

impl<H: HttpClient> TradestieClient<H> {
    pub fn new(http: H, config: &AppConfig) -> Self {
        Self {
            http,
            base_url: config.tradestie_base_url.clone(),
            date: config.sentiment_date,
        }
    }

    pub fn snapshot_url(&self) -> AppResult<Url> {
        let date = self.date.format("%Y-%m-%d").to_string();
        endpoint(&self.base_url, &["apps", "reddit"], &[("date", date.as_str())])
    }

    /// First `limit` rows of the snapshot, in server order
    pub async fn top_mentions(&self, limit: usize) -> AppResult<Vec<SentimentRow>> {
        let url = self.snapshot_url()?;
        let payload: Value = self.http.get(&url).await?.ensure_ok()?.json()?;
        let entries = payload.as_array().ok_or_else(|| {
            AppError::Payload("Invalid data format received from Reddit API.".to_string())
        })?;

        let rows = entries.iter().take(limit).map(sentiment_row).collect();
        Ok(rows)
    }
}
