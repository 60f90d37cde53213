use super::value_objects::{DayRange, PriceBar, Ticker};
use crate::domain::chart::LineChartSpec;
use crate::time_utils::format_day_label;

/// A closing-price series ready to be charted
#[derive(Debug, Clone, PartialEq)]
pub struct StockSeries {
    pub ticker: Ticker,
    pub requested: DayRange,
    /// `(date label, close)` in server order (ascending)
    pub points: Vec<(String, f64)>,
}

impl StockSeries {
    pub fn from_bars(ticker: Ticker, requested: DayRange, bars: &[PriceBar]) -> Self {
        let points = bars
            .iter()
            .map(|bar| (format_day_label(bar.timestamp_ms), bar.close))
            .collect();
        Self {
            ticker,
            requested,
            points,
        }
    }

    pub fn trading_days(&self) -> usize {
        self.points.len()
    }

    pub fn title(&self) -> String {
        format!(
            "{} Stock Price (Last {} days = Last {} Trading Days)",
            self.ticker,
            self.requested,
            self.trading_days()
        )
    }

    pub fn to_chart_spec(&self) -> LineChartSpec {
        LineChartSpec {
            title: self.title(),
            dataset_label: format!("{} Closing Price", self.ticker),
            labels: self.points.iter().map(|(label, _)| label.clone()).collect(),
            values: self.points.iter().map(|(_, close)| *close).collect(),
        }
    }
}

/// How a sentiment label is shown in the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentimentIndicator {
    Bullish,
    Bearish,
    /// Unrecognised label, shown as-is without styling
    Raw(String),
}

impl SentimentIndicator {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Bullish" => SentimentIndicator::Bullish,
            "Bearish" => SentimentIndicator::Bearish,
            other => SentimentIndicator::Raw(other.to_string()),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            SentimentIndicator::Bullish => "📈",
            SentimentIndicator::Bearish => "📉",
            SentimentIndicator::Raw(label) => label,
        }
    }

    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            SentimentIndicator::Bullish => Some("sentiment-bullish"),
            SentimentIndicator::Bearish => Some("sentiment-bearish"),
            SentimentIndicator::Raw(_) => None,
        }
    }
}

/// One rendered leaderboard row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentimentRow {
    pub ticker: String,
    pub comments: String,
    pub indicator: SentimentIndicator,
}

impl SentimentRow {
    pub fn link(&self) -> String {
        format!("https://finance.yahoo.com/quote/{}", self.ticker)
    }
}

/// Contents of the sentiment table body
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SentimentTable {
    /// Nothing fetched yet
    #[default]
    Pending,
    /// Single placeholder row
    Empty,
    Rows(Vec<SentimentRow>),
}

impl SentimentTable {
    pub const EMPTY_MESSAGE: &'static str = "No stock data available.";

    pub fn from_rows(rows: Vec<SentimentRow>) -> Self {
        if rows.is_empty() {
            SentimentTable::Empty
        } else {
            SentimentTable::Rows(rows)
        }
    }

    /// Number of `<tr>` elements this table renders
    pub fn row_count(&self) -> usize {
        match self {
            SentimentTable::Pending => 0,
            SentimentTable::Empty => 1,
            SentimentTable::Rows(rows) => rows.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_shows_requested_and_returned_days() {
        let series = StockSeries {
            ticker: Ticker::parse("msft").unwrap(),
            requested: DayRange::new(30).unwrap(),
            points: vec![("a".into(), 1.0), ("b".into(), 2.0)],
        };
        insta::assert_snapshot!(series.title(), @"MSFT Stock Price (Last 30 days = Last 2 Trading Days)");
        assert_eq!(series.to_chart_spec().dataset_label, "MSFT Closing Price");
    }

    #[test]
    fn unknown_sentiment_passes_through() {
        let neutral = SentimentIndicator::from_label("Neutral");
        assert_eq!(neutral.text(), "Neutral");
        assert_eq!(neutral.css_class(), None);
        assert_eq!(SentimentIndicator::from_label("Bullish").text(), "📈");
    }
}
