use crate::domain::errors::{AppError, AppResult};
use chrono::{Days, NaiveDate};
use derive_more::{Deref, Display};
use serde::Deserialize;

/// Ticker symbol: trimmed, uppercased, never empty
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display)]
#[display(fmt = "{}", _0)]
pub struct Ticker(String);

impl Ticker {
    pub fn parse(raw: &str) -> AppResult<Self> {
        let symbol = raw.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(AppError::Validation("Please enter a stock ticker.".to_string()));
        }
        Ok(Self(symbol))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Requested look-back in calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(fmt = "{}", _0)]
pub struct DayRange(u32);

impl DayRange {
    pub const VOICE_DEFAULT: DayRange = DayRange(30);

    /// Options offered by the range selector
    pub const CHOICES: [u32; 4] = [7, 30, 90, 180];

    pub fn new(days: u32) -> AppResult<Self> {
        if days == 0 {
            return Err(AppError::Validation(
                "Please select a valid time range.".to_string(),
            ));
        }
        Ok(Self(days))
    }

    pub fn parse(raw: &str) -> AppResult<Self> {
        raw.trim()
            .parse::<u32>()
            .map_err(|_| AppError::Validation("Please select a valid time range.".to_string()))
            .and_then(Self::new)
    }

    pub fn days(&self) -> u32 {
        self.0
    }
}

/// Closed calendar-day window `[from, to]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateWindow {
    /// Window ending today and reaching back `range` calendar days
    pub fn ending(today: NaiveDate, range: DayRange) -> AppResult<Self> {
        let from = today
            .checked_sub_days(Days::new(u64::from(range.days())))
            .ok_or_else(|| AppError::Validation("Time range reaches too far back.".to_string()))?;
        Ok(Self { from, to: today })
    }

    pub fn from_iso(&self) -> String {
        self.from.format("%Y-%m-%d").to_string()
    }

    pub fn to_iso(&self) -> String {
        self.to.format("%Y-%m-%d").to_string()
    }
}

/// One daily aggregate bar; only the fields the chart uses
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PriceBar {
    /// Bar start, epoch milliseconds
    #[serde(rename = "t")]
    pub timestamp_ms: i64,
    #[serde(rename = "c")]
    pub close: f64,
}
