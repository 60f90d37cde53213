use chrono::{DateTime, NaiveDate, Utc};
use std::time::Duration;

/// Short local date for an epoch-millisecond timestamp.
///
/// The browser build uses the page's locale (`Date.toLocaleDateString`); native
/// builds use `3/14/2024` style. Falls back to the raw number when the timestamp
/// is out of range.
pub fn format_day_label(timestamp_ms: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(timestamp_ms) {
        Some(utc) => locale_date(utc),
        None => timestamp_ms.to_string(),
    }
}

#[cfg(target_arch = "wasm32")]
fn locale_date(utc: DateTime<Utc>) -> String {
    let locale = gloo::utils::window()
        .navigator()
        .language()
        .unwrap_or_else(|| "en-US".to_string());
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(utc.timestamp_millis() as f64));
    String::from(date.to_locale_date_string(&locale, &wasm_bindgen::JsValue::UNDEFINED))
}

#[cfg(not(target_arch = "wasm32"))]
fn locale_date(utc: DateTime<Utc>) -> String {
    utc.with_timezone(&chrono::Local).format("%-m/%-d/%Y").to_string()
}

/// Today's calendar date in UTC
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Wait `delay` before continuing. Only the browser build actually waits.
pub async fn settle(delay: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(delay).await;
    #[cfg(not(target_arch = "wasm32"))]
    let _ = delay;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn label_uses_local_calendar_date() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 14, 12, 0, 0).unwrap();
        let expected = ts.with_timezone(&Local).format("%-m/%-d/%Y").to_string();
        assert_eq!(format_day_label(ts.timestamp_millis()), expected);
    }

    #[test]
    fn out_of_range_timestamp_falls_back() {
        assert_eq!(format_day_label(i64::MAX), i64::MAX.to_string());
    }
}
