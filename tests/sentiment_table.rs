mod common;

use common::{ChartProbe, FakeHttp, RecordingStockView, Reply, config};
use futures::executor::block_on;
use serde_json::json;
use std::rc::Rc;
use voice_dashboard_wasm::application::use_cases::StockPanel;
use voice_dashboard_wasm::domain::market_data::{SentimentIndicator, SentimentTable};

fn load(reply: Reply) -> (Rc<FakeHttp>, Rc<RecordingStockView>) {
    let http = FakeHttp::new();
    http.on("/apps/reddit", reply);
    let view = RecordingStockView::with_inputs("", "30");
    let panel = StockPanel::new(http.clone(), &config(), ChartProbe::default(), view.clone());
    block_on(panel.load_sentiment());
    (http, view)
}

fn rows(count: usize) -> String {
    let labels = ["Bullish", "Bearish", "Neutral"];
    let entries: Vec<_> = (0..count)
        .map(|index| {
            json!({
                "ticker": format!("T{index}"),
                "no_of_comments": 100 - index,
                "sentiment": labels[index % labels.len()],
                "sentiment_score": 0.1
            })
        })
        .collect();
    serde_json::Value::Array(entries).to_string()
}

#[test]
fn requests_the_fixed_snapshot() {
    let (http, _) = load(Reply::ok("[]"));
    assert_eq!(
        http.requests(),
        vec!["https://fake.test/apps/reddit?date=2022-04-03".to_string()]
    );
}

#[test]
fn seven_rows_render_first_five_in_order() {
    let (_, view) = load(Reply::ok(rows(7)));

    let table = view.sentiment.borrow().clone();
    assert_eq!(table.row_count(), 5);
    let SentimentTable::Rows(rows) = table else {
        panic!("expected sentiment rows");
    };
    let tickers: Vec<&str> = rows.iter().map(|row| row.ticker.as_str()).collect();
    assert_eq!(tickers, ["T0", "T1", "T2", "T3", "T4"]);
    assert_eq!(rows[0].comments, "100");

    assert_eq!(rows[0].indicator, SentimentIndicator::Bullish);
    assert_eq!(rows[0].indicator.text(), "📈");
    assert_eq!(rows[0].indicator.css_class(), Some("sentiment-bullish"));
    assert_eq!(rows[1].indicator.text(), "📉");
    assert_eq!(rows[1].indicator.css_class(), Some("sentiment-bearish"));
    assert_eq!(rows[2].indicator.text(), "Neutral");
    assert_eq!(rows[2].indicator.css_class(), None);
    assert_eq!(rows[3].link(), "https://finance.yahoo.com/quote/T3");
    assert_eq!(*view.sentiment_error.borrow(), "");
}

#[test]
fn malformed_entries_still_fill_their_slot() {
    let body = json!([
        { "ticker": "GME", "no_of_comments": 120, "sentiment": "Bullish" },
        { "ticker": "AMC", "no_of_comments": 88, "sentiment": null },
        { "ticker": "TSLA", "no_of_comments": "many", "sentiment": "Bearish" },
        { "no_of_comments": 40, "sentiment": "Neutral" },
        { "ticker": "NIO", "no_of_comments": 31, "sentiment": 7 },
        { "ticker": "AAPL", "no_of_comments": 20, "sentiment": "Bullish" },
        { "ticker": "SPY", "no_of_comments": 10, "sentiment": "Bearish" }
    ])
    .to_string();

    let (_, view) = load(Reply::ok(body));

    let SentimentTable::Rows(rows) = view.sentiment.borrow().clone() else {
        panic!("expected sentiment rows");
    };
    let tickers: Vec<&str> = rows.iter().map(|row| row.ticker.as_str()).collect();
    assert_eq!(tickers, ["GME", "AMC", "TSLA", "", "NIO"]);
    assert_eq!(rows[1].indicator, SentimentIndicator::Raw(String::new()));
    assert_eq!(rows[2].comments, "many");
    assert_eq!(rows[4].indicator.text(), "7");
    assert_eq!(*view.sentiment_error.borrow(), "");
}

#[test]
fn empty_snapshot_renders_one_placeholder_row() {
    let (_, view) = load(Reply::ok("[]"));
    let table = view.sentiment.borrow().clone();
    assert_eq!(table, SentimentTable::Empty);
    assert_eq!(table.row_count(), 1);
    assert_eq!(SentimentTable::EMPTY_MESSAGE, "No stock data available.");
}

#[test]
fn non_array_payload_is_rejected() {
    let (_, view) = load(Reply::ok(r#"{"error":"date out of range"}"#));
    assert_eq!(
        *view.sentiment_error.borrow(),
        "Error loading Reddit stocks: Invalid data format received from Reddit API."
    );
    assert_eq!(*view.sentiment.borrow(), SentimentTable::Pending);
}

#[test]
fn failure_leaves_previous_table_untouched() {
    let http = FakeHttp::new();
    http.on("/apps/reddit", Reply::ok(rows(3)));
    let view = RecordingStockView::with_inputs("", "30");
    let panel = StockPanel::new(http.clone(), &config(), ChartProbe::default(), view.clone());
    block_on(panel.load_sentiment());
    let before = view.sentiment.borrow().clone();

    http.on("/apps/reddit", Reply::status(502));
    block_on(panel.load_sentiment());

    assert_eq!(*view.sentiment.borrow(), before);
    assert_eq!(
        *view.sentiment_error.borrow(),
        "Error loading Reddit stocks: HTTP error! status: 502"
    );
}
