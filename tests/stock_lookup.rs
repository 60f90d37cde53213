mod common;

use chrono::NaiveDate;
use common::{ChartProbe, FakeHttp, RecordingStockView, Reply, config, polygon_body};
use futures::executor::block_on;
use std::rc::Rc;
use voice_dashboard_wasm::application::use_cases::StockPanel;

type Panel = StockPanel<Rc<FakeHttp>, ChartProbe, RecordingStockView>;

fn panel(http: &Rc<FakeHttp>, ticker: &str, range: &str) -> (Panel, Rc<RecordingStockView>, ChartProbe) {
    let view = RecordingStockView::with_inputs(ticker, range);
    let chart = ChartProbe::default();
    let panel = StockPanel::new(http.clone(), &config(), chart.clone(), view.clone());
    (panel, view, chart)
}

fn march_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

#[test]
fn empty_ticker_never_hits_the_network() {
    let http = FakeHttp::new();
    let (panel, view, chart) = panel(&http, "   ", "30");

    block_on(panel.look_up_at(march_first()));

    assert_eq!(view.chart_error(), "Please enter a stock ticker.");
    assert_eq!(http.request_count(), 0);
    assert_eq!(chart.live(), 0);
}

#[test]
fn unparseable_range_is_rejected_before_fetching() {
    let http = FakeHttp::new();
    let (panel, view, _) = panel(&http, "AAPL", "thirty");

    block_on(panel.look_up_at(march_first()));

    assert_eq!(view.chart_error(), "Please select a valid time range.");
    assert_eq!(http.request_count(), 0);
}

#[test]
fn request_covers_calendar_window() {
    let http = FakeHttp::new();
    http.on("/v2/aggs/", Reply::ok(polygon_body(&[(1_706_745_600_000, 184.4)])));
    let (panel, view, chart) = panel(&http, " aapl ", "30");

    block_on(panel.look_up_at(march_first()));

    assert_eq!(
        http.requests(),
        vec![
            "https://fake.test/v2/aggs/ticker/AAPL/range/1/day/2024-01-31/2024-03-01?adjusted=true&sort=asc&limit=120&apiKey=KEY"
                .to_string()
        ]
    );
    assert_eq!(view.chart_error(), "");
    assert_eq!(chart.live(), 1);
    let created = chart.0.created.borrow();
    assert_eq!(created[0].dataset_label, "AAPL Closing Price");
    assert_eq!(created[0].values, vec![184.4]);
    assert_eq!(
        created[0].title,
        "AAPL Stock Price (Last 30 days = Last 1 Trading Days)"
    );
}

fn error_for(reply: Reply) -> (String, i32) {
    let http = FakeHttp::new();
    http.on("/v2/aggs/", Reply::ok(polygon_body(&[(1_706_745_600_000, 184.4)])));
    let (panel, view, chart) = panel(&http, "AAPL", "30");
    block_on(panel.look_up_at(march_first()));
    assert_eq!(chart.live(), 1);

    http.on("/v2/aggs/", reply);
    block_on(panel.look_up_at(march_first()));
    (view.chart_error(), chart.live())
}

#[test]
fn error_taxonomy_is_shown_verbatim() {
    let (message, live) = error_for(Reply::status(404));
    assert_eq!(message, "Error: Stock ticker \"AAPL\" not found.");
    assert_eq!(live, 0);

    let (message, _) = error_for(Reply::status(429));
    assert_eq!(message, "Error: API rate limit exceeded. Please wait.");

    let (message, _) = error_for(Reply::status(503));
    assert_eq!(message, "Error: HTTP error! status: 503");

    let (message, live) = error_for(Reply::ok(r#"{"results":[]}"#));
    assert_eq!(
        message,
        "Error: No data found for ticker \"AAPL\" in the selected range."
    );
    assert_eq!(live, 0);

    let (message, _) = error_for(Reply::ok(r#"{"resultsCount":0}"#));
    assert!(message.contains("No data found"));
}

#[test]
fn transport_and_parse_failures_are_generic() {
    let (message, live) = error_for(Reply::Transport("offline".into()));
    assert_eq!(message, "Error: Failed to fetch: offline");
    assert_eq!(live, 0);

    let (message, _) = error_for(Reply::ok("<html>"));
    assert!(message.starts_with("Error: Failed to parse response:"));
}

#[test]
fn outcomes_do_not_overlap() {
    let cases = [
        (Reply::status(404), "not found"),
        (Reply::status(429), "rate limit"),
        (Reply::status(500), "HTTP error"),
        (Reply::ok(r#"{"results":[]}"#), "No data"),
    ];
    let needles: Vec<&str> = cases.iter().map(|(_, needle)| *needle).collect();

    for (reply, expected) in cases {
        let (message, _) = error_for(reply);
        for needle in &needles {
            assert_eq!(message.contains(needle), *needle == expected, "{message}");
        }
    }
}

#[test]
fn render_failure_reports_and_leaves_no_chart() {
    let http = FakeHttp::new();
    http.on("/v2/aggs/", Reply::ok(polygon_body(&[(1_706_745_600_000, 184.4)])));
    let (panel, view, chart) = panel(&http, "AAPL", "7");
    chart.0.fail.set(true);

    block_on(panel.look_up_at(march_first()));

    assert_eq!(view.chart_error(), "Error: canvas lost");
    assert!(!panel.chart_is_live());
}
