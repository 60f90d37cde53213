use crate::application::instance_slot::InstanceSlot;
use crate::application::ports::{RenderResource, StockView, TickerLookup};
use crate::domain::chart::LineChartSpec;
use crate::domain::errors::AppResult;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{DateWindow, DayRange, SentimentTable, StockSeries, Ticker};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::http::{HttpClient, polygon::PolygonClient, tradestie::TradestieClient};
use crate::time_utils::today_utc;
use crate::{log_info, log_warn};
use chrono::NaiveDate;
use futures::FutureExt;
use futures::future::LocalBoxFuture;
use std::cell::RefCell;
use std::rc::Rc;

/// Use Case: the stocks page. Ticker lookup into a single chart, plus the sentiment table.
pub struct StockPanel<H, C, V>
where
    C: RenderResource<Spec = LineChartSpec>,
{
    prices: PolygonClient<H>,
    sentiment: TradestieClient<H>,
    sentiment_rows: usize,
    view: Rc<V>,
    chart: RefCell<InstanceSlot<C>>,
}

impl<H, C, V> StockPanel<H, C, V>
where
    H: HttpClient + Clone,
    C: RenderResource<Spec = LineChartSpec>,
    V: StockView,
{
    pub fn new(http: H, config: &AppConfig, chart: C, view: Rc<V>) -> Self {
        Self {
            prices: PolygonClient::new(http.clone(), config),
            sentiment: TradestieClient::new(http, config),
            sentiment_rows: config.sentiment_rows,
            view,
            chart: RefCell::new(InstanceSlot::new(chart)),
        }
    }

    /// Lookup triggered by the "Get Chart" button
    pub async fn look_up_from_inputs(&self) {
        self.look_up_at(today_utc()).await;
    }

    /// Lookup with an explicit "today" for the date window.
    ///
    /// Overlapping calls are not cancelled; each one replaces the chart when its
    /// response arrives, so the last response to resolve is what stays on screen.
    pub async fn look_up_at(&self, today: NaiveDate) {
        self.view.set_chart_error("");

        let (ticker, range) = match self.read_inputs() {
            Ok(request) => request,
            Err(e) => {
                self.view.set_chart_error(&e.to_string());
                return;
            }
        };

        log_info!(
            LogComponent::Application("StockPanel"),
            "Fetching data for {ticker} for the last {range} days"
        );

        match self.fetch_series(ticker, range, today).await {
            Ok(series) => self.render_chart(&series),
            Err(e) => {
                log_warn!(LogComponent::Application("StockPanel"), "Error fetching stock data: {e}");
                self.view.set_chart_error(&format!("Error: {e}"));
                self.chart.borrow_mut().clear();
            }
        }
    }

    fn read_inputs(&self) -> AppResult<(Ticker, DayRange)> {
        let ticker = Ticker::parse(&self.view.ticker_input())?;
        let range = DayRange::parse(&self.view.range_input())?;
        Ok((ticker, range))
    }

    async fn fetch_series(
        &self,
        ticker: Ticker,
        range: DayRange,
        today: NaiveDate,
    ) -> AppResult<StockSeries> {
        let window = DateWindow::ending(today, range)?;
        let bars = self.prices.daily_bars(&ticker, &window).await?;
        Ok(StockSeries::from_bars(ticker, range, &bars))
    }

    fn render_chart(&self, series: &StockSeries) {
        let spec = series.to_chart_spec();
        // Whichever response lands last owns the error line too
        self.view.set_chart_error("");
        let rendered = self.chart.borrow_mut().replace(&spec);
        if let Err(e) = rendered {
            log_warn!(LogComponent::Application("StockPanel"), "chart render failed: {e}");
            self.view.set_chart_error(&format!("Error: {e}"));
        }
    }

    /// Fill the sentiment table once. Failures leave the table as it was.
    pub async fn load_sentiment(&self) {
        self.view.set_sentiment_error("");
        match self.sentiment.top_mentions(self.sentiment_rows).await {
            Ok(rows) => self.view.show_sentiment(SentimentTable::from_rows(rows)),
            Err(e) => {
                log_warn!(LogComponent::Application("StockPanel"), "Error fetching Reddit stocks: {e}");
                self.view
                    .set_sentiment_error(&format!("Error loading Reddit stocks: {e}"));
            }
        }
    }

    pub fn chart_is_live(&self) -> bool {
        self.chart.borrow().is_live()
    }

    /// Run `inspect` against the live chart instance, if any
    pub fn with_chart<T>(&self, inspect: impl FnOnce(Option<&C::Instance>) -> T) -> T {
        inspect(self.chart.borrow().current())
    }
}

impl<H, C, V> TickerLookup for StockPanel<H, C, V>
where
    H: HttpClient + Clone,
    C: RenderResource<Spec = LineChartSpec>,
    V: StockView,
{
    fn look_up(&self, ticker: String, range: DayRange) -> LocalBoxFuture<'_, ()> {
        async move {
            self.view.set_lookup_inputs(&ticker, range);
            self.look_up_from_inputs().await;
        }
        .boxed_local()
    }
}
