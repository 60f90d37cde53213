//! Fakes shared by the integration tests.
#![allow(dead_code)]

use futures::channel::oneshot;
use futures::executor::block_on;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use url::Url;
use voice_dashboard_wasm::application::VoiceRouter;
use voice_dashboard_wasm::application::ports::{
    CommandHandler, DogView, EventHandler, PageHost, QuoteView, RenderResource, SpeechEngine,
    StockView,
};
use voice_dashboard_wasm::domain::chart::LineChartSpec;
use voice_dashboard_wasm::domain::dogs::{BreedDetails, BreedListing, CarouselImage, CarouselSpec};
use voice_dashboard_wasm::domain::errors::{AppError, AppResult, NetworkError};
use voice_dashboard_wasm::domain::market_data::{DayRange, SentimentTable};
use voice_dashboard_wasm::domain::page::PageContext;
use voice_dashboard_wasm::domain::voice::{
    EngineEvent, ListenOptions, VoiceCommand, match_utterance,
};
use voice_dashboard_wasm::infrastructure::config::AppConfig;
use voice_dashboard_wasm::infrastructure::http::{HttpClient, HttpResponse};

pub const BASE: &str = "https://fake.test";

pub fn config() -> AppConfig {
    AppConfig::default()
        .with_base_url(BASE)
        .with_polygon_api_key("KEY")
}

/// Canned outcome for a request
#[derive(Debug, Clone)]
pub enum Reply {
    Status(u16, String),
    Transport(String),
}

impl Reply {
    pub fn ok(body: impl Into<String>) -> Self {
        Reply::Status(200, body.into())
    }

    pub fn status(code: u16) -> Self {
        Reply::Status(code, String::new())
    }

    fn into_result(self) -> AppResult<HttpResponse> {
        match self {
            Reply::Status(code, body) => Ok(HttpResponse::new(code, body)),
            Reply::Transport(message) => Err(NetworkError::Transport(message).into()),
        }
    }
}

type Pending = RefCell<Vec<Option<oneshot::Sender<AppResult<HttpResponse>>>>>;

/// HTTP client answering from a route table keyed by URL substring.
///
/// Routes marked with [`FakeHttp::hold`] park each request until the test
/// releases it, so response order can be chosen independently of request order.
#[derive(Default)]
pub struct FakeHttp {
    routes: RefCell<Vec<(String, Reply)>>,
    held: RefCell<Vec<String>>,
    pending: Pending,
    requests: RefCell<Vec<String>>,
}

impl FakeHttp {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Answer every URL containing `needle` with `reply`. Later routes win.
    pub fn on(&self, needle: &str, reply: Reply) -> &Self {
        self.routes.borrow_mut().insert(0, (needle.to_string(), reply));
        self
    }

    pub fn hold(&self, needle: &str) {
        self.held.borrow_mut().push(needle.to_string());
    }

    /// Complete the `index`-th held request
    pub fn release(&self, index: usize, reply: Reply) {
        let sender = self.pending.borrow_mut()[index]
            .take()
            .expect("request already released");
        let _ = sender.send(reply.into_result());
    }

    pub fn held_count(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl HttpClient for FakeHttp {
    async fn get(&self, url: &Url) -> AppResult<HttpResponse> {
        let url = url.to_string();
        self.requests.borrow_mut().push(url.clone());

        let held = self.held.borrow().iter().any(|needle| url.contains(needle));
        if held {
            let (sender, receiver) = oneshot::channel();
            self.pending.borrow_mut().push(Some(sender));
            return receiver
                .await
                .unwrap_or_else(|_| Err(NetworkError::Transport("dropped".into()).into()));
        }

        let reply = self
            .routes
            .borrow()
            .iter()
            .find(|(needle, _)| url.contains(needle.as_str()))
            .map(|(_, reply)| reply.clone())
            .unwrap_or(Reply::status(404));
        reply.into_result()
    }
}

#[derive(Default)]
pub struct RecordingHost {
    pub statuses: RefCell<Vec<String>>,
    pub alerts: RefCell<Vec<String>>,
    pub colors: RefCell<Vec<String>>,
    pub navigations: RefCell<Vec<PageContext>>,
}

impl RecordingHost {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn last_status(&self) -> String {
        self.statuses.borrow().last().cloned().unwrap_or_default()
    }
}

impl PageHost for RecordingHost {
    fn set_status(&self, text: &str) {
        self.statuses.borrow_mut().push(text.to_string());
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn set_background_color(&self, color: &str) {
        self.colors.borrow_mut().push(color.to_string());
    }

    fn navigate(&self, page: PageContext) {
        self.navigations.borrow_mut().push(page);
    }
}

#[derive(Default)]
pub struct RecordingQuoteView {
    pub text: RefCell<String>,
    pub author: RefCell<String>,
}

impl QuoteView for RecordingQuoteView {
    fn show_quote(&self, text: &str, author: &str) {
        *self.text.borrow_mut() = text.to_string();
        *self.author.borrow_mut() = author.to_string();
    }
}

#[derive(Default)]
pub struct RecordingStockView {
    pub ticker: RefCell<String>,
    pub range: RefCell<String>,
    pub chart_error: RefCell<String>,
    pub sentiment: RefCell<SentimentTable>,
    pub sentiment_error: RefCell<String>,
}

impl RecordingStockView {
    pub fn with_inputs(ticker: &str, range: &str) -> Rc<Self> {
        let view = Self::default();
        *view.ticker.borrow_mut() = ticker.to_string();
        *view.range.borrow_mut() = range.to_string();
        Rc::new(view)
    }

    pub fn chart_error(&self) -> String {
        self.chart_error.borrow().clone()
    }
}

impl StockView for RecordingStockView {
    fn ticker_input(&self) -> String {
        self.ticker.borrow().clone()
    }

    fn range_input(&self) -> String {
        self.range.borrow().clone()
    }

    fn set_lookup_inputs(&self, ticker: &str, range: DayRange) {
        *self.ticker.borrow_mut() = ticker.to_string();
        *self.range.borrow_mut() = range.to_string();
    }

    fn set_chart_error(&self, text: &str) {
        *self.chart_error.borrow_mut() = text.to_string();
    }

    fn show_sentiment(&self, table: SentimentTable) {
        *self.sentiment.borrow_mut() = table;
    }

    fn set_sentiment_error(&self, text: &str) {
        *self.sentiment_error.borrow_mut() = text.to_string();
    }
}

#[derive(Default)]
pub struct RecordingDogView {
    pub images: RefCell<Vec<CarouselImage>>,
    pub carousel_error: RefCell<String>,
    pub listings: RefCell<Vec<BreedListing>>,
    pub breed_error: RefCell<String>,
    pub details: RefCell<Option<BreedDetails>>,
}

impl RecordingDogView {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn listing(&self) -> BreedListing {
        self.listings.borrow().last().cloned().unwrap_or_default()
    }
}

impl DogView for RecordingDogView {
    fn show_carousel(&self, images: Vec<CarouselImage>) {
        *self.images.borrow_mut() = images;
    }

    fn set_carousel_error(&self, text: &str) {
        *self.carousel_error.borrow_mut() = text.to_string();
    }

    fn show_breeds(&self, listing: BreedListing) {
        self.listings.borrow_mut().push(listing);
    }

    fn set_breed_error(&self, text: &str) {
        *self.breed_error.borrow_mut() = text.to_string();
    }

    fn show_breed_details(&self, details: BreedDetails) {
        *self.details.borrow_mut() = Some(details);
    }
}

#[derive(Default)]
pub struct ChartState {
    pub live: Cell<i32>,
    pub created: RefCell<Vec<LineChartSpec>>,
    pub fail: Cell<bool>,
}

/// Chart resource that counts live instances. Instances are creation indexes.
#[derive(Clone, Default)]
pub struct ChartProbe(pub Rc<ChartState>);

impl ChartProbe {
    pub fn live(&self) -> i32 {
        self.0.live.get()
    }

    pub fn last_title(&self) -> Option<String> {
        self.0.created.borrow().last().map(|spec| spec.title.clone())
    }
}

impl RenderResource for ChartProbe {
    type Spec = LineChartSpec;
    type Instance = usize;

    fn create(&self, spec: &LineChartSpec) -> AppResult<usize> {
        if self.0.fail.get() {
            return Err(AppError::Rendering("canvas lost".into()));
        }
        self.0.live.set(self.0.live.get() + 1);
        let mut created = self.0.created.borrow_mut();
        created.push(spec.clone());
        Ok(created.len() - 1)
    }

    fn destroy(&self, _instance: usize) {
        self.0.live.set(self.0.live.get() - 1);
    }
}

#[derive(Default)]
pub struct SliderState {
    pub live: Cell<i32>,
    pub mounted: RefCell<Vec<CarouselSpec>>,
    pub missing_library: Cell<bool>,
    pub throws: Cell<bool>,
}

#[derive(Clone, Default)]
pub struct SliderProbe(pub Rc<SliderState>);

impl SliderProbe {
    pub fn live(&self) -> i32 {
        self.0.live.get()
    }
}

impl RenderResource for SliderProbe {
    type Spec = CarouselSpec;
    type Instance = ();

    fn create(&self, spec: &CarouselSpec) -> AppResult<()> {
        if self.0.missing_library.get() {
            return Err(AppError::LibraryUnavailable("simpleslider".into()));
        }
        if self.0.throws.get() {
            return Err(AppError::Rendering("getSlider threw".into()));
        }
        self.0.live.set(self.0.live.get() + 1);
        self.0.mounted.borrow_mut().push(*spec);
        Ok(())
    }

    fn destroy(&self, _instance: ()) {
        self.0.live.set(self.0.live.get() - 1);
    }
}

/// Speech engine that records registration and lets tests "speak"
#[derive(Default)]
pub struct FakeEngine {
    commands: RefCell<Vec<VoiceCommand>>,
    handler: RefCell<Option<CommandHandler>>,
    events: RefCell<Option<EventHandler>>,
    pub starts: RefCell<Vec<ListenOptions>>,
    pub aborts: Cell<usize>,
}

impl FakeEngine {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn phrases(&self) -> Vec<&'static str> {
        self.commands
            .borrow()
            .iter()
            .map(|command| command.pattern.phrase())
            .collect()
    }

    /// Run the registered handler for `utterance`; `false` when nothing matched
    pub fn say(&self, utterance: &str) -> bool {
        let matched = match_utterance(&self.commands.borrow(), utterance);
        let handler = self.handler.borrow().clone();
        match (matched, handler) {
            (Some((action, capture)), Some(handler)) => {
                block_on(handler(action, capture));
                true
            }
            _ => false,
        }
    }

    pub fn emit(&self, event: EngineEvent) {
        let events = self.events.borrow().clone();
        if let Some(events) = events {
            events(event);
        }
    }
}

impl SpeechEngine for FakeEngine {
    fn add_commands(&self, commands: &[VoiceCommand], handler: CommandHandler) {
        self.commands.borrow_mut().extend_from_slice(commands);
        *self.handler.borrow_mut() = Some(handler);
    }

    fn add_callbacks(&self, handler: EventHandler) {
        *self.events.borrow_mut() = Some(handler);
    }

    fn start(&self, options: ListenOptions) {
        self.starts.borrow_mut().push(options);
    }

    fn abort(&self) {
        self.aborts.set(self.aborts.get() + 1);
    }
}

pub fn polygon_body(bars: &[(i64, f64)]) -> String {
    let results: Vec<_> = bars
        .iter()
        .map(|(t, c)| serde_json::json!({ "t": t, "c": c, "o": c, "v": 1000 }))
        .collect();
    serde_json::json!({ "ticker": "AAPL", "results": results }).to_string()
}

/// Router on `page` with a fake engine installed
pub fn voice_router(
    page: PageContext,
    configure: impl FnOnce(VoiceRouter) -> VoiceRouter,
) -> (Rc<VoiceRouter>, Rc<RecordingHost>, Rc<FakeEngine>) {
    let host = RecordingHost::new();
    let router = Rc::new(configure(VoiceRouter::new(page, host.clone())));
    let engine = FakeEngine::new();
    let installed: Option<Rc<dyn SpeechEngine>> = Some(engine.clone());
    assert!(router.install(installed));
    (router, host, engine)
}

/// Distinct hosts for the two dog APIs and no slider delay
pub fn dog_config() -> AppConfig {
    let mut config = AppConfig::default().with_slider_settle(std::time::Duration::ZERO);
    config.dog_ceo_base_url = "https://dogceo.test/api".to_string();
    config.dog_api_base_url = "https://dogapi.test/api/v2".to_string();
    config
}
