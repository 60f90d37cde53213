//! Seams between the page flows and the browser.
//!
//! Views and hosts take `&self`; implementations use interior mutability
//! (Leptos signals in the browser, `RefCell` in tests).

use crate::domain::dogs::{BreedDetails, BreedListing, CarouselImage};
use crate::domain::errors::AppResult;
use crate::domain::market_data::{DayRange, SentimentTable};
use crate::domain::page::PageContext;
use crate::domain::voice::{EngineEvent, ListenOptions, VoiceAction, VoiceCommand};
use futures::future::LocalBoxFuture;
use std::rc::Rc;

/// Page-wide side effects: status line, alerts, background, navigation
pub trait PageHost {
    fn set_status(&self, text: &str);
    /// Blocking user alert
    fn alert(&self, message: &str);
    /// Applied verbatim; invalid colours are ignored by the platform
    fn set_background_color(&self, color: &str);
    fn navigate(&self, page: PageContext);
}

pub trait QuoteView {
    fn show_quote(&self, text: &str, author: &str);
}

pub trait StockView {
    fn ticker_input(&self) -> String;
    fn range_input(&self) -> String;
    fn set_lookup_inputs(&self, ticker: &str, range: DayRange);
    fn set_chart_error(&self, text: &str);
    fn show_sentiment(&self, table: SentimentTable);
    fn set_sentiment_error(&self, text: &str);
}

pub trait DogView {
    fn show_carousel(&self, images: Vec<CarouselImage>);
    fn set_carousel_error(&self, text: &str);
    fn show_breeds(&self, listing: BreedListing);
    fn set_breed_error(&self, text: &str);
    /// Reveal the detail panel and scroll it into view
    fn show_breed_details(&self, details: BreedDetails);
}

/// A library-owned rendering object (chart, slider) that must be disposed explicitly
pub trait RenderResource {
    type Spec;
    type Instance;

    fn create(&self, spec: &Self::Spec) -> AppResult<Self::Instance>;
    fn destroy(&self, instance: Self::Instance);
}

/// Invoked when the engine matches a registered phrase
pub type CommandHandler = Rc<dyn Fn(VoiceAction, Option<String>) -> LocalBoxFuture<'static, ()>>;

/// Invoked for the engine's non-command callbacks
pub type EventHandler = Rc<dyn Fn(EngineEvent)>;

/// External speech-command recognition engine
pub trait SpeechEngine {
    fn add_commands(&self, commands: &[VoiceCommand], handler: CommandHandler);
    fn add_callbacks(&self, handler: EventHandler);
    fn start(&self, options: ListenOptions);
    fn abort(&self);
}

/// Stock lookup as triggered by voice
pub trait TickerLookup {
    fn look_up(&self, ticker: String, range: DayRange) -> LocalBoxFuture<'_, ()>;
}

/// Breed selection as triggered by voice
pub trait BreedSelector {
    /// Reveal the first rendered breed with this name; `false` if none matches
    fn select_breed_named(&self, name: &str) -> bool;
}
