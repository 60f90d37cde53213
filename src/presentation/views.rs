//! Signal-backed implementations of the application ports.
//!
//! Each struct is a bundle of `RwSignal`s, so it is `Copy` and can be shared
//! between the use case (which writes) and the components (which read).

use crate::application::ports::{DogView, PageHost, QuoteView, StockView};
use crate::domain::dogs::{BreedDetails, BreedListing, CarouselImage};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{DayRange, SentimentTable};
use crate::domain::page::PageContext;
use crate::log_warn;
use crate::presentation::ids;
use leptos::*;
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

fn report(action: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log_warn!(LogComponent::Presentation("Views"), "{action} failed: {e:?}");
    }
}

/// Audio status line plus the window-level effects
#[derive(Clone, Copy)]
pub struct PageSignals {
    pub status: RwSignal<String>,
}

impl PageSignals {
    pub fn new() -> Self {
        Self {
            status: create_rw_signal(String::new()),
        }
    }
}

impl Default for PageSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl PageHost for PageSignals {
    fn set_status(&self, text: &str) {
        self.status.set(text.to_string());
    }

    fn alert(&self, message: &str) {
        report("alert", gloo::utils::window().alert_with_message(message));
    }

    fn set_background_color(&self, color: &str) {
        report(
            "background-color",
            gloo::utils::body()
                .style()
                .set_property("background-color", color),
        );
    }

    fn navigate(&self, page: PageContext) {
        report(
            "navigation",
            gloo::utils::window().location().set_href(page.href()),
        );
    }
}

#[derive(Clone, Copy)]
pub struct QuoteSignals {
    pub text: RwSignal<String>,
    pub author: RwSignal<String>,
}

impl QuoteSignals {
    pub fn new() -> Self {
        Self {
            text: create_rw_signal("Loading quote...".to_string()),
            author: create_rw_signal(String::new()),
        }
    }
}

impl Default for QuoteSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteView for QuoteSignals {
    fn show_quote(&self, text: &str, author: &str) {
        self.text.set(text.to_string());
        self.author.set(author.to_string());
    }
}

#[derive(Clone, Copy)]
pub struct StockSignals {
    pub ticker: RwSignal<String>,
    pub range: RwSignal<String>,
    pub chart_error: RwSignal<String>,
    pub sentiment: RwSignal<SentimentTable>,
    pub sentiment_error: RwSignal<String>,
}

impl StockSignals {
    pub fn new() -> Self {
        Self {
            ticker: create_rw_signal(String::new()),
            range: create_rw_signal(DayRange::VOICE_DEFAULT.to_string()),
            chart_error: create_rw_signal(String::new()),
            sentiment: create_rw_signal(SentimentTable::default()),
            sentiment_error: create_rw_signal(String::new()),
        }
    }
}

impl Default for StockSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl StockView for StockSignals {
    fn ticker_input(&self) -> String {
        self.ticker.get_untracked()
    }

    fn range_input(&self) -> String {
        self.range.get_untracked()
    }

    fn set_lookup_inputs(&self, ticker: &str, range: DayRange) {
        self.ticker.set(ticker.to_string());
        self.range.set(range.to_string());
    }

    fn set_chart_error(&self, text: &str) {
        self.chart_error.set(text.to_string());
    }

    fn show_sentiment(&self, table: SentimentTable) {
        self.sentiment.set(table);
    }

    fn set_sentiment_error(&self, text: &str) {
        self.sentiment_error.set(text.to_string());
    }
}

#[derive(Clone, Copy)]
pub struct DogSignals {
    pub images: RwSignal<Vec<CarouselImage>>,
    pub carousel_error: RwSignal<String>,
    pub breeds: RwSignal<BreedListing>,
    pub breed_error: RwSignal<String>,
    pub details: RwSignal<Option<BreedDetails>>,
}

impl DogSignals {
    pub fn new() -> Self {
        Self {
            images: create_rw_signal(Vec::new()),
            carousel_error: create_rw_signal(String::new()),
            breeds: create_rw_signal(BreedListing::default()),
            breed_error: create_rw_signal(String::new()),
            details: create_rw_signal(None),
        }
    }

    /// Record a failed image load without re-rendering the slides under the slider
    pub fn mark_broken(&self, index: usize) {
        self.images.update_untracked(|images| {
            if let Some(image) = images.get_mut(index) {
                image.mark_broken();
            }
        });
    }
}

impl Default for DogSignals {
    fn default() -> Self {
        Self::new()
    }
}

fn scroll_to_details() {
    let Some(panel) = gloo::utils::document().get_element_by_id(ids::BREED_INFO) else {
        log_warn!(LogComponent::Presentation("Views"), "breed info container not found");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Nearest);
    panel.scroll_into_view_with_scroll_into_view_options(&options);
}

impl DogView for DogSignals {
    fn show_carousel(&self, images: Vec<CarouselImage>) {
        self.images.set(images);
    }

    fn set_carousel_error(&self, text: &str) {
        self.carousel_error.set(text.to_string());
    }

    fn show_breeds(&self, listing: BreedListing) {
        self.breeds.set(listing);
    }

    fn set_breed_error(&self, text: &str) {
        self.breed_error.set(text.to_string());
    }

    fn show_breed_details(&self, details: BreedDetails) {
        self.details.set(Some(details));
        // The panel only becomes visible on the next frame
        request_animation_frame(scroll_to_details);
    }
}
