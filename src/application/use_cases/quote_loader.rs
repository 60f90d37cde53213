use crate::application::ports::QuoteView;
use crate::domain::logging::LogComponent;
use crate::domain::quotes::Quote;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::http::{HttpClient, zenquotes::ZenQuotesClient};
use crate::log_error;
use std::rc::Rc;

/// Use Case: one random quote on the home page
pub struct QuoteLoader<H, V> {
    client: ZenQuotesClient<H>,
    view: Rc<V>,
}

impl<H: HttpClient, V: QuoteView> QuoteLoader<H, V> {
    pub fn new(http: H, config: &AppConfig, view: Rc<V>) -> Self {
        Self {
            client: ZenQuotesClient::new(http, config),
            view,
        }
    }

    /// Single attempt; any failure shows the fixed fallback and clears the author
    pub async fn load(&self) {
        match self.client.random_quote().await {
            Ok(quote) => self
                .view
                .show_quote(&quote.display_text(), &quote.display_author()),
            Err(e) => {
                log_error!(LogComponent::Application("QuoteLoader"), "Error fetching quote: {e}");
                self.view.show_quote(Quote::UNAVAILABLE, "");
            }
        }
    }
}
