use super::{HttpClient, endpoint};
use crate::domain::errors::{AppError, AppResult};
use crate::domain::quotes::Quote;
use crate::infrastructure::config::AppConfig;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ZenQuote {
    q: String,
    a: String,
}

/// Random quote source
pub struct ZenQuotesClient<H> {
    http: H,
    base_url: String,
}

impl<H: HttpClient> ZenQuotesClient<H> {
    pub fn new(http: H, config: &AppConfig) -> Self {
        Self {
            http,
            base_url: config.quotes_base_url.clone(),
        }
    }

    pub async fn random_quote(&self) -> AppResult<Quote> {
        let url = endpoint(&self.base_url, &["random"], &[])?;
        let quotes: Vec<ZenQuote> = self.http.get(&url).await?.ensure_ok()?.json()?;
        quotes
            .into_iter()
            .next()
            .map(|quote| Quote {
                text: quote.q,
                author: quote.a,
            })
            .ok_or_else(|| AppError::Payload("No quote data received".to_string()))
    }
}
