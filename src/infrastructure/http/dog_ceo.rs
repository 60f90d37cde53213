use super::{HttpClient, endpoint};
use crate::domain::errors::{AppError, AppResult};
use crate::infrastructure::config::AppConfig;
use serde::Deserialize;
use serde_json::Value;

/// `{status, message}` envelope. `message` is a URL list on success and a string on errors.
#[derive(Debug, Deserialize)]
struct RandomImagesEnvelope {
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: Value,
}

/// Random dog pictures
pub struct DogCeoClient<H> {
    http: H,
    base_url: String,
}

impl<H: HttpClient> DogCeoClient<H> {
    pub fn new(http: H, config: &AppConfig) -> Self {
        Self {
            http,
            base_url: config.dog_ceo_base_url.clone(),
        }
    }

    pub async fn random_images(&self, count: usize) -> AppResult<Vec<String>> {
        let count = count.to_string();
        let url = endpoint(&self.base_url, &["breeds", "image", "random", count.as_str()], &[])?;
        let envelope: RandomImagesEnvelope = self.http.get(&url).await?.ensure_ok()?.json()?;

        let urls: Vec<String> = envelope
            .message
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        if envelope.status != "success" || urls.is_empty() {
            return Err(AppError::Payload(
                "Invalid or empty response from random dog image API.".to_string(),
            ));
        }
        Ok(urls)
    }
}
