use super::{HttpClient, endpoint};
use crate::domain::dogs::DogBreed;
use crate::domain::errors::{AppError, AppResult};
use crate::domain::logging::LogComponent;
use crate::infrastructure::config::AppConfig;
use crate::log_warn;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct RawBreed {
    id: Option<String>,
    attributes: Option<RawAttributes>,
}

#[derive(Debug, Deserialize)]
struct RawAttributes {
    name: Option<String>,
    description: Option<String>,
    life: Option<RawLife>,
}

#[derive(Debug, Deserialize)]
struct RawLife {
    min: Option<u32>,
    max: Option<u32>,
}

impl RawBreed {
    /// `None` if any required field (id, name, life min/max) is absent or empty
    fn into_breed(self) -> Option<DogBreed> {
        let id = self.id.filter(|id| !id.is_empty())?;
        let attributes = self.attributes?;
        let name = attributes.name.filter(|name| !name.trim().is_empty())?;
        let life = attributes.life?;
        Some(DogBreed {
            id,
            name,
            description: attributes.description.filter(|text| !text.is_empty()),
            life_min: life.min?,
            life_max: life.max?,
        })
    }
}

/// Breed catalogue from dogapi.dog
pub struct DogApiClient<H> {
    http: H,
    base_url: String,
}

impl<H: HttpClient> DogApiClient<H> {
    pub fn new(http: H, config: &AppConfig) -> Self {
        Self {
            http,
            base_url: config.dog_api_base_url.clone(),
        }
    }

    /// First page of breeds. Incomplete entries are logged and dropped.
    pub async fn breeds(&self) -> AppResult<Vec<DogBreed>> {
        let url = endpoint(&self.base_url, &["breeds"], &[])?;
        let payload: Value = self.http.get(&url).await?.ensure_ok()?.json()?;
        let entries = payload.get("data").and_then(Value::as_array).ok_or_else(|| {
            AppError::Payload(
                "Invalid breed data format received (expected .data array).".to_string(),
            )
        })?;
        Ok(entries.iter().filter_map(parse_breed).collect())
    }
}

fn parse_breed(entry: &Value) -> Option<DogBreed> {
    let breed = RawBreed::deserialize(entry)
        .ok()
        .and_then(RawBreed::into_breed);
    if breed.is_none() {
        log_warn!(
            LogComponent::Infrastructure("DogApi"),
            "Skipping breed due to missing data: {entry}"
        );
    }
    breed
}
