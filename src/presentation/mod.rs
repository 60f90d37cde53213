pub mod views;
pub mod wasm_api;

/// Element ids the pages render; external scripts and styles key off them
pub mod ids {
    pub const AUDIO_STATUS: &str = "audio-status";
    pub const START_AUDIO: &str = "start-audio";
    pub const STOP_AUDIO: &str = "stop-audio";

    pub const QUOTE_TEXT: &str = "quote-text";
    pub const QUOTE_AUTHOR: &str = "quote-author";

    pub const STOCK_TICKER: &str = "stock-ticker";
    pub const TIME_RANGE: &str = "time-range";
    pub const GET_CHART: &str = "get-chart-btn";
    pub const CHART_ERROR: &str = "chart-error";
    pub const STOCK_CHART: &str = "stockChart";
    pub const REDDIT_TABLE: &str = "reddit-stocks-table";
    pub const REDDIT_ERROR: &str = "reddit-error";

    pub const DOG_CAROUSEL: &str = "dog-carousel";
    pub const CAROUSEL_ERROR: &str = "carousel-error";
    pub const BREED_BUTTONS: &str = "breed-buttons-container";
    pub const BREED_ERROR: &str = "breed-error";
    pub const BREED_INFO: &str = "breed-info-container";
    pub const BREED_NAME: &str = "breed-name";
    pub const BREED_DESCRIPTION: &str = "breed-description";
    pub const BREED_LIFE_MIN: &str = "breed-life-min";
    pub const BREED_LIFE_MAX: &str = "breed-life-max";
}
