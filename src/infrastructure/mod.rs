pub mod config;
pub mod http;
pub mod js;
pub mod services;

pub use config::AppConfig;
pub use http::GlooHttpClient;
