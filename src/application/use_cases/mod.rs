pub mod dog_panel;
pub mod quote_loader;
pub mod stock_panel;

pub use dog_panel::DogPanel;
pub use quote_loader::QuoteLoader;
pub use stock_panel::StockPanel;
