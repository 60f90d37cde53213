//! Page-independent model: value objects, entities, errors and logging.

pub mod chart;
pub mod dogs;
pub mod errors;
pub mod logging;
pub mod market_data;
pub mod page;
pub mod quotes;
pub mod voice;
