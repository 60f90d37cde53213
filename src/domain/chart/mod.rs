//! Chart specification handed to the charting library.

pub mod value_objects;

pub use value_objects::*;
