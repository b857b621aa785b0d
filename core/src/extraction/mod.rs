pub mod tags;
pub mod value;

pub use tags::*;
pub use value::{element_value, extract_selector_value, Extraction};
