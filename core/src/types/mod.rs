//! Core type definitions for hanging protocol evaluation
//!
//! This module provides the fundamental types used throughout the hangsel library:
//! - [`SelectorVr`]: Closed enumeration of selector value representations
//! - [`SelectorValue`]: Typed attribute value resolved from a selector
//! - [`SelectorUsageFlag`]: Whether a selector participates in matching
//! - [`SelectorCategory`]: Temporal category of a time-based image set
//! - [`RelativeTimeUnits`]: Units for relative-time offsets
//! - [`ImageSet`]: Resolved image set descriptor produced by the engine

mod enums;
mod image_set;
mod value;
mod vr;

pub use enums::{RelativeTimeUnits, SelectorCategory, SelectorUsageFlag};
#[cfg(feature = "json")]
pub(crate) use value::serialize_tag;
pub use image_set::{ImageSet, RelativeTime};
pub use value::SelectorValue;
pub use vr::SelectorVr;
