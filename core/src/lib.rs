pub mod api;
pub mod cli;
pub mod dictionary;
pub mod error;
pub mod extraction;
pub mod selection;
pub mod types;

pub use api::{ProtocolEngine, HANGING_PROTOCOL_STORAGE_UID};
pub use cli::report::TextReport;
pub use dictionary::{parse_tag_expr, TagDictionary, TagInfo};
pub use error::{HangselError, Result};
pub use selection::{
    matches_source, resolve_document_selectors, resolve_selectors, select_image_sets,
    AttributeSelector, AttributeSource, ResolvedSelector,
};
pub use types::*;
