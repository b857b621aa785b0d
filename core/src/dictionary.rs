use crate::error::{HangselError, Result};
use dicom_core::dictionary::{DataDictionary, DataDictionaryEntry, TagRange};
use dicom_core::{Tag, VR};
use dicom_dictionary_std::StandardDataDictionary;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Descriptive information for a known attribute tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagInfo {
    /// Standard attribute keyword, e.g. `ImageSetsSequence`
    pub name: String,

    /// Value representation of the attribute
    pub vr: VR,
}

impl fmt::Display for TagInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?})", self.name, self.vr)
    }
}

/// Read-only dictionary of standard attribute tags
///
/// Wraps the static standard data dictionary (including repeating-group
/// tag ranges) behind an explicitly constructed, immutable value that
/// callers inject where needed. The selection engine does not consult it;
/// it exists for description and validation of protocol documents.
#[derive(Debug, Default, Clone, Copy)]
pub struct TagDictionary {
    inner: StandardDataDictionary,
}

impl TagDictionary {
    /// Creates the dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a tag to its descriptive entry, if known
    pub fn resolve(&self, tag: Tag) -> Option<TagInfo> {
        self.inner.by_tag(tag).map(|entry| TagInfo {
            name: entry.alias().to_string(),
            vr: entry.vr().relaxed(),
        })
    }

    /// Resolves a standard attribute keyword to its tag, if known
    ///
    /// Repeating-group entries have no single tag and resolve to `None`.
    pub fn resolve_name(&self, name: &str) -> Option<Tag> {
        match self.inner.by_name(name).map(|entry| entry.tag_range()) {
            Some(TagRange::Single(tag)) => Some(tag),
            _ => None,
        }
    }
}

/// Parses a conventional tag spelling into a [`Tag`]
///
/// Accepts `(gggg,eeee)`, `gggg,eeee` and `ggggeeee`, hex digits in
/// either case.
pub fn parse_tag_expr(expr: &str) -> Result<Tag> {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let pattern = REGEX.get_or_init(|| {
        Regex::new(r"^\(?([0-9a-fA-F]{4}),?([0-9a-fA-F]{4})\)?$")
            .expect("Failed to compile regex")
    });

    let trimmed = expr.trim();
    let captures = pattern
        .captures(trimmed)
        .ok_or_else(|| HangselError::InvalidTagExpression(trimmed.to_string()))?;

    // the pattern guarantees four hex digits per group
    let group = u16::from_str_radix(&captures[1], 16)
        .map_err(|_| HangselError::InvalidTagExpression(trimmed.to_string()))?;
    let element = u16::from_str_radix(&captures[2], 16)
        .map_err(|_| HangselError::InvalidTagExpression(trimmed.to_string()))?;

    Ok(Tag(group, element))
}
