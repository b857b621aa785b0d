use crate::error::{HangselError, Result};
use crate::extraction::tags::{get_string_value, HANGING_PROTOCOL_NAME, SOP_CLASS_UID};
use crate::selection::{resolve_document_selectors, select_image_sets, ResolvedSelector};
use crate::types::ImageSet;
use dicom_object::{open_file, DefaultDicomObject, InMemDicomObject};
use log::debug;
use std::path::Path;

/// SOP Class UID of a Hanging Protocol Storage instance
pub const HANGING_PROTOCOL_STORAGE_UID: &str = "1.2.840.10008.5.1.4.38.1";

/// Main entry point for hanging protocol evaluation
///
/// Provides a high-level API over the selection engine: evaluate an
/// in-memory protocol document, or load one from a DICOM file first.
///
/// # Example
///
/// ```
/// use hangsel_core::ProtocolEngine;
/// use hangsel_core::{RelativeTimeUnits, SelectorCategory};
/// use dicom_core::value::{DataSetSequence, PrimitiveValue};
/// use dicom_core::{DataElement, Tag, VR};
/// use dicom_object::InMemDicomObject;
///
/// // One definition with a single relative-time image set
/// let entry = InMemDicomObject::from_element_iter([
///     DataElement::new(Tag(0x0072, 0x0032), VR::US, PrimitiveValue::from(1_u16)),
///     DataElement::new(Tag(0x0072, 0x0034), VR::CS, PrimitiveValue::from("RELATIVE_TIME")),
///     DataElement::new(Tag(0x0072, 0x0038), VR::SS, PrimitiveValue::from(0_i16)),
///     DataElement::new(Tag(0x0072, 0x003A), VR::CS, PrimitiveValue::from("MINUTES")),
/// ]);
/// let definition = InMemDicomObject::from_element_iter([DataElement::new(
///     Tag(0x0072, 0x0030),
///     VR::SQ,
///     DataSetSequence::from(vec![entry]),
/// )]);
/// let mut doc = InMemDicomObject::new_empty();
/// doc.put(DataElement::new(
///     Tag(0x0072, 0x0020),
///     VR::SQ,
///     DataSetSequence::from(vec![definition]),
/// ));
///
/// let sets = ProtocolEngine::select(&doc);
/// assert_eq!(sets.len(), 1);
/// assert_eq!(sets[0].set_number, 1);
/// assert_eq!(sets[0].category, SelectorCategory::RelativeTime);
/// assert_eq!(sets[0].relative_time.unwrap().units, RelativeTimeUnits::Minutes);
/// ```
pub struct ProtocolEngine;

impl ProtocolEngine {
    /// Evaluates a protocol document into an ordered image set list
    ///
    /// Pure and deterministic; identical input yields an identical,
    /// order-stable output. See [`select_image_sets`].
    pub fn select(doc: &InMemDicomObject) -> Vec<ImageSet> {
        select_image_sets(doc)
    }

    /// Resolves the attribute selectors of every image set definition
    ///
    /// One list per definition, in document order. See
    /// [`resolve_document_selectors`].
    pub fn resolved_selectors(doc: &InMemDicomObject) -> Vec<Vec<ResolvedSelector>> {
        resolve_document_selectors(doc)
    }

    /// Loads a hanging protocol file and evaluates it
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read as a DICOM object
    /// - The object carries a SOP Class UID other than Hanging Protocol
    ///   Storage (an absent SOP Class UID is tolerated)
    pub fn select_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<ImageSet>> {
        let obj = Self::load(path)?;
        Ok(Self::select(&obj))
    }

    /// Loads a hanging protocol file without evaluating it
    ///
    /// Performs the same document validation as [`Self::select_from_file`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<DefaultDicomObject> {
        let obj = open_file(path.as_ref())?;
        Self::validate_document(&obj)?;

        if let Some(name) = get_string_value(&obj, HANGING_PROTOCOL_NAME) {
            debug!("evaluating hanging protocol {:?}", name);
        }

        Ok(obj)
    }

    /// Checks that a document claims to be a hanging protocol instance
    fn validate_document(doc: &InMemDicomObject) -> Result<()> {
        match get_string_value(doc, SOP_CLASS_UID) {
            Some(uid) if uid != HANGING_PROTOCOL_STORAGE_UID => {
                Err(HangselError::InvalidDocument(format!(
                    "SOP class {} is not hanging protocol storage",
                    uid
                )))
            }
            _ => Ok(()),
        }
    }
}
