//! Hanging protocol evaluation: selector resolution, temporal
//! classification, and the top-level selection pass.

pub mod image_set;
pub mod matching;
pub mod selector;

pub use image_set::classify_time_based_item;
pub use matching::{matches_source, AttributeSource};
pub use selector::{resolve_selectors, AttributeSelector, ResolvedSelector};

use crate::extraction::tags::{sequence_items, IMAGE_SETS_SEQUENCE, TIME_BASED_IMAGE_SETS_SEQUENCE};
use crate::types::ImageSet;
use dicom_object::InMemDicomObject;
use log::debug;

/// Evaluates a hanging protocol document into an ordered image set list
///
/// Walks the ImageSetsSequence in document order; for each definition,
/// resolves its attribute selectors (value resolution only; resolved
/// values do not gate the output) and classifies every time-based image
/// set entry. The output length always equals the total number of
/// time-based entries across all definitions, and the output order is
/// their document order. An absent ImageSetsSequence yields an empty list.
pub fn select_image_sets(doc: &InMemDicomObject) -> Vec<ImageSet> {
    let mut image_sets = Vec::new();

    let Some(definitions) = sequence_items(doc, IMAGE_SETS_SEQUENCE) else {
        debug!("document has no image sets sequence");
        return image_sets;
    };

    for definition in definitions {
        let resolved = resolve_selectors(definition);
        debug!("definition resolved {} selector value(s)", resolved.len());

        let Some(entries) = sequence_items(definition, TIME_BASED_IMAGE_SETS_SEQUENCE) else {
            continue;
        };

        for entry in entries {
            image_sets.push(classify_time_based_item(entry));
        }
    }

    image_sets
}

/// Resolves the attribute selectors of every image set definition
///
/// Returns one selector list per ImageSetsSequence item, in document
/// order. Offered for callers that feed the matching layer or describe
/// a protocol; [`select_image_sets`] does not depend on its output.
pub fn resolve_document_selectors(doc: &InMemDicomObject) -> Vec<Vec<ResolvedSelector>> {
    sequence_items(doc, IMAGE_SETS_SEQUENCE)
        .map(|definitions| definitions.iter().map(resolve_selectors).collect())
        .unwrap_or_default()
}
