use crate::extraction::tags::{
    get_multi_int_value, get_string_value, get_u16_value, ABSTRACT_PRIOR_VALUE, IMAGE_SET_LABEL,
    IMAGE_SET_NUMBER, IMAGE_SET_SELECTOR_CATEGORY, RELATIVE_TIME, RELATIVE_TIME_UNITS,
};
use crate::types::{ImageSet, RelativeTimeUnits, SelectorCategory};
use dicom_object::InMemDicomObject;
use log::debug;

/// Classifies one TimeBasedImageSetsSequence item into an [`ImageSet`]
///
/// Always builds the base descriptor from the item's set number and
/// temporal category, then attaches category-specific parameters:
/// a relative-time offset for `RELATIVE_TIME`, an ordinal prior pair for
/// `ABSTRACT_PRIOR`. Any other category builds the base descriptor alone.
/// Malformed parameters are dropped, never an error.
pub fn classify_time_based_item(item: &InMemDicomObject) -> ImageSet {
    let set_number = get_u16_value(item, IMAGE_SET_NUMBER).unwrap_or(0);
    let category = get_string_value(item, IMAGE_SET_SELECTOR_CATEGORY)
        .map(|s| SelectorCategory::from_str(&s))
        .unwrap_or_default();

    let mut image_set = ImageSet::new(set_number, category);

    match category {
        SelectorCategory::RelativeTime => {
            if let Some(value) = relative_time_value(item) {
                let units = get_string_value(item, RELATIVE_TIME_UNITS)
                    .map(|s| RelativeTimeUnits::from_str(&s))
                    .unwrap_or(RelativeTimeUnits::Unknown);
                image_set = image_set.with_relative_time(value, units);
            } else {
                debug!("set {} has no usable relative time", set_number);
            }
        }
        SelectorCategory::AbstractPrior => {
            if let Some(prior) = abstract_prior_value(item) {
                image_set = image_set.with_prior_value(prior);
            } else {
                debug!("set {} has no usable abstract prior value", set_number);
            }
        }
        _ => {}
    }

    if let Some(label) = get_string_value(item, IMAGE_SET_LABEL) {
        image_set = image_set.with_label(label);
    }

    image_set
}

/// Reads the relative-time offset, taking the first value of the element
fn relative_time_value(item: &InMemDicomObject) -> Option<i32> {
    get_multi_int_value(item, RELATIVE_TIME).and_then(|values| values.first().copied())
}

/// Reads the ordinal prior pair; the element must carry two values
fn abstract_prior_value(item: &InMemDicomObject) -> Option<(i32, i32)> {
    let values = get_multi_int_value(item, ABSTRACT_PRIOR_VALUE)?;
    match values[..] {
        [a, b, ..] => Some((a, b)),
        _ => None,
    }
}
