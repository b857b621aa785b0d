use dicom_core::value::PrimitiveValue;
use dicom_core::Tag;
use dicom_object::InMemDicomObject;

// Hanging Protocol Identification Tags
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
pub const HANGING_PROTOCOL_NAME: Tag = Tag(0x0072, 0x0002);
pub const HANGING_PROTOCOL_DESCRIPTION: Tag = Tag(0x0072, 0x0004);
pub const HANGING_PROTOCOL_LEVEL: Tag = Tag(0x0072, 0x0006);
pub const HANGING_PROTOCOL_CREATOR: Tag = Tag(0x0072, 0x0008);
pub const NUMBER_OF_PRIORS_REFERENCED: Tag = Tag(0x0072, 0x0014);

// Image Set Definition Tags
pub const IMAGE_SETS_SEQUENCE: Tag = Tag(0x0072, 0x0020);
pub const IMAGE_SET_SELECTOR_SEQUENCE: Tag = Tag(0x0072, 0x0022);
pub const IMAGE_SET_SELECTOR_USAGE_FLAG: Tag = Tag(0x0072, 0x0024);
pub const SELECTOR_ATTRIBUTE: Tag = Tag(0x0072, 0x0026);
pub const SELECTOR_VALUE_NUMBER: Tag = Tag(0x0072, 0x0028);
pub const SELECTOR_ATTRIBUTE_VR: Tag = Tag(0x0072, 0x0050);

// Time Based Image Set Tags
pub const TIME_BASED_IMAGE_SETS_SEQUENCE: Tag = Tag(0x0072, 0x0030);
pub const IMAGE_SET_NUMBER: Tag = Tag(0x0072, 0x0032);
pub const IMAGE_SET_SELECTOR_CATEGORY: Tag = Tag(0x0072, 0x0034);
pub const RELATIVE_TIME: Tag = Tag(0x0072, 0x0038);
pub const RELATIVE_TIME_UNITS: Tag = Tag(0x0072, 0x003A);
pub const ABSTRACT_PRIOR_VALUE: Tag = Tag(0x0072, 0x003C);
pub const IMAGE_SET_LABEL: Tag = Tag(0x0072, 0x0040);

/// Helper to get string value from a DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted to string
pub fn get_string_value(dcm: &InMemDicomObject, tag: Tag) -> Option<String> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_str().ok())
        .map(|s| s.trim_end_matches('\0').trim().to_string())
}

/// Helper to get integer value from a DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted to i32
pub fn get_int_value(dcm: &InMemDicomObject, tag: Tag) -> Option<i32> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_int::<i32>().ok())
}

/// Helper to get u16 value from a DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted to u16
pub fn get_u16_value(dcm: &InMemDicomObject, tag: Tag) -> Option<u16> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_int::<u16>().ok())
}

/// Helper to get all integer values of a DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted
pub fn get_multi_int_value(dcm: &InMemDicomObject, tag: Tag) -> Option<Vec<i32>> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_multi_int::<i32>().ok())
}

/// Helper to get the first attribute tag held by an AT-valued element
///
/// Returns `None` if the tag is not present or does not hold tag values
pub fn get_tag_value(dcm: &InMemDicomObject, tag: Tag) -> Option<Tag> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.value().primitive())
        .and_then(|prim| match prim {
            PrimitiveValue::Tags(tags) => tags.first().copied(),
            _ => None,
        })
}

/// Helper to get the items of a sequence element
///
/// Returns `None` if the tag is absent or the element is not a sequence;
/// an absent sequence is treated as zero items by all callers.
pub fn sequence_items(dcm: &InMemDicomObject, tag: Tag) -> Option<&[InMemDicomObject]> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.items())
        .map(|items| &items[..])
}
