use crate::extraction::tags::{
    get_string_value, get_tag_value, sequence_items, IMAGE_SET_SELECTOR_SEQUENCE,
    IMAGE_SET_SELECTOR_USAGE_FLAG, SELECTOR_ATTRIBUTE, SELECTOR_ATTRIBUTE_VR,
};
use crate::extraction::{extract_selector_value, Extraction};
use crate::types::{SelectorUsageFlag, SelectorValue, SelectorVr};
use dicom_core::Tag;
use dicom_object::InMemDicomObject;
use log::debug;

/// One parsed attribute selector from an ImageSetSelectorSequence item
///
/// All fields are best-effort: a missing or malformed sub-element leaves
/// the corresponding field absent rather than failing the parse.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSelector {
    /// Image Set Selector Usage Flag (0072,0024)
    pub usage_flag: SelectorUsageFlag,

    /// Selector Attribute (0072,0026): the attribute this selector targets
    pub attribute: Option<Tag>,

    /// Selector Attribute VR (0072,0050), when recognized
    pub vr: Option<SelectorVr>,
}

impl AttributeSelector {
    /// Parses the selector fields from a sequence item
    pub fn from_item(item: &InMemDicomObject) -> Self {
        let usage_flag = get_string_value(item, IMAGE_SET_SELECTOR_USAGE_FLAG)
            .map(|s| SelectorUsageFlag::from_str(&s))
            .unwrap_or_default();
        let attribute = get_tag_value(item, SELECTOR_ATTRIBUTE);
        let vr =
            get_string_value(item, SELECTOR_ATTRIBUTE_VR).and_then(|s| SelectorVr::from_code(&s));

        Self {
            usage_flag,
            attribute,
            vr,
        }
    }
}

/// A selector whose value was successfully extracted
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ResolvedSelector {
    /// The attribute this selector targets
    #[cfg_attr(feature = "json", serde(serialize_with = "crate::types::serialize_tag"))]
    pub attribute: Tag,

    /// Usage flag carried over from the selector
    pub usage_flag: SelectorUsageFlag,

    /// Declared VR of the selector
    pub vr: SelectorVr,

    /// The resolved literal value
    pub value: SelectorValue,
}

/// Resolves the attribute selectors of one image set definition item
///
/// Walks the ImageSetSelectorSequence in document order and extracts each
/// selector's value. Selectors that yield no value (sequence VRs,
/// unrecognized VR codes, missing sub-elements, absent containers) are
/// skipped; nothing here ever fails.
pub fn resolve_selectors(definition: &InMemDicomObject) -> Vec<ResolvedSelector> {
    let mut resolved = Vec::new();

    let Some(items) = sequence_items(definition, IMAGE_SET_SELECTOR_SEQUENCE) else {
        return resolved;
    };

    for item in items {
        let selector = AttributeSelector::from_item(item);

        let Some(vr) = selector.vr else {
            debug!("skipping selector with unrecognized VR");
            continue;
        };

        let Some(attribute) = selector.attribute else {
            debug!("skipping selector without a selector attribute");
            continue;
        };

        match extract_selector_value(item, vr) {
            Extraction::Value(value) => resolved.push(ResolvedSelector {
                attribute,
                usage_flag: selector.usage_flag,
                vr,
                value,
            }),
            Extraction::NotApplicable => {
                debug!("skipping sequence selector for {}", attribute);
            }
            Extraction::Unset => {
                debug!("selector for {} resolved no value", attribute);
            }
        }
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SelectorValue;
    use dicom_core::smallvec::smallvec;
    use dicom_core::value::{DataSetSequence, PrimitiveValue};
    use dicom_core::{DataElement, VR};

    fn cs_selector_item(flag: &str, attribute: Tag, vr_code: &str, value: &str) -> InMemDicomObject {
        InMemDicomObject::from_element_iter([
            DataElement::new(
                IMAGE_SET_SELECTOR_USAGE_FLAG,
                VR::CS,
                PrimitiveValue::from(flag),
            ),
            DataElement::new(
                SELECTOR_ATTRIBUTE,
                VR::AT,
                PrimitiveValue::Tags(smallvec![attribute]),
            ),
            DataElement::new(SELECTOR_ATTRIBUTE_VR, VR::CS, PrimitiveValue::from(vr_code)),
            DataElement::new(Tag(0x0072, 0x0062), VR::CS, PrimitiveValue::from(value)),
        ])
    }

    fn definition_with_selectors(selectors: Vec<InMemDicomObject>) -> InMemDicomObject {
        InMemDicomObject::from_element_iter([DataElement::new(
            IMAGE_SET_SELECTOR_SEQUENCE,
            VR::SQ,
            DataSetSequence::from(selectors),
        )])
    }

    #[test]
    fn test_from_item_parses_all_fields() {
        let item = cs_selector_item("NO_MATCH", Tag(0x0018, 0x0015), "CS", "BREAST");
        let selector = AttributeSelector::from_item(&item);
        assert_eq!(selector.usage_flag, SelectorUsageFlag::NoMatch);
        assert_eq!(selector.attribute, Some(Tag(0x0018, 0x0015)));
        assert_eq!(selector.vr, Some(SelectorVr::Cs));
    }

    #[test]
    fn test_from_item_empty() {
        let selector = AttributeSelector::from_item(&InMemDicomObject::new_empty());
        assert_eq!(selector.usage_flag, SelectorUsageFlag::Unknown);
        assert_eq!(selector.attribute, None);
        assert_eq!(selector.vr, None);
    }

    #[test]
    fn test_resolve_selectors() {
        let definition = definition_with_selectors(vec![cs_selector_item(
            "NO_MATCH",
            Tag(0x0018, 0x0015),
            "CS",
            "BREAST",
        )]);

        let resolved = resolve_selectors(&definition);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].attribute, Tag(0x0018, 0x0015));
        assert_eq!(resolved[0].usage_flag, SelectorUsageFlag::NoMatch);
        assert_eq!(resolved[0].vr, SelectorVr::Cs);
        assert_eq!(
            resolved[0].value,
            SelectorValue::Str("BREAST".to_string())
        );
    }

    #[test]
    fn test_resolve_selectors_no_sequence() {
        assert!(resolve_selectors(&InMemDicomObject::new_empty()).is_empty());
    }

    #[test]
    fn test_resolve_selectors_skips_unrecognized_vr() {
        let definition = definition_with_selectors(vec![cs_selector_item(
            "MATCH",
            Tag(0x0018, 0x0015),
            "OB",
            "BREAST",
        )]);
        assert!(resolve_selectors(&definition).is_empty());
    }

    #[test]
    fn test_resolve_selectors_skips_sequence_vr() {
        let definition = definition_with_selectors(vec![cs_selector_item(
            "MATCH",
            Tag(0x0054, 0x0220),
            "SQ",
            "ignored",
        )]);
        assert!(resolve_selectors(&definition).is_empty());
    }

    #[test]
    fn test_resolve_selectors_skips_malformed_item() {
        // selector with a VR but neither attribute nor container
        let malformed = InMemDicomObject::from_element_iter([DataElement::new(
            SELECTOR_ATTRIBUTE_VR,
            VR::CS,
            PrimitiveValue::from("CS"),
        )]);
        let good = cs_selector_item("MATCH", Tag(0x0008, 0x0060), "CS", "MG");
        let definition = definition_with_selectors(vec![malformed, good]);

        let resolved = resolve_selectors(&definition);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].value, SelectorValue::Str("MG".to_string()));
    }
}
