use crate::types::{SelectorValue, SelectorVr};
use dicom_core::value::PrimitiveValue;
use dicom_object::mem::InMemElement;
use dicom_object::InMemDicomObject;
use log::debug;

/// Outcome of attribute value extraction for one selector
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    /// The first element of the VR-specific value container
    Value(SelectorValue),
    /// VR is SQ; sequence selectors are never extracted
    NotApplicable,
    /// Container absent, empty, or unconvertible
    Unset,
}

impl Extraction {
    /// Converts the outcome into an optional value, collapsing
    /// `NotApplicable` and `Unset` into `None`
    pub fn into_value(self) -> Option<SelectorValue> {
        match self {
            Extraction::Value(v) => Some(v),
            _ => None,
        }
    }
}

/// Extracts the selector's literal value from its VR-specific container
///
/// Reads the first element of the Selector<VR>Value attribute that is
/// dedicated to `vr` in the given selector item. Sequence selectors
/// (`SelectorVr::Sq`) are skipped and yield `NotApplicable`; a missing or
/// unconvertible container yields `Unset`. Never an error.
pub fn extract_selector_value(item: &InMemDicomObject, vr: SelectorVr) -> Extraction {
    let Some(container) = vr.value_tag() else {
        return Extraction::NotApplicable;
    };

    match item
        .element(container)
        .ok()
        .and_then(|elem| element_value(elem, vr))
    {
        Some(value) => Extraction::Value(value),
        None => {
            debug!("selector has no usable {} value in {}", vr, container);
            Extraction::Unset
        }
    }
}

/// Converts a concrete element into a typed selector value for `vr`
///
/// Takes the first value of the element. Returns `None` when the element
/// holds nothing convertible; `Sq` never converts.
pub fn element_value(elem: &InMemElement, vr: SelectorVr) -> Option<SelectorValue> {
    match vr {
        SelectorVr::At => first_tag(elem).map(SelectorValue::Attr),
        SelectorVr::Cs
        | SelectorVr::Lo
        | SelectorVr::Lt
        | SelectorVr::Pn
        | SelectorVr::Sh
        | SelectorVr::St
        | SelectorVr::Ut => elem
            .to_multi_str()
            .ok()
            .and_then(|strs| strs.first().cloned())
            .map(|s| SelectorValue::Str(s.trim_end_matches('\0').trim().to_string())),
        SelectorVr::Is | SelectorVr::Sl => elem.to_int::<i32>().ok().map(SelectorValue::Int),
        SelectorVr::Ul => elem.to_int::<u32>().ok().map(SelectorValue::Uint),
        SelectorVr::Us => elem.to_int::<u16>().ok().map(SelectorValue::UShort),
        SelectorVr::Ss => elem.to_int::<i16>().ok().map(SelectorValue::Short),
        SelectorVr::Fl => elem.to_float32().ok().map(SelectorValue::Float),
        SelectorVr::Fd => elem.to_float64().ok().map(SelectorValue::Double),
        SelectorVr::Ds => elem.to_float64().ok().map(SelectorValue::Decimal),
        SelectorVr::Sq => None,
    }
}

/// Reads the first attribute tag of an AT-valued element
fn first_tag(elem: &InMemElement) -> Option<dicom_core::Tag> {
    match elem.value().primitive() {
        Some(PrimitiveValue::Tags(tags)) => tags.first().copied(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom_core::smallvec::smallvec;
    use dicom_core::{DataElement, PrimitiveValue, Tag, VR};
    use rstest::rstest;

    fn selector_item(container: Tag, vr: VR, value: PrimitiveValue) -> InMemDicomObject {
        InMemDicomObject::from_element_iter([DataElement::new(container, vr, value)])
    }

    #[rstest]
    #[case(SelectorVr::Cs, Tag(0x0072, 0x0062), VR::CS, PrimitiveValue::from("BREAST"), SelectorValue::Str("BREAST".to_string()))]
    #[case(SelectorVr::Lo, Tag(0x0072, 0x0066), VR::LO, PrimitiveValue::from("Some description"), SelectorValue::Str("Some description".to_string()))]
    #[case(SelectorVr::Lt, Tag(0x0072, 0x0068), VR::LT, PrimitiveValue::from("long text"), SelectorValue::Str("long text".to_string()))]
    #[case(SelectorVr::Pn, Tag(0x0072, 0x006A), VR::PN, PrimitiveValue::from("Doe^John"), SelectorValue::Str("Doe^John".to_string()))]
    #[case(SelectorVr::Sh, Tag(0x0072, 0x006C), VR::SH, PrimitiveValue::from("SHORT"), SelectorValue::Str("SHORT".to_string()))]
    #[case(SelectorVr::St, Tag(0x0072, 0x006E), VR::ST, PrimitiveValue::from("short text"), SelectorValue::Str("short text".to_string()))]
    #[case(SelectorVr::Ut, Tag(0x0072, 0x0070), VR::UT, PrimitiveValue::from("unlimited"), SelectorValue::Str("unlimited".to_string()))]
    #[case(SelectorVr::Is, Tag(0x0072, 0x0064), VR::IS, PrimitiveValue::from("42"), SelectorValue::Int(42))]
    #[case(SelectorVr::Sl, Tag(0x0072, 0x007C), VR::SL, PrimitiveValue::from(-7_i32), SelectorValue::Int(-7))]
    #[case(SelectorVr::Ul, Tag(0x0072, 0x0078), VR::UL, PrimitiveValue::from(7_u32), SelectorValue::Uint(7))]
    #[case(SelectorVr::Us, Tag(0x0072, 0x007A), VR::US, PrimitiveValue::from(3_u16), SelectorValue::UShort(3))]
    #[case(SelectorVr::Ss, Tag(0x0072, 0x007E), VR::SS, PrimitiveValue::from(-3_i16), SelectorValue::Short(-3))]
    #[case(SelectorVr::Fl, Tag(0x0072, 0x0076), VR::FL, PrimitiveValue::from(1.5_f32), SelectorValue::Float(1.5))]
    #[case(SelectorVr::Fd, Tag(0x0072, 0x0074), VR::FD, PrimitiveValue::from(2.25_f64), SelectorValue::Double(2.25))]
    #[case(SelectorVr::Ds, Tag(0x0072, 0x0072), VR::DS, PrimitiveValue::from("1.25"), SelectorValue::Decimal(1.25))]
    fn test_extract_each_vr(
        #[case] vr: SelectorVr,
        #[case] container: Tag,
        #[case] element_vr: VR,
        #[case] value: PrimitiveValue,
        #[case] expected: SelectorValue,
    ) {
        let item = selector_item(container, element_vr, value);
        assert_eq!(extract_selector_value(&item, vr), Extraction::Value(expected));
    }

    #[test]
    fn test_extract_at_value() {
        let item = selector_item(
            Tag(0x0072, 0x0060),
            VR::AT,
            PrimitiveValue::Tags(smallvec![Tag(0x0018, 0x0015)]),
        );
        assert_eq!(
            extract_selector_value(&item, SelectorVr::At),
            Extraction::Value(SelectorValue::Attr(Tag(0x0018, 0x0015)))
        );
    }

    #[test]
    fn test_extract_takes_first_value() {
        let item = selector_item(
            Tag(0x0072, 0x0062),
            VR::CS,
            PrimitiveValue::Strs(smallvec!["R CC".to_string(), "L CC".to_string()]),
        );
        // multi-valued containers resolve to their first element
        assert_eq!(
            extract_selector_value(&item, SelectorVr::Cs),
            Extraction::Value(SelectorValue::Str("R CC".to_string()))
        );
    }

    #[test]
    fn test_sq_is_not_applicable() {
        let item = InMemDicomObject::new_empty();
        assert_eq!(
            extract_selector_value(&item, SelectorVr::Sq),
            Extraction::NotApplicable
        );
    }

    #[test]
    fn test_missing_container_is_unset() {
        let item = InMemDicomObject::new_empty();
        assert_eq!(
            extract_selector_value(&item, SelectorVr::Cs),
            Extraction::Unset
        );
    }

    #[test]
    fn test_wrong_container_is_unset() {
        // value sits in the CS container, but the selector claims US
        let item = selector_item(Tag(0x0072, 0x0062), VR::CS, PrimitiveValue::from("BREAST"));
        assert_eq!(
            extract_selector_value(&item, SelectorVr::Us),
            Extraction::Unset
        );
    }

    #[test]
    fn test_into_value() {
        assert_eq!(
            Extraction::Value(SelectorValue::Int(1)).into_value(),
            Some(SelectorValue::Int(1))
        );
        assert_eq!(Extraction::NotApplicable.into_value(), None);
        assert_eq!(Extraction::Unset.into_value(), None);
    }
}
