use crate::extraction::element_value;
use crate::selection::selector::ResolvedSelector;
use crate::types::{SelectorUsageFlag, SelectorValue, SelectorVr};
use dicom_core::Tag;
use dicom_object::InMemDicomObject;

/// A pool of candidate metadata that selectors can be matched against
///
/// The selection engine itself never filters; matching is an opt-in layer
/// on top of resolved selectors. Implement this for whatever carries the
/// candidate study or series attributes.
pub trait AttributeSource {
    /// Returns the candidate's typed value for the given attribute, if any
    fn attribute_value(&self, tag: Tag) -> Option<SelectorValue>;
}

impl AttributeSource for InMemDicomObject {
    fn attribute_value(&self, tag: Tag) -> Option<SelectorValue> {
        let elem = self.element(tag).ok()?;
        let vr = SelectorVr::from_vr(elem.vr())?;
        element_value(elem, vr)
    }
}

impl ResolvedSelector {
    /// Decides whether a candidate value satisfies this selector
    ///
    /// `MATCH` selectors require equality with the candidate's value;
    /// a missing candidate attribute fails them. `NO_MATCH` selectors are
    /// informational and never exclude, and so do unrecognized flags.
    pub fn permits(&self, candidate: Option<&SelectorValue>) -> bool {
        match self.usage_flag {
            SelectorUsageFlag::Match => candidate == Some(&self.value),
            SelectorUsageFlag::NoMatch | SelectorUsageFlag::Unknown => true,
        }
    }
}

/// Checks a candidate source against every resolved selector
///
/// Returns `true` when all selectors permit the candidate. An empty
/// selector list permits everything.
pub fn matches_source<S: AttributeSource>(selectors: &[ResolvedSelector], source: &S) -> bool {
    selectors
        .iter()
        .all(|selector| selector.permits(source.attribute_value(selector.attribute).as_ref()))
}
