use crate::types::{RelativeTimeUnits, SelectorCategory};
use std::fmt;

/// A literal time offset from the current study
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct RelativeTime {
    /// Signed offset; negative values point into the past
    pub value: i32,

    /// Units of the offset
    pub units: RelativeTimeUnits,
}

impl fmt::Display for RelativeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.units)
    }
}

/// A resolved image set descriptor
///
/// One is produced per time-based image set entry of a hanging protocol,
/// in document order. Immutable engine output; has no identity beyond
/// its set number and category.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ImageSet {
    /// Image Set Number (0072,0032)
    pub set_number: u16,

    /// Temporal category of the set
    pub category: SelectorCategory,

    /// Human-readable Image Set Label (0072,0040), if present
    pub label: Option<String>,

    /// Time offset; present only when category is `RelativeTime`
    pub relative_time: Option<RelativeTime>,

    /// Ordinal prior rank pair; present only when category is `AbstractPrior`
    pub prior_value: Option<(i32, i32)>,
}

impl ImageSet {
    /// Creates a base descriptor with no category parameters
    pub fn new(set_number: u16, category: SelectorCategory) -> Self {
        Self {
            set_number,
            category,
            label: None,
            relative_time: None,
            prior_value: None,
        }
    }

    /// Attaches a relative-time parameter
    pub fn with_relative_time(mut self, value: i32, units: RelativeTimeUnits) -> Self {
        self.relative_time = Some(RelativeTime { value, units });
        self
    }

    /// Attaches an abstract-prior parameter
    pub fn with_prior_value(mut self, prior: (i32, i32)) -> Self {
        self.prior_value = Some(prior);
        self
    }

    /// Attaches a label
    pub fn with_label(mut self, label: String) -> Self {
        self.label = Some(label);
        self
    }
}

impl fmt::Display for ImageSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "set {} [{}]", self.set_number, self.category)?;
        if let Some(rt) = &self.relative_time {
            write!(f, " {}", rt)?;
        }
        if let Some((a, b)) = &self.prior_value {
            write!(f, " prior {}\\{}", a, b)?;
        }
        if let Some(label) = &self.label {
            write!(f, " \"{}\"", label)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_image_set_has_no_parameters() {
        let set = ImageSet::new(3, SelectorCategory::Current);
        assert_eq!(set.set_number, 3);
        assert_eq!(set.category, SelectorCategory::Current);
        assert!(set.relative_time.is_none());
        assert!(set.prior_value.is_none());
        assert!(set.label.is_none());
    }

    #[test]
    fn test_with_relative_time() {
        let set = ImageSet::new(1, SelectorCategory::RelativeTime)
            .with_relative_time(-1, RelativeTimeUnits::Years);
        assert_eq!(
            set.relative_time,
            Some(RelativeTime {
                value: -1,
                units: RelativeTimeUnits::Years,
            })
        );
        assert!(set.prior_value.is_none());
    }

    #[test]
    fn test_display() {
        let set = ImageSet::new(2, SelectorCategory::AbstractPrior)
            .with_prior_value((1, 1))
            .with_label("Prior MG Breast".to_string());
        assert_eq!(
            set.to_string(),
            "set 2 [ABSTRACT_PRIOR] prior 1\\1 \"Prior MG Breast\""
        );
    }
}
