use crate::selection::ResolvedSelector;
use crate::types::ImageSet;
use std::fmt;

/// Text report formatter for a selection run
pub struct TextReport<'a> {
    image_sets: &'a [ImageSet],
    selectors: Option<&'a [Vec<ResolvedSelector>]>,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report over the selected image sets
    pub fn new(image_sets: &'a [ImageSet]) -> Self {
        Self {
            image_sets,
            selectors: None,
        }
    }

    /// Adds per-definition resolved selectors to the report
    pub fn with_selectors(mut self, selectors: &'a [Vec<ResolvedSelector>]) -> Self {
        self.selectors = Some(selectors);
        self
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Selected Image Sets")?;
        writeln!(f, "===================")?;
        writeln!(f)?;

        if self.image_sets.is_empty() {
            writeln!(f, "(none)")?;
        }

        for set in self.image_sets {
            writeln!(f, "Set Number:     {}", set.set_number)?;
            writeln!(f, "Category:       {}", set.category)?;
            if let Some(rt) = &set.relative_time {
                writeln!(f, "Relative Time:  {}", rt)?;
            }
            if let Some((a, b)) = &set.prior_value {
                writeln!(f, "Prior Value:    {}\\{}", a, b)?;
            }
            if let Some(label) = &set.label {
                writeln!(f, "Label:          {}", label)?;
            }
            writeln!(f)?;
        }

        if let Some(selectors) = self.selectors {
            writeln!(f, "Resolved Selectors")?;
            writeln!(f, "------------------")?;
            for (index, definition) in selectors.iter().enumerate() {
                writeln!(f, "Definition {}:", index + 1)?;
                if definition.is_empty() {
                    writeln!(f, "  (no resolved values)")?;
                }
                for selector in definition {
                    writeln!(
                        f,
                        "  {} [{}] {} = {}",
                        selector.attribute, selector.vr, selector.usage_flag, selector.value
                    )?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ImageSet, RelativeTimeUnits, SelectorCategory};

    #[test]
    fn test_text_report_format() {
        let image_sets = vec![
            ImageSet::new(1, SelectorCategory::RelativeTime)
                .with_relative_time(-1, RelativeTimeUnits::Years)
                .with_label("Prior year".to_string()),
            ImageSet::new(2, SelectorCategory::AbstractPrior).with_prior_value((1, 1)),
        ];

        let report = TextReport::new(&image_sets);
        let output = format!("{}", report);

        assert!(output.contains("Selected Image Sets"));
        assert!(output.contains("Set Number:     1"));
        assert!(output.contains("Category:       RELATIVE_TIME"));
        assert!(output.contains("Relative Time:  -1 YEARS"));
        assert!(output.contains("Prior Value:    1\\1"));
        assert!(output.contains("Label:          Prior year"));
    }

    #[test]
    fn test_text_report_empty() {
        let report = TextReport::new(&[]);
        let output = format!("{}", report);
        assert!(output.contains("(none)"));
    }

    #[test]
    fn test_text_report_with_selectors() {
        use crate::types::{SelectorUsageFlag, SelectorValue, SelectorVr};
        use dicom_core::Tag;

        let selectors = vec![vec![ResolvedSelector {
            attribute: Tag(0x0018, 0x0015),
            usage_flag: SelectorUsageFlag::NoMatch,
            vr: SelectorVr::Cs,
            value: SelectorValue::Str("BREAST".to_string()),
        }]];

        let report = TextReport::new(&[]).with_selectors(&selectors);
        let output = format!("{}", report);

        assert!(output.contains("Resolved Selectors"));
        assert!(output.contains("Definition 1:"));
        assert!(output.contains("[CS] NO_MATCH = BREAST"));
    }
}
