use std::fmt;

/// Image Set Selector Usage Flag (0072,0024)
///
/// Controls whether a selector participates in matching. Per the standard,
/// `NO_MATCH` selectors are informational and never exclude a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum SelectorUsageFlag {
    /// Selector is required to match
    Match,
    /// Selector is not used for matching
    NoMatch,
    /// Unrecognized or absent usage flag
    #[default]
    Unknown,
}

impl SelectorUsageFlag {
    /// Parses the usage flag from its CS code
    ///
    /// Unrecognized codes map to `Unknown`, never an error.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        match s.trim() {
            "MATCH" => SelectorUsageFlag::Match,
            "NO_MATCH" => SelectorUsageFlag::NoMatch,
            _ => SelectorUsageFlag::Unknown,
        }
    }

    /// Returns the CS code for this flag
    pub fn code(&self) -> &'static str {
        match self {
            SelectorUsageFlag::Match => "MATCH",
            SelectorUsageFlag::NoMatch => "NO_MATCH",
            SelectorUsageFlag::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for SelectorUsageFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Image Set Selector Category (0072,0034)
///
/// The temporal category of a time-based image set: the current study,
/// a literal time offset, or an ordinal rank among available priors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum SelectorCategory {
    /// The current study
    Current,
    /// A literal time offset from the current study
    RelativeTime,
    /// An ordinal rank among available priors
    AbstractPrior,
    /// Unrecognized or absent category
    #[default]
    Unknown,
}

impl SelectorCategory {
    /// Parses the category from its CS code
    ///
    /// Unrecognized codes map to `Unknown`, never an error.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        match s.trim() {
            "CURRENT" => SelectorCategory::Current,
            "RELATIVE_TIME" => SelectorCategory::RelativeTime,
            "ABSTRACT_PRIOR" => SelectorCategory::AbstractPrior,
            _ => SelectorCategory::Unknown,
        }
    }

    /// Returns the CS code for this category
    pub fn code(&self) -> &'static str {
        match self {
            SelectorCategory::Current => "CURRENT",
            SelectorCategory::RelativeTime => "RELATIVE_TIME",
            SelectorCategory::AbstractPrior => "ABSTRACT_PRIOR",
            SelectorCategory::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for SelectorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Relative Time Units (0072,003A)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum RelativeTimeUnits {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
    Unknown,
}

impl RelativeTimeUnits {
    /// Parses the time units from their CS code
    ///
    /// Unrecognized codes map to `Unknown`, never an error.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        match s.trim() {
            "SECONDS" => RelativeTimeUnits::Seconds,
            "MINUTES" => RelativeTimeUnits::Minutes,
            "HOURS" => RelativeTimeUnits::Hours,
            "DAYS" => RelativeTimeUnits::Days,
            "WEEKS" => RelativeTimeUnits::Weeks,
            "MONTHS" => RelativeTimeUnits::Months,
            "YEARS" => RelativeTimeUnits::Years,
            _ => RelativeTimeUnits::Unknown,
        }
    }

    /// Returns the CS code for these units
    pub fn code(&self) -> &'static str {
        match self {
            RelativeTimeUnits::Seconds => "SECONDS",
            RelativeTimeUnits::Minutes => "MINUTES",
            RelativeTimeUnits::Hours => "HOURS",
            RelativeTimeUnits::Days => "DAYS",
            RelativeTimeUnits::Weeks => "WEEKS",
            RelativeTimeUnits::Months => "MONTHS",
            RelativeTimeUnits::Years => "YEARS",
            RelativeTimeUnits::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for RelativeTimeUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
