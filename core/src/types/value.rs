use dicom_core::Tag;
use std::fmt;

/// A typed attribute value resolved from a selector's value container
///
/// One variant family per VR group:
/// - `Attr`: AT
/// - `Str`: CS, LO, LT, PN, SH, ST, UT
/// - `Int`: IS, SL
/// - `Uint`: UL
/// - `UShort`: US
/// - `Short`: SS
/// - `Float`: FL
/// - `Double`: FD
/// - `Decimal`: DS
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorValue {
    Attr(Tag),
    Str(String),
    Int(i32),
    Uint(u32),
    UShort(u16),
    Short(i16),
    Float(f32),
    Double(f64),
    Decimal(f64),
}

impl SelectorValue {
    /// Returns the string content, for text-valued variants
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SelectorValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value widened to f64, for numeric variants
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SelectorValue::Int(v) => Some(*v as f64),
            SelectorValue::Uint(v) => Some(*v as f64),
            SelectorValue::UShort(v) => Some(*v as f64),
            SelectorValue::Short(v) => Some(*v as f64),
            SelectorValue::Float(v) => Some(*v as f64),
            SelectorValue::Double(v) => Some(*v),
            SelectorValue::Decimal(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for SelectorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectorValue::Attr(tag) => write!(f, "{}", tag),
            SelectorValue::Str(s) => write!(f, "{}", s),
            SelectorValue::Int(v) => write!(f, "{}", v),
            SelectorValue::Uint(v) => write!(f, "{}", v),
            SelectorValue::UShort(v) => write!(f, "{}", v),
            SelectorValue::Short(v) => write!(f, "{}", v),
            SelectorValue::Float(v) => write!(f, "{}", v),
            SelectorValue::Double(v) => write!(f, "{}", v),
            SelectorValue::Decimal(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(feature = "json")]
impl serde::Serialize for SelectorValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            SelectorValue::Attr(tag) => serializer.serialize_str(&tag.to_string()),
            SelectorValue::Str(s) => serializer.serialize_str(s),
            SelectorValue::Int(v) => serializer.serialize_i32(*v),
            SelectorValue::Uint(v) => serializer.serialize_u32(*v),
            SelectorValue::UShort(v) => serializer.serialize_u16(*v),
            SelectorValue::Short(v) => serializer.serialize_i16(*v),
            SelectorValue::Float(v) => serializer.serialize_f32(*v),
            SelectorValue::Double(v) | SelectorValue::Decimal(v) => serializer.serialize_f64(*v),
        }
    }
}

/// Serializes a tag in its conventional `(gggg,eeee)` spelling
#[cfg(feature = "json")]
pub(crate) fn serialize_tag<S>(tag: &Tag, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&tag.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(
            SelectorValue::Str("BREAST".to_string()).as_str(),
            Some("BREAST")
        );
        assert_eq!(SelectorValue::Int(3).as_str(), None);
    }

    #[test]
    fn test_as_f64_widening() {
        assert_eq!(SelectorValue::Int(-2).as_f64(), Some(-2.0));
        assert_eq!(SelectorValue::UShort(7).as_f64(), Some(7.0));
        assert_eq!(SelectorValue::Decimal(1.5).as_f64(), Some(1.5));
        assert_eq!(SelectorValue::Attr(Tag(0x0008, 0x0060)).as_f64(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(SelectorValue::Str("MG".to_string()).to_string(), "MG");
        assert_eq!(SelectorValue::Short(-1).to_string(), "-1");
    }
}
