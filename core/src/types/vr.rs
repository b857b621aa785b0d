use dicom_core::{Tag, VR};
use std::fmt;

/// Selector value containers, one per supported VR (PS3.3 C.23.1)
pub const SELECTOR_AT_VALUE: Tag = Tag(0x0072, 0x0060);
pub const SELECTOR_CS_VALUE: Tag = Tag(0x0072, 0x0062);
pub const SELECTOR_IS_VALUE: Tag = Tag(0x0072, 0x0064);
pub const SELECTOR_LO_VALUE: Tag = Tag(0x0072, 0x0066);
pub const SELECTOR_LT_VALUE: Tag = Tag(0x0072, 0x0068);
pub const SELECTOR_PN_VALUE: Tag = Tag(0x0072, 0x006A);
pub const SELECTOR_SH_VALUE: Tag = Tag(0x0072, 0x006C);
pub const SELECTOR_ST_VALUE: Tag = Tag(0x0072, 0x006E);
pub const SELECTOR_UT_VALUE: Tag = Tag(0x0072, 0x0070);
pub const SELECTOR_DS_VALUE: Tag = Tag(0x0072, 0x0072);
pub const SELECTOR_FD_VALUE: Tag = Tag(0x0072, 0x0074);
pub const SELECTOR_FL_VALUE: Tag = Tag(0x0072, 0x0076);
pub const SELECTOR_UL_VALUE: Tag = Tag(0x0072, 0x0078);
pub const SELECTOR_US_VALUE: Tag = Tag(0x0072, 0x007A);
pub const SELECTOR_SL_VALUE: Tag = Tag(0x0072, 0x007C);
pub const SELECTOR_SS_VALUE: Tag = Tag(0x0072, 0x007E);

/// Value representation of an image set selector
///
/// Closed enumeration of the 16 VRs that have a dedicated
/// Selector<VR>Value container, plus `Sq` for sequence selectors
/// (recognized but never extracted). Any other VR code is not
/// representable here; `from_code` returns `None` for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "UPPERCASE"))]
pub enum SelectorVr {
    At,
    Cs,
    Is,
    Lo,
    Lt,
    Pn,
    Sh,
    St,
    Ut,
    Ds,
    Fd,
    Fl,
    Ul,
    Us,
    Sl,
    Ss,
    Sq,
}

impl SelectorVr {
    /// All VRs with a dedicated value container, in tag order
    pub const SUPPORTED: [SelectorVr; 16] = [
        SelectorVr::At,
        SelectorVr::Cs,
        SelectorVr::Is,
        SelectorVr::Lo,
        SelectorVr::Lt,
        SelectorVr::Pn,
        SelectorVr::Sh,
        SelectorVr::St,
        SelectorVr::Ut,
        SelectorVr::Ds,
        SelectorVr::Fd,
        SelectorVr::Fl,
        SelectorVr::Ul,
        SelectorVr::Us,
        SelectorVr::Sl,
        SelectorVr::Ss,
    ];

    /// Parses a SelectorAttributeVR (0072,0050) code
    ///
    /// Returns `None` for any code outside the recognized set.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "AT" => Some(SelectorVr::At),
            "CS" => Some(SelectorVr::Cs),
            "IS" => Some(SelectorVr::Is),
            "LO" => Some(SelectorVr::Lo),
            "LT" => Some(SelectorVr::Lt),
            "PN" => Some(SelectorVr::Pn),
            "SH" => Some(SelectorVr::Sh),
            "ST" => Some(SelectorVr::St),
            "UT" => Some(SelectorVr::Ut),
            "DS" => Some(SelectorVr::Ds),
            "FD" => Some(SelectorVr::Fd),
            "FL" => Some(SelectorVr::Fl),
            "UL" => Some(SelectorVr::Ul),
            "US" => Some(SelectorVr::Us),
            "SL" => Some(SelectorVr::Sl),
            "SS" => Some(SelectorVr::Ss),
            "SQ" => Some(SelectorVr::Sq),
            _ => None,
        }
    }

    /// Maps a concrete element VR to the selector VR, if supported
    pub fn from_vr(vr: VR) -> Option<Self> {
        match vr {
            VR::AT => Some(SelectorVr::At),
            VR::CS => Some(SelectorVr::Cs),
            VR::IS => Some(SelectorVr::Is),
            VR::LO => Some(SelectorVr::Lo),
            VR::LT => Some(SelectorVr::Lt),
            VR::PN => Some(SelectorVr::Pn),
            VR::SH => Some(SelectorVr::Sh),
            VR::ST => Some(SelectorVr::St),
            VR::UT => Some(SelectorVr::Ut),
            VR::DS => Some(SelectorVr::Ds),
            VR::FD => Some(SelectorVr::Fd),
            VR::FL => Some(SelectorVr::Fl),
            VR::UL => Some(SelectorVr::Ul),
            VR::US => Some(SelectorVr::Us),
            VR::SL => Some(SelectorVr::Sl),
            VR::SS => Some(SelectorVr::Ss),
            VR::SQ => Some(SelectorVr::Sq),
            _ => None,
        }
    }

    /// Returns the two-letter VR code
    pub fn code(&self) -> &'static str {
        match self {
            SelectorVr::At => "AT",
            SelectorVr::Cs => "CS",
            SelectorVr::Is => "IS",
            SelectorVr::Lo => "LO",
            SelectorVr::Lt => "LT",
            SelectorVr::Pn => "PN",
            SelectorVr::Sh => "SH",
            SelectorVr::St => "ST",
            SelectorVr::Ut => "UT",
            SelectorVr::Ds => "DS",
            SelectorVr::Fd => "FD",
            SelectorVr::Fl => "FL",
            SelectorVr::Ul => "UL",
            SelectorVr::Us => "US",
            SelectorVr::Sl => "SL",
            SelectorVr::Ss => "SS",
            SelectorVr::Sq => "SQ",
        }
    }

    /// Returns the Selector<VR>Value container tag for this VR
    ///
    /// `None` for `Sq`: sequence selectors carry no scalar container.
    pub fn value_tag(&self) -> Option<Tag> {
        match self {
            SelectorVr::At => Some(SELECTOR_AT_VALUE),
            SelectorVr::Cs => Some(SELECTOR_CS_VALUE),
            SelectorVr::Is => Some(SELECTOR_IS_VALUE),
            SelectorVr::Lo => Some(SELECTOR_LO_VALUE),
            SelectorVr::Lt => Some(SELECTOR_LT_VALUE),
            SelectorVr::Pn => Some(SELECTOR_PN_VALUE),
            SelectorVr::Sh => Some(SELECTOR_SH_VALUE),
            SelectorVr::St => Some(SELECTOR_ST_VALUE),
            SelectorVr::Ut => Some(SELECTOR_UT_VALUE),
            SelectorVr::Ds => Some(SELECTOR_DS_VALUE),
            SelectorVr::Fd => Some(SELECTOR_FD_VALUE),
            SelectorVr::Fl => Some(SELECTOR_FL_VALUE),
            SelectorVr::Ul => Some(SELECTOR_UL_VALUE),
            SelectorVr::Us => Some(SELECTOR_US_VALUE),
            SelectorVr::Sl => Some(SELECTOR_SL_VALUE),
            SelectorVr::Ss => Some(SELECTOR_SS_VALUE),
            SelectorVr::Sq => None,
        }
    }
}

impl fmt::Display for SelectorVr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
