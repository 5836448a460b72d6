//! Layout direction tokens derived from the RTL flag.
//!
//! The row mapping is deliberately inverted: RTL yields `row` and LTR
//! yields `row-reverse`. Screen layouts are authored right-to-left and
//! mirrored for LTR languages, so downstream layout depends on this.

use serde::Serialize;

/// Flex row direction token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowDirection {
    Row,
    RowReverse,
}

impl RowDirection {
    /// Row direction for the given RTL flag (inverted, see module docs).
    pub fn for_rtl(rtl: bool) -> Self {
        if rtl {
            Self::Row
        } else {
            Self::RowReverse
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Self::Row => Self::RowReverse,
            Self::RowReverse => Self::Row,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::RowReverse => "row-reverse",
        }
    }
}

/// Flex alignment token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexAlign {
    FlexStart,
    FlexEnd,
}

impl FlexAlign {
    /// Alignment for the logical start edge.
    pub fn start(rtl: bool) -> Self {
        if rtl {
            Self::FlexStart
        } else {
            Self::FlexEnd
        }
    }

    /// Alignment for the logical end edge.
    pub fn end(rtl: bool) -> Self {
        if rtl {
            Self::FlexEnd
        } else {
            Self::FlexStart
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FlexStart => "flex-start",
            Self::FlexEnd => "flex-end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Right,
}

impl TextAlign {
    pub fn for_rtl(rtl: bool) -> Self {
        if rtl {
            Self::Right
        } else {
            Self::Left
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Rtl,
    Ltr,
}

impl TextDirection {
    pub fn for_rtl(rtl: bool) -> Self {
        if rtl {
            Self::Rtl
        } else {
            Self::Ltr
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rtl => "rtl",
            Self::Ltr => "ltr",
        }
    }
}

/// Every direction token for one RTL flag, taken together so callers
/// never mix values from before and after a language change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowDirections {
    pub row: RowDirection,
    pub row_reverse: RowDirection,
    pub flex_start: FlexAlign,
    pub flex_end: FlexAlign,
    pub text_align: TextAlign,
    pub rtl: bool,
    pub direction: TextDirection,
}

impl RowDirections {
    pub fn for_rtl(rtl: bool) -> Self {
        let row = RowDirection::for_rtl(rtl);
        Self {
            row,
            row_reverse: row.reversed(),
            flex_start: FlexAlign::start(rtl),
            flex_end: FlexAlign::end(rtl),
            text_align: TextAlign::for_rtl(rtl),
            rtl,
            direction: TextDirection::for_rtl(rtl),
        }
    }
}
