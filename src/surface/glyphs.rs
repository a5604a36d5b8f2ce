//! Border glyph tables with an ASCII fallback.
//!
//! Frames and scrollbars pick a table based on the surface's capabilities so
//! that a surface without unicode support still gets a drawable border.

use super::Capabilities;

/// The set of characters needed to draw a box border and a scrollbar track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
    /// The slider glyph drawn inside a scrollbar track.
    pub slider: char,
}

/// Unicode box-drawing characters.
pub const UNICODE_BORDER: BorderGlyphs = BorderGlyphs {
    top_left: '┌',
    top_right: '┐',
    bottom_left: '└',
    bottom_right: '┘',
    horizontal: '─',
    vertical: '│',
    slider: '█',
};

/// 7-bit ASCII substitutes.
pub const ASCII_BORDER: BorderGlyphs = BorderGlyphs {
    top_left: '+',
    top_right: '+',
    bottom_left: '+',
    bottom_right: '+',
    horizontal: '-',
    vertical: '|',
    slider: '#',
};

/// Select the border glyph table matching the surface capabilities.
pub fn border_glyphs(capabilities: Capabilities) -> &'static BorderGlyphs {
    if capabilities.supports_unicode {
        &UNICODE_BORDER
    } else {
        &ASCII_BORDER
    }
}
