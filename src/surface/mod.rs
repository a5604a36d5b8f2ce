//! Render surface abstraction: glyphs, attributes, capabilities, clipping.
//!
//! A [`RenderSurface`] is a bounded character grid that components paint into.
//! Writes outside the surface bounds are silently dropped — painting never
//! fails. The concrete in-memory grid is [`Canvas`]; [`ClipSurface`] wraps any
//! surface to translate a component's local coordinates and clamp its writes
//! to the region its parent delegated.

mod canvas;
mod glyphs;

pub use canvas::{Canvas, CellUpdate};
pub use glyphs::{border_glyphs, BorderGlyphs, ASCII_BORDER, UNICODE_BORDER};

use crate::geometry::{Point, Rect, Size};

// ---------------------------------------------------------------------------
// Attribute
// ---------------------------------------------------------------------------

/// Visual attributes for a single cell.
///
/// Colors are stored as optional strings (`"red"`, `"#rrggbb"`) and parsed at
/// the terminal driver boundary; the core treats them as opaque. The
/// highlight/lowlight contract consumed by frame decorators is simply a pair
/// of these.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct Attribute {
    pub fg: Option<String>,
    pub bg: Option<String>,
    pub bold: bool,
    pub dim: bool,
    pub underline: bool,
    pub reverse: bool,
}

impl Attribute {
    /// An attribute with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the foreground color (builder).
    pub fn fg(mut self, color: impl Into<String>) -> Self {
        self.fg = Some(color.into());
        self
    }

    /// Set the background color (builder).
    pub fn bg(mut self, color: impl Into<String>) -> Self {
        self.bg = Some(color.into());
        self
    }

    /// Enable bold (builder).
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Enable dim (builder).
    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    /// Enable reverse video (builder).
    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }
}

// ---------------------------------------------------------------------------
// Glyph
// ---------------------------------------------------------------------------

/// One character cell: a character plus its attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub attr: Attribute,
}

impl Glyph {
    /// Create a glyph from a character and attribute.
    pub fn new(ch: char, attr: Attribute) -> Self {
        Self { ch, attr }
    }

    /// A blank (space) glyph with default attributes.
    pub fn blank() -> Self {
        Self { ch: ' ', attr: Attribute::default() }
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Self::blank()
    }
}

impl From<char> for Glyph {
    fn from(ch: char) -> Self {
        Glyph { ch, attr: Attribute::default() }
    }
}

// ---------------------------------------------------------------------------
// Capabilities
// ---------------------------------------------------------------------------

/// What the output target can render.
///
/// Components supplying non-ASCII glyphs must consult `supports_unicode` and
/// substitute an ASCII-safe equivalent when it is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub supports_unicode: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self { supports_unicode: true }
    }
}

impl Capabilities {
    /// A surface limited to 7-bit ASCII output.
    pub const ASCII_ONLY: Capabilities = Capabilities { supports_unicode: false };
}

// ---------------------------------------------------------------------------
// RenderSurface
// ---------------------------------------------------------------------------

/// A bounded character grid that components paint into.
///
/// Object-safe; components receive `&mut dyn RenderSurface` for the duration
/// of a single draw call and must not retain it.
pub trait RenderSurface {
    /// The writable extent of this surface.
    fn size(&self) -> Size;

    /// What this surface can render.
    fn capabilities(&self) -> Capabilities;

    /// Write one glyph at (x, y). Out-of-bounds writes are no-ops.
    fn write(&mut self, x: i32, y: i32, glyph: Glyph);

    /// Fill a rectangle with copies of one glyph.
    ///
    /// The rectangle is clamped to the surface bounds by the per-cell write.
    fn fill(&mut self, rect: Rect, glyph: &Glyph) {
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.write(x, y, glyph.clone());
            }
        }
    }

    /// Write a run of characters starting at (x, y), all with one attribute.
    fn put_str(&mut self, x: i32, y: i32, text: &str, attr: &Attribute) {
        for (i, ch) in text.chars().enumerate() {
            self.write(x + i as i32, y, Glyph::new(ch, attr.clone()));
        }
    }
}

// ---------------------------------------------------------------------------
// ClipSurface
// ---------------------------------------------------------------------------

/// Translates a component's local coordinates onto a parent surface and
/// clamps every write to a delegated clip region.
///
/// `origin` is the component's top-left in the target surface's coordinates;
/// `clip` is the visible region in those same coordinates. A component always
/// paints as if it owned a surface of its assigned size starting at (0, 0) —
/// whatever falls outside the clip never reaches the target. This is the
/// clamp that makes over-painting children harmless.
pub struct ClipSurface<'a> {
    target: &'a mut dyn RenderSurface,
    origin: Point,
    local_size: Size,
    clip: Rect,
}

impl<'a> ClipSurface<'a> {
    /// Wrap `target`, exposing a local surface of `local_size` at `origin`,
    /// clipped to `clip` (in target coordinates).
    pub fn new(
        target: &'a mut dyn RenderSurface,
        origin: Point,
        local_size: Size,
        clip: Rect,
    ) -> Self {
        Self { target, origin, local_size, clip }
    }
}

impl RenderSurface for ClipSurface<'_> {
    fn size(&self) -> Size {
        self.local_size
    }

    fn capabilities(&self) -> Capabilities {
        self.target.capabilities()
    }

    fn write(&mut self, x: i32, y: i32, glyph: Glyph) {
        if x < 0 || y < 0 || x >= self.local_size.width || y >= self.local_size.height {
            return;
        }
        let tx = self.origin.x + x;
        let ty = self.origin.y + y;
        if self.clip.contains(tx, ty) {
            self.target.write(tx, ty, glyph);
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
