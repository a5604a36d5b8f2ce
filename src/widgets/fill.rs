//! Fill: a rectangle of one repeated glyph.

use std::any::Any;

use crate::component::{Component, DrawContext};
use crate::event::input::InputEvent;
use crate::geometry::Size;
use crate::surface::{Attribute, Glyph, RenderSurface};

/// Fills its assigned region with a single glyph.
///
/// The workhorse test and placeholder component: a fixed preferred size, an
/// optional focusable flag, and completely predictable paint output.
pub struct Fill {
    glyph: char,
    attr: Attribute,
    preferred: Size,
    focusable: bool,
    focused: bool,
}

impl Fill {
    /// A fill of `glyph` preferring the given extent.
    pub fn new(glyph: char, width: i32, height: i32) -> Self {
        Self {
            glyph,
            attr: Attribute::default(),
            preferred: Size::new(width, height),
            focusable: false,
            focused: false,
        }
    }

    /// Boxed shorthand for tree insertion.
    pub fn boxed(glyph: char, width: i32, height: i32) -> Box<dyn Component> {
        Box::new(Self::new(glyph, width, height))
    }

    /// Make this fill focusable (builder).
    pub fn focusable(mut self) -> Self {
        self.focusable = true;
        self
    }

    /// Set the paint attribute (builder).
    pub fn with_attr(mut self, attr: Attribute) -> Self {
        self.attr = attr;
        self
    }

    /// Replace the fill glyph. Pair with
    /// [`ComponentTree::mark_dirty`](crate::tree::ComponentTree::mark_dirty)
    /// so the change is repainted.
    pub fn set_glyph(&mut self, glyph: char) {
        self.glyph = glyph;
    }

    /// Whether this fill currently holds the focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

impl Component for Fill {
    fn type_name(&self) -> &str {
        "Fill"
    }

    fn preferred_size(&self) -> Size {
        self.preferred
    }

    fn can_focus(&self) -> bool {
        self.focusable
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn draw(&self, surface: &mut dyn RenderSurface, ctx: &DrawContext) {
        let glyph = Glyph::new(self.glyph, self.attr.clone());
        surface.fill(ctx.size.to_rect(), &glyph);
    }

    fn on_event(&mut self, _event: &InputEvent) -> bool {
        false
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================
