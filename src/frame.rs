//! Frame decorators: borders, titles, and scrollbar-bearing frames.
//!
//! A frame is a container holding one inner component: the frame component
//! paints the border, an [`InsetLayout`](crate::layout::InsetLayout) keeps
//! the inner component out of it. Which of the two border attributes is used
//! depends on whether the focus currently sits inside the decorated subtree
//! (`focus_within` on the draw context): `highlight` when it does,
//! `lowlight` otherwise.

use crate::component::{Component, DrawContext};
use crate::geometry::{Size, Thickness};
use crate::layout::{Axis, InsetLayout};
use crate::scroll::SharedScrollModel;
use crate::surface::{border_glyphs, Attribute, BorderGlyphs, Glyph, RenderSurface};
use crate::tree::{ComponentId, ComponentTree};

// ---------------------------------------------------------------------------
// Attribute pair
// ---------------------------------------------------------------------------

/// The two alternate paint styles a decorator selects between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributePair {
    pub highlight: Attribute,
    pub lowlight: Attribute,
}

impl Default for AttributePair {
    fn default() -> Self {
        Self {
            highlight: Attribute::new().bold(),
            lowlight: Attribute::new(),
        }
    }
}

impl AttributePair {
    /// Pick the attribute matching the focus state.
    pub fn select(&self, focus_within: bool) -> &Attribute {
        if focus_within {
            &self.highlight
        } else {
            &self.lowlight
        }
    }
}

// ---------------------------------------------------------------------------
// Border painting
// ---------------------------------------------------------------------------

/// Paint a one-cell box border along the perimeter of `size`.
fn draw_border(
    surface: &mut dyn RenderSurface,
    size: Size,
    glyphs: &BorderGlyphs,
    attr: &Attribute,
) {
    if size.is_empty() {
        return;
    }
    let right = size.width - 1;
    let bottom = size.height - 1;

    for x in 1..right {
        surface.write(x, 0, Glyph::new(glyphs.horizontal, attr.clone()));
        surface.write(x, bottom, Glyph::new(glyphs.horizontal, attr.clone()));
    }
    for y in 1..bottom {
        surface.write(0, y, Glyph::new(glyphs.vertical, attr.clone()));
        surface.write(right, y, Glyph::new(glyphs.vertical, attr.clone()));
    }

    surface.write(0, 0, Glyph::new(glyphs.top_left, attr.clone()));
    surface.write(right, 0, Glyph::new(glyphs.top_right, attr.clone()));
    surface.write(0, bottom, Glyph::new(glyphs.bottom_left, attr.clone()));
    surface.write(right, bottom, Glyph::new(glyphs.bottom_right, attr.clone()));
}

/// The cell index of a slider within a track of `track_len` cells.
///
/// `round(fraction * (track_len - 1))`, or `None` for an empty track.
fn slider_index(track_len: i32, fraction: f64) -> Option<i32> {
    if track_len <= 0 {
        return None;
    }
    let index = (fraction * (track_len - 1) as f64).round() as i32;
    Some(index.clamp(0, track_len - 1))
}

// ---------------------------------------------------------------------------
// SolidFrame
// ---------------------------------------------------------------------------

/// A plain one-cell border around an inner component.
pub struct SolidFrame {
    attributes: AttributePair,
}

impl SolidFrame {
    /// A frame with the default highlight/lowlight pair.
    pub fn new() -> Self {
        Self { attributes: AttributePair::default() }
    }

    /// Override the attribute pair (builder).
    pub fn with_attributes(mut self, attributes: AttributePair) -> Self {
        self.attributes = attributes;
        self
    }

    /// Insert a framed component: a `SolidFrame` node with `inner` as its
    /// only child and the matching inset layout installed.
    pub fn wrap(
        tree: &mut ComponentTree,
        parent: Option<ComponentId>,
        inner: Box<dyn Component>,
    ) -> (ComponentId, ComponentId) {
        let frame = match parent {
            Some(parent) => tree.insert_child(parent, Box::new(SolidFrame::new())),
            None => tree.insert(Box::new(SolidFrame::new())),
        };
        let inner = tree.insert_child(frame, inner);
        tree.set_layout(frame, Box::new(InsetLayout::new(Thickness::all(1))));
        (frame, inner)
    }
}

impl Default for SolidFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SolidFrame {
    fn type_name(&self) -> &str {
        "SolidFrame"
    }

    fn draw(&self, surface: &mut dyn RenderSurface, ctx: &DrawContext) {
        let glyphs = border_glyphs(surface.capabilities());
        let attr = self.attributes.select(ctx.focus_within);
        draw_border(surface, ctx.size, glyphs, attr);
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

// ---------------------------------------------------------------------------
// TitledFrame
// ---------------------------------------------------------------------------

/// A border with a caption embedded in the top edge.
pub struct TitledFrame {
    title: String,
    attributes: AttributePair,
}

impl TitledFrame {
    /// A titled frame with the default attribute pair.
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), attributes: AttributePair::default() }
    }

    /// Override the attribute pair (builder).
    pub fn with_attributes(mut self, attributes: AttributePair) -> Self {
        self.attributes = attributes;
        self
    }

    /// The caption text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the caption text.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }
}

impl Component for TitledFrame {
    fn type_name(&self) -> &str {
        "TitledFrame"
    }

    fn draw(&self, surface: &mut dyn RenderSurface, ctx: &DrawContext) {
        let glyphs = border_glyphs(surface.capabilities());
        let attr = self.attributes.select(ctx.focus_within).clone();
        draw_border(surface, ctx.size, glyphs, &attr);

        // Caption sits one cell in from the corner, truncated so at least
        // one border cell survives on each side of the padded text.
        let room = ctx.size.width - 6;
        if room <= 0 || ctx.size.height == 0 || self.title.is_empty() {
            return;
        }
        let caption: String = self.title.chars().take(room as usize).collect();
        surface.put_str(2, 0, &format!(" {caption} "), &attr);
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

// ---------------------------------------------------------------------------
// ScrollFrame
// ---------------------------------------------------------------------------

/// A border whose south and east edges double as scrollbar tracks.
///
/// The slider positions come from the [`ScrollModel`](crate::scroll::ScrollModel)
/// shared with the viewport this frame decorates; an axis that is not
/// scrollable renders as a plain border edge.
pub struct ScrollFrame {
    model: SharedScrollModel,
    attributes: AttributePair,
}

impl ScrollFrame {
    /// A scroll frame reading slider state from `model`.
    pub fn new(model: SharedScrollModel) -> Self {
        Self { model, attributes: AttributePair::default() }
    }

    /// Override the attribute pair (builder).
    pub fn with_attributes(mut self, attributes: AttributePair) -> Self {
        self.attributes = attributes;
        self
    }
}

impl Component for ScrollFrame {
    fn type_name(&self) -> &str {
        "ScrollFrame"
    }

    fn draw(&self, surface: &mut dyn RenderSurface, ctx: &DrawContext) {
        let glyphs = border_glyphs(surface.capabilities());
        let attr = self.attributes.select(ctx.focus_within).clone();
        draw_border(surface, ctx.size, glyphs, &attr);

        let model = self.model.borrow();
        let track_w = ctx.size.width - 2;
        let track_h = ctx.size.height - 2;

        if model.is_scrollable(Axis::Horizontal) {
            if let Some(index) = slider_index(track_w, model.fraction(Axis::Horizontal)) {
                surface.write(
                    1 + index,
                    ctx.size.height - 1,
                    Glyph::new(glyphs.slider, attr.clone()),
                );
            }
        }
        if model.is_scrollable(Axis::Vertical) {
            if let Some(index) = slider_index(track_h, model.fraction(Axis::Vertical)) {
                surface.write(
                    ctx.size.width - 1,
                    1 + index,
                    Glyph::new(glyphs.slider, attr),
                );
            }
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

// ---------------------------------------------------------------------------
// Standalone scrollbars
// ---------------------------------------------------------------------------

/// A one-cell-wide vertical scrollbar track with a slider glyph.
pub struct VerticalScrollbar {
    model: SharedScrollModel,
    attributes: AttributePair,
}

impl VerticalScrollbar {
    /// A scrollbar reading slider state from `model`.
    pub fn new(model: SharedScrollModel) -> Self {
        Self { model, attributes: AttributePair::default() }
    }

    /// Override the attribute pair (builder).
    pub fn with_attributes(mut self, attributes: AttributePair) -> Self {
        self.attributes = attributes;
        self
    }
}

impl Component for VerticalScrollbar {
    fn type_name(&self) -> &str {
        "VerticalScrollbar"
    }

    fn preferred_size(&self) -> Size {
        Size::new(1, 0)
    }

    fn draw(&self, surface: &mut dyn RenderSurface, ctx: &DrawContext) {
        let glyphs = border_glyphs(surface.capabilities());
        let attr = self.attributes.select(ctx.focus_within);
        let model = self.model.borrow();

        let slider = if model.is_scrollable(Axis::Vertical) {
            slider_index(ctx.size.height, model.fraction(Axis::Vertical))
        } else {
            None
        };

        for y in 0..ctx.size.height {
            let ch = if slider == Some(y) { glyphs.slider } else { glyphs.vertical };
            for x in 0..ctx.size.width {
                surface.write(x, y, Glyph::new(ch, attr.clone()));
            }
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

/// A one-cell-tall horizontal scrollbar track with a slider glyph.
pub struct HorizontalScrollbar {
    model: SharedScrollModel,
    attributes: AttributePair,
}

impl HorizontalScrollbar {
    /// A scrollbar reading slider state from `model`.
    pub fn new(model: SharedScrollModel) -> Self {
        Self { model, attributes: AttributePair::default() }
    }

    /// Override the attribute pair (builder).
    pub fn with_attributes(mut self, attributes: AttributePair) -> Self {
        self.attributes = attributes;
        self
    }
}

impl Component for HorizontalScrollbar {
    fn type_name(&self) -> &str {
        "HorizontalScrollbar"
    }

    fn preferred_size(&self) -> Size {
        Size::new(0, 1)
    }

    fn draw(&self, surface: &mut dyn RenderSurface, ctx: &DrawContext) {
        let glyphs = border_glyphs(surface.capabilities());
        let attr = self.attributes.select(ctx.focus_within);
        let model = self.model.borrow();

        let slider = if model.is_scrollable(Axis::Horizontal) {
            slider_index(ctx.size.width, model.fraction(Axis::Horizontal))
        } else {
            None
        };

        for x in 0..ctx.size.width {
            let ch = if slider == Some(x) { glyphs.slider } else { glyphs.horizontal };
            for y in 0..ctx.size.height {
                surface.write(x, y, Glyph::new(ch, attr.clone()));
            }
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================
