//! Viewports and scrolling: offset state, resize strategies, scroll panes.
//!
//! A viewport shows a window into an inner component larger than the visible
//! area. The state machine lives in [`ScrollModel`]: an offset into the inner
//! extent, re-clamped after every mutation so that
//! `0 <= offset <= max(0, extent - visible)` holds on both axes at all times.
//!
//! What happens to the offset when the viewport itself is resized is policy,
//! not mechanism: a [`ResizeStrategy`] is injected at construction and
//! consulted whenever the visible size changes.

use std::cell::RefCell;
use std::rc::Rc;

use crate::component::{Component, DrawContext};
use crate::event::input::{InputEvent, Key};
use crate::frame::ScrollFrame;
use crate::geometry::{Point, Rect, Size, Thickness};
use crate::layout::{Axis, InsetLayout, Layout};
use crate::surface::RenderSurface;
use crate::tree::{ComponentId, ComponentTree};

/// Shared handle to a viewport's scroll state.
///
/// The viewport mutates it during arrange and event handling; scrollbar
/// decorators read it while painting. Single-threaded by design.
pub type SharedScrollModel = Rc<RefCell<ScrollModel>>;

// ---------------------------------------------------------------------------
// ScrollModel
// ---------------------------------------------------------------------------

/// Offset/visible/extent state with the clamping invariant baked in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollModel {
    offset: Point,
    visible: Size,
    extent: Size,
}

impl ScrollModel {
    /// A model with zero offset, visible size, and extent.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current offset into the inner extent.
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// The viewport's own (visible) size.
    pub fn visible(&self) -> Size {
        self.visible
    }

    /// The inner component's full virtual extent.
    pub fn extent(&self) -> Size {
        self.extent
    }

    /// The largest valid offset: `max(0, extent - visible)` per axis.
    pub fn max_offset(&self) -> Point {
        Point::new(
            (self.extent.width - self.visible.width).max(0),
            (self.extent.height - self.visible.height).max(0),
        )
    }

    /// Whether the extent exceeds the visible size along `axis`.
    pub fn is_scrollable(&self, axis: Axis) -> bool {
        axis.main(self.extent) > axis.main(self.visible)
    }

    /// Jump to an absolute offset, clamped to the valid range.
    pub fn scroll_to(&mut self, target: Point) {
        let max = self.max_offset();
        self.offset = Point::new(target.x.clamp(0, max.x), target.y.clamp(0, max.y));
    }

    /// Scroll by a delta, clamped to the valid range.
    pub fn scroll_by(&mut self, dx: i32, dy: i32) {
        self.scroll_to(Point::new(self.offset.x + dx, self.offset.y + dy));
    }

    /// Update the visible size and re-clamp the offset.
    pub fn set_visible(&mut self, visible: Size) {
        self.visible = visible;
        self.scroll_to(self.offset);
    }

    /// Update the inner extent and re-clamp the offset.
    pub fn set_extent(&mut self, extent: Size) {
        self.extent = extent;
        self.scroll_to(self.offset);
    }

    /// Set the offset along `axis` from a slider fraction in [0, 1]:
    /// `offset = round(fraction * max(0, extent - visible))`, then clamped.
    pub fn set_fraction(&mut self, axis: Axis, fraction: f64) {
        let max = axis.main(self.extent.saturating_sub(self.visible)).max(0);
        let value = (fraction * max as f64).round() as i32;
        match axis {
            Axis::Horizontal => self.scroll_to(Point::new(value, self.offset.y)),
            Axis::Vertical => self.scroll_to(Point::new(self.offset.x, value)),
        }
    }

    /// The slider fraction along `axis`:
    /// `offset / max(1, extent - visible)`, saturated to [0, 1].
    pub fn fraction(&self, axis: Axis) -> f64 {
        let offset = match axis {
            Axis::Horizontal => self.offset.x,
            Axis::Vertical => self.offset.y,
        };
        let range = (axis.main(self.extent) - axis.main(self.visible)).max(1);
        (offset as f64 / range as f64).clamp(0.0, 1.0)
    }
}

// ---------------------------------------------------------------------------
// ResizeStrategy
// ---------------------------------------------------------------------------

/// Policy recomputing a viewport's offset when its visible size changes.
///
/// The returned offset is clamped by the caller, so strategies may return
/// out-of-range values without breaking the invariant.
pub trait ResizeStrategy {
    fn on_resize(
        &self,
        old_offset: Point,
        old_visible: Size,
        new_visible: Size,
        extent: Size,
    ) -> Point;
}

/// Keep the same top-left content cell visible; clamping may still pull the
/// offset back when the valid range shrinks.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreserveTopLeft;

impl ResizeStrategy for PreserveTopLeft {
    fn on_resize(
        &self,
        old_offset: Point,
        _old_visible: Size,
        _new_visible: Size,
        _extent: Size,
    ) -> Point {
        old_offset
    }
}

/// Keep the proportional scroll position: a viewport halfway down its content
/// stays halfway down after the resize.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreserveFraction;

impl ResizeStrategy for PreserveFraction {
    fn on_resize(
        &self,
        old_offset: Point,
        old_visible: Size,
        new_visible: Size,
        extent: Size,
    ) -> Point {
        let rescale = |offset: i32, old_range: i32, new_range: i32| -> i32 {
            if old_range <= 0 {
                0
            } else {
                let fraction = offset as f64 / old_range as f64;
                (fraction * new_range.max(0) as f64).round() as i32
            }
        };
        Point::new(
            rescale(
                old_offset.x,
                extent.width - old_visible.width,
                extent.width - new_visible.width,
            ),
            rescale(
                old_offset.y,
                extent.height - old_visible.height,
                extent.height - new_visible.height,
            ),
        )
    }
}

/// Stick to the bottom if the viewport was scrolled to the bottom before the
/// resize (the log-tail behavior); otherwise keep the top-left.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreserveBottom;

impl ResizeStrategy for PreserveBottom {
    fn on_resize(
        &self,
        old_offset: Point,
        old_visible: Size,
        new_visible: Size,
        extent: Size,
    ) -> Point {
        let old_max_y = (extent.height - old_visible.height).max(0);
        let was_at_bottom = old_max_y > 0 && old_offset.y == old_max_y;
        let y = if was_at_bottom {
            (extent.height - new_visible.height).max(0)
        } else {
            old_offset.y
        };
        Point::new(old_offset.x, y)
    }
}

// ---------------------------------------------------------------------------
// ViewportLayout
// ---------------------------------------------------------------------------

/// The layout installed on a viewport node.
///
/// Unlike every other layout, this one deliberately places its child outside
/// the container: the child is sized to the inner extent (`max(preferred,
/// visible)` per axis) and positioned at the negated scroll offset. Paint
/// clipping guarantees only the visible window reaches the surface.
pub struct ViewportLayout {
    model: SharedScrollModel,
    strategy: Box<dyn ResizeStrategy>,
}

impl ViewportLayout {
    /// Create the layout over a shared model with the given resize policy.
    pub fn new(model: SharedScrollModel, strategy: Box<dyn ResizeStrategy>) -> Self {
        Self { model, strategy }
    }
}

impl Layout for ViewportLayout {
    fn measure(&self, child_preferences: &[Size]) -> Size {
        // The viewport is happy at its content's preferred size; it only
        // scrolls when given less.
        child_preferences
            .iter()
            .fold(Size::ZERO, |acc, &pref| acc.max(pref))
    }

    fn arrange(&self, child_preferences: &[Size], size: Size) -> Vec<Rect> {
        let mut model = self.model.borrow_mut();

        if size != model.visible() {
            let next = self.strategy.on_resize(
                model.offset(),
                model.visible(),
                size,
                model.extent(),
            );
            model.set_visible(size);
            model.scroll_to(next);
        }

        let preferred = child_preferences
            .iter()
            .fold(Size::ZERO, |acc, &pref| acc.max(pref));
        model.set_extent(preferred.max(size));

        let offset = model.offset();
        let extent = model.extent();
        child_preferences
            .iter()
            .map(|_| Rect::at(Point::new(-offset.x, -offset.y), extent))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Viewport
// ---------------------------------------------------------------------------

/// The component living at a viewport node.
///
/// Paints nothing itself (its child covers it) but handles paging keys that
/// bubble up from the focused inner component.
pub struct Viewport {
    model: SharedScrollModel,
}

impl Viewport {
    /// Create a viewport component over a shared model.
    pub fn new(model: SharedScrollModel) -> Self {
        Self { model }
    }

    /// The shared scroll state.
    pub fn model(&self) -> &SharedScrollModel {
        &self.model
    }
}

impl Component for Viewport {
    fn type_name(&self) -> &str {
        "Viewport"
    }

    fn draw(&self, _surface: &mut dyn RenderSurface, _ctx: &DrawContext) {}

    fn on_event(&mut self, event: &InputEvent) -> bool {
        let InputEvent::Key(key) = event else {
            return false;
        };
        let mut model = self.model.borrow_mut();
        if !model.is_scrollable(Axis::Vertical) {
            return false;
        }
        let page = model.visible().height;
        match key.code {
            Key::PageUp => {
                model.scroll_by(0, -page);
                true
            }
            Key::PageDown => {
                model.scroll_by(0, page);
                true
            }
            _ => false,
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
// ScrollPane
// ---------------------------------------------------------------------------

/// A scroll frame wrapped around a viewport wrapped around inner content.
///
/// Construction wires all three nodes into the tree and shares one
/// [`ScrollModel`] between the viewport (which maintains it) and the frame's
/// scrollbars (which render from it).
pub struct ScrollPane {
    frame: ComponentId,
    viewport: ComponentId,
    inner: ComponentId,
    model: SharedScrollModel,
}

impl ScrollPane {
    /// Insert a scroll pane with the default [`PreserveTopLeft`] strategy.
    pub fn insert(
        tree: &mut ComponentTree,
        parent: Option<ComponentId>,
        inner: Box<dyn Component>,
    ) -> Self {
        Self::insert_with_strategy(tree, parent, inner, Box::new(PreserveTopLeft))
    }

    /// Insert a scroll pane with an explicit resize strategy.
    pub fn insert_with_strategy(
        tree: &mut ComponentTree,
        parent: Option<ComponentId>,
        inner: Box<dyn Component>,
        strategy: Box<dyn ResizeStrategy>,
    ) -> Self {
        let model: SharedScrollModel = Rc::new(RefCell::new(ScrollModel::new()));

        let frame_component = Box::new(ScrollFrame::new(model.clone()));
        let frame = match parent {
            Some(parent) => tree.insert_child(parent, frame_component),
            None => tree.insert(frame_component),
        };

        let viewport = tree.insert_child(frame, Box::new(Viewport::new(model.clone())));
        tree.set_layout(frame, Box::new(InsetLayout::new(Thickness::all(1))));

        let inner = tree.insert_child(viewport, inner);
        tree.set_layout(
            viewport,
            Box::new(ViewportLayout::new(model.clone(), strategy)),
        );

        Self { frame, viewport, inner, model }
    }

    /// The outer (frame) node — attach or remove the pane through this id.
    pub fn id(&self) -> ComponentId {
        self.frame
    }

    /// The viewport node.
    pub fn viewport(&self) -> ComponentId {
        self.viewport
    }

    /// The inner content node.
    pub fn inner(&self) -> ComponentId {
        self.inner
    }

    /// Read access to the scroll state.
    pub fn model(&self) -> std::cell::Ref<'_, ScrollModel> {
        self.model.borrow()
    }

    /// Scroll by a delta and record the repaint damage.
    pub fn scroll_by(&self, tree: &mut ComponentTree, dx: i32, dy: i32) {
        self.model.borrow_mut().scroll_by(dx, dy);
        tree.record_damage(tree.bounds(self.frame));
    }

    /// Jump to an absolute offset and record the repaint damage.
    pub fn scroll_to(&self, tree: &mut ComponentTree, target: Point) {
        self.model.borrow_mut().scroll_to(target);
        tree.record_damage(tree.bounds(self.frame));
    }

    /// Set a slider fraction along `axis` and record the repaint damage.
    pub fn set_fraction(&self, tree: &mut ComponentTree, axis: Axis, fraction: f64) {
        self.model.borrow_mut().set_fraction(axis, fraction);
        tree.record_damage(tree.bounds(self.frame));
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn model(extent: (i32, i32), visible: (i32, i32)) -> ScrollModel {
        let mut m = ScrollModel::new();
        m.set_extent(Size::new(extent.0, extent.1));
        m.set_visible(Size::new(visible.0, visible.1));
        m
    }

    // -----------------------------------------------------------------------
    // ScrollModel — clamping invariant
    // -----------------------------------------------------------------------

    #[test]
    fn new_model_is_zeroed() {
        let m = ScrollModel::new();
        assert_eq!(m.offset(), Point::ORIGIN);
        assert_eq!(m.max_offset(), Point::ORIGIN);
    }

    #[test]
    fn max_offset_is_extent_minus_visible() {
        let m = model((100, 50), (10, 10));
        assert_eq!(m.max_offset(), Point::new(90, 40));
    }

    #[test]
    fn max_offset_floors_at_zero() {
        let m = model((5, 5), (10, 10));
        assert_eq!(m.max_offset(), Point::ORIGIN);
    }

    #[test]
    fn scroll_to_clamps_both_ends() {
        let mut m = model((100, 50), (10, 10));
        m.scroll_to(Point::new(999, 999));
        assert_eq!(m.offset(), Point::new(90, 40));
        m.scroll_to(Point::new(-5, -5));
        assert_eq!(m.offset(), Point::ORIGIN);
    }

    #[test]
    fn scroll_by_accumulates_with_clamp() {
        let mut m = model((100, 50), (10, 10));
        m.scroll_by(30, 15);
        assert_eq!(m.offset(), Point::new(30, 15));
        m.scroll_by(-100, -100);
        assert_eq!(m.offset(), Point::ORIGIN);
    }

    #[test]
    fn shrinking_extent_reclamps_offset() {
        let mut m = model((100, 50), (10, 10));
        m.scroll_to(Point::new(90, 40));
        m.set_extent(Size::new(20, 20));
        assert_eq!(m.offset(), Point::new(10, 10));
    }

    #[test]
    fn growing_visible_reclamps_offset() {
        let mut m = model((100, 50), (10, 10));
        m.scroll_to(Point::new(90, 40));
        m.set_visible(Size::new(80, 45));
        assert_eq!(m.offset(), Point::new(20, 5));
    }

    #[test]
    fn is_scrollable_per_axis() {
        let m = model((100, 10), (10, 10));
        assert!(m.is_scrollable(Axis::Horizontal));
        assert!(!m.is_scrollable(Axis::Vertical));
    }

    // -----------------------------------------------------------------------
    // ScrollModel — fractions
    // -----------------------------------------------------------------------

    #[test]
    fn set_fraction_half_of_vertical_range() {
        // Inner extent 100x50, visible 10x10: fraction 0.5 on the vertical
        // axis lands at round(0.5 * 40) = 20.
        let mut m = model((100, 50), (10, 10));
        m.set_fraction(Axis::Vertical, 0.5);
        assert_eq!(m.offset().y, 20);
    }

    #[test]
    fn set_fraction_saturates() {
        let mut m = model((100, 50), (10, 10));
        m.set_fraction(Axis::Vertical, 2.0);
        assert_eq!(m.offset().y, 40);
        m.set_fraction(Axis::Vertical, -1.0);
        assert_eq!(m.offset().y, 0);
    }

    #[test]
    fn fraction_round_trip_within_one_unit() {
        let mut m = model((100, 53), (10, 10));
        let range = 43.0;
        for f in [0.0, 0.1, 0.25, 0.5, 0.77, 1.0] {
            m.set_fraction(Axis::Vertical, f);
            let back = m.fraction(Axis::Vertical);
            assert!(
                (back - f).abs() <= 1.0 / range,
                "fraction {f} came back as {back}"
            );
        }
    }

    #[test]
    fn fraction_is_zero_when_not_scrollable() {
        let mut m = model((5, 5), (10, 10));
        m.set_fraction(Axis::Vertical, 0.8);
        assert_eq!(m.offset(), Point::ORIGIN);
        assert_eq!(m.fraction(Axis::Vertical), 0.0);
    }

    // -----------------------------------------------------------------------
    // Resize strategies
    // -----------------------------------------------------------------------

    #[test]
    fn preserve_top_left_keeps_offset() {
        let p = PreserveTopLeft.on_resize(
            Point::new(7, 3),
            Size::new(10, 10),
            Size::new(20, 10),
            Size::new(100, 50),
        );
        assert_eq!(p, Point::new(7, 3));
    }

    #[test]
    fn preserve_top_left_relies_on_clamp_when_range_shrinks() {
        // Growing the viewport from 10x10 to 20x10 shrinks the horizontal
        // range from 90 to 80; the model clamp pulls an offset of 85 back.
        let mut m = model((100, 50), (10, 10));
        m.scroll_to(Point::new(85, 0));
        let next = PreserveTopLeft.on_resize(
            m.offset(),
            m.visible(),
            Size::new(20, 10),
            m.extent(),
        );
        m.set_visible(Size::new(20, 10));
        m.scroll_to(next);
        assert_eq!(m.offset(), Point::new(80, 0));
    }

    #[test]
    fn preserve_fraction_rescales() {
        // Halfway through 90 -> halfway through 80.
        let p = PreserveFraction.on_resize(
            Point::new(45, 0),
            Size::new(10, 10),
            Size::new(20, 10),
            Size::new(100, 50),
        );
        assert_eq!(p.x, 40);
    }

    #[test]
    fn preserve_fraction_zero_old_range() {
        let p = PreserveFraction.on_resize(
            Point::ORIGIN,
            Size::new(100, 50),
            Size::new(10, 10),
            Size::new(100, 50),
        );
        assert_eq!(p, Point::ORIGIN);
    }

    #[test]
    fn preserve_bottom_sticks_when_at_bottom() {
        let p = PreserveBottom.on_resize(
            Point::new(0, 40), // at the bottom: extent 50 - visible 10
            Size::new(10, 10),
            Size::new(10, 25),
            Size::new(100, 50),
        );
        assert_eq!(p.y, 25);
    }

    #[test]
    fn preserve_bottom_keeps_offset_otherwise() {
        let p = PreserveBottom.on_resize(
            Point::new(0, 10),
            Size::new(10, 10),
            Size::new(10, 25),
            Size::new(100, 50),
        );
        assert_eq!(p.y, 10);
    }

    // -----------------------------------------------------------------------
    // ViewportLayout
    // -----------------------------------------------------------------------

    fn viewport_layout() -> (SharedScrollModel, ViewportLayout) {
        let model: SharedScrollModel = Rc::new(RefCell::new(ScrollModel::new()));
        let layout = ViewportLayout::new(model.clone(), Box::new(PreserveTopLeft));
        (model, layout)
    }

    #[test]
    fn viewport_measure_passes_through_child() {
        let (_model, layout) = viewport_layout();
        assert_eq!(layout.measure(&[Size::new(100, 50)]), Size::new(100, 50));
    }

    #[test]
    fn viewport_arrange_sizes_child_to_extent() {
        let (model, layout) = viewport_layout();
        let rects = layout.arrange(&[Size::new(100, 50)], Size::new(10, 10));
        assert_eq!(rects, vec![Rect::new(0, 0, 100, 50)]);
        assert_eq!(model.borrow().visible(), Size::new(10, 10));
        assert_eq!(model.borrow().extent(), Size::new(100, 50));
    }

    #[test]
    fn viewport_arrange_offsets_child_negatively() {
        let (model, layout) = viewport_layout();
        layout.arrange(&[Size::new(100, 50)], Size::new(10, 10));
        model.borrow_mut().scroll_to(Point::new(4, 7));
        let rects = layout.arrange(&[Size::new(100, 50)], Size::new(10, 10));
        assert_eq!(rects[0].origin(), Point::new(-4, -7));
    }

    #[test]
    fn viewport_inner_never_smaller_than_viewport() {
        let (model, layout) = viewport_layout();
        let rects = layout.arrange(&[Size::new(3, 2)], Size::new(10, 10));
        assert_eq!(rects[0].size(), Size::new(10, 10));
        assert_eq!(model.borrow().extent(), Size::new(10, 10));
    }

    #[test]
    fn viewport_resize_applies_strategy_then_clamps() {
        let (model, layout) = viewport_layout();
        layout.arrange(&[Size::new(100, 50)], Size::new(10, 10));
        model.borrow_mut().scroll_to(Point::new(85, 0));

        // Preserve-top-left keeps 85, clamped to the new max of 80.
        let rects = layout.arrange(&[Size::new(100, 50)], Size::new(20, 10));
        assert_eq!(model.borrow().offset(), Point::new(80, 0));
        assert_eq!(rects[0].origin(), Point::new(-80, 0));
    }

    #[test]
    fn viewport_resize_preserves_in_range_offset() {
        let (model, layout) = viewport_layout();
        layout.arrange(&[Size::new(100, 50)], Size::new(10, 10));
        model.borrow_mut().scroll_to(Point::new(5, 5));

        layout.arrange(&[Size::new(100, 50)], Size::new(20, 10));
        assert_eq!(model.borrow().offset(), Point::new(5, 5));
    }

    // -----------------------------------------------------------------------
    // Viewport component — paging keys
    // -----------------------------------------------------------------------

    use crate::event::input::{KeyEvent, Modifiers};

    fn scrollable_viewport() -> Viewport {
        let model: SharedScrollModel = Rc::new(RefCell::new(model((100, 50), (10, 10))));
        Viewport::new(model)
    }

    #[test]
    fn page_down_scrolls_one_visible_height() {
        let mut vp = scrollable_viewport();
        let handled = vp.on_event(&InputEvent::Key(KeyEvent::plain(Key::PageDown)));
        assert!(handled);
        assert_eq!(vp.model().borrow().offset().y, 10);
    }

    #[test]
    fn page_up_clamps_at_top() {
        let mut vp = scrollable_viewport();
        assert!(vp.on_event(&InputEvent::Key(KeyEvent::plain(Key::PageUp))));
        assert_eq!(vp.model().borrow().offset().y, 0);
    }

    #[test]
    fn paging_ignored_when_not_scrollable() {
        let model: SharedScrollModel = Rc::new(RefCell::new(model((5, 5), (10, 10))));
        let mut vp = Viewport::new(model);
        assert!(!vp.on_event(&InputEvent::Key(KeyEvent::plain(Key::PageDown))));
    }

    #[test]
    fn other_keys_bubble_through() {
        let mut vp = scrollable_viewport();
        let ev = InputEvent::Key(KeyEvent::new(Key::Char('x'), Modifiers::NONE));
        assert!(!vp.on_event(&ev));
    }
}
