//! Component trait: the capability every tree node exposes.
//!
//! A [`Component`] is the behavior half of a node — intrinsic preferred size,
//! focusability, cursor state, painting, and event handling. The geometry
//! half (position and assigned size) is bookkeeping owned by the
//! [`ComponentTree`](crate::tree::ComponentTree), so that parent/child links
//! stay plain arena indices and never form ownership cycles.
//!
//! The trait is object-safe: components are stored as `Box<dyn Component>`
//! and downcast through `as_any` when concrete access is needed.

use std::any::Any;

use crate::event::input::InputEvent;
use crate::geometry::{Point, Size};
use crate::surface::RenderSurface;

// ---------------------------------------------------------------------------
// DrawContext
// ---------------------------------------------------------------------------

/// Per-node state handed to [`Component::draw`].
///
/// `size` is the component's assigned size — the local surface the component
/// paints into runs from (0, 0) to this size. `focused` is true only for the
/// single global focus holder; `focus_within` is true for every ancestor of
/// the focus holder (and for the holder itself), which is what frame
/// decorators use to pick their highlight attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawContext {
    pub size: Size,
    pub focused: bool,
    pub focus_within: bool,
}

impl DrawContext {
    /// A context for an unfocused component of the given size.
    pub fn unfocused(size: Size) -> Self {
        Self { size, focused: false, focus_within: false }
    }
}

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

/// The capability interface every node in the tree implements.
pub trait Component {
    /// A short type name, used for debugging and tree dumps.
    fn type_name(&self) -> &str;

    /// The intrinsic content size of a leaf component.
    ///
    /// This is a hint, not a constraint: layouts may assign more or less
    /// space. Nodes with children never consult this — their preferred size
    /// comes from their layout instead.
    fn preferred_size(&self) -> Size {
        Size::ZERO
    }

    /// Whether this component may hold the input focus.
    fn can_focus(&self) -> bool {
        false
    }

    /// Called when this component becomes the focus holder.
    fn focus(&mut self) {}

    /// Called when this component stops being the focus holder.
    ///
    /// Infallible: losing focus is a best-effort state transition with no
    /// observable failure.
    fn blur(&mut self) {}

    /// The cursor position in local coordinates, if this component shows a
    /// cursor. Only meaningful while the component is focused.
    fn cursor(&self) -> Option<Point> {
        None
    }

    /// Paint this component into `surface`.
    ///
    /// The surface is pre-translated and pre-clipped: local (0, 0) is the
    /// component's top-left, writes beyond the delegated region are dropped,
    /// and the surface reference must not be retained past this call.
    fn draw(&self, surface: &mut dyn RenderSurface, ctx: &DrawContext);

    /// Handle an input event. Return `true` to stop it bubbling further.
    fn on_event(&mut self, event: &InputEvent) -> bool {
        let _ = event;
        false
    }

    /// Upcast for downcasting to the concrete type.
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for downcasting to the concrete type.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

// ===========================================================================
// Tests
// ===========================================================================
