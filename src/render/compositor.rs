//! The compositor: measure, arrange, and paint passes over the tree.
//!
//! One `refresh` call runs the full redraw pipeline to completion:
//!
//! 1. the root is pinned to the canvas bounds;
//! 2. measure (post-order, memoized) and arrange (pre-order, via each
//!    container's layout) bring the geometry up to date;
//! 3. the damaged region is cleared and repainted — each node paints its own
//!    decoration first, then its children in order, every write clamped to
//!    the intersection of the node's bounds with the inherited clip;
//! 4. the fresh frame is diffed against the previous one, yielding the cell
//!    updates the terminal driver actually needs to write.
//!
//! Redraw is demand-driven: with no damage recorded since the last refresh,
//! the paint and diff steps are skipped entirely.

use crate::component::DrawContext;
use crate::focus::FocusManager;
use crate::geometry::{Rect, Size};
use crate::surface::{Canvas, Capabilities, CellUpdate, ClipSurface, RenderSurface};
use crate::tree::{ComponentId, ComponentTree};

// ---------------------------------------------------------------------------
// Compositor
// ---------------------------------------------------------------------------

/// Owns the current and previous frame buffers and drives redraw passes.
pub struct Compositor {
    canvas: Canvas,
    previous: Canvas,
    full_repaint: bool,
}

impl Compositor {
    /// A compositor for a surface of the given size and capabilities.
    pub fn new(size: Size, capabilities: Capabilities) -> Self {
        Self {
            canvas: Canvas::new(size, capabilities),
            previous: Canvas::new(size, capabilities),
            full_repaint: true,
        }
    }

    /// The surface size.
    pub fn size(&self) -> Size {
        self.canvas.size()
    }

    /// The surface capabilities.
    pub fn capabilities(&self) -> Capabilities {
        self.canvas.capabilities()
    }

    /// The current frame, for inspection and snapshot tests.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Resize the output surface. Forces a full repaint on the next refresh.
    pub fn resize(&mut self, size: Size) {
        self.canvas.resize(size);
        self.previous.resize(size);
        self.full_repaint = true;
    }

    /// Force the next refresh to repaint everything.
    pub fn invalidate(&mut self) {
        self.full_repaint = true;
    }

    /// Run one complete redraw pass and return the changed cells.
    pub fn refresh(
        &mut self,
        tree: &mut ComponentTree,
        focus: &FocusManager,
    ) -> Vec<CellUpdate> {
        let surface_rect = self.canvas.size().to_rect();
        let Some(root) = tree.root() else {
            if self.full_repaint {
                self.full_repaint = false;
                self.canvas.clear();
                let updates = self.canvas.diff(&self.previous);
                self.previous = self.canvas.clone();
                return updates;
            }
            return Vec::new();
        };

        // Layout refresh: the screen assigns the root, layouts do the rest.
        tree.set_bounds(root, surface_rect);
        tree.measure(root);
        tree.arrange(root);

        // Demand-driven paint: only the damaged region is redrawn.
        let region = if self.full_repaint {
            surface_rect
        } else {
            tree.take_damage()
                .into_iter()
                .fold(Rect::EMPTY, Rect::union)
                .intersection(surface_rect)
        };
        if region.is_empty() {
            return Vec::new();
        }
        tree.take_damage();
        self.full_repaint = false;

        self.canvas.clear_region(region);
        self.paint(tree, focus, root, region);

        let updates = self.canvas.diff_region(&self.previous, region);
        self.previous = self.canvas.clone();
        updates
    }

    /// Paint `id` and its subtree, clipped to `clip`.
    fn paint(&mut self, tree: &ComponentTree, focus: &FocusManager, id: ComponentId, clip: Rect) {
        let bounds = tree.bounds(id);
        let clip = clip.intersection(bounds);
        if clip.is_empty() {
            return;
        }

        let Some(component) = tree.component(id) else {
            return;
        };

        let focused_id = focus.focused();
        let ctx = DrawContext {
            size: bounds.size(),
            focused: focused_id == Some(id),
            focus_within: focused_id.is_some_and(|f| tree.is_within(id, f)),
        };

        // The node's own decoration paints before its children, so children
        // may overdraw it only inside their clipped regions.
        let mut surface = ClipSurface::new(&mut self.canvas, bounds.origin(), bounds.size(), clip);
        component.draw(&mut surface, &ctx);

        for &child in tree.children(id) {
            self.paint(tree, focus, child, clip);
        }
    }

    /// The cursor position of the focused component in surface coordinates,
    /// if it is focused, shows a cursor, and the cursor cell is visible.
    pub fn cursor_position(
        &self,
        tree: &ComponentTree,
        focus: &FocusManager,
    ) -> Option<(u16, u16)> {
        let id = focus.focused()?;
        let local = tree.component(id)?.cursor()?;
        let bounds = tree.bounds(id);
        let x = bounds.x + local.x;
        let y = bounds.y + local.y;
        if self.canvas.size().to_rect().contains(x, y) {
            Some((x as u16, y as u16))
        } else {
            None
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
