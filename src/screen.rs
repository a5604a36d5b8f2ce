//! Screen: one tree + focus + compositor, kept consistent.
//!
//! [`Screen`] owns the three cooperating pieces of per-screen state and
//! enforces the cross-cutting invariants between them — most importantly that
//! removing the focused component clears the focus *before* the nodes are
//! freed, so focus never points at a detached node.

use crate::event::binding::KeyBindingRegistry;
use crate::event::input::InputEvent;
use crate::event::router;
use crate::focus::FocusManager;
use crate::geometry::Size;
use crate::render::Compositor;
use crate::surface::{Capabilities, CellUpdate};
use crate::tree::{ComponentId, ComponentTree};

// ---------------------------------------------------------------------------
// Screen
// ---------------------------------------------------------------------------

/// The central owner of a UI tree and its rendering/focus state.
pub struct Screen {
    /// The component tree.
    pub tree: ComponentTree,
    /// The single-holder focus state.
    pub focus: FocusManager,
    /// Frame buffers and redraw passes.
    pub compositor: Compositor,
    /// Key bindings consulted by the application loop.
    pub bindings: KeyBindingRegistry,
}

impl Screen {
    /// A screen of the given size with default (unicode) capabilities.
    pub fn new(size: Size) -> Self {
        Self::with_capabilities(size, Capabilities::default())
    }

    /// A screen with explicit surface capabilities.
    pub fn with_capabilities(size: Size, capabilities: Capabilities) -> Self {
        Self {
            tree: ComponentTree::new(),
            focus: FocusManager::new(),
            compositor: Compositor::new(size, capabilities),
            bindings: KeyBindingRegistry::with_defaults(),
        }
    }

    /// Resize the output surface. The next refresh re-runs layout against the
    /// new size and repaints everything.
    pub fn resize(&mut self, size: Size) {
        self.compositor.resize(size);
    }

    /// Remove a component and its subtree.
    ///
    /// If the focus holder is inside the removed subtree, focus is cleared
    /// first (blurring the holder while it still exists); there is no window
    /// in which focus references a detached node.
    pub fn remove(&mut self, id: ComponentId) -> bool {
        self.focus.release_subtree(&mut self.tree, id);
        self.tree.remove(id)
    }

    /// The current focus holder.
    pub fn focused(&self) -> Option<ComponentId> {
        self.focus.focused()
    }

    /// Atomically transfer focus; see [`FocusManager::request_focus`].
    pub fn request_focus(&mut self, id: ComponentId) -> bool {
        self.focus.request_focus(&mut self.tree, id)
    }

    /// Focus the next component in traversal order.
    pub fn focus_next(&mut self) -> Option<ComponentId> {
        self.focus.focus_next(&mut self.tree)
    }

    /// Focus the previous component in traversal order.
    pub fn focus_previous(&mut self) -> Option<ComponentId> {
        self.focus.focus_previous(&mut self.tree)
    }

    /// Route an input event to the focused component with bubbling.
    ///
    /// A handled event damages the handler and its ancestor chain so that any
    /// state it changed (scroll offsets, content) is repainted.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        match router::dispatch(&mut self.tree, &self.focus, event) {
            Some(handler) => {
                self.tree.record_damage(self.tree.bounds(handler));
                for ancestor in self.tree.ancestors(handler) {
                    self.tree.record_damage(self.tree.bounds(ancestor));
                }
                true
            }
            None => false,
        }
    }

    /// Run one redraw pass; returns the cells the driver must rewrite.
    pub fn refresh(&mut self) -> Vec<CellUpdate> {
        self.compositor.refresh(&mut self.tree, &self.focus)
    }

    /// The focused component's cursor in surface coordinates, if visible.
    pub fn cursor(&self) -> Option<(u16, u16)> {
        self.compositor.cursor_position(&self.tree, &self.focus)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
