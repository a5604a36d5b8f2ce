//! The component tree: a slotmap arena of components with geometry bookkeeping.
//!
//! All nodes live in one `SlotMap`; parent and child links are plain
//! [`ComponentId`] indices held in secondary maps, so ownership is strictly
//! top-down (removing a node frees its whole subtree) and back-navigation is
//! O(1) without reference cycles.
//!
//! The tree also owns the geometry side of the component contract: assigned
//! bounds, memoized preferred sizes, and the damage list that tells the
//! compositor what needs repainting. Preferred sizes are recomputed lazily —
//! a content change invalidates the cache along the ancestor chain only, and
//! the next measure pass refills exactly the invalidated entries.

use slotmap::{new_key_type, SecondaryMap, SlotMap};

use crate::component::Component;
use crate::geometry::{Point, Rect, Size};
use crate::layout::{Layout, LinearLayout};

new_key_type! {
    /// Unique identifier for a node in the component tree. Copy, lightweight.
    pub struct ComponentId;
}

/// Empty slice returned for nodes without children.
const NO_CHILDREN: &[ComponentId] = &[];

// ---------------------------------------------------------------------------
// ComponentTree
// ---------------------------------------------------------------------------

/// The central arena holding every component plus its tree links and geometry.
pub struct ComponentTree {
    components: SlotMap<ComponentId, Box<dyn Component>>,
    children: SecondaryMap<ComponentId, Vec<ComponentId>>,
    parent: SecondaryMap<ComponentId, ComponentId>,
    bounds: SecondaryMap<ComponentId, Rect>,
    layouts: SecondaryMap<ComponentId, Box<dyn Layout>>,
    /// Memoized preferred sizes; a missing entry means "recompute".
    preferred: SecondaryMap<ComponentId, Size>,
    damage: Vec<Rect>,
    root: Option<ComponentId>,
}

impl ComponentTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            components: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            bounds: SecondaryMap::new(),
            layouts: SecondaryMap::new(),
            preferred: SecondaryMap::new(),
            damage: Vec::new(),
            root: None,
        }
    }

    // -----------------------------------------------------------------------
    // Structure
    // -----------------------------------------------------------------------

    /// Insert a root-level node. The first one becomes the root.
    pub fn insert(&mut self, component: Box<dyn Component>) -> ComponentId {
        let id = self.components.insert(component);
        self.children.insert(id, Vec::new());
        if self.root.is_none() {
            self.root = Some(id);
        }
        id
    }

    /// Insert a node as the last child of `parent`.
    ///
    /// Installs the back-reference, invalidates the ancestor measurement
    /// chain, and gives the parent a default vertical [`LinearLayout`] if it
    /// has none yet (a container always owns exactly one layout).
    ///
    /// # Panics
    ///
    /// Panics (debug) if `parent` does not exist.
    pub fn insert_child(
        &mut self,
        parent: ComponentId,
        component: Box<dyn Component>,
    ) -> ComponentId {
        debug_assert!(self.components.contains_key(parent), "parent does not exist");
        let id = self.components.insert(component);
        self.children.insert(id, Vec::new());
        self.parent.insert(id, parent);
        self.children
            .get_mut(parent)
            .expect("parent must have a children vec")
            .push(id);
        if !self.layouts.contains_key(parent) {
            self.layouts.insert(parent, Box::new(LinearLayout::vertical()));
        }
        self.invalidate_measure(parent);
        self.record_damage(self.bounds(parent));
        id
    }

    /// Remove a node and its entire subtree.
    ///
    /// Back-references into the removed subtree become stale slotmap keys,
    /// which every accessor treats as absent. Returns `false` if the node was
    /// not in the tree.
    pub fn remove(&mut self, id: ComponentId) -> bool {
        if !self.components.contains_key(id) {
            return false;
        }

        self.record_damage(self.bounds(id));

        // Detach from the parent's child list and invalidate its measurements.
        if let Some(parent_id) = self.parent.remove(id) {
            if let Some(siblings) = self.children.get_mut(parent_id) {
                siblings.retain(|&child| child != id);
            }
            self.invalidate_measure(parent_id);
        }

        if self.root == Some(id) {
            self.root = None;
        }

        // Free the whole subtree.
        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            if let Some(kids) = self.children.remove(current) {
                pending.extend(kids);
            }
            self.parent.remove(current);
            self.bounds.remove(current);
            self.layouts.remove(current);
            self.preferred.remove(current);
            self.components.remove(current);
        }

        true
    }

    /// Move `id` (with its whole subtree) to become the last child of
    /// `new_parent`. Both ends of the move are invalidated and damaged.
    ///
    /// Rejected (returning `false`) if either node is absent, or if the move
    /// would place a node inside its own subtree.
    pub fn reparent(&mut self, id: ComponentId, new_parent: ComponentId) -> bool {
        if !self.components.contains_key(id)
            || !self.components.contains_key(new_parent)
            || self.is_within(id, new_parent)
        {
            return false;
        }

        if let Some(old_parent) = self.parent.remove(id) {
            if let Some(siblings) = self.children.get_mut(old_parent) {
                siblings.retain(|&child| child != id);
            }
            self.invalidate_measure(old_parent);
            self.record_damage(self.bounds(old_parent));
        }

        self.parent.insert(id, new_parent);
        self.children
            .get_mut(new_parent)
            .expect("new_parent must have a children vec")
            .push(id);
        if !self.layouts.contains_key(new_parent) {
            self.layouts.insert(new_parent, Box::new(LinearLayout::vertical()));
        }
        self.invalidate_measure(new_parent);
        self.record_damage(self.bounds(new_parent));
        true
    }

    /// Replace a container's layout strategy.
    pub fn set_layout(&mut self, id: ComponentId, layout: Box<dyn Layout>) {
        if !self.components.contains_key(id) {
            return;
        }
        self.layouts.insert(id, layout);
        self.invalidate_measure(id);
        self.record_damage(self.bounds(id));
    }

    /// The layout installed on a node, if any.
    pub fn layout(&self, id: ComponentId) -> Option<&dyn Layout> {
        self.layouts.get(id).map(|b| b.as_ref())
    }

    /// The parent of `id`, or `None` for root-level and absent nodes.
    pub fn parent(&self, id: ComponentId) -> Option<ComponentId> {
        self.parent.get(id).copied()
    }

    /// The children of `id`, in order. Empty for absent nodes.
    pub fn children(&self, id: ComponentId) -> &[ComponentId] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(NO_CHILDREN)
    }

    /// The ancestor chain from the immediate parent up to the root.
    pub fn ancestors(&self, id: ComponentId) -> Vec<ComponentId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    /// Whether `id` equals `ancestor` or lies anywhere below it.
    pub fn is_within(&self, ancestor: ComponentId, id: ComponentId) -> bool {
        if !self.components.contains_key(id) {
            return false;
        }
        let mut current = Some(id);
        while let Some(c) = current {
            if c == ancestor {
                return true;
            }
            current = self.parent(c);
        }
        false
    }

    /// Whether the tree contains `id`.
    pub fn contains(&self, id: ComponentId) -> bool {
        self.components.contains_key(id)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// The root node, if set.
    pub fn root(&self) -> Option<ComponentId> {
        self.root
    }

    /// Explicitly set the root node.
    pub fn set_root(&mut self, id: ComponentId) {
        self.root = Some(id);
    }

    /// Pre-order, child-order-respecting traversal from `start`.
    ///
    /// This walk defines both paint order and focus traversal order.
    pub fn walk_pre_order(&self, start: ComponentId) -> Vec<ComponentId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.components.contains_key(current) {
                continue;
            }
            result.push(current);
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }
        result
    }

    // -----------------------------------------------------------------------
    // Component access
    // -----------------------------------------------------------------------

    /// Immutable access to a node's component.
    pub fn component(&self, id: ComponentId) -> Option<&dyn Component> {
        self.components.get(id).map(|b| b.as_ref())
    }

    /// Mutable access to a node's component.
    pub fn component_mut(&mut self, id: ComponentId) -> Option<&mut (dyn Component + 'static)> {
        self.components.get_mut(id).map(|b| b.as_mut())
    }

    /// Downcast a node's component to a concrete type.
    pub fn typed<T: 'static>(&self, id: ComponentId) -> Option<&T> {
        self.components.get(id)?.as_any().downcast_ref::<T>()
    }

    /// Mutably downcast a node's component to a concrete type.
    pub fn typed_mut<T: 'static>(&mut self, id: ComponentId) -> Option<&mut T> {
        self.components.get_mut(id)?.as_any_mut().downcast_mut::<T>()
    }

    // -----------------------------------------------------------------------
    // Geometry
    // -----------------------------------------------------------------------

    /// The assigned bounds of `id` in absolute coordinates.
    ///
    /// Nodes that have never been arranged report [`Rect::EMPTY`].
    pub fn bounds(&self, id: ComponentId) -> Rect {
        self.bounds.get(id).copied().unwrap_or(Rect::EMPTY)
    }

    /// Assign new bounds. The size is clamped non-negative by construction;
    /// both the vacated and the newly covered area are recorded as damage.
    pub fn set_bounds(&mut self, id: ComponentId, bounds: Rect) {
        if !self.components.contains_key(id) {
            return;
        }
        let old = self.bounds(id);
        if old == bounds {
            return;
        }
        self.bounds.insert(id, bounds);
        self.record_damage(old);
        self.record_damage(bounds);
    }

    /// Move a node without resizing it.
    pub fn set_position(&mut self, id: ComponentId, position: Point) {
        let old = self.bounds(id);
        self.set_bounds(id, Rect::at(position, old.size()));
    }

    /// Resize a node in place. Negative dimensions are clamped to zero.
    pub fn set_size(&mut self, id: ComponentId, size: Size) {
        let old = self.bounds(id);
        self.set_bounds(id, Rect::at(old.origin(), size));
    }

    /// Report that a node's content changed: its preferred size may differ
    /// and its area needs repainting.
    pub fn mark_dirty(&mut self, id: ComponentId) {
        if !self.components.contains_key(id) {
            return;
        }
        self.invalidate_measure(id);
        self.record_damage(self.bounds(id));
    }

    // -----------------------------------------------------------------------
    // Measure / arrange
    // -----------------------------------------------------------------------

    /// The preferred size of `id`: intrinsic for leaves, layout-derived for
    /// containers. Memoized until invalidated by a content change.
    pub fn measure(&mut self, id: ComponentId) -> Size {
        if !self.components.contains_key(id) {
            return Size::ZERO;
        }
        if let Some(&cached) = self.preferred.get(id) {
            return cached;
        }

        let kids: Vec<ComponentId> = self.children(id).to_vec();
        let size = if kids.is_empty() {
            self.components[id].preferred_size()
        } else {
            let prefs: Vec<Size> = kids.iter().map(|&k| self.measure(k)).collect();
            match self.layouts.get(id) {
                Some(layout) => layout.measure(&prefs),
                None => prefs.iter().fold(Size::ZERO, |acc, &p| acc.max(p)),
            }
        };

        self.preferred.insert(id, size);
        size
    }

    /// Arrange the subtree below `id`: the node's layout assigns each child
    /// a rectangle (translated to absolute coordinates), then each composite
    /// child recurses with its assigned size.
    ///
    /// `id`'s own bounds must already be set — the root's are assigned by the
    /// screen, every other node's by its parent's layout.
    pub fn arrange(&mut self, id: ComponentId) {
        let kids: Vec<ComponentId> = self.children(id).to_vec();
        if kids.is_empty() {
            return;
        }

        let prefs: Vec<Size> = kids.iter().map(|&k| self.measure(k)).collect();
        let bounds = self.bounds(id);
        let rects: Vec<Rect> = match self.layouts.get(id) {
            Some(layout) => layout.arrange(&prefs, bounds.size()),
            None => kids.iter().map(|_| bounds.size().to_rect()).collect(),
        };

        for (&kid, rect) in kids.iter().zip(&rects) {
            self.set_bounds(kid, rect.translate(bounds.origin()));
        }
        for &kid in &kids {
            self.arrange(kid);
        }
    }

    // -----------------------------------------------------------------------
    // Damage
    // -----------------------------------------------------------------------

    /// Whether anything has been damaged since the last `take_damage`.
    pub fn has_damage(&self) -> bool {
        !self.damage.is_empty()
    }

    /// Drain the accumulated damage rectangles.
    pub fn take_damage(&mut self) -> Vec<Rect> {
        std::mem::take(&mut self.damage)
    }

    /// Record a damaged area. Empty rectangles are ignored.
    pub fn record_damage(&mut self, rect: Rect) {
        if !rect.is_empty() {
            self.damage.push(rect);
        }
    }

    fn invalidate_measure(&mut self, id: ComponentId) {
        let mut current = Some(id);
        while let Some(c) = current {
            self.preferred.remove(c);
            current = self.parent(c);
        }
    }
}

impl Default for ComponentTree {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
