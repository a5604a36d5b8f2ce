//! Single-holder focus management over the component tree.
//!
//! At most one component in a tree holds the input focus. The order used by
//! `focus_next`/`focus_previous` is the tree's pre-order walk filtered to
//! focusable components, so it follows child order and wraps around at the
//! ends. All transfers are atomic: a rejected request leaves the previous
//! holder untouched, and the old holder's `blur` always runs before the new
//! holder's `focus`.

use crate::tree::{ComponentId, ComponentTree};

// ---------------------------------------------------------------------------
// FocusManager
// ---------------------------------------------------------------------------

/// Owns the tree's single focus slot and the transfer protocol.
#[derive(Debug, Default)]
pub struct FocusManager {
    current: Option<ComponentId>,
}

impl FocusManager {
    /// A manager with nothing focused.
    pub fn new() -> Self {
        Self { current: None }
    }

    /// The current focus holder, if any.
    ///
    /// A holder that has since been removed from the tree reads as `None`.
    pub fn focused(&self) -> Option<ComponentId> {
        self.current
    }

    /// The focusable components in traversal order.
    pub fn traversal_order(&self, tree: &ComponentTree) -> Vec<ComponentId> {
        let Some(root) = tree.root() else {
            return Vec::new();
        };
        tree.walk_pre_order(root)
            .into_iter()
            .filter(|&id| tree.component(id).is_some_and(|c| c.can_focus()))
            .collect()
    }

    /// Atomically transfer focus to `target`.
    ///
    /// Fails (returning `false`, previous holder unchanged) if the target is
    /// not in the tree or refuses focus. Re-requesting the current holder
    /// succeeds without any transition.
    pub fn request_focus(&mut self, tree: &mut ComponentTree, target: ComponentId) -> bool {
        if !tree.contains(target) || !tree.component(target).is_some_and(|c| c.can_focus()) {
            return false;
        }
        if self.current == Some(target) {
            return true;
        }

        // Blur strictly before focus so no two components ever both believe
        // they hold the focus.
        if let Some(previous) = self.current.take() {
            if let Some(component) = tree.component_mut(previous) {
                component.blur();
            }
            damage_decorated(tree, previous);
        }
        if let Some(component) = tree.component_mut(target) {
            component.focus();
        }
        damage_decorated(tree, target);
        self.current = Some(target);
        true
    }

    /// Move focus to the next focusable component, wrapping past the end.
    ///
    /// With nothing focused, focuses the first focusable component. Returns
    /// the new holder, or `None` if the tree has no focusable components.
    pub fn focus_next(&mut self, tree: &mut ComponentTree) -> Option<ComponentId> {
        let order = self.traversal_order(tree);
        if order.is_empty() {
            return None;
        }
        let target = match self.position_in(&order) {
            Some(index) => order[(index + 1) % order.len()],
            None => order[0],
        };
        self.request_focus(tree, target);
        self.current
    }

    /// Move focus to the previous focusable component, wrapping past the
    /// start. With nothing focused, focuses the last focusable component.
    pub fn focus_previous(&mut self, tree: &mut ComponentTree) -> Option<ComponentId> {
        let order = self.traversal_order(tree);
        if order.is_empty() {
            return None;
        }
        let target = match self.position_in(&order) {
            Some(0) | None => order[order.len() - 1],
            Some(index) => order[index - 1],
        };
        self.request_focus(tree, target);
        self.current
    }

    /// Drop the focus entirely, blurring the current holder if it is still
    /// in the tree.
    pub fn clear(&mut self, tree: &mut ComponentTree) {
        if let Some(previous) = self.current.take() {
            if let Some(component) = tree.component_mut(previous) {
                component.blur();
            }
            damage_decorated(tree, previous);
        }
    }

    /// Forget a holder that is about to leave the tree.
    ///
    /// Called before removing a subtree so focus never dangles: if the
    /// current holder is `subtree_root` or below it, focus is cleared (with
    /// a blur while the component still exists).
    pub fn release_subtree(&mut self, tree: &mut ComponentTree, subtree_root: ComponentId) {
        if let Some(current) = self.current {
            if tree.is_within(subtree_root, current) {
                self.clear(tree);
            }
        }
    }

    fn position_in(&self, order: &[ComponentId]) -> Option<usize> {
        let current = self.current?;
        order.iter().position(|&id| id == current)
    }
}

/// Damage a focus holder's own area plus every ancestor's: decorators up the
/// chain repaint their highlight state on the next refresh.
fn damage_decorated(tree: &mut ComponentTree, id: ComponentId) {
    tree.record_damage(tree.bounds(id));
    for ancestor in tree.ancestors(id) {
        tree.record_damage(tree.bounds(ancestor));
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{Component, DrawContext};
    use crate::geometry::Size;
    use crate::surface::RenderSurface;
    use std::any::Any;

    /// Focusable leaf that records focus transitions.
    struct Spy {
        focusable: bool,
        focused: bool,
        focus_calls: usize,
        blur_calls: usize,
    }

    impl Spy {
        fn new(focusable: bool) -> Box<dyn Component> {
            Box::new(Self { focusable, focused: false, focus_calls: 0, blur_calls: 0 })
        }
    }

    impl Component for Spy {
        fn type_name(&self) -> &str {
            "Spy"
        }
        fn preferred_size(&self) -> Size {
            Size::new(1, 1)
        }
        fn can_focus(&self) -> bool {
            self.focusable
        }
        fn focus(&mut self) {
            self.focused = true;
            self.focus_calls += 1;
        }
        fn blur(&mut self) {
            self.focused = false;
            self.blur_calls += 1;
        }
        fn draw(&self, _surface: &mut dyn RenderSurface, _ctx: &DrawContext) {}
        fn as_any(&self) -> &dyn Any {
            self
        }
        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    /// root -> [a, panel -> [b, c], d(non-focusable)]
    fn build() -> (ComponentTree, ComponentId, ComponentId, ComponentId, ComponentId) {
        let mut tree = ComponentTree::new();
        let root = tree.insert(Spy::new(false));
        let a = tree.insert_child(root, Spy::new(true));
        let panel = tree.insert_child(root, Spy::new(false));
        let b = tree.insert_child(panel, Spy::new(true));
        let c = tree.insert_child(panel, Spy::new(true));
        let _d = tree.insert_child(root, Spy::new(false));
        (tree, a, panel, b, c)
    }

    fn is_focused(tree: &ComponentTree, id: ComponentId) -> bool {
        tree.typed::<Spy>(id).unwrap().focused
    }

    // -----------------------------------------------------------------------
    // traversal order
    // -----------------------------------------------------------------------

    #[test]
    fn traversal_order_filters_and_orders() {
        let (tree, a, _panel, b, c) = build();
        let fm = FocusManager::new();
        assert_eq!(fm.traversal_order(&tree), vec![a, b, c]);
    }

    #[test]
    fn traversal_order_empty_tree() {
        let tree = ComponentTree::new();
        assert!(FocusManager::new().traversal_order(&tree).is_empty());
    }

    // -----------------------------------------------------------------------
    // request_focus
    // -----------------------------------------------------------------------

    #[test]
    fn request_focus_grants_to_focusable() {
        let (mut tree, a, ..) = build();
        let mut fm = FocusManager::new();
        assert!(fm.request_focus(&mut tree, a));
        assert_eq!(fm.focused(), Some(a));
        assert!(is_focused(&tree, a));
    }

    #[test]
    fn request_focus_rejects_non_focusable() {
        let (mut tree, a, panel, ..) = build();
        let mut fm = FocusManager::new();
        fm.request_focus(&mut tree, a);

        assert!(!fm.request_focus(&mut tree, panel));
        // Previous holder untouched.
        assert_eq!(fm.focused(), Some(a));
        assert!(is_focused(&tree, a));
    }

    #[test]
    fn request_focus_rejects_stale_id() {
        let (mut tree, a, _panel, b, _c) = build();
        let mut fm = FocusManager::new();
        fm.request_focus(&mut tree, a);
        tree.remove(b);
        assert!(!fm.request_focus(&mut tree, b));
        assert_eq!(fm.focused(), Some(a));
    }

    #[test]
    fn transfer_blurs_old_before_focusing_new() {
        let (mut tree, a, _panel, b, _c) = build();
        let mut fm = FocusManager::new();
        fm.request_focus(&mut tree, a);
        fm.request_focus(&mut tree, b);

        assert!(!is_focused(&tree, a));
        assert!(is_focused(&tree, b));
        assert_eq!(tree.typed::<Spy>(a).unwrap().blur_calls, 1);
        assert_eq!(tree.typed::<Spy>(b).unwrap().focus_calls, 1);
    }

    #[test]
    fn refocusing_current_holder_is_a_quiet_success() {
        let (mut tree, a, ..) = build();
        let mut fm = FocusManager::new();
        fm.request_focus(&mut tree, a);
        assert!(fm.request_focus(&mut tree, a));
        // No spurious blur/focus round-trip.
        assert_eq!(tree.typed::<Spy>(a).unwrap().focus_calls, 1);
        assert_eq!(tree.typed::<Spy>(a).unwrap().blur_calls, 0);
    }

    // -----------------------------------------------------------------------
    // focus_next / focus_previous
    // -----------------------------------------------------------------------

    #[test]
    fn focus_next_starts_at_first() {
        let (mut tree, a, ..) = build();
        let mut fm = FocusManager::new();
        assert_eq!(fm.focus_next(&mut tree), Some(a));
    }

    #[test]
    fn focus_next_cycles_through_all() {
        let (mut tree, a, _panel, b, c) = build();
        let mut fm = FocusManager::new();
        assert_eq!(fm.focus_next(&mut tree), Some(a));
        assert_eq!(fm.focus_next(&mut tree), Some(b));
        assert_eq!(fm.focus_next(&mut tree), Some(c));
        assert_eq!(fm.focus_next(&mut tree), Some(a)); // wraps
    }

    #[test]
    fn n_steps_return_to_original_holder() {
        let (mut tree, _a, _panel, b, _c) = build();
        let mut fm = FocusManager::new();
        fm.request_focus(&mut tree, b);

        let n = fm.traversal_order(&tree).len();
        for _ in 0..n {
            fm.focus_next(&mut tree);
        }
        assert_eq!(fm.focused(), Some(b));
    }

    #[test]
    fn focus_previous_starts_at_last_and_wraps() {
        let (mut tree, a, _panel, _b, c) = build();
        let mut fm = FocusManager::new();
        assert_eq!(fm.focus_previous(&mut tree), Some(c));
        fm.request_focus(&mut tree, a);
        assert_eq!(fm.focus_previous(&mut tree), Some(c)); // wraps past start
    }

    #[test]
    fn focus_next_with_no_focusable_components() {
        let mut tree = ComponentTree::new();
        tree.insert(Spy::new(false));
        let mut fm = FocusManager::new();
        assert_eq!(fm.focus_next(&mut tree), None);
        assert_eq!(fm.focused(), None);
    }

    // -----------------------------------------------------------------------
    // clear / release_subtree
    // -----------------------------------------------------------------------

    #[test]
    fn clear_blurs_holder() {
        let (mut tree, a, ..) = build();
        let mut fm = FocusManager::new();
        fm.request_focus(&mut tree, a);
        fm.clear(&mut tree);
        assert_eq!(fm.focused(), None);
        assert!(!is_focused(&tree, a));
    }

    #[test]
    fn release_subtree_clears_focus_inside_it() {
        let (mut tree, _a, panel, b, _c) = build();
        let mut fm = FocusManager::new();
        fm.request_focus(&mut tree, b);

        fm.release_subtree(&mut tree, panel);
        assert_eq!(fm.focused(), None);
        // The blur ran while the component still existed.
        assert_eq!(tree.typed::<Spy>(b).unwrap().blur_calls, 1);
    }

    #[test]
    fn release_subtree_ignores_unrelated_focus() {
        let (mut tree, a, panel, ..) = build();
        let mut fm = FocusManager::new();
        fm.request_focus(&mut tree, a);
        fm.release_subtree(&mut tree, panel);
        assert_eq!(fm.focused(), Some(a));
    }

    #[test]
    fn focus_next_after_removal_selects_first_in_order() {
        let (mut tree, a, _panel, b, _c) = build();
        let mut fm = FocusManager::new();
        fm.request_focus(&mut tree, b);

        fm.release_subtree(&mut tree, b);
        tree.remove(b);

        assert_eq!(fm.focused(), None);
        assert_eq!(fm.focus_next(&mut tree), Some(a));
    }
}
