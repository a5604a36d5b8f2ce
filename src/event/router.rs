//! Bubble-phase event routing.
//!
//! An input event goes to the focused component first. If its `on_event`
//! returns `false`, the event bubbles through the ancestor chain toward the
//! root until some component handles it or the chain is exhausted. Viewports
//! use this to catch paging keys their inner content ignores.

use crate::event::input::InputEvent;
use crate::focus::FocusManager;
use crate::tree::{ComponentId, ComponentTree};

/// Route `event` to the focused component, bubbling upward while unhandled.
///
/// Returns the id of the component that handled the event, or `None` if
/// nothing was focused or nothing claimed it.
pub fn dispatch(
    tree: &mut ComponentTree,
    focus: &FocusManager,
    event: &InputEvent,
) -> Option<ComponentId> {
    let start = focus.focused()?;
    if !tree.contains(start) {
        return None;
    }

    let mut path = vec![start];
    path.extend(tree.ancestors(start));

    for id in path {
        if let Some(component) = tree.component_mut(id) {
            if component.on_event(event) {
                return Some(id);
            }
        }
    }
    None
}

// ===========================================================================
// Tests
// ===========================================================================
