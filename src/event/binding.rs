//! Key binding registry and resolution.
//!
//! [`KeyBindingRegistry`] maps key+modifier combinations to [`BindingAction`]s
//! that the application loop interprets before falling back to component
//! routing. `with_defaults()` installs the standard trio (Ctrl+C, Tab,
//! BackTab).

use std::collections::HashMap;

use super::input::{Key, KeyEvent, Modifiers};

// ---------------------------------------------------------------------------
// BindingAction
// ---------------------------------------------------------------------------

/// Action taken when a key binding matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingAction {
    /// Quit the application.
    Quit,
    /// Move focus to the next focusable component.
    FocusNext,
    /// Move focus to the previous focusable component.
    FocusPrevious,
    /// A named action interpreted by the embedding application.
    Custom(String),
}

// ---------------------------------------------------------------------------
// KeyBinding
// ---------------------------------------------------------------------------

/// A single key binding: key + modifiers -> action.
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub key: Key,
    pub modifiers: Modifiers,
    pub action: BindingAction,
}

// ---------------------------------------------------------------------------
// KeyBindingRegistry
// ---------------------------------------------------------------------------

/// Registry mapping (key, modifiers) to an action.
#[derive(Debug, Default)]
pub struct KeyBindingRegistry {
    bindings: HashMap<(Key, Modifiers), BindingAction>,
}

impl KeyBindingRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the standard defaults:
    /// `Ctrl+C` -> Quit, `Tab` -> FocusNext, `BackTab` -> FocusPrevious.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.bind(Key::Char('c'), Modifiers::CTRL, BindingAction::Quit);
        registry.bind(Key::Tab, Modifiers::NONE, BindingAction::FocusNext);
        registry.bind(Key::BackTab, Modifiers::NONE, BindingAction::FocusPrevious);
        registry
    }

    /// Register a binding, replacing any existing one for the combination.
    pub fn bind(&mut self, key: Key, modifiers: Modifiers, action: BindingAction) {
        self.bindings.insert((key, modifiers), action);
    }

    /// Remove a binding, returning the removed action.
    pub fn unbind(&mut self, key: Key, modifiers: Modifiers) -> Option<BindingAction> {
        self.bindings.remove(&(key, modifiers))
    }

    /// Look up the action for a key event.
    pub fn resolve(&self, event: &KeyEvent) -> Option<&BindingAction> {
        self.bindings.get(&(event.code, event.modifiers))
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no bindings are registered.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
