//! Input events, key bindings, and bubble-phase routing.

pub mod binding;
pub mod input;
pub mod router;

pub use binding::{BindingAction, KeyBinding, KeyBindingRegistry};
pub use input::{InputEvent, Key, KeyEvent, Modifiers, MouseAction, MouseButton, MouseEvent};
pub use router::dispatch;
