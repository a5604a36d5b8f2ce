//! Input event types decoupled from crossterm.
//!
//! The core routes [`InputEvent`]s; crossterm's own event types are converted
//! at the boundary via `From` impls so that nothing outside this module and
//! the terminal driver depends on crossterm.

use std::ops::{BitAnd, BitOr};

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// A keyboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// Modifier key bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(pub u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(1);
    pub const CTRL: Modifiers = Modifiers(2);
    pub const ALT: Modifiers = Modifiers(4);

    /// Whether `self` contains all the bits of `other`.
    pub fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Whether no modifier bits are set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;
    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

impl BitAnd for Modifiers {
    type Output = Modifiers;
    fn bitand(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 & rhs.0)
    }
}

// ---------------------------------------------------------------------------
// KeyEvent
// ---------------------------------------------------------------------------

/// A key press with modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a new key event.
    pub fn new(code: Key, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    /// A key press with no modifiers.
    pub fn plain(code: Key) -> Self {
        Self { code, modifiers: Modifiers::NONE }
    }
}

// ---------------------------------------------------------------------------
// Mouse
// ---------------------------------------------------------------------------

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Mouse action kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseAction {
    Down(MouseButton),
    Up(MouseButton),
    Drag(MouseButton),
    Moved,
    ScrollUp,
    ScrollDown,
}

/// A mouse event with action, cell position, and modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    pub action: MouseAction,
    pub x: u16,
    pub y: u16,
    pub modifiers: Modifiers,
}

// ---------------------------------------------------------------------------
// InputEvent
// ---------------------------------------------------------------------------

/// Any input delivered by the external event source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize { width: u16, height: u16 },
    Paste(String),
    FocusGained,
    FocusLost,
}

// ---------------------------------------------------------------------------
// crossterm conversions
// ---------------------------------------------------------------------------

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(m: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers as Cm;
        let mut out = Modifiers::NONE;
        if m.contains(Cm::SHIFT) {
            out = out | Modifiers::SHIFT;
        }
        if m.contains(Cm::CONTROL) {
            out = out | Modifiers::CTRL;
        }
        if m.contains(Cm::ALT) {
            out = out | Modifiers::ALT;
        }
        out
    }
}

impl TryFrom<crossterm::event::KeyCode> for Key {
    type Error = ();

    fn try_from(code: crossterm::event::KeyCode) -> Result<Self, ()> {
        use crossterm::event::KeyCode as Kc;
        Ok(match code {
            Kc::Char(c) => Key::Char(c),
            Kc::Enter => Key::Enter,
            Kc::Esc => Key::Escape,
            Kc::Tab => Key::Tab,
            Kc::BackTab => Key::BackTab,
            Kc::Backspace => Key::Backspace,
            Kc::Delete => Key::Delete,
            Kc::Left => Key::Left,
            Kc::Right => Key::Right,
            Kc::Up => Key::Up,
            Kc::Down => Key::Down,
            Kc::Home => Key::Home,
            Kc::End => Key::End,
            Kc::PageUp => Key::PageUp,
            Kc::PageDown => Key::PageDown,
            Kc::F(n) => Key::F(n),
            _ => return Err(()),
        })
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(b: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as Cb;
        match b {
            Cb::Left => MouseButton::Left,
            Cb::Right => MouseButton::Right,
            Cb::Middle => MouseButton::Middle,
        }
    }
}

impl From<crossterm::event::MouseEvent> for MouseEvent {
    fn from(ev: crossterm::event::MouseEvent) -> Self {
        use crossterm::event::MouseEventKind as Mk;
        let action = match ev.kind {
            Mk::Down(b) => MouseAction::Down(b.into()),
            Mk::Up(b) => MouseAction::Up(b.into()),
            Mk::Drag(b) => MouseAction::Drag(b.into()),
            Mk::Moved => MouseAction::Moved,
            Mk::ScrollUp => MouseAction::ScrollUp,
            Mk::ScrollDown | Mk::ScrollLeft | Mk::ScrollRight => MouseAction::ScrollDown,
        };
        MouseEvent {
            action,
            x: ev.column,
            y: ev.row,
            modifiers: ev.modifiers.into(),
        }
    }
}

impl TryFrom<crossterm::event::Event> for InputEvent {
    type Error = ();

    fn try_from(ev: crossterm::event::Event) -> Result<Self, ()> {
        use crossterm::event::Event as Ce;
        Ok(match ev {
            Ce::Key(ke) => {
                if ke.kind == crossterm::event::KeyEventKind::Release {
                    return Err(());
                }
                InputEvent::Key(KeyEvent::new(Key::try_from(ke.code)?, ke.modifiers.into()))
            }
            Ce::Mouse(me) => InputEvent::Mouse(me.into()),
            Ce::Resize(width, height) => InputEvent::Resize { width, height },
            Ce::FocusGained => InputEvent::FocusGained,
            Ce::FocusLost => InputEvent::FocusLost,
            // Paste and any future variants depend on crossterm features.
            _ => return Err(()),
        })
    }
}

// ===========================================================================
// Tests
// ===========================================================================
