//! App runtime: terminal lifecycle, input pump, binding resolution.
//!
//! [`App`] ties a [`Screen`] to the crossterm [`Driver`]. The loop is
//! single-threaded and event-driven: block for one input event, apply it,
//! run one redraw pass to completion, flush, repeat. `new_headless` builds an
//! app without a driver for tests.

use std::time::Duration;

use crate::error::Result;
use crate::event::binding::BindingAction;
use crate::event::input::InputEvent;
use crate::geometry::Size;
use crate::render::Driver;
use crate::screen::Screen;
use crate::surface::Capabilities;

// ---------------------------------------------------------------------------
// AppConfig
// ---------------------------------------------------------------------------

/// Construction-time configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Surface capabilities advertised to components.
    pub capabilities: Capabilities,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { capabilities: Capabilities::default() }
    }
}

impl AppConfig {
    /// The default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advertise ASCII-only output (builder).
    pub fn ascii_only(mut self) -> Self {
        self.capabilities = Capabilities::ASCII_ONLY;
        self
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// The application: a screen plus an optional terminal driver.
pub struct App {
    /// The screen (tree, focus, compositor, bindings).
    pub screen: Screen,
    /// Terminal output driver; `None` in headless mode.
    pub driver: Option<Driver>,
    running: bool,
}

impl App {
    /// An app bound to the real terminal, sized from it.
    pub fn new(config: AppConfig) -> Result<Self> {
        let (width, height) = Driver::terminal_size()?;
        Ok(Self {
            screen: Screen::with_capabilities(
                Size::new(width as i32, height as i32),
                config.capabilities,
            ),
            driver: Some(Driver::new()?),
            running: true,
        })
    }

    /// A headless app for tests, with the given surface size.
    pub fn new_headless(width: i32, height: i32) -> Self {
        Self {
            screen: Screen::new(Size::new(width, height)),
            driver: None,
            running: true,
        }
    }

    /// Whether the app should stop its loop.
    pub fn should_quit(&self) -> bool {
        !self.running
    }

    /// Ask the loop to stop after the current iteration.
    pub fn request_quit(&mut self) {
        self.running = false;
    }

    /// Whether a terminal driver is attached.
    pub fn has_driver(&self) -> bool {
        self.driver.is_some()
    }

    /// Apply one input event: resize bookkeeping, then key bindings, then
    /// component routing. Returns `true` if anything consumed the event.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Resize { width, height } => {
                self.screen.resize(Size::new(width as i32, height as i32));
                true
            }
            InputEvent::Key(key) => {
                let action = self.screen.bindings.resolve(&key).cloned();
                match action {
                    Some(BindingAction::Quit) => {
                        self.running = false;
                        true
                    }
                    Some(BindingAction::FocusNext) => {
                        self.screen.focus_next();
                        true
                    }
                    Some(BindingAction::FocusPrevious) => {
                        self.screen.focus_previous();
                        true
                    }
                    // Custom actions fall through to the components, which
                    // may interpret the same key directly.
                    Some(BindingAction::Custom(_)) | None => self.screen.handle_event(&event),
                }
            }
            _ => self.screen.handle_event(&event),
        }
    }

    /// Run one redraw pass and push the result at the terminal.
    pub fn render(&mut self) -> Result<()> {
        let updates = self.screen.refresh();
        let Some(driver) = &mut self.driver else {
            return Ok(());
        };
        if !updates.is_empty() {
            driver.apply_updates(&updates)?;
        }
        match self.screen.cursor() {
            Some((x, y)) => {
                driver.move_cursor(x, y)?;
                driver.show_cursor()?;
            }
            None => driver.hide_cursor()?,
        }
        driver.flush()?;
        Ok(())
    }

    /// The blocking main loop: paint, wait for input, apply, repeat.
    ///
    /// Enters the alternate screen on entry and restores the terminal on the
    /// way out (the driver also restores on drop as a backstop).
    pub fn run(&mut self) -> Result<()> {
        if let Some(driver) = &mut self.driver {
            driver.enter_alt_screen()?;
            driver.hide_cursor()?;
        }

        let outcome = self.event_loop();

        if let Some(driver) = &mut self.driver {
            driver.show_cursor()?;
            driver.leave_alt_screen()?;
            driver.flush()?;
        }
        outcome
    }

    fn event_loop(&mut self) -> Result<()> {
        while !self.should_quit() {
            self.render()?;

            // Block for the next event, then drain whatever else is queued
            // before painting again.
            let event = crossterm::event::read()?;
            if let Ok(input) = InputEvent::try_from(event) {
                self.handle_input(input);
            }
            while crossterm::event::poll(Duration::ZERO)? {
                let event = crossterm::event::read()?;
                if let Ok(input) = InputEvent::try_from(event) {
                    self.handle_input(input);
                }
            }
        }
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::input::{Key, KeyEvent, Modifiers};
    use crate::widgets::Fill;

    fn headless_with_tree() -> App {
        let mut app = App::new_headless(20, 6);
        let root = app.screen.tree.insert(Fill::boxed(' ', 0, 0));
        app.screen
            .tree
            .insert_child(root, Box::new(Fill::new('a', 2, 1).focusable()));
        app.screen
            .tree
            .insert_child(root, Box::new(Fill::new('b', 2, 1).focusable()));
        app
    }

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn headless_app_has_no_driver() {
        let app = App::new_headless(10, 4);
        assert!(!app.has_driver());
        assert!(!app.should_quit());
    }

    #[test]
    fn headless_render_succeeds_without_driver() {
        let mut app = headless_with_tree();
        app.render().unwrap();
    }

    // ── quit ─────────────────────────────────────────────────────────

    #[test]
    fn request_quit_flips_should_quit() {
        let mut app = App::new_headless(10, 4);
        app.request_quit();
        assert!(app.should_quit());
    }

    #[test]
    fn ctrl_c_quits_via_default_binding() {
        let mut app = headless_with_tree();
        let handled =
            app.handle_input(InputEvent::Key(KeyEvent::new(Key::Char('c'), Modifiers::CTRL)));
        assert!(handled);
        assert!(app.should_quit());
    }

    // ── focus bindings ───────────────────────────────────────────────

    #[test]
    fn tab_cycles_focus() {
        let mut app = headless_with_tree();
        app.handle_input(InputEvent::Key(KeyEvent::plain(Key::Tab)));
        let first = app.screen.focused().unwrap();
        app.handle_input(InputEvent::Key(KeyEvent::plain(Key::Tab)));
        let second = app.screen.focused().unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn backtab_moves_focus_backward() {
        let mut app = headless_with_tree();
        app.handle_input(InputEvent::Key(KeyEvent::plain(Key::Tab)));
        let first = app.screen.focused().unwrap();
        app.handle_input(InputEvent::Key(KeyEvent::plain(Key::Tab)));
        app.handle_input(InputEvent::Key(KeyEvent::plain(Key::BackTab)));
        assert_eq!(app.screen.focused(), Some(first));
    }

    // ── resize ───────────────────────────────────────────────────────

    #[test]
    fn resize_event_updates_surface() {
        let mut app = headless_with_tree();
        app.handle_input(InputEvent::Resize { width: 30, height: 8 });
        assert_eq!(app.screen.compositor.size(), Size::new(30, 8));
    }

    // ── unbound keys ─────────────────────────────────────────────────

    #[test]
    fn unbound_key_without_focus_is_unhandled() {
        let mut app = headless_with_tree();
        let handled = app.handle_input(InputEvent::Key(KeyEvent::plain(Key::Char('z'))));
        assert!(!handled);
    }

    // ── config ───────────────────────────────────────────────────────

    #[test]
    fn config_ascii_only() {
        let config = AppConfig::new().ascii_only();
        assert!(!config.capabilities.supports_unicode);
    }
}
