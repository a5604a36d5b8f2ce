//! Crossterm terminal output backend.
//!
//! The `Driver` owns a buffered stdout writer and turns the compositor's
//! [`CellUpdate`]s into minimal cursor-move/style/print sequences. Attribute
//! color strings are parsed here — named colors or `#rrggbb`/`#rgb` hex — so
//! the core never depends on a concrete color type.

use std::io::{self, BufWriter, Stdout, Write};

use crossterm::{
    cursor, execute, queue,
    style::{Attribute as CtAttribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::surface::{Attribute, CellUpdate};

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// Terminal output backend over buffered stdout.
///
/// `enter_alt_screen` is explicit, not automatic; `Drop` restores the
/// terminal best-effort if the driver is still in the alternate screen.
pub struct Driver {
    writer: BufWriter<Stdout>,
    in_alt_screen: bool,
}

impl Driver {
    /// Create a new driver wrapping stdout.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            writer: BufWriter::new(io::stdout()),
            in_alt_screen: false,
        })
    }

    /// Enter the alternate screen and enable raw mode.
    pub fn enter_alt_screen(&mut self) -> io::Result<()> {
        execute!(self.writer, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        self.in_alt_screen = true;
        Ok(())
    }

    /// Disable raw mode and leave the alternate screen.
    pub fn leave_alt_screen(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.writer, LeaveAlternateScreen)?;
        self.in_alt_screen = false;
        Ok(())
    }

    /// Queue a batch of cell updates. Call `flush` afterward.
    pub fn apply_updates(&mut self, updates: &[CellUpdate]) -> io::Result<()> {
        for update in updates {
            queue!(self.writer, cursor::MoveTo(update.x, update.y))?;
            self.queue_attribute(&update.glyph.attr)?;
            queue!(self.writer, Print(update.glyph.ch))?;
            queue!(self.writer, ResetColor)?;
            queue!(self.writer, SetAttribute(CtAttribute::Reset))?;
        }
        Ok(())
    }

    /// Flush the write buffer to the terminal.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// The terminal size in (columns, rows).
    pub fn terminal_size() -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Hide the terminal cursor.
    pub fn hide_cursor(&mut self) -> io::Result<()> {
        execute!(self.writer, cursor::Hide)
    }

    /// Show the terminal cursor.
    pub fn show_cursor(&mut self) -> io::Result<()> {
        execute!(self.writer, cursor::Show)
    }

    /// Move the terminal cursor (for focused components exposing a caret).
    pub fn move_cursor(&mut self, x: u16, y: u16) -> io::Result<()> {
        execute!(self.writer, cursor::MoveTo(x, y))
    }

    fn queue_attribute(&mut self, attr: &Attribute) -> io::Result<()> {
        if let Some(ref fg) = attr.fg {
            if let Some(color) = parse_color(fg) {
                queue!(self.writer, SetForegroundColor(color))?;
            }
        }
        if let Some(ref bg) = attr.bg {
            if let Some(color) = parse_color(bg) {
                queue!(self.writer, SetBackgroundColor(color))?;
            }
        }
        if attr.bold {
            queue!(self.writer, SetAttribute(CtAttribute::Bold))?;
        }
        if attr.dim {
            queue!(self.writer, SetAttribute(CtAttribute::Dim))?;
        }
        if attr.underline {
            queue!(self.writer, SetAttribute(CtAttribute::Underlined))?;
        }
        if attr.reverse {
            queue!(self.writer, SetAttribute(CtAttribute::Reverse))?;
        }
        Ok(())
    }
}

impl Drop for Driver {
    fn drop(&mut self) {
        if self.in_alt_screen {
            let _ = self.leave_alt_screen();
            let _ = self.flush();
        }
    }
}

// ---------------------------------------------------------------------------
// Color parsing
// ---------------------------------------------------------------------------

/// Parse a color string into a crossterm [`Color`].
///
/// Supports `#rrggbb` and `#rgb` hex forms plus the usual named colors.
/// Returns `None` for anything unrecognized, in which case the cell falls
/// back to the terminal default.
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex_color(hex);
    }

    match s.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "dark_red" | "darkred" => Some(Color::DarkRed),
        "dark_green" | "darkgreen" => Some(Color::DarkGreen),
        "dark_yellow" | "darkyellow" => Some(Color::DarkYellow),
        "dark_blue" | "darkblue" => Some(Color::DarkBlue),
        "dark_magenta" | "darkmagenta" => Some(Color::DarkMagenta),
        "dark_cyan" | "darkcyan" => Some(Color::DarkCyan),
        "dark_grey" | "dark_gray" | "darkgrey" | "darkgray" => Some(Color::DarkGrey),
        "grey" | "gray" => Some(Color::Grey),
        _ => None,
    }
}

fn parse_hex_color(hex: &str) -> Option<Color> {
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb { r, g, b })
        }
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb { r, g, b })
        }
        _ => None,
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // Only the pure color parsing is testable without a terminal.

    #[test]
    fn parse_named_colors() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color("RED"), Some(Color::Red));
        assert_eq!(parse_color(" cyan "), Some(Color::Cyan));
        assert_eq!(parse_color("dark_grey"), Some(Color::DarkGrey));
        assert_eq!(parse_color("darkgray"), Some(Color::DarkGrey));
    }

    #[test]
    fn parse_hex_six_digits() {
        assert_eq!(parse_color("#ff8000"), Some(Color::Rgb { r: 255, g: 128, b: 0 }));
        assert_eq!(parse_color("#000000"), Some(Color::Rgb { r: 0, g: 0, b: 0 }));
    }

    #[test]
    fn parse_hex_three_digits() {
        assert_eq!(parse_color("#f80"), Some(Color::Rgb { r: 255, g: 136, b: 0 }));
    }

    #[test]
    fn parse_invalid_returns_none() {
        assert_eq!(parse_color("not-a-color"), None);
        assert_eq!(parse_color("#12"), None);
        assert_eq!(parse_color("#gggggg"), None);
        assert_eq!(parse_color(""), None);
    }
}
