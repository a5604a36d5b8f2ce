//! Snapshot rendering helpers.

use crate::component::{Component, DrawContext};
use crate::geometry::Size;
use crate::screen::Screen;
use crate::surface::{Canvas, Capabilities, RenderSurface};

/// Convert a painted canvas to a plain string.
///
/// Each row becomes one line with trailing spaces trimmed; trailing blank
/// lines are dropped, so an all-blank canvas renders as the empty string.
pub fn surface_to_string(canvas: &Canvas) -> String {
    let size = canvas.size();
    let mut lines = Vec::with_capacity(size.height.max(0) as usize);

    for y in 0..size.height {
        let mut row = String::with_capacity(size.width.max(0) as usize);
        for x in 0..size.width {
            row.push(canvas.glyph(x, y).map_or(' ', |g| g.ch));
        }
        lines.push(row.trim_end().to_owned());
    }

    let mut joined = lines.join("\n");
    let trimmed_len = joined.trim_end_matches('\n').len();
    joined.truncate(trimmed_len);
    joined
}

/// Render a lone component into a fresh canvas and return the string form.
///
/// The component is drawn unfocused into the full `width` x `height` region.
pub fn render_to_string(component: &dyn Component, width: i32, height: i32) -> String {
    let size = Size::new(width, height);
    let mut canvas = Canvas::new(size, Capabilities::default());
    component.draw(&mut canvas, &DrawContext::unfocused(size));
    surface_to_string(&canvas)
}

/// Refresh a screen and return its painted frame as a string.
pub fn screen_to_string(screen: &mut Screen) -> String {
    screen.refresh();
    surface_to_string(screen.compositor.canvas())
}

// ===========================================================================
// Tests
// ===========================================================================
