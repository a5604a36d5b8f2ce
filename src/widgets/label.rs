//! Label: fixed multi-line text.

use std::any::Any;

use crate::component::{Component, DrawContext};
use crate::geometry::Size;
use crate::surface::{Attribute, RenderSurface};

/// Non-interactive text content.
///
/// Lines are split on `'\n'`; the preferred size is the longest line by the
/// line count. Lines are truncated to the assigned width and extra lines to
/// the assigned height when painting.
pub struct Label {
    text: String,
    attr: Attribute,
}

impl Label {
    /// A label showing `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), attr: Attribute::default() }
    }

    /// Boxed shorthand for tree insertion.
    pub fn boxed(text: impl Into<String>) -> Box<dyn Component> {
        Box::new(Self::new(text))
    }

    /// Set the paint attribute (builder).
    pub fn with_attr(mut self, attr: Attribute) -> Self {
        self.attr = attr;
        self
    }

    /// The current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text. Pair with
    /// [`ComponentTree::mark_dirty`](crate::tree::ComponentTree::mark_dirty)
    /// so the preferred size is re-measured and the area repainted.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Component for Label {
    fn type_name(&self) -> &str {
        "Label"
    }

    fn preferred_size(&self) -> Size {
        let mut width = 0;
        let mut height = 0;
        for line in self.text.split('\n') {
            width = width.max(line.chars().count() as i32);
            height += 1;
        }
        Size::new(width, height)
    }

    fn draw(&self, surface: &mut dyn RenderSurface, ctx: &DrawContext) {
        for (y, line) in self.text.split('\n').enumerate() {
            if y as i32 >= ctx.size.height {
                break;
            }
            let truncated: String = line.chars().take(ctx.size.width.max(0) as usize).collect();
            surface.put_str(0, y as i32, &truncated, &self.attr);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Canvas, Capabilities};
    use crate::testing::surface_to_string;

    fn render(label: &Label, width: i32, height: i32) -> String {
        let size = Size::new(width, height);
        let mut canvas = Canvas::new(size, Capabilities::default());
        label.draw(&mut canvas, &DrawContext::unfocused(size));
        surface_to_string(&canvas)
    }

    #[test]
    fn preferred_size_of_single_line() {
        assert_eq!(Label::new("hello").preferred_size(), Size::new(5, 1));
    }

    #[test]
    fn preferred_size_of_multiline() {
        assert_eq!(Label::new("one\nthree33\nx").preferred_size(), Size::new(7, 3));
    }

    #[test]
    fn preferred_size_of_empty_text() {
        assert_eq!(Label::new("").preferred_size(), Size::new(0, 1));
    }

    #[test]
    fn renders_text() {
        assert_eq!(render(&Label::new("hi"), 5, 1), "hi");
    }

    #[test]
    fn renders_multiline() {
        assert_eq!(render(&Label::new("ab\ncd"), 5, 2), "ab\ncd");
    }

    #[test]
    fn truncates_to_width() {
        assert_eq!(render(&Label::new("hello world"), 5, 1), "hello");
    }

    #[test]
    fn drops_lines_beyond_height() {
        assert_eq!(render(&Label::new("a\nb\nc"), 3, 2), "a\nb");
    }

    #[test]
    fn set_text_updates_preference() {
        let mut label = Label::new("a");
        label.set_text("longer");
        assert_eq!(label.text(), "longer");
        assert_eq!(label.preferred_size(), Size::new(6, 1));
    }
}
