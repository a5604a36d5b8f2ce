//! Inset layout: the interior of a frame decorator.

use crate::geometry::{Rect, Size, Thickness};

use super::Layout;

/// Reserves a border [`Thickness`] and gives every child the interior.
///
/// This is the layout half of a frame decorator: the frame component paints
/// the border, this layout keeps children out of it. Contract: the preferred
/// size is the largest child preference plus the border on all sides; each
/// child is assigned the full interior rectangle (empty when the border
/// swallows the whole container).
#[derive(Debug, Clone)]
pub struct InsetLayout {
    border: Thickness,
}

impl InsetLayout {
    /// Reserve the given thickness on all four sides.
    pub fn new(border: Thickness) -> Self {
        Self { border }
    }

    /// The reserved thickness.
    pub fn border(&self) -> Thickness {
        self.border
    }
}

impl Layout for InsetLayout {
    fn measure(&self, child_preferences: &[Size]) -> Size {
        let inner = child_preferences
            .iter()
            .fold(Size::ZERO, |acc, &pref| acc.max(pref));
        inner + self.border.to_size()
    }

    fn arrange(&self, child_preferences: &[Size], size: Size) -> Vec<Rect> {
        let interior = size.to_rect().shrink(self.border);
        child_preferences.iter().map(|_| interior).collect()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
