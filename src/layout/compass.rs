//! Compass (dock) layout: children pinned to edges, one filling the centre.

use crate::geometry::{Rect, Size};

use super::Layout;

/// Which region of the container a child occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heading {
    North,
    South,
    East,
    West,
    #[default]
    Centre,
}

/// Docks children to the container's edges in child order.
///
/// The i-th child takes the i-th heading; children beyond the configured
/// headings default to `Centre`. Each edge child consumes its preferred
/// thickness (clamped to the space still available) from the corresponding
/// side; a centre child fills whatever remains at arrange time. Later edge
/// children dock inside the space left by earlier ones, so order matters and
/// every rectangle stays inside the container.
#[derive(Debug, Clone, Default)]
pub struct CompassLayout {
    headings: Vec<Heading>,
}

impl CompassLayout {
    /// A compass layout with no headings assigned yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a heading for the next child (builder).
    pub fn with(mut self, heading: Heading) -> Self {
        self.headings.push(heading);
        self
    }

    fn heading(&self, index: usize) -> Heading {
        self.headings.get(index).copied().unwrap_or_default()
    }
}

impl Layout for CompassLayout {
    fn measure(&self, child_preferences: &[Size]) -> Size {
        // Edge children add their thickness around the centre; parallel edges
        // stack, the centre needs the maximum left over.
        let mut north_south_height = 0;
        let mut east_west_width = 0;
        let mut edge_width = 0; // widest north/south child
        let mut edge_height = 0; // tallest east/west child
        let mut centre = Size::ZERO;

        for (i, &pref) in child_preferences.iter().enumerate() {
            match self.heading(i) {
                Heading::North | Heading::South => {
                    north_south_height += pref.height.max(0);
                    edge_width = edge_width.max(pref.width);
                }
                Heading::East | Heading::West => {
                    east_west_width += pref.width.max(0);
                    edge_height = edge_height.max(pref.height);
                }
                Heading::Centre => centre = centre.max(pref),
            }
        }

        Size::new(
            edge_width.max(east_west_width + centre.width),
            north_south_height + edge_height.max(centre.height),
        )
    }

    fn arrange(&self, child_preferences: &[Size], size: Size) -> Vec<Rect> {
        // Insets already consumed by earlier edge children.
        let mut top = 0;
        let mut bottom = 0;
        let mut left = 0;
        let mut right = 0;

        let mut rects = Vec::with_capacity(child_preferences.len());
        let mut centre_slots = Vec::new();

        for (i, &pref) in child_preferences.iter().enumerate() {
            let remaining_w = (size.width - left - right).max(0);
            let remaining_h = (size.height - top - bottom).max(0);

            let rect = match self.heading(i) {
                Heading::North => {
                    let h = pref.height.clamp(0, remaining_h);
                    let r = Rect::new(left, top, remaining_w, h);
                    top += h;
                    r
                }
                Heading::South => {
                    let h = pref.height.clamp(0, remaining_h);
                    let r = Rect::new(left, size.height - bottom - h, remaining_w, h);
                    bottom += h;
                    r
                }
                Heading::West => {
                    let w = pref.width.clamp(0, remaining_w);
                    let r = Rect::new(left, top, w, remaining_h);
                    left += w;
                    r
                }
                Heading::East => {
                    let w = pref.width.clamp(0, remaining_w);
                    let r = Rect::new(size.width - right - w, top, w, remaining_h);
                    right += w;
                    r
                }
                Heading::Centre => {
                    // Resolved after all edges have consumed their space.
                    centre_slots.push(i);
                    Rect::EMPTY
                }
            };
            rects.push(rect);
        }

        let centre_rect = Rect::new(
            left,
            top,
            (size.width - left - right).max(0),
            (size.height - top - bottom).max(0),
        );
        for i in centre_slots {
            rects[i] = centre_rect;
        }

        rects
    }
}

// ===========================================================================
// Tests
// ===========================================================================
