//! Core geometry types: Point, Size, Rect, Thickness.
//!
//! All coordinates are in terminal cells. Sizes are kept non-negative by the
//! operations that produce them; positions may be negative (a component
//! scrolled partially out of a viewport has a negative position relative to
//! the viewport's origin).

use std::ops::{Add, Neg, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A position or displacement in terminal cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// The origin, (0, 0).
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        Point { x: -self.x, y: -self.y }
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// A 2D extent in terminal cells (width x height).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// A zero-sized extent.
    pub const ZERO: Size = Size { width: 0, height: 0 };

    /// Create a new size. Negative components are clamped to zero.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width: if width > 0 { width } else { 0 },
            height: if height > 0 { height } else { 0 },
        }
    }

    /// Whether either dimension is zero.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Component-wise maximum.
    #[inline]
    pub const fn max(self, other: Size) -> Size {
        Size {
            width: if self.width > other.width { self.width } else { other.width },
            height: if self.height > other.height { self.height } else { other.height },
        }
    }

    /// Component-wise minimum.
    #[inline]
    pub const fn min(self, other: Size) -> Size {
        Size {
            width: if self.width < other.width { self.width } else { other.width },
            height: if self.height < other.height { self.height } else { other.height },
        }
    }

    /// Component-wise subtraction, clamped to zero.
    #[inline]
    pub const fn saturating_sub(self, other: Size) -> Size {
        Size::new(self.width - other.width, self.height - other.height)
    }

    /// Convert to a [`Rect`] positioned at the origin.
    #[inline]
    pub const fn to_rect(self) -> Rect {
        Rect { x: 0, y: 0, width: self.width, height: self.height }
    }
}

impl Add for Size {
    type Output = Size;
    #[inline]
    fn add(self, rhs: Size) -> Size {
        Size::new(self.width + rhs.width, self.height + rhs.height)
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// A rectangle defined by position and size.
///
/// The position may be negative; the size is always non-negative. This is the
/// most heavily-used geometry type; `intersection` in particular runs once per
/// node per paint pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// An empty rectangle at the origin.
    pub const EMPTY: Rect = Rect { x: 0, y: 0, width: 0, height: 0 };

    /// Create a new rectangle. Negative dimensions are clamped to zero.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width: if width > 0 { width } else { 0 },
            height: if height > 0 { height } else { 0 },
        }
    }

    /// Position a size at a point.
    #[inline]
    pub const fn at(origin: Point, size: Size) -> Self {
        Rect { x: origin.x, y: origin.y, width: size.width, height: size.height }
    }

    /// The right edge (exclusive): `x + width`.
    #[inline]
    pub const fn right(self) -> i32 {
        self.x + self.width
    }

    /// The bottom edge (exclusive): `y + height`.
    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y + self.height
    }

    /// The top-left corner.
    #[inline]
    pub const fn origin(self) -> Point {
        Point { x: self.x, y: self.y }
    }

    /// The dimensions.
    #[inline]
    pub const fn size(self) -> Size {
        Size { width: self.width, height: self.height }
    }

    /// Whether either dimension is zero.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether the cell (x, y) lies inside this rectangle.
    #[inline]
    pub const fn contains(self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Whether `other` lies entirely inside this rectangle.
    #[inline]
    pub const fn contains_rect(self, other: Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// The overlap of two rectangles, or [`Rect::EMPTY`] if they are disjoint.
    #[inline]
    pub const fn intersection(self, other: Rect) -> Rect {
        let x1 = if self.x > other.x { self.x } else { other.x };
        let y1 = if self.y > other.y { self.y } else { other.y };

        let sr = self.right();
        let or = other.right();
        let x2 = if sr < or { sr } else { or };

        let sb = self.bottom();
        let ob = other.bottom();
        let y2 = if sb < ob { sb } else { ob };

        if x2 - x1 <= 0 || y2 - y1 <= 0 {
            Rect::EMPTY
        } else {
            Rect { x: x1, y: y1, width: x2 - x1, height: y2 - y1 }
        }
    }

    /// The smallest rectangle containing both `self` and `other`.
    ///
    /// An empty rectangle contributes nothing to the union.
    #[inline]
    pub const fn union(self, other: Rect) -> Rect {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }

        let x1 = if self.x < other.x { self.x } else { other.x };
        let y1 = if self.y < other.y { self.y } else { other.y };

        let sr = self.right();
        let or = other.right();
        let x2 = if sr > or { sr } else { or };

        let sb = self.bottom();
        let ob = other.bottom();
        let y2 = if sb > ob { sb } else { ob };

        Rect { x: x1, y: y1, width: x2 - x1, height: y2 - y1 }
    }

    /// Translate the rectangle by a displacement.
    #[inline]
    pub const fn translate(self, delta: Point) -> Rect {
        Rect { x: self.x + delta.x, y: self.y + delta.y, width: self.width, height: self.height }
    }

    /// Contract the rectangle inward by the given [`Thickness`].
    ///
    /// Width and height are clamped to zero.
    #[inline]
    pub const fn shrink(self, border: Thickness) -> Rect {
        Rect::new(
            self.x + border.left,
            self.y + border.top,
            self.width - border.left - border.right,
            self.height - border.top - border.bottom,
        )
    }
}

// ---------------------------------------------------------------------------
// Thickness
// ---------------------------------------------------------------------------

/// Border thickness on the four sides of a rectangle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Thickness {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Thickness {
    /// Zero thickness on all sides.
    pub const ZERO: Thickness = Thickness { top: 0, right: 0, bottom: 0, left: 0 };

    /// Explicit thickness per side.
    #[inline]
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self { top, right, bottom, left }
    }

    /// The same thickness on all four sides.
    #[inline]
    pub const fn all(value: i32) -> Self {
        Self { top: value, right: value, bottom: value, left: value }
    }

    /// Total horizontal extent: `left + right`.
    #[inline]
    pub const fn horizontal(self) -> i32 {
        self.left + self.right
    }

    /// Total vertical extent: `top + bottom`.
    #[inline]
    pub const fn vertical(self) -> i32 {
        self.top + self.bottom
    }

    /// The size consumed by this thickness alone.
    #[inline]
    pub const fn to_size(self) -> Size {
        Size::new(self.horizontal(), self.vertical())
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Point
    // -----------------------------------------------------------------------

    #[test]
    fn point_new_and_origin() {
        assert_eq!(Point::new(3, -7), Point { x: 3, y: -7 });
        assert_eq!(Point::ORIGIN, Point::default());
    }

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
        assert_eq!(-a, Point::new(-1, -2));
    }

    // -----------------------------------------------------------------------
    // Size
    // -----------------------------------------------------------------------

    #[test]
    fn size_new_clamps_negative() {
        assert_eq!(Size::new(80, 24), Size { width: 80, height: 24 });
        assert_eq!(Size::new(-5, 10), Size { width: 0, height: 10 });
        assert_eq!(Size::new(5, -10), Size { width: 5, height: 0 });
    }

    #[test]
    fn size_is_empty() {
        assert!(Size::ZERO.is_empty());
        assert!(Size::new(0, 5).is_empty());
        assert!(Size::new(5, 0).is_empty());
        assert!(!Size::new(1, 1).is_empty());
    }

    #[test]
    fn size_max_min() {
        let a = Size::new(10, 5);
        let b = Size::new(3, 8);
        assert_eq!(a.max(b), Size::new(10, 8));
        assert_eq!(a.min(b), Size::new(3, 5));
    }

    #[test]
    fn size_saturating_sub() {
        let a = Size::new(10, 5);
        assert_eq!(a.saturating_sub(Size::new(3, 2)), Size::new(7, 3));
        assert_eq!(a.saturating_sub(Size::new(20, 2)), Size::new(0, 3));
    }

    #[test]
    fn size_add() {
        assert_eq!(Size::new(10, 5) + Size::new(3, 2), Size::new(13, 7));
    }

    #[test]
    fn size_to_rect() {
        assert_eq!(Size::new(80, 24).to_rect(), Rect::new(0, 0, 80, 24));
    }

    // -----------------------------------------------------------------------
    // Rect — basic properties
    // -----------------------------------------------------------------------

    #[test]
    fn rect_new_clamps_negative_dimensions() {
        let r = Rect::new(1, 2, -3, 4);
        assert_eq!(r.width, 0);
        assert_eq!(r.height, 4);
    }

    #[test]
    fn rect_allows_negative_position() {
        let r = Rect::new(-5, -10, 20, 30);
        assert_eq!(r.origin(), Point::new(-5, -10));
        assert_eq!(r.right(), 15);
        assert_eq!(r.bottom(), 20);
    }

    #[test]
    fn rect_at() {
        let r = Rect::at(Point::new(5, 10), Size::new(20, 30));
        assert_eq!(r, Rect::new(5, 10, 20, 30));
    }

    #[test]
    fn rect_edges_and_accessors() {
        let r = Rect::new(5, 10, 20, 30);
        assert_eq!(r.right(), 25);
        assert_eq!(r.bottom(), 40);
        assert_eq!(r.origin(), Point::new(5, 10));
        assert_eq!(r.size(), Size::new(20, 30));
    }

    // -----------------------------------------------------------------------
    // Rect — containment
    // -----------------------------------------------------------------------

    #[test]
    fn rect_contains_point() {
        let r = Rect::new(5, 5, 10, 10);
        assert!(r.contains(5, 5));
        assert!(r.contains(14, 14));
        assert!(!r.contains(15, 5));
        assert!(!r.contains(4, 5));
    }

    #[test]
    fn rect_contains_rect() {
        let outer = Rect::new(0, 0, 100, 100);
        let inner = Rect::new(10, 10, 20, 20);
        assert!(outer.contains_rect(inner));
        assert!(!inner.contains_rect(outer));
        assert!(outer.contains_rect(outer));
    }

    // -----------------------------------------------------------------------
    // Rect — intersection
    // -----------------------------------------------------------------------

    #[test]
    fn rect_intersection_overlapping() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert_eq!(a.intersection(b), Rect::new(5, 5, 5, 5));
    }

    #[test]
    fn rect_intersection_disjoint() {
        let a = Rect::new(0, 0, 5, 5);
        let b = Rect::new(10, 10, 5, 5);
        assert_eq!(a.intersection(b), Rect::EMPTY);
    }

    #[test]
    fn rect_intersection_adjacent_is_empty() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 10, 10);
        assert_eq!(a.intersection(b), Rect::EMPTY);
    }

    #[test]
    fn rect_intersection_with_negative_origin() {
        // A viewport child scrolled up and left of its parent.
        let child = Rect::new(-5, -5, 20, 20);
        let clip = Rect::new(0, 0, 10, 10);
        assert_eq!(child.intersection(clip), Rect::new(0, 0, 10, 10));
    }

    #[test]
    fn rect_intersection_self() {
        let r = Rect::new(3, 4, 20, 15);
        assert_eq!(r.intersection(r), r);
    }

    // -----------------------------------------------------------------------
    // Rect — union
    // -----------------------------------------------------------------------

    #[test]
    fn rect_union_basic() {
        let a = Rect::new(0, 0, 5, 5);
        let b = Rect::new(10, 10, 5, 5);
        assert_eq!(a.union(b), Rect::new(0, 0, 15, 15));
    }

    #[test]
    fn rect_union_ignores_empty() {
        let a = Rect::new(5, 5, 10, 10);
        assert_eq!(a.union(Rect::EMPTY), a);
        assert_eq!(Rect::EMPTY.union(a), a);
    }

    // -----------------------------------------------------------------------
    // Rect — translate / shrink
    // -----------------------------------------------------------------------

    #[test]
    fn rect_translate() {
        let r = Rect::new(5, 10, 20, 30);
        assert_eq!(r.translate(Point::new(-5, 3)), Rect::new(0, 13, 20, 30));
    }

    #[test]
    fn rect_shrink() {
        let r = Rect::new(10, 10, 20, 20);
        assert_eq!(r.shrink(Thickness::all(1)), Rect::new(11, 11, 18, 18));
    }

    #[test]
    fn rect_shrink_clamps_to_zero() {
        let r = Rect::new(5, 5, 4, 4);
        let shrunk = r.shrink(Thickness::all(10));
        assert_eq!(shrunk.width, 0);
        assert_eq!(shrunk.height, 0);
    }

    // -----------------------------------------------------------------------
    // Thickness
    // -----------------------------------------------------------------------

    #[test]
    fn thickness_constructors() {
        assert_eq!(
            Thickness::new(1, 2, 3, 4),
            Thickness { top: 1, right: 2, bottom: 3, left: 4 }
        );
        assert_eq!(Thickness::all(2), Thickness::new(2, 2, 2, 2));
        assert_eq!(Thickness::ZERO, Thickness::default());
    }

    #[test]
    fn thickness_extents() {
        let t = Thickness::new(1, 2, 3, 4);
        assert_eq!(t.horizontal(), 6);
        assert_eq!(t.vertical(), 4);
        assert_eq!(t.to_size(), Size::new(6, 4));
    }
}
