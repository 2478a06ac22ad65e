use crate::math::{Axis, Vector2};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Axis-aligned rectangle described by its top-left corner and its size
///
/// Overlap comes in two flavors. [`Rect::overlaps`] is strict: rectangles
/// that only share an edge do not overlap, they are in contact. The contact
/// sensor relies on this together with its probe displacement.
/// [`Rect::overlaps_inclusive`] also reports shared edges and is what the
/// penetration resolver steps against, so a resolved body always ends with a
/// real gap to the obstacle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Rect {
    /// Top-left corner
    pub position: Vector2,

    /// Width and height
    pub size: Vector2,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size
    #[inline]
    pub fn new(position: Vector2, size: Vector2) -> Self {
        Self { position, size }
    }

    /// Creates a rectangle from raw coordinates
    #[inline]
    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::new(Vector2::new(x, y), Vector2::new(w, h))
    }

    /// Returns the center of the rectangle
    #[inline]
    pub fn center(&self) -> Vector2 {
        self.position + self.size * 0.5
    }

    /// Returns half the size of the rectangle
    #[inline]
    pub fn half_extents(&self) -> Vector2 {
        self.size * 0.5
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.position.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.position.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    /// Returns a copy moved by `offset`
    #[inline]
    pub fn translated(&self, offset: Vector2) -> Self {
        Self::new(self.position + offset, self.size)
    }

    /// Returns a copy moved by `amount` along `axis`
    #[inline]
    pub fn shifted(&self, axis: Axis, amount: f32) -> Self {
        self.translated(Vector2::along(axis, amount))
    }

    /// Center distance and combined half extents on both axes
    #[inline]
    fn separation(&self, other: &Self) -> (Vector2, Vector2) {
        let distance = (self.center() - other.center()).abs();
        let reach = (self.size + other.size) * 0.5;
        (distance, reach)
    }

    /// Checks whether the two rectangles share interior area
    ///
    /// Touching edges are not an overlap.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        let (distance, reach) = self.separation(other);
        distance.x < reach.x && distance.y < reach.y
    }

    /// Checks whether the two rectangles overlap or touch
    #[inline]
    pub fn overlaps_inclusive(&self, other: &Self) -> bool {
        let (distance, reach) = self.separation(other);
        distance.x <= reach.x && distance.y <= reach.y
    }

    /// Checks if this rectangle contains a point (edges included)
    #[inline]
    pub fn contains_point(&self, point: Vector2) -> bool {
        point.x >= self.left() && point.x <= self.right() &&
        point.y >= self.top() && point.y <= self.bottom()
    }

    /// Returns the intersection of this rectangle with another, if they overlap
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.overlaps(other) {
            return None;
        }

        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        Some(Self::from_xywh(left, top, right - left, bottom - top))
    }
}

/// Free-function form of [`Rect::overlaps`]
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.overlaps(b)
}
