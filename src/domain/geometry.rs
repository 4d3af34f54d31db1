//! Flat circle geometry for drawing a configuration.
//!
//! Units are abstract: a leaf has radius [`LEAF_RADIUS`]. Siblings share one
//! horizontal centre line, left to right in canonical order. An enclosing
//! circle is centred on its group's row, and its radius is half the row width
//! plus [`INNER_PADDING`], so every member lies strictly inside it.

use crate::domain::model::{CircleNode, ConfigurationSet};

pub const LEAF_RADIUS: f64 = 1.0;
pub const SIBLING_GAP: f64 = 0.5;
pub const INNER_PADDING: f64 = 0.25;

const EPSILON: f64 = 1e-9;

/// Centre and radius of one circle to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleGeometry {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl CircleGeometry {
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self { x, y, radius }
    }

    fn distance(&self, other: &CircleGeometry) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// `other` lies strictly inside this circle.
    pub fn contains(&self, other: &CircleGeometry) -> bool {
        self.distance(other) + other.radius < self.radius - EPSILON
    }

    /// Neither circle touches nor encloses the other.
    pub fn is_disjoint(&self, other: &CircleGeometry) -> bool {
        self.distance(other) > self.radius + other.radius + EPSILON
    }
}

impl CircleNode {
    pub fn radius(&self) -> f64 {
        match self.nested() {
            None => LEAF_RADIUS,
            Some(group) => group.width() / 2.0 + INNER_PADDING,
        }
    }

    /// This circle centred at (`center_x`, 0), followed by everything inside it.
    pub fn circles(&self, center_x: f64) -> Vec<CircleGeometry> {
        let mut circles = vec![CircleGeometry::new(center_x, 0.0, self.radius())];
        if let Some(group) = self.nested() {
            circles.extend(group.circles(center_x - group.width() / 2.0));
        }
        circles
    }
}

impl ConfigurationSet {
    /// Horizontal extent of the sibling row.
    pub fn width(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let diameters: f64 = self.members().iter().map(|m| 2.0 * m.radius()).sum();
        diameters + SIBLING_GAP * (self.len() - 1) as f64
    }

    /// Vertical extent: the largest member diameter.
    pub fn height(&self) -> f64 {
        self.members()
            .iter()
            .map(|m| 2.0 * m.radius())
            .fold(0.0, f64::max)
    }

    /// All circles of the row starting at `offset` (left edge), on centre line y = 0.
    pub fn circles(&self, offset: f64) -> Vec<CircleGeometry> {
        let mut circles = Vec::new();
        let mut left = offset;
        for member in self.sorted_members() {
            let radius = member.radius();
            circles.extend(member.circles(left + radius));
            left += 2.0 * radius + SIBLING_GAP;
        }
        circles
    }
}
