//! Geometric primitives used for cell visuals, overlays and hit-testing.
//!
//! All positions are shape centers, following the crate-wide coordinate
//! convention documented in the crate root.

use glam::Vec2;

use crate::Rgba;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Bottom-left corner.
    pub min: Vec2,
    /// Top-right corner.
    pub max: Vec2,
}

impl Aabb {
    /// Construct a box from its center point and full size.
    #[inline]
    #[must_use]
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;

        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Whether the point lies inside the box, edges included.
    #[inline]
    #[must_use]
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Whether two boxes overlap, touching edges included.
    #[inline]
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

/// Axis-aligned rectangle positioned at its center.
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    /// Center position.
    pub position: Vec2,
    /// Full width and height.
    pub size: Vec2,
    /// Fill color.
    pub color: Rgba,
}

/// Circle positioned at its center.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    /// Center position.
    pub position: Vec2,
    /// Distance from the center to the edge.
    pub radius: f32,
    /// Fill color.
    pub color: Rgba,
}

/// 2D shape with a closed set of variants.
///
/// Created once, then mutated in place by the game logic.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Axis-aligned rectangle.
    Rect(Rect),
    /// Circle.
    Circle(Circle),
}

impl Shape {
    /// Create a rectangle shape from its center and full size.
    #[inline]
    #[must_use]
    pub const fn rect(position: Vec2, size: Vec2, color: Rgba) -> Self {
        Self::Rect(Rect {
            position,
            size,
            color,
        })
    }

    /// Create a circle shape from its center and radius.
    #[inline]
    #[must_use]
    pub const fn circle(position: Vec2, radius: f32, color: Rgba) -> Self {
        Self::Circle(Circle {
            position,
            radius,
            color,
        })
    }

    /// Smallest axis-aligned box fully containing the shape.
    #[inline]
    #[must_use]
    pub fn bounding_box(&self) -> Aabb {
        match self {
            Self::Rect(rect) => Aabb::from_center_size(rect.position, rect.size),
            Self::Circle(circle) => {
                Aabb::from_center_size(circle.position, Vec2::splat(circle.radius * 2.0))
            }
        }
    }

    /// Whether the point lies inside the shape.
    ///
    /// Exact for both variants, the circle uses a squared-distance test.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        match self {
            Self::Rect(_) => self.bounding_box().contains_point(point),
            Self::Circle(circle) => {
                circle.position.distance_squared(point) <= circle.radius * circle.radius
            }
        }
    }

    /// Whether two shapes overlap.
    ///
    /// Circle pairs are resolved exactly by center distance, every other
    /// combination falls back to the coarse bounding-box test.
    /// The result is symmetric in its arguments.
    #[inline]
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Circle(lhs), Self::Circle(rhs)) => {
                let reach = lhs.radius + rhs.radius;

                lhs.position.distance_squared(rhs.position) <= reach * reach
            }
            _ => self.bounding_box().overlaps(&other.bounding_box()),
        }
    }

    /// Center position of the shape.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        match self {
            Self::Rect(rect) => rect.position,
            Self::Circle(circle) => circle.position,
        }
    }

    /// Move the shape to a new center position.
    #[inline]
    pub fn set_position(&mut self, position: Vec2) {
        match self {
            Self::Rect(rect) => rect.position = position,
            Self::Circle(circle) => circle.position = position,
        }
    }

    /// Fill color of the shape.
    #[inline]
    #[must_use]
    pub const fn color(&self) -> Rgba {
        match self {
            Self::Rect(rect) => rect.color,
            Self::Circle(circle) => circle.color,
        }
    }

    /// Change the fill color of the shape.
    #[inline]
    pub fn set_color(&mut self, color: Rgba) {
        match self {
            Self::Rect(rect) => rect.color = color,
            Self::Circle(circle) => circle.color = color,
        }
    }

    /// Resize the shape.
    ///
    /// A circle takes the biggest component as its new diameter.
    #[inline]
    pub fn set_size(&mut self, size: Vec2) {
        match self {
            Self::Rect(rect) => rect.size = size,
            Self::Circle(circle) => circle.radius = size.max_element() / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::Shape;
    use crate::rgba;

    /// Neutral color for shapes where the color doesn't matter.
    fn white() -> crate::Rgba {
        rgba([1.0, 1.0, 1.0, 1.0])
    }

    #[test]
    fn rect_contains_point() {
        let rect = Shape::rect(Vec2::new(10.0, 10.0), Vec2::new(4.0, 2.0), white());

        assert!(rect.contains(Vec2::new(10.0, 10.0)));
        // Edges are inclusive
        assert!(rect.contains(Vec2::new(12.0, 11.0)));
        assert!(!rect.contains(Vec2::new(12.1, 10.0)));
        assert!(!rect.contains(Vec2::new(10.0, 8.9)));
    }

    #[test]
    fn circle_contains_point() {
        let circle = Shape::circle(Vec2::ZERO, 5.0, white());

        assert!(circle.contains(Vec2::new(3.0, 4.0)));
        assert!(!circle.contains(Vec2::new(3.1, 4.1)));
        // A point on the rim of the circle but outside its inscribed box
        assert!(circle.contains(Vec2::new(5.0, 0.0)));
    }

    #[test]
    fn rect_rect_overlap() {
        let lhs = Shape::rect(Vec2::ZERO, Vec2::splat(4.0), white());
        let rhs = Shape::rect(Vec2::new(3.0, 3.0), Vec2::splat(4.0), white());
        let far = Shape::rect(Vec2::new(10.0, 0.0), Vec2::splat(4.0), white());

        assert!(lhs.overlaps(&rhs));
        assert!(rhs.overlaps(&lhs));
        assert!(!lhs.overlaps(&far));
    }

    #[test]
    fn circle_circle_overlap() {
        let lhs = Shape::circle(Vec2::ZERO, 2.0, white());
        let touching = Shape::circle(Vec2::new(5.0, 0.0), 3.0, white());
        let apart = Shape::circle(Vec2::new(5.1, 0.0), 3.0, white());

        assert!(lhs.overlaps(&touching));
        assert!(!lhs.overlaps(&apart));
    }

    #[test]
    fn mixed_overlap_is_symmetric() {
        let rect = Shape::rect(Vec2::ZERO, Vec2::splat(4.0), white());
        let circle = Shape::circle(Vec2::new(3.5, 0.0), 2.0, white());

        // Resolved through the bounding boxes, in both argument orders
        assert!(rect.overlaps(&circle));
        assert!(circle.overlaps(&rect));
    }

    #[test]
    fn circle_resize_takes_biggest_component() {
        let mut circle = Shape::circle(Vec2::ZERO, 1.0, white());
        circle.set_size(Vec2::new(4.0, 10.0));

        let Shape::Circle(circle) = circle else {
            unreachable!();
        };
        assert!((circle.radius - 5.0).abs() < f32::EPSILON);
    }
}
