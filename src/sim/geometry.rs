//! Collider shapes and overlap tests
//!
//! Two shapes are supported: axis-aligned rectangles and circles.
//! Every comparison is strict, so shapes that only touch do not overlap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, `position` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.position.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.position.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.position.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.position.y + self.height
    }

    pub fn translate(&self, offset: Vec2) -> Self {
        Self {
            position: self.position + offset,
            ..*self
        }
    }

    /// Closest point inside the rectangle to `point`
    pub fn clamp_point(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(self.left(), self.right()),
            point.y.clamp(self.top(), self.bottom()),
        )
    }
}

/// Circle given by its center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Circle inscribed in the `width` x `height` box whose top-left is `position`
    pub fn from_dimensions(position: Vec2, width: f32, height: f32) -> Self {
        Self {
            center: position + Vec2::new(width / 2.0, height / 2.0),
            radius: width.min(height) / 2.0,
        }
    }

    pub fn translate(&self, offset: Vec2) -> Self {
        Self {
            center: self.center + offset,
            ..*self
        }
    }
}

/// Collider shape stored in a `Collision2D` component
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Collider {
    Rect(Rect),
    Circle(Circle),
}

impl Collider {
    pub fn translate(&self, offset: Vec2) -> Self {
        match self {
            Collider::Rect(rect) => Collider::Rect(rect.translate(offset)),
            Collider::Circle(circle) => Collider::Circle(circle.translate(offset)),
        }
    }

    /// Whether the two shapes share interior area
    pub fn overlaps(&self, other: &Collider) -> bool {
        match (self, other) {
            (Collider::Rect(a), Collider::Rect(b)) => rect_rect(a, b),
            (Collider::Circle(a), Collider::Circle(b)) => circle_circle(a, b),
            (Collider::Rect(r), Collider::Circle(c)) | (Collider::Circle(c), Collider::Rect(r)) => {
                rect_circle(r, c)
            }
        }
    }
}

impl From<Rect> for Collider {
    fn from(rect: Rect) -> Self {
        Collider::Rect(rect)
    }
}

impl From<Circle> for Collider {
    fn from(circle: Circle) -> Self {
        Collider::Circle(circle)
    }
}

/// AABB interval test on both axes
#[inline]
pub fn rect_rect(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && b.left() < a.right() && a.top() < b.bottom() && b.top() < a.bottom()
}

#[inline]
pub fn circle_circle(a: &Circle, b: &Circle) -> bool {
    let reach = a.radius + b.radius;
    a.center.distance_squared(b.center) < reach * reach
}

/// Clamp the circle center into the rectangle and compare against the radius
#[inline]
pub fn rect_circle(rect: &Rect, circle: &Circle) -> bool {
    let closest = rect.clamp_point(circle.center);
    closest.distance_squared(circle.center) < circle.radius * circle.radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rect_overlap() {
        let a = Collider::Rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        let b = Collider::Rect(Rect::new(5.0, 5.0, 10.0, 10.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_rect_touching_edges_do_not_overlap() {
        let a = Collider::Rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        let right = Collider::Rect(Rect::new(10.0, 0.0, 10.0, 10.0));
        let below = Collider::Rect(Rect::new(0.0, 10.0, 10.0, 10.0));
        let corner = Collider::Rect(Rect::new(10.0, 10.0, 10.0, 10.0));
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
        assert!(!a.overlaps(&corner));
    }

    #[test]
    fn test_rect_disjoint_on_one_axis() {
        // Overlapping x range, disjoint y range
        let a = Collider::Rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        let b = Collider::Rect(Rect::new(5.0, 20.0, 10.0, 10.0));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_circle_circle() {
        let a = Collider::Circle(Circle::new(Vec2::ZERO, 5.0));
        let near = Collider::Circle(Circle::new(Vec2::new(9.0, 0.0), 5.0));
        let touching = Collider::Circle(Circle::new(Vec2::new(10.0, 0.0), 5.0));
        assert!(a.overlaps(&near));
        assert!(!a.overlaps(&touching));
    }

    #[test]
    fn test_rect_circle() {
        let rect = Collider::Rect(Rect::new(0.0, 0.0, 10.0, 10.0));

        // Center inside the rectangle
        let inside = Collider::Circle(Circle::new(Vec2::new(5.0, 5.0), 1.0));
        assert!(rect.overlaps(&inside));

        // Near the corner but outside the radius
        let corner = Collider::Circle(Circle::new(Vec2::new(13.0, 14.0), 4.9));
        assert!(!rect.overlaps(&corner));
        assert!(!corner.overlaps(&rect));

        // Touching the right edge exactly
        let touching = Collider::Circle(Circle::new(Vec2::new(15.0, 5.0), 5.0));
        assert!(!rect.overlaps(&touching));

        let crossing = Collider::Circle(Circle::new(Vec2::new(14.0, 5.0), 5.0));
        assert!(crossing.overlaps(&rect));
    }

    #[test]
    fn test_circle_from_dimensions() {
        let circle = Circle::from_dimensions(Vec2::new(10.0, 20.0), 44.0, 44.0);
        assert_eq!(circle.center, Vec2::new(32.0, 42.0));
        assert_eq!(circle.radius, 22.0);
    }

    #[test]
    fn test_translate_is_pure() {
        let original = Collider::Rect(Rect::new(1.0, 2.0, 3.0, 4.0));
        let moved = original.translate(Vec2::new(10.0, -2.0));
        assert_eq!(original, Collider::Rect(Rect::new(1.0, 2.0, 3.0, 4.0)));
        assert_eq!(moved, Collider::Rect(Rect::new(11.0, 0.0, 3.0, 4.0)));
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (-200i32..200, -200i32..200, 1i32..100, 1i32..100)
            .prop_map(|(x, y, w, h)| Rect::new(x as f32, y as f32, w as f32, h as f32))
    }

    proptest! {
        #[test]
        fn prop_rect_disjoint_never_overlaps(
            a in rect_strategy(),
            gap in 0i32..50,
            h in 1i32..100,
        ) {
            // Place b entirely right of a (gap 0 means touching)
            let b = Rect::new(a.right() + gap as f32, a.top(), 10.0, h as f32);
            prop_assert!(!Collider::Rect(a).overlaps(&Collider::Rect(b)));
            prop_assert!(!Collider::Rect(b).overlaps(&Collider::Rect(a)));
        }

        #[test]
        fn prop_rect_shared_interior_overlaps(
            a in rect_strategy(),
            fx in 0.0f32..0.9,
            fy in 0.0f32..0.9,
        ) {
            // b starts strictly inside a, so they share area
            let b = Rect::new(
                a.left() + a.width * fx,
                a.top() + a.height * fy,
                a.width,
                a.height,
            );
            prop_assert!(Collider::Rect(a).overlaps(&Collider::Rect(b)));
        }

        #[test]
        fn prop_overlap_is_symmetric(
            a in rect_strategy(),
            cx in -300i32..300,
            cy in -300i32..300,
            r in 1i32..60,
        ) {
            let rect = Collider::Rect(a);
            let circle = Collider::Circle(Circle::new(Vec2::new(cx as f32, cy as f32), r as f32));
            prop_assert_eq!(rect.overlaps(&circle), circle.overlaps(&rect));
        }
    }
}
