// The following code was copied and modified from
// https://github.com/iced-rs/iced/blob/31d1d5fecbef50fa319cabd5d4194f1e4aaefa21/graphics/src/geometry/path.rs
// Iced license (MIT): https://github.com/iced-rs/iced/blob/31d1d5fecbef50fa319cabd5d4194f1e4aaefa21/LICENSE

mod arc;
mod builder;

#[doc(no_inline)]
pub use arc::{ArcPath, EllipticalArcPath};
pub use builder::{clamp_corner_radius, PathBuilder};

use layer_shadow_core::math::{Box2D, Point, Rect, Size, Vector};
use lyon::path::Event;

/// An immutable set of points that may or may not be connected.
///
/// A single [`Path`] can represent different kinds of 2D shapes!
#[derive(Debug, Clone)]
pub struct Path {
    pub raw: lyon::path::Path,
}

impl Path {
    pub fn builder() -> PathBuilder {
        PathBuilder::new()
    }

    /// Creates a new [`Path`] representing a rectangle given its top-left
    /// corner coordinate and its `Size`.
    pub fn rectangle(top_left: Point, size: Size) -> Self {
        PathBuilder::new().rectangle(top_left, size).build()
    }

    /// Creates a new [`Path`] representing `rect` with its corners rounded
    /// by `corner_radius`.
    pub fn rounded_rectangle(rect: Rect, corner_radius: f32) -> Self {
        PathBuilder::new()
            .rounded_rectangle(rect.origin, rect.size, corner_radius)
            .build()
    }

    /// Creates a new [`Path`] representing a circle given its center
    /// coordinate and its radius.
    pub fn circle(center: Point, radius: f32) -> Self {
        PathBuilder::new().circle(center, radius).build()
    }

    /// Returns the current [`Path`] with the given transform applied to it.
    pub fn transform(&self, transform: &lyon::path::math::Transform) -> Path {
        Path {
            raw: self.raw.clone().transformed(transform),
        }
    }

    /// Returns the current [`Path`] moved by `by`.
    pub fn translate(&self, by: Vector) -> Path {
        self.transform(&lyon::path::math::Transform::translation(by.x, by.y))
    }

    /// Returns `true` if the path contains no segments at all.
    pub fn is_empty(&self) -> bool {
        self.raw.iter().next().is_none()
    }

    /// The smallest rectangle containing every on-curve point of the path.
    ///
    /// Control points are ignored. Returns `None` for an empty path.
    pub fn bounding_rect(&self) -> Option<Rect> {
        let mut points = self.raw.iter().filter_map(|event| match event {
            Event::Begin { at } => Some(at),
            Event::Line { to, .. } | Event::Quadratic { to, .. } | Event::Cubic { to, .. } => {
                Some(to)
            }
            Event::End { .. } => None,
        });

        let first = points.next()?;
        let mut bounds = Box2D::new(
            Point::new(first.x, first.y),
            Point::new(first.x, first.y),
        );
        for p in points {
            bounds.min.x = bounds.min.x.min(p.x);
            bounds.min.y = bounds.min.y.min(p.y);
            bounds.max.x = bounds.max.x.max(p.x);
            bounds.max.y = bounds.max.y.max(p.y);
        }

        Some(bounds.to_rect())
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.raw.iter().eq(other.raw.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layer_shadow_core::math::{point, rect, size, vector};

    fn assert_rect_approx_eq(a: Rect, b: Rect) {
        const EPSILON: f32 = 1e-3;
        assert!(
            (a.origin.x - b.origin.x).abs() < EPSILON
                && (a.origin.y - b.origin.y).abs() < EPSILON
                && (a.size.width - b.size.width).abs() < EPSILON
                && (a.size.height - b.size.height).abs() < EPSILON,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn rectangle_bounds() {
        let path = Path::rectangle(point(1.0, 2.0), size(10.0, 20.0));
        assert_eq!(path.bounding_rect(), Some(rect(1.0, 2.0, 10.0, 20.0)));
    }

    #[test]
    fn rounded_rectangle_spans_its_rect() {
        let r = rect(2.0, 4.0, 100.0, 50.0);
        let path = Path::rounded_rectangle(r, 8.0);
        assert_rect_approx_eq(path.bounding_rect().unwrap(), r);
        assert_ne!(path, Path::rectangle(r.origin, r.size));
    }

    #[test]
    fn rounded_rectangle_starts_after_first_corner() {
        let path = Path::rounded_rectangle(rect(0.0, 0.0, 100.0, 50.0), 8.0);
        match path.raw.iter().next() {
            Some(Event::Begin { at }) => {
                assert_eq!((at.x, at.y), (8.0, 0.0));
            }
            other => panic!("unexpected first event {other:?}"),
        }
    }

    #[test]
    fn zero_radius_is_a_plain_rectangle() {
        let r = rect(0.0, 0.0, 30.0, 40.0);
        assert_eq!(
            Path::rounded_rectangle(r, 0.0),
            Path::rectangle(r.origin, r.size)
        );
        assert_eq!(
            Path::rounded_rectangle(r, -4.0),
            Path::rectangle(r.origin, r.size)
        );
    }

    #[test]
    fn corner_radius_is_clamped_to_half_the_short_side() {
        assert_eq!(clamp_corner_radius(8.0, size(100.0, 50.0)), 8.0);
        assert_eq!(clamp_corner_radius(40.0, size(100.0, 50.0)), 25.0);
        assert_eq!(clamp_corner_radius(-1.0, size(100.0, 50.0)), 0.0);
        assert_eq!(clamp_corner_radius(f32::NAN, size(100.0, 50.0)), 0.0);

        let r = rect(0.0, 0.0, 100.0, 50.0);
        assert_eq!(
            Path::rounded_rectangle(r, 40.0),
            Path::rounded_rectangle(r, 25.0)
        );
    }

    #[test]
    fn negative_size_is_normalized() {
        let path = Path::rounded_rectangle(rect(10.0, 10.0, -10.0, -10.0), 2.0);
        assert_rect_approx_eq(path.bounding_rect().unwrap(), rect(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn translate_moves_bounds() {
        let path = Path::rectangle(point(0.0, 0.0), size(5.0, 5.0)).translate(vector(3.0, -1.0));
        assert_eq!(path.bounding_rect(), Some(rect(3.0, -1.0, 5.0, 5.0)));
    }

    #[test]
    fn empty_path() {
        let path = Path::builder().build();
        assert!(path.is_empty());
        assert_eq!(path.bounding_rect(), None);
    }

    #[test]
    fn circle_bounds() {
        let path = Path::circle(point(10.0, 10.0), 5.0);
        assert_rect_approx_eq(path.bounding_rect().unwrap(), rect(5.0, 5.0, 10.0, 10.0));
    }
}
