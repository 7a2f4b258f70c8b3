// The following code was copied and modified from
// https://github.com/iced-rs/iced/blob/31d1d5fecbef50fa319cabd5d4194f1e4aaefa21/graphics/src/geometry/path/arc.rs
// Iced license (MIT): https://github.com/iced-rs/iced/blob/31d1d5fecbef50fa319cabd5d4194f1e4aaefa21/LICENSE

//! Circular and elliptical arc segments.
use layer_shadow_core::math::{Angle, Point, Vector};

/// A circular arc segment.
#[derive(Debug, Clone, Copy)]
pub struct ArcPath {
    pub center: Point,
    pub radius: f32,
    /// Clockwise rotation from the positive x-axis.
    pub start_angle: Angle,
    /// Clockwise rotation from the positive x-axis.
    pub end_angle: Angle,
}

/// An elliptical [`ArcPath`].
#[derive(Debug, Clone, Copy)]
pub struct EllipticalArcPath {
    pub center: Point,
    /// Horizontal and vertical half-dimensions of the ellipse.
    pub radii: Vector,
    /// The clockwise rotation of the arc's ellipse.
    pub rotation: Angle,
    pub start_angle: Angle,
    pub end_angle: Angle,
}

impl From<ArcPath> for EllipticalArcPath {
    fn from(arc: ArcPath) -> Self {
        Self {
            center: arc.center,
            radii: Vector::new(arc.radius, arc.radius),
            rotation: Angle::default(),
            start_angle: arc.start_angle,
            end_angle: arc.end_angle,
        }
    }
}
