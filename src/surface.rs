use crate::color::Color;
use crate::math::{Rect, Vector};
use crate::path::Path;

/// A drawable surface that can cast a single drop shadow, such as a
/// compositing layer.
///
/// Implementors only store the attributes; [`apply_shadow`](crate::apply_shadow)
/// decides what to write into them.
pub trait ShadowSurface {
    /// The bounding rectangle of the surface in its own coordinate space.
    fn bounds(&self) -> Rect;

    fn shadow_color(&self) -> Color;
    fn set_shadow_color(&mut self, color: Color);

    /// The opacity of the shadow in the range `[0.0, 1.0]`.
    fn shadow_opacity(&self) -> f32;
    fn set_shadow_opacity(&mut self, opacity: f32);

    /// The blur radius of the shadow in logical points.
    fn shadow_radius(&self) -> f32;
    fn set_shadow_radius(&mut self, radius: f32);

    fn shadow_offset(&self) -> Vector;
    fn set_shadow_offset(&mut self, offset: Vector);

    /// The outline the shadow is cast from. `None` means the surface's own
    /// shape is used.
    fn shadow_path(&self) -> Option<&Path>;
    fn set_shadow_path(&mut self, path: Option<Path>);

    /// Builds a closed outline of `rect` with its corners rounded by
    /// `corner_radius`.
    ///
    /// Surfaces backed by a platform path type can override this to build
    /// their native rounded rectangle instead.
    fn rounded_rect_path(&self, rect: Rect, corner_radius: f32) -> Path {
        Path::rounded_rectangle(rect, corner_radius)
    }
}

/// Something that owns exactly one [`ShadowSurface`], such as a view that is
/// backed by a layer.
pub trait ShadowOwner {
    type Surface: ShadowSurface + ?Sized;

    fn surface(&self) -> &Self::Surface;
    fn surface_mut(&mut self) -> &mut Self::Surface;
}
