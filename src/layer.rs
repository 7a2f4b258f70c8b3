use crate::color::{self, Color};
use crate::math::{vector, Rect, Vector, ZERO_OFFSET};
use crate::path::Path;
use crate::surface::{ShadowOwner, ShadowSurface};

/// The shadow attributes stored on a [`Layer`].
#[derive(Debug, Clone, PartialEq)]
pub struct LayerShadow {
    pub color: Color,
    pub opacity: f32,
    pub radius: f32,
    pub offset: Vector,
    pub path: Option<Path>,
}

impl LayerShadow {
    /// The attributes of a layer that casts no shadow at all.
    pub const NONE: Self = Self {
        color: color::TRANSPARENT,
        opacity: 0.0,
        radius: 0.0,
        offset: ZERO_OFFSET,
        path: None,
    };
}

impl Default for LayerShadow {
    /// A black shadow that is hidden by an opacity of zero.
    fn default() -> Self {
        Self {
            color: color::BLACK,
            opacity: 0.0,
            radius: 3.0,
            offset: vector(0.0, -3.0),
            path: None,
        }
    }
}

/// A plain in-memory drawable surface.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layer {
    bounds: Rect,
    shadow: LayerShadow,
}

impl Layer {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            shadow: LayerShadow::default(),
        }
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn shadow(&self) -> &LayerShadow {
        &self.shadow
    }
}

impl ShadowSurface for Layer {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn shadow_color(&self) -> Color {
        self.shadow.color
    }

    fn set_shadow_color(&mut self, color: Color) {
        self.shadow.color = color;
    }

    fn shadow_opacity(&self) -> f32 {
        self.shadow.opacity
    }

    fn set_shadow_opacity(&mut self, opacity: f32) {
        self.shadow.opacity = opacity;
    }

    fn shadow_radius(&self) -> f32 {
        self.shadow.radius
    }

    fn set_shadow_radius(&mut self, radius: f32) {
        self.shadow.radius = radius;
    }

    fn shadow_offset(&self) -> Vector {
        self.shadow.offset
    }

    fn set_shadow_offset(&mut self, offset: Vector) {
        self.shadow.offset = offset;
    }

    fn shadow_path(&self) -> Option<&Path> {
        self.shadow.path.as_ref()
    }

    fn set_shadow_path(&mut self, path: Option<Path>) {
        self.shadow.path = path;
    }
}

/// A view that is backed by a single [`Layer`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct View {
    layer: Layer,
}

impl View {
    pub fn new(frame: Rect) -> Self {
        Self {
            layer: Layer::new(frame),
        }
    }

    pub fn frame(&self) -> Rect {
        self.layer.bounds
    }

    pub fn set_frame(&mut self, frame: Rect) {
        self.layer.set_bounds(frame);
    }

    pub fn layer(&self) -> &Layer {
        &self.layer
    }

    pub fn layer_mut(&mut self) -> &mut Layer {
        &mut self.layer
    }
}

impl ShadowOwner for View {
    type Surface = Layer;

    fn surface(&self) -> &Layer {
        &self.layer
    }

    fn surface_mut(&mut self) -> &mut Layer {
        &mut self.layer
    }
}
