use crate::color::{self, Color};
use crate::error::ShadowError;
use crate::math::{vector, Vector};
use crate::path::Path;

/// A drop shadow that can be applied to a [`ShadowSurface`](crate::ShadowSurface).
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowConfig {
    /// The color of the shadow.
    pub color: Color,

    /// The blur radius of the shadow in logical points.
    ///
    /// When no [`path`](Self::path) is given this is used as the corner
    /// radius of the derived outline instead.
    pub radius: f32,

    /// The opacity of the shadow in the range `[0.0, 1.0]`.
    ///
    /// Values outside of this range are passed through to the surface as-is.
    pub opacity: f32,

    /// The offset of the shadow in logical points.
    pub offset: Vector,

    /// An explicit outline to cast the shadow from, in the coordinate space
    /// of the surface.
    ///
    /// If this is `None`, a rounded rectangle is derived from the bounds of
    /// the surface when the shadow is applied.
    pub path: Option<Path>,
}

impl ShadowConfig {
    pub const DEFAULT_COLOR: Color = color::GRAY;
    pub const DEFAULT_RADIUS: f32 = 5.0;
    pub const DEFAULT_OPACITY: f32 = 1.0;
    pub const DEFAULT_OFFSET: Vector = vector(0.0, 1.0);

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_offset(mut self, offset: Vector) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_path(mut self, path: Path) -> Self {
        self.path = Some(path);
        self
    }

    pub fn without_path(mut self) -> Self {
        self.path = None;
        self
    }

    /// Checks that every field holds a value a renderer can make sense of.
    pub fn validate(&self) -> Result<(), ShadowError> {
        if !color::is_finite(self.color) {
            return Err(ShadowError::NonFiniteColor);
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(ShadowError::InvalidOpacity(self.opacity));
        }
        if !(self.radius.is_finite() && self.radius >= 0.0) {
            return Err(ShadowError::InvalidRadius(self.radius));
        }
        if !(self.offset.x.is_finite() && self.offset.y.is_finite()) {
            return Err(ShadowError::NonFiniteOffset(self.offset));
        }

        Ok(())
    }

    /// Returns `self` if [`validate`](Self::validate) succeeds.
    pub fn validated(self) -> Result<Self, ShadowError> {
        self.validate()?;
        Ok(self)
    }
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            color: Self::DEFAULT_COLOR,
            radius: Self::DEFAULT_RADIUS,
            opacity: Self::DEFAULT_OPACITY,
            offset: Self::DEFAULT_OFFSET,
            path: None,
        }
    }
}

/// Whether a surface should cast a shadow.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ShadowStyle {
    /// Cast the given shadow.
    Apply(ShadowConfig),
    /// Remove any shadow from the surface.
    #[default]
    Clear,
}

impl ShadowStyle {
    pub fn is_clear(&self) -> bool {
        matches!(self, Self::Clear)
    }

    pub fn config(&self) -> Option<&ShadowConfig> {
        match self {
            Self::Apply(config) => Some(config),
            Self::Clear => None,
        }
    }
}

impl From<ShadowConfig> for ShadowStyle {
    fn from(config: ShadowConfig) -> Self {
        Self::Apply(config)
    }
}

impl From<&ShadowConfig> for ShadowStyle {
    fn from(config: &ShadowConfig) -> Self {
        Self::Apply(config.clone())
    }
}

impl From<Option<ShadowConfig>> for ShadowStyle {
    fn from(config: Option<ShadowConfig>) -> Self {
        config.map_or(Self::Clear, Self::Apply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point;

    #[test]
    fn defaults() {
        let config = ShadowConfig::default();
        assert_eq!(config.color, color::GRAY);
        assert_eq!(config.radius, 5.0);
        assert_eq!(config.opacity, 1.0);
        assert_eq!(config.offset, vector(0.0, 1.0));
        assert!(config.path.is_none());
        assert_eq!(ShadowConfig::new(), config);
    }

    #[test]
    fn builder_overrides_only_what_is_given() {
        let config = ShadowConfig::new()
            .with_radius(12.0)
            .with_offset(vector(3.0, 3.0));
        assert_eq!(config.radius, 12.0);
        assert_eq!(config.offset, vector(3.0, 3.0));
        assert_eq!(config.color, ShadowConfig::DEFAULT_COLOR);
        assert_eq!(config.opacity, ShadowConfig::DEFAULT_OPACITY);

        let config = config
            .with_path(Path::circle(point(0.0, 0.0), 4.0))
            .without_path();
        assert!(config.path.is_none());
    }

    #[test]
    fn validation() {
        assert_eq!(ShadowConfig::default().validate(), Ok(()));
        assert_eq!(
            ShadowConfig::new().with_opacity(1.5).validate(),
            Err(ShadowError::InvalidOpacity(1.5))
        );
        assert_eq!(
            ShadowConfig::new().with_radius(-1.0).validate(),
            Err(ShadowError::InvalidRadius(-1.0))
        );
        assert!(matches!(
            ShadowConfig::new().with_radius(f32::INFINITY).validated(),
            Err(ShadowError::InvalidRadius(_))
        ));
        assert!(matches!(
            ShadowConfig::new()
                .with_offset(vector(f32::NAN, 0.0))
                .validate(),
            Err(ShadowError::NonFiniteOffset(_))
        ));
        assert_eq!(
            ShadowConfig::new()
                .with_color(color::gray(f32::NAN, 1.0))
                .validate(),
            Err(ShadowError::NonFiniteColor)
        );
        assert!(matches!(
            ShadowConfig::new().with_opacity(f32::NAN).validate(),
            Err(ShadowError::InvalidOpacity(_))
        ));
    }

    #[test]
    fn style_conversions() {
        assert!(ShadowStyle::default().is_clear());
        assert!(ShadowStyle::from(None).is_clear());

        let config = ShadowConfig::new().with_opacity(0.25);
        let style = ShadowStyle::from(Some(config.clone()));
        assert_eq!(style.config(), Some(&config));
        assert_eq!(ShadowStyle::from(&config), style);
        assert_eq!(ShadowStyle::from(config), style);
        assert_eq!(ShadowStyle::Clear.config(), None);
    }
}
