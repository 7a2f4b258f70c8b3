use crate::color;
use crate::math::{Rect, Vector, ZERO_OFFSET};
use crate::path::clamp_corner_radius;
use crate::shadow::{ShadowConfig, ShadowStyle};
use crate::surface::{ShadowOwner, ShadowSurface};

/// Applies `style` to the shadow attributes of `surface`.
///
/// [`ShadowStyle::Clear`] resets every shadow attribute so that no shadow is
/// drawn. [`ShadowStyle::Apply`] writes the color and opacity of the config,
/// and then one of two things:
///
/// * If the config has a [`path`](ShadowConfig::path), the radius, offset,
///   and path are copied over as they are.
/// * Otherwise an outline is derived by moving the bounds of the surface by
///   the offset and rounding its corners by the radius. The derived outline
///   already contains both, so the radius and offset of the surface are set
///   to zero. This gives a sharp shadow edge instead of a blurred one.
///
/// Every attribute is written on every call, so the result never depends on
/// what was applied before.
pub fn apply_shadow<S, T>(surface: &mut S, style: T)
where
    S: ShadowSurface + ?Sized,
    T: Into<ShadowStyle>,
{
    write_style(surface, &style.into());
}

/// Applies `style` to the surface owned by `owner`.
///
/// Same as calling [`apply_shadow`] on [`ShadowOwner::surface_mut`].
pub fn apply_owner_shadow<O, T>(owner: &mut O, style: T)
where
    O: ShadowOwner + ?Sized,
    T: Into<ShadowStyle>,
{
    apply_shadow(owner.surface_mut(), style);
}

/// The rectangle the derived outline of a surface with the given bounds is
/// built from.
#[inline]
pub fn derived_outline_rect(bounds: Rect, offset: Vector) -> Rect {
    bounds.translate(offset)
}

/// Holds a [`ShadowStyle`] and stamps it onto any number of surfaces.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShadowStyler {
    style: ShadowStyle,
}

impl ShadowStyler {
    pub fn new(style: impl Into<ShadowStyle>) -> Self {
        Self {
            style: style.into(),
        }
    }

    /// A styler that removes shadows.
    pub fn clear() -> Self {
        Self {
            style: ShadowStyle::Clear,
        }
    }

    pub fn style(&self) -> &ShadowStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: impl Into<ShadowStyle>) {
        self.style = style.into();
    }

    pub fn apply<S: ShadowSurface + ?Sized>(&self, surface: &mut S) {
        write_style(surface, &self.style);
    }

    pub fn apply_to_owner<O: ShadowOwner + ?Sized>(&self, owner: &mut O) {
        self.apply(owner.surface_mut());
    }
}

fn write_style<S: ShadowSurface + ?Sized>(surface: &mut S, style: &ShadowStyle) {
    match style {
        ShadowStyle::Apply(config) => write_config(surface, config),
        ShadowStyle::Clear => {
            log::trace!("clearing shadow");

            surface.set_shadow_color(color::TRANSPARENT);
            surface.set_shadow_opacity(0.0);
            surface.set_shadow_radius(0.0);
            surface.set_shadow_offset(ZERO_OFFSET);
            surface.set_shadow_path(None);
        }
    }
}

fn write_config<S: ShadowSurface + ?Sized>(surface: &mut S, config: &ShadowConfig) {
    surface.set_shadow_color(config.color);
    surface.set_shadow_opacity(config.opacity);

    if let Some(path) = &config.path {
        log::trace!(
            "applying shadow with explicit path: radius {}, offset {:?}",
            config.radius,
            config.offset
        );

        surface.set_shadow_radius(config.radius);
        surface.set_shadow_offset(config.offset);
        surface.set_shadow_path(Some(path.clone()));
    } else {
        let rect = derived_outline_rect(surface.bounds(), config.offset);

        log::trace!(
            "applying shadow with derived outline {:?}, corner radius {}",
            rect,
            config.radius
        );
        if clamp_corner_radius(config.radius, rect.size) != config.radius {
            log::debug!(
                "shadow corner radius {} does not fit a {}x{} outline and will be clamped",
                config.radius,
                rect.size.width,
                rect.size.height
            );
        }

        let outline = surface.rounded_rect_path(rect, config.radius);
        surface.set_shadow_path(Some(outline));
        surface.set_shadow_radius(0.0);
        surface.set_shadow_offset(ZERO_OFFSET);
    }
}
