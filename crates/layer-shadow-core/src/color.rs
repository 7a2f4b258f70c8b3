//! This module re-exports types from the `rgb` crate.

pub use rgb::*;

/// A color with its RGBA channels stored as floats in the range `[0.0, 1.0]`.
pub type Color = Rgba<f32>;

/// The color black with full opacity
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};
/// The color white with full opacity
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};
/// A neutral mid-gray with full opacity
pub const GRAY: Color = gray(0.5, 1.0);
/// A color with no opacity
pub const TRANSPARENT: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};

/// A gray color where all three color channels equal `white`.
pub const fn gray(white: f32, alpha: f32) -> Color {
    Color {
        r: white,
        g: white,
        b: white,
        a: alpha,
    }
}

/// Creates a [`Color`] from 8 bit RGBA components.
pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Color {
    const RECIP: f32 = 1.0 / 255.0;

    Color {
        r: f32::from(r) * RECIP,
        g: f32::from(g) * RECIP,
        b: f32::from(b) * RECIP,
        a: f32::from(a) * RECIP,
    }
}

/// Returns `true` if none of the channels are NaN or infinite.
pub fn is_finite(color: Color) -> bool {
    color.r.is_finite() && color.g.is_finite() && color.b.is_finite() && color.a.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_is_neutral() {
        assert_eq!(GRAY.r, GRAY.g);
        assert_eq!(GRAY.g, GRAY.b);
        assert_eq!(GRAY.a, 1.0);
    }

    #[test]
    fn from_rgba8_scales_channels() {
        let c = from_rgba8(255, 0, 51, 255);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 0.2).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn finite_check() {
        assert!(is_finite(TRANSPARENT));
        assert!(!is_finite(gray(f32::NAN, 1.0)));
        assert!(!is_finite(gray(0.0, f32::INFINITY)));
    }
}
