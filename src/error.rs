use crate::math::Vector;

/// A [`ShadowConfig`](crate::ShadowConfig) value that cannot be rendered as
/// written.
///
/// Only returned by [`ShadowConfig::validate`](crate::ShadowConfig::validate).
/// Applying a shadow never fails.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum ShadowError {
    #[error("shadow opacity {0} is outside of the range [0, 1]")]
    InvalidOpacity(f32),

    #[error("shadow radius {0} is negative or not finite")]
    InvalidRadius(f32),

    #[error("shadow offset {0:?} is not finite")]
    NonFiniteOffset(Vector),

    #[error("shadow color has a channel that is not finite")]
    NonFiniteColor,
}
