//! Drop shadows for layers and the views that own them.
//!
//! A [`ShadowStyle`] either applies a [`ShadowConfig`] or clears the shadow.
//! [`apply_shadow`] writes it into any [`ShadowSurface`], and
//! [`apply_owner_shadow`] does the same through a [`ShadowOwner`].

mod layer;
mod shadow;
mod styler;
mod surface;

pub mod error;

pub use error::ShadowError;
pub use layer::{Layer, LayerShadow, View};
pub use shadow::{ShadowConfig, ShadowStyle};
pub use styler::{apply_owner_shadow, apply_shadow, derived_outline_rect, ShadowStyler};
pub use surface::{ShadowOwner, ShadowSurface};

pub use layer_shadow_core::*;

pub use layer_shadow_path as path;
