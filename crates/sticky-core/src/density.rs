//! # Density
//!
//! Decorations are configured in density‑independent pixels (dp) and drawn
//! in physical pixels. The scale between the two is an explicit value handed
//! to whatever needs it, rather than something read from the environment:
//!
//! ```rust
//! use sticky_core::*;
//!
//! let density = Density::new(2.0).unwrap();
//! assert_eq!(Dp(12.0).to_px(density), 24.0);
//! ```

use crate::ConfigError;

/// Pixels per dp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density {
    scale: f32,
}

impl Default for Density {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl Density {
    pub fn new(scale: f32) -> Result<Self, ConfigError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ConfigError::InvalidDensity(scale));
        }
        Ok(Self { scale })
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Whole pixels, truncated the way integer layout code expects.
    pub fn dp_to_px_int(&self, dp: i32) -> i32 {
        (dp as f32 * self.scale) as i32
    }
}

/// density‑independent pixels (dp)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dp(pub f32);

impl Dp {
    pub fn to_px(self, density: Density) -> f32 {
        self.0 * density.scale
    }
}
