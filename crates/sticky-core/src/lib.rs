//! # Core types
//!
//! Everything the decoration layer shares with its host:
//!
//! - `Rect`, `Insets`: pixel geometry. Rects are stored as
//!   origin plus extent; `left()/top()/right()/bottom()` give the edges.
//! - `Color`: 8‑bit RGBA.
//! - `Density` / `Dp`: the explicit dp→px scale.
//! - `Scene` / `SceneNode`: the paint list a decoration pass appends to.
//! - `ConfigError`: rejected configuration.
//!
//! ```rust
//! use sticky_core::*;
//!
//! let row = Rect::from_ltrb(0.0, 100.0, 320.0, 148.0);
//! let band = row.with_vertical(row.top() - 24.0, row.top());
//! assert_eq!(band.h, 24.0);
//! assert!(!band.overlaps_vertically(&row));
//! ```

pub mod color;
pub mod density;
pub mod error;
pub mod geometry;
pub mod scene;

pub use color::*;
pub use density::*;
pub use error::*;
pub use geometry::*;
pub use scene::*;
