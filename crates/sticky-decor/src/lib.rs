//! # Section decorations
//!
//! Geometry and paint for list section markers, independent of any UI
//! toolkit. The host describes each frame with a [`LayoutSnapshot`] (the
//! viewport plus the rows it laid out) and asks a decoration for two
//! things:
//!
//! - `item_offsets(position, count)` while laying rows out, so the space
//!   for inline section bands is reserved in flow;
//! - `draw_over(frame, scene)` after painting rows, which appends rects and
//!   text to a [`Scene`](sticky_core::Scene).
//!
//! Three decorations ship:
//!
//! | Type               | Inline bands | Pinned header | Section rows      |
//! |--------------------|--------------|---------------|-------------------|
//! | [`SectionDecor`]   | yes          | no            | from a condition  |
//! | [`StickyDecor`]    | yes          | yes           | from a condition  |
//! | [`HeaderRowDecor`] | no           | yes           | rows of their own |
//!
//! Each is parameterised by a [`DecorStrategy`] ([`EdgeAligned`] or
//! [`Centered`]) deciding how labels are sized inside their slot, and a
//! [`SectionCondition`] deciding which positions start a section.
//!
//! Decorations keep no per-frame state: the same snapshot always gives the
//! same result. The only cache is each drawable's last measured label.
//!
//! ```rust
//! use sticky_core::Rect;
//! use sticky_decor::*;
//! use sticky_text::MonospaceMeasure;
//!
//! let items = generate_items(40);
//! let labels = SectionLabeler::forward(&items, 10).unwrap();
//! let strategy = EdgeAligned::from_builder(
//!     labels,
//!     TextDrawableBuilder::new().text_size(20.0),
//!     MonospaceMeasure::default(),
//! )
//! .unwrap();
//! let decor = SectionDecor::new(strategy, SectionBoundaries::forward(&items, 10).unwrap());
//!
//! assert_eq!(decor.item_offsets(0, items.len()).top, 20.0);
//! let band = decor.compute_band(0, Rect::new(0.0, 20.0, 320.0, 40.0));
//! assert_eq!(band, Some(Rect::new(0.0, 0.0, 320.0, 20.0)));
//! ```

pub mod classifier;
pub mod decoration;
pub mod drawable;
pub mod engine;
pub mod header_row;
pub mod label;
pub mod layout;
pub mod model;
pub mod scroll;
pub mod section;
pub mod sticky;
pub mod strategy;
mod tests;

pub use classifier::{GroupSize, SectionBoundaries, SectionCondition, SectionItems};
pub use decoration::{ItemDecoration, Placed, draw_all};
pub use drawable::{Gravity, TextDrawable, TextDrawableBuilder, TextStyle};
pub use engine::{HeaderSlot, Handoff, Marker, Pin, SectionRule, StickyPlan};
pub use header_row::HeaderRowDecor;
pub use label::{SectionContent, SectionLabeler, ValueLabel};
pub use layout::{LayoutShape, LayoutSnapshot, Orientation, SpanLookup, VisibleRow};
pub use model::{
    Item, ItemKind, ItemProvider, generate_items, generate_items_with_sections,
    generate_items_with_sections_reverse,
};
pub use scroll::ListScroller;
pub use section::SectionDecor;
pub use sticky::{StickyDecor, StickyFrame};
pub use strategy::{Centered, DecorStrategy, EdgeAligned};
