//! # Sticky geometry
//!
//! Pure per-frame geometry shared by every decoration. Nothing here keeps
//! state between frames: each call looks only at the [`LayoutSnapshot`] it
//! is given.
//!
//! The pinned header lives in a full-width *slot* at the top of the
//! viewport:
//!
//! ```text
//!   viewport.top ─┬───────────────────────  ─┐
//!                 │  margin_top              │
//!                 ├───────────────────────   │
//!                 │  header (height H)       │ contact point C
//!                 ├───────────────────────   │
//!                 │  margin_bottom           │
//!                 ┴───────────────────────  ─┘
//! ```
//!
//! Every section start has an in-flow *marker*: either a band reserved on
//! its row's visual top, or the row itself. When a marker reaches the
//! contact point (`marker.top <= C < marker.bottom + margin_bottom`) it
//! becomes the hand-off: the header's bottom is pinned to
//! `marker.top - margin_bottom` so it slides out as the marker scrolls in,
//! and keeps showing the previous section's label. Otherwise the header sits
//! at `viewport.top + margin_top` and shows the section of the row under it.
//!
//! Reversed lists still pin to the visual top; only the direction in which
//! sections are searched flips.

use crate::classifier::SectionCondition;
use crate::layout::{LayoutShape, LayoutSnapshot, Orientation, SpanLookup, VisibleRow};
use sticky_core::{Insets, Rect};

/// Pinned header dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pin {
    pub header_height: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
}

impl Pin {
    fn contact_point(&self, viewport: Rect) -> f32 {
        viewport.top() + self.margin_top + self.header_height + self.margin_bottom
    }

    /// Top of the header when nothing pushes it.
    pub fn resting_top(&self, viewport: Rect) -> f32 {
        viewport.top() + self.margin_top
    }
}

/// Where a section start's in-flow marker sits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Marker {
    /// A band reserved on the row's visual top: `margin_top`, then the band
    /// of `height`, then `margin_bottom`, then the row.
    Band {
        height: f32,
        margin_top: f32,
        margin_bottom: f32,
    },
    /// The row is its own marker; nothing is reserved.
    Row,
}

impl Marker {
    /// Space reserved in front of a section-start row.
    pub fn reserve(&self) -> Insets {
        match *self {
            Marker::Band {
                height,
                margin_top,
                margin_bottom,
            } => Insets::top(height + margin_top + margin_bottom),
            Marker::Row => Insets::ZERO,
        }
    }

    /// Marker rect for a row with the given undecorated bounds.
    pub fn rect(&self, bounds: Rect) -> Rect {
        match *self {
            Marker::Band {
                height,
                margin_bottom,
                ..
            } => {
                let bottom = bounds.top() - margin_bottom;
                bounds.with_vertical(bottom - height, bottom)
            }
            Marker::Row => bounds,
        }
    }
}

/// Section starts as the engine sees them: the host's condition, plus full
/// span rows when the layout is a grid.
pub struct SectionRule<'a, C: ?Sized> {
    condition: &'a C,
    spans: Option<&'a dyn SpanLookup>,
}

impl<'a, C: SectionCondition + ?Sized> SectionRule<'a, C> {
    pub fn new(condition: &'a C) -> Self {
        Self {
            condition,
            spans: None,
        }
    }

    pub fn with_spans(mut self, spans: Option<&'a dyn SpanLookup>) -> Self {
        self.spans = spans;
        self
    }

    fn span_of(&self, frame: &LayoutSnapshot, position: usize) -> usize {
        if let Some(row) = frame.find(position) {
            return row.span;
        }
        self.spans.map_or(1, |s| s.span_size(position))
    }

    pub fn is_boundary(&self, frame: &LayoutSnapshot, position: usize) -> bool {
        if position >= frame.item_count {
            return false;
        }
        if let LayoutShape::Grid { columns } = frame.shape
            && self.span_of(frame, position) >= columns.get()
        {
            return true;
        }
        self.condition.is_section_start(position)
    }

    /// Section start governing `position`: the nearest boundary at or
    /// before it in a forward list, at or after it in a reversed one.
    pub fn resolve(&self, frame: &LayoutSnapshot, position: usize) -> Option<usize> {
        if position >= frame.item_count {
            return None;
        }
        match frame.orientation {
            Orientation::Forward => (0..=position)
                .rev()
                .find(|&p| self.is_boundary(frame, p)),
            Orientation::Reverse => {
                (position..frame.item_count).find(|&p| self.is_boundary(frame, p))
            }
        }
    }
}

/// Header slot for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderSlot {
    /// Section start whose label the header shows.
    pub section: usize,
    /// Full-width slot, `header_height` tall.
    pub slot: Rect,
    /// Section start currently pushing the header out, if any.
    pub pushed_by: Option<usize>,
}

/// Incoming section marker during a hand-off.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Handoff {
    pub position: usize,
    pub marker: Rect,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StickyPlan {
    pub header: Option<HeaderSlot>,
    pub handoff: Option<Handoff>,
}

/// Row bounds grown by whatever the decoration reserves around them.
pub fn decorated(row: &VisibleRow, offsets: &dyn Fn(usize) -> Insets) -> Rect {
    row.bounds.outset(offsets(row.position))
}

/// Computes where the header goes this frame.
pub fn plan<C: SectionCondition + ?Sized>(
    frame: &LayoutSnapshot,
    rule: &SectionRule<'_, C>,
    pin: Pin,
    marker: Marker,
    offsets: &dyn Fn(usize) -> Insets,
) -> StickyPlan {
    if frame.item_count == 0 {
        return StickyPlan::default();
    }
    let viewport = frame.viewport;
    let contact = pin.contact_point(viewport);

    let handoff = frame
        .valid_rows()
        .filter(|r| rule.is_boundary(frame, r.position))
        .map(|r| Handoff {
            position: r.position,
            marker: marker.rect(r.bounds),
        })
        .filter(|h| h.marker.top() <= contact && contact < h.marker.bottom() + pin.margin_bottom)
        .min_by(|a, b| a.marker.top().total_cmp(&b.marker.top()));

    if let Some(h) = handoff {
        // The header still belongs to the section before the incoming one.
        // At the tail of a reversed list the incoming band is itself that
        // section.
        let previous = match frame.orientation {
            Orientation::Forward => h.position.checked_sub(1),
            Orientation::Reverse => Some((h.position + 1).min(frame.item_count - 1)),
        };
        let header = previous
            .and_then(|p| rule.resolve(frame, p))
            .map(|section| {
                let bottom = h.marker.top() - pin.margin_bottom;
                HeaderSlot {
                    section,
                    slot: viewport.with_vertical(bottom - pin.header_height, bottom),
                    pushed_by: Some(h.position),
                }
            });
        log::trace!(
            "hand-off: incoming={} header={:?}",
            h.position,
            header.map(|s| s.section)
        );
        return StickyPlan {
            header,
            handoff: Some(h),
        };
    }

    // Row under the header's bottom edge decides the section.
    let anchor = pin.resting_top(viewport) + pin.header_height;
    let leading = frame
        .valid_rows()
        .map(|r| (r.position, decorated(r, offsets)))
        .filter(|(_, d)| d.top() <= anchor)
        .max_by(|a, b| a.1.top().total_cmp(&b.1.top()).then(a.0.cmp(&b.0)));

    let header = leading
        .and_then(|(p, _)| rule.resolve(frame, p))
        .map(|section| {
            let top = pin.resting_top(viewport);
            HeaderSlot {
                section,
                slot: viewport.with_vertical(top, top + pin.header_height),
                pushed_by: None,
            }
        });
    log::trace!(
        "pinned: leading={:?} header={:?}",
        leading.map(|l| l.0),
        header.map(|s| s.section)
    );
    StickyPlan {
        header,
        handoff: None,
    }
}
