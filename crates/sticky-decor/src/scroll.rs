//! # Scroll model
//!
//! A small stand-in for the host list: fixed-height rows laid out in one
//! column or a grid, scrolled by an offset, with whatever space the
//! decorations reserve around each row. It produces the [`LayoutSnapshot`]
//! a real host would hand to the decorations each frame.
//!
//! The offset always grows toward higher positions. In a forward list that
//! moves content up; in a reversed list position 0 sits at the bottom and
//! content moves down.
//!
//! ```rust
//! use sticky_core::{Insets, Rect};
//! use sticky_decor::ListScroller;
//!
//! let mut list = ListScroller::new(Rect::new(0.0, 0.0, 320.0, 480.0), 40.0, 100);
//! let no_offsets = |_: usize| Insets::ZERO;
//! let leftover = list.scroll_by(120.0, &no_offsets);
//! assert_eq!(leftover, 0.0);
//! let frame = list.snapshot(&no_offsets);
//! assert_eq!(frame.rows[0].position, 3);
//! ```

use crate::layout::{LayoutShape, LayoutSnapshot, Orientation, SpanLookup};
use smallvec::SmallVec;
use sticky_core::{Insets, Rect};

/// Where a row landed, in content space measured from the list's start.
#[derive(Clone, Copy, Debug)]
struct Slot {
    position: usize,
    column: usize,
    span: usize,
    /// Distance from the content start to the row's leading edge.
    start: f32,
}

pub struct ListScroller {
    viewport: Rect,
    row_height: f32,
    item_count: usize,
    orientation: Orientation,
    shape: LayoutShape,
    spans: Option<Box<dyn SpanLookup>>,
    offset: f32,
}

impl ListScroller {
    pub fn new(viewport: Rect, row_height: f32, item_count: usize) -> Self {
        Self {
            viewport,
            row_height,
            item_count,
            orientation: Orientation::Forward,
            shape: LayoutShape::Linear,
            spans: None,
            offset: 0.0,
        }
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Grid shape with the span of every position. Spans wider than the
    /// grid are clamped to a full line.
    pub fn grid(mut self, shape: LayoutShape, spans: impl SpanLookup + 'static) -> Self {
        self.shape = shape;
        self.spans = Some(Box::new(spans));
        self
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn get(&self) -> f32 {
        self.offset
    }

    fn span(&self, position: usize) -> usize {
        let columns = self.shape.columns();
        self.spans
            .as_ref()
            .map_or(1, |s| s.span_size(position))
            .clamp(1, columns)
    }

    /// Rows grouped into lines, each line's leading edge in content space,
    /// plus the total content extent.
    fn lines(&self, offsets: &dyn Fn(usize) -> Insets) -> (Vec<Slot>, f32) {
        let columns = self.shape.columns();
        let mut slots = Vec::with_capacity(self.item_count);
        let mut line: SmallVec<[(usize, usize, usize); 8]> = SmallVec::new();
        let mut used = 0;
        let mut extent = 0.0;

        let mut flush = |line: &mut SmallVec<[(usize, usize, usize); 8]>, extent: &mut f32| {
            if line.is_empty() {
                return;
            }
            let lead = line
                .iter()
                .map(|&(p, _, _)| offsets(p).top)
                .fold(0.0, f32::max);
            let trail = line
                .iter()
                .map(|&(p, _, _)| offsets(p).bottom)
                .fold(0.0, f32::max);
            // Forward: leading edge is the top. Reversed: the bottom, so the
            // top offset goes after the row.
            let (before, after) = match self.orientation {
                Orientation::Forward => (lead, trail),
                Orientation::Reverse => (trail, lead),
            };
            *extent += before;
            for &(position, column, span) in line.iter() {
                slots.push(Slot {
                    position,
                    column,
                    span,
                    start: *extent,
                });
            }
            *extent += self.row_height + after;
            line.clear();
        };

        for position in 0..self.item_count {
            let span = self.span(position);
            if used + span > columns {
                flush(&mut line, &mut extent);
                used = 0;
            }
            line.push((position, used, span));
            used += span;
        }
        flush(&mut line, &mut extent);
        (slots, extent)
    }

    pub fn content_height(&self, offsets: &dyn Fn(usize) -> Insets) -> f32 {
        self.lines(offsets).1
    }

    fn max_offset(&self, offsets: &dyn Fn(usize) -> Insets) -> f32 {
        (self.content_height(offsets) - self.viewport.h).max(0.0)
    }

    pub fn set_offset(&mut self, off: f32, offsets: &dyn Fn(usize) -> Insets) {
        self.offset = off.clamp(0.0, self.max_offset(offsets));
    }

    /// Consume delta in px. Returns leftover in px.
    pub fn scroll_by(&mut self, delta: f32, offsets: &dyn Fn(usize) -> Insets) -> f32 {
        let before = self.offset;
        let new_offset = (before + delta).clamp(0.0, self.max_offset(offsets));
        self.offset = new_offset;
        delta - (new_offset - before)
    }

    /// Rows whose decorated bounds intersect the viewport, in position order.
    pub fn snapshot(&self, offsets: &dyn Fn(usize) -> Insets) -> LayoutSnapshot {
        let v = self.viewport;
        let columns = self.shape.columns() as f32;
        let col_w = v.w / columns;
        let mut frame = LayoutSnapshot::new(v, self.item_count)
            .orientation(self.orientation)
            .shape(self.shape);

        let (slots, _) = self.lines(offsets);
        for s in slots {
            let top = match self.orientation {
                Orientation::Forward => v.top() + s.start - self.offset,
                Orientation::Reverse => v.bottom() - s.start - self.row_height + self.offset,
            };
            let bounds = Rect::new(
                v.left() + s.column as f32 * col_w,
                top,
                s.span as f32 * col_w,
                self.row_height,
            );
            let decorated = bounds.outset(offsets(s.position));
            if decorated.overlaps_vertically(&v) {
                frame = frame.row_with_span(s.position, bounds, s.span);
            }
        }
        frame
    }
}
