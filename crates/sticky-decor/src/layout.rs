//! What the host tells the decorations about the current frame.

use std::num::NonZeroUsize;
use sticky_core::{ConfigError, Rect};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Position 0 at the top.
    #[default]
    Forward,
    /// Position 0 at the bottom; higher positions stack upward.
    Reverse,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutShape {
    #[default]
    Linear,
    Grid { columns: NonZeroUsize },
}

impl LayoutShape {
    pub fn grid(columns: usize) -> Result<Self, ConfigError> {
        NonZeroUsize::new(columns)
            .map(|columns| LayoutShape::Grid { columns })
            .ok_or(ConfigError::ZeroGridColumns)
    }

    pub fn columns(&self) -> usize {
        match self {
            LayoutShape::Linear => 1,
            LayoutShape::Grid { columns } => columns.get(),
        }
    }
}

/// Span of a row in a grid, as decided by the host's layout.
pub trait SpanLookup {
    fn span_size(&self, position: usize) -> usize;
}

impl<F: Fn(usize) -> usize> SpanLookup for F {
    fn span_size(&self, position: usize) -> usize {
        self(position)
    }
}

/// One laid-out row. `bounds` excludes any space decorations reserved
/// around it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleRow {
    pub position: usize,
    pub bounds: Rect,
    pub span: usize,
}

/// A single frame of the host list, rebuilt by the host for every pass.
#[derive(Clone, Debug, Default)]
pub struct LayoutSnapshot {
    pub viewport: Rect,
    pub item_count: usize,
    pub orientation: Orientation,
    pub shape: LayoutShape,
    pub rows: Vec<VisibleRow>,
}

impl LayoutSnapshot {
    pub fn new(viewport: Rect, item_count: usize) -> Self {
        Self {
            viewport,
            item_count,
            ..Default::default()
        }
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn shape(mut self, shape: LayoutShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn row(self, position: usize, bounds: Rect) -> Self {
        self.row_with_span(position, bounds, 1)
    }

    pub fn row_with_span(mut self, position: usize, bounds: Rect, span: usize) -> Self {
        self.rows.push(VisibleRow {
            position,
            bounds,
            span,
        });
        self
    }

    pub fn is_reversed(&self) -> bool {
        self.orientation == Orientation::Reverse
    }

    /// Visible row at `position`, if laid out this frame.
    pub fn find(&self, position: usize) -> Option<&VisibleRow> {
        self.rows.iter().find(|r| r.position == position)
    }

    /// Rows the host reported that actually belong to the list.
    pub fn valid_rows(&self) -> impl Iterator<Item = &VisibleRow> {
        self.rows.iter().filter(move |r| r.position < self.item_count)
    }
}
