use crate::layout::LayoutSnapshot;
use sticky_core::{Insets, Rect, Scene};

/// A decoration the host runs alongside its list.
///
/// The host asks for `item_offsets` while laying rows out and calls
/// `draw_over` once per frame after the rows are painted.
pub trait ItemDecoration {
    /// Extra space to reserve around the row at `position`.
    fn item_offsets(&self, _position: usize, _item_count: usize) -> Insets {
        Insets::ZERO
    }

    /// Appends this frame's decoration to `scene`. Draws nothing for empty
    /// lists or snapshots it cannot make sense of.
    fn draw_over(&mut self, frame: &LayoutSnapshot, scene: &mut Scene);
}

/// A resolved, labelled rect.
#[derive(Clone, Debug, PartialEq)]
pub struct Placed {
    pub position: usize,
    pub bounds: Rect,
    pub label: String,
}

/// Runs every decoration over one frame, in order.
pub fn draw_all(decorations: &mut [Box<dyn ItemDecoration>], frame: &LayoutSnapshot, scene: &mut Scene) {
    for d in decorations.iter_mut() {
        d.draw_over(frame, scene);
    }
}
