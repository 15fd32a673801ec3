//! Inline section dividers that scroll with their rows.

use crate::classifier::SectionCondition;
use crate::decoration::{ItemDecoration, Placed};
use crate::engine::Marker;
use crate::layout::LayoutSnapshot;
use crate::strategy::DecorStrategy;
use sticky_core::{ConfigError, Insets, Rect, Scene};

/// Reserves a band on the visual top of every section-start row and draws
/// the section label in it. Nothing is pinned.
pub struct SectionDecor<S, C> {
    strategy: S,
    condition: C,
    margin_top: f32,
    margin_bottom: f32,
}

impl<S: DecorStrategy, C: SectionCondition> SectionDecor<S, C> {
    pub fn new(strategy: S, condition: C) -> Self {
        Self {
            strategy,
            condition,
            margin_top: 0.0,
            margin_bottom: 0.0,
        }
    }

    /// Space above and below each band, inside the reserved area.
    pub fn with_margins(mut self, top: f32, bottom: f32) -> Result<Self, ConfigError> {
        if top < 0.0 || bottom < 0.0 {
            return Err(ConfigError::NegativeSpacing {
                what: "section margin",
            });
        }
        self.margin_top = top;
        self.margin_bottom = bottom;
        Ok(self)
    }

    fn marker(&self) -> Marker {
        Marker::Band {
            height: self.strategy.section_height(),
            margin_top: self.margin_top,
            margin_bottom: self.margin_bottom,
        }
    }

    pub fn is_section_start(&self, position: usize) -> bool {
        self.condition.is_section_start(position)
    }

    pub fn section_label(&self, position: usize) -> Option<String> {
        self.strategy.section_content(position)
    }

    /// Band reserved for `position` given its row bounds, or `None` if the
    /// row does not start a section.
    pub fn compute_band(&self, position: usize, row_bounds: Rect) -> Option<Rect> {
        self.is_section_start(position)
            .then(|| self.marker().rect(row_bounds))
    }

    /// Painted bounds of every section marker visible this frame.
    pub fn sections(&mut self, frame: &LayoutSnapshot) -> Vec<Placed> {
        let mut out = Vec::new();
        if frame.item_count == 0 {
            return out;
        }
        for row in frame.valid_rows() {
            let Some(band) = self.compute_band(row.position, row.bounds) else {
                continue;
            };
            let Some(bounds) = self.strategy.section_bounds(row.position, band) else {
                continue;
            };
            if let Some(label) = self.strategy.section_content(row.position) {
                out.push(Placed {
                    position: row.position,
                    bounds,
                    label,
                });
            }
        }
        out
    }
}

impl<S: DecorStrategy, C: SectionCondition> ItemDecoration for SectionDecor<S, C> {
    fn item_offsets(&self, position: usize, item_count: usize) -> Insets {
        if position < item_count && self.is_section_start(position) {
            self.marker().reserve()
        } else {
            Insets::ZERO
        }
    }

    fn draw_over(&mut self, frame: &LayoutSnapshot, scene: &mut Scene) {
        let sections = self.sections(frame);
        if sections.is_empty() {
            return;
        }
        log::trace!("sections: {:?}", sections.iter().map(|s| s.position).collect::<Vec<_>>());
        scene.with_clip(frame.viewport, |scene| {
            for s in &sections {
                self.strategy.draw_section(s.position, s.bounds, scene);
            }
        });
    }
}
