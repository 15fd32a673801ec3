//! How a decoration turns a reserved slot into painted bounds.
//!
//! The geometry engine decides *where* sections and the pinned header go
//! (a full-width slot); a [`DecorStrategy`] decides what is written there
//! and how much of the slot the drawable occupies. Two strategies ship:
//!
//! - [`EdgeAligned`] fills the whole slot and lays the text out by the
//!   drawable's gravity (left by default).
//! - [`Centered`] shrinks to the measured text and centers it in the slot.

use crate::drawable::{Gravity, TextDrawable, TextDrawableBuilder};
use crate::label::SectionContent;
use sticky_core::{ConfigError, Rect, Scene};
use sticky_text::TextMeasure;

pub trait DecorStrategy {
    fn section_content(&self, position: usize) -> Option<String>;

    fn header_content(&self, position: usize) -> Option<String>;

    /// Height of the band reserved for a section marker.
    fn section_height(&self) -> f32;

    /// Height of the pinned header.
    fn header_height(&self) -> f32;

    /// Painted bounds for a section marker inside `band`, or `None` when the
    /// position has nothing to show.
    fn section_bounds(&mut self, position: usize, band: Rect) -> Option<Rect>;

    /// Painted bounds for the pinned header inside `slot`.
    fn header_bounds(&mut self, position: usize, slot: Rect) -> Option<Rect>;

    fn draw_section(&mut self, position: usize, bounds: Rect, scene: &mut Scene);

    fn draw_header(&mut self, position: usize, bounds: Rect, scene: &mut Scene);
}

/// Labels plus the two drawables, one per role, so a header and a section
/// on screen at once never fight over one text cache.
struct Drawables<L, M> {
    labels: L,
    section: TextDrawable<M>,
    header: TextDrawable<M>,
}

impl<L: SectionContent, M: TextMeasure> Drawables<L, M> {
    fn section_text(&mut self, position: usize) -> bool {
        match self.labels.label_for(position) {
            Some(text) => {
                self.section.set_text(&text);
                true
            }
            None => false,
        }
    }

    fn header_text(&mut self, position: usize) -> bool {
        match self.labels.label_for(position) {
            Some(text) => {
                self.header.set_text(&text);
                true
            }
            None => false,
        }
    }

    fn draw_section(&mut self, position: usize, bounds: Rect, scene: &mut Scene) {
        if self.section_text(position) {
            self.section.set_bounds(bounds);
            self.section.draw(scene);
        }
    }

    fn draw_header(&mut self, position: usize, bounds: Rect, scene: &mut Scene) {
        if self.header_text(position) {
            self.header.set_bounds(bounds);
            self.header.draw(scene);
        }
    }
}

/// Full-width markers with text placed by gravity.
pub struct EdgeAligned<L, M> {
    inner: Drawables<L, M>,
}

impl<L: SectionContent, M: TextMeasure> EdgeAligned<L, M> {
    pub fn new(labels: L, section: TextDrawable<M>, header: TextDrawable<M>) -> Self {
        Self {
            inner: Drawables {
                labels,
                section,
                header,
            },
        }
    }

    /// Both drawables from one builder. Text defaults to the left edge
    /// unless the builder already picked a gravity other than center.
    pub fn from_builder(
        labels: L,
        builder: TextDrawableBuilder,
        measure: M,
    ) -> Result<Self, ConfigError>
    where
        M: Clone,
    {
        let builder = if builder.style().gravity == Gravity::Center {
            builder.gravity(Gravity::Left)
        } else {
            builder
        };
        let section = builder.clone().build(measure.clone())?;
        let header = builder.build(measure)?;
        Ok(Self::new(labels, section, header))
    }
}

impl<L: SectionContent, M: TextMeasure> DecorStrategy for EdgeAligned<L, M> {
    fn section_content(&self, position: usize) -> Option<String> {
        self.inner.labels.label_for(position)
    }

    fn header_content(&self, position: usize) -> Option<String> {
        self.inner.labels.label_for(position)
    }

    fn section_height(&self) -> f32 {
        self.inner.section.height()
    }

    fn header_height(&self) -> f32 {
        self.inner.header.height()
    }

    fn section_bounds(&mut self, position: usize, band: Rect) -> Option<Rect> {
        self.inner.section_text(position).then_some(band)
    }

    fn header_bounds(&mut self, position: usize, slot: Rect) -> Option<Rect> {
        self.inner.header_text(position).then_some(slot)
    }

    fn draw_section(&mut self, position: usize, bounds: Rect, scene: &mut Scene) {
        self.inner.draw_section(position, bounds, scene);
    }

    fn draw_header(&mut self, position: usize, bounds: Rect, scene: &mut Scene) {
        self.inner.draw_header(position, bounds, scene);
    }
}

/// Pill-shaped markers sized to their text and centered in the slot.
pub struct Centered<L, M> {
    inner: Drawables<L, M>,
}

impl<L: SectionContent, M: TextMeasure> Centered<L, M> {
    pub fn new(labels: L, section: TextDrawable<M>, header: TextDrawable<M>) -> Self {
        Self {
            inner: Drawables {
                labels,
                section,
                header,
            },
        }
    }

    pub fn from_builder(
        labels: L,
        builder: TextDrawableBuilder,
        measure: M,
    ) -> Result<Self, ConfigError>
    where
        M: Clone,
    {
        let section = builder.clone().build(measure.clone())?;
        let header = builder.build(measure)?;
        Ok(Self::new(labels, section, header))
    }
}

impl<L: SectionContent, M: TextMeasure> DecorStrategy for Centered<L, M> {
    fn section_content(&self, position: usize) -> Option<String> {
        self.inner.labels.label_for(position)
    }

    fn header_content(&self, position: usize) -> Option<String> {
        self.inner.labels.label_for(position)
    }

    fn section_height(&self) -> f32 {
        self.inner.section.height()
    }

    fn header_height(&self) -> f32 {
        self.inner.header.height()
    }

    fn section_bounds(&mut self, position: usize, band: Rect) -> Option<Rect> {
        if !self.inner.section_text(position) {
            return None;
        }
        Some(self.inner.section.set_top_center(band.center_x(), band.top()))
    }

    fn header_bounds(&mut self, position: usize, slot: Rect) -> Option<Rect> {
        if !self.inner.header_text(position) {
            return None;
        }
        Some(self.inner.header.set_top_center(slot.center_x(), slot.top()))
    }

    fn draw_section(&mut self, position: usize, bounds: Rect, scene: &mut Scene) {
        self.inner.draw_section(position, bounds, scene);
    }

    fn draw_header(&mut self, position: usize, bounds: Rect, scene: &mut Scene) {
        self.inner.draw_header(position, bounds, scene);
    }
}
