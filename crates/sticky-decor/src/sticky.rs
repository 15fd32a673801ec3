//! # Sticky header over inline sections
//!
//! [`StickyDecor`] reserves a band on every section-start row, like
//! [`SectionDecor`](crate::SectionDecor), and also pins a header to the top
//! of the viewport that always names the section currently under it. When
//! the next section's band reaches the header it pushes the header out, so
//! the two never overlap.
//!
//! ```rust
//! use std::rc::Rc;
//! use sticky_core::{Insets, Rect, Scene};
//! use sticky_decor::*;
//! use sticky_text::MonospaceMeasure;
//!
//! let items = Rc::new(generate_items(100));
//! let labels = SectionLabeler::forward(items.clone(), 10).unwrap();
//! let strategy = Centered::from_builder(
//!     labels,
//!     TextDrawableBuilder::new().text_size(20.0),
//!     MonospaceMeasure::default(),
//! )
//! .unwrap();
//! let condition = SectionBoundaries::forward(items, 10).unwrap();
//! let mut decor = StickyDecor::new(strategy, condition, Orientation::Forward);
//!
//! let list = ListScroller::new(Rect::new(0.0, 0.0, 320.0, 480.0), 40.0, 100);
//! let frame = list.snapshot(&|p: usize| decor.item_offsets(p, 100));
//! let mut scene = Scene::new();
//! decor.draw_over(&frame, &mut scene);
//! // the header is painted last, over the next section's band
//! assert_eq!(scene.texts(), vec!["10th", "0th"]);
//! ```

use crate::classifier::SectionCondition;
use crate::decoration::{ItemDecoration, Placed};
use crate::engine::{self, Marker, Pin, SectionRule, StickyPlan};
use crate::layout::{LayoutSnapshot, Orientation};
use crate::strategy::DecorStrategy;
use sticky_core::{ConfigError, Insets, Rect, Scene};

/// Everything drawn for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StickyFrame {
    pub header: Option<Placed>,
    /// Section marker pushing the header out, if any.
    pub handoff: Option<Placed>,
    /// Other section markers still visible below the header.
    pub sections: Vec<Placed>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Margins {
    top: f32,
    bottom: f32,
}

impl Margins {
    fn new(top: f32, bottom: f32, what: &'static str) -> Result<Self, ConfigError> {
        if top < 0.0 || bottom < 0.0 {
            return Err(ConfigError::NegativeSpacing { what });
        }
        Ok(Self { top, bottom })
    }
}

pub struct StickyDecor<S, C> {
    strategy: S,
    condition: C,
    orientation: Orientation,
    section: Margins,
    header: Option<Margins>,
}

impl<S: DecorStrategy, C: SectionCondition> StickyDecor<S, C> {
    /// `orientation` must match the host's; it decides where the extra
    /// header space goes in a reversed list.
    pub fn new(strategy: S, condition: C, orientation: Orientation) -> Self {
        log::debug!("sticky decor: orientation={orientation:?}");
        Self {
            strategy,
            condition,
            orientation,
            section: Margins::default(),
            header: None,
        }
    }

    pub fn with_section_margins(mut self, top: f32, bottom: f32) -> Result<Self, ConfigError> {
        self.section = Margins::new(top, bottom, "section margin")?;
        Ok(self)
    }

    /// Header margins. Unset, they follow the section margins.
    pub fn with_header_margins(mut self, top: f32, bottom: f32) -> Result<Self, ConfigError> {
        self.header = Some(Margins::new(top, bottom, "header margin")?);
        Ok(self)
    }

    fn header_margins(&self) -> Margins {
        self.header.unwrap_or(self.section)
    }

    fn marker(&self) -> Marker {
        Marker::Band {
            height: self.strategy.section_height(),
            margin_top: self.section.top,
            margin_bottom: self.section.bottom,
        }
    }

    fn pin(&self) -> Pin {
        let m = self.header_margins();
        Pin {
            header_height: self.strategy.header_height(),
            margin_top: m.top,
            margin_bottom: m.bottom,
        }
    }

    pub fn is_section_start(&self, position: usize) -> bool {
        self.condition.is_section_start(position)
    }

    pub fn section_label(&self, position: usize) -> Option<String> {
        self.strategy.section_content(position)
    }

    pub fn header_label(&self, position: usize) -> Option<String> {
        self.strategy.header_content(position)
    }

    pub fn compute_band(&self, position: usize, row_bounds: Rect) -> Option<Rect> {
        self.is_section_start(position)
            .then(|| self.marker().rect(row_bounds))
    }

    /// Header and hand-off slots for this frame, before the strategy sizes
    /// them.
    pub fn plan(&self, frame: &LayoutSnapshot) -> StickyPlan {
        let rule = SectionRule::new(&self.condition);
        let count = frame.item_count;
        engine::plan(frame, &rule, self.pin(), self.marker(), &|p: usize| {
            self.item_offsets(p, count)
        })
    }

    /// Painted bounds of the pinned header, or `None` when no section
    /// governs the top of the viewport.
    pub fn compute_header_rect(&mut self, frame: &LayoutSnapshot) -> Option<Rect> {
        let header = self.plan(frame).header?;
        self.strategy.header_bounds(header.section, header.slot)
    }

    /// Painted bounds of the section marker pushing the header out.
    pub fn compute_handoff_rect(&mut self, frame: &LayoutSnapshot) -> Option<Rect> {
        let handoff = self.plan(frame).handoff?;
        self.strategy.section_bounds(handoff.position, handoff.marker)
    }

    /// Resolves everything drawn this frame. Bands that have scrolled under
    /// the header's resting place are left out; the hand-off band never is.
    pub fn layout(&mut self, frame: &LayoutSnapshot) -> StickyFrame {
        if frame.item_count == 0 {
            return StickyFrame::default();
        }
        let plan = self.plan(frame);
        let resting = self.pin().resting_top(frame.viewport);
        let handoff_at = plan.handoff.map(|h| h.position);

        let header = plan.header.and_then(|h| {
            let bounds = self.strategy.header_bounds(h.section, h.slot)?;
            let label = self.strategy.header_content(h.section)?;
            Some(Placed {
                position: h.section,
                bounds,
                label,
            })
        });
        let handoff = plan
            .handoff
            .and_then(|h| self.place_section(h.position, h.marker));

        let bands: Vec<(usize, Rect)> = frame
            .valid_rows()
            .filter(|r| Some(r.position) != handoff_at)
            .filter_map(|r| Some((r.position, self.compute_band(r.position, r.bounds)?)))
            .filter(|(_, band)| band.top() > resting)
            .collect();
        let sections = bands
            .into_iter()
            .filter_map(|(p, band)| self.place_section(p, band))
            .collect();

        StickyFrame {
            header,
            handoff,
            sections,
        }
    }

    fn place_section(&mut self, position: usize, band: Rect) -> Option<Placed> {
        let bounds = self.strategy.section_bounds(position, band)?;
        let label = self.strategy.section_content(position)?;
        Some(Placed {
            position,
            bounds,
            label,
        })
    }
}

impl<S: DecorStrategy, C: SectionCondition> ItemDecoration for StickyDecor<S, C> {
    /// Section starts reserve their band. In a reversed list the last row
    /// also reserves `header_height + header_margin_top + header_margin_bottom`
    /// above it. Layouts that counted the header top margin twice there get
    /// a different amount of room when both margins differ.
    fn item_offsets(&self, position: usize, item_count: usize) -> Insets {
        if position >= item_count {
            return Insets::ZERO;
        }
        let mut offsets = if self.is_section_start(position) {
            self.marker().reserve()
        } else {
            Insets::ZERO
        };
        // The last row of a reversed list is drawn at the very top: leave
        // room for the header above its band.
        if self.orientation == Orientation::Reverse && position + 1 == item_count {
            let pin = self.pin();
            offsets = offsets + Insets::top(pin.header_height + pin.margin_top + pin.margin_bottom);
        }
        offsets
    }

    fn draw_over(&mut self, frame: &LayoutSnapshot, scene: &mut Scene) {
        let f = self.layout(frame);
        if f.header.is_none() && f.handoff.is_none() && f.sections.is_empty() {
            return;
        }
        scene.with_clip(frame.viewport, |scene| {
            for s in f.sections.iter().chain(f.handoff.iter()) {
                self.strategy.draw_section(s.position, s.bounds, scene);
            }
            if let Some(h) = &f.header {
                self.strategy.draw_header(h.position, h.bounds, scene);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::SectionBoundaries;
    use crate::drawable::TextDrawableBuilder;
    use crate::label::SectionLabeler;
    use crate::model::Item;
    use crate::scroll::ListScroller;
    use crate::strategy::{Centered, EdgeAligned};
    use std::rc::Rc;
    use sticky_text::MonospaceMeasure;

    type Items = Rc<Vec<Item>>;
    type Labels = SectionLabeler<Items>;
    type Bounds = SectionBoundaries<Items>;

    const VIEWPORT: Rect = Rect {
        x: 0.0,
        y: 0.0,
        w: 300.0,
        h: 400.0,
    };

    /// Rows valued by their position, so boundaries land on 0, 9, 19, 29.
    fn ranked(n: usize) -> Items {
        Rc::new((0..n).map(|i| Item::plain(i as i64)).collect())
    }

    fn builder() -> TextDrawableBuilder {
        TextDrawableBuilder::new()
            .text_size(20.0)
            .padding_symmetric(12.0, 4.0)
    }

    fn edge(orientation: Orientation) -> StickyDecor<EdgeAligned<Labels, MonospaceMeasure>, Bounds> {
        let items = ranked(32);
        let labels = SectionLabeler::new(items.clone(), 10, orientation).unwrap();
        let s = EdgeAligned::from_builder(labels, builder(), MonospaceMeasure::default()).unwrap();
        StickyDecor::new(s, SectionBoundaries::new(items, 10, orientation).unwrap(), orientation)
    }

    fn centered(orientation: Orientation) -> StickyDecor<Centered<Labels, MonospaceMeasure>, Bounds> {
        let items = ranked(32);
        let labels = SectionLabeler::new(items.clone(), 10, orientation).unwrap();
        let s = Centered::from_builder(labels, builder(), MonospaceMeasure::default()).unwrap();
        StickyDecor::new(s, SectionBoundaries::new(items, 10, orientation).unwrap(), orientation)
    }

    fn frame_at<S: DecorStrategy, C: SectionCondition>(
        decor: &StickyDecor<S, C>,
        orientation: Orientation,
        offset: f32,
    ) -> LayoutSnapshot {
        let offsets = |p: usize| decor.item_offsets(p, 32);
        let mut list = ListScroller::new(VIEWPORT, 40.0, 32).orientation(orientation);
        list.set_offset(offset, &offsets);
        list.snapshot(&offsets)
    }

    #[test]
    fn boundaries_and_labels_for_ranked_rows() {
        let d = edge(Orientation::Forward);
        let starts: Vec<_> = (0..32).filter(|&p| d.is_section_start(p)).collect();
        assert_eq!(starts, vec![0, 9, 19, 29]);
        let labels: Vec<_> = starts.iter().filter_map(|&p| d.section_label(p)).collect();
        assert_eq!(labels, vec!["0th", "10th", "20th", "30th"]);
    }

    #[test]
    fn header_rests_over_the_first_band() {
        let mut d = edge(Orientation::Forward);
        let f = d.layout(&frame_at(&d, Orientation::Forward, 0.0));
        let header = f.header.unwrap();
        assert_eq!(header.label, "0th");
        assert_eq!(header.bounds, Rect::from_ltrb(0.0, 0.0, 300.0, 28.0));
        assert_eq!(f.handoff, None);
        // band 0 is under the header; band 9 is still on screen
        assert_eq!(f.sections.iter().map(|s| s.position).collect::<Vec<_>>(), vec![9]);
    }

    #[test]
    fn incoming_band_pushes_the_header() {
        let mut d = edge(Orientation::Forward);
        // band 9 spans 8..36, the contact point is 28
        let frame = frame_at(&d, Orientation::Forward, 380.0);
        let f = d.layout(&frame);
        let handoff = f.handoff.unwrap();
        assert_eq!(handoff.position, 9);
        assert_eq!(handoff.label, "10th");
        assert_eq!(handoff.bounds, Rect::from_ltrb(0.0, 8.0, 300.0, 36.0));
        let header = f.header.unwrap();
        assert_eq!(header.label, "0th");
        assert_eq!(header.bounds, Rect::from_ltrb(0.0, -20.0, 300.0, 8.0));
        assert_eq!(d.compute_header_rect(&frame), Some(header.bounds));
        assert_eq!(d.compute_handoff_rect(&frame), Some(handoff.bounds));
    }

    #[test]
    fn header_takes_over_once_band_passes() {
        let mut d = edge(Orientation::Forward);
        for offset in [388.0, 400.0] {
            let f = d.layout(&frame_at(&d, Orientation::Forward, offset));
            assert_eq!(f.header.map(|h| h.label).as_deref(), Some("10th"), "offset {offset}");
            assert_eq!(f.handoff, None);
        }
    }

    #[test]
    fn header_never_overlaps_a_section() {
        for mut d in [edge(Orientation::Forward), edge(Orientation::Reverse)] {
            let orientation = d.orientation;
            let offsets = |p: usize| d.item_offsets(p, 32);
            let max = ListScroller::new(VIEWPORT, 40.0, 32).content_height(&offsets) - VIEWPORT.h;
            let mut offset = 0.0;
            while offset <= max {
                let f = d.layout(&frame_at(&d, orientation, offset));
                if let Some(h) = &f.header {
                    for s in f.sections.iter().chain(f.handoff.iter()) {
                        assert!(
                            !h.bounds.overlaps_vertically(&s.bounds),
                            "{orientation:?} offset {offset}: header {:?} over section {}",
                            h.bounds,
                            s.position
                        );
                    }
                }
                offset += 3.0;
            }
        }
    }

    #[test]
    fn repeated_frames_agree() {
        let mut d = centered(Orientation::Forward);
        let frame = frame_at(&d, Orientation::Forward, 380.0);
        let a = d.layout(&frame);
        let b = d.layout(&frame);
        assert_eq!(a, b);
        assert_eq!(d.compute_header_rect(&frame), d.compute_header_rect(&frame));
    }

    #[test]
    fn strategies_shape_the_header_differently() {
        let mut e = edge(Orientation::Forward);
        let mut c = centered(Orientation::Forward);
        let frame = frame_at(&e, Orientation::Forward, 100.0);
        let er = e.compute_header_rect(&frame).unwrap();
        let cr = c.compute_header_rect(&frame).unwrap();
        assert_ne!(er, cr);
        assert_eq!(er.top(), cr.top());
        // "0th" is 30px plus 24px padding, centered on 150
        assert_eq!(cr, Rect::from_ltrb(123.0, 0.0, 177.0, 28.0));
    }

    #[test]
    fn reverse_reserves_header_room_on_the_last_row() {
        let d = edge(Orientation::Reverse);
        assert_eq!(d.item_offsets(31, 32), Insets::top(56.0));
        assert_eq!(d.item_offsets(9, 32), Insets::top(28.0));
        assert_eq!(d.item_offsets(0, 32), Insets::ZERO);
        assert_eq!(edge(Orientation::Forward).item_offsets(31, 32), Insets::ZERO);
    }

    #[test]
    fn reverse_header_names_the_rows_above_the_band() {
        let mut d = edge(Orientation::Reverse);
        // at rest rows 0..9 fill the screen under section 9
        let f = d.layout(&frame_at(&d, Orientation::Reverse, 0.0));
        assert_eq!(f.header.map(|h| h.label).as_deref(), Some("0th"));

        // band 9 moves down to 12..40 and pushes the header out; the header
        // now belongs to the rows above it
        let f = d.layout(&frame_at(&d, Orientation::Reverse, 40.0));
        let handoff = f.handoff.unwrap();
        assert_eq!(handoff.position, 9);
        assert_eq!(handoff.label, "0th");
        let header = f.header.unwrap();
        assert_eq!(header.label, "10th");
        assert_eq!(header.bounds.bottom(), 12.0);
    }

    #[test]
    fn reverse_tail_keeps_its_header_whatever_the_margins() {
        for m in [0.0, 4.0] {
            let mut d = edge(Orientation::Reverse).with_section_margins(m, m).unwrap();
            let f = d.layout(&frame_at(&d, Orientation::Reverse, f32::MAX));
            let header = f.header.unwrap();
            assert_eq!(header.label, "30th", "margins={m}");
            assert_eq!(header.bounds.top(), m, "margins={m}");
        }
    }

    #[test]
    fn header_margins_follow_section_margins() {
        let d = edge(Orientation::Forward).with_section_margins(4.0, 2.0).unwrap();
        assert_eq!(d.pin().margin_top, 4.0);
        let d = d.with_header_margins(1.0, 1.0).unwrap();
        assert_eq!(d.pin().margin_top, 1.0);
        assert_eq!(d.item_offsets(0, 32), Insets::top(34.0));
        assert!(edge(Orientation::Forward).with_header_margins(0.0, -2.0).is_err());
    }

    #[test]
    fn empty_list_draws_nothing() {
        let mut d = edge(Orientation::Forward);
        let frame = LayoutSnapshot::new(VIEWPORT, 0).row(0, Rect::new(0.0, 28.0, 300.0, 40.0));
        let mut scene = Scene::new();
        d.draw_over(&frame, &mut scene);
        assert!(scene.is_empty());
        assert_eq!(d.compute_header_rect(&frame), None);
    }
}
