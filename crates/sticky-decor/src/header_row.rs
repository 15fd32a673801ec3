//! Sticky header for lists whose section headers are rows of their own.
//!
//! The host lays the header rows out like any other row; this decoration
//! only pins a copy of the current one to the top of the viewport. In a
//! grid, a row that spans every column counts as a header row even if the
//! host's condition says otherwise.

use crate::classifier::SectionCondition;
use crate::decoration::{ItemDecoration, Placed};
use crate::engine::{self, Marker, Pin, SectionRule, StickyPlan};
use crate::layout::{LayoutSnapshot, SpanLookup};
use crate::strategy::DecorStrategy;
use sticky_core::{Insets, Rect, Scene};

pub struct HeaderRowDecor<S, C> {
    strategy: S,
    condition: C,
    spans: Option<Box<dyn SpanLookup>>,
}

impl<S: DecorStrategy, C: SectionCondition> HeaderRowDecor<S, C> {
    pub fn new(strategy: S, condition: C) -> Self {
        Self {
            strategy,
            condition,
            spans: None,
        }
    }

    /// Span sizes for positions outside the visible rows, when the host
    /// lays out a grid.
    pub fn with_spans(mut self, spans: impl SpanLookup + 'static) -> Self {
        self.spans = Some(Box::new(spans));
        self
    }

    fn pin(&self) -> Pin {
        Pin {
            header_height: self.strategy.header_height(),
            margin_top: 0.0,
            margin_bottom: 0.0,
        }
    }

    fn rule(&self) -> SectionRule<'_, C> {
        SectionRule::new(&self.condition).with_spans(self.spans.as_deref())
    }

    /// True when the row at `position` is a header row in this frame.
    pub fn is_header_row(&self, frame: &LayoutSnapshot, position: usize) -> bool {
        self.rule().is_boundary(frame, position)
    }

    /// Header row governing `position`.
    pub fn section_of(&self, frame: &LayoutSnapshot, position: usize) -> Option<usize> {
        self.rule().resolve(frame, position)
    }

    pub fn section_label(&self, position: usize) -> Option<String> {
        self.strategy.header_content(position)
    }

    pub fn plan(&self, frame: &LayoutSnapshot) -> StickyPlan {
        engine::plan(frame, &self.rule(), self.pin(), Marker::Row, &|_: usize| {
            Insets::ZERO
        })
    }

    pub fn compute_header_rect(&mut self, frame: &LayoutSnapshot) -> Option<Rect> {
        let header = self.plan(frame).header?;
        self.strategy.header_bounds(header.section, header.slot)
    }

    /// Bounds of the header row pushing the pinned header out.
    pub fn compute_handoff_rect(&self, frame: &LayoutSnapshot) -> Option<Rect> {
        self.plan(frame).handoff.map(|h| h.marker)
    }

    /// The pinned header for this frame.
    pub fn header(&mut self, frame: &LayoutSnapshot) -> Option<Placed> {
        let h = self.plan(frame).header?;
        let bounds = self.strategy.header_bounds(h.section, h.slot)?;
        let label = self.strategy.header_content(h.section)?;
        Some(Placed {
            position: h.section,
            bounds,
            label,
        })
    }
}

impl<S: DecorStrategy, C: SectionCondition> ItemDecoration for HeaderRowDecor<S, C> {
    fn draw_over(&mut self, frame: &LayoutSnapshot, scene: &mut Scene) {
        let Some(h) = self.header(frame) else {
            return;
        };
        log::trace!("header row {} at {:?}", h.position, h.bounds);
        scene.with_clip(frame.viewport, |scene| {
            self.strategy.draw_header(h.position, h.bounds, scene);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::SectionItems;
    use crate::drawable::TextDrawableBuilder;
    use crate::label::ValueLabel;
    use crate::layout::{LayoutShape, Orientation};
    use crate::model::{
        Item, ItemProvider, generate_items_with_sections, generate_items_with_sections_reverse,
    };
    use crate::scroll::ListScroller;
    use crate::strategy::EdgeAligned;
    use std::rc::Rc;
    use sticky_text::MonospaceMeasure;

    type Items = Rc<Vec<Item>>;

    const VIEWPORT: Rect = Rect {
        x: 0.0,
        y: 0.0,
        w: 300.0,
        h: 200.0,
    };

    fn strategy(items: Items) -> EdgeAligned<ValueLabel<Items>, MonospaceMeasure> {
        // 20px text plus 10px padding matches the 40px rows
        let builder = TextDrawableBuilder::new()
            .text_size(20.0)
            .padding_symmetric(12.0, 10.0);
        EdgeAligned::from_builder(ValueLabel::new(items), builder, MonospaceMeasure::default())
            .unwrap()
    }

    fn linear(items: &Items, orientation: Orientation, offset: f32) -> LayoutSnapshot {
        let none = |_: usize| Insets::ZERO;
        let mut list = ListScroller::new(VIEWPORT, 40.0, items.len()).orientation(orientation);
        list.set_offset(offset, &none);
        list.snapshot(&none)
    }

    #[test]
    fn pins_the_current_header_row() {
        let items: Items = Rc::new(generate_items_with_sections(30, 10));
        let mut d = HeaderRowDecor::new(strategy(items.clone()), SectionItems(items.clone()));
        let frame = linear(&items, Orientation::Forward, 100.0);
        let h = d.header(&frame).unwrap();
        assert_eq!(h.position, 0);
        assert_eq!(h.label, "0th");
        assert_eq!(h.bounds, Rect::new(0.0, 0.0, 300.0, 40.0));
        assert_eq!(d.compute_handoff_rect(&frame), None);
    }

    #[test]
    fn next_header_row_pushes_it_out() {
        let items: Items = Rc::new(generate_items_with_sections(30, 10));
        let mut d = HeaderRowDecor::new(strategy(items.clone()), SectionItems(items.clone()));
        // header row 10 spans 10..50
        let frame = linear(&items, Orientation::Forward, 390.0);
        assert_eq!(
            d.compute_handoff_rect(&frame),
            Some(Rect::new(0.0, 10.0, 300.0, 40.0))
        );
        assert_eq!(
            d.compute_header_rect(&frame),
            Some(Rect::from_ltrb(0.0, -30.0, 300.0, 10.0))
        );
        assert_eq!(d.header(&frame).map(|h| h.label).as_deref(), Some("0th"));

        let frame = linear(&items, Orientation::Forward, 400.0);
        assert_eq!(d.header(&frame).map(|h| h.label).as_deref(), Some("10th"));
    }

    #[test]
    fn reverse_resolves_toward_the_tail() {
        let items: Items = Rc::new(generate_items_with_sections_reverse(21, 10));
        let d = HeaderRowDecor::new(strategy(items.clone()), SectionItems(items.clone()));
        let frame = linear(&items, Orientation::Reverse, 0.0);
        assert_eq!(d.section_of(&frame, 3), Some(9));
        assert_eq!(d.section_of(&frame, 12), Some(20));
        assert_eq!(d.section_label(9).as_deref(), Some("0th"));
    }

    #[test]
    fn full_span_rows_are_header_rows_in_a_grid() {
        let items: Items = Rc::new(generate_items_with_sections(30, 10));
        let kinds = items.clone();
        let spans = move |p: usize| if kinds.is_section(p) { 3 } else { 1 };
        let never = |_: usize| false;
        let mut d = HeaderRowDecor::new(strategy(items.clone()), never).with_spans(spans.clone());

        let list = ListScroller::new(VIEWPORT, 40.0, items.len())
            .grid(LayoutShape::grid(3).unwrap(), spans);
        let frame = list.snapshot(&|_: usize| Insets::ZERO);
        assert!(d.is_header_row(&frame, 0));
        assert!(!d.is_header_row(&frame, 1));
        // position 21 is off screen; its span comes from the lookup
        assert!(frame.find(21).is_none());
        assert!(d.is_header_row(&frame, 21));
        assert_eq!(d.section_of(&frame, 9), Some(0));

        let h = d.header(&frame).unwrap();
        assert_eq!((h.position, h.label.as_str()), (0, "0th"));
    }

    #[test]
    fn linear_layouts_ignore_spans() {
        let items: Items = Rc::new(generate_items_with_sections(30, 10));
        let d = HeaderRowDecor::new(strategy(items.clone()), |_: usize| false)
            .with_spans(|_: usize| 3);
        let frame = linear(&items, Orientation::Forward, 0.0);
        assert!(!d.is_header_row(&frame, 0));
        assert_eq!(d.plan(&frame), StickyPlan::default());
    }

    #[test]
    fn no_offsets_reserved() {
        let items: Items = Rc::new(generate_items_with_sections(30, 10));
        let d = HeaderRowDecor::new(strategy(items.clone()), SectionItems(items));
        assert_eq!(d.item_offsets(0, 34), Insets::ZERO);
    }
}
