#[cfg(test)]
mod tests {
    use crate::*;
    use insta::assert_snapshot;
    use std::rc::Rc;
    use sticky_core::{Color, Insets, Rect, Scene};
    use sticky_text::MonospaceMeasure;

    fn ranked(n: usize) -> Rc<Vec<Item>> {
        Rc::new((0..n).map(|i| Item::plain(i as i64)).collect())
    }

    fn pill() -> TextDrawableBuilder {
        TextDrawableBuilder::new()
            .text_size(20.0)
            .padding_symmetric(12.0, 4.0)
            .background(Color::LIGHT_GRAY)
            .corner_radius(14.0)
    }

    #[test]
    fn sticky_centered_handoff_scene() {
        let items = ranked(32);
        let labels = SectionLabeler::forward(items.clone(), 10).unwrap();
        let strategy = Centered::from_builder(labels, pill(), MonospaceMeasure::default()).unwrap();
        let mut decor = StickyDecor::new(
            strategy,
            SectionBoundaries::forward(items, 10).unwrap(),
            Orientation::Forward,
        );
        let offsets = |p: usize| decor.item_offsets(p, 32);
        let mut list = ListScroller::new(Rect::new(0.0, 0.0, 300.0, 400.0), 40.0, 32);
        list.set_offset(380.0, &offsets);
        let frame = list.snapshot(&offsets);

        let mut scene = Scene::new();
        decor.draw_over(&frame, &mut scene);
        assert_snapshot!(scene.dump(), @r###"
        clip [0 0 300 400]
        rect [118 8 182 36] #ccccccff r=14
        text "10th" [130 12 170 32] baseline=28 size=20
        rect [123 -20 177 8] #ccccccff r=14
        text "0th" [135 -16 165 4] baseline=0 size=20
        unclip
        "###);
    }

    #[test]
    fn inline_section_scene() {
        let items = Rc::new(generate_items(32));
        let labels = SectionLabeler::forward(items.clone(), 10).unwrap();
        let strategy = EdgeAligned::from_builder(
            labels,
            TextDrawableBuilder::new()
                .text_size(20.0)
                .padding_symmetric(12.0, 4.0),
            MonospaceMeasure::default(),
        )
        .unwrap();
        let mut decor = SectionDecor::new(strategy, SectionBoundaries::forward(items, 10).unwrap());
        let list = ListScroller::new(Rect::new(0.0, 0.0, 300.0, 200.0), 40.0, 32);
        let frame = list.snapshot(&|p: usize| decor.item_offsets(p, 32));

        let mut scene = Scene::new();
        decor.draw_over(&frame, &mut scene);
        assert_snapshot!(scene.dump(), @r###"
        clip [0 0 300 200]
        text "0th" [12 4 42 24] baseline=20 size=20
        unclip
        "###);
    }

    #[test]
    fn grid_header_row_scene() {
        let items = Rc::new(generate_items_with_sections(30, 10));
        let kinds = items.clone();
        let spans = move |p: usize| if kinds.is_section(p) { 3 } else { 1 };
        let strategy = EdgeAligned::from_builder(
            ValueLabel::new(items.clone()),
            TextDrawableBuilder::new()
                .text_size(20.0)
                .padding_symmetric(12.0, 10.0),
            MonospaceMeasure::default(),
        )
        .unwrap();
        let mut decor =
            HeaderRowDecor::new(strategy, SectionItems(items.clone())).with_spans(spans.clone());

        let none = |_: usize| Insets::ZERO;
        let mut list = ListScroller::new(Rect::new(0.0, 0.0, 300.0, 200.0), 40.0, items.len())
            .grid(LayoutShape::grid(3).unwrap(), spans);
        // section row 10 sits at 30..70, pushing the header up by 10
        list.set_offset(130.0, &none);
        let frame = list.snapshot(&none);

        let mut scene = Scene::new();
        decor.draw_over(&frame, &mut scene);
        assert_snapshot!(scene.dump(), @r###"
        clip [0 0 300 200]
        text "0th" [12 0 42 20] baseline=16 size=20
        unclip
        "###);
    }

    #[test]
    fn decorations_compose_in_order() {
        let items = ranked(32);
        let section = SectionDecor::new(
            EdgeAligned::from_builder(
                SectionLabeler::forward(items.clone(), 10).unwrap(),
                pill(),
                MonospaceMeasure::default(),
            )
            .unwrap(),
            SectionBoundaries::forward(items.clone(), 10).unwrap(),
        );
        let sticky = StickyDecor::new(
            Centered::from_builder(
                SectionLabeler::forward(items.clone(), 10).unwrap(),
                pill(),
                MonospaceMeasure::default(),
            )
            .unwrap(),
            SectionBoundaries::forward(items, 10).unwrap(),
            Orientation::Forward,
        );
        let frame = ListScroller::new(Rect::new(0.0, 0.0, 300.0, 400.0), 40.0, 32)
            .snapshot(&|p: usize| sticky.item_offsets(p, 32));

        let mut decorations: Vec<Box<dyn ItemDecoration>> = vec![Box::new(section), Box::new(sticky)];
        let mut scene = Scene::new();
        draw_all(&mut decorations, &frame, &mut scene);
        // inline bands first, then the sticky layer with the pinned header last
        assert_eq!(scene.texts(), vec!["0th", "10th", "10th", "0th"]);
    }

    #[test]
    fn scroll_sweep_keeps_header_label_in_step() {
        let items = ranked(32);
        let labels = SectionLabeler::forward(items.clone(), 10).unwrap();
        let strategy = EdgeAligned::from_builder(
            labels,
            TextDrawableBuilder::new()
                .text_size(20.0)
                .padding_symmetric(12.0, 4.0),
            MonospaceMeasure::default(),
        )
        .unwrap();
        let mut decor = StickyDecor::new(
            strategy,
            SectionBoundaries::forward(items, 10).unwrap(),
            Orientation::Forward,
        );
        let mut list = ListScroller::new(Rect::new(0.0, 0.0, 300.0, 400.0), 40.0, 32);

        let mut seen: Vec<String> = Vec::new();
        loop {
            let offsets = |p: usize| decor.item_offsets(p, 32);
            let frame = list.snapshot(&offsets);
            if let Some(h) = decor.layout(&frame).header
                && seen.last() != Some(&h.label)
            {
                seen.push(h.label);
            }
            let offsets = |p: usize| decor.item_offsets(p, 32);
            if list.scroll_by(7.0, &offsets) != 0.0 {
                break;
            }
        }
        // the last section is too short to ever reach the top
        assert_eq!(seen, vec!["0th", "10th", "20th"]);
    }
}
