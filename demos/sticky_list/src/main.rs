use std::rc::Rc;

use sticky_core::{Color, Density, Rect, Scene};
use sticky_decor::*;
use sticky_text::{CosmicMeasure, MonospaceMeasure, TextMeasure};

const ITEMS: usize = 100;
const GROUP: i64 = 10;
const ROW_DP: i32 = 48;
const FRAMES: usize = 40;
const STEP_PX: f32 = 37.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Variant {
    Sticky,
    StickyReverse,
    Section,
    SectionReverse,
    HeaderRows,
    HeaderRowsReverse,
    HeaderRowsGrid,
    HeaderRowsGridReverse,
}

impl Variant {
    const ALL: [Variant; 8] = [
        Variant::Sticky,
        Variant::StickyReverse,
        Variant::Section,
        Variant::SectionReverse,
        Variant::HeaderRows,
        Variant::HeaderRowsReverse,
        Variant::HeaderRowsGrid,
        Variant::HeaderRowsGridReverse,
    ];

    fn name(self) -> &'static str {
        match self {
            Variant::Sticky => "sticky",
            Variant::StickyReverse => "sticky-reverse",
            Variant::Section => "section",
            Variant::SectionReverse => "section-reverse",
            Variant::HeaderRows => "header-rows",
            Variant::HeaderRowsReverse => "header-rows-reverse",
            Variant::HeaderRowsGrid => "header-rows-grid",
            Variant::HeaderRowsGridReverse => "header-rows-grid-reverse",
        }
    }

    fn orientation(self) -> Orientation {
        match self {
            Variant::StickyReverse
            | Variant::SectionReverse
            | Variant::HeaderRowsReverse
            | Variant::HeaderRowsGridReverse => Orientation::Reverse,
            _ => Orientation::Forward,
        }
    }
}

type Items = Rc<Vec<Item>>;
type Rows = HeaderRowDecor<EdgeAligned<ValueLabel<Items>, Rc<dyn TextMeasure>>, SectionItems<Items>>;

struct Demo {
    density: Density,
    viewport: Rect,
    measure: Rc<dyn TextMeasure>,
}

impl Demo {
    fn pill(&self) -> TextDrawableBuilder {
        TextDrawableBuilder::new()
            .density(self.density)
            .text_size_dp(14)
            .text_color(Color::from_hex("#212121"))
            .background(Color::LIGHT_GRAY)
            .padding_symmetric_dp(12, 4)
            .corner_radius_dp(14)
    }

    fn header_row(&self) -> TextDrawableBuilder {
        TextDrawableBuilder::new()
            .density(self.density)
            .text_size_dp(16)
            .text_color(Color::WHITE)
            .background(Color::from_hex("#1E1E1E"))
            .padding_symmetric_dp(16, 12)
    }

    fn header_rows(&self, orientation: Orientation) -> anyhow::Result<(Rows, Items)> {
        let items = Rc::new(match orientation {
            Orientation::Forward => generate_items_with_sections(ITEMS, GROUP),
            Orientation::Reverse => generate_items_with_sections_reverse(ITEMS, GROUP),
        });
        let strategy = EdgeAligned::from_builder(
            ValueLabel::new(items.clone()),
            self.header_row(),
            self.measure.clone(),
        )?;
        Ok((HeaderRowDecor::new(strategy, SectionItems(items.clone())), items))
    }

    fn build(&self, variant: Variant) -> anyhow::Result<(Box<dyn ItemDecoration>, ListScroller)> {
        let orientation = variant.orientation();
        let row = self.density.dp_to_px_int(ROW_DP) as f32;
        let list = |count| ListScroller::new(self.viewport, row, count).orientation(orientation);

        let (decor, list): (Box<dyn ItemDecoration>, ListScroller) = match variant {
            Variant::Sticky | Variant::StickyReverse => {
                let items = Rc::new(generate_items(ITEMS));
                let labels = SectionLabeler::new(items.clone(), GROUP, orientation)?;
                let strategy = Centered::from_builder(labels, self.pill(), self.measure.clone())?;
                let condition = SectionBoundaries::new(items, GROUP, orientation)?;
                let decor = StickyDecor::new(strategy, condition, orientation)
                    .with_section_margins(4.0, 4.0)?;
                (Box::new(decor), list(ITEMS))
            }
            Variant::Section | Variant::SectionReverse => {
                let items = Rc::new(generate_items(ITEMS));
                let labels = SectionLabeler::new(items.clone(), GROUP, orientation)?;
                let strategy = Centered::from_builder(labels, self.pill(), self.measure.clone())?;
                let condition = SectionBoundaries::new(items, GROUP, orientation)?;
                let decor = SectionDecor::new(strategy, condition).with_margins(4.0, 4.0)?;
                (Box::new(decor), list(ITEMS))
            }
            Variant::HeaderRows | Variant::HeaderRowsReverse => {
                let (decor, items) = self.header_rows(orientation)?;
                (Box::new(decor), list(items.len()))
            }
            Variant::HeaderRowsGrid | Variant::HeaderRowsGridReverse => {
                let (decor, items) = self.header_rows(orientation)?;
                let kinds = items.clone();
                let spans = move |p: usize| if kinds.is_section(p) { 3 } else { 1 };
                let grid = list(items.len()).grid(LayoutShape::grid(3)?, spans.clone());
                (Box::new(decor.with_spans(spans)), grid)
            }
        };
        log::debug!("{:?}: viewport={:?} rows={}", variant, self.viewport, list.item_count());
        Ok((decor, list))
    }
}

/// Scrolls `list` frame by frame and logs what the decoration painted.
fn run(variant: Variant, mut decor: Box<dyn ItemDecoration>, mut list: ListScroller) {
    let count = list.item_count();
    log::info!("== {} ({} rows) ==", variant.name(), count);

    let mut scene = Scene::new();
    for frame_no in 0..FRAMES {
        let frame = list.snapshot(&|p: usize| decor.item_offsets(p, count));
        scene.clear();
        decor.draw_over(&frame, &mut scene);
        log::info!(
            "{:>3} offset={:>6} rows={:>2} labels={:?}",
            frame_no,
            list.get(),
            frame.rows.len(),
            scene.texts()
        );
        log::debug!("\n{}", scene.dump());

        let leftover = list.scroll_by(STEP_PX, &|p: usize| decor.item_offsets(p, count));
        if leftover != 0.0 {
            log::info!("reached the end after {} frames", frame_no + 1);
            break;
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut mono = false;
    let mut only = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--mono" => mono = true,
            name => match Variant::ALL.iter().find(|v| v.name() == name) {
                Some(v) => only = Some(*v),
                None => anyhow::bail!(
                    "unknown variant {name:?}; expected one of {:?}",
                    Variant::ALL.map(Variant::name)
                ),
            },
        }
    }

    let measure: Rc<dyn TextMeasure> = if mono {
        Rc::new(MonospaceMeasure::default())
    } else {
        Rc::new(CosmicMeasure)
    };
    let demo = Demo {
        density: Density::new(2.0)?,
        viewport: Rect::new(0.0, 0.0, 720.0, 1280.0),
        measure,
    };

    for variant in Variant::ALL {
        if only.is_some_and(|o| o != variant) {
            continue;
        }
        let (decor, list) = demo.build(variant)?;
        run(variant, decor, list);
    }
    Ok(())
}
