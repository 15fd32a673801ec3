use cosmic_text::{Attrs, Buffer, FontSystem, Metrics, Shaping, fontdb};
use once_cell::sync::OnceCell;
use parking_lot::Mutex;

/// Line height as a multiple of the font size, matching how buffers are laid
/// out below.
pub const LINE_HEIGHT_FACTOR: f32 = 1.3;

/// Extent of one shaped line of text, relative to its baseline.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtent {
    /// Advance width of the whole line.
    pub width: f32,
    /// Distance from the top of the line box to the baseline.
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the line box.
    pub descent: f32,
}

impl TextExtent {
    /// Height of the line box. Depends on font metrics only, never on which
    /// glyphs are in the string.
    pub fn height(&self) -> f32 {
        self.ascent + self.descent
    }
}

/// Something that can measure a single line of text at a pixel size.
pub trait TextMeasure {
    fn measure(&self, text: &str, px: f32) -> TextExtent;
}

impl<M: TextMeasure + ?Sized> TextMeasure for &M {
    fn measure(&self, text: &str, px: f32) -> TextExtent {
        (**self).measure(text, px)
    }
}

impl<M: TextMeasure + ?Sized> TextMeasure for std::rc::Rc<M> {
    fn measure(&self, text: &str, px: f32) -> TextExtent {
        (**self).measure(text, px)
    }
}

impl<M: TextMeasure + ?Sized> TextMeasure for Box<M> {
    fn measure(&self, text: &str, px: f32) -> TextExtent {
        (**self).measure(text, px)
    }
}

/// Fixed-advance measurer: every char is `advance * px` wide, ascent is
/// `0.8 * px` and descent `0.2 * px`.
///
/// Headless hosts and tests use this so layout never depends on which fonts
/// happen to be installed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceMeasure {
    pub advance: f32,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self { advance: 0.5 }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, text: &str, px: f32) -> TextExtent {
        TextExtent {
            width: text.chars().count() as f32 * px * self.advance,
            ascent: px * 0.8,
            descent: px * 0.2,
        }
    }
}

struct Engine {
    fs: FontSystem,
}

// One font system for the whole process; system fonts are scanned once.
static ENGINE: OnceCell<Mutex<Engine>> = OnceCell::new();

fn engine() -> &'static Mutex<Engine> {
    ENGINE.get_or_init(|| {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        log::debug!("loaded {} font faces", db.len());
        let fs = FontSystem::new_with_locale_and_db("en-US".to_string(), db);
        Mutex::new(Engine { fs })
    })
}

/// Measures with real shaping through cosmic-text.
#[derive(Clone, Copy, Debug, Default)]
pub struct CosmicMeasure;

impl TextMeasure for CosmicMeasure {
    // Shape a single-line string (no wrapping).
    fn measure(&self, text: &str, px: f32) -> TextExtent {
        let mut eng = engine().lock();
        let fs = &mut eng.fs;
        let line_height = px * LINE_HEIGHT_FACTOR;

        let mut buf = Buffer::new(fs, Metrics::new(px, line_height));
        {
            let mut b = buf.borrow_with(fs);
            b.set_size(None, None);
            b.set_text(text, &Attrs::new(), Shaping::Advanced, None);
            b.shape_until_scroll(true);
        }

        // Empty strings still get a line box so heights stay stable.
        let mut out = TextExtent {
            width: 0.0,
            ascent: px,
            descent: line_height - px,
        };
        for run in buf.layout_runs() {
            out.width = out.width.max(run.line_w);
            let ascent = run.line_y - run.line_top;
            out.ascent = ascent;
            out.descent = (run.line_height - ascent).max(0.0);
        }
        out
    }
}
