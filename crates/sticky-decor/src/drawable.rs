//! A measured single line of text with an optional rounded background.

use sticky_core::{Color, ConfigError, Density, Dp, Insets, Rect, Scene, SceneNode};
use sticky_text::{TextExtent, TextMeasure};

/// Horizontal placement of the text inside the drawable's bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Gravity {
    Left,
    Right,
    #[default]
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in px.
    pub text_size: f32,
    pub text_color: Color,
    pub background: Color,
    pub corner_radius: f32,
    pub padding: Insets,
    pub gravity: Gravity,
}

/// Text drawable that re-measures only when its text changes.
///
/// Height comes from font metrics plus padding and does not depend on the
/// text. Width is the measured advance plus padding. Bounds are set either
/// explicitly or from a top-left / top-center anchor.
pub struct TextDrawable<M> {
    measure: M,
    style: TextStyle,
    text: String,
    extent: TextExtent,
    bounds: Rect,
}

impl<M: TextMeasure> TextDrawable<M> {
    fn new(measure: M, style: TextStyle) -> Self {
        let mut d = Self {
            measure,
            style,
            text: String::new(),
            extent: TextExtent::default(),
            bounds: Rect::default(),
        };
        // A non-empty measurement up front so height() is valid before the
        // first real label arrives.
        d.extent = d.measure.measure("0", style.text_size);
        d.text = "0".to_string();
        d
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Updates the text, measuring only if it differs from the current one.
    pub fn set_text(&mut self, text: &str) {
        if text != self.text {
            self.extent = self.measure.measure(text, self.style.text_size);
            self.text.clear();
            self.text.push_str(text);
        }
    }

    /// Text height plus vertical padding.
    pub fn height(&self) -> f32 {
        self.extent.height() + self.style.padding.vertical()
    }

    /// Text width plus horizontal padding.
    pub fn text_width(&self) -> f32 {
        self.extent.width + self.style.padding.horizontal()
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Sizes the drawable to its text and puts its top-left corner at
    /// (`x`, `y`). Not for full-width sections.
    pub fn set_top_left(&mut self, x: f32, y: f32) -> Rect {
        self.bounds = Rect::new(x, y, self.text_width(), self.height());
        self.bounds
    }

    /// Sizes the drawable to its text, centered horizontally on `x`, top at
    /// `y`.
    pub fn set_top_center(&mut self, x: f32, y: f32) -> Rect {
        let half = self.extent.width / 2.0;
        let p = self.style.padding;
        self.bounds = Rect::from_ltrb(
            x - half - p.left,
            y,
            x + half + p.right,
            y + self.height(),
        );
        self.bounds
    }

    fn text_x(&self) -> f32 {
        let b = self.bounds;
        match self.style.gravity {
            Gravity::Left => b.left() + self.style.padding.left,
            Gravity::Right => b.right() - self.style.padding.right - self.extent.width,
            Gravity::Center => b.center_x() - self.extent.width / 2.0,
        }
    }

    fn baseline(&self) -> f32 {
        self.bounds.center_y() + (self.extent.ascent - self.extent.descent) / 2.0
    }

    /// Paints background then text at the current bounds.
    pub fn draw(&self, scene: &mut Scene) {
        if self.style.background.is_visible() {
            scene.push(SceneNode::Rect {
                rect: self.bounds,
                color: self.style.background,
                radius: self.style.corner_radius,
            });
        }

        let x = self.text_x();
        let baseline = self.baseline();
        scene.push(SceneNode::Text {
            rect: Rect::from_ltrb(
                x,
                baseline - self.extent.ascent,
                x + self.extent.width,
                baseline + self.extent.descent,
            ),
            baseline,
            text: self.text.clone(),
            color: self.style.text_color,
            size: self.style.text_size,
        });
    }
}

/// Builder for [`TextDrawable`]. Values ending in `_dp` are converted with
/// the builder's [`Density`] and truncated to whole pixels.
#[derive(Clone, Debug)]
pub struct TextDrawableBuilder {
    density: Density,
    style: TextStyle,
}

impl Default for TextDrawableBuilder {
    fn default() -> Self {
        let density = Density::default();
        Self {
            density,
            style: TextStyle {
                text_size: Dp(12.0).to_px(density),
                text_color: Color::BLACK,
                background: Color::TRANSPARENT,
                corner_radius: 0.0,
                padding: Insets::ZERO,
                gravity: Gravity::Center,
            },
        }
    }
}

impl TextDrawableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the density used by the `_dp` setters. The default text size is
    /// re-derived from it.
    pub fn density(mut self, density: Density) -> Self {
        self.density = density;
        self.style.text_size = Dp(12.0).to_px(density);
        self
    }

    pub fn text_size(mut self, px: f32) -> Self {
        self.style.text_size = px;
        self
    }

    pub fn text_size_dp(mut self, dp: i32) -> Self {
        self.style.text_size = Dp(dp as f32).to_px(self.density);
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.style.text_color = color;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.style.background = color;
        self
    }

    pub fn corner_radius(mut self, px: f32) -> Self {
        self.style.corner_radius = px;
        self
    }

    pub fn corner_radius_dp(mut self, dp: i32) -> Self {
        self.style.corner_radius = self.density.dp_to_px_int(dp) as f32;
        self
    }

    pub fn padding(mut self, padding: Insets) -> Self {
        self.style.padding = padding;
        self
    }

    pub fn padding_symmetric(self, horizontal: f32, vertical: f32) -> Self {
        self.padding(Insets::symmetric(horizontal, vertical))
    }

    pub fn padding_symmetric_dp(self, horizontal: i32, vertical: i32) -> Self {
        let h = self.density.dp_to_px_int(horizontal) as f32;
        let v = self.density.dp_to_px_int(vertical) as f32;
        self.padding_symmetric(h, v)
    }

    pub fn gravity(mut self, gravity: Gravity) -> Self {
        self.style.gravity = gravity;
        self
    }

    pub fn style(&self) -> TextStyle {
        self.style
    }

    pub fn build<M: TextMeasure>(self, measure: M) -> Result<TextDrawable<M>, ConfigError> {
        let s = self.style;
        if !s.text_size.is_finite() || s.text_size <= 0.0 {
            return Err(ConfigError::InvalidTextSize(s.text_size));
        }
        if !s.padding.is_non_negative() {
            return Err(ConfigError::NegativeSpacing { what: "padding" });
        }
        if s.corner_radius < 0.0 {
            return Err(ConfigError::NegativeSpacing {
                what: "corner radius",
            });
        }
        Ok(TextDrawable::new(measure, s))
    }
}
