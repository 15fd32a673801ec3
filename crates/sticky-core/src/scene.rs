use crate::{Color, Rect};

/// Paint list produced by one decoration pass.
///
/// The host's renderer walks `nodes` in order; later nodes draw over earlier
/// ones.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub nodes: Vec<SceneNode>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    Rect {
        rect: Rect,
        color: Color,
        radius: f32,
    },
    /// `baseline` is the y of the text baseline; `rect` is the measured ink
    /// box the text occupies.
    Text {
        rect: Rect,
        baseline: f32,
        text: String,
        color: Color,
        size: f32,
    },
    PushClip {
        rect: Rect,
        radius: f32,
    },
    PopClip,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: SceneNode) {
        self.nodes.push(node);
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Runs `f` with everything it pushes clipped to `rect`.
    pub fn with_clip<R>(&mut self, rect: Rect, f: impl FnOnce(&mut Scene) -> R) -> R {
        self.nodes.push(SceneNode::PushClip { rect, radius: 0.0 });
        let out = f(self);
        self.nodes.push(SceneNode::PopClip);
        out
    }

    /// Text of every text node, in paint order.
    pub fn texts(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter_map(|n| match n {
                SceneNode::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// One line per node; stable enough to snapshot.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for n in &self.nodes {
            let line = match n {
                SceneNode::Rect { rect, color, radius } => format!(
                    "rect {} #{:02x}{:02x}{:02x}{:02x} r={}",
                    fmt_rect(rect),
                    color.0,
                    color.1,
                    color.2,
                    color.3,
                    radius
                ),
                SceneNode::Text {
                    rect,
                    baseline,
                    text,
                    size,
                    ..
                } => format!(
                    "text {:?} {} baseline={} size={}",
                    text,
                    fmt_rect(rect),
                    baseline,
                    size
                ),
                SceneNode::PushClip { rect, .. } => format!("clip {}", fmt_rect(rect)),
                SceneNode::PopClip => "unclip".to_string(),
            };
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

fn fmt_rect(r: &Rect) -> String {
    format!("[{} {} {} {}]", r.left(), r.top(), r.right(), r.bottom())
}
