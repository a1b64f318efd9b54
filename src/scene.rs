//! Draw data handed to the presentation layer.
//!
//! The core produces a [`Scene`] once per frame, a presenter turns it into
//! actual draw calls. Nothing in this crate draws.

use glam::Vec2;

use crate::{shape::Shape, Rgba};

/// Single positioned text item.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// What to draw.
    pub content: String,
    /// Center of the rendered string.
    pub position: Vec2,
    /// Relative scale, `1.0` is the font's native size.
    pub scale: f32,
    /// Fill color.
    pub color: Rgba,
}

impl Text {
    /// Create a text item at the native font scale.
    #[must_use]
    pub fn new(content: impl Into<String>, position: Vec2, color: Rgba) -> Self {
        let content = content.into();
        let scale = 1.0;

        Self {
            content,
            position,
            scale,
            color,
        }
    }

    /// Set the relative scale.
    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;

        self
    }
}

/// Ordered draw list for a single frame.
///
/// Shapes are ordered background to foreground, the presenter is expected to
/// draw them in order and the text items on top.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    /// Shapes to draw, in order.
    pub shapes: Vec<Shape>,
    /// Text items to draw on top of the shapes.
    pub texts: Vec<Text>,
}

impl Scene {
    /// Create an empty scene with room for the expected amount of shapes.
    #[must_use]
    pub(crate) fn with_capacity(shapes: usize) -> Self {
        let shapes = Vec::with_capacity(shapes);
        let texts = Vec::new();

        Self { shapes, texts }
    }
}
