use lifecycle_layout::Point;
use serde::{Deserialize, Serialize};

/// Zoom/pan transform applied to the whole drawing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub scale: f64,
    pub translate: Point,
    pub min_scale: f64,
    pub max_scale: f64,
}

impl Viewport {
    pub fn new(min_scale: f64, max_scale: f64) -> Self {
        Self {
            scale: 1.0,
            translate: Point::default(),
            min_scale,
            max_scale,
        }
    }

    /// Multiply the scale by `factor` keeping `focus` fixed on screen.
    ///
    /// The scale is clamped to `[min_scale, max_scale]`.
    pub fn zoom_by(&mut self, factor: f64, focus: Point) {
        let next = (self.scale * factor).clamp(self.min_scale, self.max_scale);
        let ratio = next / self.scale;
        self.translate = Point::new(
            focus.x - (focus.x - self.translate.x) * ratio,
            focus.y - (focus.y - self.translate.y) * ratio,
        );
        self.scale = next;
    }

    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.translate.x += dx;
        self.translate.y += dy;
    }

    pub fn reset(&mut self) {
        self.scale = 1.0;
        self.translate = Point::default();
    }

    /// SVG `transform` attribute value
    pub fn transform(&self) -> String {
        format!(
            "translate({:.2},{:.2}) scale({:.4})",
            self.translate.x, self.translate.y, self.scale
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.5, 5.0)
    }
}
