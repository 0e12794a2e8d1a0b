//! Arrow outline geometry.
//!
//! The arrow is a seven-point polygon whose tip points along +x at rotation
//! zero. It is drawn from its bounding box's top-left anchor but positioned
//! and rotated by its centre.

use crate::model::constants::{ARROW_HEIGHT, ARROW_WIDTH};
use crate::model::{Point, VirtualScreen};

/// Number of vertices in the arrow outline.
pub const ARROW_VERTEX_COUNT: usize = 7;

/// Fraction of the width taken by the shaft; the head fills the rest.
const SHAFT_FRACTION: f64 = 0.4;

/// Arrow dimensions after applying the size multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowShape {
    pub width: f64,
    pub height: f64,
}

impl Default for ArrowShape {
    fn default() -> Self {
        Self::scaled(1.0)
    }
}

impl ArrowShape {
    /// Base arrow scaled by `size_multiplier`.
    pub fn scaled(size_multiplier: f64) -> Self {
        Self {
            width: ARROW_WIDTH * size_multiplier,
            height: ARROW_HEIGHT * size_multiplier,
        }
    }

    /// Outline in box-local coordinates (top-left anchor at the origin).
    pub fn outline(&self) -> [Point; ARROW_VERTEX_COUNT] {
        let (w, h) = (self.width, self.height);
        let neck = w * SHAFT_FRACTION;
        [
            Point::new(w, h / 2.0),     // tip
            Point::new(neck, 0.0),      // head, top corner
            Point::new(neck, h * 0.3),  // shaft, top inner
            Point::new(0.0, h * 0.3),   // tail, top
            Point::new(0.0, h * 0.7),   // tail, bottom
            Point::new(neck, h * 0.7),  // shaft, bottom inner
            Point::new(neck, h),        // head, bottom corner
        ]
    }

    /// Outline placed on the overlay canvas.
    ///
    /// `position` is the arrow centre in absolute screen coordinates and
    /// `rotation` is in radians. The result is in overlay-local pixels.
    pub fn place(
        &self,
        screen: &VirtualScreen,
        position: Point,
        rotation: f64,
    ) -> [Point; ARROW_VERTEX_COUNT] {
        let anchor = screen.canvas_anchor(position, self.width, self.height);
        let (half_w, half_h) = (self.width / 2.0, self.height / 2.0);
        let pivot = Point::new(anchor.x + half_w, anchor.y + half_h);
        let (sin, cos) = rotation.sin_cos();

        self.outline().map(|v| {
            let dx = v.x - half_w;
            let dy = v.y - half_h;
            Point::new(pivot.x + dx * cos - dy * sin, pivot.y + dx * sin + dy * cos)
        })
    }

    /// Rasterise the arrow into a `size` x `size` coverage mask, row-major.
    ///
    /// Used for the tray icon. The arrow is scaled to fit with a one pixel
    /// margin and centred vertically.
    pub fn rasterize(size: usize) -> Vec<bool> {
        let span = size.saturating_sub(2) as f64;
        let shape = ArrowShape {
            width: span,
            height: span * ARROW_HEIGHT / ARROW_WIDTH,
        };
        let offset = Point::new(1.0, (size as f64 - shape.height) / 2.0);
        let polygon = shape
            .outline()
            .map(|v| Point::new(v.x + offset.x, v.y + offset.y));

        let mut mask = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                let sample = Point::new(col as f64 + 0.5, row as f64 + 0.5);
                mask.push(contains(&polygon, sample));
            }
        }
        mask
    }
}

/// Even-odd point-in-polygon test.
pub fn contains(polygon: &[Point], p: Point) -> bool {
    let mut inside = false;
    let mut j = polygon.len().wrapping_sub(1);
    for i in 0..polygon.len() {
        let (a, b) = (polygon[i], polygon[j]);
        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}
