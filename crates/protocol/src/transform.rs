use serde::{Deserialize, Serialize};

use crate::types::{Point, Rect};

/// The single affine transform a renderer applies to the board layer.
///
/// World coordinates map to view coordinates as `p * scale + offset`.
/// The viewport controller owns the state this is derived from; renderers
/// treat a `LayerTransform` as an opaque `setTransform` payload and apply
/// it uniformly to every drawn primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerTransform {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl LayerTransform {
    pub const IDENTITY: LayerTransform = LayerTransform {
        scale: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
    };

    pub fn new(scale: f64, offset_x: f64, offset_y: f64) -> Self {
        Self {
            scale,
            offset_x,
            offset_y,
        }
    }

    /// World point → view point.
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            p.x * self.scale + self.offset_x,
            p.y * self.scale + self.offset_y,
        )
    }

    /// View point → world point. Scale is never zero in practice: the
    /// viewport controller clamps it to a positive range.
    pub fn invert(&self, p: Point) -> Point {
        Point::new(
            (p.x - self.offset_x) / self.scale,
            (p.y - self.offset_y) / self.scale,
        )
    }

    /// World rect → view rect. Axis-aligned with uniform scale, so the
    /// corners transform independently.
    pub fn apply_rect(&self, r: Rect) -> Rect {
        let origin = self.apply(Point::new(r.x, r.y));
        Rect::new(origin.x, origin.y, r.w * self.scale, r.h * self.scale)
    }
}

impl Default for LayerTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
