use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tabula_protocol::{PackedColor, Rect};

/// Each object is a square whose side is `font.size` times this factor.
pub const OBJECT_SIZE_FACTOR: f64 = 2.0;

/// Position of an object's top-left corner in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Font metadata attached to a board object. The viewer only uses `size`,
/// which also drives the object's rendered extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub size: f64,
}

/// Packed fill (`bg`) and stroke (`st`) colors for one object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectTheme {
    pub bg: PackedColor,
    pub st: PackedColor,
}

/// A single positioned node on the board. Read-only to the viewer:
/// consumed once to produce static draw calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardObject {
    pub position: Position,
    pub font: FontSpec,
    pub theme: ObjectTheme,
}

impl BoardObject {
    /// The object's footprint in canvas units.
    pub fn rect(&self) -> Rect {
        let side = self.font.size * OBJECT_SIZE_FACTOR;
        Rect::new(self.position.x, self.position.y, side, side)
    }
}

/// A keyed collection of board objects.
///
/// `BTreeMap` keeps iteration order deterministic, so a board always
/// produces the same render command list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Board {
    pub objects: BTreeMap<String, BoardObject>,
}

impl Board {
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Look up an object by its board key.
    pub fn object(&self, id: &str) -> Option<&BoardObject> {
        self.objects.get(id)
    }

    /// Union of all object rects, or `None` for an empty board.
    pub fn bounding_rect(&self) -> Option<Rect> {
        let mut iter = self.objects.values();
        let first = iter.next()?.rect();
        Some(iter.fold(first, |acc, obj| acc.union(&obj.rect())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(x: f64, y: f64, size: f64) -> BoardObject {
        BoardObject {
            position: Position { x, y },
            font: FontSpec { size },
            theme: ObjectTheme {
                bg: PackedColor(0xFFFFFF0),
                st: PackedColor(0x0),
            },
        }
    }

    #[test]
    fn object_rect_is_double_font_size() {
        let obj = object(10.0, 20.0, 15.0);
        assert_eq!(obj.rect(), Rect::new(10.0, 20.0, 30.0, 30.0));
    }

    #[test]
    fn bounding_rect_spans_all_objects() {
        let mut board = Board::default();
        board.objects.insert("a".into(), object(0.0, 0.0, 5.0));
        board.objects.insert("b".into(), object(100.0, 50.0, 10.0));

        let bounds = board.bounding_rect().unwrap();
        assert_eq!(bounds, Rect::new(0.0, 0.0, 120.0, 70.0));
    }

    #[test]
    fn empty_board_has_no_bounds() {
        assert!(Board::default().bounding_rect().is_none());
    }
}
