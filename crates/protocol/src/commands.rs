use serde::{Deserialize, Serialize};

use crate::shared_str::SharedStr;
use crate::types::{Color, Rect};

/// A single, stateless render instruction.
///
/// The core emits a `Vec<RenderCommand>` once per board; renderers consume
/// the list sequentially under the current [`crate::LayerTransform`]. Each
/// command carries all the data it needs — the list never has to be
/// regenerated when only the transform changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Draw a filled, stroked rectangle. `object_id` identifies the board
    /// object for hit-testing and tooltips.
    DrawRect {
        rect: Rect,
        fill: Color,
        stroke: Color,
        stroke_width: f64,
        object_id: Option<SharedStr>,
    },

    /// Begin a logical group (e.g. the board layer). Renderers may use
    /// this for batching or layer separation.
    BeginGroup { id: SharedStr },

    /// End the current group.
    EndGroup,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_rect_survives_json() {
        let cmd = RenderCommand::DrawRect {
            rect: Rect::new(10.0, 20.0, 30.0, 30.0),
            fill: Color::rgb(0x12, 0x34, 0x56),
            stroke: Color::rgb(0, 0, 0),
            stroke_width: 0.75,
            object_id: Some("obj-1".into()),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        let back: RenderCommand = serde_json::from_str(&json).unwrap();
        match back {
            RenderCommand::DrawRect {
                rect, object_id, ..
            } => {
                assert_eq!(rect, Rect::new(10.0, 20.0, 30.0, 30.0));
                assert_eq!(object_id.unwrap(), "obj-1");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
