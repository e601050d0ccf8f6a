use tabula_protocol::RenderCommand;

use crate::model::Board;

/// Stroke width is the object's font size divided by this.
pub const STROKE_WIDTH_DIVISOR: f64 = 20.0;

/// Render a board as a static command list: one stroked rect per object,
/// in key order, wrapped in a single group.
///
/// The list is world-space and scale-independent — pan/zoom only changes
/// the layer transform, never these commands.
pub fn render_board(board: &Board) -> Vec<RenderCommand> {
    let mut commands = Vec::with_capacity(board.len() + 2);

    commands.push(RenderCommand::BeginGroup { id: "board".into() });

    for (id, obj) in &board.objects {
        commands.push(RenderCommand::DrawRect {
            rect: obj.rect(),
            fill: obj.theme.bg.resolve(),
            stroke: obj.theme.st.resolve(),
            stroke_width: obj.font.size / STROKE_WIDTH_DIVISOR,
            object_id: Some(id.as_str().into()),
        });
    }

    commands.push(RenderCommand::EndGroup);
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BoardObject, FontSpec, ObjectTheme, Position};
    use tabula_protocol::{Color, PackedColor, Rect};

    fn board_with(entries: &[(&str, f64, f64, f64)]) -> Board {
        let mut board = Board::default();
        for &(id, x, y, size) in entries {
            board.objects.insert(
                id.to_string(),
                BoardObject {
                    position: Position { x, y },
                    font: FontSpec { size },
                    theme: ObjectTheme {
                        bg: PackedColor(0x1234567),
                        st: PackedColor(0xABCDEF0),
                    },
                },
            );
        }
        board
    }

    #[test]
    fn derives_geometry_and_colors() {
        let board = board_with(&[("note", 10.0, 20.0, 15.0)]);
        let commands = render_board(&board);
        assert_eq!(commands.len(), 3);

        let RenderCommand::DrawRect {
            rect,
            fill,
            stroke,
            stroke_width,
            object_id,
        } = &commands[1]
        else {
            panic!("expected DrawRect, got {:?}", commands[1]);
        };

        assert_eq!(*rect, Rect::new(10.0, 20.0, 30.0, 30.0));
        assert_eq!(*fill, Color::rgb(0x12, 0x34, 0x56));
        assert_eq!(*stroke, Color::rgb(0xAB, 0xCD, 0xEF));
        assert_eq!(*stroke_width, 0.75);
        assert_eq!(object_id.as_ref().unwrap(), "note");
    }

    #[test]
    fn command_order_is_deterministic() {
        let board = board_with(&[
            ("c", 0.0, 0.0, 1.0),
            ("a", 0.0, 0.0, 1.0),
            ("b", 0.0, 0.0, 1.0),
        ]);
        let ids: Vec<String> = render_board(&board)
            .iter()
            .filter_map(|cmd| match cmd {
                RenderCommand::DrawRect { object_id, .. } => {
                    object_id.as_ref().map(|id| id.to_string())
                }
                _ => None,
            })
            .collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn empty_board_is_just_the_group() {
        let commands = render_board(&Board::default());
        assert!(matches!(commands[0], RenderCommand::BeginGroup { .. }));
        assert!(matches!(commands[1], RenderCommand::EndGroup));
        assert_eq!(commands.len(), 2);
    }
}
