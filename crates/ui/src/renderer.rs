use egui::{CornerRadius, Pos2, Rect, Stroke, StrokeKind};
use tabula_protocol::{Color, LayerTransform, RenderCommand, SharedStr};

/// Holds state needed to find which object the user is hovering.
pub struct HitRegion {
    pub rect: Rect,
    pub object_id: SharedStr,
}

/// Result of rendering a command list: includes hit regions for interaction.
pub struct RenderResult {
    pub hit_regions: Vec<HitRegion>,
}

/// Render a list of `RenderCommand` into an egui `Painter` under the given
/// layer transform.
///
/// `origin` is the top-left pixel position of the canvas area; client
/// coordinates fed to the viewport controller are relative to it, so the
/// transform composes the same way on both the input and output paths.
pub fn render_commands(
    painter: &egui::Painter,
    commands: &[RenderCommand],
    transform: LayerTransform,
    origin: Pos2,
) -> RenderResult {
    let mut hit_regions: Vec<HitRegion> = Vec::new();

    for cmd in commands {
        let RenderCommand::DrawRect {
            rect,
            fill,
            stroke,
            stroke_width,
            object_id,
        } = cmd
        else {
            continue;
        };

        let view = transform.apply_rect(*rect);
        let egui_rect = Rect::from_min_size(
            Pos2::new(view.x as f32 + origin.x, view.y as f32 + origin.y),
            egui::vec2(view.w as f32, view.h as f32),
        );

        if egui_rect.width() < 0.5 || egui_rect.height() < 0.5 {
            continue;
        }

        // Cull off-screen
        if !painter.clip_rect().intersects(egui_rect) {
            continue;
        }

        painter.rect_filled(egui_rect, CornerRadius::ZERO, to_color32(*fill));

        // The stroke lives on the transformed layer, so it scales with zoom.
        let width = (stroke_width * transform.scale) as f32;
        if width > 0.0 {
            painter.rect_stroke(
                egui_rect,
                CornerRadius::ZERO,
                Stroke::new(width, to_color32(*stroke)),
                StrokeKind::Outside,
            );
        }

        if let Some(id) = object_id {
            hit_regions.push(HitRegion {
                rect: egui_rect,
                object_id: id.clone(),
            });
        }
    }

    RenderResult { hit_regions }
}

fn to_color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}
