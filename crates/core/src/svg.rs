//! SVG renderer: converts `RenderCommand` lists into standalone SVG strings.

use tabula_protocol::{LayerTransform, RenderCommand};

/// Render a command list under a layer transform as an SVG document.
///
/// `width` and `height` define the viewBox. The transform becomes a single
/// `<g>` wrapper, mirroring how the interactive renderers apply it to the
/// whole layer. The background is left transparent, like the live canvas.
pub fn render_svg(
    commands: &[RenderCommand],
    transform: LayerTransform,
    width: f64,
    height: f64,
) -> String {
    let mut svg = String::with_capacity(commands.len() * 160);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}">"#,
    ));
    svg.push_str(&format!(
        r#"<g transform="translate({} {}) scale({})">"#,
        transform.offset_x, transform.offset_y, transform.scale,
    ));

    for cmd in commands {
        match cmd {
            RenderCommand::DrawRect {
                rect,
                fill,
                stroke,
                stroke_width,
                object_id,
            } => {
                svg.push_str(&format!(
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}" stroke-width="{stroke_width}">"#,
                    rect.x,
                    rect.y,
                    rect.w,
                    rect.h,
                    fill.to_hex(),
                    stroke.to_hex(),
                ));
                if let Some(id) = object_id {
                    svg.push_str(&format!("<title>{}</title>", escape_xml(id)));
                }
                svg.push_str("</rect>");
            }
            // Groups are semantic — no visual effect in SVG output.
            RenderCommand::BeginGroup { .. } | RenderCommand::EndGroup => {}
        }
    }

    svg.push_str("</g></svg>");
    svg
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
