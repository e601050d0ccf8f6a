mod renderer;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tabula_protocol::LayerTransform;

/// Margin added around the board bounds when exporting to SVG.
const SVG_EXPORT_MARGIN: f64 = 40.0;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: tabula <board.json> [--svg <out.svg>]");
        std::process::exit(1);
    }

    let path = PathBuf::from(&args[1]);
    let data = std::fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
    let board = tabula_core::parsers::parse_auto(&data)
        .with_context(|| format!("parsing {}", path.display()))?;
    let commands = tabula_core::views::render_board(&board);

    if let Some(pos) = args.iter().position(|a| a == "--svg") {
        let out = args
            .get(pos + 1)
            .context("--svg requires an output path")?;
        let (transform, width, height) = export_viewbox(&board);
        let svg = tabula_core::svg::render_svg(&commands, transform, width, height);
        std::fs::write(out, svg).with_context(|| format!("writing {out}"))?;
        return Ok(());
    }

    renderer::run(&board, &commands)
}

/// Fit the whole board into the export viewBox by translating its minimum
/// corner (minus a margin) to the origin. Scale stays 1: SVG is resolution
/// independent anyway.
fn export_viewbox(board: &tabula_core::model::Board) -> (LayerTransform, f64, f64) {
    match board.bounding_rect() {
        Some(bounds) => (
            LayerTransform::new(
                1.0,
                SVG_EXPORT_MARGIN - bounds.x,
                SVG_EXPORT_MARGIN - bounds.y,
            ),
            bounds.w + SVG_EXPORT_MARGIN * 2.0,
            bounds.h + SVG_EXPORT_MARGIN * 2.0,
        ),
        None => (LayerTransform::IDENTITY, 800.0, 600.0),
    }
}
