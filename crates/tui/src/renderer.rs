use std::io::stdout;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Style},
    widgets::Block,
};
use tabula_core::model::Board;
use tabula_core::viewport::ViewportController;
use tabula_protocol::RenderCommand;

/// Client-space size of one terminal cell. Mouse positions and drawn
/// geometry share this mapping, so zoom-to-cursor lands on the cell under
/// the pointer.
const CELL_WIDTH: f64 = 8.0;
const CELL_HEIGHT: f64 = 16.0;

pub fn run(board: &Board, commands: &[RenderCommand]) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut controller = ViewportController::default();
    let mut dirty = true;

    loop {
        if dirty {
            draw(&mut terminal, board, commands, &controller)?;
            dirty = false;
        }

        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('0') => dirty |= controller.reset(),
                    _ => {}
                },
                Event::Mouse(mouse) => {
                    let (cx, cy) = client_position(&mouse);
                    match mouse.kind {
                        MouseEventKind::Down(MouseButton::Left) => {
                            controller.begin_pan(cx, cy);
                        }
                        MouseEventKind::Drag(MouseButton::Left) => {
                            dirty |= controller.pan(cx, cy);
                        }
                        MouseEventKind::Up(MouseButton::Left) => {
                            controller.end_pan();
                        }
                        MouseEventKind::ScrollUp => dirty |= controller.zoom(cx, cy, 1.0),
                        MouseEventKind::ScrollDown => dirty |= controller.zoom(cx, cy, -1.0),
                        _ => {}
                    }
                }
                Event::Resize(_, _) => dirty = true,
                _ => {}
            }
        }
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

/// Map a mouse event to client coordinates. Row 0 is the header; content
/// rows start at 1.
fn client_position(mouse: &MouseEvent) -> (f64, f64) {
    let content_row = mouse.row.saturating_sub(1);
    (
        f64::from(mouse.column) * CELL_WIDTH,
        f64::from(content_row) * CELL_HEIGHT,
    )
}

fn draw(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    board: &Board,
    commands: &[RenderCommand],
    controller: &ViewportController,
) -> Result<()> {
    let transform = controller.transform();
    let zoom_pct = controller.scale() * 100.0;

    terminal.draw(|frame| {
        let area = frame.area();

        // Header
        let header_area = Rect::new(0, 0, area.width, 1);
        let header = Block::default()
            .title(format!(
                " tabula — {} objects | {zoom_pct:.0}% | drag pan | wheel zoom | 0 reset | q quit ",
                board.len()
            ))
            .style(Style::default().fg(Color::White).bg(Color::DarkGray));
        frame.render_widget(header, header_area);

        let content_area = Rect::new(0, 1, area.width, area.height.saturating_sub(1));
        let background = Block::default().style(Style::default().bg(Color::Black));
        frame.render_widget(background, content_area);

        let buf = frame.buffer_mut();
        for cmd in commands {
            let RenderCommand::DrawRect {
                rect,
                fill,
                object_id,
                ..
            } = cmd
            else {
                continue;
            };

            // World rect → client pixels → terminal cells.
            let view = transform.apply_rect(*rect);
            let col0 = (view.x / CELL_WIDTH).floor();
            let row0 = (view.y / CELL_HEIGHT).floor();
            let cols = ((view.w / CELL_WIDTH).ceil() as i64).max(1);
            let rows = ((view.h / CELL_HEIGHT).ceil() as i64).max(1);

            let bg = Color::Rgb(fill.r, fill.g, fill.b);
            let label = object_id.as_deref().unwrap_or("");

            for r in 0..rows {
                let row = row0 as i64 + r;
                if row < 0 || row >= i64::from(content_area.height) {
                    continue;
                }
                for c in 0..cols {
                    let col = col0 as i64 + c;
                    if col < 0 || col >= i64::from(content_area.width) {
                        continue;
                    }
                    let x = content_area.x + col as u16;
                    let y = content_area.y + row as u16;
                    let cell = &mut buf[(x, y)];
                    cell.set_char(' ').set_bg(bg);

                    // Object id in the top row when it fits.
                    if r == 0 && c >= 1 && cols as usize >= label.len() + 2 {
                        if let Some(ch) = label.chars().nth((c - 1) as usize) {
                            cell.set_char(ch).set_fg(Color::White);
                        }
                    }
                }
            }
        }
    })?;

    Ok(())
}
