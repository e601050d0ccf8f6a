use eframe::egui;
use tabula_core::model::Board;
use tabula_core::parsers;
use tabula_core::viewport::{GestureEvent, ViewportController};
use tabula_core::views::render_board;
use tabula_protocol::RenderCommand;

use crate::renderer;

/// Wheel movement below this many points is ignored (trackpad noise).
const WHEEL_DEADZONE: f32 = 0.1;

/// Main application state.
pub struct BoardApp {
    board: Option<Board>,
    board_name: Option<String>,
    /// Static command list, regenerated only when a board is loaded.
    commands: Vec<RenderCommand>,
    controller: ViewportController,
    /// Error message to display.
    error: Option<String>,
}

impl BoardApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        Self {
            board: None,
            board_name: None,
            commands: Vec::new(),
            controller: ViewportController::default(),
            error: None,
        }
    }

    fn load_board(&mut self, name: String, data: &[u8]) {
        match parsers::parse_auto(data) {
            Ok(board) => {
                self.commands = render_board(&board);
                self.board = Some(board);
                self.board_name = Some(name);
                self.controller.reset();
                self.error = None;
            }
            Err(e) => {
                self.error = Some(format!("Failed to parse board: {e}"));
            }
        }
    }
}

impl eframe::App for BoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("tabula");
                ui.separator();

                if ui.button("Open").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Board", &["json"])
                        .pick_file()
                    {
                        let name = path
                            .file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                            .unwrap_or_else(|| path.display().to_string());
                        match std::fs::read(&path) {
                            Ok(data) => self.load_board(name, &data),
                            Err(e) => {
                                self.error = Some(format!("Failed to read file: {e}"));
                            }
                        }
                    }
                }

                if ui.button("Reset view").clicked() {
                    self.controller.reset();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{:.0}%", self.controller.scale() * 100.0));
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(err) = &self.error {
                    ui.colored_label(egui::Color32::RED, err);
                } else if let Some(board) = &self.board {
                    let name = self.board_name.as_deref().unwrap_or("board");
                    ui.label(format!("{name} | {} objects", board.len()));
                } else {
                    ui.label("No board loaded — click Open or drag & drop a file");
                }
            });
        });

        // Central panel: the board canvas
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.board.is_none() {
                ui.centered_and_justified(|ui| {
                    ui.heading("Drop a board.json here or click Open");
                });
                return;
            }

            let available = ui.available_rect_before_wrap();
            let response = ui.allocate_rect(available, egui::Sense::click_and_drag());

            // Client coordinates are relative to the canvas origin.
            let client = |pos: egui::Pos2| -> (f64, f64) {
                (
                    f64::from(pos.x - available.left()),
                    f64::from(pos.y - available.top()),
                )
            };

            let mut redraw = false;

            if response.drag_started() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let (x, y) = client(pos);
                    redraw |= self.controller.handle(GestureEvent::PanStart { x, y });
                }
            } else if response.dragged() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let (x, y) = client(pos);
                    redraw |= self.controller.handle(GestureEvent::PanMove { x, y });
                }
            }
            if response.drag_stopped() {
                redraw |= self.controller.handle(GestureEvent::PanEnd);
            }

            // Wheel = zoom at the hovered point. Every tick collapses to a
            // single signed notch; the step size lives in ViewportConfig.
            let scroll = ui.input(|i| i.smooth_scroll_delta);
            if scroll.y.abs() > WHEEL_DEADZONE {
                if let Some(pos) = ui.input(|i| i.pointer.hover_pos()) {
                    let (x, y) = client(pos);
                    redraw |= self.controller.handle(GestureEvent::Zoom {
                        x,
                        y,
                        notches: f64::from(scroll.y.signum()),
                    });
                }
            }

            if redraw {
                ctx.request_repaint();
            }

            // Render the static command list under the current transform.
            let painter = ui.painter_at(available);
            painter.rect_filled(available, egui::CornerRadius::ZERO, egui::Color32::BLACK);
            let result = renderer::render_commands(
                &painter,
                &self.commands,
                self.controller.transform(),
                available.min,
            );

            // Hover tooltip with the object id.
            if let Some(hover_pos) = ui.input(|i| i.pointer.hover_pos()) {
                if available.contains(hover_pos) {
                    for hit in &result.hit_regions {
                        if hit.rect.contains(hover_pos) {
                            #[allow(deprecated)]
                            egui::show_tooltip_at_pointer(
                                ui.ctx(),
                                ui.layer_id(),
                                egui::Id::new("object_tooltip"),
                                |ui| {
                                    ui.label(hit.object_id.as_str());
                                },
                            );
                            break;
                        }
                    }
                }
            }
        });

        // Handle file drop
        let dropped: Option<(String, Vec<u8>)> = ctx.input(|i| {
            i.raw.dropped_files.first().and_then(|file| {
                if let Some(bytes) = &file.bytes {
                    Some((file.name.clone(), bytes.to_vec()))
                } else if let Some(path) = &file.path {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| file.name.clone());
                    std::fs::read(path).ok().map(|data| (name, data))
                } else {
                    None
                }
            })
        });
        if let Some((name, data)) = dropped {
            self.load_board(name, &data);
        }
    }
}
