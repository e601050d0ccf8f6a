mod app;
mod renderer;

use app::BoardApp;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "tabula",
        options,
        Box::new(|cc| Ok(Box::new(BoardApp::new(cc)))),
    )
}
