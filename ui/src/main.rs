use crate::app::App;

use eframe::egui::ViewportBuilder;

mod app;
mod crosshair;
mod cube_view;

const MIN_SIZE: [f32; 2] = [1300.0, 750.0];

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(MIN_SIZE)
            .with_min_inner_size(MIN_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "Turret Control Panel",
        options,
        Box::new(|cc| Box::new(App::new(cc))),
    )
}
