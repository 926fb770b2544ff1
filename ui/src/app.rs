use std::path::PathBuf;
use std::time::{Duration, Instant};

use backend::capture::USB_CAMERA_INDEX;
use backend::command::Control;
use backend::{list_devices, Turret};
use eframe::egui::{self, Button, Color32, Context, RichText, Stroke, Ui, Visuals};
use log::{debug, error, info, warn};

use crate::crosshair::{self, CrosshairView};
use crate::cube_view::CubeView;

/// Delay before the single open attempt, so the window appears first.
const CAMERA_OPEN_DELAY: Duration = Duration::from_millis(100);
/// Frame grab cadence, roughly 30 Hz.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

const MODE_BUTTON_SIZE: f32 = 90.0;
const STOP_BUTTON_SIZE: f32 = 110.0;
const PANEL_FILL: Color32 = Color32::from_rgb(211, 211, 211);

/// Camera lifecycle: one deferred open attempt, then live grab ticks, or
/// disabled for the rest of the session if the open failed.
enum CameraPhase {
    Pending,
    Live,
    Disabled,
}

pub(crate) struct App {
    turret: Turret,
    feed: CrosshairView,
    cube: CubeView,
    cube_open: bool,
    port: Option<PathBuf>,
    phase: CameraPhase,
    started: Instant,
    last_grab: Instant,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext) -> Self {
        let mut visuals = Visuals::light();
        visuals.panel_fill = PANEL_FILL;
        cc.egui_ctx.set_visuals(visuals);

        Self {
            turret: Turret::default(),
            feed: CrosshairView::default(),
            cube: CubeView::default(),
            cube_open: true,
            port: None,
            phase: CameraPhase::Pending,
            started: Instant::now(),
            last_grab: Instant::now(),
        }
    }

    fn poll_camera(&mut self, ctx: &Context) {
        match self.phase {
            CameraPhase::Pending => {
                if self.started.elapsed() < CAMERA_OPEN_DELAY {
                    return;
                }
                self.phase = match self.turret.camera.open(USB_CAMERA_INDEX) {
                    Ok(true) => {
                        info!("camera {USB_CAMERA_INDEX} opened");
                        CameraPhase::Live
                    }
                    Ok(false) => {
                        error!("USB camera (index {USB_CAMERA_INDEX}) failed to open");
                        CameraPhase::Disabled
                    }
                    Err(err) => {
                        error!("USB camera (index {USB_CAMERA_INDEX}) failed to open: {err}");
                        CameraPhase::Disabled
                    }
                };
            }
            CameraPhase::Live => {
                if self.last_grab.elapsed() < FRAME_INTERVAL {
                    return;
                }
                self.last_grab = Instant::now();
                match self.turret.camera.grab_frame() {
                    Ok(Some(frame)) => self.feed.set_frame(ctx, frame),
                    // Skipped tick; the previous frame stays up.
                    Ok(None) => {}
                    Err(err) => debug!("frame read failed: {err}"),
                }
            }
            CameraPhase::Disabled => {}
        }
    }

    fn top_bar(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            self.port_picker(ui);
            ui.toggle_value(&mut self.cube_open, "Orientation");
        });
    }

    fn port_picker(&mut self, ui: &mut Ui) {
        let before = self.port.clone();
        egui::ComboBox::from_label("IMU port")
            .selected_text(
                self.port
                    .as_ref()
                    .map(|port| port.display().to_string())
                    .unwrap_or_else(|| "None".to_owned()),
            )
            .show_ui(ui, |ui| {
                for port in list_devices().unwrap_or_default() {
                    let label = port.display().to_string();
                    ui.selectable_value(&mut self.port, Some(port), label);
                }
            });
        if self.port != before {
            // Selection only; the orientation feed is not wired up yet.
            info!("IMU port set to {:?}", self.port);
        }
    }

    fn mode_buttons(&mut self, ui: &mut Ui) {
        ui.add_space(40.0);
        for control in Control::MODES {
            ui.vertical_centered(|ui| {
                let button = Button::new("")
                    .min_size(egui::vec2(MODE_BUTTON_SIZE, MODE_BUTTON_SIZE))
                    .rounding(MODE_BUTTON_SIZE / 2.0)
                    .fill(Color32::from_gray(224))
                    .stroke(Stroke::new(2.0, Color32::from_gray(160)));
                if ui.add(button).clicked() {
                    self.turret.commands.press(control);
                }
                ui.label(RichText::new(control.label()).italics().size(14.0));
            });
            ui.add_space(24.0);
        }
    }

    fn emergency_stop(&mut self, ui: &mut Ui) {
        ui.add_space(300.0);
        ui.vertical_centered(|ui| {
            let button = Button::new(
                RichText::new("EMERGENCY\nSTOP")
                    .strong()
                    .size(16.0)
                    .color(Color32::BLACK),
            )
            .min_size(egui::vec2(STOP_BUTTON_SIZE, STOP_BUTTON_SIZE))
            .rounding(STOP_BUTTON_SIZE / 2.0)
            .fill(Color32::from_rgb(204, 0, 0))
            .stroke(Stroke::new(3.0, Color32::BLACK));
            if ui.add(button).clicked() {
                self.turret.commands.press(Control::EmergencyStop);
            }
        });
    }

    fn cube_window(&mut self, ctx: &Context) {
        let cube = &mut self.cube;
        egui::Window::new("Orientation")
            .open(&mut self.cube_open)
            .default_size([500.0, 540.0])
            .show(ctx, |ui| cube.ui(ui));
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.poll_camera(ctx);

        egui::TopBottomPanel::top("top-row").show(ctx, |ui| self.top_bar(ui));
        egui::SidePanel::left("mode-buttons")
            .resizable(false)
            .exact_width(180.0)
            .show(ctx, |ui| self.mode_buttons(ui));
        egui::SidePanel::right("emergency")
            .resizable(false)
            .exact_width(160.0)
            .show(ctx, |ui| self.emergency_stop(ui));
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space((ui.available_height() - crosshair::CANVAS.y).max(0.0) / 2.0);
            ui.vertical_centered(|ui| self.feed.show(ui));
        });
        self.cube_window(ctx);

        // Keeps the grab ticks coming even without user input.
        ctx.request_repaint_after(FRAME_INTERVAL);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(err) = self.turret.camera.release() {
            warn!("camera release on exit failed: {err}");
        }
    }
}
