use backend::cube::project_cube;
use backend::orientation::Orientation;
use eframe::egui::{
    pos2, Color32, DragValue, Pos2, Rect, Rounding, Sense, Shape, Stroke, Ui, Vec2,
};

const MIN_CANVAS: Vec2 = Vec2::new(500.0, 500.0);
/// Dark-gray clear color behind the cube.
const CLEAR_COLOR: Color32 = Color32::from_rgb(46, 46, 46);

/// Orientation cube: six flat-colored faces rotated by the latest
/// roll/pitch/yaw values.
#[derive(Default)]
pub(crate) struct CubeView {
    orientation: Orientation,
}

impl CubeView {
    /// The single update entry point an external orientation source calls.
    /// Stores the angles as-is; the next paint jumps straight to them.
    pub(crate) fn set_orientation(&mut self, roll: f32, pitch: f32, yaw: f32) {
        self.orientation.set(roll, pitch, yaw);
    }

    pub(crate) fn ui(&mut self, ui: &mut Ui) {
        // Stand-in input until a sensor feed is wired up; goes through the
        // same set_orientation path a real feed would use.
        let Orientation {
            mut roll,
            mut pitch,
            mut yaw,
        } = self.orientation;
        ui.horizontal(|ui| {
            ui.label("Roll");
            ui.add(DragValue::new(&mut roll).speed(1.0).suffix("°"));
            ui.label("Pitch");
            ui.add(DragValue::new(&mut pitch).speed(1.0).suffix("°"));
            ui.label("Yaw");
            ui.add(DragValue::new(&mut yaw).speed(1.0).suffix("°"));
        });
        if Orientation::new(roll, pitch, yaw) != self.orientation {
            self.set_orientation(roll, pitch, yaw);
        }

        self.canvas(ui);
    }

    fn canvas(&self, ui: &mut Ui) {
        let desired = ui.available_size().max(MIN_CANVAS);
        let (rect, _) = ui.allocate_exact_size(desired, Sense::hover());
        let painter = ui.painter();

        painter.rect_filled(rect, Rounding::ZERO, CLEAR_COLOR);
        for face in project_cube(&self.orientation, [rect.width(), rect.height()]) {
            let [r, g, b] = face.color;
            let points = face.points.map(|p| ndc_to_screen(p, rect)).to_vec();
            painter.add(Shape::convex_polygon(
                points,
                Color32::from_rgb(r, g, b),
                Stroke::NONE,
            ));
        }
    }
}

/// Maps normalized device coordinates (+y up) into the canvas rect (+y down).
fn ndc_to_screen(ndc: [f32; 2], rect: Rect) -> Pos2 {
    let center = rect.center();
    pos2(
        center.x + ndc[0] * rect.width() / 2.0,
        center.y - ndc[1] * rect.height() / 2.0,
    )
}
