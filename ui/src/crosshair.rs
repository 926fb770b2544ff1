use backend::capture::Frame;
use eframe::egui::{
    Color32, ColorImage, Context, Pos2, Rect, Rounding, Sense, Stroke, TextureHandle,
    TextureOptions, Ui, Vec2,
};

/// Fixed size of the feed canvas. Frames are stretched to fill the whole
/// rect, aspect ratio ignored.
pub(crate) const CANVAS: Vec2 = Vec2::new(850.0, 500.0);

const CORNER_RADIUS: f32 = 15.0;
const UV_FULL: Rect = Rect {
    min: Pos2::ZERO,
    max: Pos2::new(1.0, 1.0),
};

/// Camera feed canvas with the fixed border overlay painted on top.
#[derive(Default)]
pub(crate) struct CrosshairView {
    texture: Option<TextureHandle>,
}

impl CrosshairView {
    /// Uploads the newest frame into the one reused texture. Nearest
    /// filtering keeps the stretch to canvas size cheap.
    pub(crate) fn set_frame(&mut self, ctx: &Context, frame: Frame) {
        let texture = self.texture.get_or_insert_with(|| {
            ctx.load_texture(
                "camera-frame",
                ColorImage::new(frame.size, Color32::LIGHT_GRAY),
                TextureOptions::NEAREST,
            )
        });
        texture.set(
            ColorImage::from_rgba_unmultiplied(frame.size, &frame.rgba),
            TextureOptions::NEAREST,
        );
    }

    pub(crate) fn show(&self, ui: &mut Ui) {
        let (rect, _) = ui.allocate_exact_size(CANVAS, Sense::hover());
        let painter = ui.painter();

        painter.rect_filled(rect, Rounding::same(CORNER_RADIUS), Color32::LIGHT_GRAY);
        if let Some(texture) = &self.texture {
            painter.image(texture.id(), rect, UV_FULL, Color32::WHITE);
        }
        painter.rect_stroke(
            rect,
            Rounding::same(CORNER_RADIUS),
            Stroke::new(8.0, Color32::BLACK),
        );
    }
}
