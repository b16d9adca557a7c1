use eframe::egui::{self, Color32};

const AVATAR_SIZE: f32 = 28.0;
const DOT_SIZE: f32 = 8.0;
const ONLINE_GREEN: Color32 = Color32::from_rgb(0x4a, 0xde, 0x80);

/// Round badge with the given initials.
pub fn avatar(ui: &mut egui::Ui, initials: &str, color: Color32) {
    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(AVATAR_SIZE, AVATAR_SIZE), egui::Sense::hover());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), AVATAR_SIZE / 2.0, color);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initials,
        egui::FontId::proportional(11.0),
        Color32::WHITE,
    );
}

pub fn online_dot(ui: &mut egui::Ui) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(DOT_SIZE, DOT_SIZE), egui::Sense::hover());
    ui.painter()
        .circle_filled(rect.center(), DOT_SIZE / 2.0, ONLINE_GREEN);
}
