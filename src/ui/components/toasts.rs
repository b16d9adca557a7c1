use eframe::egui;

use crate::ui::state::Notification;

pub fn render(ctx: &egui::Context, notifications: &[Notification]) {
    if notifications.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("notifications"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            for notification in notifications {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.label(egui::RichText::new(&notification.title).strong());
                    ui.label(&notification.description);
                });
                ui.add_space(6.0);
            }
        });
}
