use eframe::egui::{self, Color32};

use crate::common::ChatMessage;
use crate::ui::format::{avatar_color, format_time, initials};

use super::avatar::avatar;

const BUBBLE_MAX_WIDTH: f32 = 360.0;
const LOCAL_BUBBLE: Color32 = Color32::from_rgb(0x25, 0x63, 0xeb);

pub fn render(ui: &mut egui::Ui, messages: &[ChatMessage]) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in messages {
                render_message(ui, message);
                ui.add_space(8.0);
            }
        });
}

fn render_message(ui: &mut egui::Ui, message: &ChatMessage) {
    let layout = if message.is_local() {
        egui::Layout::right_to_left(egui::Align::TOP)
    } else {
        egui::Layout::left_to_right(egui::Align::TOP)
    };

    ui.with_layout(layout, |ui| {
        if !message.is_local() {
            avatar(ui, &initials(&message.sender), avatar_color(&message.sender));
        }

        ui.vertical(|ui| {
            let label = if message.is_local() {
                "You"
            } else {
                message.sender.as_str()
            };
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(label).strong());
                ui.label(egui::RichText::new(format_time(&message.timestamp)).weak().small());
            });

            let fill = if message.is_local() {
                LOCAL_BUBBLE
            } else {
                Color32::from_white_alpha(40)
            };
            egui::Frame::new()
                .fill(fill)
                .corner_radius(egui::CornerRadius::same(12))
                .inner_margin(egui::Margin::same(10))
                .show(ui, |ui| {
                    ui.set_max_width(BUBBLE_MAX_WIDTH);
                    ui.label(egui::RichText::new(&message.text).color(Color32::WHITE));
                });
        });
    });
}
