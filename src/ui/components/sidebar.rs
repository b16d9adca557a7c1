use crate::common::{Participant, Presence};
use crate::ui::format::{OWN_AVATAR_COLOR, avatar_color, initials};
use crate::ui::state::AppState;
use eframe::egui;

use super::avatar::{avatar, online_dot};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        online_dot(ui);
        ui.heading("Live Chat");
    });
    ui.add_space(12.0);

    ui.add(
        egui::TextEdit::singleline(&mut state.username)
            .hint_text("Your username")
            .desired_width(f32::INFINITY),
    );
    ui.add_space(12.0);

    ui.label(egui::RichText::new(format!("👥 Online ({})", state.online_count())).strong());
    ui.separator();

    // Local user first, always green.
    ui.horizontal(|ui| {
        avatar(ui, &initials(&state.username), OWN_AVATAR_COLOR);
        ui.label(format!("{} (You)", state.username));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            online_dot(ui);
        });
    });

    for participant in &state.participants {
        participant_row(ui, participant);
    }
}

fn participant_row(ui: &mut egui::Ui, participant: &Participant) {
    ui.horizontal(|ui| {
        avatar(ui, &initials(&participant.name), avatar_color(&participant.name));
        ui.label(egui::RichText::new(&participant.name).weak());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            match participant.presence {
                Presence::Online => online_dot(ui),
            }
        });
    });
}
