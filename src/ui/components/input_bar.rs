use eframe::egui;

const SEND_WIDTH: f32 = 64.0;

/// Returns `true` when the user asked to send the composer text.
pub fn render(ui: &mut egui::Ui, input_text: &mut String) -> bool {
    let mut send = false;
    ui.horizontal(|ui| {
        let field_width = ui.available_width() - SEND_WIDTH - ui.spacing().item_spacing.x;
        let response = ui.add(
            egui::TextEdit::singleline(&mut *input_text)
                .hint_text("Type your message...")
                .desired_width(field_width.max(0.0)),
        );

        let can_send = !input_text.trim().is_empty();
        let button = egui::Button::new("Send").min_size(egui::vec2(SEND_WIDTH, 0.0));
        if ui.add_enabled(can_send, button).clicked() {
            send = true;
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send = true;
            response.request_focus();
        }
    });

    send
}
