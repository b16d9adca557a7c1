use std::time::Duration;

use eframe::egui;
use tokio::sync::mpsc;

use crate::common::{Clock, FeedEvent, Participant};
use crate::config::AppConfig;
use crate::feed::FeedHandle;

use super::components::{chat_area, input_bar, sidebar, toasts};
use super::state::AppState;

/// Upper bound between frames while idle, so feed messages and toast expiry show up.
const REPAINT_INTERVAL: Duration = Duration::from_millis(250);

pub struct ChatApp {
    state: AppState,
    event_receiver: mpsc::Receiver<FeedEvent>,
    // Dropped with the app, which aborts the feed task.
    _feed: FeedHandle,
    clock: Box<dyn Clock>,
    notification_ttl: chrono::Duration,
}

impl ChatApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: &AppConfig,
        event_receiver: mpsc::Receiver<FeedEvent>,
        feed: FeedHandle,
        clock: Box<dyn Clock>,
    ) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let participants = config
            .participants
            .iter()
            .map(|name| Participant::new(name.as_str()))
            .collect();

        Self {
            state: AppState::seeded(config.username.as_str(), participants, clock.now()),
            event_receiver,
            _feed: feed,
            clock,
            notification_ttl: config.notification_ttl(),
        }
    }

    fn handle_feed_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            match event {
                FeedEvent::MessageGenerated(message) => self.state.append(message),
            }
        }
    }

    fn send_message(&mut self) {
        let now = self.clock.now();
        if self.state.submit_composer(now).is_none() {
            log::debug!("Ignoring blank composer submit");
        }
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_feed_events();
        self.state
            .prune_notifications(self.clock.now(), self.notification_ttl);

        egui::SidePanel::left("participant_sidebar")
            .resizable(true)
            .default_width(240.0)
            .show(ctx, |ui| {
                sidebar::render(ui, &mut self.state);
            });

        egui::TopBottomPanel::bottom("composer").show(ctx, |ui| {
            ui.add_space(8.0);
            if input_bar::render(ui, &mut self.state.input_text) {
                self.send_message();
            }
            ui.add_space(8.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("General Chat");
            ui.label(
                egui::RichText::new(format!(
                    "Real-time messaging • {} messages",
                    self.state.messages().len()
                ))
                .weak(),
            );
            ui.separator();
            chat_area::render(ui, self.state.messages());
        });

        toasts::render(ctx, &self.state.notifications);

        ctx.request_repaint_after(REPAINT_INTERVAL);
    }
}
