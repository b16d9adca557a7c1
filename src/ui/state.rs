use chrono::{DateTime, Duration, Utc};

use crate::common::{ChatMessage, Origin, Participant};
use crate::feed::pool::seed_messages;

pub const SENT_TITLE: &str = "Message sent";
pub const SENT_DESCRIPTION: &str = "Your message has been delivered!";

/// A toast raised after a successful local send.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub raised_at: DateTime<Utc>,
}

/// Local UI state.
pub struct AppState {
    messages: Vec<ChatMessage>,
    pub input_text: String,
    pub username: String,
    pub participants: Vec<Participant>,
    pub notifications: Vec<Notification>,
}

impl AppState {
    pub fn new(username: impl Into<String>, participants: Vec<Participant>) -> Self {
        Self {
            messages: Vec::new(),
            input_text: String::new(),
            username: username.into(),
            participants,
            notifications: Vec::new(),
        }
    }

    /// Fresh state holding the startup conversation.
    pub fn seeded(
        username: impl Into<String>,
        participants: Vec<Participant>,
        now: DateTime<Utc>,
    ) -> Self {
        let mut state = Self::new(username, participants);
        for message in seed_messages(now) {
            state.append(message);
        }
        state
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn append(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Appends `text` as a local message from the current username, clears the
    /// composer and raises one notification. Blank input is ignored.
    pub fn send_local(&mut self, text: &str, now: DateTime<Utc>) -> Option<&ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }

        let message = ChatMessage::new(self.username.as_str(), text, now, Origin::Local);
        log::info!("{} sent message {}", message.sender, message.id);
        self.append(message);
        self.input_text.clear();
        self.notifications.push(Notification {
            title: SENT_TITLE.to_string(),
            description: SENT_DESCRIPTION.to_string(),
            raised_at: now,
        });

        self.messages.last()
    }

    pub fn submit_composer(&mut self, now: DateTime<Utc>) -> Option<&ChatMessage> {
        let text = std::mem::take(&mut self.input_text);
        if self.send_local(&text, now).is_none() {
            self.input_text = text;
            return None;
        }
        self.messages.last()
    }

    /// Drops notifications older than `ttl`.
    pub fn prune_notifications(&mut self, now: DateTime<Utc>, ttl: Duration) {
        self.notifications
            .retain(|notification| now - notification.raised_at < ttl);
    }

    pub fn online_count(&self) -> usize {
        self.participants.len() + 1
    }
}
