use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Where a message came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Typed into this window's composer.
    Local,
    /// Seeded at startup or produced by the activity feed.
    Remote,
}

/// Domain model for a single chat message. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub sender: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub origin: Origin,
}

impl ChatMessage {
    pub fn new(
        sender: impl Into<String>,
        text: impl Into<String>,
        timestamp: DateTime<Utc>,
        origin: Origin,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender: sender.into(),
            text: text.into(),
            timestamp,
            origin,
        }
    }

    pub fn is_local(&self) -> bool {
        self.origin == Origin::Local
    }
}

/// Presence shown next to a participant. There is no presence tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presence {
    #[default]
    Online,
}

/// A named entry in the online list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
    pub presence: Presence,
}

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            presence: Presence::Online,
        }
    }
}
