use chrono::{DateTime, Utc};

use crate::common::{ChatMessage, Origin};
use crate::config::AppConfig;

use super::random::RandomSource;

/// Decides, one tick at a time, whether a fake participant says something.
pub struct ActivityGenerator<R> {
    participants: Vec<String>,
    phrases: Vec<String>,
    probability: f64,
    random: R,
}

impl<R: RandomSource> ActivityGenerator<R> {
    pub fn new(participants: Vec<String>, phrases: Vec<String>, probability: f64, random: R) -> Self {
        Self {
            participants,
            phrases,
            probability,
            random,
        }
    }

    pub fn from_config(config: &AppConfig, random: R) -> Self {
        Self::new(
            config.participants.clone(),
            config.phrases.clone(),
            config.injection_probability,
            random,
        )
    }

    /// A draw below the injection probability yields one remote message;
    /// anything else yields nothing and consumes no further draws.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Option<ChatMessage> {
        if self.participants.is_empty() || self.phrases.is_empty() {
            return None;
        }

        if self.random.next_unit() >= self.probability {
            return None;
        }

        let sender = &self.participants[self.random.pick(self.participants.len())];
        let text = &self.phrases[self.random.pick(self.phrases.len())];
        Some(ChatMessage::new(sender.as_str(), text.as_str(), now, Origin::Remote))
    }
}
