use chrono::{DateTime, Duration, Utc};

use crate::common::{ChatMessage, Origin};

pub const DEFAULT_PARTICIPANTS: [&str; 4] = ["Alice", "Bob", "Charlie", "Diana"];

pub const DEFAULT_PHRASES: [&str; 8] = [
    "That sounds awesome!",
    "I agree! 💯",
    "Has anyone tried the new update?",
    "Working on something cool today",
    "Coffee break time! ☕",
    "Anyone up for a quick call?",
    "Great point!",
    "Thanks for sharing that",
];

/// (sender, text, seconds before startup)
const SEED_MESSAGES: [(&str, &str, i64); 3] = [
    ("System", "Welcome to the chat! 👋", 300),
    ("Alice", "Hey everyone! How is everyone doing today?", 240),
    (
        "Bob",
        "Great! Just working on some exciting projects. What about you?",
        180,
    ),
];

/// Messages the chat opens with, stamped relative to `now`.
pub fn seed_messages(now: DateTime<Utc>) -> Vec<ChatMessage> {
    SEED_MESSAGES
        .iter()
        .map(|(sender, text, ago)| {
            ChatMessage::new(*sender, *text, now - Duration::seconds(*ago), Origin::Remote)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_messages_are_chronological() {
        let now = Utc::now();
        let seeds = seed_messages(now);
        assert_eq!(seeds.len(), 3);
        assert!(seeds.windows(2).all(|pair| pair[0].timestamp < pair[1].timestamp));
        assert!(seeds.iter().all(|message| message.timestamp < now));
        assert!(seeds.iter().all(|message| !message.is_local()));
    }
}
