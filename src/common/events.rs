use super::types::ChatMessage;

/// Events sent from the activity feed up to the UI.
#[derive(Debug, Clone)]
pub enum FeedEvent {
    MessageGenerated(ChatMessage),
}
