pub mod clock;
pub mod events;
pub mod types;

pub use clock::{Clock, SystemClock};
pub use events::FeedEvent;
pub use types::{ChatMessage, Origin, Participant, Presence};
