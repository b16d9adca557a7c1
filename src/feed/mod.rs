pub mod generator;
pub mod pool;
pub mod random;
pub mod ticker;

pub use generator::ActivityGenerator;
pub use random::RngSource;
pub use ticker::{ActivityFeed, FeedHandle};
