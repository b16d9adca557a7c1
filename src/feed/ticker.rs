use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::common::{Clock, FeedEvent};

use super::generator::ActivityGenerator;
use super::random::RandomSource;

/// Runs the generator on a fixed period and forwards results to the UI.
pub struct ActivityFeed<R, C> {
    generator: ActivityGenerator<R>,
    clock: C,
    period: Duration,
    event_sender: mpsc::Sender<FeedEvent>,
}

impl<R, C> ActivityFeed<R, C>
where
    R: RandomSource + 'static,
    C: Clock + 'static,
{
    pub fn new(
        generator: ActivityGenerator<R>,
        clock: C,
        period: Duration,
        event_sender: mpsc::Sender<FeedEvent>,
    ) -> Self {
        Self {
            generator,
            clock,
            period: period.max(Duration::from_millis(1)),
            event_sender,
        }
    }

    pub async fn run(mut self) {
        let mut interval = time::interval(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // First tick completes immediately.
        interval.tick().await;

        log::info!(
            "Activity feed started with a {} ms period",
            self.period.as_millis()
        );

        loop {
            interval.tick().await;

            let Some(message) = self.generator.tick(self.clock.now()) else {
                continue;
            };

            log::debug!("Injecting message from {}: {}", message.sender, message.text);
            if self
                .event_sender
                .send(FeedEvent::MessageGenerated(message))
                .await
                .is_err()
            {
                log::info!("Chat view is gone; stopping activity feed");
                break;
            }
        }
    }

    /// Must be called from within a tokio runtime.
    pub fn spawn(self) -> FeedHandle {
        FeedHandle {
            task: Some(tokio::spawn(self.run())),
        }
    }
}

/// Owns the running feed task and aborts it on drop.
pub struct FeedHandle {
    task: Option<JoinHandle<()>>,
}

impl FeedHandle {
    pub fn cancel(&mut self) {
        if self.is_running() {
            log::info!("Activity feed cancelled");
        }
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for FeedHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::clock::FixedClock;
    use crate::common::Origin;
    use crate::config::AppConfig;
    use crate::feed::random::ScriptedSource;
    use chrono::Utc;
    use tokio::time::Instant;

    const PERIOD: Duration = Duration::from_millis(8000);

    fn feed(
        draws: &[f64],
        sender: mpsc::Sender<FeedEvent>,
    ) -> ActivityFeed<ScriptedSource, FixedClock> {
        let generator =
            ActivityGenerator::from_config(&AppConfig::default(), ScriptedSource::new(draws));
        ActivityFeed::new(generator, FixedClock(Utc::now()), PERIOD, sender)
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_message_arrives_after_one_period() {
        let (tx, mut rx) = mpsc::channel(8);
        let start = Instant::now();
        let _handle = feed(&[0.0], tx).spawn();

        let FeedEvent::MessageGenerated(message) = rx.recv().await.expect("feed should emit");
        assert!(start.elapsed() >= PERIOD);
        assert_eq!(message.origin, Origin::Remote);
        assert_eq!(message.sender, "Alice");
        assert_eq!(message.text, "That sounds awesome!");
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_above_threshold_stay_silent() {
        let (tx, mut rx) = mpsc::channel(8);
        let _handle = feed(&[0.95], tx).spawn();

        let waited = time::timeout(PERIOD * 10, rx.recv()).await;
        assert!(waited.is_err(), "no message expected");
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_stops_the_feed() {
        let (tx, mut rx) = mpsc::channel(8);
        let handle = feed(&[0.0], tx).spawn();
        assert!(handle.is_running());
        drop(handle);

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_is_idempotent() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut handle = feed(&[0.0], tx).spawn();
        handle.cancel();
        assert!(!handle.is_running());
        handle.cancel();

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_feed_stops_when_receiver_is_dropped() {
        let (tx, rx) = mpsc::channel(8);
        drop(rx);
        let handle = feed(&[0.0], tx).spawn();

        time::sleep(PERIOD * 2).await;
        assert!(!handle.is_running());
    }
}
