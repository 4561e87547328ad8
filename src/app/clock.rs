use std::time::Duration;

use tokio::time::{Instant, sleep_until};

/// Paces the game loop to a target tick rate.
///
/// Each call to [`FrameClock::tick`] sleeps until one period has passed since
/// the previous call. A caller that is already late is not made to wait.
#[derive(Debug, Default)]
pub struct FrameClock {
    last_tick: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last_tick: None }
    }

    /// Wait for the next tick and return the time since the previous one
    pub async fn tick(&mut self, ticks_per_second: u32) -> Duration {
        let period = Duration::from_secs(1) / ticks_per_second.max(1);

        if let Some(last) = self.last_tick {
            sleep_until(last + period).await;
        }

        let now = Instant::now();
        let elapsed = self
            .last_tick
            .map_or(Duration::ZERO, |last| now.duration_since(last));
        self.last_tick = Some(now);
        elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_is_immediate() {
        let mut clock = FrameClock::new();
        let before = Instant::now();

        assert_eq!(clock.tick(10).await, Duration::ZERO);
        assert_eq!(Instant::now(), before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tick_waits_one_period() {
        let mut clock = FrameClock::new();
        clock.tick(10).await;

        let elapsed = clock.tick(10).await;
        assert!(elapsed >= Duration::from_millis(100));
        assert!(elapsed < Duration::from_millis(102));
    }

    #[tokio::test(start_paused = true)]
    async fn test_faster_rate_shortens_wait() {
        let mut clock = FrameClock::new();
        clock.tick(20).await;

        let elapsed = clock.tick(20).await;
        assert!(elapsed >= Duration::from_millis(50));
        assert!(elapsed < Duration::from_millis(52));
    }

    #[tokio::test(start_paused = true)]
    async fn test_late_tick_does_not_wait() {
        let mut clock = FrameClock::new();
        clock.tick(10).await;
        tokio::time::advance(Duration::from_millis(250)).await;

        let elapsed = clock.tick(10).await;
        assert_eq!(elapsed, Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_rate_treated_as_one() {
        let mut clock = FrameClock::new();
        clock.tick(0).await;

        let elapsed = clock.tick(0).await;
        assert!(elapsed >= Duration::from_secs(1));
    }
}
