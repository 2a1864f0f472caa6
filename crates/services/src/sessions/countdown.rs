use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::error::SessionError;

/// Real-time spacing between quiz countdown ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Repeating tick source backed by a spawned tokio task.
///
/// The task is aborted when the countdown is dropped, so no tick can reach a
/// session after it leaves the phase that owns the countdown.
#[derive(Debug)]
pub struct Countdown {
    ticks: mpsc::Receiver<()>,
    task: JoinHandle<()>,
}

impl Countdown {
    /// Spawns the tick task on the current runtime.
    ///
    /// Ticks keep to a fixed schedule; a late consumer delays later ticks
    /// instead of receiving a burst.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoRuntime` when called outside a tokio runtime.
    pub fn start(period: Duration) -> Result<Self, SessionError> {
        let runtime = Handle::try_current().map_err(|_| SessionError::NoRuntime)?;
        let (tx, ticks) = mpsc::channel(1);
        let first = Instant::now() + period;
        let task = runtime.spawn(async move {
            let mut schedule = time::interval_at(first, period);
            schedule.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                schedule.tick().await;
                if tx.send(()).await.is_err() {
                    break;
                }
            }
        });
        Ok(Self { ticks, task })
    }

    /// Waits for the next tick. `None` once the task has stopped.
    pub async fn tick(&mut self) -> Option<()> {
        self.ticks.recv().await
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_period() {
        let started = Instant::now();
        let mut countdown = Countdown::start(TICK_PERIOD).unwrap();
        for _ in 0..3 {
            assert_eq!(countdown.tick().await, Some(()));
        }
        assert_eq!(started.elapsed(), Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_stops_the_task() {
        let countdown = Countdown::start(TICK_PERIOD).unwrap();
        let task = countdown.task.abort_handle();
        drop(countdown);
        for _ in 0..10 {
            if task.is_finished() {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert!(task.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn slow_consumer_does_not_shift_the_schedule() {
        let started = Instant::now();
        let mut countdown = Countdown::start(TICK_PERIOD).unwrap();
        for _ in 0..4 {
            assert_eq!(countdown.tick().await, Some(()));
            time::sleep(Duration::from_millis(300)).await;
        }
        assert_eq!(countdown.tick().await, Some(()));
        assert_eq!(started.elapsed(), Duration::from_secs(5));
    }

    #[test]
    fn starting_without_a_runtime_is_an_error() {
        assert_eq!(Countdown::start(TICK_PERIOD).unwrap_err(), SessionError::NoRuntime);
    }
}
