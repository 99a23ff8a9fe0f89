// Periodic wall-clock refresh for the taskbar

use chrono::{DateTime, Local};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

/// A recurring clock task. Stopping or dropping it cancels the task, so no
/// tick can reach state that has already been torn down.
pub struct ClockTicker {
    task: Option<JoinHandle<()>>,
}

impl ClockTicker {
    /// Spawn on `runtime`, calling `on_tick` immediately and then every `period`
    pub fn start<F>(runtime: &Handle, period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut(DateTime<Local>) + Send + 'static,
    {
        let task = runtime.spawn(async move {
            let mut interval = time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                on_tick(Local::now());
            }
        });
        debug!("[CLOCK] started, period {:?}", period);

        Self { task: Some(task) }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("[CLOCK] stopped");
        }
    }
}

impl Drop for ClockTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting(ticks: &Arc<AtomicUsize>) -> impl FnMut(DateTime<Local>) + Send + 'static {
        let ticks = ticks.clone();
        move |_| {
            ticks.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_on_cadence() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let ticker = ClockTicker::start(&Handle::current(), Duration::from_secs(1), counting(&ticks));

        time::sleep(Duration::from_millis(3500)).await;
        assert!(ticks.load(Ordering::SeqCst) >= 3);
        assert!(ticker.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_future_ticks() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let mut ticker =
            ClockTicker::start(&Handle::current(), Duration::from_secs(1), counting(&ticks));

        time::sleep(Duration::from_millis(1500)).await;
        ticker.stop();
        assert!(!ticker.is_running());
        let seen = ticks.load(Ordering::SeqCst);

        time::sleep(Duration::from_secs(10)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), seen);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_task() {
        let ticks = Arc::new(AtomicUsize::new(0));
        {
            let _ticker =
                ClockTicker::start(&Handle::current(), Duration::from_secs(1), counting(&ticks));
            time::sleep(Duration::from_millis(500)).await;
        }
        let seen = ticks.load(Ordering::SeqCst);

        time::sleep(Duration::from_secs(5)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), seen);
    }
}
