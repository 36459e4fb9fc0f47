use crate::services::dates::DateKey;
use crate::services::fixture_service::FixtureService;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Periodic refresh of a sliding window of dates around today. Owned by the
/// process boundary: `start` spawns the timer task, `stop` aborts it, and a
/// second `start` on a running scheduler is a no-op.
pub struct RefreshScheduler {
    service: Arc<FixtureService>,
    interval: Duration,
    window_days: i64,
    handle: Option<JoinHandle<()>>,
}

impl RefreshScheduler {
    pub fn new(service: Arc<FixtureService>, interval: Duration, window_days: i64) -> Self {
        Self {
            service,
            interval,
            window_days,
            handle: None,
        }
    }

    pub fn start(&mut self) {
        if self.handle.is_some() {
            return;
        }

        let service = Arc::clone(&self.service);
        let window_days = self.window_days;
        let every = self.interval;

        info!(
            "Starting refresh scheduler: every {:?}, window +/-{} days",
            every, window_days
        );

        self.handle = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            loop {
                // The first tick fires immediately, so the pool is populated
                // right after startup.
                ticker.tick().await;
                sweep(&service, window_days);
            }
        }));
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            info!("Refresh scheduler stopped");
        }
    }

}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

/// One fire-and-forget task per date. Each task writes to its own date key,
/// so overlapping sweeps at worst repeat an idempotent upsert. A failed date
/// is retried on the next tick.
fn sweep(service: &Arc<FixtureService>, window_days: i64) {
    let today = DateKey::today();

    for offset in -window_days..=window_days {
        let date = today.offset(offset);
        let service = Arc::clone(service);

        tokio::spawn(async move {
            if let Err(e) = service.refresh_day(&date).await {
                warn!("Refresh failed for {}: {}", date, e);
            }
        });
    }
}
