use tokio::time::{interval, Duration};

use crate::limiter::rate_limiter::RateLimiter;

const SWEEP_INTERVAL_SECS: u64 = 300;

/// Periodically drops rate-limit records whose window has passed.
pub async fn start_limiter_sweep_task(limiter: RateLimiter) {
    let mut interval = interval(Duration::from_secs(SWEEP_INTERVAL_SECS));

    loop {
        interval.tick().await;

        let swept = limiter.sweep_expired();
        if swept > 0 {
            tracing::info!("Swept {} expired rate-limit entries", swept);
        }
    }
}
