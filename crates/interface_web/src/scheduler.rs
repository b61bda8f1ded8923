//! Scheduled billing timer
//!
//! One background task owns the billing schedule. It ticks on a fixed
//! interval and hands every tick to the sweep, which applies the day
//! gate itself. The tick is much finer than a day on purpose: a server
//! restarted mid-morning on the 27th still sweeps within the hour, and
//! off the billing day the extra invocations are no-ops.

use std::time::Duration;

use chrono::Local;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::billing;
use crate::AppState;

/// Spawns the billing timer task
///
/// The first tick fires immediately after startup.
pub fn spawn_billing_timer(state: AppState) -> JoinHandle<()> {
    // tokio panics on a zero interval
    let period = Duration::from_secs(state.config.billing_tick_secs.max(1));
    info!(period_secs = period.as_secs(), "Starting billing timer");

    tokio::spawn(async move {
        let mut ticks = tokio::time::interval(period);
        loop {
            ticks.tick().await;
            let today = Local::now().date_naive();
            match billing::sweep_if_billing_day(&state, today).await {
                Ok(0) => debug!("Billing tick made no bills"),
                Ok(billed) => info!(billed, "Billing sweep completed"),
                Err(err) => error!(error = %err, "Billing sweep failed"),
            }
        }
    })
}
