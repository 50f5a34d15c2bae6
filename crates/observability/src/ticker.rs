//! ProgressTicker - fixed-cadence permission to render a progress mark
//!
//! A background task raises the `ticked` flag every 125 ms; the consuming
//! stage clears it when it renders a mark. This caps status output at one
//! mark per interval no matter how fast lines move through the pipeline,
//! while still showing liveness on slow I/O.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, error};

/// Cadence at which the ticker re-arms the flag
pub const TICK_INTERVAL: Duration = Duration::from_millis(125);

/// Handle to the running ticker task
///
/// The flag pair is the only state shared across tasks in the whole
/// pipeline: single producer, single consumer, atomics only.
pub struct ProgressTicker {
    ticked: Arc<AtomicBool>,
    must_stop: Arc<AtomicBool>,
    task: JoinHandle<()>,
}

impl ProgressTicker {
    /// Launch the ticker task
    ///
    /// The flag starts raised so the very first consumption yields a mark
    /// without waiting a full interval.
    pub fn start() -> Self {
        let ticked = Arc::new(AtomicBool::new(true));
        let must_stop = Arc::new(AtomicBool::new(false));

        let task = tokio::spawn({
            let ticked = Arc::clone(&ticked);
            let must_stop = Arc::clone(&must_stop);
            async move {
                while !must_stop.load(Ordering::Acquire) {
                    ticked.store(true, Ordering::Release);
                    tokio::time::sleep(TICK_INTERVAL).await;
                }
                // One final arm so a consumer racing shutdown still sees a tick
                ticked.store(true, Ordering::Release);
                debug!("ticker task stopped");
            }
        });

        Self {
            ticked,
            must_stop,
            task,
        }
    }

    /// Atomically read-and-clear the tick flag
    ///
    /// Returns whether a tick occurred since the last consumption.
    pub fn consume_tick(&self) -> bool {
        self.ticked.swap(false, Ordering::AcqRel)
    }

    /// Signal the task to stop and wait until it has exited
    ///
    /// Bounded by roughly one tick interval. Must complete before the
    /// pipeline returns so no background activity outlives it.
    pub async fn stop(self) {
        self.must_stop.store(true, Ordering::Release);
        if let Err(e) = self.task.await {
            error!(error = ?e, "ticker task panicked");
        }
    }
}
