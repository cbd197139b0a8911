//! Reminder scheduler.
//!
//! A fixed-interval scan over the task store: every due, unnotified reminder
//! is delivered exactly once and the task is marked notified. The poll
//! interval trades timeliness for simplicity; with a single-user list there
//! is no need for a deadline queue or a timer per task.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::{Error, Result};
use crate::notify::Notifier;
use crate::task::TaskStore;

/// Run one reminder scan at the given instant.
///
/// Fires a notification for every task whose `remind_at` has passed and whose
/// `notified` flag is still unset, then marks those tasks notified. The store
/// is persisted once at the end of the scan, and only if something changed.
/// Returns the number of notifications delivered.
pub fn scan(
    store: &mut TaskStore,
    now: DateTime<Utc>,
    notifier: &mut dyn Notifier,
) -> Result<usize> {
    let due: Vec<usize> = store
        .tasks()
        .iter()
        .enumerate()
        .filter(|(_, task)| task.reminder_due(now))
        .map(|(idx, _)| idx)
        .collect();

    for &idx in &due {
        notifier.deliver(&store.tasks()[idx]);
        store.tasks_mut()[idx].notified = true;
    }

    if !due.is_empty() {
        store.persist()?;
    }
    Ok(due.len())
}

/// Handle to a running background scheduler.
///
/// The scheduler thread owns the store for its lifetime; `stop` cancels the
/// loop and hands the store back.
#[derive(Debug)]
pub struct SchedulerHandle {
    stop_tx: Sender<()>,
    join: JoinHandle<Result<TaskStore>>,
}

impl SchedulerHandle {
    /// Spawn the scan loop on a background thread with a fixed tick interval.
    pub fn spawn<N>(mut store: TaskStore, mut notifier: N, interval: Duration) -> Self
    where
        N: Notifier + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel();
        let join = thread::spawn(move || loop {
            match stop_rx.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => {
                    let fired = scan(&mut store, Utc::now(), &mut notifier)?;
                    if fired > 0 {
                        debug!(fired, "reminder scan delivered notifications");
                    }
                }
                Ok(()) | Err(RecvTimeoutError::Disconnected) => return Ok(store),
            }
        });
        Self { stop_tx, join }
    }

    /// Cancel the loop and return the store.
    pub fn stop(self) -> Result<TaskStore> {
        let _ = self.stop_tx.send(());
        self.join
            .join()
            .map_err(|_| Error::OperationFailed("scheduler thread panicked".to_string()))?
    }
}
