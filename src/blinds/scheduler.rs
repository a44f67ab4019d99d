use super::Schedule;
use crate::Tx;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Cancellation handle for a running [`BlindScheduler`].
/// Cloneable and usable from any task or thread.
#[derive(Debug, Clone, Default)]
pub struct Halt {
    cancelled: Arc<AtomicBool>,
    wake: Arc<Notify>,
}

impl Halt {
    /// Stops the schedule. No alert whose deadline is later than this call is delivered.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        self.wake.notify_one();
    }
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Delivers a [`Schedule`] to a text sink, one message per level,
/// each at its offset from the moment [`BlindScheduler::start`] was called.
///
/// A single background task sleeps from deadline to deadline.
/// Dropping the scheduler cancels it.
#[derive(Debug)]
pub struct BlindScheduler {
    schedule: Schedule,
    halt: Halt,
    task: Option<JoinHandle<()>>,
}

impl BlindScheduler {
    pub fn new(players: usize) -> Self {
        Self {
            schedule: Schedule::for_players(players),
            halt: Halt::default(),
            task: None,
        }
    }
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }
    pub fn halt(&self) -> Halt {
        self.halt.clone()
    }
    pub fn cancel(&self) {
        self.halt.cancel();
    }
    pub fn is_cancelled(&self) -> bool {
        self.halt.is_cancelled()
    }
    /// True while the timer task still has levels left to deliver.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }
    /// Spawns the timer task. The first level fires without delay.
    /// Must be called from within a tokio runtime; a second call is ignored.
    pub fn start(&mut self, sink: Tx) {
        if self.task.is_some() {
            log::warn!("[blinds] schedule already started");
            return;
        }
        if self.halt.is_cancelled() {
            log::debug!("[blinds] schedule cancelled before start");
            return;
        }
        let origin = Instant::now();
        let schedule = self.schedule.clone();
        let halt = self.halt.clone();
        self.task = Some(tokio::spawn(async move {
            log::debug!("[blinds] {} levels for {} players", schedule.len(), schedule.players());
            for alert in schedule {
                let Some(deadline) = origin.checked_add(alert.at) else {
                    log::warn!("[blinds] level {} is beyond the clock, stopping", alert.amount);
                    break;
                };
                tokio::select! {
                    biased;
                    _ = halt.wake.notified() => break,
                    _ = tokio::time::sleep_until(deadline) => {}
                }
                if halt.is_cancelled() {
                    break;
                }
                if sink.send(alert.to_string()).is_err() {
                    log::debug!("[blinds] sink closed, stopping schedule");
                    break;
                }
            }
        }));
    }
}

impl Drop for BlindScheduler {
    fn drop(&mut self) {
        self.halt.cancel();
    }
}
