//! Repeating-callback scheduler.
//!
//! `every` hands back a [`CancelToken`]; once cancelled the callback is never
//! invoked again. `ThreadScheduler` runs each task on its own thread,
//! `ManualScheduler` fires tasks only when [`ManualScheduler::advance`] is
//! called, optionally moving a [`ManualClock`] in lockstep.

use super::clock::ManualClock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

pub type Task = Box<dyn FnMut() + Send + 'static>;

/// Shorter intervals are raised to this.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

pub trait Scheduler {
    fn every(&self, interval: Duration, callback: Task) -> CancelToken;
}

/// Real-time scheduler: one sleeping thread per task.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadScheduler;

impl Scheduler for ThreadScheduler {
    fn every(&self, interval: Duration, mut callback: Task) -> CancelToken {
        let interval = interval.max(MIN_INTERVAL);
        let token = CancelToken::new();
        let worker = token.clone();

        thread::spawn(move || {
            loop {
                thread::sleep(interval);
                if worker.is_cancelled() {
                    break;
                }
                callback();
            }
        });

        token
    }
}

struct ManualTask {
    id: u64,
    interval: Duration,
    until_next: Duration,
    token: CancelToken,
    callback: Task,
}

#[derive(Default)]
struct ManualQueue {
    next_id: u64,
    tasks: Vec<ManualTask>,
}

/// Deterministic scheduler for tests.
///
/// Callbacks run with the task list unlocked, so they may call back into the
/// scheduler (or a clone of it).
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Arc<Mutex<ManualQueue>>,
    clock: Option<ManualClock>,
}

fn noop() -> Task {
    Box::new(|| {})
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance `clock` together with the scheduler.
    pub fn with_clock(clock: ManualClock) -> Self {
        Self {
            queue: Arc::default(),
            clock: Some(clock),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ManualQueue> {
        self.queue.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Move time forward, firing every due callback in order of due time.
    pub fn advance(&self, by: Duration) {
        let mut remaining = by;

        loop {
            let mut due: Vec<(u64, CancelToken, Task)> = Vec::new();
            {
                let mut queue = self.lock();
                queue.tasks.retain(|t| !t.token.is_cancelled());

                let Some(step) = queue.tasks.iter().map(|t| t.until_next).min() else {
                    break;
                };
                if step > remaining {
                    break;
                }

                if let Some(clock) = &self.clock {
                    clock.advance(step);
                }
                remaining -= step;

                for task in queue.tasks.iter_mut() {
                    task.until_next -= step;
                    if task.until_next.is_zero() {
                        task.until_next = task.interval;
                        let callback = std::mem::replace(&mut task.callback, noop());
                        due.push((task.id, task.token.clone(), callback));
                    }
                }
            }

            for (_, token, callback) in due.iter_mut() {
                if !token.is_cancelled() {
                    (*callback)();
                }
            }

            let mut queue = self.lock();
            for (id, _, callback) in due {
                if let Some(task) = queue.tasks.iter_mut().find(|t| t.id == id) {
                    task.callback = callback;
                }
            }
        }

        let mut queue = self.lock();
        for task in queue.tasks.iter_mut() {
            task.until_next = task.until_next.saturating_sub(remaining);
        }
        if let Some(clock) = &self.clock {
            clock.advance(remaining);
        }
    }

    /// Number of tasks that are still scheduled.
    pub fn active_tasks(&self) -> usize {
        self.lock()
            .tasks
            .iter()
            .filter(|t| !t.token.is_cancelled())
            .count()
    }
}

impl Scheduler for ManualScheduler {
    fn every(&self, interval: Duration, callback: Task) -> CancelToken {
        let interval = interval.max(MIN_INTERVAL);
        let token = CancelToken::new();
        let mut queue = self.lock();
        let id = queue.next_id;
        queue.next_id += 1;
        queue.tasks.push(ManualTask {
            id,
            interval,
            until_next: interval,
            token: token.clone(),
            callback,
        });
        token
    }
}
