//! Elapsed shift / break durations, recomputed on a scheduler tick.

use super::keys;
use crate::core::clock::Clock;
use crate::core::scheduler::{CancelToken, Scheduler};
use crate::store::KvStore;
use crate::utils::time::parse_timestamp;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// `HH:MM:SS`, zero padded. Hours keep growing past 24; negatives read as 0.
pub fn format_hms(total_seconds: i64) -> String {
    let s = total_seconds.max(0);
    format!("{:02}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60)
}

/// Whole seconds from `since` to `now`.
pub fn elapsed_seconds(since: DateTime<Local>, now: DateTime<Local>) -> i64 {
    (now - since).num_seconds()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ElapsedView {
    /// Time since clock-in, when clocked in.
    pub shift: Option<String>,
    /// Time since the current break started, when on a break.
    pub on_break: Option<String>,
}

impl ElapsedView {
    pub fn is_idle(&self) -> bool {
        self.shift.is_none() && self.on_break.is_none()
    }
}

/// One recomputation from the persisted state.
pub fn compute_elapsed<S, C>(store: &S, clock: &C) -> ElapsedView
where
    S: KvStore + ?Sized,
    C: Clock + ?Sized,
{
    let now = clock.now();

    let since = |flag: &str, at: &str| {
        if !store.flag(flag) {
            return None;
        }
        let start = store.get(at).and_then(|s| parse_timestamp(&s))?;
        Some(format_hms(elapsed_seconds(start, now)))
    };

    ElapsedView {
        shift: since(keys::IS_CLOCKED_IN, keys::CLOCK_IN_TIME),
        on_break: since(keys::IS_ON_BREAK, keys::BREAK_START_TIME),
    }
}

/// Repeating recomputation bound to its owner's lifetime: dropping the ticker
/// cancels the scheduled task.
pub struct ElapsedTicker {
    view: Arc<Mutex<ElapsedView>>,
    token: CancelToken,
}

impl ElapsedTicker {
    pub fn start<S, C, Sch, F>(
        store: Arc<S>,
        clock: C,
        scheduler: &Sch,
        interval: Duration,
        mut on_tick: F,
    ) -> Self
    where
        S: KvStore + 'static,
        C: Clock + 'static,
        Sch: Scheduler + ?Sized,
        F: FnMut(&ElapsedView) + Send + 'static,
    {
        let view = Arc::new(Mutex::new(compute_elapsed(store.as_ref(), &clock)));
        let shared = Arc::clone(&view);

        let token = scheduler.every(
            interval,
            Box::new(move || {
                let next = compute_elapsed(store.as_ref(), &clock);
                on_tick(&next);
                *shared.lock().unwrap_or_else(|e| e.into_inner()) = next;
            }),
        );

        Self { view, token }
    }

    /// Latest computed durations.
    pub fn view(&self) -> ElapsedView {
        self.view.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn stop(&self) {
        self.token.cancel();
    }

    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled()
    }
}

impl Drop for ElapsedTicker {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
