//! Clock-in / break state of the operator at the till.
//!
//! The clocked-in flag is owned by the clock-in action and only read here,
//! on every call. Break state lives both in memory and in the injected
//! [`KvStore`] so that it survives a restart.

pub mod elapsed;
pub mod keys;

pub use elapsed::{ElapsedTicker, ElapsedView, compute_elapsed, format_hms};

use crate::core::clock::Clock;
use crate::models::break_type::BreakType;
use crate::store::KvStore;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveBreak {
    pub kind: BreakType,
    pub started_at: String, // RFC 3339, as persisted
}

pub struct ShiftTimer<S: KvStore, C: Clock> {
    store: Arc<S>,
    clock: C,
    clock_modal_open: bool,
    active_break: Option<ActiveBreak>,
}

impl<S: KvStore, C: Clock> ShiftTimer<S, C> {
    /// Build the timer and restore any break left open in `store`.
    /// A partially persisted break (missing type or start) is ignored.
    pub fn new(store: Arc<S>, clock: C) -> Self {
        let active_break = restore_break(store.as_ref());
        Self {
            store,
            clock,
            clock_modal_open: false,
            active_break,
        }
    }

    pub fn open_clock_modal(&mut self) {
        self.clock_modal_open = true;
    }

    pub fn close_clock_modal(&mut self) {
        self.clock_modal_open = false;
    }

    pub fn is_clock_modal_open(&self) -> bool {
        self.clock_modal_open
    }

    pub fn is_user_clocked_in(&self) -> bool {
        self.store.flag(keys::IS_CLOCKED_IN)
    }

    /// Start a break. Does nothing unless the user is clocked in.
    pub fn start_break(&mut self, kind: BreakType) {
        if !self.is_user_clocked_in() {
            return;
        }

        let started_at = self.clock.now().to_rfc3339();

        self.store.set(keys::IS_ON_BREAK, keys::TRUE);
        self.store.set(keys::BREAK_TYPE, kind.to_store_str());
        self.store.set(keys::BREAK_START_TIME, &started_at);

        self.active_break = Some(ActiveBreak { kind, started_at });
    }

    pub fn end_break(&mut self) {
        self.active_break = None;
        for key in keys::BREAK_KEYS {
            self.store.remove(key);
        }
    }

    pub fn is_on_break(&self) -> bool {
        self.active_break.is_some()
    }

    pub fn break_type(&self) -> Option<BreakType> {
        self.active_break.as_ref().map(|b| b.kind)
    }

    pub fn break_start_time(&self) -> Option<&str> {
        self.active_break.as_ref().map(|b| b.started_at.as_str())
    }

    pub fn active_break(&self) -> Option<&ActiveBreak> {
        self.active_break.as_ref()
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

fn restore_break<S: KvStore + ?Sized>(store: &S) -> Option<ActiveBreak> {
    if !store.flag(keys::IS_ON_BREAK) {
        return None;
    }

    let kind = store
        .get(keys::BREAK_TYPE)
        .and_then(|s| BreakType::from_store_str(&s))?;
    let started_at = store.get(keys::BREAK_START_TIME)?;

    Some(ActiveBreak { kind, started_at })
}
