//! Clock-in / clock-out and break commands.
//!
//! Clocking in and out owns the `isClockedIn` / `clockInTime` keys; breaks go
//! through [`ShiftTimer`], which only reads them.

use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::scheduler::Scheduler;
use crate::core::shift::elapsed::elapsed_seconds;
use crate::core::shift::{ElapsedTicker, ShiftTimer, compute_elapsed, format_hms, keys};
use crate::db::log::ttlog_or_warn;
use crate::db::queries::{insert_shift, load_shifts};
use crate::errors::{AppError, AppResult};
use crate::models::break_type::BreakType;
use crate::models::shift::ShiftRecord;
use crate::store::KvStore;
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::{GREEN, RESET, YELLOW};
use crate::utils::secs2readable;
use crate::utils::table::{Column, Table};
use crate::utils::time::{parse_timestamp, parse_timestamp_strict, short_timestamp};
use chrono::{DateTime, Local};
use rusqlite::Connection;
use std::sync::{Arc, mpsc};
use std::time::Duration;

pub struct ClockLogic;

impl ClockLogic {
    pub fn clock_in<S: KvStore, C: Clock>(
        conn: &Connection,
        store: &S,
        clock: &C,
    ) -> AppResult<DateTime<Local>> {
        if store.flag(keys::IS_CLOCKED_IN) {
            let since = store.get(keys::CLOCK_IN_TIME).unwrap_or_default();
            return Err(AppError::AlreadyClockedIn(short_timestamp(&since)));
        }

        let now = clock.now();
        store.set(keys::IS_CLOCKED_IN, keys::TRUE);
        store.set(keys::CLOCK_IN_TIME, &now.to_rfc3339());
        store.remove(keys::BREAK_SECONDS);

        ttlog_or_warn(conn, "clock_in", "", &now.to_rfc3339());
        success(format!("Clocked in at {}.", now.format("%H:%M:%S")));

        Ok(now)
    }

    /// Close the shift: end any open break, record the shift row and drop
    /// every shift key from the store.
    pub fn clock_out<S: KvStore, C: Clock>(
        conn: &Connection,
        timer: &mut ShiftTimer<S, C>,
    ) -> AppResult<ShiftRecord> {
        if !timer.is_user_clocked_in() {
            return Err(AppError::NotClockedIn);
        }

        if timer.is_on_break() {
            Self::end_break(conn, timer)?;
        }

        let store = Arc::clone(timer.store());
        let raw_in = store.get(keys::CLOCK_IN_TIME).unwrap_or_default();
        let clock_in = parse_timestamp_strict(&raw_in)?;
        let now = timer.clock().now();

        let worked = elapsed_seconds(clock_in, now).max(0);
        let breaks = accumulated_break_seconds(store.as_ref());

        // flag goes first: a recorded shift is never left clocked in
        store.try_remove(keys::IS_CLOCKED_IN)?;

        let id = match insert_shift(conn, &raw_in, &now.to_rfc3339(), worked, breaks) {
            Ok(id) => id,
            Err(e) => {
                store.set(keys::IS_CLOCKED_IN, keys::TRUE);
                return Err(e);
            }
        };

        for key in [keys::CLOCK_IN_TIME, keys::BREAK_SECONDS] {
            store.try_remove(key)?;
        }

        ttlog_or_warn(
            conn,
            "clock_out",
            &id.to_string(),
            &format!("worked {}, breaks {}", format_hms(worked), format_hms(breaks)),
        );
        success(format!(
            "Clocked out at {} after {} (breaks {}).",
            now.format("%H:%M:%S"),
            format_hms(worked),
            format_hms(breaks)
        ));

        Ok(ShiftRecord {
            id,
            clock_in: raw_in,
            clock_out: now.to_rfc3339(),
            worked_seconds: worked,
            break_seconds: breaks,
        })
    }

    /// Returns `true` when a break was started.
    pub fn start_break<S: KvStore, C: Clock>(
        conn: &Connection,
        timer: &mut ShiftTimer<S, C>,
        kind: BreakType,
    ) -> AppResult<bool> {
        if !timer.is_user_clocked_in() {
            warning("Not clocked in: a break can only start during a shift.");
            return Ok(false);
        }
        if let Some(b) = timer.active_break() {
            warning(format!(
                "{} already running since {}.",
                b.kind.label(),
                short_timestamp(&b.started_at)
            ));
            return Ok(false);
        }

        timer.start_break(kind);

        let started = timer.break_start_time().unwrap_or_default().to_string();
        ttlog_or_warn(conn, "break_start", kind.bt_as_str(), &started);
        success(format!("{} started.", kind.label()));
        Ok(true)
    }

    /// End the running break, adding its length to the shift's break total.
    /// Returns the break length in seconds, `None` if no break was running.
    pub fn end_break<S: KvStore, C: Clock>(
        conn: &Connection,
        timer: &mut ShiftTimer<S, C>,
    ) -> AppResult<Option<i64>> {
        let Some(active) = timer.active_break().cloned() else {
            warning("No break is running.");
            return Ok(None);
        };

        let now = timer.clock().now();
        let secs = parse_timestamp(&active.started_at)
            .map(|start| elapsed_seconds(start, now).max(0))
            .unwrap_or(0);

        let store = Arc::clone(timer.store());
        let total = accumulated_break_seconds(store.as_ref()) + secs;
        timer.end_break();
        if timer.is_user_clocked_in() {
            store.set(keys::BREAK_SECONDS, &total.to_string());
        }

        ttlog_or_warn(conn, "break_end", active.kind.bt_as_str(), &format_hms(secs));
        success(format!("{} ended after {}.", active.kind.label(), format_hms(secs)));
        Ok(Some(secs))
    }

    pub fn status<S: KvStore, C: Clock>(timer: &ShiftTimer<S, C>) {
        if !timer.is_user_clocked_in() {
            info("Not clocked in.");
            return;
        }

        let store = timer.store();
        let view = compute_elapsed(store.as_ref(), timer.clock());
        let since = store
            .get(keys::CLOCK_IN_TIME)
            .map(|s| short_timestamp(&s))
            .unwrap_or_default();

        println!(
            "{}● On shift{} since {} ({})",
            GREEN,
            RESET,
            since,
            view.shift.as_deref().unwrap_or("--:--:--")
        );

        if let Some(b) = timer.active_break() {
            println!(
                "{}◐ {}{} since {} ({})",
                YELLOW,
                b.kind.label(),
                RESET,
                short_timestamp(&b.started_at),
                view.on_break.as_deref().unwrap_or("--:--:--")
            );
        }

        let breaks = accumulated_break_seconds(store.as_ref());
        if breaks > 0 {
            println!("  Breaks taken: {}", format_hms(breaks));
        }
    }

    /// Print the running durations on every tick. Stops after `ticks`
    /// updates, or never when `None`.
    pub fn watch<S, C, Sch>(
        store: Arc<S>,
        clock: C,
        scheduler: &Sch,
        interval: Duration,
        ticks: Option<u32>,
    ) -> AppResult<()>
    where
        S: KvStore + 'static,
        C: Clock + 'static,
        Sch: Scheduler,
    {
        if !store.flag(keys::IS_CLOCKED_IN) {
            info("Not clocked in.");
            return Ok(());
        }

        let (tx, rx) = mpsc::channel();
        let ticker = ElapsedTicker::start(store, clock, scheduler, interval, move |view| {
            let _ = tx.send(view.clone());
        });

        let mut seen = 0u32;
        while ticks.is_none_or(|n| seen < n) {
            let Ok(view) = rx.recv() else { break };
            seen += 1;

            let line = match (&view.shift, &view.on_break) {
                (Some(s), Some(b)) => format!("shift {}  break {}", s, b),
                (Some(s), None) => format!("shift {}", s),
                (None, _) => {
                    info("Clocked out.");
                    break;
                }
            };
            println!("{}", line);
        }

        ticker.stop();
        Ok(())
    }

    pub fn list_shifts(conn: &Connection, cfg: &Config) -> AppResult<()> {
        let shifts = load_shifts(conn)?;

        if shifts.is_empty() {
            info("No completed shifts.");
            return Ok(());
        }

        let mut table = Table::new(
            vec![
                Column::right("ID"),
                Column::left("IN"),
                Column::left("OUT"),
                Column::right("WORKED"),
                Column::right("BREAKS"),
                Column::right("NET"),
            ],
            &cfg.separator_char,
        );

        for s in &shifts {
            table.add_row(vec![
                s.id.to_string(),
                short_timestamp(&s.clock_in),
                short_timestamp(&s.clock_out),
                secs2readable(s.worked_seconds),
                secs2readable(s.break_seconds),
                secs2readable(s.net_seconds()),
            ]);
        }

        print!("{}", table.render());
        Ok(())
    }
}

fn accumulated_break_seconds<S: KvStore + ?Sized>(store: &S) -> i64 {
    store
        .get(keys::BREAK_SECONDS)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0)
}
