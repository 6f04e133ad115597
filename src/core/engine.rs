//! Timer lifecycle: create, pause, resume, reset and live status.
//!
//! Remaining time is computed on read and folded into the stored baseline on
//! transitions. There is no background task: every operation is a single
//! state change evaluated against the clock at the moment it runs.

use crate::core::clock::{Clock, SystemClock};
use crate::core::status;
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_timer, list_timers, load_timer, update_timer};
use crate::errors::{AppError, AppResult};
use crate::models::timer::{TimerRecord, TimerState, TimerStatus};
use crate::utils::time::format_seconds;
use chrono::{DateTime, SubsecRound, Utc};
use rusqlite::Connection;

pub struct TimerEngine<C: Clock = SystemClock> {
    pool: DbPool,
    clock: C,
}

fn validate_id(id: i64) -> AppResult<()> {
    if id <= 0 {
        return Err(AppError::InvalidInput(format!(
            "timer id must be a positive integer, got {}",
            id
        )));
    }
    Ok(())
}

/// "now" at the precision the store keeps, so returned states match what a
/// later read sees.
fn stored_now<C: Clock>(clock: &C) -> DateTime<Utc> {
    clock.now().trunc_subsecs(3)
}

fn require(conn: &Connection, id: i64) -> AppResult<TimerRecord> {
    load_timer(conn, id)?.ok_or(AppError::NotFound(id))
}

impl<C: Clock> TimerEngine<C> {
    pub fn new(pool: DbPool, clock: C) -> Self {
        Self { pool, clock }
    }

    /// Open (or create) the database at `path` and bring its schema up to date.
    pub fn open(path: &str, clock: C) -> AppResult<Self> {
        let mut pool = DbPool::new(path)?;
        pool.with_conn(init_db)?;
        Ok(Self::new(pool, clock))
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn pool(&mut self) -> &mut DbPool {
        &mut self.pool
    }

    /// Create a timer that starts running immediately.
    pub fn create(&mut self, duration_seconds: i64) -> AppResult<TimerState> {
        if duration_seconds <= 0 {
            return Err(AppError::InvalidInput(format!(
                "duration must be a positive number of seconds, got {}",
                duration_seconds
            )));
        }

        let clock = &self.clock;
        self.pool.transaction(|tx| {
            let mut record = TimerRecord::started(duration_seconds, stored_now(clock));
            record.id = insert_timer(tx, &record)?;

            ttlog(
                tx,
                "start",
                &format!("timer #{}", record.id),
                &format!("Started timer for {}", format_seconds(duration_seconds)),
            )?;

            Ok(record.to_state())
        })
    }

    /// Pause a running timer, folding the elapsed time into its baseline.
    /// Pausing a timer that is not running changes nothing.
    pub fn pause(&mut self, id: i64) -> AppResult<TimerState> {
        validate_id(id)?;

        let clock = &self.clock;
        self.pool.transaction(|tx| {
            let mut record = require(tx, id)?;
            if !record.is_running {
                return Ok(record.to_state());
            }

            let before = record.baseline_seconds;
            record.baseline_seconds = status::live_remaining(&record, clock.now());
            record.is_running = false;
            record.anchor_time = None;
            update_timer(tx, &record)?;

            ttlog(
                tx,
                "pause",
                &format!("timer #{}", id),
                &format!(
                    "Paused with {} left ({}s elapsed)",
                    format_seconds(record.baseline_seconds),
                    before - record.baseline_seconds
                ),
            )?;

            Ok(record.to_state())
        })
    }

    /// Same as [`pause`](Self::pause).
    pub fn stop(&mut self, id: i64) -> AppResult<TimerState> {
        self.pause(id)
    }

    pub fn resume(&mut self, id: i64) -> AppResult<TimerState> {
        validate_id(id)?;

        let clock = &self.clock;
        self.pool.transaction(|tx| {
            let mut record = require(tx, id)?;
            if record.is_running {
                return Err(AppError::AlreadyRunning(id));
            }
            if record.baseline_seconds <= 0 {
                return Err(AppError::AlreadyFinished(id));
            }

            record.is_running = true;
            record.anchor_time = Some(stored_now(clock));
            update_timer(tx, &record)?;

            ttlog(
                tx,
                "resume",
                &format!("timer #{}", id),
                &format!("Resumed with {} left", format_seconds(record.baseline_seconds)),
            )?;

            Ok(record.to_state())
        })
    }

    /// Stop the timer and restore its own configured duration.
    pub fn reset(&mut self, id: i64) -> AppResult<TimerState> {
        validate_id(id)?;

        self.pool.transaction(|tx| {
            let mut record = require(tx, id)?;

            record.baseline_seconds = record.original_duration_seconds;
            record.is_running = false;
            record.anchor_time = None;
            update_timer(tx, &record)?;

            ttlog(
                tx,
                "reset",
                &format!("timer #{}", id),
                &format!(
                    "Reset to {}",
                    format_seconds(record.original_duration_seconds)
                ),
            )?;

            Ok(record.to_state())
        })
    }

    /// Live status. Reads the row once and never writes, even when the timer
    /// is found to have run out.
    pub fn compute_status(&self, id: i64) -> AppResult<TimerStatus> {
        validate_id(id)?;

        let record = require(&self.pool.conn, id)?;
        Ok(status::compute_status(&record, self.clock.now()))
    }

    pub fn get(&self, id: i64) -> AppResult<TimerRecord> {
        validate_id(id)?;
        require(&self.pool.conn, id)
    }

    /// All timers, newest first.
    pub fn list(&self) -> AppResult<Vec<TimerRecord>> {
        list_timers(&self.pool.conn)
    }

    /// All timers with their live status, evaluated against a single "now".
    pub fn list_with_status(&self) -> AppResult<Vec<(TimerRecord, TimerStatus)>> {
        let now = self.clock.now();
        let out = self
            .list()?
            .into_iter()
            .map(|t| {
                let st = status::compute_status(&t, now);
                (t, st)
            })
            .collect();
        Ok(out)
    }
}
