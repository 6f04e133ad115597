pub mod config;
pub mod control;
pub mod db;
pub mod init;
pub mod list;
pub mod log;
pub mod start;
pub mod status;

use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::engine::TimerEngine;
use crate::errors::AppResult;

/// Open the configured database with the wall clock.
pub(crate) fn open_engine(cfg: &Config) -> AppResult<TimerEngine<SystemClock>> {
    TimerEngine::open(&cfg.database, SystemClock)
}
