//! pause / resume / reset: the transitions that act on an existing timer.

use crate::cli::commands::open_engine;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::render::print_state;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut engine = open_engine(cfg)?;

    let (state, json) = match cmd {
        Commands::Pause { id, json } => (engine.pause(*id)?, *json),
        Commands::Resume { id, json } => (engine.resume(*id)?, *json),
        Commands::Reset { id, json } => (engine.reset(*id)?, *json),
        _ => return Ok(()),
    };

    print_state(&state, json)
}
