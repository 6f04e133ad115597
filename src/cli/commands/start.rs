use crate::cli::commands::open_engine;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::render::print_state;
use crate::utils::parse_duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Start { duration, json } = cmd {
        let seconds = match duration {
            Some(d) => parse_duration(d)?,
            None => cfg.default_duration_seconds,
        };

        let mut engine = open_engine(cfg)?;
        let state = engine.create(seconds)?;
        print_state(&state, *json)?;
    }

    Ok(())
}
