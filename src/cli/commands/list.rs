use crate::cli::commands::open_engine;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::render::print_list;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { json } = cmd {
        let engine = open_engine(cfg)?;
        let timers = engine.list_with_status()?;
        print_list(&timers, *json)?;
    }
    Ok(())
}
