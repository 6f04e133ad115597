use crate::cli::commands::open_engine;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::render::print_status;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { id, json } = cmd {
        let engine = open_engine(cfg)?;
        let status = engine.compute_status(*id)?;

        let bar = cfg.show_progress_bar.then_some(cfg.progress_bar_width);
        print_status(&status, *json, bar)?;
    }

    Ok(())
}
