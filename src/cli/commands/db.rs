use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::maintenance::{integrity_problems, vacuum};
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum: do_vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    if !(*migrate || *check || *do_vacuum || *show_info) {
        warning("Nothing to do: use --migrate, --check, --vacuum or --info.");
        return Ok(());
    }

    let mut pool = DbPool::new(&cfg.database)?;

    if *migrate {
        let applied = pool.with_conn(run_pending_migrations)?;
        if applied.is_empty() {
            info("Database schema is up to date.");
        } else {
            success(format!("Migrations applied: {}", applied.join(", ")));
        }
    }

    if *show_info {
        // stats read the current schema
        pool.with_conn(run_pending_migrations)?;
        stats::print_db_info(&mut pool, &cfg.database)?;
    }

    if *check {
        let problems = integrity_problems(&pool.conn)?;
        if problems.is_empty() {
            success("Integrity check passed.");
        } else {
            error(format!("Integrity check failed: {}", problems.join("; ")));
        }
    }

    if *do_vacuum {
        vacuum(&pool.conn)?;
        success("Vacuum completed.");
    }

    Ok(())
}
