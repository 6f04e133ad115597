use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use crate::ui::messages::notice;
use rusqlite::Connection;

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine.
/// Applied migrations are reported on stderr so command output stays clean.
pub fn init_db(conn: &mut Connection) -> AppResult<()> {
    for version in run_pending_migrations(conn)? {
        notice(format!("Migration applied: {}", version));
    }
    Ok(())
}
