use clap::{Parser, Subcommand};

/// Command-line interface definition for rCountdown
/// CLI countdown timers persisted in SQLite
#[derive(Parser)]
#[command(
    name = "rcountdown",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple countdown timer CLI: start, pause, resume and reset timers stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Start a new countdown timer
    Start {
        /// Duration: seconds (240) or with units (90s, 4m, 1h30m)
        #[arg(long, short = 'd', help = "Timer duration (default from config)")]
        duration: Option<String>,

        #[arg(long, help = "Print the result as JSON")]
        json: bool,
    },

    /// Show the live status of a timer
    Status {
        /// Timer id
        id: i64,

        #[arg(long, help = "Print the result as JSON")]
        json: bool,
    },

    /// Pause a running timer
    #[command(visible_alias = "stop")]
    Pause {
        /// Timer id
        id: i64,

        #[arg(long, help = "Print the result as JSON")]
        json: bool,
    },

    /// Resume a paused timer
    Resume {
        /// Timer id
        id: i64,

        #[arg(long, help = "Print the result as JSON")]
        json: bool,
    },

    /// Stop a timer and restore its original duration
    Reset {
        /// Timer id
        id: i64,

        #[arg(long, help = "Print the result as JSON")]
        json: bool,
    },

    /// List all timers, newest first
    List {
        #[arg(long, help = "Print the result as JSON")]
        json: bool,
    },
}
