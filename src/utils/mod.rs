pub mod colors;
pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::progress_bar;
pub use time::{format_seconds, parse_duration};
