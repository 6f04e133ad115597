pub mod clock;
pub mod engine;
pub mod log;
pub mod status;
