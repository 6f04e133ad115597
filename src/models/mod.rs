pub mod phase;
pub mod timer;
