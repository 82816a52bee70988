//! Command implementations

pub mod check;
pub mod play;

pub use check::{CheckReport, run_check};
pub use play::run_play;
