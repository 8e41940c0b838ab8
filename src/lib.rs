//! Babysteps Timer - a minimalist countdown timer for pairing and TDD
//! 
//! The widget counts down a fixed 120 second cycle, plays a cue ten seconds
//! before the end and at expiry, and tints its background to show whether the
//! last cycle passed (Reset in time) or failed (the countdown ran out).

pub mod config;
pub mod console;
pub mod state;
pub mod commands;
pub mod services;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{AppState, TimerEngine};
pub use commands::CommandDispatcher;
pub use utils::signals::shutdown_signal;
