//! State management module
//! 
//! This module contains the timer state machine and the shared handle around it.

pub mod app_state;
pub mod frame;
pub mod timer_engine;

// Re-export main types
pub use app_state::{AppState, TickPoll};
pub use frame::{BackgroundState, Frame};
pub use timer_engine::{format_caption, Clip, TickOutcome, TimerEngine, CYCLE_SECONDS};
