//! Background tasks module
//! 
//! This module contains the countdown loop that runs alongside the console.

pub mod tick_loop;

// Re-export main items
pub use tick_loop::{tick_loop_task, TickLoop, TICK_INTERVAL};
