//! Command handling module
//! 
//! This module turns link events from the widget into timer commands.

pub mod dispatcher;
pub mod link;

pub use dispatcher::{CommandDispatcher, TickLauncher};
pub use link::{Command, LinkEvent, LinkEventKind};
