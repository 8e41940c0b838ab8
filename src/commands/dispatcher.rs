//! Command dispatch for widget link events

use std::sync::Arc;
use tracing::{debug, error, info};

use crate::{
    services::{ExitAction, Surface},
    state::{AppState, Frame},
};
use super::{Command, LinkEvent};

/// Starts the engine and the countdown loop that follows it
pub trait TickLauncher: Send + Sync {
    fn launch(&self);
}

/// Maps link events onto timer operations and widget side effects
pub struct CommandDispatcher {
    state: Arc<AppState>,
    surface: Arc<dyn Surface>,
    tick_loop: Arc<dyn TickLauncher>,
    exit: Arc<dyn ExitAction>,
}

impl CommandDispatcher {
    pub fn new(
        state: Arc<AppState>,
        surface: Arc<dyn Surface>,
        tick_loop: Arc<dyn TickLauncher>,
        exit: Arc<dyn ExitAction>,
    ) -> Self {
        Self {
            state,
            surface,
            tick_loop,
            exit,
        }
    }

    /// Handle one link event, returning the command it carried
    pub fn dispatch(&self, event: &LinkEvent) -> Option<Command> {
        let Some(command) = event.command() else {
            debug!("Ignoring link event {:?} on {:?}", event.kind, event.description);
            return None;
        };

        match command {
            Command::Start => self.start(),
            Command::Stop => self.stop(),
            Command::Reset => self.reset(),
            Command::Quit => self.quit(),
        }
        Some(command)
    }

    fn start(&self) {
        info!("Start command received");
        self.surface.set_always_on_top(true);
        self.surface.render(&Frame::started());
        self.surface.repaint();
        self.tick_loop.launch();
    }

    fn stop(&self) {
        info!("Stop command received");
        if let Err(e) = self.state.stop_timer() {
            error!("Failed to stop timer: {}", e);
        }
        self.surface.set_always_on_top(false);
        self.surface.render(&Frame::idle());
        self.surface.repaint();
    }

    fn reset(&self) {
        info!("Reset command received");
        if let Err(e) = self.state.reset_timer() {
            error!("Failed to reset timer: {}", e);
        }
    }

    fn quit(&self) {
        info!("Quit command received after {}", self.state.get_uptime());
        self.exit.exit();
    }
}
