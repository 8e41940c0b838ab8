//! Countdown refresh loop

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::{
    runtime::Handle,
    task::JoinHandle,
    time::{interval, MissedTickBehavior},
};
use tracing::{debug, error, info, warn};

use crate::{
    commands::TickLauncher,
    services::{SoundPlayer, Surface},
    state::{AppState, TickPoll},
};

/// How often the loop polls the timer for a new caption
pub const TICK_INTERVAL: Duration = Duration::from_millis(10);

/// Background task that redraws the widget whenever the caption of `session` changes
pub async fn tick_loop_task(
    state: Arc<AppState>,
    surface: Arc<dyn Surface>,
    player: Arc<dyn SoundPlayer>,
    session: u64,
) {
    info!("Starting tick loop for session {}", session);

    let mut ticker = interval(TICK_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;

        match state.poll_tick(session) {
            Ok(TickPoll::Finished) => break,
            Ok(TickPoll::Unchanged) => {}
            Ok(TickPoll::Changed(outcome)) => {
                debug!("Caption changed to {}", outcome.frame.caption);
                if let Some(clip) = outcome.clip {
                    player.play(clip);
                }
                surface.render(&outcome.frame);
                surface.repaint();
            }
            Err(e) => {
                // A poisoned engine never recovers
                error!("Failed to advance timer: {}", e);
                break;
            }
        }
    }

    info!("Tick loop for session {} finished", session);
}

/// Starts the timer and spawns `tick_loop_task` on the current runtime when Start is clicked
pub struct TickLoop {
    state: Arc<AppState>,
    surface: Arc<dyn Surface>,
    player: Arc<dyn SoundPlayer>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl TickLoop {
    pub fn new(
        state: Arc<AppState>,
        surface: Arc<dyn Surface>,
        player: Arc<dyn SoundPlayer>,
    ) -> Self {
        Self {
            state,
            surface,
            player,
            handle: Mutex::new(None),
        }
    }

    /// Join handle of the most recently launched loop
    #[cfg(test)]
    pub fn take_handle(&self) -> Option<JoinHandle<()>> {
        self.handle.lock().ok().and_then(|mut handle| handle.take())
    }
}

impl TickLauncher for TickLoop {
    fn launch(&self) {
        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                error!("Cannot start tick loop without a runtime: {}", e);
                return;
            }
        };

        // The engine starts before this returns, so a Stop or Reset handled
        // next always lands on the new session
        let session = match self.state.start_timer() {
            Ok(session) => session,
            Err(e) => {
                error!("Failed to start timer: {}", e);
                return;
            }
        };

        let task = runtime.spawn(tick_loop_task(
            Arc::clone(&self.state),
            Arc::clone(&self.surface),
            Arc::clone(&self.player),
            session,
        ));

        match self.handle.lock() {
            // A replaced loop notices the newer session and exits on its own
            Ok(mut handle) => *handle = Some(task),
            Err(e) => warn!("Failed to keep tick loop handle: {}", e),
        }
    }
}
