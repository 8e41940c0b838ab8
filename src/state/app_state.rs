//! Shared handle around the timer engine

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use tracing::info;

use super::{BackgroundState, TickOutcome, TimerEngine};
use crate::utils::Clock;

/// Result of one tick-loop poll
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickPoll {
    /// The timer stopped or a newer Start took over; the loop should exit
    Finished,
    /// Caption unchanged, nothing to do
    Unchanged,
    /// Caption changed, render and maybe play a clip
    Changed(TickOutcome),
}

/// Application state shared by the command dispatcher and the tick loop
pub struct AppState {
    /// Timer state machine, only reachable through `with_engine`
    engine: Mutex<TimerEngine>,
    clock: Arc<dyn Clock>,
    /// Widget metadata
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState with a stopped, neutral timer
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            engine: Mutex::new(TimerEngine::new()),
            clock,
            start_time: Instant::now(),
        }
    }

    /// Current time according to the widget clock
    pub fn now(&self) -> i64 {
        self.clock.now_millis()
    }

    /// Lock the engine and apply `f` to it
    pub fn with_engine<F, R>(&self, f: F) -> Result<R, String>
    where
        F: FnOnce(&mut TimerEngine) -> R,
    {
        let mut engine = self.engine.lock()
            .map_err(|e| format!("Failed to lock timer engine: {}", e))?;
        Ok(f(&mut engine))
    }

    /// Start a new cycle now and return its session id
    pub fn start_timer(&self) -> Result<u64, String> {
        let now = self.now();
        let session = self.with_engine(|engine| engine.start(now))?;
        info!("Timer running, session {}", session);
        Ok(session)
    }

    pub fn stop_timer(&self) -> Result<(), String> {
        self.with_engine(|engine| engine.stop())?;
        info!("Timer stopped");
        Ok(())
    }

    pub fn reset_timer(&self) -> Result<(), String> {
        let now = self.now();
        self.with_engine(|engine| engine.reset(now))?;
        info!("Cycle reset, marked as passed");
        Ok(())
    }

    /// Advance the timer on behalf of the tick loop owning `session`
    pub fn poll_tick(&self, session: u64) -> Result<TickPoll, String> {
        let now = self.now();
        self.with_engine(|engine| {
            if !engine.is_current(session) {
                return TickPoll::Finished;
            }
            match engine.tick(now) {
                Some(outcome) => TickPoll::Changed(outcome),
                None => TickPoll::Unchanged,
            }
        })
    }

    pub fn is_running(&self) -> Result<bool, String> {
        self.with_engine(|engine| engine.is_running())
    }

    pub fn background(&self) -> Result<BackgroundState, String> {
        self.with_engine(|engine| engine.background())
    }

    /// Copy of the engine for inspection
    pub fn snapshot(&self) -> Result<TimerEngine, String> {
        self.with_engine(|engine| engine.clone())
    }

    /// How long the widget has been open, as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("engine", &self.engine)
            .field("start_time", &self.start_time)
            .finish_non_exhaustive()
    }
}
