//! Process exit capability

use tokio::sync::watch;
use tracing::info;

/// Ends the widget
pub trait ExitAction: Send + Sync {
    fn exit(&self);
}

/// Exit capability that notifies `main`, which then shuts down with code 0
#[derive(Debug)]
pub struct QuitSignal {
    tx: watch::Sender<bool>,
}

impl QuitSignal {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx }
    }

    /// Receiver that observes `true` once quit was requested
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }
}

impl Default for QuitSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitAction for QuitSignal {
    fn exit(&self) {
        info!("Quit requested");
        // send_replace works even when nobody is subscribed yet
        self.tx.send_replace(true);
    }
}
