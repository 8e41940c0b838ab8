//! Babysteps Timer - a minimalist countdown timer for pairing and TDD
//!
//! This is the main entry point for the babysteps-timer application.

use std::sync::Arc;
use tokio::io::{stdin, BufReader};
use tracing::info;

use babysteps_timer::{
    config::Config,
    console::console_task,
    commands::CommandDispatcher,
    services::{ClipPlayer, ConsoleSurface, MutedPlayer, QuitSignal, SoundPlayer, Surface},
    state::{AppState, Frame},
    tasks::TickLoop,
    utils::{shutdown_signal, SystemClock},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so they don't interleave with the widget on stdout
    tracing_subscriber::fmt()
        .with_env_filter(format!("babysteps_timer={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting babysteps-timer v1.0.0");
    info!("Configuration: sounds_dir={}, player={}, mute={}, markup={}",
          config.sounds_dir.display(), config.player, config.mute, config.markup);

    let state = Arc::new(AppState::new(Arc::new(SystemClock)));
    let surface: Arc<dyn Surface> = Arc::new(ConsoleSurface::new(config.surface_mode()));
    let player: Arc<dyn SoundPlayer> = if config.mute {
        Arc::new(MutedPlayer)
    } else {
        Arc::new(ClipPlayer::new(config.sounds_dir.clone(), config.player.clone()))
    };
    let quit = Arc::new(QuitSignal::new());
    let mut quit_rx = quit.subscribe();

    let tick_loop = Arc::new(TickLoop::new(Arc::clone(&state), Arc::clone(&surface), player));
    let dispatcher = Arc::new(CommandDispatcher::new(
        Arc::clone(&state),
        Arc::clone(&surface),
        tick_loop,
        quit,
    ));

    // First paint: idle widget with Start and Quit
    surface.render(&Frame::idle());
    surface.repaint();

    let console = tokio::spawn(console_task(BufReader::new(stdin()), dispatcher));

    tokio::select! {
        _ = quit_rx.wait_for(|quit| *quit) => {
            info!("Quit requested, shutting down");
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    // Stdin reads can't be cancelled, so don't wait for the console task
    console.abort();
    if let Err(e) = state.stop_timer() {
        tracing::error!("Failed to stop timer: {}", e);
    }

    info!("Widget closed after {}", state.get_uptime());
    std::process::exit(0);
}
