//! Configuration and CLI argument handling

use std::path::PathBuf;
use clap::Parser;

use crate::services::SurfaceMode;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "babysteps-timer")]
#[command(about = "A minimalist babysteps countdown timer for pairing and TDD")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Directory holding the warning and expiry sound clips
    #[arg(long, default_value = "sounds")]
    pub sounds_dir: PathBuf,

    /// Program used to play a sound clip
    #[arg(long, default_value = "aplay")]
    pub player: String,

    /// Disable audio cues
    #[arg(long)]
    pub mute: bool,

    /// Draw the widget as HTML markup instead of a status line
    #[arg(long)]
    pub markup: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn surface_mode(&self) -> SurfaceMode {
        if self.markup { SurfaceMode::Markup } else { SurfaceMode::Line }
    }
}
