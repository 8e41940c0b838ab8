//! Audio cue playback

use std::path::{Path, PathBuf};
use tokio::{process::Command, runtime::Handle};
use tracing::{debug, info, warn};

use crate::state::Clip;

/// Plays audio cues; never blocks and never reports failure to the caller
pub trait SoundPlayer: Send + Sync {
    fn play(&self, clip: Clip);
}

/// Hands clip files to an external player program on a background task
#[derive(Debug, Clone)]
pub struct ClipPlayer {
    pub sounds_dir: PathBuf,
    pub player: String,
}

impl ClipPlayer {
    pub fn new(sounds_dir: impl Into<PathBuf>, player: impl Into<String>) -> Self {
        Self {
            sounds_dir: sounds_dir.into(),
            player: player.into(),
        }
    }

    /// Full path of the file for `clip`
    pub fn clip_path(&self, clip: Clip) -> PathBuf {
        self.sounds_dir.join(clip.file_name())
    }
}

impl SoundPlayer for ClipPlayer {
    fn play(&self, clip: Clip) {
        let path = self.clip_path(clip);
        let player = self.player.clone();

        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                warn!("Cannot play {:?}: no async runtime ({})", clip, e);
                return;
            }
        };

        handle.spawn(async move {
            if let Err(e) = play_clip_file(&player, &path).await {
                warn!("Failed to play {:?}: {}", clip, e);
            }
        });
    }
}

/// Player used with `--mute`
#[derive(Debug, Clone, Copy, Default)]
pub struct MutedPlayer;

impl SoundPlayer for MutedPlayer {
    fn play(&self, clip: Clip) {
        debug!("Muted, skipping {:?}", clip);
    }
}

/// Run `player <path>` and wait for it to finish
pub async fn play_clip_file(player: &str, path: &Path) -> Result<(), String> {
    debug!("Playing {} with {}", path.display(), player);

    tokio::fs::metadata(path)
        .await
        .map_err(|e| format!("Sound clip {} unavailable: {}", path.display(), e))?;

    let output = Command::new(player)
        .arg(path)
        .output()
        .await
        .map_err(|e| format!("Failed to execute {}: {}", player, e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("{} failed: {}", player, stderr.trim()));
    }

    info!("Played {}", path.display());
    Ok(())
}
