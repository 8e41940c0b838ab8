//! External collaborator module
//! 
//! This module contains the capabilities the timer core drives: the rendering
//! surface, clip playback and process exit.

pub mod audio;
pub mod exit;
pub mod surface;

// Re-export main items
pub use audio::{play_clip_file, ClipPlayer, MutedPlayer, SoundPlayer};
pub use exit::{ExitAction, QuitSignal};
pub use surface::{ConsoleSurface, Surface, SurfaceMode};
