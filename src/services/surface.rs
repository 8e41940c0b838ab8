//! Rendering surface for the widget

use std::{
    io::{self, Write},
    sync::Mutex,
};
use tracing::{debug, warn};

use crate::state::Frame;

/// Where the widget is drawn
pub trait Surface: Send + Sync {
    /// Keep the widget above other windows while the timer runs
    fn set_always_on_top(&self, on_top: bool);
    /// Replace the widget content
    fn render(&self, frame: &Frame);
    /// Make the last rendered content visible
    fn repaint(&self);
}

/// Output format of the console surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurfaceMode {
    /// One status line per frame
    #[default]
    Line,
    /// The HTML markup of the widget
    Markup,
}

/// Draws frames on a writer, stdout by default
pub struct ConsoleSurface {
    mode: SurfaceMode,
    pending: Mutex<Option<String>>,
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleSurface {
    pub fn new(mode: SurfaceMode) -> Self {
        Self::with_writer(mode, Box::new(io::stdout()))
    }

    pub fn with_writer(mode: SurfaceMode, out: Box<dyn Write + Send>) -> Self {
        Self {
            mode,
            pending: Mutex::new(None),
            out: Mutex::new(out),
        }
    }

    /// Text drawn for `frame` in this surface's mode
    pub fn format_frame(&self, frame: &Frame) -> String {
        match self.mode {
            SurfaceMode::Markup => frame.to_markup(),
            SurfaceMode::Line => format_line(frame),
        }
    }
}

/// `02:00  [neutral]  stop | reset | quit`
pub fn format_line(frame: &Frame) -> String {
    let links: Vec<String> = frame.links().iter().map(|l| l.to_lowercase()).collect();
    format!("{}  [{}]  {}", frame.caption, frame.background, links.join(" | "))
}

impl Surface for ConsoleSurface {
    fn set_always_on_top(&self, on_top: bool) {
        debug!("Always on top: {}", on_top);
    }

    fn render(&self, frame: &Frame) {
        let text = self.format_frame(frame);
        match self.pending.lock() {
            Ok(mut pending) => *pending = Some(text),
            Err(e) => warn!("Failed to lock pending frame: {}", e),
        }
    }

    fn repaint(&self) {
        let text = match self.pending.lock() {
            Ok(mut pending) => pending.take(),
            Err(e) => {
                warn!("Failed to lock pending frame: {}", e);
                return;
            }
        };
        let Some(text) = text else {
            return;
        };

        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(e) => {
                warn!("Failed to lock console output: {}", e);
                return;
            }
        };
        if let Err(e) = writeln!(out, "{}", text).and_then(|_| out.flush()) {
            warn!("Failed to draw frame: {}", e);
        }
    }
}
