//! Visual state handed to the rendering surface

use std::fmt;

use super::timer_engine::format_caption;

/// Background tint of the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundState {
    #[default]
    Neutral,
    Passed,
    Failed,
}

impl BackgroundState {
    /// CSS color used by the markup renderer
    pub fn color(&self) -> &'static str {
        match self {
            BackgroundState::Neutral => "#ffffff",
            BackgroundState::Passed => "#ccffcc",
            BackgroundState::Failed => "#ffcccc",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BackgroundState::Neutral => "neutral",
            BackgroundState::Passed => "passed",
            BackgroundState::Failed => "failed",
        }
    }
}

impl fmt::Display for BackgroundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rendering of the widget: caption, tint and which links to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub caption: String,
    pub background: BackgroundState,
    /// Running frames show Stop and Reset, idle frames show Start
    pub running: bool,
}

impl Frame {
    pub fn new(caption: impl Into<String>, background: BackgroundState, running: bool) -> Self {
        Self {
            caption: caption.into(),
            background,
            running,
        }
    }

    /// Full cycle, neutral, with the Start link
    pub fn idle() -> Self {
        Self::new(format_caption(0), BackgroundState::Neutral, false)
    }

    /// Full cycle, neutral, with the Stop and Reset links
    pub fn started() -> Self {
        Self::new(format_caption(0), BackgroundState::Neutral, true)
    }

    /// Link labels in display order
    pub fn links(&self) -> &'static [&'static str] {
        if self.running {
            &["Stop", "Reset", "Quit"]
        } else {
            &["Start", "Quit"]
        }
    }

    /// HTML markup of the widget body
    pub fn to_markup(&self) -> String {
        let mut html = format!(
            "<html><body style=\"border: 3px solid #555555; background: {}; margin: 0; padding: 0;\">\
             <h1 style=\"text-align: center; font-size: 30px; color: #333333;\">{}</h1>\
             <div style=\"text-align: center\">",
            self.background.color(),
            self.caption
        );
        for label in self.links() {
            html.push_str(&format!(
                "<a style=\"color: #555555;\" href=\"command://{}\">{}</a> ",
                label.to_lowercase(),
                label
            ));
        }
        html.push_str("</div></body></html>");
        html
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::idle()
    }
}
