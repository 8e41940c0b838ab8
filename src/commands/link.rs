//! Link events and the commands they carry

use std::{fmt, str::FromStr};

const COMMAND_SCHEME: &str = "command://";

/// What happened to a link in the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkEventKind {
    Entered,
    Exited,
    Activated,
}

/// A raw user action on one of the widget links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEvent {
    pub kind: LinkEventKind,
    /// Link target, e.g. `command://start`
    pub description: String,
}

impl LinkEvent {
    pub fn new(kind: LinkEventKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
        }
    }

    pub fn activated(description: impl Into<String>) -> Self {
        Self::new(LinkEventKind::Activated, description)
    }

    /// The command behind an activated link, if it names one
    pub fn command(&self) -> Option<Command> {
        if self.kind != LinkEventKind::Activated {
            return None;
        }
        self.description.parse().ok()
    }
}

/// Commands understood by the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    Reset,
    Quit,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Stop => "stop",
            Command::Reset => "reset",
            Command::Quit => "quit",
        }
    }

    /// Link target that triggers this command
    pub fn href(&self) -> String {
        format!("{}{}", COMMAND_SCHEME, self.as_str())
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = String;

    /// Only full `command://` links are accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix(COMMAND_SCHEME) {
            Some("start") => Ok(Command::Start),
            Some("stop") => Ok(Command::Stop),
            Some("reset") => Ok(Command::Reset),
            Some("quit") => Ok(Command::Quit),
            _ => Err(format!("Unknown command: {}", s)),
        }
    }
}
