//! Console front end: turns typed lines into link events

use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, warn};

use crate::commands::{Command, CommandDispatcher, LinkEvent};

/// What a typed line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleInput {
    Link(LinkEvent),
    Help,
    Empty,
}

/// Parse one typed line; bare command words are treated as their `command://` link
pub fn parse_line(line: &str) -> ConsoleInput {
    let word = line.trim().to_lowercase();
    match word.as_str() {
        "" => ConsoleInput::Empty,
        "help" | "?" => ConsoleInput::Help,
        _ if word.contains("://") => ConsoleInput::Link(LinkEvent::activated(word)),
        _ => ConsoleInput::Link(LinkEvent::activated(format!("command://{}", word))),
    }
}

pub fn help_text() -> &'static str {
    "Commands: start, stop, reset, quit"
}

/// Feed lines from `input` to the dispatcher until quit or end of input
pub async fn console_task<R>(input: R, dispatcher: Arc<CommandDispatcher>)
where
    R: AsyncBufRead + Unpin,
{
    info!("Console ready. {}", help_text());
    let mut lines = input.lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                info!("Input closed, quitting");
                dispatcher.dispatch(&LinkEvent::activated(Command::Quit.href()));
                break;
            }
            Err(e) => {
                warn!("Failed to read console input: {}", e);
                dispatcher.dispatch(&LinkEvent::activated(Command::Quit.href()));
                break;
            }
        };

        match parse_line(&line) {
            ConsoleInput::Empty => {}
            ConsoleInput::Help => println!("{}", help_text()),
            ConsoleInput::Link(event) => match dispatcher.dispatch(&event) {
                Some(Command::Quit) => break,
                Some(_) => {}
                None => debug!("No command for {:?}", line.trim()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_words_become_command_links() {
        assert_eq!(
            parse_line("  Start \n"),
            ConsoleInput::Link(LinkEvent::activated("command://start"))
        );
        assert_eq!(
            parse_line("command://reset"),
            ConsoleInput::Link(LinkEvent::activated("command://reset"))
        );
    }

    #[test]
    fn blank_and_help_lines() {
        assert_eq!(parse_line("   "), ConsoleInput::Empty);
        assert_eq!(parse_line("help"), ConsoleInput::Help);
        assert_eq!(parse_line("?"), ConsoleInput::Help);
    }

    #[test]
    fn unknown_words_still_reach_the_dispatcher() {
        let ConsoleInput::Link(event) = parse_line("pause") else {
            panic!("expected a link event");
        };
        assert_eq!(event.command(), None);
    }
}
