use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

/// What the user asked for on stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Enter on an empty line stands in for scrolling to the bottom.
    LoadMore,
    Quit,
}

pub fn parse_line(line: &str) -> Option<InputEvent> {
    match line.trim() {
        "" | "m" | "more" => Some(InputEvent::LoadMore),
        "q" | "quit" => Some(InputEvent::Quit),
        _ => None,
    }
}

/// Forward stdin lines as input events until EOF or the receiver is gone.
/// EOF counts as a quit.
pub fn spawn_stdin_reader(tx: mpsc::Sender<InputEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if let Some(event) = parse_line(&line) {
                if tx.send(event).is_err() {
                    return;
                }
            }
        }
        let _ = tx.send(InputEvent::Quit);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_loads_more() {
        assert_eq!(parse_line(""), Some(InputEvent::LoadMore));
        assert_eq!(parse_line("  \n"), Some(InputEvent::LoadMore));
    }

    #[test]
    fn quit_words() {
        assert_eq!(parse_line("q"), Some(InputEvent::Quit));
        assert_eq!(parse_line("quit\n"), Some(InputEvent::Quit));
        assert_eq!(parse_line("whatever"), None);
    }
}
