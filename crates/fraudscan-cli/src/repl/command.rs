//! REPL input parsing.

use anyhow::{Result, bail};

/// Command words, used for completion and hints as well as parsing.
pub const COMMANDS: &[&str] = &[
    "scan", "history", "open", "delete", "image", "close", "new", "retry", "show", "help", "quit",
];

/// One line of REPL input. Indices are 0-based; users type 1-based numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Scan(String),
    History,
    Open(usize),
    Delete(usize),
    Image(usize),
    Close,
    New,
    Retry,
    Show,
    Help,
    Quit,
}

impl ReplCommand {
    /// Parses a line. Blank input yields `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        let Some(word) = line.split_whitespace().next() else {
            return Ok(None);
        };
        let rest = line[word.len()..].trim();

        let command = match word.to_ascii_lowercase().as_str() {
            "scan" => {
                if rest.is_empty() {
                    bail!("Usage: scan <url>");
                }
                Self::Scan(rest.to_string())
            }
            "history" | "h" => Self::History,
            "open" => Self::Open(number(word, rest)?),
            "delete" | "rm" => Self::Delete(number(word, rest)?),
            "image" | "img" => Self::Image(number(word, rest)?),
            "close" => Self::Close,
            "new" | "reset" => Self::New,
            "retry" => Self::Retry,
            "show" => Self::Show,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ if rest.is_empty() && looks_like_url(word) => Self::Scan(word.to_string()),
            _ => bail!("Unknown command '{word}'. Type 'help' for the list."),
        };
        Ok(Some(command))
    }
}

fn looks_like_url(word: &str) -> bool {
    word.starts_with("http://") || word.starts_with("https://") || word.starts_with("www.")
}

/// Parses a 1-based list number into a 0-based index.
fn number(command: &str, arg: &str) -> Result<usize> {
    match arg.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => bail!("Usage: {command} <n>, where n is a number from the list"),
    }
}
