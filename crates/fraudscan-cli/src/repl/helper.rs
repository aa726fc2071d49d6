use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use super::command::COMMANDS;

/// Rustyline helper: command completion, inline hints and highlighting.
#[derive(Clone)]
pub struct ReplHelper {
    commands: Vec<&'static str>,
}

impl ReplHelper {
    pub fn new() -> Self {
        Self {
            commands: COMMANDS.to_vec(),
        }
    }

    fn matching<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        self.commands
            .iter()
            .copied()
            .filter(move |cmd| !prefix.is_empty() && cmd.starts_with(prefix))
    }

    fn is_command(&self, line: &str) -> bool {
        line.split_whitespace()
            .next()
            .is_some_and(|word| self.commands.contains(&word))
    }
}

impl Helper for ReplHelper {}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if line.contains(' ') {
            return Ok((0, vec![]));
        }

        let candidates = self
            .matching(line)
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for ReplHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if self.is_command(line) {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if line.contains(' ') {
            return None;
        }
        self.matching(line)
            .find(|cmd| cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for ReplHelper {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_prefixes() {
        let helper = ReplHelper::new();
        let found: Vec<_> = helper.matching("h").collect();
        assert_eq!(found, vec!["history", "help"]);
        assert_eq!(helper.matching("").count(), 0);
        assert_eq!(helper.matching("https://").count(), 0);
    }

    #[test]
    fn test_is_command() {
        let helper = ReplHelper::new();
        assert!(helper.is_command("open 2"));
        assert!(!helper.is_command("https://listing"));
        assert!(!helper.is_command(""));
    }
}
