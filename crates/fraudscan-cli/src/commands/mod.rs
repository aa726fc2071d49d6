//! One-shot subcommands.

pub mod history;
pub mod scan;
