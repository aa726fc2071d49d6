use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "fraudscan", version)]
#[command(about = "Scan real-estate sale listings for fraud signals", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Without a subcommand the interactive dashboard starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Config file (defaults to ~/.config/fraudscan/config.toml)
    #[arg(long, global = true, env = "FRAUDSCAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Analysis service endpoint
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// History file location
    #[arg(long, global = true)]
    pub history_file: Option<PathBuf>,

    /// Keep history in memory only
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Debug-level logging for fraudscan crates
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log to stderr instead of the log file
    #[arg(long, global = true)]
    pub log_stderr: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Scan one listing and print the verdict
    Scan {
        url: String,
        /// Print the dashboard view as JSON
        #[arg(long)]
        json: bool,
    },
    /// Inspect or edit the scan history
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum HistoryAction {
    /// List recent scans (default)
    List,
    /// Delete the entry with the given number, as shown by `list`
    Delete { number: usize },
    /// Delete every entry
    Clear,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_is_interactive() {
        let cli = Cli::try_parse_from(["fraudscan"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.global.ephemeral);
    }

    #[test]
    fn test_scan_with_global_flags() {
        let cli = Cli::try_parse_from([
            "fraudscan",
            "scan",
            "https://listing/1",
            "--json",
            "--endpoint",
            "http://10.0.0.2:5000/api/analyze",
            "--ephemeral",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Scan {
                url: "https://listing/1".to_string(),
                json: true
            })
        );
        assert_eq!(
            cli.global.endpoint.as_deref(),
            Some("http://10.0.0.2:5000/api/analyze")
        );
        assert!(cli.global.ephemeral);
    }

    #[test]
    fn test_history_actions() {
        let cli = Cli::try_parse_from(["fraudscan", "history"]).unwrap();
        assert_eq!(cli.command, Some(Commands::History { action: None }));

        let cli = Cli::try_parse_from(["fraudscan", "history", "delete", "3"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::History {
                action: Some(HistoryAction::Delete { number: 3 })
            })
        );

        assert!(Cli::try_parse_from(["fraudscan", "history", "delete", "three"]).is_err());
    }
}
