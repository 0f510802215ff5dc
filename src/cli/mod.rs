//! Command-line interface definitions and dispatch.

mod formatting;
mod report;
mod score;
mod suggest;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub use report::ReportCommand;
pub use score::ScoreCommand;
pub use suggest::SuggestCommand;

/// Commit quality analysis toolkit
#[derive(Parser)]
#[command(name = "commit-gauge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand)]
pub enum Commands {
    /// Grade a commit message and explain the score
    Score(ScoreCommand),
    /// Suggest a commit message from a commit's file changes
    Suggest(SuggestCommand),
    /// Analyze recent commits and print repository-level statistics
    Report(ReportCommand),
}

impl Cli {
    /// Executes the selected command
    pub fn execute(&self) -> Result<()> {
        match &self.command {
            Commands::Score(cmd) => cmd.execute(),
            Commands::Suggest(cmd) => cmd.execute(),
            Commands::Report(cmd) => cmd.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_score_with_message() {
        let cli = Cli::try_parse_from(["commit-gauge", "score", "feat: add login"]).unwrap();
        match cli.command {
            Commands::Score(cmd) => {
                assert_eq!(cmd.message.as_deref(), Some("feat: add login"));
                assert_eq!(cmd.format, "text");
                assert!(!cmd.strict);
            }
            _ => panic!("expected score command"),
        }
    }

    #[test]
    fn cli_parses_report_flags() {
        let cli = Cli::try_parse_from([
            "commit-gauge",
            "report",
            "--limit",
            "10",
            "--format",
            "markdown",
            "--strict",
        ])
        .unwrap();
        match cli.command {
            Commands::Report(cmd) => {
                assert_eq!(cmd.limit, 10);
                assert_eq!(cmd.format, "markdown");
                assert!(cmd.strict);
            }
            _ => panic!("expected report command"),
        }
    }

    #[test]
    fn cli_rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["commit-gauge", "grade"]).is_err());
    }
}
