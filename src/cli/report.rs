//! `report` subcommand: aggregate quality statistics over recent commits.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::analysis::{aggregate, score_with_rules, ScoreRules, SAMPLE_WINDOW};
use crate::cli::formatting::{format_report_csv, format_report_markdown, format_report_text};
use crate::data::{OutputFormat, RepoStats, ScoredCommit};
use crate::git::GitRepository;

/// Analyze recent commits and print repository-level statistics
#[derive(Args)]
pub struct ReportCommand {
    /// Path to the repository (defaults to the current directory)
    #[arg(long)]
    pub repo: Option<PathBuf>,

    /// Maximum number of commits to analyze
    #[arg(long, short, default_value_t = SAMPLE_WINDOW)]
    pub limit: usize,

    /// Display name for the repository (defaults to the directory name)
    #[arg(long)]
    pub name: Option<String>,

    /// Output format (text, json, yaml, markdown, csv)
    #[arg(long, short, default_value = "text")]
    pub format: String,

    /// Apply the strict rule set (heavier penalties for missing structure)
    #[arg(long)]
    pub strict: bool,
}

/// Full report payload for structured output formats.
#[derive(Serialize)]
struct Report {
    stats: RepoStats,
    commits: Vec<ScoredCommit>,
}

impl ReportCommand {
    /// Executes the report command
    pub fn execute(&self) -> Result<()> {
        let repo = match &self.repo {
            Some(path) => GitRepository::open_at(path)?,
            None => GitRepository::open()?,
        };

        let rules = if self.strict {
            ScoreRules::strict()
        } else {
            ScoreRules::default()
        };

        let commits = repo.recent_commits(self.limit)?;
        let total = repo.total_commits()?;
        tracing::debug!(analyzed = commits.len(), total, "scoring commits");

        let scored: Vec<ScoredCommit> = commits
            .into_iter()
            .map(|commit| ScoredCommit {
                analysis: score_with_rules(&commit.message, &rules),
                commit,
            })
            .collect();

        let name = self.name.clone().unwrap_or_else(|| repo.name());
        let stats = aggregate(&scored, &name, total);

        let format: OutputFormat = self.format.parse()?;
        match format {
            OutputFormat::Text => print!("{}", format_report_text(&stats, &scored)),
            OutputFormat::Markdown => print!("{}", format_report_markdown(&stats, &scored)),
            OutputFormat::Csv => println!("{}", format_report_csv(&scored)),
            OutputFormat::Json => {
                let report = Report { stats, commits: scored };
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Yaml => {
                let report = Report { stats, commits: scored };
                print!("{}", serde_yaml::to_string(&report)?);
            }
        }
        Ok(())
    }
}
