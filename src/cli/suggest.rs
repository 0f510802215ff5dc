//! `suggest` subcommand: synthesize a commit message from file changes.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::analysis::synthesize;
use crate::data::FileChange;
use crate::git::GitRepository;

/// Suggest a commit message from a commit's file changes
#[derive(Args)]
pub struct SuggestCommand {
    /// Commit to describe (any revision git understands)
    #[arg(value_name = "COMMIT", default_value = "HEAD")]
    pub commit: String,

    /// Path to the repository (defaults to the current directory)
    #[arg(long)]
    pub repo: Option<PathBuf>,

    /// Read file changes from a JSON file instead of git
    #[arg(long, value_name = "FILE")]
    pub files: Option<PathBuf>,
}

impl SuggestCommand {
    /// Executes the suggest command
    pub fn execute(&self) -> Result<()> {
        let changes = match &self.files {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                serde_json::from_str::<Vec<FileChange>>(&raw)
                    .with_context(|| format!("Failed to parse file changes from {}", path.display()))?
            }
            None => {
                let repo = match &self.repo {
                    Some(path) => GitRepository::open_at(path)?,
                    None => GitRepository::open()?,
                };
                repo.file_changes(&self.commit)?
            }
        };

        println!("{}", synthesize(&changes));
        Ok(())
    }
}
