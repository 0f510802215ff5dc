//! `score` subcommand: grade a single commit message.

use std::io::Read;

use anyhow::{bail, Context, Result};
use clap::Args;

use crate::analysis::{score_with_rules, ScoreRules};
use crate::cli::formatting::format_analysis_text;
use crate::data::OutputFormat;

/// Grade a commit message and explain the score
#[derive(Args)]
pub struct ScoreCommand {
    /// Commit message to grade (reads stdin when omitted)
    #[arg(value_name = "MESSAGE")]
    pub message: Option<String>,

    /// Output format (text, json, yaml)
    #[arg(long, short, default_value = "text")]
    pub format: String,

    /// Apply the strict rule set (heavier penalties for missing structure)
    #[arg(long)]
    pub strict: bool,
}

impl ScoreCommand {
    /// Executes the score command
    pub fn execute(&self) -> Result<()> {
        let message = match &self.message {
            Some(message) => message.clone(),
            None => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read commit message from stdin")?;
                buf
            }
        };

        let rules = if self.strict {
            ScoreRules::strict()
        } else {
            ScoreRules::default()
        };
        let result = score_with_rules(&message, &rules);

        let format: OutputFormat = self.format.parse()?;
        match format {
            OutputFormat::Text => {
                let subject = message.lines().next().unwrap_or_default();
                print!("{}", format_analysis_text(subject, &result));
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&result)?),
            OutputFormat::Markdown | OutputFormat::Csv => {
                bail!("Format '{format}' is only available for reports")
            }
        }
        Ok(())
    }
}
