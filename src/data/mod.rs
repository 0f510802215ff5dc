//! Shared value types exchanged between the analysis engine, the git data
//! source and the CLI.
//!
//! Everything in here is a plain value: created per call, immutable once
//! returned, serializable with serde. The engine holds no state between
//! calls, so these types carry the entire result of each operation.

use std::fmt;

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// Number of points a flawless message scores.
pub const PERFECT_SCORE: u8 = 10;
/// Minimum score for a commit to be rated [`CommitStatus::Good`].
pub const GOOD_THRESHOLD: u8 = 8;
/// Minimum score for a commit to be rated [`CommitStatus::Warning`].
pub const WARNING_THRESHOLD: u8 = 5;

/// Quality tier derived from a commit's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitStatus {
    /// Score of 8 or above.
    Good,
    /// Score between 5 and 7.
    Warning,
    /// Score below 5.
    Bad,
}

impl CommitStatus {
    /// Classifies a clamped score into its tier using the fixed thresholds.
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        if score >= GOOD_THRESHOLD {
            CommitStatus::Good
        } else if score >= WARNING_THRESHOLD {
            CommitStatus::Warning
        } else {
            CommitStatus::Bad
        }
    }
}

impl fmt::Display for CommitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommitStatus::Good => write!(f, "good"),
            CommitStatus::Warning => write!(f, "warning"),
            CommitStatus::Bad => write!(f, "bad"),
        }
    }
}

/// Stable identifier for a badge in the achievement catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementId {
    /// Subject carries a recognized conventional type prefix.
    Conventional,
    /// Message references an issue or ticket.
    Linked,
    /// Message has a non-empty body beyond the subject.
    Storyteller,
    /// High-scoring sentence-style subject without a type prefix.
    Professional,
    /// Final clamped score of 10.
    Perfectionist,
}

/// A gamification badge unlocked by a single message.
///
/// Each scoring call reports badges independently; deduplication across many
/// commits (for a leaderboard, say) is the caller's business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    /// Stable identifier, idempotent under caller-side deduplication.
    pub id: AchievementId,
    /// Display name.
    pub name: String,
    /// Short description of what earned the badge.
    pub description: String,
    /// Display icon.
    pub icon: String,
}

impl Achievement {
    /// Looks up the catalog entry for a badge id.
    #[must_use]
    pub fn unlock(id: AchievementId) -> Self {
        let (name, description, icon) = match id {
            AchievementId::Conventional => (
                "Convention Follower",
                "Follows Conventional Commits standard",
                "\u{1f4cb}",
            ),
            AchievementId::Linked => {
                ("Issue Linker", "References an issue or ticket", "\u{1f517}")
            }
            AchievementId::Storyteller => {
                ("Storyteller", "Provides detailed context", "\u{1f4d6}")
            }
            AchievementId::Professional => (
                "Professional Style",
                "Clean, imperative, and concise.",
                "\u{1f454}",
            ),
            AchievementId::Perfectionist => {
                ("Perfectionist", "Flawless commit message", "\u{1f31f}")
            }
        };
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// Boolean breakdown of the five atomic scoring rules, for UI display.
///
/// Kept consistent with the feedback list: a `false` here always has a
/// matching feedback entry (fatal short-circuits report all `false`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleChecklist {
    /// Subject starts with a recognized conventional type.
    pub typed: bool,
    /// Subject length is within the 10–72 character window.
    pub concise: bool,
    /// Subject is free of vague filler words.
    pub specific: bool,
    /// Subject starts with an imperative verb.
    pub imperative: bool,
    /// Subject has no trailing period.
    pub clean_formatting: bool,
}

impl RuleChecklist {
    /// Checklist for messages that failed a fatal check before any rule ran.
    #[must_use]
    pub fn all_failed() -> Self {
        Self {
            typed: false,
            concise: false,
            specific: false,
            imperative: false,
            clean_formatting: false,
        }
    }

    /// Starting state before any rule has subtracted.
    #[must_use]
    pub fn all_passed() -> Self {
        Self {
            typed: true,
            concise: true,
            specific: true,
            imperative: true,
            clean_formatting: true,
        }
    }
}

/// Result of grading a single commit message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Final score, clamped to [0, 10].
    pub score: u8,
    /// Diagnostic strings in rule-evaluation order
    /// (type, length, vagueness, mood, formatting). Empty means no issues.
    pub feedback: Vec<String>,
    /// Quality tier derived from the score.
    pub status: CommitStatus,
    /// Recognized conventional type token, when the subject carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conventional_type: Option<String>,
    /// Badges unlocked by this message.
    pub achievements: Vec<Achievement>,
    /// Rewritten `type: imperative-subject` line; absent when it would be
    /// identical to the original subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Per-rule pass/fail breakdown.
    pub checklist: RuleChecklist,
}

/// A raw commit as supplied by a data source, before grading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commit {
    /// Full SHA-1 hash.
    pub sha: String,
    /// Author name.
    pub author: String,
    /// Author timestamp, in the author's local offset.
    pub date: DateTime<FixedOffset>,
    /// Full commit message (subject plus optional body).
    pub message: String,
}

impl Commit {
    /// First line of the commit message.
    #[must_use]
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}

/// A commit paired with its grading result, ready for aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCommit {
    /// The underlying commit.
    #[serde(flatten)]
    pub commit: Commit,
    /// The scorer's verdict for this commit's message.
    pub analysis: AnalysisResult,
}

/// Change status of a single file within a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    /// File was created.
    Added,
    /// File content changed.
    Modified,
    /// File was deleted.
    Removed,
    /// File was moved or renamed.
    Renamed,
}

/// One changed file within a commit, input to the diff classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileChange {
    /// Path relative to the repository root.
    pub filename: String,
    /// Change status.
    pub status: FileStatus,
    /// Unified-diff patch text for this file, when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<String>,
    /// Lines added, when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additions: Option<usize>,
    /// Lines removed, when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletions: Option<usize>,
}

impl FileChange {
    /// Convenience constructor without patch or line counts.
    #[must_use]
    pub fn new(filename: impl Into<String>, status: FileStatus) -> Self {
        Self {
            filename: filename.into(),
            status,
            patch: None,
            additions: None,
            deletions: None,
        }
    }
}

/// Commit counts bucketed by local time of day.
///
/// Bucket boundaries are fixed: morning [6, 12), afternoon [12, 18),
/// evening [18, 24), night [0, 6).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeDistribution {
    /// Commits authored between 06:00 and 11:59.
    pub morning: usize,
    /// Commits authored between 12:00 and 17:59.
    pub afternoon: usize,
    /// Commits authored between 18:00 and 23:59.
    pub evening: usize,
    /// Commits authored between 00:00 and 05:59.
    pub night: usize,
}

impl TimeDistribution {
    /// Records one commit authored at the given local hour.
    pub fn record(&mut self, hour: u32) {
        match hour {
            6..=11 => self.morning += 1,
            12..=17 => self.afternoon += 1,
            18..=23 => self.evening += 1,
            _ => self.night += 1,
        }
    }
}

/// Repository-level statistics rolled up from many graded commits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoStats {
    /// Repository identifier (owner/name or directory name).
    pub repo_name: String,
    /// Mean score over the sampled window.
    pub average_score: f64,
    /// True repository-wide commit count; may exceed the sampled window.
    pub total_commits: usize,
    /// Commits rated good within the window.
    pub good_commits: usize,
    /// Commits rated warning within the window.
    pub warning_commits: usize,
    /// Commits rated bad within the window.
    pub bad_commits: usize,
    /// When this aggregation ran.
    pub last_analyzed: DateTime<Utc>,
    /// Commit counts by local time of day.
    pub time_distribution: TimeDistribution,
    /// Commit counts by conventional type, untyped commits under `unknown`.
    pub type_distribution: std::collections::BTreeMap<String, usize>,
    /// Variance-derived consistency metric, 0–100.
    pub consistency: f64,
    /// Every badge unlocked within the window, duplicates preserved.
    pub achievements: Vec<Achievement>,
    /// Free-form labels owned by the caller; carried through untouched.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Historical average-score samples owned by the caller.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub score_history: Vec<f64>,
}

/// Output format for CLI rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON.
    Json,
    /// YAML.
    Yaml,
    /// Markdown report.
    Markdown,
    /// CSV rows.
    Csv,
}

/// Error raised when an output format string is not recognized.
#[derive(Debug, thiserror::Error)]
#[error("unknown output format {0:?} (expected text, json, yaml, markdown or csv)")]
pub struct ParseFormatError(pub String);

impl std::str::FromStr for OutputFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(ParseFormatError(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}
