//! Aggregator — rolls many graded commits into repository-level statistics.

use chrono::{Timelike, Utc};

use crate::data::{CommitStatus, RepoStats, ScoredCommit, TimeDistribution};

/// Statistical analysis is restricted to this many commits, regardless of
/// how many the caller supplies or how large the repository really is.
pub const SAMPLE_WINDOW: usize = 50;

/// Scale factor mapping score standard deviation onto the 0–100 consistency
/// range. Fixed policy: zero variance yields 100 and spread degrades the
/// metric monotonically.
const CONSISTENCY_SCALE: f64 = 20.0;

/// Reduces a list of graded commits into [`RepoStats`].
///
/// Only the first [`SAMPLE_WINDOW`] commits enter the statistics;
/// `total_count` is carried through unmodified as the true repository-wide
/// count. An empty list produces a zero average and maximal consistency
/// rather than NaN.
#[must_use]
pub fn aggregate(commits: &[ScoredCommit], repo_name: &str, total_count: usize) -> RepoStats {
    let window = &commits[..commits.len().min(SAMPLE_WINDOW)];

    let mut good_commits = 0;
    let mut warning_commits = 0;
    let mut bad_commits = 0;
    let mut time_distribution = TimeDistribution::default();
    let mut type_distribution = std::collections::BTreeMap::new();
    let mut achievements = Vec::new();

    for scored in window {
        match scored.analysis.status {
            CommitStatus::Good => good_commits += 1,
            CommitStatus::Warning => warning_commits += 1,
            CommitStatus::Bad => bad_commits += 1,
        }
        time_distribution.record(scored.commit.date.hour());
        let type_key = scored
            .analysis
            .conventional_type
            .as_deref()
            .unwrap_or("unknown");
        *type_distribution.entry(type_key.to_string()).or_insert(0) += 1;
        achievements.extend(scored.analysis.achievements.iter().cloned());
    }

    let average_score = if window.is_empty() {
        0.0
    } else {
        window.iter().map(|c| f64::from(c.analysis.score)).sum::<f64>() / window.len() as f64
    };

    RepoStats {
        repo_name: repo_name.to_string(),
        average_score,
        total_commits: total_count,
        good_commits,
        warning_commits,
        bad_commits,
        last_analyzed: Utc::now(),
        time_distribution,
        type_distribution,
        consistency: consistency_score(window, average_score),
        achievements,
        tags: Vec::new(),
        score_history: Vec::new(),
    }
}

/// Maps the population variance of the window's scores onto a 0–100 scale:
/// `max(0, 100 - sqrt(variance) * 20)`. Empty and singleton windows have
/// zero variance and are defined as maximally consistent.
fn consistency_score(window: &[ScoredCommit], mean: f64) -> f64 {
    if window.is_empty() {
        return 100.0;
    }
    let variance = window
        .iter()
        .map(|c| {
            let delta = f64::from(c.analysis.score) - mean;
            delta * delta
        })
        .sum::<f64>()
        / window.len() as f64;
    (100.0 - variance.sqrt() * CONSISTENCY_SCALE).max(0.0)
}
