//! Shared display formatting for CLI commands.
//!
//! Pure functions only, so every renderer is unit-testable without a
//! terminal attached.

use crate::data::{AnalysisResult, CommitStatus, RepoStats, ScoredCommit};
use crate::git::short_sha;

/// Emoji icon for a commit's quality tier.
pub(crate) fn status_icon(status: CommitStatus) -> &'static str {
    match status {
        CommitStatus::Good => "\u{2705}",
        CommitStatus::Warning => "\u{26a0}\u{fe0f}",
        CommitStatus::Bad => "\u{274c}",
    }
}

/// ANSI-colored status label.
pub(crate) fn status_label(status: CommitStatus) -> &'static str {
    match status {
        CommitStatus::Good => "\x1b[32mgood\x1b[0m",
        CommitStatus::Warning => "\x1b[33mwarning\x1b[0m",
        CommitStatus::Bad => "\x1b[31mbad\x1b[0m",
    }
}

/// Renders a single analysis result as human-readable text.
pub(crate) fn format_analysis_text(subject: &str, result: &AnalysisResult) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {}/10 ({}) - \"{}\"\n",
        status_icon(result.status),
        result.score,
        status_label(result.status),
        subject
    ));
    if let Some(ty) = &result.conventional_type {
        out.push_str(&format!("   Type: {ty}\n"));
    }
    for item in &result.feedback {
        out.push_str(&format!("   - {item}\n"));
    }
    for badge in &result.achievements {
        out.push_str(&format!("   {} {} - {}\n", badge.icon, badge.name, badge.description));
    }
    if let Some(suggestion) = &result.suggestion {
        out.push_str(&format!("   Suggested: {suggestion}\n"));
    }
    out
}

/// Renders the aggregated report as human-readable text.
pub(crate) fn format_report_text(stats: &RepoStats, commits: &[ScoredCommit]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Repository: {}\n", stats.repo_name));
    out.push_str(&format!(
        "Average score: {:.1}/10 over {} analyzed commits ({} total)\n",
        stats.average_score,
        commits.len().min(crate::analysis::SAMPLE_WINDOW),
        stats.total_commits
    ));
    out.push_str(&format!(
        "Breakdown: {} good, {} warning, {} bad\n",
        stats.good_commits, stats.warning_commits, stats.bad_commits
    ));
    out.push_str(&format!("Consistency: {:.0}/100\n", stats.consistency));
    let dist = &stats.time_distribution;
    out.push_str(&format!(
        "Time of day: {} morning, {} afternoon, {} evening, {} night\n",
        dist.morning, dist.afternoon, dist.evening, dist.night
    ));
    if !stats.type_distribution.is_empty() {
        let types: Vec<String> = stats
            .type_distribution
            .iter()
            .map(|(ty, n)| format!("{ty}: {n}"))
            .collect();
        out.push_str(&format!("Types: {}\n", types.join(", ")));
    }
    out.push('\n');
    for scored in commits {
        out.push_str(&format!(
            "{} {} - \"{}\" ({}/10)\n",
            status_icon(scored.analysis.status),
            short_sha(&scored.commit.sha),
            scored.commit.subject(),
            scored.analysis.score
        ));
    }
    out
}

/// Renders the aggregated report as a markdown document.
pub(crate) fn format_report_markdown(stats: &RepoStats, commits: &[ScoredCommit]) -> String {
    let total = stats.total_commits.max(1) as f64;
    let percent = |n: usize| (n as f64 / total) * 100.0;

    let mut out = format!("# {} - Commit Analysis Report\n\n", stats.repo_name);
    out.push_str("## Summary\n\n");
    out.push_str(&format!(
        "- **Average Score**: {:.1}/10\n",
        stats.average_score
    ));
    out.push_str(&format!("- **Total Commits**: {}\n", stats.total_commits));
    out.push_str(&format!(
        "- **Good Commits**: {} ({:.1}%)\n",
        stats.good_commits,
        percent(stats.good_commits)
    ));
    out.push_str(&format!(
        "- **Warning Commits**: {} ({:.1}%)\n",
        stats.warning_commits,
        percent(stats.warning_commits)
    ));
    out.push_str(&format!(
        "- **Bad Commits**: {} ({:.1}%)\n",
        stats.bad_commits,
        percent(stats.bad_commits)
    ));
    out.push_str(&format!("- **Consistency**: {:.0}/100\n", stats.consistency));
    out.push_str(&format!(
        "- **Analyzed**: {}\n\n",
        stats.last_analyzed.to_rfc3339()
    ));

    out.push_str("## Commits\n\n");
    for (idx, scored) in commits.iter().enumerate() {
        let analysis = &scored.analysis;
        out.push_str(&format!("### {}. {}\n\n", idx + 1, scored.commit.subject()));
        out.push_str(&format!(
            "{} **Score**: {}/10 | **Status**: {}\n\n",
            status_icon(analysis.status),
            analysis.score,
            analysis.status
        ));
        out.push_str(&format!("- **Author**: {}\n", scored.commit.author));
        out.push_str(&format!(
            "- **Date**: {}\n",
            scored.commit.date.to_rfc3339()
        ));
        out.push_str(&format!("- **SHA**: `{}`\n", scored.commit.sha));
        out.push_str(&format!(
            "- **Type**: {}\n",
            analysis.conventional_type.as_deref().unwrap_or("none")
        ));
        if !analysis.feedback.is_empty() {
            out.push_str("\n**Feedback**:\n");
            for item in &analysis.feedback {
                out.push_str(&format!("- {item}\n"));
            }
        }
        out.push('\n');
    }
    out
}

/// Renders graded commits as CSV rows.
pub(crate) fn format_report_csv(commits: &[ScoredCommit]) -> String {
    let mut rows = vec!["SHA,Message,Author,Date,Score,Status,Type".to_string()];
    for scored in commits {
        rows.push(format!(
            "{},{},{},{},{},{},{}",
            scored.commit.sha,
            csv_quote(scored.commit.subject()),
            csv_quote(&scored.commit.author),
            scored.commit.date.to_rfc3339(),
            scored.analysis.score,
            scored.analysis.status,
            scored.analysis.conventional_type.as_deref().unwrap_or("none")
        ));
    }
    rows.join("\n")
}

/// Quotes a CSV field, doubling embedded quotes and flattening newlines.
fn csv_quote(field: &str) -> String {
    format!(
        "\"{}\"",
        field.replace('"', "\"\"").replace('\n', " ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{aggregate, score};
    use crate::data::Commit;
    use chrono::DateTime;

    fn scored(message: &str) -> ScoredCommit {
        ScoredCommit {
            commit: Commit {
                sha: "abc1234567890abcdef1234567890abcdef123456".to_string(),
                author: "Test User".to_string(),
                date: DateTime::parse_from_rfc3339("2024-03-01T09:15:00+00:00").unwrap(),
                message: message.to_string(),
            },
            analysis: score(message),
        }
    }

    // --- status_icon / status_label ---

    #[test]
    fn icons_cover_all_tiers() {
        assert_eq!(status_icon(CommitStatus::Good), "\u{2705}");
        assert_eq!(status_icon(CommitStatus::Warning), "\u{26a0}\u{fe0f}");
        assert_eq!(status_icon(CommitStatus::Bad), "\u{274c}");
        assert!(status_label(CommitStatus::Warning).contains("warning"));
    }

    // --- format_analysis_text ---

    #[test]
    fn analysis_text_includes_score_and_feedback() {
        let result = score("Update stuff");
        let text = format_analysis_text("Update stuff", &result);
        assert!(text.contains("/10"));
        assert!(text.contains("too vague"));
        assert!(text.contains("Suggested:"));
    }

    // --- format_report_markdown ---

    #[test]
    fn markdown_report_has_summary_and_commits() {
        let commits = vec![scored("feat: add user login"), scored("Update stuff")];
        let stats = aggregate(&commits, "acme/widgets", 2);
        let md = format_report_markdown(&stats, &commits);
        assert!(md.starts_with("# acme/widgets - Commit Analysis Report"));
        assert!(md.contains("## Summary"));
        assert!(md.contains("### 1. feat: add user login"));
        assert!(md.contains("- **Type**: feat"));
        assert!(md.contains("**Feedback**:"));
    }

    #[test]
    fn markdown_report_survives_zero_totals() {
        let stats = aggregate(&[], "acme/widgets", 0);
        let md = format_report_markdown(&stats, &[]);
        assert!(!md.contains("NaN"));
    }

    // --- format_report_csv ---

    #[test]
    fn csv_has_header_and_quoted_fields() {
        let commits = vec![scored("feat: add \"quoted\" login")];
        let csv = format_report_csv(&commits);
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "SHA,Message,Author,Date,Score,Status,Type"
        );
        assert!(lines.next().unwrap().contains("\"feat: add \"\"quoted\"\" login\""));
    }
}
