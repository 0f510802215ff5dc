//! Local git repository data source.
//!
//! The analysis engine operates on materialized in-memory values; this
//! module produces them from a repository on disk: recent commits for the
//! scorer and aggregator, and per-commit file-change descriptors for the
//! diff classifier.

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset};
use git2::{Delta, DiffOptions, Repository};

use crate::data::{Commit, FileChange, FileStatus};

/// Git repository wrapper.
pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// Opens the repository at the current directory.
    pub fn open() -> Result<Self> {
        let repo = Repository::discover(".").context("Not in a git repository")?;
        Ok(Self { repo })
    }

    /// Opens the repository at the given path.
    pub fn open_at<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path.as_ref()).context("Failed to open git repository")?;
        Ok(Self { repo })
    }

    /// Directory name of the working tree, used as the repository identifier.
    #[must_use]
    pub fn name(&self) -> String {
        self.repo
            .workdir()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "repository".to_string())
    }

    /// Walks up to `limit` non-merge commits from HEAD, newest first.
    pub fn recent_commits(&self, limit: usize) -> Result<Vec<Commit>> {
        let mut walker = self.repo.revwalk().context("Failed to create revwalk")?;
        walker.push_head().context("Failed to push HEAD")?;

        let mut commits = Vec::new();
        for oid in walker {
            if commits.len() >= limit {
                break;
            }
            let oid = oid.context("Failed to read commit from walker")?;
            let commit = self.repo.find_commit(oid).context("Failed to find commit")?;
            if commit.parent_count() > 1 {
                continue;
            }
            commits.push(to_commit(&commit)?);
        }
        tracing::debug!(count = commits.len(), "walked recent commits");
        Ok(commits)
    }

    /// Total number of commits reachable from HEAD.
    pub fn total_commits(&self) -> Result<usize> {
        let mut walker = self.repo.revwalk().context("Failed to create revwalk")?;
        walker.push_head().context("Failed to push HEAD")?;
        Ok(walker.count())
    }

    /// Resolves a revision spec (sha, `HEAD`, branch) to a commit.
    pub fn resolve_commit(&self, spec: &str) -> Result<Commit> {
        let obj = self
            .repo
            .revparse_single(spec)
            .with_context(|| format!("Failed to parse revision: {spec}"))?;
        let commit = obj
            .peel_to_commit()
            .context("Failed to peel object to commit")?;
        to_commit(&commit)
    }

    /// Extracts the changed-file descriptors for a commit, with patch text
    /// and line counts, rename detection enabled.
    pub fn file_changes(&self, spec: &str) -> Result<Vec<FileChange>> {
        let obj = self
            .repo
            .revparse_single(spec)
            .with_context(|| format!("Failed to parse revision: {spec}"))?;
        let commit = obj
            .peel_to_commit()
            .context("Failed to peel object to commit")?;

        let commit_tree = commit.tree().context("Failed to get commit tree")?;
        let parent_tree = if commit.parent_count() > 0 {
            Some(
                commit
                    .parent(0)
                    .context("Failed to get parent commit")?
                    .tree()
                    .context("Failed to get parent tree")?,
            )
        } else {
            None
        };

        let mut opts = DiffOptions::new();
        let mut diff = self
            .repo
            .diff_tree_to_tree(parent_tree.as_ref(), Some(&commit_tree), Some(&mut opts))
            .context("Failed to create diff")?;
        diff.find_similar(None)
            .context("Failed to run rename detection")?;

        let mut changes = Vec::new();
        for (idx, delta) in diff.deltas().enumerate() {
            let status = match delta.status() {
                Delta::Added => FileStatus::Added,
                Delta::Deleted => FileStatus::Removed,
                Delta::Renamed => FileStatus::Renamed,
                _ => FileStatus::Modified,
            };
            let Some(path) = delta.new_file().path().and_then(|p| p.to_str()) else {
                continue;
            };

            let (patch, additions, deletions) = match git2::Patch::from_diff(&diff, idx) {
                Ok(Some(mut patch)) => {
                    let (_, adds, dels) = patch
                        .line_stats()
                        .context("Failed to compute patch line stats")?;
                    let text = patch
                        .to_buf()
                        .ok()
                        .and_then(|buf| std::str::from_utf8(&buf).map(str::to_string).ok());
                    (text, Some(adds), Some(dels))
                }
                _ => (None, None, None),
            };

            changes.push(FileChange {
                filename: path.to_string(),
                status,
                patch,
                additions,
                deletions,
            });
        }
        tracing::debug!(commit = %commit.id(), files = changes.len(), "extracted file changes");
        Ok(changes)
    }
}

/// Converts a `git2` commit into the engine's value type.
fn to_commit(commit: &git2::Commit<'_>) -> Result<Commit> {
    let timestamp = commit.author().when();
    let date = DateTime::from_timestamp(timestamp.seconds(), 0)
        .context("Invalid commit timestamp")?
        .with_timezone(
            &FixedOffset::east_opt(timestamp.offset_minutes() * 60)
                .unwrap_or_else(|| FixedOffset::east_opt(0).unwrap()),
        );

    Ok(Commit {
        sha: commit.id().to_string(),
        author: commit.author().name().unwrap_or("Unknown").to_string(),
        date,
        message: commit.message().unwrap_or("").to_string(),
    })
}

/// Short form of a commit sha for display.
#[must_use]
pub fn short_sha(sha: &str) -> &str {
    if sha.len() > 7 {
        &sha[..7]
    } else {
        sha
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_sha_truncates() {
        assert_eq!(short_sha("abc1234567890"), "abc1234");
        assert_eq!(short_sha("abc12"), "abc12");
    }
}
