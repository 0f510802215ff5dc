//! # commit-gauge
//!
//! A commit quality analysis toolkit written in Rust.
//!
//! ## Features
//!
//! - Grade commit messages against conventional-commit practice
//! - Suggest commit messages from a change set
//! - Aggregate quality statistics across a repository's history
//!
//! ## Quick Start
//!
//! ```rust
//! use commit_gauge::analysis::score;
//!
//! let result = score("feat: add user login");
//! assert_eq!(result.score, 10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod analysis;
pub mod cli;
pub mod data;
pub mod git;

pub use crate::cli::Cli;

/// The current version of commit-gauge.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
