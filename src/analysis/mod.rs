//! Commit quality analysis engine.
//!
//! Three pure, independent, composable operations:
//!
//! - [`scorer::score`] grades one commit message;
//! - [`classifier::synthesize`] turns a changed-file set into a message;
//! - [`aggregate::aggregate`] rolls graded commits into repository stats.
//!
//! None of them performs I/O or holds state between calls; identical input
//! always yields identical output.

pub mod aggregate;
pub mod classifier;
pub mod lexicon;
pub mod scorer;

pub use aggregate::{aggregate, SAMPLE_WINDOW};
pub use classifier::synthesize;
pub use scorer::{score, score_with_rules, ScoreRules};
