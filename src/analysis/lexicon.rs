//! Static classification tables used by the scorer and the suggestion
//! synthesizer.
//!
//! Pure data, loaded once at process start, never mutated.

/// Recognized conventional commit type tokens.
pub const CONVENTIONAL_TYPES: &[&str] = &[
    "feat", "fix", "docs", "style", "refactor", "perf", "test", "build", "ci", "chore", "revert",
];

/// Verbs accepted as imperative-mood subject openers.
pub const IMPERATIVE_VERBS: &[&str] = &[
    "add", "fix", "update", "remove", "change", "refactor", "merge", "create", "delete",
    "implement", "use", "optimize", "document", "correct", "handle", "improve", "clean", "init",
    "release", "bump", "revert", "move", "rename", "allow", "ensure", "prevent", "avoid",
    "simplify", "upgrade", "downgrade", "setup", "configure", "deploy", "build", "test", "verify",
    "validate", "check", "log", "start", "stop", "finish", "show", "hide", "render", "display",
    "fetch", "get", "set", "reset",
];

/// Filler words that fail to convey what actually changed.
pub const VAGUE_WORDS: &[&str] = &[
    "stuff", "things", "changes", "minor", "fixes", "misc", "various", "bug", "code", "temp",
    "wip", "work", "later", "done", "fixed", "added",
];

/// Past-tense and gerund forms mapped to their imperative equivalent.
const VERB_MAP: &[(&str, &str)] = &[
    ("added", "add"),
    ("adding", "add"),
    ("adds", "add"),
    ("fixed", "fix"),
    ("fixing", "fix"),
    ("fixes", "fix"),
    ("updated", "update"),
    ("updating", "update"),
    ("updates", "update"),
    ("removed", "remove"),
    ("removing", "remove"),
    ("removes", "remove"),
    ("changed", "change"),
    ("changing", "change"),
    ("changes", "change"),
    ("created", "create"),
    ("creating", "create"),
    ("creates", "create"),
    ("deleted", "delete"),
    ("deleting", "delete"),
    ("deletes", "delete"),
    ("refactored", "refactor"),
    ("refactoring", "refactor"),
    ("refactors", "refactor"),
    ("merged", "merge"),
    ("merging", "merge"),
    ("merges", "merge"),
    ("improved", "improve"),
    ("improving", "improve"),
    ("improves", "improve"),
    ("corrected", "correct"),
    ("correcting", "correct"),
    ("corrects", "correct"),
    ("moved", "move"),
    ("moving", "move"),
    ("moves", "move"),
    ("renamed", "rename"),
    ("renaming", "rename"),
    ("renames", "rename"),
    ("used", "use"),
    ("using", "use"),
    ("uses", "use"),
    ("optimized", "optimize"),
    ("optimizing", "optimize"),
    ("optimizes", "optimize"),
    ("documented", "document"),
    ("documenting", "document"),
    ("documents", "document"),
    ("handled", "handle"),
    ("handling", "handle"),
    ("handles", "handle"),
    ("cleaned", "clean"),
    ("cleaning", "clean"),
    ("cleans", "clean"),
    ("initial", "init"),
    ("initialized", "init"),
    ("initializing", "init"),
    ("released", "release"),
    ("releasing", "release"),
    ("releases", "release"),
    ("bumped", "bump"),
    ("bumping", "bump"),
    ("bumps", "bump"),
    ("reverted", "revert"),
    ("reverting", "revert"),
    ("reverts", "revert"),
    ("allowed", "allow"),
    ("allowing", "allow"),
    ("allows", "allow"),
    ("ensured", "ensure"),
    ("ensuring", "ensure"),
    ("ensures", "ensure"),
    ("prevented", "prevent"),
    ("preventing", "prevent"),
    ("prevents", "prevent"),
    ("avoided", "avoid"),
    ("avoiding", "avoid"),
    ("avoids", "avoid"),
    ("simplified", "simplify"),
    ("simplifying", "simplify"),
    ("simplifies", "simplify"),
    ("upgraded", "upgrade"),
    ("upgrading", "upgrade"),
    ("upgrades", "upgrade"),
    ("downgraded", "downgrade"),
    ("downgrading", "downgrade"),
    ("downgrades", "downgrade"),
    ("configuring", "configure"),
    ("configures", "configure"),
    ("deployed", "deploy"),
    ("deploying", "deploy"),
    ("deploys", "deploy"),
    ("built", "build"),
    ("building", "build"),
    ("builds", "build"),
    ("tested", "test"),
    ("testing", "test"),
    ("tests", "test"),
    ("verified", "verify"),
    ("verifying", "verify"),
    ("verifies", "verify"),
    ("validated", "validate"),
    ("validating", "validate"),
    ("validates", "validate"),
    ("checked", "check"),
    ("checking", "check"),
    ("checks", "check"),
    ("logged", "log"),
    ("logging", "log"),
    ("logs", "log"),
    ("started", "start"),
    ("starting", "start"),
    ("starts", "start"),
    ("stopped", "stop"),
    ("stopping", "stop"),
    ("stops", "stop"),
    ("finished", "finish"),
    ("finishing", "finish"),
    ("finishes", "finish"),
    ("showed", "show"),
    ("showing", "show"),
    ("shows", "show"),
    ("hid", "hide"),
    ("hiding", "hide"),
    ("hides", "hide"),
    ("rendered", "render"),
    ("rendering", "render"),
    ("renders", "render"),
    ("displayed", "display"),
    ("displaying", "display"),
    ("displays", "display"),
    ("fetched", "fetch"),
    ("fetching", "fetch"),
    ("fetches", "fetch"),
    ("got", "get"),
    ("getting", "get"),
    ("gets", "get"),
    ("setting", "set"),
    ("resetting", "reset"),
    ("resets", "reset"),
];

/// Keyword table mapping subject text to an inferred conventional type.
/// Entries are tried in order; the first keyword hit wins.
const TYPE_KEYWORDS: &[(&str, &[&str])] = &[
    ("fix", &["fix", "bug"]),
    ("feat", &["add", "feat", "new"]),
    ("docs", &["doc"]),
    ("style", &["style", "format"]),
    ("refactor", &["refactor", "clean"]),
    ("test", &["test"]),
    ("perf", &["perf", "optimize"]),
    ("build", &["build", "dep"]),
    ("ci", &["ci"]),
];

/// Checks whether a token is one of the recognized conventional types.
#[must_use]
pub fn is_conventional_type(token: &str) -> bool {
    CONVENTIONAL_TYPES.contains(&token)
}

/// Checks whether a lower-cased word is an accepted imperative verb.
#[must_use]
pub fn is_imperative(word: &str) -> bool {
    IMPERATIVE_VERBS.contains(&word)
}

/// Maps a lower-cased past-tense or gerund form to its imperative verb.
#[must_use]
pub fn imperative_form(word: &str) -> Option<&'static str> {
    VERB_MAP
        .iter()
        .find(|(from, _)| *from == word)
        .map(|(_, to)| *to)
}

/// Finds the first vague filler word contained in a lower-cased subject.
#[must_use]
pub fn find_vague_word(lower_subject: &str) -> Option<&'static str> {
    VAGUE_WORDS
        .iter()
        .find(|w| lower_subject.contains(**w))
        .copied()
}

/// Infers a conventional type from subject text via keyword matching.
/// Returns `None` when nothing in the table matches.
#[must_use]
pub fn infer_type(subject: &str) -> Option<&'static str> {
    let lower = subject.to_lowercase();
    TYPE_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(ty, _)| *ty)
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- is_conventional_type ---

    #[test]
    fn recognizes_all_eleven_types() {
        for ty in [
            "feat", "fix", "docs", "style", "refactor", "perf", "test", "build", "ci", "chore",
            "revert",
        ] {
            assert!(is_conventional_type(ty), "{ty} should be recognized");
        }
        assert!(!is_conventional_type("feature"));
        assert!(!is_conventional_type(""));
    }

    // --- imperative_form ---

    #[test]
    fn maps_past_tense_to_imperative() {
        assert_eq!(imperative_form("added"), Some("add"));
        assert_eq!(imperative_form("fixing"), Some("fix"));
        assert_eq!(imperative_form("built"), Some("build"));
        assert_eq!(imperative_form("login"), None);
    }

    #[test]
    fn mapped_targets_are_imperative_verbs() {
        for (_, to) in super::VERB_MAP {
            assert!(is_imperative(to), "{to} missing from imperative list");
        }
    }

    // --- find_vague_word ---

    #[test]
    fn finds_vague_substring() {
        assert_eq!(find_vague_word("update stuff"), Some("stuff"));
        assert_eq!(find_vague_word("add login page"), None);
    }

    // --- infer_type ---

    #[test]
    fn infers_from_keywords() {
        assert_eq!(infer_type("Fix the login bug"), Some("fix"));
        assert_eq!(infer_type("new sidebar"), Some("feat"));
        assert_eq!(infer_type("readme tweaks for doc site"), Some("docs"));
        assert_eq!(infer_type("something else entirely"), None);
    }
}
