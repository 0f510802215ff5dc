//! Message scorer — grades one commit message against professional writing
//! conventions.
//!
//! The scorer is a pure, total function: any input, however malformed,
//! produces a well-formed [`AnalysisResult`] rather than an error. Rules run
//! in a fixed order (fatal short-circuits, type, length, vagueness, mood,
//! bonuses, formatting) and the feedback list reproduces that order so
//! callers can match diagnostics by position.

use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::lexicon;
use crate::data::{
    Achievement, AchievementId, AnalysisResult, CommitStatus, RuleChecklist, GOOD_THRESHOLD,
    PERFECT_SCORE,
};

/// Leading `type(scope)?:` pattern of a conventional commit subject.
static TYPE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z]+)(\(.*\))?:").unwrap());

/// "Professional sentence" style: a capitalized word followed by more text.
static SENTENCE_STYLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z][a-z]+ .+").unwrap());

/// Issue or ticket reference (`#123`, `PROJ-123`).
static ISSUE_REF: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#\d+|[A-Z]+-\d+").unwrap());

/// Issue-closing idiom (`fixes #123`, `fixed proj-123`) that exempts the
/// subject from the vague-word penalty.
static ISSUE_FIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)fix(es|ed)?\s+(#\d+|[a-z]+-\d+)").unwrap());

/// Named constants parameterizing the scoring rule set.
///
/// The defaults are the richer, achievement-aware rule set; [`ScoreRules::strict`]
/// reproduces the stricter single-pass variant. Behavior differences between
/// the two live entirely in these constants — the rule chain itself is shared.
#[derive(Debug, Clone)]
pub struct ScoreRules {
    /// Fixed score assigned to WIP subjects.
    pub wip_score: u8,
    /// Fixed score assigned to subjects under [`Self::meaningful_length`].
    pub stub_score: u8,
    /// Subjects shorter than this many characters are fatally short.
    pub meaningful_length: usize,
    /// Penalty for an unrecognized type token.
    pub unknown_type_penalty: i32,
    /// Penalty for a typeless subject in professional-sentence style.
    pub sentence_style_penalty: i32,
    /// Penalty for a subject that is neither typed nor sentence-styled.
    pub missing_type_penalty: i32,
    /// Penalty for a short subject with too few words.
    pub short_penalty: i32,
    /// Penalty for a subject beyond the conventional 72-character width.
    pub long_penalty: i32,
    /// Penalty for an unmitigated vague word.
    pub vague_penalty: i32,
    /// Penalty for a non-imperative opening word.
    pub mood_penalty: i32,
    /// Bonus for referencing an issue or ticket.
    pub issue_ref_bonus: i32,
    /// Bonus for a non-empty body beyond the subject.
    pub body_bonus: i32,
    /// Penalty for a trailing period; zero makes it feedback-only.
    pub trailing_period_penalty: i32,
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self {
            wip_score: 3,
            stub_score: 2,
            meaningful_length: 5,
            unknown_type_penalty: 1,
            sentence_style_penalty: 1,
            missing_type_penalty: 2,
            short_penalty: 2,
            long_penalty: 2,
            vague_penalty: 2,
            mood_penalty: 1,
            issue_ref_bonus: 1,
            body_bonus: 1,
            trailing_period_penalty: 0,
        }
    }
}

impl ScoreRules {
    /// The stricter variant: unknown or missing types cost two points and a
    /// trailing period costs one.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            unknown_type_penalty: 2,
            sentence_style_penalty: 2,
            missing_type_penalty: 2,
            trailing_period_penalty: 1,
            ..Self::default()
        }
    }
}

/// Upper bound for a subject line, per convention.
const MAX_SUBJECT_WIDTH: usize = 72;
/// Subjects under this many characters need at least three words.
const MIN_SUBJECT_WIDTH: usize = 10;

/// Grades a commit message with the default rule set.
#[must_use]
pub fn score(message: &str) -> AnalysisResult {
    score_with_rules(message, &ScoreRules::default())
}

/// Grades a commit message with an explicit rule set.
///
/// Never fails: malformed input degrades to a low score with explanatory
/// feedback.
#[must_use]
pub fn score_with_rules(message: &str, rules: &ScoreRules) -> AnalysisResult {
    let trimmed = message.trim();
    let subject = trimmed.lines().next().unwrap_or("");
    let lower_subject = subject.to_lowercase();
    let subject_len = subject.chars().count();
    let has_body = trimmed.lines().skip(1).any(|l| !l.trim().is_empty());

    // Fatal short-circuits bypass the rule chain entirely, including
    // achievements and suggestion synthesis.
    if lower_subject.contains("wip") || lower_subject.contains("work in progress") {
        return fatal(
            rules.wip_score,
            "'WIP' commits should not be pushed to shared branches. Finish the work or squash commits.",
        );
    }
    if subject_len == 0 {
        return fatal(0, "Message is empty.");
    }
    if subject_len < rules.meaningful_length {
        return fatal(rules.stub_score, "Message is too short to be meaningful.");
    }

    let mut score: i32 = PERFECT_SCORE as i32;
    let mut feedback: Vec<String> = Vec::new();
    let mut achievements: Vec<Achievement> = Vec::new();
    let mut checklist = RuleChecklist::all_passed();
    let mut conventional_type: Option<String> = None;

    // 1. Type detection.
    let typed_prefix = TYPE_PREFIX.captures(subject);
    let is_sentence_style = SENTENCE_STYLE.is_match(subject);
    if let Some(caps) = &typed_prefix {
        let token = &caps[1];
        if lexicon::is_conventional_type(token) {
            conventional_type = Some(token.to_string());
            achievements.push(Achievement::unlock(AchievementId::Conventional));
        } else {
            score -= rules.unknown_type_penalty;
            checklist.typed = false;
            feedback.push(format!(
                "\"{token}\" is not a standard type. Consider: feat, fix, docs, style, refactor..."
            ));
        }
    } else {
        checklist.typed = false;
        if is_sentence_style {
            score -= rules.sentence_style_penalty;
            feedback.push(
                "Tip: Adding a type (e.g., 'feat:', 'fix:') helps with automated changelogs."
                    .to_string(),
            );
        } else {
            score -= rules.missing_type_penalty;
            feedback.push(
                "Start with a capitalized verb or use a conventional type (e.g., 'Fix...', 'feat: ...')."
                    .to_string(),
            );
        }
    }

    // 2. Length. Short beats long: the two checks are mutually exclusive.
    let short_subject = subject_len < MIN_SUBJECT_WIDTH;
    if short_subject {
        if subject.split_whitespace().count() < 3 {
            score -= rules.short_penalty;
            checklist.concise = false;
            feedback.push("Too short. Add a bit more context.".to_string());
        }
    } else if subject_len > MAX_SUBJECT_WIDTH {
        score -= rules.long_penalty;
        checklist.concise = false;
        feedback.push("Subject line exceeds 72 characters. Keep it concise.".to_string());
    }

    // 3. Vague words, exempting the issue-closing idiom.
    let vague_word = lexicon::find_vague_word(&lower_subject);
    let vague_hit = match vague_word {
        Some(_) if ISSUE_FIX.is_match(subject) => false,
        Some(_) => true,
        None => false,
    };
    if vague_hit {
        let word = vague_word.unwrap_or_default();
        score -= rules.vague_penalty;
        checklist.specific = false;
        feedback.push(format!(
            "\"{word}\" is too vague. Be specific about what changed."
        ));
    }

    // 4. Imperative mood over the subject body (text after any type prefix).
    // Intentionally lenient toward nouns: a word that neither matches the
    // verb list nor the normalization map costs only a generic point.
    let subject_body = match &typed_prefix {
        Some(_) => subject.splitn(2, ':').nth(1).unwrap_or("").trim(),
        None => subject,
    };
    let first_word = subject_body.split_whitespace().next().unwrap_or("");
    let lower_first_word = first_word.to_lowercase();
    if !subject_body.is_empty() {
        if lexicon::is_imperative(&lower_first_word) {
            // Accepted as-is.
        } else if let Some(mapped) = lexicon::imperative_form(&lower_first_word) {
            score -= rules.mood_penalty;
            checklist.imperative = false;
            feedback.push(format!(
                "Use \"{}\" instead of \"{first_word}\" (imperative mood).",
                capitalize(mapped)
            ));
        } else {
            score -= rules.mood_penalty;
            checklist.imperative = false;
            feedback.push(
                "Start with an imperative verb (e.g., \"Add\", \"Fix\", \"Update\").".to_string(),
            );
        }
    }

    // 5. Bonuses.
    let has_issue_ref =
        ISSUE_REF.is_match(subject) || (has_body && ISSUE_REF.is_match(trimmed));
    if has_issue_ref {
        score += rules.issue_ref_bonus;
        achievements.push(Achievement::unlock(AchievementId::Linked));
    }
    if has_body {
        score += rules.body_bonus;
        achievements.push(Achievement::unlock(AchievementId::Storyteller));
    }

    // 6. Clean free-form writing earns its own badge even without a type.
    if score >= GOOD_THRESHOLD as i32 && conventional_type.is_none() && is_sentence_style {
        achievements.push(Achievement::unlock(AchievementId::Professional));
    }

    // 7. Trailing period: feedback-only by default, penalized when the rule
    // set says so.
    if subject.ends_with('.') {
        checklist.clean_formatting = false;
        if rules.trailing_period_penalty > 0 {
            score -= rules.trailing_period_penalty;
            feedback.push("Remove trailing period.".to_string());
        } else {
            feedback.push("Tip: No trailing period needed in subject.".to_string());
        }
    }

    // 8. Clamp and classify.
    let final_score = score.clamp(0, PERFECT_SCORE as i32) as u8;
    let status = CommitStatus::from_score(final_score);
    if final_score == PERFECT_SCORE {
        achievements.push(Achievement::unlock(AchievementId::Perfectionist));
    }

    tracing::debug!(score = final_score, %status, "graded message");

    let suggestion = if final_score < PERFECT_SCORE {
        synthesize_suggestion(
            subject,
            subject_body,
            conventional_type.as_deref(),
            short_subject,
            vague_hit && !has_issue_ref,
        )
    } else {
        None
    };

    AnalysisResult {
        score: final_score,
        feedback,
        status,
        conventional_type,
        achievements,
        suggestion,
        checklist,
    }
}

/// Builds an improved `type: imperative-subject` line, or `None` when the
/// rewrite would be identical to the original subject.
fn synthesize_suggestion(
    subject: &str,
    subject_body: &str,
    conventional_type: Option<&str>,
    short_subject: bool,
    unmitigated_vague: bool,
) -> Option<String> {
    let type_to_use = conventional_type
        .or_else(|| lexicon::infer_type(subject))
        .unwrap_or("chore");

    let base = if subject_body.is_empty() {
        subject
    } else {
        subject_body
    };
    let base = base.strip_suffix('.').unwrap_or(base);

    let mut words: Vec<String> = base.split_whitespace().map(str::to_string).collect();
    if let Some(first) = words.first_mut() {
        let lower = first.to_lowercase();
        *first = match lexicon::imperative_form(&lower) {
            Some(mapped) => mapped.to_string(),
            None => lower,
        };
    }
    let mut suggestion = format!("{type_to_use}: {}", words.join(" "));

    if short_subject || unmitigated_vague {
        suggestion.push_str(" <context>");
    }

    if suggestion == subject {
        None
    } else {
        Some(suggestion)
    }
}

/// Result for a message that tripped a fatal check.
fn fatal(score: u8, reason: &str) -> AnalysisResult {
    AnalysisResult {
        score,
        feedback: vec![reason.to_string()],
        status: CommitStatus::from_score(score),
        conventional_type: None,
        achievements: Vec::new(),
        suggestion: None,
        checklist: RuleChecklist::all_failed(),
    }
}

/// Upper-cases the first letter of an ASCII word.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // --- fatal short-circuits ---

    #[test]
    fn wip_is_always_bad() {
        for message in ["WIP", "wip: stuff", "Work In Progress on login"] {
            let result = score(message);
            assert_eq!(result.score, 3, "{message:?}");
            assert_eq!(result.status, CommitStatus::Bad);
            assert_eq!(result.feedback.len(), 1);
            assert!(result.achievements.is_empty());
            assert!(result.suggestion.is_none());
        }
    }

    #[test]
    fn wip_bypasses_other_content() {
        // Body, issue ref and valid type cannot rescue a WIP subject.
        let result = score("wip feat: add login #42\n\nlong body here");
        assert_eq!(result.score, 3);
        assert!(result.achievements.is_empty());
    }

    #[test]
    fn empty_message_scores_zero() {
        let result = score("");
        assert_eq!(result.score, 0);
        assert_eq!(result.status, CommitStatus::Bad);
        assert_eq!(result.feedback, vec!["Message is empty.".to_string()]);
    }

    #[test]
    fn stub_subject_scores_two() {
        let result = score("abc");
        assert_eq!(result.score, 2);
        assert_eq!(result.status, CommitStatus::Bad);
        assert!(result.feedback[0].contains("too short"));
    }

    // --- type detection ---

    #[test]
    fn recognizes_conventional_type() {
        let result = score("feat: add user login");
        assert_eq!(result.conventional_type.as_deref(), Some("feat"));
        assert_eq!(result.score, 10);
        assert!(result.checklist.typed);
        assert!(result
            .achievements
            .iter()
            .any(|a| a.id == AchievementId::Conventional));
        assert!(result
            .achievements
            .iter()
            .any(|a| a.id == AchievementId::Perfectionist));
        assert!(result.suggestion.is_none());
    }

    #[test]
    fn scoped_type_is_recognized() {
        let result = score("fix(parser): handle empty input");
        assert_eq!(result.conventional_type.as_deref(), Some("fix"));
    }

    #[test]
    fn unknown_type_is_penalized_once() {
        let result = score("feature: add user login");
        assert!(result.conventional_type.is_none());
        assert_eq!(result.score, 9);
        assert!(result.feedback[0].contains("not a standard type"));
        assert!(!result.checklist.typed);
    }

    #[test]
    fn sentence_style_takes_small_penalty() {
        let result = score("Add user login page");
        assert_eq!(result.score, 9);
        assert!(result.feedback[0].starts_with("Tip: Adding a type"));
    }

    #[test]
    fn untyped_unsentenced_takes_larger_penalty() {
        let result = score("user login page here");
        assert_eq!(result.score, 7);
        assert!(result.feedback[0].contains("capitalized verb"));
    }

    // --- length ---

    #[test]
    fn short_subject_with_few_words_penalized() {
        // 9 chars, 2 words: short and wordless.
        let result = score("fix typos");
        assert!(result
            .feedback
            .iter()
            .any(|f| f == "Too short. Add a bit more context."));
        assert!(!result.checklist.concise);
    }

    #[test]
    fn long_subject_penalized() {
        let subject = format!("feat: {}", "a".repeat(80));
        let result = score(&subject);
        assert!(result
            .feedback
            .iter()
            .any(|f| f.contains("exceeds 72 characters")));
        assert!(!result.checklist.concise);
    }

    #[test]
    fn short_beats_long() {
        // A short subject can never also take the over-width penalty.
        let result = score("fix typos");
        assert!(!result
            .feedback
            .iter()
            .any(|f| f.contains("exceeds 72 characters")));
    }

    // --- vagueness ---

    #[test]
    fn vague_word_costs_points() {
        let with_vague = score("feat: update stuff in parser");
        let without = score("feat: update parser in module");
        assert!(with_vague.score < without.score);
        assert!(with_vague
            .feedback
            .iter()
            .any(|f| f.contains("too vague")));
        assert!(!with_vague.checklist.specific);
    }

    #[test]
    fn issue_fix_idiom_is_exempt() {
        // "fixes" is in the vague list but the issue-closing idiom mitigates.
        let result = score("Fixes #123 crash on login");
        assert!(!result.feedback.iter().any(|f| f.contains("too vague")));
        assert!(result.checklist.specific);
    }

    // --- imperative mood ---

    #[test]
    fn past_tense_suggests_mapped_verb() {
        let result = score("feat: updated user login");
        assert!(result
            .feedback
            .iter()
            .any(|f| f.contains("Use \"Update\" instead of \"updated\"")));
        assert!(!result.checklist.imperative);
    }

    #[test]
    fn nouns_get_generic_lenient_penalty() {
        let result = score("feat: login page rework");
        assert!(result
            .feedback
            .iter()
            .any(|f| f.contains("Start with an imperative verb")));
    }

    #[test]
    fn imperative_verb_accepted() {
        let result = score("feat: add login page");
        assert!(result.checklist.imperative);
        assert!(!result
            .feedback
            .iter()
            .any(|f| f.contains("imperative")));
    }

    // --- bonuses and achievements ---

    #[test]
    fn issue_reference_earns_badge() {
        let result = score("feat: add login flow for PROJ-123");
        assert!(result
            .achievements
            .iter()
            .any(|a| a.id == AchievementId::Linked));
    }

    #[test]
    fn issue_reference_in_body_counts() {
        let result = score("feat: add login page\n\nCloses #42");
        assert!(result
            .achievements
            .iter()
            .any(|a| a.id == AchievementId::Linked));
        assert!(result
            .achievements
            .iter()
            .any(|a| a.id == AchievementId::Storyteller));
    }

    #[test]
    fn professional_style_badge_without_type() {
        let result = score("Add login page with validation\n\nExplains the validation rules.");
        assert!(result
            .achievements
            .iter()
            .any(|a| a.id == AchievementId::Professional));
    }

    #[test]
    fn no_professional_badge_when_typed() {
        let result = score("feat: add user login");
        assert!(!result
            .achievements
            .iter()
            .any(|a| a.id == AchievementId::Professional));
    }

    // --- formatting ---

    #[test]
    fn trailing_period_is_feedback_only_by_default() {
        let with_period = score("feat: add user login.");
        let without = score("feat: add user login");
        assert_eq!(with_period.score, without.score);
        assert!(with_period
            .feedback
            .iter()
            .any(|f| f.contains("No trailing period")));
        assert!(!with_period.checklist.clean_formatting);
    }

    #[test]
    fn strict_rules_penalize_trailing_period() {
        let result = score_with_rules("feat: add user login.", &ScoreRules::strict());
        assert_eq!(result.score, 9);
        assert!(result.feedback.iter().any(|f| f == "Remove trailing period."));
    }

    // --- suggestion synthesis ---

    #[test]
    fn suggestion_reuses_explicit_type() {
        let result = score("feat: updated user login");
        assert_eq!(result.suggestion.as_deref(), Some("feat: update user login"));
    }

    #[test]
    fn suggestion_infers_type_from_keywords() {
        let result = score("Fixed the login bug");
        let suggestion = result.suggestion.unwrap();
        assert!(suggestion.starts_with("fix: "), "{suggestion}");
    }

    #[test]
    fn suggestion_appends_context_for_vague_subjects() {
        let result = score("Update stuff everywhere now");
        let suggestion = result.suggestion.unwrap();
        assert!(suggestion.ends_with(" <context>"), "{suggestion}");
    }

    #[test]
    fn suggestion_strips_trailing_period() {
        let result = score("feat: updated user login.");
        assert_eq!(result.suggestion.as_deref(), Some("feat: update user login"));
    }

    #[test]
    fn suggestion_never_equals_subject() {
        // Drive many imperfect messages through and make sure no suggestion
        // parrots the original subject back.
        for message in [
            "feat: updated user login",
            "Update stuff",
            "user login page here",
            "chore: update dependency pins everywhere.",
        ] {
            if let Some(suggestion) = score(message).suggestion {
                assert_ne!(suggestion, message.lines().next().unwrap());
            }
        }
    }

    #[test]
    fn perfect_score_has_no_suggestion() {
        assert!(score("feat: add user login").suggestion.is_none());
    }

    // --- status classification ---

    #[test]
    fn status_follows_fixed_thresholds() {
        let good = score("feat: add user login");
        assert_eq!(good.status, CommitStatus::Good);
        let warning = score("user login page here");
        assert_eq!(warning.status, CommitStatus::Warning);
        let bad = score("asdf");
        assert_eq!(bad.status, CommitStatus::Bad);
    }

    // --- determinism and bounds ---

    #[test]
    fn scoring_is_deterministic() {
        for message in ["feat: add login", "wip", "Update stuff.", ""] {
            assert_eq!(score(message), score(message));
        }
    }

    proptest! {
        #[test]
        fn score_is_always_in_bounds(message in "\\PC*") {
            let result = score(&message);
            prop_assert!(result.score <= 10);
        }

        #[test]
        fn score_is_referentially_transparent(message in "\\PC{0,120}") {
            prop_assert_eq!(score(&message), score(&message));
        }
    }
}
