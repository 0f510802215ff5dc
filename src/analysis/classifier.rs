//! Diff classifier — turns a set of changed files into a plausible
//! conventional-commit message.
//!
//! The classifier is an ordered cascade of guard/builder rules; the first
//! rule that produces a message wins and later rules are unreachable. That
//! ordering is the contract: several patterns can match the same file set,
//! so the table below is deliberately explicit rather than nested
//! conditionals. Ambiguous mixes fall through to an honest generic summary
//! instead of a confident guess.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::data::{FileChange, FileStatus};

/// Test-path conventions (`.test.`/`.spec.` infixes, `__tests__`, `test/`).
static TEST_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(test|spec)\.|__tests__|test/").unwrap());

/// Stylesheet extensions.
static STYLE_EXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(css|scss|sass|less|styl)$").unwrap());

/// Binary and asset extensions.
static ASSET_EXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(png|jpg|jpeg|gif|svg|ico|webp|woff|woff2|ttf|eot)$").unwrap()
});

/// Documentation files: markdown, plain text, license files.
static DOC_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\.(md|txt)$|(^|/)license(\.\w+)?$)").unwrap());

/// Config- and dependency-like suffixes.
static CONFIG_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\.json|\.yml|\.yaml|\.toml|\.lock|rc|config|ignore|\.env)$").unwrap());

/// One entry in the classification cascade.
pub struct Rule {
    /// Stable rule name, for tracing and tests.
    pub name: &'static str,
    matcher: fn(&[FileChange]) -> Option<String>,
}

/// The cascade, in evaluation order. First match wins.
pub const RULES: &[Rule] = &[
    Rule {
        name: "all-documentation",
        matcher: all_documentation,
    },
    Rule {
        name: "all-configuration",
        matcher: all_configuration,
    },
    Rule {
        name: "all-stylesheets",
        matcher: all_stylesheets,
    },
    Rule {
        name: "all-tests",
        matcher: all_tests,
    },
    Rule {
        name: "all-assets",
        matcher: all_assets,
    },
    Rule {
        name: "single-file",
        matcher: single_file,
    },
    Rule {
        name: "directory-groups",
        matcher: directory_groups,
    },
    Rule {
        name: "change-counts",
        matcher: change_counts,
    },
];

/// Synthesizes a conventional-commit message from a set of changed files.
///
/// Pure and total; an empty file set yields an empty string.
#[must_use]
pub fn synthesize(files: &[FileChange]) -> String {
    if files.is_empty() {
        return String::new();
    }
    for rule in RULES {
        if let Some(message) = (rule.matcher)(files) {
            tracing::debug!(rule = rule.name, "classifier rule fired");
            return message;
        }
    }
    // The change-counts rule is total for non-empty input.
    String::new()
}

// --- path helpers ---

/// Lower-cased extension, when the filename has one.
fn extension(filename: &str) -> Option<String> {
    let basename = basename(filename);
    basename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
}

/// Final path component.
fn basename(filename: &str) -> &str {
    filename.rsplit('/').next().unwrap_or(filename)
}

/// First path component, empty for root-level files.
fn top_dir(filename: &str) -> &str {
    match filename.split_once('/') {
        Some((dir, _)) => dir,
        None => "",
    }
}

fn has_file(files: &[FileChange], pattern: &str) -> bool {
    files.iter().any(|f| f.filename.contains(pattern))
}

// --- whole-set rules ---

fn all_documentation(files: &[FileChange]) -> Option<String> {
    if !files.iter().all(|f| DOC_FILE.is_match(&f.filename)) {
        return None;
    }
    let has_readme = files
        .iter()
        .any(|f| f.filename.to_lowercase().contains("readme"));
    if has_readme {
        Some("docs: update README documentation".to_string())
    } else {
        Some("docs: update project documentation".to_string())
    }
}

fn all_configuration(files: &[FileChange]) -> Option<String> {
    if !files.iter().all(|f| CONFIG_FILE.is_match(&f.filename)) {
        return None;
    }

    // Package-manager manifests get sub-classified by patch content.
    if has_file(files, "package.json")
        || has_file(files, "yarn.lock")
        || has_file(files, "package-lock.json")
    {
        if let Some(pkg) = files.iter().find(|f| f.filename.ends_with("package.json")) {
            if let Some(patch) = &pkg.patch {
                if patch.contains("\"version\":") {
                    return Some("chore: bump version".to_string());
                }
                if patch.contains("dependencies") || patch.contains("devDependencies") {
                    return Some("chore: update dependencies".to_string());
                }
            }
        }
        return Some("chore: update project dependencies".to_string());
    }
    if has_file(files, "Cargo.toml") || has_file(files, "Cargo.lock") {
        if let Some(manifest) = files.iter().find(|f| f.filename.ends_with("Cargo.toml")) {
            if let Some(patch) = &manifest.patch {
                if patch.contains("version =") {
                    return Some("chore: bump version".to_string());
                }
                if patch.contains("[dependencies") {
                    return Some("chore: update dependencies".to_string());
                }
            }
        }
        return Some("chore: update project dependencies".to_string());
    }
    if has_file(files, "tsconfig") {
        return Some("chore: update TypeScript configuration".to_string());
    }
    if has_file(files, "eslint") || has_file(files, "prettier") {
        return Some("chore: update linting configuration".to_string());
    }
    if has_file(files, "vite") || has_file(files, "webpack") || has_file(files, "rollup") {
        return Some("chore: update build configuration".to_string());
    }
    if has_file(files, ".env") {
        return Some("chore: update environment configuration".to_string());
    }
    Some("chore: update configuration files".to_string())
}

fn all_stylesheets(files: &[FileChange]) -> Option<String> {
    if files.iter().all(|f| STYLE_EXT.is_match(&f.filename)) {
        Some("style: update visual styles".to_string())
    } else {
        None
    }
}

fn all_tests(files: &[FileChange]) -> Option<String> {
    if files.iter().all(|f| TEST_PATH.is_match(&f.filename)) {
        Some("test: update test suite".to_string())
    } else {
        None
    }
}

fn all_assets(files: &[FileChange]) -> Option<String> {
    if files.iter().all(|f| ASSET_EXT.is_match(&f.filename)) {
        Some("chore: update static assets".to_string())
    } else {
        None
    }
}

// --- single-file rule ---

fn single_file(files: &[FileChange]) -> Option<String> {
    let [file] = files else { return None };
    let name = basename(&file.filename);
    let ext = extension(&file.filename).unwrap_or_default();
    let dir = top_dir(&file.filename);

    // UI component files: a capitalized .tsx/.jsx basename.
    if (ext == "tsx" || ext == "jsx") && name.starts_with(|c: char| c.is_ascii_uppercase()) {
        let component = name.split('.').next().unwrap_or(name);
        match file.status {
            FileStatus::Added => return Some(format!("feat: add {component} component")),
            FileStatus::Removed => return Some(format!("refactor: remove {component} component")),
            _ => {}
        }
        if let Some(patch) = &file.patch {
            if patch.contains("useEffect") {
                return Some(format!("fix: update side effects in {component}"));
            }
            if patch.contains("useState") {
                return Some(format!("feat: add state management to {component}"));
            }
            if patch.contains("interface") || patch.contains("type ") {
                return Some(format!("refactor: update types for {component}"));
            }
        }
        return Some(format!("feat: update {component} component"));
    }

    // Hook naming convention.
    if name.starts_with("use") && (ext == "ts" || ext == "js") {
        let hook = name.split('.').next().unwrap_or(name);
        return Some(format!("feat: update {hook} hook"));
    }

    // Service and API conventions.
    if dir == "services" || dir == "api" || name.contains("Service") || name.contains("API") {
        return Some("feat: update API integration logic".to_string());
    }

    // Utility directories.
    if dir == "utils" || dir == "lib" || dir == "helpers" {
        return Some("refactor: update utility functions".to_string());
    }

    // Type declarations.
    if dir == "types" || file.filename.ends_with(".d.ts") {
        return Some("refactor: update type definitions".to_string());
    }

    // Change-status-driven fallback.
    Some(match file.status {
        FileStatus::Added => format!("feat: add {name}"),
        FileStatus::Removed => format!("refactor: remove {name}"),
        FileStatus::Renamed => format!("refactor: rename {name}"),
        FileStatus::Modified => format!("fix: update {name}"),
    })
}

// --- multi-file rules ---

fn directory_groups(files: &[FileChange]) -> Option<String> {
    let dirs: BTreeSet<&str> = files
        .iter()
        .map(|f| top_dir(&f.filename))
        .filter(|d| !d.is_empty() && *d != ".")
        .collect();

    let has_components = has_file(files, "components/");
    let has_styles = files.iter().any(|f| STYLE_EXT.is_match(&f.filename));
    if has_components && has_styles && files.len() <= 4 {
        let component = files
            .iter()
            .find(|f| f.filename.contains("components/"))
            .map(|f| basename(&f.filename).split('.').next().unwrap_or("UI"))
            .unwrap_or("UI");
        return Some(format!("feat: style and update {component} component"));
    }

    let has_tests = files
        .iter()
        .any(|f| f.filename.contains("test") || f.filename.contains("spec"));
    if has_components && has_tests {
        return Some("feat: update component and tests".to_string());
    }

    const PURE_REFACTOR_DIRS: &[&str] = &["utils", "types", "lib", "constants"];
    if !dirs.is_empty() && dirs.iter().all(|d| PURE_REFACTOR_DIRS.contains(d)) {
        return Some("refactor: cleanup project utilities and types".to_string());
    }

    if dirs.contains("components") && dirs.contains("services") {
        return Some("feat: implement new feature with API integration".to_string());
    }

    None
}

fn change_counts(files: &[FileChange]) -> Option<String> {
    let count = |status: FileStatus| files.iter().filter(|f| f.status == status).count();
    let added = count(FileStatus::Added);
    let removed = count(FileStatus::Removed);
    let modified = count(FileStatus::Modified);
    let renamed = count(FileStatus::Renamed);

    if renamed > 0 && renamed == files.len() {
        return Some(format!(
            "refactor: rename {renamed} files for better organization"
        ));
    }
    if added > modified && added > removed {
        return Some(format!("feat: add {added} new files to project structure"));
    }
    if removed > added && removed > modified {
        return Some(format!(
            "refactor: remove {removed} unused files from project"
        ));
    }
    Some(format!(
        "feat: comprehensive update to {} project files",
        files.len()
    ))
}
