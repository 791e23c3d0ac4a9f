use once_cell::sync::Lazy;
use regex::Regex;

// Word characters are ASCII only; whitespace is any Unicode whitespace.
static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\s-]").expect("valid disallowed-char pattern"));
static SEPARATOR_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s_-]+").expect("valid separator pattern"));
static EDGE_HYPHENS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-+|-+$").expect("valid edge-hyphen pattern"));

/// Produce a URL-safe identifier from arbitrary text.
///
/// Normalization order matters and is fixed:
/// 1. Lowercase
/// 2. Trim surrounding whitespace
/// 3. Drop everything that is not a word character, whitespace or hyphen
/// 4. Collapse runs of whitespace, underscores and hyphens into one hyphen
/// 5. Strip hyphens at either end
///
/// The result only ever contains `a-z`, `0-9` and single inner hyphens.
/// Empty or symbol-only input yields an empty slug.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let trimmed = lowered.trim();
    let kept = DISALLOWED.replace_all(trimmed, "");
    let hyphenated = SEPARATOR_RUNS.replace_all(&kept, "-");
    EDGE_HYPHENS.replace_all(&hyphenated, "").into_owned()
}

/// True when `slug` is something `slugify` could have produced.
pub fn is_valid_slug(slug: &str) -> bool {
    if slug.is_empty() {
        return true;
    }
    slug.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
}
