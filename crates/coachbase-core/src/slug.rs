//! URL-safe slug normalization.
//!
//! Slugs are informational only: they are regenerated on every snapshot
//! build and never used as keys.

/// Maximum length of a normalized slug, in characters.
pub const MAX_SLUG_LEN: usize = 64;

/// Fallback words per node kind.
pub mod fallback {
    pub const PROGRAM: &str = "program";
    pub const MEAL_PLAN: &str = "meal-plan";
    pub const SESSION: &str = "session";
    pub const EXERCISE: &str = "exercise";
    pub const MEAL_DAY: &str = "meal-day";
    pub const MEAL: &str = "meal";
    pub const MEAL_TYPE: &str = "meal-type";
}

/// Build a slug from a candidate slug, falling back to the label and then
/// to `fallback_word`. Never fails and never returns an empty string as
/// long as `fallback_word` is non-empty.
pub fn build_slug(candidate: Option<&str>, label: Option<&str>, fallback_word: &str) -> String {
    candidate
        .and_then(normalize)
        .or_else(|| label.and_then(normalize))
        .unwrap_or_else(|| fallback_word.to_string())
}

/// Normalize `raw` to lowercase ASCII alphanumerics separated by single
/// hyphens. Returns `None` when nothing usable remains.
pub fn normalize(raw: &str) -> Option<String> {
    let mut slug = String::with_capacity(raw.len().min(MAX_SLUG_LEN));
    let mut pending_hyphen = false;

    for ch in raw.trim().chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else {
            pending_hyphen = true;
        }
        if slug.len() >= MAX_SLUG_LEN {
            break;
        }
    }

    // Only ASCII is ever pushed, so byte length equals char count.
    slug.truncate(MAX_SLUG_LEN);
    let trimmed = slug.trim_end_matches('-');

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
