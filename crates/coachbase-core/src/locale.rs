/// Normalize a single locale tag: trimmed and lowercased, `None` if blank.
pub fn normalize_locale(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

/// Resolve a locale from an explicit value, falling back to `fallback`.
///
/// Compose two calls to walk a longer chain, e.g. node locale → request
/// default → persisted parent locale.
pub fn resolve_locale(explicit: Option<&str>, fallback: Option<&str>) -> Option<String> {
    normalize_locale(explicit).or_else(|| normalize_locale(fallback))
}
