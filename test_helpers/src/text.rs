//! Placeholder normalisation for behavioural steps.

/// Strips one layer of matching single or double quotes from a value.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    ['"', '\'']
        .into_iter()
        .find_map(|quote| {
            trimmed
                .strip_prefix(quote)
                .and_then(|inner| inner.strip_suffix(quote))
        })
        .unwrap_or(trimmed)
}

/// Splits an unquoted, comma-separated placeholder into trimmed items.
///
/// Empty items are dropped, so `""` yields an empty list.
#[must_use]
pub fn list(value: &str) -> Vec<String> {
    unquote(value)
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}
