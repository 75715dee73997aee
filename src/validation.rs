use once_cell::sync::Lazy;
use regex::Regex;

/// Permissive URL shape: scheme, `://`, a host of word characters and dots,
/// then an optional run of path/query/fragment characters. Matched anywhere in
/// the candidate, not anchored.
pub const URL_PATTERN: &str = r"(http|ftp|https)://([0-9A-Za-z_+?.])+([a-zA-Z0-9~!@#$%^&*()_\-=+\\/?.:;',]*)?";

static URL_REGEX: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(URL_PATTERN)
        .map_err(|e| tracing::error!(error = ?e, "Cannot compile url pattern"))
        .ok()
});

/// Returns `true` if `candidate` looks like an http, https or ftp URL.
///
/// This is a syntactic check only. Fails closed if the pattern cannot be
/// compiled.
pub fn is_valid_url(candidate: &str) -> bool {
    URL_REGEX
        .as_ref()
        .map(|re| re.is_match(candidate))
        .unwrap_or(false)
}
