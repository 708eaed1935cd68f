//! Cache Key Derivation
//!
//! Builds normalized cache keys from a resource path and its query parameters.

// == Cache Key ==
/// Derives a cache key from a resource path and query parameters.
///
/// Parameters are sorted by name before concatenation, so two logically
/// identical requests with parameters supplied in different orders collide
/// to the same key.
pub fn cache_key(path: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }

    let mut sorted: Vec<&(&str, &str)> = params.iter().collect();
    sorted.sort_by_key(|(name, _)| *name);

    let query = sorted
        .iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", path, query)
}
