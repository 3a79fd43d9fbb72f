//! Case-insensitive substring matching.
//!
//! Catalog classification matches free-text product names and category
//! labels. All comparisons are ASCII-case-insensitive; the catalog content
//! is ASCII today.

/// True if `haystack` contains `needle`, ignoring ASCII case.
///
/// An empty `needle` matches everything, same as `str::contains`.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let haystack = haystack.to_ascii_lowercase();
    let needle = needle.to_ascii_lowercase();
    haystack.contains(&needle)
}

/// True if `haystack` contains any of `needles`, ignoring ASCII case.
pub fn contains_any_ci(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| contains_ci(haystack, n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_ignores_case() {
        assert!(contains_ci("SMS Wrap Around Gown", "wrap"));
        assert!(contains_ci("3 Ply Face Masks", "MASK"));
        assert!(!contains_ci("Surgical Gown", "cap"));
    }

    #[test]
    fn empty_needle_matches() {
        assert!(contains_ci("anything", ""));
        assert!(contains_ci("", ""));
    }

    #[test]
    fn any_matches_first_hit() {
        assert!(contains_any_ci("Disposable Labcoat", &["coverall", "labcoat"]));
        assert!(!contains_any_ci("Nitrile Gloves", &["coverall", "labcoat"]));
    }
}
