//! Exact and fuzzy icon-name matching.
//!
//! Ranking mirrors how a human searches: substring hits ("arrow" finds
//! "arrow-right") surface before edit-distance hits ("arrwo" finds "arrow").

/// Number of suggestions callers conventionally ask for.
pub const DEFAULT_SUGGESTIONS: usize = 5;

/// Names within this Levenshtein distance of the needle count as fuzzy hits.
const MAX_EDIT_DISTANCE: usize = 2;

/// Find an exact case-insensitive match, preserving the original casing.
///
/// Returns the first matching entry, or `None` when `names` is empty,
/// `needle` is empty, or nothing matches.
pub fn find_exact_match<'a>(names: &'a [String], needle: &str) -> Option<&'a str> {
    if needle.is_empty() {
        return None;
    }
    let n = needle.to_lowercase();
    names
        .iter()
        .find(|name| name.to_lowercase() == n)
        .map(String::as_str)
}

/// Find names similar to the needle, substring matches first.
///
/// Phase 1: case-insensitive substring matches, in `names` order. Phase 2:
/// remaining names within edit distance 2, in `names` order. The combined
/// list is truncated to `limit`. An empty needle is a universal substring
/// match, so it yields the first `limit` names.
pub fn find_similar<'a>(names: &'a [String], needle: &str, limit: usize) -> Vec<&'a str> {
    let n = needle.to_lowercase();

    let substring: Vec<&str> = names
        .iter()
        .filter(|name| name.to_lowercase().contains(&n))
        .map(String::as_str)
        .collect();

    let fuzzy = names
        .iter()
        .map(String::as_str)
        .filter(|name| !substring.contains(name))
        .filter(|name| strsim::levenshtein(&name.to_lowercase(), &n) <= MAX_EDIT_DISTANCE);

    substring
        .iter()
        .copied()
        .chain(fuzzy)
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn sample() -> Vec<String> {
        names(&[
            "menu",
            "menus",
            "chevron-down",
            "chevron-up",
            "arrow-right",
            "arrow-left",
        ])
    }

    #[test]
    fn exact_match_is_case_insensitive_and_preserves_source_casing() {
        let haystack = names(&["menu", "Menu"]);
        assert_eq!(find_exact_match(&haystack, "MENU"), Some("menu"));
    }

    #[test]
    fn exact_match_empty_inputs() {
        assert_eq!(find_exact_match(&[], "menu"), None);
        assert_eq!(find_exact_match(&sample(), ""), None);
    }

    #[test]
    fn exact_match_miss() {
        assert_eq!(find_exact_match(&sample(), "hamburger"), None);
    }

    #[test]
    fn similar_ranks_substring_before_fuzzy() {
        let haystack = sample();
        let result = find_similar(&haystack, "menu", DEFAULT_SUGGESTIONS);
        assert_eq!(&result[..2], &["menu", "menus"]);
    }

    #[test]
    fn similar_finds_typos_within_edit_distance() {
        let haystack = sample();
        let result = find_similar(&haystack, "manu", DEFAULT_SUGGESTIONS);
        assert!(result.contains(&"menu"));
    }

    #[test]
    fn similar_returns_empty_for_garbage() {
        let haystack = sample();
        let result = find_similar(&haystack, "zzzzzzzzz", DEFAULT_SUGGESTIONS);
        assert!(result.is_empty());
    }

    #[test]
    fn similar_empty_needle_matches_everything_up_to_limit() {
        let haystack = sample();
        let result = find_similar(&haystack, "", 3);
        assert_eq!(result, vec!["menu", "menus", "chevron-down"]);
    }

    #[test]
    fn similar_respects_limit_and_has_no_duplicates() {
        let haystack = sample();
        for term in ["menu", "chevron", "arrow", "e", ""] {
            for limit in [1, 3, 10] {
                let result = find_similar(&haystack, term, limit);
                assert!(result.len() <= limit);
                for (i, name) in result.iter().enumerate() {
                    assert!(haystack.iter().any(|h| h.as_str() == *name));
                    assert!(!result[..i].contains(name), "duplicate {name}");
                }
            }
        }
    }

    #[test]
    fn similar_is_case_insensitive() {
        let haystack = sample();
        let result = find_similar(&haystack, "ARROW", DEFAULT_SUGGESTIONS);
        assert_eq!(result, vec!["arrow-right", "arrow-left"]);
    }
}
