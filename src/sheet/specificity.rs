//! Selector specificity ordering.
//!
//! Conditional styles apply in ascending specificity so that more specific
//! selectors override less specific ones. Specificity is deliberately crude:
//! catch-all selectors come first, then selectors ordered by how many `and`
//! conjunctions they contain. Selectors that tie keep their original relative
//! order, which makes declaration order the final tiebreaker.

use std::cmp::Ordering;

/// Counts `" and "` conjunctions in a selector.
///
/// Occurrences may overlap, so `"a and and b"` counts two.
pub fn conjunction_count(selector: &str) -> usize {
    let bytes = selector.as_bytes();
    if bytes.len() < 5 {
        return 0;
    }
    bytes.windows(5).filter(|w| *w == b" and ").count()
}

/// Whether a selector is a catch-all.
///
/// Any selector containing `all` as a substring qualifies, which intentionally
/// includes words like `small`. Catch-alls sort before everything else so
/// specific selectors can override them.
pub fn is_catch_all(selector: &str) -> bool {
    selector.contains("all")
}

/// Compares two selectors by specificity, least specific first.
pub fn compare_specificity(a: &str, b: &str) -> Ordering {
    match (is_catch_all(a), is_catch_all(b)) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => conjunction_count(a).cmp(&conjunction_count(b)),
    }
}

/// Sorts selectors into application order.
///
/// The sort is stable: selectors with equal specificity keep their input
/// order.
///
/// # Examples
///
/// ```
/// use mediasheet::order_selectors;
///
/// let ordered = order_selectors(vec![
///     "ios and (min-width: 768px)".to_string(),
///     "all".to_string(),
///     "ios".to_string(),
/// ]);
/// assert_eq!(ordered, ["all", "ios", "ios and (min-width: 768px)"]);
/// ```
pub fn order_selectors(mut selectors: Vec<String>) -> Vec<String> {
    selectors.sort_by(|a, b| compare_specificity(a, b));
    selectors
}
