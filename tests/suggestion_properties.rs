//! Property-based tests for the suggestion prefix filter.
//!
//! Tests validate:
//! 1. Every result starts with the trimmed query, ignoring case
//! 2. Results are sorted ignoring case, unique and capped
//! 3. Blank queries return nothing
//! 4. Nothing matching is dropped when the cap allows it

use askbar::domain::{filter_suggestions, SUGGESTION_INDEX};
use proptest::prelude::*;

/// Queries that actually hit the index: a prefix of a real entry, in random
/// case, with optional surrounding whitespace.
fn indexed_prefix() -> impl Strategy<Value = String> {
    (
        prop::sample::select(SUGGESTION_INDEX),
        1usize..8,
        any::<bool>(),
        "[ \t]{0,2}",
    )
        .prop_map(|(entry, len, upper, pad)| {
            let prefix: String = entry.chars().take(len).collect();
            let prefix = if upper {
                prefix.to_uppercase()
            } else {
                prefix.to_lowercase()
            };
            format!("{pad}{prefix}{pad}")
        })
}

fn assert_sound(query: &str, max: usize, results: &[String]) -> Result<(), TestCaseError> {
    let needle = query.trim().to_lowercase();

    prop_assert!(results.len() <= max, "{} results exceed cap {max}", results.len());
    for r in results {
        prop_assert!(
            r.to_lowercase().starts_with(&needle),
            "{r:?} does not start with {needle:?}"
        );
        prop_assert!(SUGGESTION_INDEX.contains(&r.as_str()), "{r:?} not in index");
    }
    for pair in results.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        prop_assert!(
            (a.to_lowercase(), a) < (b.to_lowercase(), b),
            "not strictly sorted ignoring case: {pair:?}"
        );
    }
    Ok(())
}

// ===== Property 1 & 2: Soundness =====

proptest! {
    #[test]
    fn arbitrary_queries_are_sound(query in any::<String>(), max in 0usize..12) {
        let results = filter_suggestions(&query, max);
        assert_sound(&query, max, &results)?;
    }

    #[test]
    fn indexed_prefixes_are_sound(query in indexed_prefix(), max in 0usize..12) {
        let results = filter_suggestions(&query, max);
        assert_sound(&query, max, &results)?;
    }
}

// ===== Property 3: Blank Queries =====

proptest! {
    #[test]
    fn whitespace_queries_return_nothing(query in "[ \t\n]*", max in 0usize..50) {
        prop_assert!(filter_suggestions(&query, max).is_empty());
    }
}

// ===== Property 4: Completeness =====

proptest! {
    #[test]
    fn uncapped_results_contain_every_match(query in indexed_prefix()) {
        let results = filter_suggestions(&query, usize::MAX);
        let needle = query.trim().to_lowercase();

        let expected = SUGGESTION_INDEX
            .iter()
            .filter(|entry| entry.to_lowercase().starts_with(&needle))
            .count();
        prop_assert_eq!(results.len(), expected);
        prop_assert!(!results.is_empty(), "prefix of an entry must match it");
    }

    #[test]
    fn cap_keeps_the_smallest_matches(query in indexed_prefix(), max in 1usize..6) {
        let all = filter_suggestions(&query, usize::MAX);
        let capped = filter_suggestions(&query, max);
        prop_assert_eq!(&capped[..], &all[..capped.len()]);
    }
}
