//! Static suggestion index and prefix filtering.
//!
//! The index is a constant list of curated news-search queries. Autocomplete
//! is a pure prefix query over it: no state, no allocation beyond the result,
//! safe to share between any number of widgets.

/// Candidate queries offered by autocomplete.
pub const SUGGESTION_INDEX: &[&str] = &[
    "Apple earnings report",
    "Art exhibition reviews",
    "Amazon news updates",
    "Australia travel guide",
    "Artificial intelligence",
    "Arts & culture",
    "Apartment hunting tips",
    "Airline industry news",
    "Breaking news today",
    "Business news",
    "Book reviews",
    "Basketball scores",
    "Broadway shows",
    "Biden administration",
    "Budget proposals",
    "Banking sector news",
    "Climate change",
    "Congressional hearings",
    "Celebrity news",
    "Cooking recipes",
    "Crossword puzzle",
    "College admissions",
    "Cryptocurrency news",
    "COVID-19 updates",
    "Democratic primary",
    "Dining recommendations",
    "Documentary reviews",
    "Drama series reviews",
    "Data privacy issues",
    "Debt ceiling debate",
    "Development news",
    "Dance performances",
    "Eclipse coverage",
    "Economics explained",
    "Ecuador travel",
    "Edge computing news",
    "Election updates",
    "Economic forecast",
    "Editorial board",
    "Education policy",
    "Environmental policy",
    "Entertainment news",
    "Europe travel",
    "Energy sector news",
    "Fashion trends",
    "Film festival coverage",
    "Federal Reserve news",
    "Food safety alerts",
    "Football scores",
    "Foreign policy",
    "Financial markets",
    "Fitness trends",
    "Global warming",
    "Government shutdown",
    "Gaza conflict updates",
    "Gaming industry news",
    "Grocery price trends",
    "Gender equality",
    "Green energy",
    "Grammy Awards",
    "Health updates",
    "Healthcare reform",
    "Headlines today",
    "History articles",
    "Housing market",
    "Hurricane updates",
    "Holiday news",
    "Human interest stories",
    "Health and wellness",
    "High school sports",
    "Hollywood news",
    "Home and garden",
    "How to understand",
    "Immigration news",
    "International relations",
    "Infrastructure updates",
    "Investment advice",
    "Jazz festival reviews",
    "Job market trends",
    "Judicial nominations",
    "Kentucky Derby",
    "Labor union news",
    "Local news updates",
    "Movie reviews",
    "Music festival coverage",
    "NATO summit",
    "Opinion pieces today",
    "Politics news",
    "Presidential campaign",
    "Qatar World Cup",
    "Restaurant reviews",
    "Real estate market",
    "Science discoveries",
    "Sports headlines",
    "Supreme Court decisions",
    "Technology news",
    "Top Stories",
    "Travel guides",
    "Ukraine conflict",
    "U.S. news",
    "Vaccine developments",
    "Weather alerts",
    "What is happening in",
    "When did this happen",
    "Where is the latest",
    "Who said what about",
    "Why is this important",
    "World news",
    "X platform changes",
    "Yale university news",
    "Zoning law changes",
];

/// Quick-pick chips shown in the idle and results panels.
pub const DEFAULT_SUGGESTIONS: &[&str] = &["Top Stories", "Breaking News", "Generate a new Wordle"];

/// Default cap on autocomplete rows.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 6;

/// Returns index entries that start with `query`, ignoring case.
///
/// A blank query yields nothing: there is no browse-everything mode. Matches
/// are sorted alphabetically ignoring case (entries equal up to case keep byte
/// order), deduplicated, and truncated to `max_results`.
///
/// # Parameters
///
/// * `query` - Typed text; surrounding whitespace is ignored
/// * `max_results` - Cap on returned entries
///
/// # Returns
///
/// Matching index entries, owned, at most `max_results` long.
///
/// # Examples
///
/// ```
/// use askbar::domain::filter_suggestions;
///
/// assert_eq!(
///     filter_suggestions("hea", 6),
///     vec!["Headlines today", "Health and wellness", "Health updates", "Healthcare reform"],
/// );
/// assert!(filter_suggestions("   ", 6).is_empty());
/// ```
#[must_use]
pub fn filter_suggestions(query: &str, max_results: usize) -> Vec<String> {
    filter_from(SUGGESTION_INDEX, query, max_results)
}

/// Prefix filter over an arbitrary index. See [`filter_suggestions`].
#[must_use]
pub fn filter_from(index: &[&str], query: &str, max_results: usize) -> Vec<String> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<&str> = index
        .iter()
        .copied()
        .filter(|candidate| candidate.to_lowercase().starts_with(&needle))
        .collect();

    matches.sort_by_cached_key(|entry| (entry.to_lowercase(), *entry));
    matches.dedup();
    matches.truncate(max_results);

    matches.into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_returns_nothing() {
        assert!(filter_suggestions("", 10).is_empty());
        assert!(filter_suggestions("  \t ", 10).is_empty());
    }

    #[test]
    fn prefix_match_is_case_insensitive() {
        let upper = filter_suggestions("TO", 10);
        let lower = filter_suggestions("to", 10);
        assert_eq!(upper, lower);
        assert_eq!(upper, vec!["Top Stories"]);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(filter_suggestions("  kentucky ", 3), vec!["Kentucky Derby"]);
    }

    #[test]
    fn results_are_sorted_and_capped() {
        let all = filter_suggestions("e", 100);
        assert!(all.len() > 6);
        let mut sorted = all.clone();
        sorted.sort_by_key(|s| s.to_lowercase());
        assert_eq!(all, sorted);

        let capped = filter_suggestions("e", 6);
        assert_eq!(capped, all[..6].to_vec());
    }

    #[test]
    fn zero_cap_returns_nothing() {
        assert!(filter_suggestions("a", 0).is_empty());
    }

    #[test]
    fn uppercase_entries_sort_among_their_letters() {
        assert_eq!(
            filter_suggestions("co", 6),
            vec![
                "College admissions",
                "Congressional hearings",
                "Cooking recipes",
                "COVID-19 updates",
            ]
        );
        assert_eq!(
            filter_suggestions("c", 3),
            vec!["Celebrity news", "Climate change", "College admissions"]
        );
    }

    #[test]
    fn duplicate_entries_collapse() {
        let index = ["Alpha", "alpha", "Alpha", "Beta"];
        assert_eq!(filter_from(&index, "al", 10), vec!["Alpha", "alpha"]);
    }

    #[test]
    fn no_match_is_empty() {
        assert!(filter_suggestions("zzz", 6).is_empty());
    }
}
