//! Simulated answer payload shown in the results phase.
//!
//! There is no search backend. When the searching timer fires the widget
//! attaches a canned answer and a short list of attributed sources.

use serde::{Deserialize, Serialize};

const CANNED_ANSWER: &str = "Based on recent reporting from The New York Times, artificial \
intelligence is transforming multiple sectors of the economy. Companies are implementing AI \
solutions to improve efficiency, reduce costs, and enhance customer experiences. However, \
concerns about job displacement and ethical implications remain significant challenges that \
need to be addressed through thoughtful policy and regulation.";

const CANNED_SOURCES: &[(&str, u8)] = &[
    ("Trump impeachment", 75),
    ("Fed interest rate announcement", 65),
    ("Elon Musk vs Trump", 50),
];

/// An attributed source backing an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    /// Relevance in percent, 0..=100.
    pub relevance: u8,
}

/// Answer text plus its sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchAnswer {
    /// The query this answer was produced for.
    pub query: String,
    pub text: String,
    pub sources: Vec<Source>,
}

impl SearchAnswer {
    /// Produces the canned answer for `query`.
    ///
    /// ```
    /// use askbar::domain::SearchAnswer;
    ///
    /// let answer = SearchAnswer::simulated("Top Stories");
    /// assert_eq!(answer.query, "Top Stories");
    /// assert_eq!(answer.sources.len(), 3);
    /// ```
    #[must_use]
    pub fn simulated(query: &str) -> Self {
        Self {
            query: query.to_string(),
            text: CANNED_ANSWER.to_string(),
            sources: CANNED_SOURCES
                .iter()
                .map(|&(title, relevance)| Source {
                    title: title.to_string(),
                    relevance,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sources_are_ordered_by_relevance() {
        let answer = SearchAnswer::simulated("anything");
        let relevances: Vec<u8> = answer.sources.iter().map(|s| s.relevance).collect();
        assert_eq!(relevances, vec![75, 65, 50]);
    }

    #[test]
    fn answer_text_is_not_query_dependent() {
        assert_eq!(
            SearchAnswer::simulated("a").text,
            SearchAnswer::simulated("b").text
        );
    }
}
