//! Widget state and view model computation.
//!
//! [`AppState`] is the single source of truth for one widget instance. It is
//! mutated only by [`handle_event`](crate::app::handle_event) and read by the
//! renderer through [`AppState::compute_viewmodel`].
//!
//! # State Components
//!
//! - **Open flag and phase**: independent; folding keeps the phase
//! - **Search text and autocomplete**: autocomplete is always the prefix
//!   filter of the search text, or empty right after a selection/submission
//! - **Submission**: frozen query, generation token and simulated answer
//! - **Results sub-state**: expanded flag, sources loading, follow-up text
//!
//! # Example
//!
//! ```rust
//! use askbar::app::{AppState, WidgetPhase, WidgetSettings};
//! use askbar::ui::Theme;
//!
//! let state = AppState::new(WidgetSettings::default(), Theme::default());
//! assert_eq!(state.phase, WidgetPhase::Collapsed);
//! assert!(state.compute_viewmodel(24, 80).view.is_trigger());
//! ```

use super::modes::WidgetPhase;
use super::settings::WidgetSettings;
use super::timers::SearchToken;
use crate::domain::{filter_suggestions, SearchAnswer};
use crate::ui::helpers::wrap_text;
use crate::ui::layout::content_width;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    AnswerInfo, AutocompleteItem, FooterInfo, HeaderInfo, SearchBarInfo, SearchBarKind,
    SearchingInfo, SourceItem, SourcesInfo, UIViewModel, WidgetView,
};

pub const WIDGET_TITLE: &str = "Ask Anything!";
pub const TRIGGER_LABEL: &str = "✦ Ask anything";
pub const SEARCH_PLACEHOLDER: &str = "Ask Anything";
pub const FOLLOW_UP_PLACEHOLDER: &str = "What did Trump say?";
pub const FOLLOW_UP_PLACEHOLDER_EXPANDED: &str = "Ask a follow-up";

pub const SEARCHING_PREFIX: &str = "Searching through";
pub const SEARCHING_WORDS: &[&str] = &[
    "articles",
    "books",
    "videos",
    "podcasts",
    "archives",
    "newsletters",
];

/// Answer lines shown while results are collapsed.
pub const ANSWER_PREVIEW_LINES: usize = 3;

/// Rows the expanded results layout needs besides the answer itself.
const RESULTS_CHROME_ROWS: usize = 18;

/// State of one widget instance.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Widget drawn past its trigger button.
    pub is_open: bool,

    /// Current phase. Survives folding: reopening resumes it.
    pub phase: WidgetPhase,

    /// Live text of the primary input.
    pub search_text: String,

    /// Query frozen at submission; header of Searching and Results.
    pub submitted_query: String,

    /// Prefix filter of `search_text`, capped at `settings.max_suggestions`.
    pub autocomplete_suggestions: Vec<String>,

    /// Results shown in full rather than as a preview.
    pub results_expanded: bool,

    /// Attributions still "loading". Reset on every submission.
    pub sources_loading: bool,

    /// Results-phase follow-up input. Never drives autocomplete.
    pub follow_up_text: String,

    /// Generation of the latest submission. Timers carrying an older token
    /// are ignored.
    pub generation: SearchToken,

    /// Answer for `submitted_query`, attached when the search completes.
    pub answer: Option<SearchAnswer>,

    /// Ticks of the searching animation since the last submission.
    pub searching_frame: usize,

    pub settings: WidgetSettings,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates the initial state: open in `Idle` when the settings ask for
    /// it, folded in `Collapsed` otherwise.
    #[must_use]
    pub fn new(settings: WidgetSettings, theme: Theme) -> Self {
        let (is_open, phase) = if settings.initially_expanded {
            (true, WidgetPhase::Idle)
        } else {
            (false, WidgetPhase::Collapsed)
        };

        Self {
            is_open,
            phase,
            search_text: String::new(),
            submitted_query: String::new(),
            autocomplete_suggestions: vec![],
            results_expanded: false,
            sources_loading: true,
            follow_up_text: String::new(),
            generation: SearchToken::default(),
            answer: None,
            searching_frame: 0,
            settings,
            theme,
        }
    }

    /// Replaces the search text and recomputes autocomplete from it.
    pub fn set_search_text(&mut self, text: &str) {
        self.search_text = text.to_string();
        self.refresh_autocomplete();
    }

    /// Recomputes autocomplete from the current search text.
    pub fn refresh_autocomplete(&mut self) {
        self.autocomplete_suggestions =
            filter_suggestions(&self.search_text, self.settings.max_suggestions);

        tracing::trace!(
            query = %self.search_text,
            matches = self.autocomplete_suggestions.len(),
            "autocomplete refreshed"
        );
    }

    /// Enters `Searching` for an already-trimmed, non-empty query.
    ///
    /// Bumps the generation and returns the new token for the caller to arm
    /// timers with.
    pub fn begin_search(&mut self, query: &str) -> SearchToken {
        if self.phase == WidgetPhase::Results {
            self.follow_up_text.clear();
        }

        self.phase = WidgetPhase::Searching;
        self.submitted_query = query.to_string();
        self.autocomplete_suggestions.clear();
        self.sources_loading = true;
        self.answer = None;
        self.searching_frame = 0;
        self.generation = self.generation.next();
        self.generation
    }

    /// Enters `Results` with the simulated answer for the submitted query.
    pub fn complete_search(&mut self) {
        self.phase = WidgetPhase::Results;
        self.results_expanded = false;
        self.answer = Some(SearchAnswer::simulated(&self.submitted_query));
    }

    /// Computes a renderable view model for a pane of `rows` by `cols` cells.
    ///
    /// A folded widget always yields the trigger slot, whatever the phase.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let view = if self.is_open {
            self.compute_open_view(rows, cols)
        } else {
            Self::trigger_view()
        };

        UIViewModel {
            view,
            footer: self.compute_footer(),
        }
    }

    fn trigger_view() -> WidgetView {
        WidgetView::Trigger {
            label: TRIGGER_LABEL.to_string(),
        }
    }

    fn compute_open_view(&self, rows: usize, cols: usize) -> WidgetView {
        match self.phase {
            WidgetPhase::Collapsed => Self::trigger_view(),
            WidgetPhase::Idle => WidgetView::Idle {
                header: Self::title_header(),
                search_bar: self.primary_search_bar(false),
                suggestions: self.settings.suggestions.clone(),
            },
            WidgetPhase::Typing => WidgetView::Typing {
                header: Self::title_header(),
                autocomplete: self.compute_autocomplete_items(),
                search_bar: self.primary_search_bar(true),
            },
            WidgetPhase::Searching => WidgetView::Searching {
                header: HeaderInfo {
                    title: self.submitted_query.clone(),
                    expand_toggle: None,
                },
                animation: self.compute_animation(),
                search_bar: SearchBarInfo {
                    kind: SearchBarKind::Primary,
                    query: self.submitted_query.clone(),
                    placeholder: SEARCH_PLACEHOLDER.to_string(),
                    focused: false,
                    read_only: true,
                },
            },
            WidgetPhase::Results => WidgetView::Results {
                header: HeaderInfo {
                    title: self.submitted_query.clone(),
                    expand_toggle: Some(self.results_expanded),
                },
                answer: self.compute_answer(rows, cols),
                sources: self.results_expanded.then(|| self.compute_sources()),
                follow_up: SearchBarInfo {
                    kind: SearchBarKind::FollowUp,
                    query: self.follow_up_text.clone(),
                    placeholder: if self.results_expanded {
                        FOLLOW_UP_PLACEHOLDER_EXPANDED
                    } else {
                        FOLLOW_UP_PLACEHOLDER
                    }
                    .to_string(),
                    focused: true,
                    read_only: false,
                },
                suggestions: self.settings.suggestions.clone(),
            },
        }
    }

    fn title_header() -> HeaderInfo {
        HeaderInfo {
            title: WIDGET_TITLE.to_string(),
            expand_toggle: None,
        }
    }

    fn primary_search_bar(&self, focused: bool) -> SearchBarInfo {
        SearchBarInfo {
            kind: SearchBarKind::Primary,
            query: self.search_text.clone(),
            placeholder: SEARCH_PLACEHOLDER.to_string(),
            focused,
            read_only: false,
        }
    }

    /// Every suggestion is a prefix match, so the highlight is the typed
    /// prefix itself.
    fn compute_autocomplete_items(&self) -> Vec<AutocompleteItem> {
        let typed = self.search_text.trim().chars().count();

        self.autocomplete_suggestions
            .iter()
            .map(|text| {
                let end = typed.min(text.chars().count());
                AutocompleteItem {
                    text: text.clone(),
                    highlight_ranges: if end > 0 { vec![(0, end)] } else { vec![] },
                }
            })
            .collect()
    }

    fn compute_animation(&self) -> SearchingInfo {
        let word = SEARCHING_WORDS[self.searching_frame % SEARCHING_WORDS.len()];
        SearchingInfo {
            prefix: SEARCHING_PREFIX.to_string(),
            word: word.to_string(),
        }
    }

    fn compute_answer(&self, rows: usize, cols: usize) -> AnswerInfo {
        let Some(answer) = &self.answer else {
            return AnswerInfo {
                lines: vec![],
                truncated: false,
            };
        };

        let mut lines = wrap_text(&answer.text, content_width(cols));
        let limit = if self.results_expanded {
            rows.saturating_sub(RESULTS_CHROME_ROWS).max(ANSWER_PREVIEW_LINES)
        } else {
            ANSWER_PREVIEW_LINES
        };

        let truncated = lines.len() > limit;
        lines.truncate(limit);
        AnswerInfo { lines, truncated }
    }

    fn compute_sources(&self) -> SourcesInfo {
        if self.sources_loading {
            return SourcesInfo::Loading;
        }

        let items = self
            .answer
            .as_ref()
            .map(|answer| {
                answer
                    .sources
                    .iter()
                    .map(|source| SourceItem {
                        title: source.title.clone(),
                        relevance: format!("{}%", source.relevance),
                    })
                    .collect()
            })
            .unwrap_or_default();

        SourcesInfo::Loaded(items)
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.is_open {
            match self.phase {
                WidgetPhase::Collapsed => "Enter: open",
                WidgetPhase::Idle => "/: search  1-3: suggestion  Esc: collapse",
                WidgetPhase::Typing => "Enter: ask  Tab: complete  Esc: done",
                WidgetPhase::Searching => "Esc: collapse",
                WidgetPhase::Results => "Type: follow-up  Enter: ask  Tab: expand  Esc: collapse",
            }
        } else {
            "Enter: open"
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_state() -> AppState {
        AppState::new(
            WidgetSettings {
                initially_expanded: true,
                ..WidgetSettings::default()
            },
            Theme::default(),
        )
    }

    #[test]
    fn initially_expanded_starts_idle_and_open() {
        let state = open_state();
        assert!(state.is_open);
        assert_eq!(state.phase, WidgetPhase::Idle);
    }

    #[test]
    fn folded_state_renders_trigger_whatever_the_phase() {
        let mut state = open_state();
        state.phase = WidgetPhase::Results;
        state.is_open = false;
        assert!(state.compute_viewmodel(24, 80).view.is_trigger());
    }

    #[test]
    fn begin_search_bumps_generation_and_resets_submission_fields() {
        let mut state = open_state();
        state.set_search_text("to");
        state.sources_loading = false;

        let first = state.begin_search("Top Stories");
        let second = state.begin_search("Breaking News");

        assert!(second > first);
        assert_eq!(state.submitted_query, "Breaking News");
        assert!(state.autocomplete_suggestions.is_empty());
        assert!(state.sources_loading);
        assert_eq!(state.search_text, "to");
    }

    #[test]
    fn follow_up_is_cleared_only_when_submitting_from_results() {
        let mut state = open_state();
        state.follow_up_text = "kept".to_string();
        state.begin_search("q");
        assert_eq!(state.follow_up_text, "kept");

        state.complete_search();
        state.begin_search("q2");
        assert!(state.follow_up_text.is_empty());
    }

    #[test]
    fn typing_view_highlights_typed_prefix() {
        let mut state = open_state();
        state.phase = WidgetPhase::Typing;
        state.set_search_text(" hea");

        let WidgetView::Typing { autocomplete, .. } = state.compute_viewmodel(24, 80).view else {
            panic!("expected typing view");
        };
        assert!(!autocomplete.is_empty());
        assert!(autocomplete.iter().all(|item| item.highlight_ranges == vec![(0, 3)]));
    }

    #[test]
    fn collapsed_results_show_three_line_preview_without_sources() {
        let mut state = open_state();
        state.begin_search("Top Stories");
        state.complete_search();

        let WidgetView::Results { answer, sources, header, .. } =
            state.compute_viewmodel(24, 40).view
        else {
            panic!("expected results view");
        };
        assert_eq!(answer.lines.len(), ANSWER_PREVIEW_LINES);
        assert!(answer.truncated);
        assert_eq!(sources, None);
        assert_eq!(header.expand_toggle, Some(false));
    }

    #[test]
    fn expanded_results_show_loading_then_sources() {
        let mut state = open_state();
        state.begin_search("Top Stories");
        state.complete_search();
        state.results_expanded = true;

        let WidgetView::Results { sources, .. } = state.compute_viewmodel(60, 80).view else {
            panic!("expected results view");
        };
        assert_eq!(sources, Some(SourcesInfo::Loading));

        state.sources_loading = false;
        let WidgetView::Results { sources, answer, .. } = state.compute_viewmodel(60, 80).view
        else {
            panic!("expected results view");
        };
        assert!(!answer.truncated);
        let Some(SourcesInfo::Loaded(items)) = sources else {
            panic!("expected loaded sources");
        };
        assert_eq!(items[0].relevance, "75%");
    }

    #[test]
    fn searching_word_rotates_with_frame() {
        let mut state = open_state();
        state.begin_search("q");
        state.searching_frame = SEARCHING_WORDS.len() + 1;

        let WidgetView::Searching { animation, .. } = state.compute_viewmodel(24, 80).view else {
            panic!("expected searching view");
        };
        assert_eq!(animation.word, "books");
    }
}
