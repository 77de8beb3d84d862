//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They hold no
//! business logic, only display-ready data: wrapped answer lines, highlight
//! ranges, the current animation word.
//!
//! Exactly one [`WidgetView`] variant is produced per frame, one per
//! presentation slot.
//!
//! # Example
//!
//! ```rust
//! use askbar::ui::viewmodel::{FooterInfo, UIViewModel, WidgetView};
//!
//! let vm = UIViewModel {
//!     view: WidgetView::Trigger { label: "Ask anything".to_string() },
//!     footer: FooterInfo { keybindings: "Enter: open".to_string() },
//! };
//! assert!(vm.view.is_trigger());
//! ```

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// The presentation slot selected by the current phase.
    pub view: WidgetView,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,
}

/// One variant per presentation slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetView {
    /// Widget folded down to its trigger button.
    Trigger {
        label: String,
    },

    /// Open, input not focused: search bar plus quick-pick chips.
    Idle {
        header: HeaderInfo,
        search_bar: SearchBarInfo,
        suggestions: Vec<String>,
    },

    /// Input focused: autocomplete rows above the search bar.
    Typing {
        header: HeaderInfo,
        autocomplete: Vec<AutocompleteItem>,
        search_bar: SearchBarInfo,
    },

    /// Submitted query as header, animation, read-only search bar.
    Searching {
        header: HeaderInfo,
        animation: SearchingInfo,
        search_bar: SearchBarInfo,
    },

    /// Answer, sources (expanded only), follow-up bar and chips.
    Results {
        header: HeaderInfo,
        answer: AnswerInfo,
        sources: Option<SourcesInfo>,
        follow_up: SearchBarInfo,
        suggestions: Vec<String>,
    },
}

impl WidgetView {
    #[must_use]
    pub const fn is_trigger(&self) -> bool {
        matches!(self, Self::Trigger { .. })
    }
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,

    /// `Some(expanded)` when the header carries the results expand toggle.
    pub expand_toggle: Option<bool>,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "/: search  Esc: collapse").
    pub keybindings: String,
}

/// Which input a search bar drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchBarKind {
    Primary,
    FollowUp,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub kind: SearchBarKind,

    /// Current input text.
    pub query: String,

    /// Shown dimmed when `query` is empty.
    pub placeholder: String,

    /// Draws a cursor after the text.
    pub focused: bool,

    /// Searching shows the frozen query; clicks still land on the bar.
    pub read_only: bool,
}

/// One autocomplete row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocompleteItem {
    pub text: String,

    /// Character ranges to highlight (the typed prefix).
    ///
    /// Each tuple is `(start_index, end_index)` in UTF-8 character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// The rotating "Searching through …" line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchingInfo {
    pub prefix: String,
    pub word: String,
}

/// Answer text, already wrapped to the panel width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerInfo {
    pub lines: Vec<String>,

    /// More text exists beyond `lines`.
    pub truncated: bool,
}

/// Sources section of the expanded results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourcesInfo {
    Loading,
    Loaded(Vec<SourceItem>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceItem {
    pub title: String,
    /// Relevance formatted for display, e.g. "75%".
    pub relevance: String,
}
