//! Phase and interaction-target types for the widget state machine.
//!
//! # State Machine
//!
//! The widget is always in exactly one [`WidgetPhase`]. Whether it is drawn
//! open is tracked separately by `AppState::is_open`, so collapsing the widget
//! folds the view without forgetting the phase:
//!
//! ```text
//! Collapsed ──toggle──▶ Idle ──focus──▶ Typing
//!                        ▲                │
//!                        └─ widget click ─┘
//!  Idle / Typing / Results ──submit──▶ Searching ──timer──▶ Results
//! ```
//!
//! # Example
//!
//! ```rust
//! use askbar::app::WidgetPhase;
//!
//! let phase = WidgetPhase::Typing;
//! assert!(phase.accepts_submission());
//! assert!(!WidgetPhase::Collapsed.accepts_submission());
//! ```

/// Mutually exclusive interaction phase of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetPhase {
    /// Never opened yet; only the trigger button exists.
    Collapsed,

    /// Open with no input focus. Shows the quick-pick suggestion chips.
    Idle,

    /// The search input has focus and autocomplete is live.
    Typing,

    /// A query was submitted and the simulated search is in flight.
    Searching,

    /// The answer is shown, with its own expanded/collapsed detail level.
    Results,
}

impl WidgetPhase {
    /// Whether a query submission is meaningful from this phase.
    ///
    /// Only the never-opened `Collapsed` phase rejects submissions: it has no
    /// input to submit from.
    #[must_use]
    pub const fn accepts_submission(self) -> bool {
        !matches!(self, Self::Collapsed)
    }

    /// Short lowercase name used in logs and footers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Collapsed => "collapsed",
            Self::Idle => "idle",
            Self::Typing => "typing",
            Self::Searching => "searching",
            Self::Results => "results",
        }
    }
}

/// Where inside the widget a click landed, as far as the typing phase cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The primary search input.
    SearchInput,
    /// Anywhere else inside the widget boundary.
    Elsewhere,
}
