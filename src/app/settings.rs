//! Construction-time settings for a widget instance.

use crate::domain::{DEFAULT_MAX_SUGGESTIONS, DEFAULT_SUGGESTIONS};
use std::time::Duration;

/// Simulated search latency.
pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(3000);

/// Simulated attribution fetch latency, counted from the results appearing.
pub const DEFAULT_SOURCES_DELAY: Duration = Duration::from_millis(3000);

/// How long each "Searching through …" word stays up.
pub const DEFAULT_ANIMATION_INTERVAL: Duration = Duration::from_millis(2000);

/// Behavior knobs fixed for the lifetime of a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetSettings {
    /// Start open in `Idle` instead of folded in `Collapsed`.
    pub initially_expanded: bool,
    pub search_delay: Duration,
    pub sources_delay: Duration,
    pub animation_interval: Duration,
    /// Cap on autocomplete rows.
    pub max_suggestions: usize,
    /// Quick-pick chips shown in `Idle` and `Results`.
    pub suggestions: Vec<String>,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            initially_expanded: false,
            search_delay: DEFAULT_SEARCH_DELAY,
            sources_delay: DEFAULT_SOURCES_DELAY,
            animation_interval: DEFAULT_ANIMATION_INTERVAL,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            suggestions: DEFAULT_SUGGESTIONS.iter().map(ToString::to_string).collect(),
        }
    }
}
