//! Side effects requested by the event handler.
//!
//! The handler only mutates [`AppState`](crate::app::AppState); anything that
//! reaches outside it (the timer queue, the host callback) comes back as an
//! [`Action`] for the controller to execute in order.

use crate::app::timers::{SearchToken, Timer};
use std::time::Duration;

/// Commands executed by the controller after an event is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Arms `timer` to fire `delay` after the current virtual time.
    ArmTimer {
        timer: Timer,
        delay: Duration,
    },

    /// Drops pending timers armed by submissions older than `current`.
    CancelStaleTimers {
        current: SearchToken,
    },

    /// Tells the host a suggestion was picked, with its verbatim text.
    ///
    /// Emitted once per autocomplete selection or chip click.
    NotifySuggestionSelected(String),
}
