//! Application layer: the widget phase state machine.
//!
//! Sits between the plugin runtime (main.rs) and the domain/ui layers. All
//! interaction flows one way:
//!
//! ```text
//! Pointer/Key/Timer → WidgetController → Event → handle_event → AppState
//!                          ↑                           ↓
//!                          └──────── Actions ──────────┘
//!                     (arm/cancel timers, notify host)
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`controller`]: The embeddable widget: state, timer queue, watcher
//! - [`handler`]: Event processing and phase transitions
//! - [`modes`]: Phase and click-target enums
//! - [`outside`]: Outside-click watcher and pointer events
//! - [`settings`]: Construction-time widget settings
//! - [`state`]: Widget state and view model computation
//! - [`timers`]: Virtual-time timer queue, generation tokens and host timeout

pub mod actions;
pub mod controller;
pub mod handler;
pub mod modes;
pub mod outside;
pub mod settings;
pub mod state;
pub mod timers;

pub use actions::Action;
pub use controller::WidgetController;
pub use handler::{handle_event, Event};
pub use modes::{ClickTarget, WidgetPhase};
pub use outside::{OutsideClickWatcher, PointerButton, PointerEvent};
pub use settings::WidgetSettings;
pub use state::AppState;
pub use timers::{HostTimeout, SearchToken, Timer, TimerKind, TimerQueue};
