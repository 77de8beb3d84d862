//! Domain layer for the askbar widget.
//!
//! Plain data and pure functions with no Zellij dependency: the suggestion
//! index, the simulated answer payload, cell geometry and the error type.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`suggestions`]: Static suggestion index and prefix filter
//! - [`answer`]: Canned answer and sources for the results phase
//! - [`geometry`]: Cell positions and rectangles for hit-testing
//!
//! # Examples
//!
//! ```
//! use askbar::domain::filter_suggestions;
//!
//! assert_eq!(filter_suggestions("nato", 6), vec!["NATO summit"]);
//! assert!(filter_suggestions("   ", 6).is_empty());
//! ```

pub mod answer;
pub mod error;
pub mod geometry;
pub mod suggestions;

pub use answer::{SearchAnswer, Source};
pub use error::{AskbarError, Result};
pub use geometry::{Position, Rect};
pub use suggestions::{
    filter_from, filter_suggestions, DEFAULT_MAX_SUGGESTIONS, DEFAULT_SUGGESTIONS,
    SUGGESTION_INDEX,
};
