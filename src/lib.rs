//! Askbar: an "ask anything" search widget for Zellij.
//!
//! Askbar is a floating search widget that provides:
//! - A collapsible trigger that expands into a search panel
//! - Prefix autocomplete over a fixed suggestion index
//! - A simulated answer pipeline with a "Searching through …" animation
//! - Late-arriving sources and an expandable answer with follow-up input
//! - Outside-click collapse while the panel is open

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Phase controller + event handling                │
//! │  - Timer queue with generation tokens               │
//! │  - Outside-click watcher                            │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  UI Layer (ui/)                                     │  ← Rendering
//! │  - View models, components, hit regions, theming    │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │  ← Core types
//! │  - Suggestion index and prefix filter               │
//! │  - Simulated answers, geometry, errors              │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing to an OTLP JSON file       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Widget state machine, timers and controller
//! - [`domain`]: Suggestion index, answers, geometry and errors
//! - [`infrastructure`]: Sandbox path utilities
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: OpenTelemetry tracing
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/askbar.wasm" {
//!         initially_expanded "true"
//!         search_delay_ms "1500"
//!         sources_delay_ms "3000"
//!         max_suggestions "6"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use askbar::{initialize, Config, WidgetPhase};
//! use std::time::Duration;
//!
//! let mut widget = initialize(&Config::default());
//! widget.toggle_expand();
//! widget.change_search_text("to");
//! assert_eq!(widget.state().autocomplete_suggestions, vec!["Top Stories"]);
//!
//! widget.submit_query("Top Stories");
//! widget.advance_by(Duration::from_secs(3));
//! assert_eq!(widget.state().phase, WidgetPhase::Results);
//! ```
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Terminal**: Any ANSI-capable terminal emulator with mouse reporting

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{
    handle_event, Action, AppState, ClickTarget, Event, PointerEvent, WidgetController,
    WidgetPhase, WidgetSettings,
};
pub use domain::{filter_suggestions, AskbarError, Result};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::str::FromStr;
use std::time::Duration;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Start with the panel open. Default: `false`
    pub initially_expanded: bool,

    /// Simulated search latency in milliseconds. Default: 3000
    pub search_delay_ms: u64,

    /// Delay before sources appear, counted from the results. Default: 3000
    pub sources_delay_ms: u64,

    /// Cap on autocomplete rows. Default: 6
    pub max_suggestions: usize,

    /// Built-in theme name: `catppuccin-mocha` or `catppuccin-latte`.
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Tracing filter directive. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let settings = WidgetSettings::default();
        Self {
            initially_expanded: settings.initially_expanded,
            search_delay_ms: millis(settings.search_delay),
            sources_delay_ms: millis(settings.sources_delay),
            max_suggestions: settings.max_suggestions,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unknown keys are ignored. A value that fails to parse is logged and
    /// replaced by its default, so a typo never keeps the widget from loading.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use askbar::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("initially_expanded".to_string(), "true".to_string());
    /// map.insert("search_delay_ms".to_string(), "soon".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert!(config.initially_expanded);
    /// assert_eq!(config.search_delay_ms, 3000);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        Self {
            initially_expanded: lookup(config, "initially_expanded", parse_flag)
                .unwrap_or(defaults.initially_expanded),
            search_delay_ms: lookup(config, "search_delay_ms", parse_number::<u64>)
                .unwrap_or(defaults.search_delay_ms),
            sources_delay_ms: lookup(config, "sources_delay_ms", parse_number::<u64>)
                .unwrap_or(defaults.sources_delay_ms),
            max_suggestions: lookup(config, "max_suggestions", parse_number::<usize>)
                .unwrap_or(defaults.max_suggestions),
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Widget behavior derived from this configuration.
    #[must_use]
    pub fn widget_settings(&self) -> WidgetSettings {
        WidgetSettings {
            initially_expanded: self.initially_expanded,
            search_delay: Duration::from_millis(self.search_delay_ms),
            sources_delay: Duration::from_millis(self.sources_delay_ms),
            max_suggestions: self.max_suggestions,
            ..WidgetSettings::default()
        }
    }

    /// Resolves the theme: file first, then name, then the built-in default.
    ///
    /// Failures are logged and fall back to the default theme.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

fn lookup<T>(
    config: &BTreeMap<String, String>,
    key: &str,
    parse: fn(&str, &str) -> Result<T>,
) -> Option<T> {
    let raw = config.get(key)?;
    parse(key, raw)
        .map_err(|e| tracing::debug!(key, value = %raw, error = %e, "ignoring invalid config value"))
        .ok()
}

/// Parses `true`/`false` (also `yes`/`no`, `1`/`0`), ignoring case.
fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        other => Err(AskbarError::Config(format!(
            "{key}: expected true or false, got {other:?}"
        ))),
    }
}

fn parse_number<T: FromStr>(key: &str, raw: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| AskbarError::Config(format!("{key}: {e}")))
}

/// Builds a widget controller from configuration.
///
/// Does not install tracing; the plugin shim calls
/// [`observability::init_tracing`] first.
///
/// ```rust
/// use askbar::{initialize, Config, WidgetPhase};
///
/// let widget = initialize(&Config {
///     initially_expanded: true,
///     ..Default::default()
/// });
/// assert_eq!(widget.state().phase, WidgetPhase::Idle);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> WidgetController {
    tracing::debug!(?config, "initializing askbar widget");

    WidgetController::new(config.widget_settings(), config.load_theme())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
        assert_eq!(Config::default().widget_settings(), WidgetSettings::default());
    }

    #[test]
    fn typed_values_are_parsed() {
        let config = Config::from_zellij(&map(&[
            ("initially_expanded", "Yes"),
            ("search_delay_ms", " 1500 "),
            ("sources_delay_ms", "250"),
            ("max_suggestions", "2"),
            ("theme", "catppuccin-latte"),
            ("trace_level", "debug"),
        ]));

        assert!(config.initially_expanded);
        let settings = config.widget_settings();
        assert_eq!(settings.search_delay, Duration::from_millis(1500));
        assert_eq!(settings.sources_delay, Duration::from_millis(250));
        assert_eq!(settings.max_suggestions, 2);
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn bad_values_fall_back_to_defaults() {
        let config = Config::from_zellij(&map(&[
            ("initially_expanded", "maybe"),
            ("max_suggestions", "-1"),
        ]));
        assert!(!config.initially_expanded);
        assert_eq!(config.max_suggestions, 6);
    }

    #[test]
    fn parse_errors_name_the_key() {
        let err = parse_flag("initially_expanded", "maybe").unwrap_err();
        assert!(matches!(err, AskbarError::Config(ref msg) if msg.starts_with("initially_expanded")));
        assert!(parse_number::<u64>("search_delay_ms", "x").is_err());
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config {
            theme_name: Some("solarized".to_string()),
            ..Config::default()
        };
        assert_eq!(config.load_theme(), Theme::default());
    }

    #[test]
    fn missing_theme_file_falls_back_to_default() {
        let config = Config {
            theme_file: Some("/nonexistent/askbar-theme.toml".to_string()),
            theme_name: Some("catppuccin-latte".to_string()),
            ..Config::default()
        };
        assert_eq!(config.load_theme(), Theme::default());
    }

    #[test]
    fn initialize_honors_initially_expanded() {
        let widget = initialize(&Config::default());
        assert_eq!(widget.state().phase, WidgetPhase::Collapsed);
        assert!(!widget.state().is_open);
    }
}
