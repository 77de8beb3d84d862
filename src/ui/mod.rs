//! User interface rendering layer with component-based architecture.
//!
//! Transforms widget state into ANSI-styled output through composable
//! rendering components, and records where everything clickable landed.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//!                                                  ↓
//!                                             WidgetLayout (hit regions, boundary)
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types, one variant per presentation slot
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`layout`]: Hit regions and panel geometry
//! - [`helpers`]: Shared rendering utilities (highlighting, wrapping)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use layout::{HitTarget, WidgetLayout};
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    AnswerInfo, AutocompleteItem, FooterInfo, HeaderInfo, SearchBarInfo, SearchBarKind,
    SearchingInfo, SourceItem, SourcesInfo, UIViewModel, WidgetView,
};
