//! Zhelf: A Zellij plugin for tracking a reading list.
//!
//! Zhelf is a terminal multiplexer plugin that renders a book library widget
//! inside a pane:
//! - Add books (title, author, pages, reading status) through a modal form
//!   with per-field validation messages
//! - Browse the list as a table with VIM-like keybindings
//! - Change a book's reading status through a modal dialog
//! - Remove books from the list
//!
//! The list is purely in-memory: nothing is persisted, nothing leaves the
//! plugin pane. The entire widget is driven by key events delivered one at a
//! time by the Zellij event loop.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Dialog state transitions                         │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!            │                          │
//! ┌────────────────────┐   ┌──────────────────────────┐
//! │ UI Layer (ui/)     │   │ Domain Layer (domain/)   │
//! │ - Rendering        │   │ - Book, Library          │
//! │ - Theming          │   │ - Draft validation       │
//! │ - Components       │   │ - Error types            │
//! └────────────────────┘   └──────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Observability                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - File-based logging (observability/)             │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event handling
//! - [`domain`]: Core domain types (Book, Library, validation, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: Tracing initialization (file-based logging)
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/zhelf.wasm" {
//!         theme "catppuccin-mocha"
//!         log_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use zhelf::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//!
//! // Open the add-book form and type into the title field
//! handle_event(&mut state, &Event::OpenAddForm)?;
//! handle_event(&mut state, &Event::Char('D'))?;
//! # Ok::<(), zhelf::ZhelfError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, FormField, InputMode, StatusEdit};
pub use domain::{Book, BookDraft, BookId, Library, ReadingStatus, Result, ZhelfError};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Configuration values are provided via Zellij's KDL layout configuration
/// and passed to the plugin during initialization. Every option is optional.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/zhelf.wasm" {
///     theme "catppuccin-latte"
///     theme_file "/path/to/theme.toml"
///     log_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`. Ignored if
    /// `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Log filter level for the tracing pipeline.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub log_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Zellij provides configuration as a `BTreeMap<String, String>` during
    /// plugin initialization. Unknown keys are ignored; missing keys fall
    /// back to defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zhelf::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// assert!(config.log_level.is_none());
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        Self {
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            log_level: config.get("log_level").cloned(),
        }
    }
}

/// Initializes the plugin with configuration.
///
/// Creates a new [`AppState`] with an empty library and the resolved theme:
/// a custom theme file when configured, then a built-in theme by name, then
/// the default. Theme failures degrade to the default theme and are logged,
/// never fatal.
///
/// # Example
///
/// ```rust
/// use zhelf::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// assert!(state.library.is_empty());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing zhelf plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme name, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parses_known_keys_and_ignores_the_rest() {
        let mut map = BTreeMap::new();
        map.insert("theme".to_string(), "catppuccin-mocha".to_string());
        map.insert("log_level".to_string(), "debug".to_string());
        map.insert("scan_depth".to_string(), "4".to_string());

        let config = Config::from_zellij(&map);
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-mocha"));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert!(config.theme_file.is_none());
    }

    #[test]
    fn initialize_falls_back_to_the_default_theme() {
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Config::default()
        };

        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-mocha");
        assert!(state.library.is_empty());
    }

    #[test]
    fn initialize_honors_a_known_theme_name() {
        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            ..Config::default()
        };

        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-latte");
    }
}
