//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the zhelf library
//! and the Zellij plugin system. It implements the `ZellijPlugin` trait to
//! handle Zellij events and lifecycle.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize logging, create `AppState`
//! 2. **Subscribe**: Register for `Key` and `PermissionRequestResult` events
//! 3. **Update**: Translate key events per input mode, delegate to the library
//! 4. **Render**: Call the library render function
//!
//! # Event Mapping
//!
//! Zellij key events are translated to library events based on the active
//! input mode, so the same key can mean different things in the table, the
//! add-book form, and the status dialog.
//!
//! # Keybindings
//!
//! In browse mode:
//! - `j`/`Down`, `k`/`Up` (also `Ctrl+n`/`Ctrl+p`): move the cursor
//! - `a`: open the add-book form
//! - `Enter`/`e`: open the status dialog for the selected book
//! - `d`: remove the selected book
//! - `q`: close the plugin pane
//!
//! In the add-book form:
//! - `Tab`/`Down` (`Ctrl+n`), `Shift+Tab`/`Up` (`Ctrl+p`): move field focus
//! - `Left`/`Right`: cycle the status choice
//! - printable keys / `Backspace`: edit the focused text field
//! - `Enter`: validate and add the book
//! - `Esc`: close the form (typed values are kept)
//!
//! In the status dialog:
//! - `j`/`Down`, `k`/`Up`: cycle the candidate status
//! - `Enter`: commit the new status
//! - `Esc`: cancel

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use zhelf::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with the Zellij-specific event translation.
struct State {
    /// Core application state from the library layer.
    app: zhelf::app::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: zhelf::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Called once during plugin startup. Parses configuration, initializes
    /// logging and application state, requests permissions, and subscribes to
    /// events.
    ///
    /// # Permissions
    ///
    /// Requests `ChangeApplicationState`, needed only to hide the plugin pane
    /// when the user quits. The widget itself touches nothing outside its own
    /// pane.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zhelf::observability::init_logging(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(theme = ?config.theme_name, "plugin loading started");
        self.app = zhelf::initialize(&config);

        request_permission(&[PermissionType::ChangeApplicationState]);

        subscribe(&[EventType::Key, EventType::PermissionRequestResult]);

        tracing::debug!("plugin load complete");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates key events to library events, delegates to `handle_event`,
    /// and executes resulting actions. Returns `true` if the UI should
    /// re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let span = tracing::debug_span!("plugin_update");
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                match status {
                    PermissionStatus::Granted => {
                        tracing::debug!("permissions granted");
                    }
                    PermissionStatus::Denied => {
                        tracing::warn!("permissions denied - closing the pane will not work");
                    }
                }
                return true;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                for action in actions {
                    self.execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI.
    ///
    /// Delegates to the library's rendering layer.
    fn render(&mut self, rows: usize, cols: usize) {
        zhelf::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Maps keyboard events to application events based on the input mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, mode = ?self.app.input_mode, "key event");

        match self.app.input_mode {
            InputMode::Browse => Self::map_browse_key(key),
            InputMode::AddBook => Self::map_form_key(key),
            InputMode::EditStatus(_) => Self::map_dialog_key(key),
        }
    }

    /// Key mapping for table navigation.
    fn map_browse_key(key: &KeyWithModifier) -> Option<Event> {
        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Char('a') => Event::OpenAddForm,
            BareKey::Enter | BareKey::Char('e') => Event::OpenStatusEdit,
            BareKey::Char('d') => Event::RemoveBook,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Key mapping while the add-book form is open.
    fn map_form_key(key: &KeyWithModifier) -> Option<Event> {
        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::NextField);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::PrevField);
        }
        if key.bare_key == BareKey::Tab && key.has_modifiers(&[KeyModifier::Shift]) {
            return Some(Event::PrevField);
        }

        Some(match key.bare_key {
            BareKey::Tab | BareKey::Down => Event::NextField,
            BareKey::Up => Event::PrevField,
            BareKey::Left => Event::CycleChoiceBackward,
            BareKey::Right => Event::CycleChoiceForward,
            BareKey::Enter => Event::SubmitForm,
            BareKey::Esc => Event::Cancel,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    /// Key mapping while the status dialog is open.
    fn map_dialog_key(key: &KeyWithModifier) -> Option<Event> {
        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::CycleChoiceForward);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::CycleChoiceBackward);
        }

        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::CycleChoiceForward,
            BareKey::Up | BareKey::Char('k') => Event::CycleChoiceBackward,
            BareKey::Enter => Event::ConfirmStatus,
            BareKey::Esc => Event::Cancel,
            _ => return None,
        })
    }

    /// Executes an action returned from event handling.
    fn execute_action(&self, action: Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
        }
    }
}
