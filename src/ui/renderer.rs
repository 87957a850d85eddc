//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view model
//! computation and delegation to UI components. It picks the layout for the
//! active input mode (browse, add-book form, status-edit dialog).
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UiViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UiViewModel;

/// Renders the plugin UI to stdout.
///
/// Computes the view model from application state and delegates to the
/// layout matching the open dialog (if any).
///
/// # Parameters
///
/// * `state` - Current application state
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
///
/// # Output
///
/// Prints ANSI-styled output to stdout using `print!` macros. Does not clear
/// the screen or manage cursor position beyond explicit positioning.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

/// Renders a view model with mode-specific layout.
///
/// Chooses the rendering strategy from the view model contents: the form box
/// layout when the add-book dialog is open, the status box layout when the
/// status-edit dialog is open, and the plain table layout otherwise.
fn render_viewmodel(vm: &UiViewModel, theme: &Theme, rows: usize, cols: usize) {
    if let Some(form) = &vm.form {
        components::render_form_mode(vm, form, theme, cols, rows);
    } else if let Some(dialog) = &vm.status_dialog {
        components::render_status_mode(vm, dialog, theme, cols, rows);
    } else {
        components::render_browse_mode(vm, theme, cols, rows);
    }
}
