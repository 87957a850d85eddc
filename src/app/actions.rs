//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing user input. Actions bridge
//! pure state transformations and effectful operations on the host.
//!
//! The widget itself is purely in-memory, so the only side effect that ever
//! leaves the library layer is closing the plugin pane; everything else the
//! handler does is a state mutation followed by a re-render.

/// Commands representing side effects to be executed by the plugin runtime.
///
/// Actions are produced by the event handler and executed by the plugin shim.
/// They represent the boundary between pure state transformations and host
/// API calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    ///
    /// Sent when the user explicitly requests to exit the plugin (pressing
    /// `q` in browse mode).
    CloseFocus,
}
