//! Defines the event structures sent from the session to the rendering layer.

use super::view_model::UiState;

/// Events delivered to the rendering collaborator through the
/// [`super::proxy::EventProxy`].
#[derive(Debug, Clone, PartialEq)]
pub enum UserEvent {
    /// A complete state snapshot to re-render the UI.
    StateUpdate(Box<UiState>),
    /// The aggregated text content for the current selection.
    ContentReady(String),
    /// An error message to be displayed to the user.
    Error(String),
}
