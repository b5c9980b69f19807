//! Actions returned by screen event handlers.

use crate::model::{TeamSummary, WarOrder};

use super::app::Screen;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to update session state and navigate between
/// screens.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Navigate to the given screen.
    Navigate(Screen),
    /// Dispatch a completed war order to the session.
    SubmitOrder(WarOrder),
    /// Create a new team and make it selectable.
    CreateTeam(TeamSummary),
    /// Quit the application.
    Quit,
}
