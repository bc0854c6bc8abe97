//! Application actions.
//!
//! Input handlers and background tasks never touch the view state
//! directly; they send an [`AppAction`] and the app applies it on the next
//! loop iteration.

use folio_core::contact::SubmitOutcome;
use folio_core::state::UiEvent;

use crate::components::ActiveTab;

#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    Quit,
    /// Switch to a specific tab
    SwitchTab(ActiveTab),
    NextTab,
    PreviousTab,
    /// Feed an event to the view-state reducer
    Ui(UiEvent),
    /// Validate the contact form and, if valid, send it
    SubmitContact,
    /// The relay call finished
    ContactFinished(SubmitOutcome),
    /// Copy the contact address to the clipboard
    CopyEmail,
}
