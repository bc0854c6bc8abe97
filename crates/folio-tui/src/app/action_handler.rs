//! Application action handling.

use std::sync::Arc;

use folio_core::contact::{SubmitOutcome, submit};
use folio_core::state::UiEvent;

use crate::action::AppAction;
use crate::components::clipboard::copy_to_clipboard;

use super::App;

impl App {
    pub(super) fn handle_action(&mut self, action: AppAction) {
        match action {
            AppAction::Quit => {
                self.should_quit = true;
            }
            AppAction::SwitchTab(tab) => {
                self.switch_to_tab(tab);
            }
            AppAction::NextTab => {
                self.switch_to_tab(self.active_tab.next());
            }
            AppAction::PreviousTab => {
                self.switch_to_tab(self.active_tab.previous());
            }
            AppAction::Ui(event) => {
                self.dispatch(event);
            }
            AppAction::SubmitContact => {
                let was_submitting = self.view.submitting;
                self.dispatch(UiEvent::SubmitRequested);
                if !was_submitting && self.view.submitting {
                    self.start_submission();
                }
            }
            AppAction::ContactFinished(outcome) => {
                self.dispatch(UiEvent::SubmitFinished(outcome));
                let message = match outcome {
                    SubmitOutcome::Sent => "Message sent",
                    SubmitOutcome::Failed => "Message not sent",
                };
                self.status_bar.set_message(message);
            }
            AppAction::CopyEmail => {
                let email = self.content.contact.email.clone();
                match copy_to_clipboard(&email) {
                    Ok(()) => self.status_bar.set_message(format!("Copied {}", email)),
                    Err(e) => {
                        log::warn!("Clipboard unavailable: {}", e);
                        self.status_bar.set_message(format!("Copy failed: {}", e));
                    }
                }
            }
        }
    }

    /// Send the current form on a background task. The outcome comes back
    /// as [`AppAction::ContactFinished`].
    fn start_submission(&mut self) {
        let tx = self.action_tx.clone();
        self.status_bar.set_message("Sending message...");

        let Some(relay) = self.relay.as_ref().map(Arc::clone) else {
            log::warn!("Contact relay is not configured; message dropped");
            let _ = tx.send(AppAction::ContactFinished(SubmitOutcome::Failed));
            return;
        };

        let form = self.view.form.clone();
        tokio::spawn(async move {
            let outcome = submit(relay.as_ref(), &form).await;
            let _ = tx.send(AppAction::ContactFinished(outcome));
        });
    }
}
