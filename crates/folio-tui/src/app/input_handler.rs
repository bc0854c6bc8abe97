//! Keyboard input handling.
//!
//! Order of precedence: quit chord, help overlay, contact form, global
//! keys, then list navigation on the active tab.

use crossterm::event::{KeyCode, KeyModifiers};
use folio_core::contact::FormField;
use folio_core::state::UiEvent;

use crate::action::AppAction;
use crate::components::ActiveTab;

use super::App;

/// Rows moved by PageUp / PageDown on the Home tab.
const PAGE_ROWS: u32 = 10;

impl App {
    pub(super) fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.handle_action(AppAction::Quit);
            return;
        }

        if self.handle_overlay_keys(code) {
            return;
        }

        if self.active_tab == ActiveTab::Contact {
            self.handle_form_keys(code, modifiers);
            return;
        }

        if self.handle_global_keys(code) {
            return;
        }

        self.handle_browse_keys(code);
    }

    /// Returns true if the key was consumed by an overlay.
    fn handle_overlay_keys(&mut self, code: KeyCode) -> bool {
        if !self.show_help {
            return false;
        }
        if matches!(code, KeyCode::Char('?') | KeyCode::Esc) {
            self.show_help = false;
        }
        true
    }

    /// Quit, help, tab switching, clipboard. Returns true if handled.
    fn handle_global_keys(&mut self, code: KeyCode) -> bool {
        let action = match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => AppAction::Quit,
            KeyCode::Char('?') => {
                self.show_help = true;
                return true;
            }
            KeyCode::Char(ch @ '1'..='5') => {
                let index = ch as usize - '1' as usize;
                AppAction::SwitchTab(ActiveTab::from_index(index))
            }
            KeyCode::Tab => AppAction::NextTab,
            KeyCode::BackTab => AppAction::PreviousTab,
            KeyCode::Char('c') => AppAction::CopyEmail,
            _ => return false,
        };
        self.handle_action(action);
        true
    }

    fn item_count(&self) -> usize {
        match self.active_tab {
            ActiveTab::Skills => self.content.skills.len(),
            ActiveTab::Experience => self.content.experiences.len(),
            ActiveTab::Projects => self.content.projects.len(),
            ActiveTab::Home | ActiveTab::Contact => 0,
        }
    }

    fn set_cursor(&mut self, index: usize) {
        let last = self.item_count().saturating_sub(1);
        let index = index.min(last);
        match self.active_tab {
            ActiveTab::Skills => self.skills_cursor = index,
            ActiveTab::Experience => self.experience_cursor = index,
            ActiveTab::Projects => self.project_cursor = index,
            ActiveTab::Home | ActiveTab::Contact => {}
        }
    }

    fn scroll_by(&mut self, delta: i64) {
        let offset = (i64::from(self.view.scroll_offset) + delta).max(0);
        let offset = u32::try_from(offset).unwrap_or(u32::MAX);
        self.handle_action(AppAction::Ui(UiEvent::Scrolled(offset)));
    }

    fn handle_browse_keys(&mut self, code: KeyCode) {
        if self.active_tab == ActiveTab::Home {
            match code {
                KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
                KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
                KeyCode::PageUp => self.scroll_by(-i64::from(PAGE_ROWS)),
                KeyCode::PageDown => self.scroll_by(i64::from(PAGE_ROWS)),
                KeyCode::Home | KeyCode::Char('g') => self.scroll_by(-i64::from(u32::MAX)),
                _ => {}
            }
            return;
        }

        let cursor = self.cursor();
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.set_cursor(cursor.saturating_sub(1)),
            KeyCode::Down | KeyCode::Char('j') => self.set_cursor(cursor + 1),
            KeyCode::Home | KeyCode::Char('g') => self.set_cursor(0),
            KeyCode::End | KeyCode::Char('G') => self.set_cursor(usize::MAX),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_under_cursor(),
            KeyCode::Char('a') if self.active_tab == ActiveTab::Skills => {
                self.handle_action(AppAction::Ui(UiEvent::ToggleAllSkills));
            }
            _ => {}
        }
    }

    fn toggle_under_cursor(&mut self) {
        let cursor = self.cursor();
        let event = match self.active_tab {
            ActiveTab::Skills => self.content.skills.get(cursor).map(|c| UiEvent::ToggleSkill(c.id)),
            ActiveTab::Experience => self
                .content
                .experiences
                .get(cursor)
                .map(|e| UiEvent::ToggleExperience(e.id)),
            ActiveTab::Projects => self
                .content
                .projects
                .get(cursor)
                .map(|p| UiEvent::ToggleProject(p.id)),
            ActiveTab::Home | ActiveTab::Contact => None,
        };
        if let Some(event) = event {
            self.handle_action(AppAction::Ui(event));
        }
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        let mut value = self.view.form.field(self.form_focus).to_string();
        edit(&mut value);
        self.handle_action(AppAction::Ui(UiEvent::EditField(self.form_focus, value)));
    }

    fn handle_form_keys(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            if code == KeyCode::Char('s') {
                self.handle_action(AppAction::SubmitContact);
            }
            return;
        }

        match code {
            KeyCode::Esc => self.handle_action(AppAction::SwitchTab(ActiveTab::Home)),
            KeyCode::Tab | KeyCode::Down => self.form_focus = self.form_focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.form_focus = self.form_focus.previous(),
            // fields are locked while a message is in flight
            _ if self.view.submitting => {}
            KeyCode::Enter if self.form_focus == FormField::Message => {
                self.edit_focused(|v| v.push('\n'));
            }
            KeyCode::Enter => self.form_focus = self.form_focus.next(),
            KeyCode::Backspace => self.edit_focused(|v| {
                v.pop();
            }),
            KeyCode::Char(ch) => self.edit_focused(|v| v.push(ch)),
            _ => {}
        }
    }
}
