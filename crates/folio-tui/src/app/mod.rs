//! Application state and main loop.
//!
//! ## Module Structure
//! - `mod.rs`: App struct, initialization, drawing
//! - `action_handler.rs`: AppAction processing and relay submission
//! - `input_handler.rs`: Keyboard event processing

mod action_handler;
mod input_handler;

use std::sync::Arc;

use folio_core::contact::{EmailJsRelay, FormField, MailRelay};
use folio_core::content::Content;
use folio_core::layout::{LayoutConstants, LayoutMode};
use folio_core::state::{UiEvent, ViewState, reduce};
use folio_core::storage::config::Config;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tokio::sync::mpsc;

use crate::action::AppAction;
use crate::components::views::{self, ViewContext};
use crate::components::{ActiveTab, Component, HelpOverlay, StatusBar};
use crate::error::TuiResult;
use crate::event::{Event, EventHandler};
use crate::layout::main::{HEADER_HEIGHT, STATUS_BAR_HEIGHT};

/// The main application state.
pub struct App {
    pub should_quit: bool,
    pub(crate) active_tab: ActiveTab,
    /// Current UI snapshot; replaced on every event.
    pub(crate) view: ViewState,
    /// Gallery measurements in cells.
    pub(crate) constants: LayoutConstants,
    pub(crate) content: Content,
    /// `None` when the relay settings are incomplete.
    pub(crate) relay: Option<Arc<dyn MailRelay>>,
    pub(crate) status_bar: StatusBar,
    pub(crate) action_tx: mpsc::UnboundedSender<AppAction>,
    action_rx: mpsc::UnboundedReceiver<AppAction>,
    pub(crate) show_help: bool,
    pub(crate) skills_cursor: usize,
    pub(crate) experience_cursor: usize,
    pub(crate) project_cursor: usize,
    pub(crate) form_focus: FormField,
}

impl App {
    /// Build the app from the user's config file and environment.
    pub fn from_config() -> TuiResult<Self> {
        let config = Config::load(None).map_err(folio_core::AppError::from)?;
        let content = Content::load_or_builtin(config.content_path().as_deref())
            .map_err(folio_core::AppError::from)?;
        config
            .layout
            .validate()
            .map_err(folio_core::AppError::from)?;
        let constants = config.layout_constants(LayoutConstants::TERMINAL);

        let relay: Option<Arc<dyn MailRelay>> =
            match EmailJsRelay::new(&config.relay_settings(), &content.contact.email) {
                Ok(relay) => {
                    log::info!("Contact relay ready ({})", relay.endpoint());
                    Some(Arc::new(relay))
                }
                Err(e) => {
                    log::warn!("Contact form disabled: {}", e);
                    None
                }
            };

        Ok(Self::new(content, constants, relay))
    }

    pub fn new(
        content: Content,
        constants: LayoutConstants,
        relay: Option<Arc<dyn MailRelay>>,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            should_quit: false,
            active_tab: ActiveTab::Home,
            view: ViewState::default(),
            constants,
            content,
            relay,
            status_bar: StatusBar::new(),
            action_tx,
            action_rx,
            show_help: false,
            skills_cursor: 0,
            experience_cursor: 0,
            project_cursor: 0,
            form_focus: FormField::Name,
        }
    }

    /// Run the main application loop.
    pub async fn run_async(
        &mut self,
        terminal: &mut ratatui::Terminal<impl ratatui::backend::Backend>,
    ) -> TuiResult<()> {
        let event_handler = EventHandler::new(100);

        let size = terminal.size()?;
        self.dispatch(UiEvent::Mounted(u32::from(size.width)));

        while !self.should_quit {
            self.process_actions();

            terminal.draw(|frame| self.draw(frame))?;

            let event = event_handler.next()?;
            self.handle_event(event);

            // let spawned relay tasks make progress between polls
            tokio::task::yield_now().await;
        }

        log::info!("Exiting folio-tui");
        Ok(())
    }

    /// Apply one terminal event.
    pub(crate) fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key.code, key.modifiers),
            Event::Resize(width, _) => self.dispatch(UiEvent::Resized(u32::from(width))),
            Event::Tick => {}
        }
    }

    /// Drain actions sent by background tasks.
    fn process_actions(&mut self) {
        while let Ok(action) = self.action_rx.try_recv() {
            self.handle_action(action);
        }
    }

    /// Advance the view state by one event.
    pub(crate) fn dispatch(&mut self, event: UiEvent) {
        self.view = reduce(&self.view, event, &self.constants);
    }

    /// Cursor of the active list tab.
    pub(crate) fn cursor(&self) -> usize {
        match self.active_tab {
            ActiveTab::Skills => self.skills_cursor,
            ActiveTab::Experience => self.experience_cursor,
            ActiveTab::Projects => self.project_cursor,
            ActiveTab::Home | ActiveTab::Contact => 0,
        }
    }

    /// Switch to a specific tab.
    pub(crate) fn switch_to_tab(&mut self, tab: ActiveTab) {
        self.active_tab = tab;
        self.status_bar.set_tab(tab);
        if tab == ActiveTab::Contact && self.relay.is_none() {
            self.status_bar
                .set_message("Relay not configured: messages cannot be delivered");
        } else {
            self.status_bar.set_message(format!("Viewing: {}", tab.label()));
        }
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .split(size);

        self.draw_header_with_tabs(frame, main_chunks[0]);

        let ctx = ViewContext {
            content: &self.content,
            state: &self.view,
            constants: &self.constants,
            cursor: self.cursor(),
        };
        let body = main_chunks[1];
        match self.active_tab {
            ActiveTab::Home => views::home::render(frame, body, &ctx),
            ActiveTab::Skills => views::skills::render(frame, body, &ctx),
            ActiveTab::Experience => views::experience::render(frame, body, &ctx),
            ActiveTab::Projects => views::projects::render(frame, body, &ctx),
            ActiveTab::Contact => views::contact::render(frame, body, &ctx, self.form_focus),
        }

        self.status_bar.draw(frame, main_chunks[2], false);

        if self.show_help {
            HelpOverlay::render(frame, size);
        }
    }

    fn draw_header_with_tabs(&self, frame: &mut Frame, area: Rect) {
        let mut tab_spans: Vec<Span> = vec![Span::raw(" ")];

        for (i, tab) in ActiveTab::ALL.iter().enumerate() {
            let style = if *tab == self.active_tab {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::White)
            };
            tab_spans.push(Span::styled(format!(" {} {} ", i + 1, tab.label()), style));
            tab_spans.push(Span::raw(" "));
        }

        let layout_label = match self.view.layout {
            LayoutMode::Stacked => "stacked".to_string(),
            LayoutMode::Columns(alloc) => format!("{}+{} cols", alloc.left, alloc.right),
        };
        tab_spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
        tab_spans.push(Span::styled(
            format!(" {} ", layout_label),
            Style::default().fg(Color::DarkGray),
        ));

        let header = Paragraph::new(Line::from(tab_spans)).block(
            Block::default()
                .title(format!(" {} ", self.content.hero.name))
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(header, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use folio_core::contact::{ContactForm, SubmitOutcome};
    use folio_core::error::RelayError;
    use folio_core::layout::ColumnAllocation;
    use folio_core::state::SubmitStatus;
    use ratatui::{Terminal, backend::TestBackend};

    struct StubRelay {
        accept: bool,
    }

    #[async_trait]
    impl MailRelay for StubRelay {
        async fn send(&self, _form: &ContactForm) -> Result<(), RelayError> {
            if self.accept {
                Ok(())
            } else {
                Err(RelayError::Transport {
                    message: "connection refused".to_string(),
                })
            }
        }
    }

    fn app_with(relay: Option<Arc<dyn MailRelay>>) -> App {
        let content = Content::builtin().expect("builtin content");
        let mut app = App::new(content, LayoutConstants::TERMINAL, relay);
        app.dispatch(UiEvent::Mounted(200));
        app
    }

    fn app() -> App {
        app_with(None)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn ctrl(app: &mut App, ch: char) {
        app.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char(ch),
            KeyModifiers::CONTROL,
        )));
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    fn fill_form(app: &mut App) {
        app.switch_to_tab(ActiveTab::Contact);
        type_text(app, "Ada");
        press(app, KeyCode::Tab);
        type_text(app, "ada@example.com");
        press(app, KeyCode::Tab);
        type_text(app, "Radar");
        press(app, KeyCode::Tab);
        type_text(app, "Hello there");
    }

    fn render(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        terminal.draw(|frame| app.draw(frame)).expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_every_tab_renders() {
        let mut app = app();
        for tab in ActiveTab::ALL {
            app.switch_to_tab(tab);
            let screen = render(&mut app, 200, 50);
            assert!(screen.contains(tab.label()), "{:?}", tab);
        }
    }

    #[test]
    fn test_projects_tab_shows_side_columns() {
        let mut app = app();
        app.switch_to_tab(ActiveTab::Projects);
        assert_eq!(
            app.view.layout,
            LayoutMode::Columns(ColumnAllocation { left: 1, right: 1 })
        );
        let screen = render(&mut app, 200, 50);
        assert!(screen.contains("Ionic Thruster"));
        assert!(screen.contains("1+1 cols"));
    }

    #[test]
    fn test_narrow_terminal_renders_stacked() {
        let mut app = app();
        app.handle_event(Event::Resize(60, 30));
        app.switch_to_tab(ActiveTab::Projects);
        assert!(app.view.layout.is_stacked());
        let screen = render(&mut app, 60, 30);
        assert!(screen.contains("Ionic Thruster"));
    }

    #[test]
    fn test_resize_recomputes_layout() {
        let mut app = app();
        app.handle_event(Event::Resize(100, 40));
        assert_eq!(app.view.layout, LayoutMode::Columns(ColumnAllocation::NONE));
        app.handle_event(Event::Resize(80, 40));
        assert!(app.view.layout.is_stacked());
        app.handle_event(Event::Resize(188, 40));
        assert_eq!(app.view.layout.allocation().left, 1);
    }

    #[test]
    fn test_enter_toggles_project_under_cursor() {
        let mut app = app();
        app.switch_to_tab(ActiveTab::Projects);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        let id = app.content.projects[2].id;

        press(&mut app, KeyCode::Enter);
        assert!(app.view.expanded_projects.contains(&id));
        press(&mut app, KeyCode::Enter);
        assert!(!app.view.expanded_projects.contains(&id));
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut app = app();
        app.switch_to_tab(ActiveTab::Experience);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.experience_cursor, 0);
        press(&mut app, KeyCode::End);
        assert_eq!(app.experience_cursor, app.content.experiences.len() - 1);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.experience_cursor, app.content.experiences.len() - 1);
    }

    #[test]
    fn test_skills_group_toggle() {
        let mut app = app();
        app.switch_to_tab(ActiveTab::Skills);
        press(&mut app, KeyCode::Enter);
        assert!(app.view.expanded_skills.contains(&app.content.skills[0].id));

        press(&mut app, KeyCode::Char('a'));
        assert!(app.view.expanded_skills.is_group_open());
        let screen = render(&mut app, 120, 60);
        assert!(screen.contains("all expanded"));

        press(&mut app, KeyCode::Char('a'));
        assert!(app.view.expanded_skills.is_empty());
    }

    #[test]
    fn test_number_keys_switch_tabs() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.active_tab, ActiveTab::Projects);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.active_tab, ActiveTab::Experience);
    }

    #[test]
    fn test_form_captures_letters() {
        let mut app = app();
        app.switch_to_tab(ActiveTab::Contact);
        type_text(&mut app, "q1?");
        assert!(!app.should_quit);
        assert_eq!(app.active_tab, ActiveTab::Contact);
        assert_eq!(app.view.form.name, "q1?");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.view.form.name, "q1");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.active_tab, ActiveTab::Home);
    }

    #[test]
    fn test_message_field_accepts_newlines() {
        let mut app = app();
        app.switch_to_tab(ActiveTab::Contact);
        app.form_focus = FormField::Message;
        type_text(&mut app, "line one");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "line two");
        assert_eq!(app.view.form.message, "line one\nline two");
    }

    #[test]
    fn test_invalid_form_is_not_sent() {
        let mut app = app();
        app.switch_to_tab(ActiveTab::Contact);
        type_text(&mut app, "Ada");
        ctrl(&mut app, 's');
        assert!(!app.view.submitting);
        assert!(matches!(
            app.view.submit_status,
            Some(SubmitStatus::Invalid(_))
        ));
    }

    #[test]
    fn test_ctrl_c_quits_from_form() {
        let mut app = app();
        app.switch_to_tab(ActiveTab::Contact);
        ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_submit_success_clears_form() {
        let mut app = app_with(Some(Arc::new(StubRelay { accept: true })));
        fill_form(&mut app);
        ctrl(&mut app, 's');
        assert!(app.view.submitting);

        // a second request while in flight is ignored
        ctrl(&mut app, 's');

        let action = app.action_rx.recv().await.expect("relay result");
        assert_eq!(action, AppAction::ContactFinished(SubmitOutcome::Sent));
        app.handle_action(action);

        assert!(!app.view.submitting);
        assert_eq!(app.view.form, ContactForm::default());
        let screen = render(&mut app, 120, 40);
        assert!(screen.contains("Thanks! Your message has been sent."));
        assert!(app.action_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_submit_failure_keeps_fields() {
        let mut app = app_with(Some(Arc::new(StubRelay { accept: false })));
        fill_form(&mut app);
        ctrl(&mut app, 's');

        let action = app.action_rx.recv().await.expect("relay result");
        assert_eq!(action, AppAction::ContactFinished(SubmitOutcome::Failed));
        app.handle_action(action);

        assert!(app.view.can_submit());
        assert_eq!(app.view.form.name, "Ada");
        assert_eq!(app.view.submit_status, Some(SubmitStatus::Failed));
    }

    #[tokio::test]
    async fn test_submit_without_relay_fails() {
        let mut app = app();
        fill_form(&mut app);
        ctrl(&mut app, 's');

        let action = app.action_rx.recv().await.expect("result");
        assert_eq!(action, AppAction::ContactFinished(SubmitOutcome::Failed));
    }
}
