//! Status bar component.
//!
//! Displays keybindings and status messages at the bottom of the screen.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{ActiveTab, Component};

/// Key binding display item.
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyBinding {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

const BROWSE_BINDINGS: &[KeyBinding] = &[
    KeyBinding::new("1-5", "Tab"),
    KeyBinding::new("↑↓", "Nav"),
    KeyBinding::new("Enter", "Expand"),
    KeyBinding::new("c", "Copy email"),
    KeyBinding::new("?", "Help"),
    KeyBinding::new("q", "Quit"),
];

const SKILLS_BINDINGS: &[KeyBinding] = &[
    KeyBinding::new("1-5", "Tab"),
    KeyBinding::new("↑↓", "Nav"),
    KeyBinding::new("Enter", "Expand"),
    KeyBinding::new("a", "All"),
    KeyBinding::new("?", "Help"),
    KeyBinding::new("q", "Quit"),
];

const FORM_BINDINGS: &[KeyBinding] = &[
    KeyBinding::new("Tab", "Next field"),
    KeyBinding::new("Ctrl+S", "Send"),
    KeyBinding::new("Esc", "Leave"),
    KeyBinding::new("Ctrl+C", "Quit"),
];

/// Status bar showing keybindings and messages.
pub struct StatusBar {
    message: String,
    bindings: &'static [KeyBinding],
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            message: String::new(),
            bindings: BROWSE_BINDINGS,
        }
    }

    /// Set a status message.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Show the bindings relevant to `tab`.
    pub fn set_tab(&mut self, tab: ActiveTab) {
        self.bindings = match tab {
            ActiveTab::Skills => SKILLS_BINDINGS,
            ActiveTab::Contact => FORM_BINDINGS,
            _ => BROWSE_BINDINGS,
        };
    }
}

impl Component for StatusBar {
    fn draw(&mut self, frame: &mut Frame, area: Rect, _focused: bool) {
        let mut spans: Vec<Span> = Vec::new();

        for (i, binding) in self.bindings.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(
                format!(" {} ", binding.key),
                Style::default().fg(Color::Yellow),
            ));
            spans.push(Span::raw(binding.action));
        }

        if !self.message.is_empty() {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::styled(
                self.message.clone(),
                Style::default().fg(Color::Green),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        frame.render_widget(paragraph, area);
    }
}
