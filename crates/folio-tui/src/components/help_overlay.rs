//! Help overlay component.
//!
//! Displays a modal overlay showing all available keybindings.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Help overlay showing keybindings.
pub struct HelpOverlay;

impl HelpOverlay {
    const GLOBAL_KEYS: &'static [(&'static str, &'static str)] = &[
        ("q / Ctrl+C", "Quit application"),
        ("1-5", "Jump to tab"),
        ("Tab / Shift+Tab", "Next / previous tab"),
        ("c", "Copy contact email"),
        ("?", "Toggle help"),
    ];

    const BROWSE_KEYS: &'static [(&'static str, &'static str)] = &[
        ("↑ / k", "Move up"),
        ("↓ / j", "Move down"),
        ("Home / g", "First item"),
        ("End / G", "Last item"),
        ("Enter / Space", "Expand or collapse"),
        ("a", "Expand all skills"),
    ];

    const CONTACT_KEYS: &'static [(&'static str, &'static str)] = &[
        ("Tab / ↓", "Next field"),
        ("Shift+Tab / ↑", "Previous field"),
        ("Ctrl+S", "Send message"),
        ("Esc", "Back to Home"),
    ];

    fn section(lines: &mut Vec<Line<'static>>, title: &'static str, keys: &[(&str, &str)]) {
        lines.push(Line::from(Span::styled(
            format!("  {}", title),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from("  ──────────────────────────────────"));
        for (key, action) in keys {
            lines.push(Self::format_keybinding(key, action));
        }
        lines.push(Line::from(""));
    }

    /// Render the help overlay centered on screen.
    pub fn render(frame: &mut Frame, area: Rect) {
        let popup_area = Self::centered_rect(60, 80, area);
        frame.render_widget(Clear, popup_area);

        let mut lines: Vec<Line> = vec![Line::from("")];
        Self::section(&mut lines, "Global", Self::GLOBAL_KEYS);
        Self::section(&mut lines, "Browsing", Self::BROWSE_KEYS);
        Self::section(&mut lines, "Contact form", Self::CONTACT_KEYS);
        lines.push(Line::from(Span::styled(
            "  Press ? or Esc to close",
            Style::default().fg(Color::DarkGray),
        )));

        let help_text = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Help ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .alignment(Alignment::Left);

        frame.render_widget(help_text, popup_area);
    }

    fn format_keybinding(key: &str, action: &str) -> Line<'static> {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(
                format!("{:<16}", key),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(action.to_string()),
        ])
    }

    /// Calculate a centered rect with percentage-based dimensions.
    fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
        let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);

        let [area] = vertical.areas(area);
        let [area] = horizontal.areas(area);
        area
    }
}
