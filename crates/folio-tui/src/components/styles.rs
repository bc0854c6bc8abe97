//! Shared style definitions for TUI components.

use ratatui::style::{Color, Modifier, Style};

// === Border Styles ===

/// Border style for focused components.
pub const BORDER_FOCUSED: Style = Style::new().fg(Color::Cyan);

/// Border style for unfocused components.
pub const BORDER_UNFOCUSED: Style = Style::new().fg(Color::DarkGray);

/// Get border style based on focus state.
#[inline]
pub fn border_style(focused: bool) -> Style {
    if focused {
        BORDER_FOCUSED
    } else {
        BORDER_UNFOCUSED
    }
}

/// Section and panel headings.
pub fn header_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Style for the item under the cursor.
pub fn selected_style() -> Style {
    Style::default()
        .bg(Color::Blue)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

// === Text Styles ===

/// Style for dimmed/hint text.
pub const TEXT_DIM: Style = Style::new().fg(Color::DarkGray);

/// Style for warning/in-progress text.
pub const TEXT_WARNING: Style = Style::new().fg(Color::Yellow);

/// Style for error text.
pub const TEXT_ERROR: Style = Style::new().fg(Color::Red);

/// Style for success text.
pub const TEXT_SUCCESS: Style = Style::new().fg(Color::Green);

/// Style for skill tags.
pub const TEXT_TAG: Style = Style::new().fg(Color::Magenta);

/// Style for bold white text.
pub fn text_bold_white() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

// === Input Styles ===

/// Style for cursor indicator.
pub fn cursor_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK)
}

/// Style for input text.
pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}

/// Parse a `#rrggbb` color; anything else yields `None`.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Expansion marker for collapsible items.
pub fn disclosure(expanded: bool) -> &'static str {
    if expanded { "▾ " } else { "▸ " }
}
