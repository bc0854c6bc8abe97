//! Experience tab: roles and education, expandable for detail.

use folio_core::content::PLACEHOLDER_GLYPH;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::{ViewContext, scroll_to};
use crate::components::styles::{self, TEXT_DIM};

pub fn render(frame: &mut Frame, area: Rect, ctx: &ViewContext) {
    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_line = 0;

    for (i, exp) in ctx.content.experiences.iter().enumerate() {
        let is_open = ctx.state.expanded_experiences.is_expanded(&exp.id);
        let selected = i == ctx.cursor;
        if selected {
            cursor_line = lines.len();
        }

        let title_style = if selected {
            styles::selected_style()
        } else {
            styles::header_style()
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}{}", styles::disclosure(is_open), exp.title),
                title_style,
            ),
            Span::styled(format!("  {}", exp.period), TEXT_DIM),
        ]));

        let logo = if exp.logo.is_some() { "▣" } else { PLACEHOLDER_GLYPH };
        let kind = if exp.is_education { "  (education)" } else { "" };
        lines.push(Line::from(vec![
            Span::raw(format!("  {} {}", logo, exp.company)),
            Span::styled(kind, TEXT_DIM),
        ]));

        if is_open {
            if !exp.description.is_empty() {
                lines.push(Line::from(format!("    {}", exp.description)));
            }
            for item in &exp.responsibilities {
                lines.push(Line::from(format!("    • {}", item)));
            }
        }
        lines.push(Line::from(""));
    }

    let height = area.height.saturating_sub(2);
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll_to(cursor_line + 1, height), 0))
        .block(
            Block::default()
                .title(" Experience ")
                .borders(Borders::ALL)
                .border_style(styles::border_style(true)),
        );
    frame.render_widget(paragraph, area);
}
