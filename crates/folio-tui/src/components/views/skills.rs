//! Skills tab: expandable skill categories.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{ViewContext, scroll_to};
use crate::components::styles::{self, TEXT_DIM, TEXT_TAG};

pub fn render(frame: &mut Frame, area: Rect, ctx: &ViewContext) {
    let expanded = &ctx.state.expanded_skills;
    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_line = 0;

    for (i, category) in ctx.content.skills.iter().enumerate() {
        let is_open = expanded.is_expanded(&category.id);
        let selected = i == ctx.cursor;
        if selected {
            cursor_line = lines.len();
        }

        let header = format!(
            "{}{} ({})",
            styles::disclosure(is_open),
            category.title,
            category.skills.len()
        );
        let header_style = if selected {
            styles::selected_style()
        } else {
            styles::header_style()
        };
        lines.push(Line::from(Span::styled(header, header_style)));

        if is_open {
            for skill in &category.skills {
                let used_in = ctx.content.projects_for_skill(&skill.name).len();
                let mut spans = vec![Span::raw("    "), Span::styled(skill.name.clone(), TEXT_TAG)];
                if used_in > 0 {
                    spans.push(Span::styled(
                        format!("  {} project{}", used_in, if used_in == 1 { "" } else { "s" }),
                        TEXT_DIM,
                    ));
                }
                lines.push(Line::from(spans));
            }
        }
    }

    let title = if expanded.is_group_open() {
        " Skills (all expanded) "
    } else {
        " Skills "
    };
    let height = area.height.saturating_sub(2);
    let paragraph = Paragraph::new(lines)
        .scroll((scroll_to(cursor_line, height), 0))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(styles::border_style(true)),
        );
    frame.render_widget(paragraph, area);
}
