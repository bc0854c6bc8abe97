//! Home tab: hero, about text and footer.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::ViewContext;
use crate::components::styles::{self, TEXT_DIM};

pub fn render(frame: &mut Frame, area: Rect, ctx: &ViewContext) {
    let content = ctx.content;
    let hero = &content.hero;
    let about = &content.about;

    let name_color = hero
        .name_color
        .as_deref()
        .and_then(styles::parse_hex_color)
        .unwrap_or(Color::Cyan);

    let mut lines: Vec<Line> = vec![
        Line::from(""),
        Line::from(Span::styled(
            hero.name.clone(),
            Style::default().fg(name_color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(hero.subtitle.clone(), styles::text_bold_white())),
    ];
    if !hero.secondary_subtitle.is_empty() {
        lines.push(Line::from(Span::styled(
            hero.secondary_subtitle.clone(),
            TEXT_DIM,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        about.title.clone(),
        styles::header_style(),
    )));
    for paragraph in [&about.greeting, &about.description, &about.interests] {
        if !paragraph.is_empty() {
            lines.push(Line::from(paragraph.clone()));
            lines.push(Line::from(""));
        }
    }
    for point in &about.points {
        lines.push(Line::from(format!("  • {}", point)));
    }
    if !about.closing.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(about.closing.clone()));
    }
    if !about.contact_links.is_empty() {
        lines.push(Line::from(""));
        for link in &about.contact_links {
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", link.label), styles::header_style()),
                Span::raw(link.url.clone()),
            ]));
        }
    }

    lines.push(Line::from(""));
    for social in &content.footer.social_links {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<10}", social.name), TEXT_DIM),
            Span::raw(social.url.clone()),
        ]));
    }
    lines.push(Line::from(Span::styled(
        content.footer.copyright.clone(),
        TEXT_DIM,
    )));

    let offset = u16::try_from(ctx.state.scroll_offset).unwrap_or(u16::MAX);
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((offset, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styles::border_style(true)),
        );
    frame.render_widget(paragraph, area);
}
