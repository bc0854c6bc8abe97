//! Contact tab: the four-field form and the relay outcome.

use folio_core::contact::FormField;
use folio_core::state::SubmitStatus;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::ViewContext;
use crate::components::styles::{self, TEXT_DIM, TEXT_ERROR, TEXT_SUCCESS, TEXT_WARNING};
use crate::layout::contact_form::{INPUT_HEIGHT, MESSAGE_MIN_HEIGHT};

const INFO_PANEL_WIDTH: u16 = 36;
const INFO_PANEL_MIN_TOTAL: u16 = 90;

pub fn render(frame: &mut Frame, area: Rect, ctx: &ViewContext, focus: FormField) {
    let (form_area, info_area) = if area.width >= INFO_PANEL_MIN_TOTAL {
        let [form, info] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(INFO_PANEL_WIDTH)])
                .areas(area);
        (form, Some(info))
    } else {
        (area, None)
    };

    let [name, email, subject, message, status] = Layout::vertical([
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Min(MESSAGE_MIN_HEIGHT),
        Constraint::Length(3),
    ])
    .areas(form_area);

    for (field, slot) in [
        (FormField::Name, name),
        (FormField::Email, email),
        (FormField::Subject, subject),
        (FormField::Message, message),
    ] {
        render_input(frame, slot, ctx, field, field == focus);
    }

    render_status(frame, status, ctx);

    if let Some(info_area) = info_area {
        render_info(frame, info_area, ctx);
    }
}

fn render_input(frame: &mut Frame, area: Rect, ctx: &ViewContext, field: FormField, focused: bool) {
    let value = ctx.state.form.field(field);
    let mut spans = vec![Span::styled(value.to_string(), styles::input_text_style())];
    if focused && !ctx.state.submitting {
        spans.push(Span::styled("▏", styles::cursor_style()));
    }

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused));

    let lines: Vec<Line> = if field == FormField::Message {
        // one Line per typed line, cursor on the last
        let mut lines: Vec<Line> = value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), styles::input_text_style())))
            .collect();
        if focused && !ctx.state.submitting {
            if let Some(last) = lines.last_mut() {
                last.push_span(Span::styled("▏", styles::cursor_style()));
            }
        }
        lines
    } else {
        vec![Line::from(spans)]
    };

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

fn render_status(frame: &mut Frame, area: Rect, ctx: &ViewContext) {
    let state = ctx.state;
    let line = if state.submitting {
        Line::from(Span::styled("Sending…", TEXT_WARNING))
    } else {
        let style = match state.submit_status {
            Some(SubmitStatus::Sent) => TEXT_SUCCESS,
            Some(SubmitStatus::Failed) | Some(SubmitStatus::Invalid(_)) => TEXT_ERROR,
            None => TEXT_DIM,
        };
        let text = state
            .status_message(&ctx.content.contact.email)
            .unwrap_or_else(|| "Ctrl+S to send".to_string());
        Line::from(Span::styled(text, style))
    };

    frame.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), area);
}

fn render_info(frame: &mut Frame, area: Rect, ctx: &ViewContext) {
    let contact = &ctx.content.contact;
    let mut lines = vec![
        Line::from(Span::styled("Email", styles::header_style())),
        Line::from(contact.email.clone()),
    ];
    if let Some(ref website) = contact.website {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Website", styles::header_style())));
        lines.push(Line::from(website.clone()));
    }
    if !ctx.content.footer.social_links.is_empty() {
        lines.push(Line::from(""));
        for social in &ctx.content.footer.social_links {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<10}", social.name), TEXT_DIM),
                Span::raw(social.url.clone()),
            ]));
        }
    }

    let block = Block::default()
        .title(" Reach me ")
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}
