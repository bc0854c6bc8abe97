//! Projects tab: the responsive gallery.
//!
//! Wide terminals show the center group (pinned projects, about panel,
//! experience panel) flanked by side columns, with every remaining project
//! in a grid below. Narrow terminals stack every project in one list.

use std::ops::Range;

use folio_core::content::{PLACEHOLDER_GLYPH, Project};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::ViewContext;
use crate::components::styles::{self, TEXT_DIM, TEXT_TAG};
use crate::layout::gallery::{COLUMN_ROW_MIN, COLUMN_ROW_PERCENT, GRID_TILE_HEIGHT};

pub fn render(frame: &mut Frame, area: Rect, ctx: &ViewContext) {
    let projects = &ctx.content.projects;
    let placement = ctx.state.placement(projects.len());

    if ctx.state.layout.is_stacked() {
        render_grid(frame, area, ctx, placement.fallback.clone(), 1);
        return;
    }

    let (columns_area, grid_area) = if placement.fallback.is_empty() {
        (area, None)
    } else {
        let column_height = column_row_height(area.height);
        let [top, bottom] =
            Layout::vertical([Constraint::Length(column_height), Constraint::Min(0)]).areas(area);
        (top, Some(bottom))
    };

    let c = ctx.constants;
    let col = Constraint::Length(to_u16(c.column_width));
    let left_count = placement.left.len();
    let right_count = placement.right.len();

    let mut constraints = vec![col; left_count];
    constraints.push(col);
    constraints.push(Constraint::Length(to_u16(c.est_center_a)));
    constraints.push(Constraint::Length(to_u16(c.est_center_b)));
    constraints.extend(std::iter::repeat_n(col, right_count));

    let slots = Layout::horizontal(constraints)
        .spacing(to_u16(c.gap))
        .flex(Flex::Center)
        .split(columns_area);

    let placed = placement.apply(projects);

    // outermost left column is drawn first
    for (i, (range, items)) in placement.left.iter().zip(&placed.left).enumerate() {
        let slot = slots[left_count - 1 - i];
        render_column(frame, slot, ctx, range.start, items);
    }

    render_column(frame, slots[left_count], ctx, placement.center.start, placed.center);
    render_about_panel(frame, slots[left_count + 1], ctx);
    render_experience_panel(frame, slots[left_count + 2], ctx);

    for (j, (range, items)) in placement.right.iter().zip(&placed.right).enumerate() {
        let slot = slots[left_count + 3 + j];
        render_column(frame, slot, ctx, range.start, items);
    }

    if let Some(grid_area) = grid_area {
        let stride = c.column_stride();
        let per_row = if stride == 0 {
            1
        } else {
            (u32::from(grid_area.width).saturating_add(c.gap) / stride).max(1) as usize
        };
        render_grid(frame, grid_area, ctx, placement.fallback.clone(), per_row);
    }
}

fn to_u16(value: u32) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// Rows given to the column band when a fallback grid follows it.
fn column_row_height(total: u16) -> u16 {
    let share = u32::from(total) * u32::from(COLUMN_ROW_PERCENT) / 100;
    to_u16(share).max(COLUMN_ROW_MIN)
}

/// One side or pinned column: its projects stacked top to bottom.
fn render_column(frame: &mut Frame, area: Rect, ctx: &ViewContext, first: usize, items: &[Project]) {
    if items.is_empty() {
        return;
    }
    let rows = Layout::vertical(vec![Constraint::Ratio(1, items.len() as u32); items.len()])
        .split(area);
    for (offset, project) in items.iter().enumerate() {
        render_tile(frame, rows[offset], ctx, first + offset, project);
    }
}

/// Projects in `range`, `per_row` tiles per row, scrolled to the cursor.
fn render_grid(frame: &mut Frame, area: Rect, ctx: &ViewContext, range: Range<usize>, per_row: usize) {
    let projects = &ctx.content.projects;
    let Some(items) = projects.get(range.clone()) else {
        return;
    };
    if items.is_empty() || area.height == 0 {
        return;
    }

    let rows: Vec<&[Project]> = items.chunks(per_row).collect();
    let row_height = |row: &[Project], first: usize| -> u16 {
        let any_open = (0..row.len())
            .any(|k| ctx.state.expanded_projects.is_expanded(&projects[first + k].id));
        if any_open {
            GRID_TILE_HEIGHT * 2
        } else {
            GRID_TILE_HEIGHT
        }
    };

    // first row to draw: the cursor's row must fit
    let cursor_row = ctx
        .cursor
        .checked_sub(range.start)
        .filter(|i| *i < items.len())
        .map(|i| i / per_row)
        .unwrap_or(0);
    let mut start_row = 0;
    loop {
        let used: u16 = (start_row..=cursor_row)
            .map(|r| row_height(rows[r], range.start + r * per_row))
            .sum();
        if used <= area.height || start_row == cursor_row {
            break;
        }
        start_row += 1;
    }

    let mut y = area.y;
    for (r, row) in rows.iter().enumerate().skip(start_row) {
        let first = range.start + r * per_row;
        let height = row_height(*row, first).min(area.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }
        let row_area = Rect::new(area.x, y, area.width, height);
        let cells = Layout::horizontal(vec![Constraint::Ratio(1, per_row as u32); per_row])
            .spacing(to_u16(ctx.constants.gap))
            .split(row_area);
        for (k, project) in row.iter().enumerate() {
            render_tile(frame, cells[k], ctx, first + k, project);
        }
        y += height;
    }
}

fn render_tile(frame: &mut Frame, area: Rect, ctx: &ViewContext, index: usize, project: &Project) {
    let expanded = ctx.state.expanded_projects.is_expanded(&project.id);
    let selected = index == ctx.cursor;

    let icon = if project.image.is_some() { "▣" } else { PLACEHOLDER_GLYPH };
    let mut lines = vec![Line::from(vec![
        Span::raw(format!("{} ", icon)),
        Span::styled(project.skills.join(" · "), TEXT_TAG),
    ])];
    if expanded {
        for line in project.description.lines() {
            lines.push(Line::from(format!("• {}", line)));
        }
        if let Some(ref docs) = project.links.docs {
            lines.push(Line::from(Span::styled(format!("docs: {}", docs), TEXT_DIM)));
        }
        if let Some(ref github) = project.links.github {
            lines.push(Line::from(Span::styled(format!("code: {}", github), TEXT_DIM)));
        }
    } else {
        lines.push(Line::from(project.description.summary().to_string()));
    }

    let title_style = if selected {
        styles::selected_style()
    } else {
        styles::text_bold_white()
    };
    let block = Block::default()
        .title(Span::styled(
            format!(" {}{} ", styles::disclosure(expanded), project.title),
            title_style,
        ))
        .borders(Borders::ALL)
        .border_style(styles::border_style(selected));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}

fn render_about_panel(frame: &mut Frame, area: Rect, ctx: &ViewContext) {
    let about = &ctx.content.about;
    let mut lines = vec![Line::from(about.description.clone())];
    if !about.interests.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(about.interests.clone()));
    }
    for point in &about.points {
        lines.push(Line::from(format!("• {}", point)));
    }

    let block = Block::default()
        .title(Span::styled(format!(" {} ", about.title), styles::header_style()))
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}

fn render_experience_panel(frame: &mut Frame, area: Rect, ctx: &ViewContext) {
    let mut lines: Vec<Line> = Vec::new();
    for exp in &ctx.content.experiences {
        lines.push(Line::from(Span::styled(exp.title.clone(), styles::text_bold_white())));
        lines.push(Line::from(Span::styled(
            format!("{} · {}", exp.company, exp.period),
            TEXT_DIM,
        )));
    }

    let block = Block::default()
        .title(Span::styled(" Experience ", styles::header_style()))
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}
