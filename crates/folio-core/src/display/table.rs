use crate::content::{Content, Experience, Project, Section, SkillCategory};
use crate::layout::{LayoutConstants, LayoutMode, ProjectPlacement};
use crate::toggle::ToggleSet;
use crate::utils::text::{center_text, truncate_text, wrap_text};
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets};
use crossterm::terminal;
use std::ops::Range;

const LAYOUT_HEADER_CAPACITY: usize = 256;

struct ColumnWidths {
    title: usize,
    meta: usize,
    body: usize,
}

/// Renders portfolio content as terminal tables.
pub struct TableDisplay {
    max_width: Option<usize>,
    use_colors: bool,
}

impl TableDisplay {
    pub fn new() -> Self {
        Self {
            max_width: Self::detect_terminal_width(),
            use_colors: true,
        }
    }

    fn detect_terminal_width() -> Option<usize> {
        match terminal::size() {
            Ok((cols, _)) => Some((cols as usize).clamp(40, 200)),
            Err(_) => Some(80),
        }
    }

    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn bold_header(&self, text: &str, color: Color) -> Cell {
        if self.use_colors {
            Cell::new(text).add_attribute(Attribute::Bold).fg(color)
        } else {
            Cell::new(text).add_attribute(Attribute::Bold)
        }
    }

    fn colored_cell(&self, text: &str, color: Color) -> Cell {
        if self.use_colors {
            Cell::new(text).fg(color)
        } else {
            Cell::new(text)
        }
    }

    fn new_table(&self, headers: &[&str]) -> Table {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        let width = self
            .max_width
            .map(|w| if w > 20 { w - 6 } else { w.max(40) })
            .unwrap_or(80);
        table.set_width(width as u16);
        let cells: Vec<Cell> = headers
            .iter()
            .map(|h| self.bold_header(h, Color::Cyan))
            .collect();
        table.set_header(cells);
        table
    }

    fn responsive_widths(&self) -> ColumnWidths {
        match self.max_width.unwrap_or(80) {
            0..=59 => ColumnWidths {
                title: 14,
                meta: 10,
                body: 20,
            },
            60..=79 => ColumnWidths {
                title: 20,
                meta: 14,
                body: 28,
            },
            80..=119 => ColumnWidths {
                title: 28,
                meta: 20,
                body: 40,
            },
            _ => ColumnWidths {
                title: 36,
                meta: 28,
                body: 70,
            },
        }
    }

    /// One section of the document.
    pub fn render_section(&self, content: &Content, section: Section) -> String {
        match section {
            Section::Hero => self.render_hero(content),
            Section::About => self.render_about(content),
            Section::Skills => self.render_skills(&content.skills),
            Section::Experience => self.render_experiences(&content.experiences),
            Section::Projects => self.render_projects(&content.projects, &ToggleSet::new()),
            Section::Contact => self.render_contact(content),
        }
    }

    pub fn render_hero(&self, content: &Content) -> String {
        let width = self.max_width.unwrap_or(80).min(80);
        let hero = &content.hero;
        let mut out = String::new();
        out.push_str(&center_text(&hero.name, width));
        out.push('\n');
        out.push_str(&center_text(&hero.subtitle, width));
        if !hero.secondary_subtitle.is_empty() {
            out.push('\n');
            out.push_str(&center_text(&hero.secondary_subtitle, width));
        }
        out
    }

    pub fn render_about(&self, content: &Content) -> String {
        let width = self.max_width.unwrap_or(80).min(100);
        let about = &content.about;
        let mut lines = vec![about.title.clone(), "─".repeat(about.title.chars().count())];
        for paragraph in [&about.greeting, &about.description, &about.interests] {
            if !paragraph.is_empty() {
                lines.extend(wrap_text(paragraph, width));
                lines.push(String::new());
            }
        }
        for point in &about.points {
            lines.extend(wrap_text(&format!("• {}", point), width));
        }
        if !about.closing.is_empty() {
            lines.push(String::new());
            lines.extend(wrap_text(&about.closing, width));
        }
        for link in &about.contact_links {
            lines.push(format!("{}: {}", link.label, link.url));
        }
        lines.join("\n")
    }

    /// Project list. Expanded projects show every description line.
    pub fn render_projects(&self, projects: &[Project], expanded: &ToggleSet<u32>) -> String {
        let widths = self.responsive_widths();
        let mut table = self.new_table(&["ID", "Title", "Skills", "Description"]);

        for project in projects {
            let description = if expanded.is_expanded(&project.id) {
                project
                    .description
                    .lines()
                    .iter()
                    .map(|line| format!("• {}", line))
                    .collect::<Vec<_>>()
                    .join("\n")
            } else {
                truncate_text(project.description.summary(), widths.body)
            };

            table.add_row(vec![
                self.colored_cell(&project.id.to_string(), Color::Cyan),
                Cell::new(truncate_text(&project.title, widths.title)),
                self.colored_cell(
                    &truncate_text(&project.skills.join(", "), widths.meta),
                    Color::DarkGrey,
                ),
                Cell::new(description),
            ]);
        }

        table.to_string()
    }

    pub fn render_experiences(&self, experiences: &[Experience]) -> String {
        let widths = self.responsive_widths();
        let mut table = self.new_table(&["ID", "Role", "Organization", "Period"]);

        for exp in experiences {
            let role = if exp.is_education {
                format!("🎓 {}", exp.title)
            } else {
                exp.title.clone()
            };
            table.add_row(vec![
                self.colored_cell(&exp.id.to_string(), Color::Cyan),
                Cell::new(truncate_text(&role, widths.title)),
                Cell::new(truncate_text(&exp.company, widths.meta)),
                self.colored_cell(&exp.period, Color::DarkGrey),
            ]);
        }

        table.to_string()
    }

    /// Description and responsibilities of one experience.
    pub fn render_experience_detail(&self, exp: &Experience) -> String {
        let width = self.max_width.unwrap_or(80).min(100);
        let heading = format!("{} · {}", exp.title, exp.company);
        let mut lines = vec![heading.clone(), "─".repeat(heading.chars().count())];
        if !exp.description.is_empty() {
            lines.extend(wrap_text(&exp.description, width));
        }
        for item in &exp.responsibilities {
            lines.extend(wrap_text(&format!("• {}", item), width));
        }
        lines.join("\n")
    }

    pub fn render_skills(&self, categories: &[SkillCategory]) -> String {
        let mut table = self.new_table(&["Category", "Skills"]);

        for category in categories {
            let names: Vec<&str> = category.skills.iter().map(|s| s.name.as_str()).collect();
            table.add_row(vec![
                self.colored_cell(&category.title, Color::Green),
                Cell::new(names.join(", ")),
            ]);
        }

        table.to_string()
    }

    pub fn render_contact(&self, content: &Content) -> String {
        let mut rows = vec![vec!["Email".to_string(), content.contact.email.clone()]];
        if let Some(ref website) = content.contact.website {
            rows.push(vec!["Website".to_string(), website.clone()]);
        }
        for link in &content.footer.social_links {
            rows.push(vec![link.name.clone(), link.url.clone()]);
        }
        self.render_simple_table(&["Channel", "Address"], &rows)
    }

    /// Column allocation for one viewport width and the slot each project
    /// lands in.
    pub fn render_layout(
        &self,
        viewport_width: u32,
        constants: &LayoutConstants,
        mode: &LayoutMode,
        placement: &ProjectPlacement,
        projects: &[Project],
    ) -> String {
        let mut out = String::with_capacity(LAYOUT_HEADER_CAPACITY);
        let alloc = mode.allocation();

        out.push_str(&format!(
            "Viewport {} | center group {} | stride {}\n",
            viewport_width,
            constants.center_group_width(),
            constants.column_stride()
        ));
        if mode.is_stacked() {
            out.push_str(&format!(
                "Stacked layout (width <= {})\n",
                constants.breakpoint
            ));
        } else {
            out.push_str(&format!(
                "Columns: left {} | right {} | total {}\n",
                alloc.left,
                alloc.right,
                alloc.total()
            ));
        }
        out.push_str(&format!(
            "Placed in columns: {} | grid: {}\n",
            placement.placed_in_columns(),
            placement.fallback.len()
        ));

        let titles = |range: &Range<usize>| -> String {
            projects
                .get(range.clone())
                .unwrap_or_default()
                .iter()
                .map(|p| truncate_text(&p.title, 32))
                .collect::<Vec<_>>()
                .join("\n")
        };

        let mut rows = Vec::new();
        for (i, range) in placement.left.iter().enumerate().rev() {
            rows.push(vec![format!("L{}", i), titles(range)]);
        }
        if !placement.center.is_empty() {
            rows.push(vec!["Center".to_string(), titles(&placement.center)]);
        }
        for (i, range) in placement.right.iter().enumerate() {
            rows.push(vec![format!("R{}", i), titles(range)]);
        }
        if !placement.fallback.is_empty() {
            rows.push(vec!["Grid".to_string(), titles(&placement.fallback)]);
        }

        out.push_str(&self.render_simple_table(&["Slot", "Projects"], &rows));
        out
    }

    /// Render a simple table with custom headers and rows
    pub fn render_simple_table(&self, headers: &[&str], rows: &[Vec<String>]) -> String {
        let mut table = self.new_table(headers);
        for row in rows {
            let cells: Vec<Cell> = row.iter().map(Cell::new).collect();
            table.add_row(cells);
        }
        table.to_string()
    }
}

impl Default for TableDisplay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display() -> TableDisplay {
        TableDisplay::new().with_max_width(120).with_colors(false)
    }

    fn content() -> Content {
        Content::builtin().expect("builtin content parses")
    }

    #[test]
    fn test_render_projects_lists_every_title() {
        let content = content();
        let out = display().render_projects(&content.projects, &ToggleSet::new());
        assert!(out.contains("Ionic Thruster"));
        assert!(out.contains("Mulgrave Light Reporter"));
    }

    #[test]
    fn test_expanded_project_renders_more() {
        let content = content();
        let project = content.project(1).expect("project 1");
        let one = std::slice::from_ref(project);
        let collapsed = display().render_projects(one, &ToggleSet::new());
        let expanded = display().render_projects(one, &ToggleSet::new().toggle(1));
        assert!(expanded.lines().count() > collapsed.lines().count());
    }

    #[test]
    fn test_render_layout_wide() {
        let content = content();
        let constants = LayoutConstants::WEB;
        let mode = LayoutMode::resolve(3000, &constants);
        let placement = mode.place(content.projects.len());
        let out = display().render_layout(3000, &constants, &mode, &placement, &content.projects);

        assert!(out.contains("Columns: left 1 | right 1 | total 2"));
        assert!(out.contains("Placed in columns: 6 | grid: 8"));
        assert!(out.contains("L0"));
        assert!(out.contains("R0"));
        assert!(out.contains("Grid"));
    }

    #[test]
    fn test_render_layout_stacked() {
        let content = content();
        let constants = LayoutConstants::WEB;
        let mode = LayoutMode::resolve(600, &constants);
        let placement = mode.place(content.projects.len());
        let out = display().render_layout(600, &constants, &mode, &placement, &content.projects);

        assert!(out.contains("Stacked layout"));
        assert!(out.contains("Placed in columns: 0 | grid: 14"));
        assert!(!out.contains("Center"));
    }

    #[test]
    fn test_experience_detail_lists_responsibilities() {
        let content = content();
        let exp = content.experience(1).expect("experience 1");
        let out = display().render_experience_detail(exp);
        assert!(out.starts_with("Signal Integrity Engineering · Arista Networks"));
        assert_eq!(
            out.lines().filter(|l| l.starts_with("• ")).count(),
            exp.responsibilities.len()
        );
    }

    #[test]
    fn test_render_contact_includes_email() {
        let content = content();
        let out = display().render_contact(&content);
        assert!(out.contains(&content.contact.email));
    }

    #[test]
    fn test_every_section_renders() {
        let content = content();
        for section in Section::ALL {
            assert!(!display().render_section(&content, section).is_empty());
        }
    }
}
