//! Portfolio content model.
//!
//! The content is a read-only document. A default copy is compiled into the
//! binary; a user-supplied TOML file with the same shape can replace it.
//! Project order matters: it decides which tiles are pinned in the center
//! group and which land in side columns.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

const BUILTIN_CONTENT: &str = include_str!("../assets/content.toml");

/// Glyph shown in place of a missing project image or company logo.
pub const PLACEHOLDER_GLYPH: &str = "◇";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub name: String,
    #[serde(default)]
    pub name_color: Option<String>,
    pub subtitle: String,
    #[serde(default)]
    pub secondary_subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub title: String,
    #[serde(default)]
    pub greeting: String,
    pub description: String,
    #[serde(default)]
    pub interests: String,
    #[serde(default)]
    pub points: Vec<String>,
    #[serde(default)]
    pub closing: String,
    #[serde(default)]
    pub contact_links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub is_education: bool,
}

/// A project blurb: either one paragraph or a list of bullet points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Paragraph(String),
    Bullets(Vec<String>),
}

impl Description {
    /// Lines to render, one per bullet or a single paragraph.
    pub fn lines(&self) -> Vec<&str> {
        match self {
            Description::Paragraph(text) => vec![text.as_str()],
            Description::Bullets(items) => items.iter().map(String::as_str).collect(),
        }
    }

    /// First sentence or bullet, for collapsed tiles.
    pub fn summary(&self) -> &str {
        match self {
            Description::Paragraph(text) => match text.find(". ") {
                Some(end) => &text[..=end],
                None => text,
            },
            Description::Bullets(items) => items.first().map(String::as_str).unwrap_or(""),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default)]
    pub docs: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    pub description: Description,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub links: ProjectLinks,
}

impl Project {
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s.eq_ignore_ascii_case(skill))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub id: u32,
    pub title: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    pub copyright: String,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

/// The whole portfolio document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub hero: Hero,
    pub about: About,
    pub contact: ContactInfo,
    pub footer: Footer,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
}

/// Named parts of the document, for section-wise output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }
}

impl std::str::FromStr for Section {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ContentError::UnknownSection(s.to_string()))
    }
}

impl Content {
    /// The content compiled into the binary.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_toml_str(BUILTIN_CONTENT)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ContentError> {
        toml::from_str(source).map_err(|e| ContentError::Parse {
            message: e.to_string(),
        })
    }

    /// Load a content file from disk.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let source = fs::read_to_string(path).map_err(|source| ContentError::Unreadable {
            path: path.to_string_lossy().to_string(),
            source,
        })?;
        let content = Self::from_toml_str(&source)?;
        log::debug!(
            "Loaded content from {} ({} projects)",
            path.display(),
            content.projects.len()
        );
        Ok(content)
    }

    /// Load `path` when given, otherwise the built-in document.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, ContentError> {
        match path {
            Some(p) => Self::load(p),
            None => Self::builtin(),
        }
    }

    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn experience(&self, id: u32) -> Option<&Experience> {
        self.experiences.iter().find(|e| e.id == id)
    }

    pub fn skill_category(&self, id: u32) -> Option<&SkillCategory> {
        self.skills.iter().find(|c| c.id == id)
    }

    /// Projects tagged with `skill`, in gallery order.
    pub fn projects_for_skill(&self, skill: &str) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.has_skill(skill)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MINIMAL: &str = r#"
[hero]
name = "Ada"
subtitle = "Engines"

[about]
title = "About"
description = "Analyst."

[contact]
email = "ada@example.com"

[footer]
copyright = "(c) Ada"

[[projects]]
id = 7
title = "Difference Engine"
description = "Computes tables. Very precisely."
skills = ["Mechanics"]
"#;

    #[test]
    fn test_builtin_content_parses() {
        let content = Content::builtin().expect("builtin content must parse");
        assert_eq!(content.hero.name, "Ihsan");
        assert_eq!(content.projects.len(), 14);
        assert_eq!(content.experiences.len(), 5);
        assert_eq!(content.skills.len(), 6);
        assert_eq!(content.contact.email, "hi@ihsan.cc");
    }

    #[test]
    fn test_builtin_project_order_is_preserved() {
        let content = Content::builtin().expect("builtin content must parse");
        let ids: Vec<u32> = content.projects.iter().take(4).map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 14, 3]);
    }

    #[test]
    fn test_description_variants() {
        let content = Content::builtin().expect("builtin content must parse");
        let thruster = content.project(1).expect("project 1");
        assert!(matches!(thruster.description, Description::Bullets(ref b) if b.len() == 3));
        let converter = content.project(2).expect("project 2");
        assert!(matches!(converter.description, Description::Paragraph(_)));
    }

    #[test]
    fn test_minimal_document_fills_defaults() {
        let content = Content::from_toml_str(MINIMAL).expect("minimal parses");
        assert!(content.experiences.is_empty());
        let project = content.project(7).expect("project 7");
        assert!(project.image.is_none());
        assert_eq!(project.links, ProjectLinks::default());
        assert_eq!(project.description.summary(), "Computes tables.");
    }

    #[test]
    fn test_invalid_document_is_parse_error() {
        let err = Content::from_toml_str("[hero]\nname = 3").unwrap_err();
        assert!(matches!(err, ContentError::Parse { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(MINIMAL.as_bytes()).expect("write");
        let content = Content::load(file.path()).expect("load");
        assert_eq!(content.hero.name, "Ada");

        let missing = Content::load(Path::new("/nonexistent/folio/content.toml"));
        assert!(matches!(missing, Err(ContentError::Unreadable { .. })));
    }

    #[test]
    fn test_projects_for_skill_is_case_insensitive() {
        let content = Content::builtin().expect("builtin content must parse");
        let stm32: Vec<u32> = content
            .projects_for_skill("stm32")
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(stm32, vec![2, 6, 7, 9]);
    }

    #[test]
    fn test_skill_category_lookup() {
        let content = Content::builtin().expect("builtin content must parse");
        let fpga = content.skill_category(2).expect("category 2");
        assert_eq!(fpga.title, "FPGA");
        assert!(content.skill_category(99).is_none());
    }

    #[test]
    fn test_section_from_str() {
        assert_eq!("Projects".parse::<Section>().ok(), Some(Section::Projects));
        assert!("gallery".parse::<Section>().is_err());
    }

    #[test]
    fn test_bullet_summary_is_first_bullet() {
        let d = Description::Bullets(vec!["one".into(), "two".into()]);
        assert_eq!(d.summary(), "one");
        assert_eq!(d.lines(), vec!["one", "two"]);
        assert_eq!(Description::Bullets(vec![]).summary(), "");
    }
}
