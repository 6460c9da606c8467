//! Core data structures for portfolio content
//!
//! Raw records are what the data files contain; views are what presentation
//! code receives after derivation.

use crate::icons::IconMap;
use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

const BUNDLED_PROJECTS: &str = include_str!("../../assets/collections/projects.json");

/// A project as it appears in the projects data file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub tech_stack: String,
    pub description: String,
    pub cta_text: String,
    pub cta_link: String,
    /// Key into the icon mapping, e.g. `"PhoenixIcon"`
    pub icon_name: String,
    /// Absent means published
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    /// Lower values are listed first; absent counts as 0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<f64>,
}

/// A project ready for display, with its icon resolved to markup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub title: String,
    pub tech_stack: String,
    pub description: String,
    pub cta_text: String,
    pub cta_link: String,
    /// SVG markup, empty when the icon name is unknown
    pub icon: String,
}

/// Ordered collection of raw project records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectCollection {
    pub projects: Vec<ProjectRecord>,
}

/// A single entry of the work history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkItem {
    pub title: &'static str,
    pub company: &'static str,
    pub region: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
}

impl ProjectRecord {
    pub fn is_published(&self) -> bool {
        self.published != Some(false)
    }

    pub fn sort_key(&self) -> f64 {
        self.order.unwrap_or(0.0)
    }
}

impl ProjectCollection {
    pub fn new(projects: Vec<ProjectRecord>) -> Self {
        Self { projects }
    }

    /// Parse a JSON array of project records
    pub fn from_json(content: &str) -> AppResult<Self> {
        serde_json::from_str(content)
            .map_err(|e| AppError::Parse(format!("Failed to parse projects data: {}", e)))
    }

    /// Read and parse a projects data file
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&content)
    }

    /// The projects data embedded at build time
    pub fn bundled() -> AppResult<Self> {
        Self::from_json(BUNDLED_PROJECTS)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Find a project by its ID
    pub fn find(&self, id: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// `(id, iconName)` of every record whose icon is missing from `icons`
    pub fn unresolved_icons<'a>(&'a self, icons: &IconMap) -> Vec<(&'a str, &'a str)> {
        self.projects
            .iter()
            .filter(|p| !icons.contains(&p.icon_name))
            .map(|p| (p.id.as_str(), p.icon_name.as_str()))
            .collect()
    }
}

impl std::fmt::Display for ProjectRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.title, self.id)
    }
}
