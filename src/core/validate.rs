//! Data-integrity checks for project records
//!
//! Derivation tolerates unknown icon names; these checks exist so the data
//! can be rejected at build time instead.

use crate::core::data::ProjectCollection;
use crate::icons::IconMap;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    UnknownIcon { id: String, icon_name: String },
    DuplicateId { id: String },
    EmptyTitle { id: String },
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Problem::UnknownIcon { id, icon_name } => {
                write!(f, "project '{}' references unknown icon '{}'", id, icon_name)
            }
            Problem::DuplicateId { id } => write!(f, "project id '{}' is used more than once", id),
            Problem::EmptyTitle { id } => write!(f, "project '{}' has an empty title", id),
        }
    }
}

/// Every problem found in the collection, in record order
pub fn check_collection(collection: &ProjectCollection, icons: &IconMap) -> Vec<Problem> {
    let mut problems = Vec::new();
    let mut seen = HashSet::new();

    for record in &collection.projects {
        if !seen.insert(record.id.as_str()) {
            problems.push(Problem::DuplicateId {
                id: record.id.clone(),
            });
        }
        if record.title.trim().is_empty() {
            problems.push(Problem::EmptyTitle {
                id: record.id.clone(),
            });
        }
        if !icons.contains(&record.icon_name) {
            problems.push(Problem::UnknownIcon {
                id: record.id.clone(),
                icon_name: record.icon_name.clone(),
            });
        }
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::ProjectRecord;

    fn record(id: &str, title: &str, icon_name: &str) -> ProjectRecord {
        ProjectRecord {
            id: id.to_string(),
            title: title.to_string(),
            tech_stack: String::new(),
            description: String::new(),
            cta_text: String::new(),
            cta_link: String::new(),
            icon_name: icon_name.to_string(),
            published: Some(false),
            order: None,
        }
    }

    #[test]
    fn test_bundled_data_is_clean() {
        let collection = ProjectCollection::bundled().unwrap();
        assert!(check_collection(&collection, &IconMap::bundled()).is_empty());
    }

    #[test]
    fn test_problems_reported_in_record_order() {
        let collection = ProjectCollection::new(vec![
            record("a", "A", "PythonIcon"),
            record("b", " ", "PythonIcon"),
            record("a", "Again", "RustIcon"),
        ]);

        let problems = check_collection(&collection, &IconMap::bundled());

        assert_eq!(
            problems,
            vec![
                Problem::EmptyTitle { id: "b".to_string() },
                Problem::DuplicateId { id: "a".to_string() },
                Problem::UnknownIcon {
                    id: "a".to_string(),
                    icon_name: "RustIcon".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_unpublished_records_are_still_checked() {
        let collection = ProjectCollection::new(vec![record("x", "X", "GoIcon")]);
        let problems = check_collection(&collection, &IconMap::bundled());
        assert_eq!(problems.len(), 1);
        assert_eq!(
            problems[0].to_string(),
            "project 'x' references unknown icon 'GoIcon'"
        );
    }
}
