//! Project list derivation
//!
//! Raw records go through filter, stable sort and projection, in that order.
//! Nothing here fails: an unknown icon name yields an empty icon.

use crate::core::data::{ProjectCollection, ProjectRecord, ProjectView};
use crate::icons::IconMap;
use crate::utils::error::AppResult;
use std::cmp::Ordering;

/// Derive the display list from raw records and an icon mapping.
pub fn derive_projects(records: &[ProjectRecord], icons: &IconMap) -> Vec<ProjectView> {
    let mut visible: Vec<&ProjectRecord> = records.iter().filter(|p| p.is_published()).collect();

    // sort_by is stable, equal keys keep input order
    visible.sort_by(|a, b| {
        a.sort_key()
            .partial_cmp(&b.sort_key())
            .unwrap_or(Ordering::Equal)
    });

    visible
        .into_iter()
        .map(|p| to_view(p, icons))
        .collect()
}

fn to_view(record: &ProjectRecord, icons: &IconMap) -> ProjectView {
    let icon = match icons.get(&record.icon_name) {
        Some(svg) => svg.to_string(),
        None => String::new(),
    };

    ProjectView {
        title: record.title.clone(),
        tech_stack: record.tech_stack.clone(),
        description: record.description.clone(),
        cta_text: record.cta_text.clone(),
        cta_link: record.cta_link.clone(),
        icon,
    }
}

/// The published projects of the bundled data with bundled icons
pub fn get_projects() -> AppResult<Vec<ProjectView>> {
    let collection = ProjectCollection::bundled()?;
    Ok(derive_projects(&collection.projects, &IconMap::bundled()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, order: Option<f64>, published: Option<bool>, icon_name: &str) -> ProjectRecord {
        ProjectRecord {
            id: id.to_string(),
            title: id.to_uppercase(),
            tech_stack: format!("{} stack", id),
            description: format!("{} description", id),
            cta_text: "View".to_string(),
            cta_link: format!("https://example.com/{}", id),
            icon_name: icon_name.to_string(),
            published,
            order,
        }
    }

    fn titles(views: &[ProjectView]) -> Vec<&str> {
        views.iter().map(|v| v.title.as_str()).collect()
    }

    #[test]
    fn test_missing_order_sorts_as_zero_and_missing_icon_is_empty() {
        let records = vec![
            record("a", Some(2.0), Some(true), "x"),
            record("b", None, None, "y"),
        ];
        let icons = IconMap::from_entries([("x", "<svg>X</svg>")]);

        let views = derive_projects(&records, &icons);

        assert_eq!(titles(&views), vec!["B", "A"]);
        assert_eq!(views[0].icon, "");
        assert_eq!(views[1].icon, "<svg>X</svg>");
    }

    #[test]
    fn test_unpublished_is_dropped_regardless_of_order() {
        let records = vec![
            record("a", Some(1.0), None, "x"),
            record("hidden", Some(-100.0), Some(false), "x"),
            record("c", Some(5.0), Some(true), "x"),
        ];

        let views = derive_projects(&records, &IconMap::default());

        assert_eq!(titles(&views), vec!["A", "C"]);
    }

    #[test]
    fn test_equal_orders_keep_input_order() {
        let records = vec![
            record("d", Some(1.0), None, "x"),
            record("a", None, None, "x"),
            record("c", Some(1.0), None, "x"),
            record("b", Some(0.0), None, "x"),
            record("e", Some(-0.0), None, "x"),
        ];

        let views = derive_projects(&records, &IconMap::default());

        assert_eq!(titles(&views), vec!["A", "B", "E", "D", "C"]);
    }

    #[test]
    fn test_fractional_and_negative_orders() {
        let records = vec![
            record("a", Some(1.5), None, "x"),
            record("b", Some(-2.0), None, "x"),
            record("c", Some(1.25), None, "x"),
        ];

        let views = derive_projects(&records, &IconMap::default());

        assert_eq!(titles(&views), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_display_fields_copied_verbatim() {
        let records = vec![record("a", None, None, "PythonIcon")];
        let views = derive_projects(&records, &IconMap::bundled());

        let view = &views[0];
        assert_eq!(view.title, "A");
        assert_eq!(view.tech_stack, "a stack");
        assert_eq!(view.description, "a description");
        assert_eq!(view.cta_text, "View");
        assert_eq!(view.cta_link, "https://example.com/a");
        assert_eq!(view.icon, crate::icons::IconName::Python.svg());
    }

    #[test]
    fn test_view_json_omits_derivation_fields() {
        let records = vec![record("a", Some(3.0), Some(true), "x")];
        let views = derive_projects(&records, &IconMap::default());

        let json = serde_json::to_value(&views[0]).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj["icon"], "");
        assert_eq!(obj["techStack"], "a stack");
        assert!(!obj.contains_key("id"));
        assert!(!obj.contains_key("order"));
        assert!(!obj.contains_key("published"));
    }

    #[test]
    fn test_derivation_is_idempotent_and_leaves_input_alone() {
        let records = vec![
            record("c", Some(3.0), None, "x"),
            record("a", Some(1.0), Some(false), "x"),
            record("b", None, None, "y"),
        ];
        let before = records.clone();
        let icons = IconMap::from_entries([("x", "<svg/>")]);

        let first = derive_projects(&records, &icons);
        let second = derive_projects(&records, &icons);

        assert_eq!(first, second);
        assert_eq!(records, before);
    }

    #[test]
    fn test_generated_inputs_hold_ordering_properties() {
        // deterministic pseudo-random records
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        let mut next = move || {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            seed
        };

        for _ in 0..50 {
            let records: Vec<ProjectRecord> = (0..20)
                .map(|i| {
                    let order = match next() % 4 {
                        0 => None,
                        n => Some((n as f64) - 2.0),
                    };
                    let published = match next() % 3 {
                        0 => None,
                        1 => Some(true),
                        _ => Some(false),
                    };
                    let icon = if next() % 2 == 0 { "x" } else { "y" };
                    record(&format!("p{:02}", i), order, published, icon)
                })
                .collect();
            let icons = IconMap::from_entries([("x", "<svg>X</svg>")]);

            let views = derive_projects(&records, &icons);

            let expected: Vec<&ProjectRecord> = records.iter().filter(|r| r.is_published()).collect();
            assert_eq!(views.len(), expected.len());

            // map each view back to its source by title
            let sources: Vec<(usize, &ProjectRecord)> = views
                .iter()
                .map(|v| {
                    records
                        .iter()
                        .enumerate()
                        .find(|(_, r)| r.title == v.title)
                        .unwrap()
                })
                .collect();

            for (view, (_, source)) in views.iter().zip(&sources) {
                assert!(source.is_published());
                let want = if source.icon_name == "x" { "<svg>X</svg>" } else { "" };
                assert_eq!(view.icon, want);
            }

            for pair in sources.windows(2) {
                let (ia, a) = pair[0];
                let (ib, b) = pair[1];
                assert!(a.sort_key() <= b.sort_key());
                if a.sort_key() == b.sort_key() {
                    assert!(ia < ib);
                }
            }
        }
    }

    #[test]
    fn test_bundled_projects_are_derived() {
        let views = get_projects().unwrap();
        assert!(!views.is_empty());
        assert!(views.iter().all(|v| !v.icon.is_empty()));
        assert!(views.iter().all(|v| v.title != "Self-hosted Product Analytics"));
    }
}
