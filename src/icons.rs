//! Bundled icon assets
//!
//! Every logo a project can reference is embedded at compile time and keyed
//! by the export-style name used in project records (`"PhoenixIcon"`, ...).

use crate::svg::sanitize_to_outline;
use serde::Serialize;
use std::collections::BTreeMap;

/// Macro to embed SVG assets at compile time.
///
/// Generates the enum, its `ALL` table, key/content accessors and `from_key`.
macro_rules! bundled_icons {
    ($name:ident { $($variant:ident => ($key:literal, $path:literal)),* $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant,)*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            /// Name used to reference this icon from data files
            pub fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key,)*
                }
            }

            /// Raw SVG markup embedded from the asset file
            pub fn svg(self) -> &'static str {
                match self {
                    $($name::$variant => include_str!(concat!("../assets/", $path)),)*
                }
            }

            pub fn from_key(key: &str) -> Option<Self> {
                match key {
                    $($key => Some($name::$variant),)*
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.key())
            }
        }
    };
}

bundled_icons!(IconName {
    Phoenix => ("PhoenixIcon", "logos/Phoenix-logo.svg"),
    N8n => ("N8nIcon", "logos/N8n-logo.svg"),
    Supabase => ("SupabaseIcon", "logos/Supabase-logo.svg"),
    Posthog => ("PosthogIcon", "logos/posthog-logo.svg"),
    Python => ("PythonIcon", "logos/Python-logo.svg"),
    Tailwind => ("TailwindIcon", "logos/Tailwind-logo.svg"),
});

bundled_icons!(WorkIcon {
    Job => ("job", "icons/job-title-icon.svg"),
    Company => ("company", "icons/company-icon.svg"),
    Location => ("location", "icons/location-icon.svg"),
});

/// Immutable mapping from icon key to SVG markup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconMap {
    entries: BTreeMap<String, String>,
}

impl IconMap {
    /// The mapping of every bundled logo
    pub fn bundled() -> Self {
        Self::from_entries(IconName::ALL.iter().map(|icon| (icon.key(), icon.svg())))
    }

    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Look up an icon by key. A miss is reported as `None`; callers decide
    /// what to render instead.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Outline versions of the work-history icons
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkIcons {
    pub job: String,
    pub company: String,
    pub location: String,
}

impl WorkIcons {
    pub const DEFAULT_SIZE: u32 = 15;

    pub fn new(size: u32) -> Self {
        Self {
            job: sanitize_to_outline(WorkIcon::Job.svg(), size),
            company: sanitize_to_outline(WorkIcon::Company.svg(), size),
            location: sanitize_to_outline(WorkIcon::Location.svg(), size),
        }
    }

    pub fn get(&self, icon: WorkIcon) -> &str {
        match icon {
            WorkIcon::Job => &self.job,
            WorkIcon::Company => &self.company,
            WorkIcon::Location => &self.location,
        }
    }
}

impl Default for WorkIcons {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip_through_from_key() {
        for icon in IconName::ALL {
            assert_eq!(IconName::from_key(icon.key()), Some(*icon));
        }
        assert_eq!(IconName::from_key("phoenixicon"), None);
        assert_eq!(IconName::from_key("Phoenix"), None);
    }

    #[test]
    fn test_bundled_assets_are_svg() {
        for icon in IconName::ALL {
            assert!(icon.svg().trim_start().starts_with("<svg"), "{icon}");
        }
        for icon in WorkIcon::ALL {
            assert!(icon.svg().trim_start().starts_with("<svg"), "{icon}");
        }
    }

    #[test]
    fn test_bundled_map_covers_every_logo() {
        let map = IconMap::bundled();
        assert_eq!(map.len(), IconName::ALL.len());
        assert_eq!(map.get("TailwindIcon"), Some(IconName::Tailwind.svg()));
        assert_eq!(map.get("RustIcon"), None);
    }

    #[test]
    fn test_work_icons_are_outlined() {
        let icons = WorkIcons::default();
        for icon in WorkIcon::ALL {
            let svg = icons.get(*icon);
            assert!(svg.starts_with(r#"<svg width="15" height="15" fill="none""#));
            assert!(!svg.contains("#111827"));
        }
    }
}
