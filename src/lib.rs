//! Folio - typed content for a personal portfolio site
//!
//! Project records, work history and bundled icons, plus the derivation that
//! turns raw project records into the list the site renders.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod icons;
pub mod storage;
pub mod svg;
pub mod utils;

// Re-export core types and traits for easier use
pub use crate::core::{
    data::{ProjectCollection, ProjectRecord, ProjectView, WorkItem},
    projects::{derive_projects, get_projects},
    traits::ProjectSource,
    work::work,
};
pub use icons::{IconMap, IconName, WorkIcon, WorkIcons};
pub use svg::sanitize_to_outline;
pub use utils::error::{AppError, AppResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
