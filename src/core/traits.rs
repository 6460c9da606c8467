//! Core trait definitions

use crate::core::data::ProjectCollection;
use crate::utils::error::AppResult;

/// Where raw project records come from
///
/// Implementations read their data once per call and hand back an
/// immutable collection; derivation never reaches back into the source.
pub trait ProjectSource {
    /// Load the raw project records
    fn load_projects(&self) -> AppResult<ProjectCollection>;

    /// Human readable origin, used in diagnostics
    fn describe(&self) -> String;
}
