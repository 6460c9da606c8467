use crate::config::Config;
use crate::core::data::ProjectCollection;
use crate::core::traits::ProjectSource;
use crate::utils::error::AppResult;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the configured projects file
pub const PROJECTS_FILE_ENV: &str = "FOLIO_PROJECTS_FILE";

#[derive(Debug, Clone, PartialEq)]
pub enum Storage {
    /// Data embedded in the binary
    Bundled,
    /// A JSON document on disk
    File(PathBuf),
}

impl Storage {
    /// Pick the source: explicit path, then environment, then config, then bundled
    pub fn resolve(config: &Config, explicit: Option<&Path>) -> Self {
        if let Some(path) = explicit {
            return Storage::File(path.to_path_buf());
        }

        if let Ok(path) = std::env::var(PROJECTS_FILE_ENV)
            && !path.trim().is_empty()
        {
            return Storage::File(PathBuf::from(path));
        }

        match &config.general.projects_file {
            Some(path) => Storage::File(path.clone()),
            None => Storage::Bundled,
        }
    }
}

impl ProjectSource for Storage {
    fn load_projects(&self) -> AppResult<ProjectCollection> {
        let collection = match self {
            Storage::Bundled => ProjectCollection::bundled()?,
            Storage::File(path) => ProjectCollection::load(path)?,
        };
        tracing::debug!(source = %self.describe(), count = collection.len(), "loaded project records");
        Ok(collection)
    }

    fn describe(&self) -> String {
        match self {
            Storage::Bundled => "bundled projects".to_string(),
            Storage::File(path) => path.display().to_string(),
        }
    }
}
