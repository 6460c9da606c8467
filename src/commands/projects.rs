use crate::cli::{ListFormat, ProjectsArgs};
use crate::config::Config;
use crate::core::projects::derive_projects;
use crate::core::traits::ProjectSource;
use crate::icons::IconMap;
use crate::storage::Storage;
use crate::utils::DisplayFormatter;
use anyhow::Result;

pub fn handle_projects_command(config: &Config, args: &ProjectsArgs) -> Result<()> {
    let storage = Storage::resolve(config, args.file.as_deref());
    let collection = storage.load_projects()?;
    let format = ListFormat::resolve(args.format.as_ref(), config);

    if args.all {
        DisplayFormatter::format_records(&collection.projects, &format)?;
        return Ok(());
    }

    let views = derive_projects(&collection.projects, &IconMap::bundled());
    DisplayFormatter::format_projects(&views, &format)?;

    Ok(())
}
