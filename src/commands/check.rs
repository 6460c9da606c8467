use crate::cli::CheckArgs;
use crate::config::Config;
use crate::core::traits::ProjectSource;
use crate::core::validate::check_collection;
use crate::icons::IconMap;
use crate::storage::Storage;
use crate::utils::error::AppError;
use crate::utils::{OutputStyle, print_success};
use anyhow::Result;

pub fn handle_check_command(config: &Config, args: &CheckArgs) -> Result<()> {
    let storage = Storage::resolve(config, args.file.as_deref());
    let collection = storage.load_projects()?;
    let problems = check_collection(&collection, &IconMap::bundled());

    if problems.is_empty() {
        print_success(&format!(
            "{} project(s) in {} look good",
            collection.len(),
            storage.describe()
        ));
        return Ok(());
    }

    for problem in &problems {
        eprintln!("  {} {}", OutputStyle::error("✗"), problem);
    }
    Err(AppError::Validation(problems.len()).into())
}
