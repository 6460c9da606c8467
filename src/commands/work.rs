use crate::cli::{ListFormat, WorkArgs};
use crate::config::Config;
use crate::core::work::{WorkHistory, work};
use crate::utils::DisplayFormatter;
use anyhow::Result;

pub fn handle_work_command(config: &Config, args: &WorkArgs) -> Result<()> {
    let format = ListFormat::resolve(args.format.as_ref(), config);

    if format == ListFormat::Json {
        DisplayFormatter::print_json(&WorkHistory::new(config.general.icon_size))?;
        return Ok(());
    }

    DisplayFormatter::format_work(work(), &format)?;
    Ok(())
}
