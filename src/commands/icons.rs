use crate::cli::IconsArgs;
use crate::config::Config;
use crate::icons::{IconName, WorkIcon};
use crate::svg::sanitize_to_outline;
use crate::utils::DisplayFormatter;
use crate::utils::error::AppError;
use anyhow::Result;

pub fn handle_icons_command(config: &Config, args: &IconsArgs) -> Result<()> {
    let Some(name) = &args.name else {
        let keys: Vec<&str> = IconName::ALL
            .iter()
            .map(|i| i.key())
            .chain(WorkIcon::ALL.iter().map(|i| i.key()))
            .collect();
        DisplayFormatter::print_icon_keys(&keys);
        return Ok(());
    };

    let raw = IconName::from_key(name)
        .map(IconName::svg)
        .or_else(|| WorkIcon::from_key(name).map(WorkIcon::svg))
        .ok_or_else(|| AppError::NotFound {
            item_type: "Icon".to_string(),
            key: name.clone(),
        })?;

    if args.outline {
        println!("{}", sanitize_to_outline(raw, config.general.icon_size));
    } else {
        print!("{}", raw);
    }

    Ok(())
}
