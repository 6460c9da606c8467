use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::utils::{OutputStyle, print_success};
use anyhow::{Context, Result};

pub fn handle_config_command(config: Config, command: Option<ConfigCommands>) -> Result<()> {
    match command.unwrap_or(ConfigCommands::Show) {
        ConfigCommands::Show => show_config(&config)?,
        ConfigCommands::Path => println!("{}", Config::config_file_path().display()),
        ConfigCommands::Reset => {
            Config::default().save()?;
            print_success("Configuration reset to defaults");
        }
    }
    Ok(())
}

fn show_config(config: &Config) -> Result<()> {
    let content = toml::to_string_pretty(config).context("Failed to serialize config")?;

    OutputStyle::print_header("Configuration");
    OutputStyle::print_field_colored(
        "File",
        &Config::config_file_path().display().to_string(),
        OutputStyle::muted,
    );
    println!("{}", OutputStyle::separator());
    println!("{}", content.trim_end());
    Ok(())
}
