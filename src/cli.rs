use crate::commands::{check, configure, icons, projects, work};
use crate::config::Config;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio project and work-history content")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short, long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Commands {
    pub fn execute(self, config: Config) -> Result<()> {
        match self {
            Commands::Projects(args) => projects::handle_projects_command(&config, &args)?,
            Commands::Work(args) => work::handle_work_command(&config, &args)?,
            Commands::Icons(args) => icons::handle_icons_command(&config, &args)?,
            Commands::Check(args) => check::handle_check_command(&config, &args)?,
            Commands::Config(args) => configure::handle_config_command(config, args.command)?,
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List published projects in display order
    Projects(ProjectsArgs),

    /// List work history
    Work(WorkArgs),

    /// List bundled icons or print one
    Icons(IconsArgs),

    /// Validate project data against the bundled icons
    Check(CheckArgs),

    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct ProjectsArgs {
    #[arg(long, value_name = "PATH", help = "Projects JSON to read instead of the configured source")]
    pub file: Option<PathBuf>,

    #[arg(short, long)]
    pub format: Option<ListFormat>,

    #[arg(long, help = "Show raw records, including unpublished ones")]
    pub all: bool,
}

#[derive(Args)]
pub struct WorkArgs {
    #[arg(short, long)]
    pub format: Option<ListFormat>,
}

#[derive(Args)]
pub struct IconsArgs {
    #[arg(help = "Icon key to print, e.g. PhoenixIcon or job")]
    pub name: Option<String>,

    #[arg(long, help = "Print the outlined variant")]
    pub outline: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(clap::ValueEnum, Clone, Debug, PartialEq)]
pub enum ListFormat {
    Simple,
    Detailed,
    Table,
    Json,
}

impl ListFormat {
    /// Format from the command line, falling back to the configured default
    pub fn resolve(explicit: Option<&ListFormat>, config: &Config) -> ListFormat {
        if let Some(format) = explicit {
            return format.clone();
        }
        match config.general.format.as_deref() {
            Some("detailed") => ListFormat::Detailed,
            Some("table") => ListFormat::Table,
            Some("json") => ListFormat::Json,
            _ => ListFormat::Simple,
        }
    }
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Reset configuration to defaults
    Reset,
}
