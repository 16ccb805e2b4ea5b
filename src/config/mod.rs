pub mod card_config;

pub use crate::utils::logger::LogFormat;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "trellocard")]
#[command(about = "Create a card at the bottom of a Trello list")]
pub struct CliConfig {
    /// Path to the configuration file
    #[arg(short, long, default_value = card_config::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t)]
    pub log_format: LogFormat,

    /// Name of the card to create
    pub card_name: String,
}
