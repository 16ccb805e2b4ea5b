pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::LogFormat;

pub use crate::config::card_config::CardConfig;
pub use crate::core::{client::TrelloClient, engine::CardEngine};
pub use crate::utils::error::{Result, TrelloCardError};
