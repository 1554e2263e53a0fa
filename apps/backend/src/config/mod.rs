//! Process configuration: command-line flags with environment fallbacks.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::{GameRules, DEFAULT_HAND_SIZE};
use crate::error::AppError;
use crate::telemetry::DEFAULT_LOG_FILTER;

#[derive(Debug, Clone, Parser)]
#[command(name = "blanks")]
#[command(about = "Fill-in-the-blank party game server")]
pub struct AppConfig {
    /// Prompt deck, one card per line
    #[arg(long, env = "BLANKS_PROMPTS", default_value = "blackcards.txt")]
    pub prompts: PathBuf,

    /// Response deck, one card per line
    #[arg(long, env = "BLANKS_RESPONSES", default_value = "whitecards.txt")]
    pub responses: PathBuf,

    #[arg(long, env = "BLANKS_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "BLANKS_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Response cards each player holds between rounds
    #[arg(long, env = "BLANKS_HAND_SIZE", default_value_t = DEFAULT_HAND_SIZE)]
    pub hand_size: usize,

    /// Fixed shuffle seed for reproducible games
    #[arg(long, env = "BLANKS_SEED")]
    pub seed: Option<u64>,

    /// Tracing directives, overridden by `RUST_LOG`
    #[arg(long = "log", env = "BLANKS_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
}

impl AppConfig {
    pub fn rules(&self) -> Result<GameRules, AppError> {
        if self.hand_size == 0 {
            return Err(AppError::config("hand size must be at least 1"));
        }
        Ok(GameRules::with_hand_size(self.hand_size))
    }
}
