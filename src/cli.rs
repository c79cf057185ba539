//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;
use tracing::instrument;

use crate::config::{ConfigError, GameConfig};

/// Othello against a greedy AI
#[derive(Parser, Debug)]
#[command(name = "othello")]
#[command(about = "Play Othello against a greedy AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Delay before the AI's move lands, in milliseconds
    #[arg(long)]
    pub ai_delay_ms: Option<u64>,

    /// Delay before the game-over summary, in milliseconds
    #[arg(long)]
    pub game_over_delay_ms: Option<u64>,

    /// Pass when stuck; end only when neither side can move
    #[arg(long)]
    pub strict: bool,

    /// Do not highlight legal moves
    #[arg(long)]
    pub hide_legal_moves: bool,
}

impl Cli {
    /// Config file values (or defaults) with command-line overrides applied.
    #[instrument(skip(self))]
    pub fn resolve_config(&self) -> Result<GameConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(ms) = self.ai_delay_ms {
            config.ai_delay_ms = ms;
        }
        if let Some(ms) = self.game_over_delay_ms {
            config.game_over_delay_ms = ms;
        }
        if self.strict {
            config.strict_end_detection = true;
        }
        if self.hide_legal_moves {
            config.show_legal_moves = false;
        }
        Ok(config)
    }
}
