//! Othello engine with a greedy AI opponent
//!
//! Rules engine, single-ply AI and turn controller for Othello (Reversi) on
//! the standard 8x8 board:
//! - Black (the human) moves first from the four-disk opening
//! - A move must flip at least one run of opponent disks in one of 8 directions
//! - The AI plays the move that flips the most disks, first one found on ties
//! - The game ends when the board is full or the side to move is stuck
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Flip scanning and move application
//! - [`engine`]: Greedy AI move selection
//! - [`session`]: Turn controller, delayed AI moves, game-over summaries
//! - [`config`]: Tunables loaded from TOML
//! - [`cli`]: Command-line arguments
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use std::time::Instant;
//! use othello::{GameConfig, GameEvent, Phase, Pos, TurnController};
//!
//! let (mut game, events) = TurnController::with_channel(GameConfig::instant());
//! let now = Instant::now();
//!
//! // Black flips the white disk at (3, 4)
//! assert_eq!(game.click(Pos::new(2, 4), now), Ok(1));
//! assert_eq!(game.phase(), Phase::AiThinking);
//!
//! // The AI's reply lands once its delay has passed
//! game.tick(now);
//! assert_eq!(game.step_count(), 2);
//! assert!(events.try_iter().any(|e| e == GameEvent::AiThinking));
//! ```

pub mod board;
pub mod cli;
pub mod config;
pub mod engine;
pub mod rules;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, Tally, BOARD_SIZE};
pub use config::{ConfigError, GameConfig};
pub use engine::{AIEngine, MoveResult};
pub use rules::{apply_move, evaluate_move, MoveCandidate};
pub use session::{
    GameEvent, GameOverReason, GameSummary, MoveError, Phase, SessionSnapshot, TurnController,
    Winner,
};
