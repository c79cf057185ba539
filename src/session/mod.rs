//! Game session: turn order, the AI's delayed replies and game-over handling.
//!
//! [`TurnController`] owns all mutable session state. Views hold a controller,
//! forward clicks to it, call [`TurnController::tick`] from their frame loop and
//! render from [`SessionSnapshot`]s and [`GameEvent`]s.

mod controller;
mod error;
mod types;

pub use controller::{Action, ScheduledAction, TurnController};
pub use error::MoveError;
pub use types::{
    GameEvent, GameOverReason, GameSummary, Phase, SessionSnapshot, Winner, AI, HUMAN, MAX_STEPS,
};
