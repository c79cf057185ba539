//! Rejected human moves.

use crate::board::Pos;

/// Why a click did not turn into a move.
///
/// None of these change the session; the view reports them and waits for
/// another click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The clicked coordinates are outside the 8x8 grid.
    #[display("({}, {}) is off the board", row, col)]
    OutOfBounds { row: i32, col: i32 },

    /// The cell already holds a disk.
    #[display("Cell {} is already occupied", _0)]
    Occupied(Pos),

    /// Placing here would flip nothing.
    #[display("A disk at {} would not flip anything", _0)]
    NoCapture(Pos),

    /// The AI is about to move.
    #[display("AI is thinking")]
    AiThinking,

    /// The game has ended and a new one is about to start.
    #[display("Game is over")]
    GameOver,
}

impl std::error::Error for MoveError {}
