//! Greedy AI opponent
//!
//! The engine looks exactly one ply ahead: it enumerates every legal move for
//! its color and plays the one that flips the most disks. Ties go to the
//! candidate found first when scanning rows top to bottom, columns left to
//! right.
//!
//! # Example
//!
//! ```
//! use othello::{AIEngine, Board, Player};
//!
//! let engine = AIEngine::new();
//! let board = Board::new();
//!
//! let result = engine.choose_move(&board, Player::Second);
//! let best = result.best_move.expect("white can always answer the opening");
//! assert_eq!(best.flip_count(), 1);
//! assert_eq!(result.candidates, 4);
//! ```

use std::time::Instant;

use tracing::{debug, instrument};

use crate::board::{Board, Player};
use crate::rules::{legal_moves, MoveCandidate};

/// Result of a move search with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Chosen move, `None` when the player has no legal move
    pub best_move: Option<MoveCandidate>,
    /// Number of legal moves that were considered
    pub candidates: usize,
    /// Time taken in microseconds
    pub time_us: u64,
}

impl MoveResult {
    /// No legal move for the side to play
    #[inline]
    fn no_move(time_us: u64) -> Self {
        Self {
            best_move: None,
            candidates: 0,
            time_us,
        }
    }
}

/// Single-ply greedy engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct AIEngine;

impl AIEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Get the best move for the given position.
    ///
    /// Convenience wrapper over [`AIEngine::choose_move`] that drops the statistics.
    #[must_use]
    pub fn get_move(&self, board: &Board, player: Player) -> Option<MoveCandidate> {
        self.choose_move(board, player).best_move
    }

    /// Pick the move with the most flips for `player`.
    ///
    /// Candidates are scanned in row-major order and only a strictly larger
    /// flip count replaces the current best, so the first of several equal
    /// candidates wins.
    #[must_use]
    #[instrument(skip(self, board))]
    pub fn choose_move(&self, board: &Board, player: Player) -> MoveResult {
        let start = Instant::now();
        let candidates = legal_moves(board, player);
        let count = candidates.len();

        let mut best: Option<MoveCandidate> = None;
        for candidate in candidates {
            let better = best
                .as_ref()
                .map_or(true, |b| candidate.flip_count() > b.flip_count());
            if better {
                best = Some(candidate);
            }
        }

        let time_us = start.elapsed().as_micros() as u64;
        match best {
            Some(mv) => {
                debug!(pos = %mv.pos, flips = mv.flip_count(), candidates = count, "AI picked move");
                MoveResult {
                    best_move: Some(mv),
                    candidates: count,
                    time_us,
                }
            }
            None => {
                debug!("AI has no legal move");
                MoveResult::no_move(time_us)
            }
        }
    }
}
