//! Game rules for Othello
//!
//! Move legality and flip resolution live together in [`flip`]: evaluating a
//! target cell yields the disks it would flip, and an empty result means the
//! move is illegal.

pub mod flip;

// Re-exports for convenient access
pub use flip::{
    apply_move, evaluate_move, has_legal_move, is_legal_move, legal_moves, MoveCandidate,
    DIRECTIONS,
};
