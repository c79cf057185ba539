//! Flip rules for Othello
//!
//! Placing a disk captures every straight run of opponent disks that is
//! bounded on the far side by a disk of the mover's color. Runs are checked
//! independently in all 8 compass directions.
//!
//! There is no separate legality check: an empty capture list from
//! [`evaluate_move`] is the illegal-move signal.

use crate::board::{Board, Cell, Player, Pos};

/// Direction vectors for flip checking (8 directions)
pub const DIRECTIONS: [(i32, i32); 8] = [
    (1, 0),   // ↓
    (-1, 0),  // ↑
    (0, 1),   // →
    (0, -1),  // ←
    (1, 1),   // ↘
    (1, -1),  // ↙
    (-1, 1),  // ↗
    (-1, -1), // ↖
];

/// A legal placement together with the disks it flips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveCandidate {
    pub pos: Pos,
    pub flips: Vec<Pos>,
}

impl MoveCandidate {
    /// Number of opponent disks this move flips
    #[inline]
    pub fn flip_count(&self) -> usize {
        self.flips.len()
    }
}

/// Find the opponent disks that would be flipped if `player` placed a disk at `pos`.
///
/// Returns an empty list when the target is occupied or when no direction
/// yields a bounded run. The board is never modified.
///
/// # Arguments
/// * `board` - Current board state
/// * `player` - Player about to move
/// * `pos` - Target cell
pub fn evaluate_move(board: &Board, player: Player, pos: Pos) -> Vec<Pos> {
    let mut flips = Vec::new();
    if !board.is_empty(pos) {
        return flips;
    }

    let own = player.color();
    let opponent = own.opponent();

    for &(dr, dc) in &DIRECTIONS {
        let mut run = Vec::new();
        let mut cursor = pos.offset(dr, dc);

        while let Some(next) = cursor {
            let cell = board.get(next);
            if cell == opponent {
                run.push(next);
                cursor = next.offset(dr, dc);
            } else {
                // Own disk closes the run; empty cell discards it
                if cell == own && !run.is_empty() {
                    flips.extend_from_slice(&run);
                }
                break;
            }
        }
        // Falling off the edge leaves `run` open-ended: nothing captured.
    }

    flips
}

/// Check whether `player` can flip anything by playing at `pos`.
#[inline]
pub fn is_legal_move(board: &Board, player: Player, pos: Pos) -> bool {
    !evaluate_move(board, player, pos).is_empty()
}

/// Place `player`'s disk at `pos` and recolor every cell in `flips`.
///
/// `flips` must come from [`evaluate_move`] on the same board and must not be
/// empty; a placement that flips nothing is not a legal move.
pub fn apply_move(board: &mut Board, player: Player, pos: Pos, flips: &[Pos]) {
    debug_assert!(!flips.is_empty(), "apply_move called without flips at {}", pos);
    debug_assert!(board.is_empty(pos), "apply_move on occupied cell {}", pos);

    let color = player.color();
    board.set(pos, color);
    for &flipped in flips {
        debug_assert_eq!(board.get(flipped), color.opponent());
        board.set(flipped, color);
    }
}

/// Every legal move for `player`, in row-major order of the target cell.
pub fn legal_moves(board: &Board, player: Player) -> Vec<MoveCandidate> {
    Board::positions()
        .filter_map(|pos| {
            let flips = evaluate_move(board, player, pos);
            (!flips.is_empty()).then_some(MoveCandidate { pos, flips })
        })
        .collect()
}

/// Check if `player` has at least one legal move anywhere on the board.
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    Board::positions()
        .any(|pos| board.get(pos) == Cell::Empty && is_legal_move(board, player, pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(rows: [&str; 8]) -> Board {
        let mut board = Board::empty();
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                let cell = match ch {
                    'X' => Cell::Black,
                    'O' => Cell::White,
                    _ => Cell::Empty,
                };
                board.set(Pos::new(r as u8, c as u8), cell);
            }
        }
        board
    }

    #[test]
    fn test_opening_moves_for_black() {
        let board = Board::new();
        let expected = [
            Pos::new(2, 4),
            Pos::new(3, 5),
            Pos::new(4, 2),
            Pos::new(5, 3),
        ];

        for pos in Board::positions() {
            let flips = evaluate_move(&board, Player::First, pos);
            if expected.contains(&pos) {
                assert_eq!(flips.len(), 1, "expected one flip at {}", pos);
            } else {
                assert!(flips.is_empty(), "unexpected flips at {}", pos);
            }
        }
    }

    #[test]
    fn test_opening_flip_targets() {
        let board = Board::new();
        assert_eq!(
            evaluate_move(&board, Player::First, Pos::new(2, 4)),
            vec![Pos::new(3, 4)]
        );
        assert_eq!(
            evaluate_move(&board, Player::First, Pos::new(4, 2)),
            vec![Pos::new(4, 3)]
        );
        // Directly above a black disk: the neighbour closes immediately
        assert!(evaluate_move(&board, Player::First, Pos::new(2, 3)).is_empty());
    }

    #[test]
    fn test_opening_moves_for_white() {
        let board = Board::new();
        let moves: Vec<Pos> = legal_moves(&board, Player::Second)
            .into_iter()
            .map(|m| m.pos)
            .collect();
        assert_eq!(
            moves,
            vec![
                Pos::new(2, 3),
                Pos::new(3, 2),
                Pos::new(4, 5),
                Pos::new(5, 4)
            ]
        );
    }

    #[test]
    fn test_occupied_target_is_illegal() {
        let board = Board::new();
        for pos in Board::positions().filter(|&p| !board.is_empty(p)) {
            assert!(evaluate_move(&board, Player::First, pos).is_empty());
            assert!(evaluate_move(&board, Player::Second, pos).is_empty());
        }
    }

    #[test]
    fn test_evaluate_does_not_mutate() {
        let board = board_from([
            "........",
            ".OOOX...",
            "..XO....",
            "...XO...",
            "...OX...",
            "........",
            "........",
            "........",
        ]);
        let before = board;
        for pos in Board::positions() {
            let _ = evaluate_move(&board, Player::First, pos);
            let _ = evaluate_move(&board, Player::Second, pos);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_long_run_is_captured() {
        let board = board_from([
            "XOOOOOO.",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ]);
        let flips = evaluate_move(&board, Player::First, Pos::new(0, 7));
        assert_eq!(flips.len(), 6);
        assert!(flips.contains(&Pos::new(0, 1)));
        assert!(flips.contains(&Pos::new(0, 6)));
    }

    #[test]
    fn test_run_open_to_edge_is_not_captured() {
        // White run reaches the edge without a closing black disk
        let board = board_from([
            "OOO.....",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ]);
        assert!(evaluate_move(&board, Player::First, Pos::new(0, 3)).is_empty());
    }

    #[test]
    fn test_run_broken_by_empty_is_not_captured() {
        let board = board_from([
            "X.OO....",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ]);
        assert!(evaluate_move(&board, Player::First, Pos::new(0, 4)).is_empty());
    }

    #[test]
    fn test_multiple_directions_combine() {
        // Black at (4,4) flips left, up and diagonally at once
        let board = board_from([
            "X...X...",
            ".O..O...",
            "..O.O...",
            "...OO...",
            "XOOO....",
            "........",
            "........",
            "........",
        ]);
        let flips = evaluate_move(&board, Player::First, Pos::new(4, 4));
        assert_eq!(flips.len(), 9);
        for p in [
            Pos::new(4, 1),
            Pos::new(4, 2),
            Pos::new(4, 3),
            Pos::new(3, 4),
            Pos::new(2, 4),
            Pos::new(1, 4),
            Pos::new(3, 3),
            Pos::new(2, 2),
            Pos::new(1, 1),
        ] {
            assert!(flips.contains(&p), "missing flip {}", p);
        }
    }

    #[test]
    fn test_white_captures_black() {
        let board = board_from([
            "........",
            "........",
            "........",
            "..OXX...",
            "........",
            "........",
            "........",
            "........",
        ]);
        let flips = evaluate_move(&board, Player::Second, Pos::new(3, 5));
        assert_eq!(flips, vec![Pos::new(3, 4), Pos::new(3, 3)]);
    }

    #[test]
    fn test_apply_move_recolors_only_target_and_flips() {
        let mut board = Board::new();
        let target = Pos::new(2, 4);
        let flips = evaluate_move(&board, Player::First, target);
        let before = board;

        apply_move(&mut board, Player::First, target, &flips);

        for pos in Board::positions() {
            if pos == target || flips.contains(&pos) {
                assert_eq!(board.get(pos), Cell::Black);
            } else {
                assert_eq!(board.get(pos), before.get(pos));
            }
        }
    }

    #[test]
    fn test_tally_after_first_move() {
        let mut board = Board::new();
        let target = Pos::new(2, 4);
        let flips = evaluate_move(&board, Player::First, target);
        apply_move(&mut board, Player::First, target, &flips);

        let tally = board.tally();
        assert_eq!(tally.black, 4);
        assert_eq!(tally.white, 1);
        assert_eq!(tally.total(), 5);
    }

    #[test]
    fn test_has_legal_move() {
        let board = Board::new();
        assert!(has_legal_move(&board, Player::First));
        assert!(has_legal_move(&board, Player::Second));

        // Only black disks: white can never capture
        let lonely = board_from([
            "XX......",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ]);
        assert!(!has_legal_move(&lonely, Player::Second));
        assert!(!has_legal_move(&lonely, Player::First));
    }
}
