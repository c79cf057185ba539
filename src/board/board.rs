//! Board structure with the standard Othello opening

use std::fmt;

use super::bitboard::Bitboard;
use super::{Cell, Pos, BOARD_SIZE, TOTAL_CELLS};

/// Game board.
///
/// Black and white disks live in separate bitboards. A cell is never set in
/// both, so every cell is exactly one of `Empty`, `Black` or `White`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Black disks bitboard
    black: Bitboard,
    /// White disks bitboard
    white: Bitboard,
}

/// Disk counts per color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    pub black: u32,
    pub white: u32,
}

impl Tally {
    #[inline]
    pub fn total(&self) -> u32 {
        self.black + self.white
    }
}

impl Board {
    /// Fresh board with the four opening disks:
    /// Black on (3,3) and (4,4), White on (3,4) and (4,3).
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.set(Pos::new(3, 3), Cell::Black);
        board.set(Pos::new(4, 4), Cell::Black);
        board.set(Pos::new(3, 4), Cell::White);
        board.set(Pos::new(4, 3), Cell::White);
        board
    }

    /// Board with no disks at all (used to build test positions)
    pub const fn empty() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Get cell contents at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        if self.black.get(pos) {
            Cell::Black
        } else if self.white.get(pos) {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Overwrite a cell. Setting a color clears the other one first.
    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        self.black.clear(pos);
        self.white.clear(pos);
        match cell {
            Cell::Black => self.black.set(pos),
            Cell::White => self.white.set(pos),
            Cell::Empty => {}
        }
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn disks(&self, cell: Cell) -> Option<&Bitboard> {
        match cell {
            Cell::Black => Some(&self.black),
            Cell::White => Some(&self.white),
            Cell::Empty => None,
        }
    }

    /// Count disks of each color over all 64 cells
    #[inline]
    pub fn tally(&self) -> Tally {
        Tally {
            black: self.black.count(),
            white: self.white.count(),
        }
    }

    /// Total disks on board
    #[inline]
    pub fn disk_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    #[inline]
    pub fn empty_count(&self) -> u32 {
        TOTAL_CELLS as u32 - self.disk_count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// All 64 positions in row-major order
    pub fn positions() -> impl Iterator<Item = Pos> {
        (0..TOTAL_CELLS).map(Pos::from_index)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE as u8 {
            let line: String = (0..BOARD_SIZE as u8)
                .map(|col| self.get(Pos::new(row, col)).symbol())
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
