//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// A cell coordinate as `(row, col)`
pub type Coord = (usize, usize);

/// The eight winning lines on the 3x3 board
pub const WINNING_LINES: [[Coord; 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)], // rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)], // columns
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has three in a row
    pub fn has_won(grid: &[[Cell; 3]; 3], player: Player) -> bool {
        let target = Cell::Mark(player);
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&(row, col)| grid[row][col] == target))
    }

    /// All lines completed by the player
    pub fn completed_lines(grid: &[[Cell; 3]; 3], player: Player) -> Vec<[Coord; 3]> {
        let target = Cell::Mark(player);
        WINNING_LINES
            .iter()
            .filter(|line| line.iter().all(|&(row, col)| grid[row][col] == target))
            .copied()
            .collect()
    }
}
