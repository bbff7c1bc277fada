//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;

pub use board::{Action, Board, Cell, Player, Verdict};
pub use game::{Game, Move};
pub use lines::{Coord, LineAnalyzer, WINNING_LINES};
