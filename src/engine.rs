//! Caller-facing operations as free functions over [`Board`]
//!
//! A presentation layer drives a game with these nine calls: ask whether the
//! board is terminal and who moves, apply moves with [`result`], ask
//! [`minimax`] for the engine's move, and [`review`] the board after a human
//! move to detect blunders.

use crate::{
    Result,
    search::{self, SearchResult},
    tictactoe::{Action, Board, Player},
};

/// The empty starting board
pub fn initial_state() -> Board {
    Board::new()
}

/// Player to move on `board`
pub fn player(board: &Board) -> Player {
    board.player()
}

/// Empty cells of `board` in row-major order
pub fn actions(board: &Board) -> Vec<Action> {
    board.actions()
}

/// Board after the player to move marks `action`
pub fn result(board: &Board, action: Action) -> Result<Board> {
    board.result(action)
}

/// Player with three in a row, if any
pub fn winner(board: &Board) -> Option<Player> {
    board.winner()
}

/// Whether the game on `board` is over
pub fn terminal(board: &Board) -> bool {
    board.is_terminal()
}

/// 1 if X won, -1 if O won, 0 otherwise
pub fn utility(board: &Board) -> i32 {
    board.utility()
}

/// Optimal action for the player to move, `None` when terminal
pub fn minimax(board: &Board) -> Option<Action> {
    search::minimax(board)
}

/// Exact value of `board` for the player to move
pub fn review(board: &Board) -> SearchResult {
    search::review(board)
}
