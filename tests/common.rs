//! Common test utilities for the tictac test suite.
//!
//! This module enumerates the positions reachable in legal play.

#![allow(dead_code)]

use std::collections::HashSet;

use tictac::Board;

/// Every distinct board reachable from the empty board by legal play,
/// stopping at terminal positions. Returned in discovery order.
pub fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut order = Vec::new();
    let mut stack = vec![Board::new()];

    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        order.push(board);
        if board.is_terminal() {
            continue;
        }
        for (_, next) in board.successors() {
            stack.push(next);
        }
    }

    order
}

/// Reachable boards on which the game continues
pub fn non_terminal_boards() -> Vec<Board> {
    reachable_boards()
        .into_iter()
        .filter(|board| !board.is_terminal())
        .collect()
}
