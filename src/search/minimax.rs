//! Optimal move selection with alpha-beta pruning

use tracing::debug;

use super::{SearchResult, improves};
use crate::tictactoe::{Action, Board, Player};

/// Optimal action for the player to move, `None` on a terminal board.
///
/// Among equally valued actions the first in row-major order is chosen.
pub fn minimax(board: &Board) -> Option<Action> {
    if board.is_terminal() {
        return None;
    }
    search(board).action
}

/// Full-depth alpha-beta search from `board`, returning the root value and
/// the chosen action.
pub fn search(board: &Board) -> SearchResult {
    let mut nodes = 0u64;
    let result = match board.player() {
        Player::X => max_value(board, i32::MIN, i32::MAX, &mut nodes),
        Player::O => min_value(board, i32::MIN, i32::MAX, &mut nodes),
    };
    debug!(
        board = %board.encode(),
        value = result.value,
        action = ?result.action,
        nodes,
        "alpha-beta search complete"
    );
    result
}

fn max_value(board: &Board, mut alpha: i32, beta: i32, nodes: &mut u64) -> SearchResult {
    *nodes += 1;
    if board.is_terminal() {
        return SearchResult::terminal(board);
    }

    let mut best = SearchResult::worst_for(Player::X);
    for (action, child) in board.successors() {
        let value = min_value(&child, alpha, beta, nodes).value;
        if improves(Player::X, value, best.value) {
            best = SearchResult {
                value,
                action: Some(action),
            };
        }
        alpha = alpha.max(best.value);
        if beta <= alpha {
            break;
        }
    }
    best
}

fn min_value(board: &Board, alpha: i32, mut beta: i32, nodes: &mut u64) -> SearchResult {
    *nodes += 1;
    if board.is_terminal() {
        return SearchResult::terminal(board);
    }

    let mut best = SearchResult::worst_for(Player::O);
    for (action, child) in board.successors() {
        let value = max_value(&child, alpha, beta, nodes).value;
        if improves(Player::O, value, best.value) {
            best = SearchResult {
                value,
                action: Some(action),
            };
        }
        beta = beta.min(best.value);
        if beta <= alpha {
            break;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let won = board("XXX OO. ...");
        assert_eq!(minimax(&won), None);
        assert_eq!(
            search(&won),
            SearchResult {
                value: 1,
                action: None
            }
        );
    }

    #[test]
    fn test_x_completes_row() {
        let b = board("XX. OO. ...");
        assert_eq!(b.player(), Player::X);
        assert_eq!(minimax(&b), Some(Action::new(0, 2)));
        assert_eq!(search(&b).value, 1);
    }

    #[test]
    fn test_o_takes_win_over_block() {
        // O to move can win at (1,2) or must otherwise block X at (0,2)
        let b = board("XX. OO. X..");
        assert_eq!(b.player(), Player::O);
        assert_eq!(minimax(&b), Some(Action::new(1, 2)));
        assert_eq!(search(&b).value, -1);
    }

    #[test]
    fn test_o_blocks_immediate_threat() {
        let b = board("XX. .O. ...");
        assert_eq!(minimax(&b), Some(Action::new(0, 2)));
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let result = search(&Board::new());
        assert_eq!(result.value, 0);
        // every opening draws, so the first in row-major order is kept
        assert_eq!(result.action, Some(Action::new(0, 0)));
    }
}
