//! Adversarial search over the tic-tac-toe game tree
//!
//! Two searches share the same zero-sum utility (X maximizes, O minimizes):
//! - [`minimax`] picks a move with alpha-beta pruning
//! - [`review`] scores a position without alpha-beta bounds, stopping early
//!   once the mover's best possible outcome is found

pub mod minimax;
pub mod review;

use serde::{Deserialize, Serialize};

use crate::tictactoe::{Action, Board, Player};

pub use minimax::{minimax, search};
pub use review::{BlunderRule, MoveAssessment, assess_move, is_blunder, review};

/// Value of a position paired with the move that achieves it
///
/// `action` is `None` at terminal positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchResult {
    pub value: i32,
    pub action: Option<Action>,
}

impl SearchResult {
    fn terminal(board: &Board) -> Self {
        SearchResult {
            value: board.utility(),
            action: None,
        }
    }

    /// Starting point for the mover before any action is scored
    fn worst_for(player: Player) -> Self {
        SearchResult {
            value: match player {
                Player::X => i32::MIN,
                Player::O => i32::MAX,
            },
            action: None,
        }
    }
}

/// Whether `candidate` is strictly better than `current` for `player`
fn improves(player: Player, candidate: i32, current: i32) -> bool {
    match player {
        Player::X => candidate > current,
        Player::O => candidate < current,
    }
}
