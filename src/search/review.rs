//! Move-quality review and blunder classification
//!
//! [`review`] searches without alpha-beta bounds. It only cuts a node short
//! once the mover has found an action reaching their ideal outcome, so the
//! value it reports is the exact game-theoretic value of the position.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{SearchResult, improves};
use crate::tictactoe::{Action, Board, Player};

/// Value of `board` for the player to move and the first action reaching it.
pub fn review(board: &Board) -> SearchResult {
    let mut nodes = 0u64;
    let result = review_node(board, &mut nodes);
    debug!(
        board = %board.encode(),
        value = result.value,
        action = ?result.action,
        nodes,
        "review complete"
    );
    result
}

fn review_node(board: &Board, nodes: &mut u64) -> SearchResult {
    *nodes += 1;
    if board.is_terminal() {
        return SearchResult::terminal(board);
    }

    let mover = board.player();
    let ideal = mover.ideal_utility();
    let mut best = SearchResult::worst_for(mover);
    for (action, child) in board.successors() {
        let value = review_node(&child, nodes).value;
        if improves(mover, value, best.value) {
            best = SearchResult {
                value,
                action: Some(action),
            };
            if best.value == ideal {
                return best;
            }
        }
    }
    best
}

/// Reference blunder check on the board left by a just-played move.
///
/// The position is reviewed from the perspective of the player now to move;
/// any non-zero value counts. This flags a move that leaves the position
/// non-drawn, which is not the same as the move itself being suboptimal.
pub fn is_blunder(after: &Board) -> bool {
    review(after).value != 0
}

/// Reviewed values around a single move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveAssessment {
    pub mover: Player,
    pub action: Action,
    /// Value of the position before the move
    pub value_before: i32,
    /// Value of the position after the move
    pub value_after: i32,
}

impl MoveAssessment {
    /// The move made the outcome worse for the mover than optimal play would
    pub fn lost_value(&self) -> bool {
        improves(self.mover, self.value_before, self.value_after)
    }

    /// The position after the move is not a draw
    pub fn leaves_non_drawn(&self) -> bool {
        self.value_after != 0
    }
}

/// Review both sides of `action` played on `before`.
///
/// # Errors
///
/// Returns [`crate::Error::GameOver`] on a terminal board and
/// [`crate::Error::InvalidMove`] for an illegal action.
pub fn assess_move(before: &Board, action: Action) -> Result<MoveAssessment, crate::Error> {
    if before.is_terminal() {
        return Err(crate::Error::GameOver);
    }
    let after = before.result(action)?;
    Ok(MoveAssessment {
        mover: before.player(),
        action,
        value_before: review(before).value,
        value_after: review(&after).value,
    })
}

/// How a caller decides that a move was a blunder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlunderRule {
    /// Any move leaving a non-drawn position ([`is_blunder`])
    #[default]
    NonDrawnPosition,
    /// Only moves that lose value for the mover
    LostValue,
}

impl BlunderRule {
    /// Apply the rule to `action` played on `before`.
    pub fn classify(self, before: &Board, action: Action) -> Result<bool, crate::Error> {
        match self {
            BlunderRule::NonDrawnPosition => Ok(is_blunder(&before.result(action)?)),
            BlunderRule::LostValue => Ok(assess_move(before, action)?.lost_value()),
        }
    }
}
