//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{Action, Board, Player, Verdict};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub action: Action,
    pub player: Player,
}

/// A complete game with history
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Game {
    pub moves: Vec<Move>,
    pub outcome: Option<Verdict>,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Play a move for whoever is to move, returning the new board
    pub fn play(&mut self, action: Action) -> Result<Board, crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let current = self.current_state()?;
        let next = current.result(action)?;

        self.moves.push(Move {
            action,
            player: current.player(),
        });
        self.outcome = next.verdict();

        Ok(next)
    }

    /// Whether the game has finished
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Replay moves up to a given index (exclusive)
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the state it
    /// is replayed on. This indicates corrupted game data.
    fn replay_moves_until(&self, end_index: usize) -> Result<Board, crate::Error> {
        let mut board = Board::new();
        for m in self.moves.iter().take(end_index) {
            board = board.result(m.action)?;
        }
        Ok(board)
    }

    /// Get current board state
    ///
    /// # Errors
    ///
    /// Returns error if the recorded history is not a legal move sequence.
    pub fn current_state(&self) -> Result<Board, crate::Error> {
        self.replay_moves_until(self.moves.len())
    }

    /// Get the sequence of boards, starting with the empty board
    ///
    /// # Errors
    ///
    /// Returns error if the recorded history is not a legal move sequence.
    pub fn state_sequence(&self) -> Result<Vec<Board>, crate::Error> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        let mut board = Board::new();
        states.push(board);

        for m in &self.moves {
            board = board.result(m.action)?;
            states.push(board);
        }

        Ok(states)
    }
}
