//! Agent that always plays the alpha-beta optimal move

use crate::{
    Result,
    ports::Agent,
    search,
    tictactoe::{Action, Board},
};

/// Optimal policy agent
///
/// Stateless: the same board always yields the same action.
pub struct OptimalAgent {
    name: String,
}

impl OptimalAgent {
    /// Create a new optimal agent
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

impl Agent for OptimalAgent {
    fn select_action(&mut self, board: &Board) -> Result<Action> {
        search::minimax(board).ok_or(crate::Error::GameOver)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
