//! Agent port - abstraction over anything that picks moves

use crate::{
    Result,
    tictactoe::{Action, Board},
};

/// Agent trait - a source of moves for one side of the game
///
/// Implemented by the optimal engine and by baselines such as the random
/// agent, so sessions and self-play can mix them freely.
///
/// # Examples
///
/// ```
/// use tictac::{adapters::OptimalAgent, ports::Agent, tictactoe::Board};
///
/// let mut agent = OptimalAgent::new("engine".to_string());
/// let action = agent.select_action(&Board::new()).unwrap();
/// assert!(Board::new().actions().contains(&action));
/// ```
pub trait Agent: Send {
    /// Select an action for the player to move on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] if the board is terminal.
    fn select_action(&mut self, board: &Board) -> Result<Action>;

    /// Get the agent's name.
    ///
    /// Used for identification in logs and self-play summaries.
    fn name(&self) -> &str;

    /// Seed the agent's internal random number generator.
    ///
    /// Deterministic agents ignore it.
    fn set_seed(&mut self, _seed: u64) {}
}
