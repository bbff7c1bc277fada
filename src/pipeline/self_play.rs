//! Self-play between two agents

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Result,
    ports::Agent,
    tictactoe::{Game, Player, Verdict},
};

/// Tally of finished games
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfPlaySummary {
    pub x_wins: usize,
    pub o_wins: usize,
    pub ties: usize,
}

impl SelfPlaySummary {
    pub fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::XWins => self.x_wins += 1,
            Verdict::OWins => self.o_wins += 1,
            Verdict::Tie => self.ties += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.x_wins + self.o_wins + self.ties
    }

    /// Games won by `player`
    pub fn wins(&self, player: Player) -> usize {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }
}

/// Play one game from the empty board, `x` moving first.
///
/// # Errors
///
/// Returns error if an agent fails to produce a legal move.
pub fn play_game(x: &mut dyn Agent, o: &mut dyn Agent) -> Result<Game> {
    let mut game = Game::new();
    let mut board = game.current_state()?;

    while !game.is_over() {
        let agent: &mut dyn Agent = match board.player() {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };
        let action = agent.select_action(&board)?;
        debug!(agent = agent.name(), %action, "self-play move");
        board = game.play(action)?;
    }

    Ok(game)
}

/// Play `games` games, calling `on_game` after each one.
///
/// # Errors
///
/// Returns the first agent error encountered.
pub fn play_series(
    x: &mut dyn Agent,
    o: &mut dyn Agent,
    games: usize,
    mut on_game: impl FnMut(&Game),
) -> Result<SelfPlaySummary> {
    let mut summary = SelfPlaySummary::default();
    for _ in 0..games {
        let game = play_game(x, o)?;
        if let Some(verdict) = game.outcome {
            summary.record(verdict);
        }
        on_game(&game);
    }
    Ok(summary)
}
