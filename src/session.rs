//! Human-versus-engine session state
//!
//! Everything a front end needs to run consecutive games lives in a
//! [`Session`] value: the chosen side, the game in progress, whether a
//! blunder has already been flagged in it, and the running game number.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::{
    Result,
    app::SessionConfig,
    ports::Agent,
    tictactoe::{Action, Board, Game, Player, Verdict},
};

/// What the session is waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// No side has been picked for the human yet
    ChoosingSide,
    /// The human, playing this side, is to move
    HumanTurn(Player),
    /// The engine, playing this side, is to move
    EngineTurn(Player),
    /// The game has finished
    Over(Verdict),
}

/// A flagged blunder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blunder {
    pub action: Action,
    /// Board after the flagged move
    pub board: Board,
}

/// Outcome of a human move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumanMoveReport {
    pub action: Action,
    pub board: Board,
    /// This move was flagged as the game's blunder
    pub blunder: bool,
    pub verdict: Option<Verdict>,
}

/// A sequence of human-versus-engine games
pub struct Session {
    config: SessionConfig,
    engine: Box<dyn Agent>,
    game: Game,
    board: Board,
    human: Option<Player>,
    blunder: Option<Blunder>,
    game_number: u32,
}

impl Session {
    /// Start a session with the configured engine.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid.
    pub fn new(config: SessionConfig) -> Result<Self> {
        let engine = config.engine.into_agent("engine".to_string(), config.seed);
        Self::with_engine(config, engine)
    }

    /// Start a session with an explicit engine agent.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid.
    pub fn with_engine(config: SessionConfig, engine: Box<dyn Agent>) -> Result<Self> {
        config.validate()?;
        info!(
            engine = engine.name(),
            game = config.first_game,
            "starting session"
        );
        Ok(Self {
            human: config.human,
            game_number: config.first_game,
            engine,
            game: Game::new(),
            board: Board::new(),
            blunder: None,
            config,
        })
    }

    pub fn status(&self) -> Status {
        if let Some(verdict) = self.board.verdict() {
            return Status::Over(verdict);
        }
        match self.human {
            None => Status::ChoosingSide,
            Some(human) if human == self.board.player() => Status::HumanTurn(human),
            Some(_) => Status::EngineTurn(self.board.player()),
        }
    }

    /// Pick the human's side for the current game.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] if the game has ended, and
    /// [`crate::Error::InvalidConfiguration`] once moves have been played.
    #[instrument(skip(self), fields(game = self.game_number))]
    pub fn choose_side(&mut self, player: Player) -> Result<()> {
        if self.game.is_over() {
            return Err(crate::Error::GameOver);
        }
        if !self.game.moves.is_empty() {
            return Err(crate::Error::InvalidConfiguration {
                message: "cannot change sides after the game has started".to_string(),
            });
        }
        info!(side = %player, "human side chosen");
        self.human = Some(player);
        Ok(())
    }

    /// Apply a human move and run the blunder check.
    ///
    /// Only the first blunder of a game is flagged.
    ///
    /// # Errors
    ///
    /// Returns error if no side is chosen, the game is over, it is the
    /// engine's turn, or the action is not a legal move.
    #[instrument(skip(self), fields(game = self.game_number))]
    pub fn human_move(&mut self, action: Action) -> Result<HumanMoveReport> {
        let human = self.human.ok_or(crate::Error::SideNotChosen)?;
        if self.game.is_over() {
            return Err(crate::Error::GameOver);
        }
        if self.board.player() != human {
            return Err(crate::Error::NotYourTurn {
                expected: self.board.player(),
            });
        }

        let before = self.board;
        self.board = self.game.play(action)?;
        info!(side = %human, %action, "human move");

        let mut flagged = false;
        if self.blunder.is_none() && self.config.blunder_rule.classify(&before, action)? {
            warn!(%action, board = %self.board.encode(), "blunder");
            self.blunder = Some(Blunder {
                action,
                board: self.board,
            });
            flagged = true;
        }

        self.log_if_over();
        Ok(HumanMoveReport {
            action,
            board: self.board,
            blunder: flagged,
            verdict: self.game.outcome,
        })
    }

    /// Let the engine play its move.
    ///
    /// # Errors
    ///
    /// Returns error if no side is chosen, the game is over, or it is the
    /// human's turn.
    #[instrument(skip(self), fields(game = self.game_number))]
    pub fn engine_move(&mut self) -> Result<Action> {
        let human = self.human.ok_or(crate::Error::SideNotChosen)?;
        if self.game.is_over() {
            return Err(crate::Error::GameOver);
        }
        if self.board.player() == human {
            return Err(crate::Error::NotYourTurn { expected: human });
        }

        let action = self.engine.select_action(&self.board)?;
        self.board = self.game.play(action)?;
        info!(side = %human.opponent(), %action, engine = self.engine.name(), "engine move");

        self.log_if_over();
        Ok(action)
    }

    /// Start the next game: empty board, configured side, cleared blunder
    /// flag, incremented game number.
    pub fn reset(&mut self) {
        self.game = Game::new();
        self.board = Board::new();
        self.human = self.config.human;
        self.blunder = None;
        self.game_number = self.game_number.saturating_add(1);
        info!(game = self.game_number, "new game");
    }

    fn log_if_over(&self) {
        if let Some(verdict) = self.game.outcome {
            info!(game = self.game_number, %verdict, moves = self.game.moves.len(), "game over");
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn human(&self) -> Option<Player> {
        self.human
    }

    /// The blunder flagged in the current game, if any
    pub fn blunder(&self) -> Option<&Blunder> {
        self.blunder.as_ref()
    }

    pub fn game_number(&self) -> u32 {
        self.game_number
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}
