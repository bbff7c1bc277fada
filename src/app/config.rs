//! Configuration types for game sessions.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Result, adapters::AgentKind, search::BlunderRule, tictactoe::Player};

/// Configuration for a [`crate::session::Session`].
///
/// Every field has a default, so a JSON file only needs the fields it
/// changes:
///
/// ```json
/// { "human": "O", "engine": "random", "seed": 7 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Side played by the human; `None` leaves the choice to the caller
    pub human: Option<Player>,
    /// Agent answering the human's moves
    pub engine: AgentKind,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
    /// How human moves are classified as blunders
    pub blunder_rule: BlunderRule,
    /// Number given to the first game of the session
    pub first_game: u32,
}

impl SessionConfig {
    /// Create a configuration with default values:
    /// - Human side: not chosen
    /// - Engine: optimal
    /// - Seed: None (non-deterministic)
    /// - Blunder rule: any move leaving a non-drawn position
    /// - First game: 1
    pub fn new() -> Self {
        Self {
            human: None,
            engine: AgentKind::default(),
            seed: None,
            blunder_rule: BlunderRule::default(),
            first_game: 1,
        }
    }

    /// Pre-select the human's side.
    pub fn with_human(mut self, player: Player) -> Self {
        self.human = Some(player);
        self
    }

    /// Set the engine agent.
    pub fn with_engine(mut self, engine: AgentKind) -> Self {
        self.engine = engine;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the blunder rule.
    pub fn with_blunder_rule(mut self, rule: BlunderRule) -> Self {
        self.blunder_rule = rule;
        self
    }

    /// Set the number of the first game.
    pub fn with_first_game(mut self, number: u32) -> Self {
        self.first_game = number;
        self
    }

    /// Check values that serde cannot.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] if `first_game` is 0.
    pub fn validate(&self) -> Result<()> {
        if self.first_game == 0 {
            return Err(crate::Error::InvalidConfiguration {
                message: "first_game must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Load a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, is not valid JSON, or
    /// fails [`SessionConfig::validate`].
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read config {}", path.display()),
            source,
        })?;
        let config: SessionConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the configuration to a JSON file.
    ///
    /// # Errors
    ///
    /// Returns error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).map_err(|source| crate::Error::Io {
            operation: format!("write config {}", path.display()),
            source,
        })
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.human, None);
        assert_eq!(config.engine, AgentKind::Optimal);
        assert_eq!(config.seed, None);
        assert_eq!(config.blunder_rule, BlunderRule::NonDrawnPosition);
        assert_eq!(config.first_game, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SessionConfig =
            serde_json::from_str(r#"{ "human": "O", "blunder_rule": "lost-value" }"#).unwrap();
        assert_eq!(config.human, Some(Player::O));
        assert_eq!(config.blunder_rule, BlunderRule::LostValue);
        assert_eq!(config.engine, AgentKind::Optimal);
        assert_eq!(config.first_game, 1);
    }

    #[test]
    fn test_zero_first_game_rejected() {
        let config = SessionConfig::new().with_first_game(0);
        assert!(matches!(
            config.validate(),
            Err(crate::Error::InvalidConfiguration { .. })
        ));
    }
}
