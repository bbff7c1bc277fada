//! Application layer: configuration shared by the session and the CLI.
//!
//! # Usage
//!
//! ```
//! use tictac::app::SessionConfig;
//! use tictac::adapters::AgentKind;
//! use tictac::tictactoe::Player;
//!
//! let config = SessionConfig::new()
//!     .with_human(Player::O)
//!     .with_engine(AgentKind::Random)
//!     .with_seed(42);
//! assert_eq!(config.human, Some(Player::O));
//! ```

pub mod config;

pub use config::SessionConfig;
