//! Tic-tac-toe engine with optimal move selection and blunder review
//!
//! This crate provides:
//! - A value-semantics board model with turn derivation and win detection
//! - Alpha-beta search for the optimal move
//! - An unpruned review search that flags moves leaving a non-drawn position
//! - Agents, self-play, and a human-versus-engine session for callers
//!
//! ```
//! use tictac::engine::{initial_state, minimax, result, terminal};
//!
//! let mut board = initial_state();
//! while !terminal(&board) {
//!     let action = minimax(&board).unwrap();
//!     board = result(&board, action).unwrap();
//! }
//! assert_eq!(board.utility(), 0);
//! ```

pub mod adapters;
pub mod app;
pub mod cli;
pub mod engine;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod search;
pub mod session;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::SearchResult;
pub use session::Session;
pub use tictactoe::{Action, Board, Cell, Player, Verdict};
