//! CLI infrastructure for the tictac engine
//!
//! This module provides the command-line interface for analysing positions,
//! reviewing scripted games, and running engine self-play.

pub mod commands;
pub mod output;
