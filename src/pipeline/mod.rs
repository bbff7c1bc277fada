//! Agent-versus-agent game loops

pub mod self_play;

pub use self_play::{SelfPlaySummary, play_game, play_series};
