//! Subcommands of the `tictac` binary

pub mod best_move;
pub mod play_script;
pub mod review;
pub mod self_play;
