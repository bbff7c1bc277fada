//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::tictactoe::Board;

/// Create a progress bar for self-play
pub fn create_game_progress(total_games: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_games);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
            .expect("Invalid progress bar template")
            .progress_chars("=>-"),
    );
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print a board indented under the current section
pub fn print_board(board: &Board) {
    for line in board.to_string().lines() {
        println!("  {line}");
    }
}

/// Describe a search value in words
pub fn describe_value(value: i32) -> &'static str {
    match value.signum() {
        1 => "X can force a win",
        -1 => "O can force a win",
        _ => "draw with best play",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_value() {
        assert_eq!(describe_value(1), "X can force a win");
        assert_eq!(describe_value(-1), "O can force a win");
        assert_eq!(describe_value(0), "draw with best play");
    }
}
