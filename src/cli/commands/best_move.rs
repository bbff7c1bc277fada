//! Best-move command - ask the engine for the optimal move on a board

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{describe_value, print_board, print_kv, print_section},
    search,
    tictactoe::Board,
};

#[derive(Parser, Debug)]
#[command(about = "Compute the optimal move for a position")]
pub struct BestMoveArgs {
    /// Board as nine cells in row-major order ('.' for empty)
    #[arg(long, default_value = ".........")]
    pub state: String,
}

pub fn execute(args: BestMoveArgs) -> Result<()> {
    let board = Board::from_string(&args.state)?;

    print_section("Position");
    print_board(&board);

    if let Some(verdict) = board.verdict() {
        print_kv("Status", "terminal");
        print_kv("Verdict", &verdict.to_string());
        if let Some(line) = board.winning_line() {
            print_kv("Winning line", &format!("{line:?}"));
        }
        return Ok(());
    }

    let result = search::search(&board);
    print_kv("To move", &board.player().to_string());
    if let Some(action) = result.action {
        print_kv("Best move", &action.to_string());
    }
    print_kv(
        "Value",
        &format!("{} ({})", result.value, describe_value(result.value)),
    );

    Ok(())
}
