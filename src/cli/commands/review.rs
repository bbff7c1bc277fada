//! Review command - score a position and classify the last move

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{describe_value, print_board, print_kv, print_section},
    search::{self, BlunderRule},
    tictactoe::{Action, Board},
};

#[derive(Parser, Debug)]
#[command(about = "Review a position for blunders")]
pub struct ReviewArgs {
    /// Board as nine cells in row-major order ('.' for empty)
    #[arg(long)]
    pub state: String,

    /// Assess this move ("row,col") played on the board instead of the
    /// board itself
    #[arg(long)]
    pub action: Option<Action>,
}

pub fn execute(args: ReviewArgs) -> Result<()> {
    let board = Board::from_string(&args.state)?;

    print_section("Review");
    print_board(&board);

    if let Some(action) = args.action {
        let assessment = search::assess_move(&board, action)?;
        print_kv("Move", &format!("{} by {}", action, assessment.mover));
        print_kv(
            "Before",
            &format!(
                "{} ({})",
                assessment.value_before,
                describe_value(assessment.value_before)
            ),
        );
        print_kv(
            "After",
            &format!(
                "{} ({})",
                assessment.value_after,
                describe_value(assessment.value_after)
            ),
        );
        print_kv(
            "Non-drawn position",
            yes_no(BlunderRule::NonDrawnPosition.classify(&board, action)?),
        );
        print_kv("Lost value", yes_no(assessment.lost_value()));
        return Ok(());
    }

    let result = search::review(&board);
    print_kv(
        "Value",
        &format!("{} ({})", result.value, describe_value(result.value)),
    );
    if let Some(action) = result.action {
        print_kv(
            "Best reply",
            &format!("{} for {}", action, board.player()),
        );
    }
    if board.empty_count() < 9 {
        print_kv(
            "Blunder",
            &format!(
                "{} (last mover: {})",
                yes_no(search::is_blunder(&board)),
                board.player().opponent()
            ),
        );
    }

    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
