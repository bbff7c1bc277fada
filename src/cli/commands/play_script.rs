//! Play-script command - run a session with scripted human moves

use anyhow::{Result, bail};
use clap::Parser;

use crate::{
    app::SessionConfig,
    cli::output::{print_board, print_kv, print_section},
    session::{Session, Status},
    tictactoe::{Action, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play scripted human moves against the engine")]
pub struct PlayScriptArgs {
    /// Side played by the scripted human (X or O)
    #[arg(long)]
    pub human: Option<Player>,

    /// Human moves as "row,col" separated by ';', e.g. "1,1;0,2"
    #[arg(long)]
    pub moves: String,
}

/// Split a "r,c;r,c" script into actions
pub fn parse_script(script: &str) -> crate::Result<Vec<Action>> {
    script
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}

pub fn execute(args: PlayScriptArgs, mut config: SessionConfig) -> Result<()> {
    if let Some(human) = args.human {
        config.human = Some(human);
    }
    let Some(human) = config.human else {
        bail!("choose a side with --human or the \"human\" config field");
    };
    let mut script = parse_script(&args.moves)?.into_iter();
    let mut session = Session::new(config)?;

    print_section(&format!("Game {} (human plays {human})", session.game_number()));

    loop {
        match session.status() {
            Status::Over(verdict) => {
                print_board(session.board());
                print_kv("Result", &verdict.to_string());
                break;
            }
            Status::HumanTurn(_) => {
                let Some(action) = script.next() else {
                    print_board(session.board());
                    print_kv("Result", "script ended before the game finished");
                    break;
                };
                let report = session.human_move(action)?;
                print_kv("Human", &action.to_string());
                if report.blunder {
                    print_kv(
                        "Blunder",
                        &format!("{action} ({:?})", session.config().blunder_rule),
                    );
                }
            }
            Status::EngineTurn(_) => {
                let action = session.engine_move()?;
                print_kv("Engine", &action.to_string());
            }
            Status::ChoosingSide => session.choose_side(human)?,
        }
    }

    if script.next().is_some() {
        print_kv("Note", "unused moves left in the script");
    }
    Ok(())
}
