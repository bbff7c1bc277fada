//! Self-play command - pit two agents against each other

use anyhow::Result;
use clap::Parser;

use crate::{
    adapters::AgentKind,
    cli::output::{create_game_progress, print_kv, print_section},
    pipeline,
};

#[derive(Parser, Debug)]
#[command(about = "Run games between two agents")]
pub struct SelfPlayArgs {
    /// Agent playing X (optimal or random)
    #[arg(long, default_value = "optimal")]
    pub x: AgentKind,

    /// Agent playing O (optimal or random)
    #[arg(long, default_value = "random")]
    pub o: AgentKind,

    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Random seed for reproducibility (O uses seed + 1)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

pub fn execute(args: SelfPlayArgs) -> Result<()> {
    let mut x = args.x.into_agent(format!("X-{}", args.x), args.seed);
    let mut o = args
        .o
        .into_agent(format!("O-{}", args.o), args.seed.map(|s| s.wrapping_add(1)));

    let pb = (!args.no_progress).then(|| create_game_progress(args.games as u64));
    let summary = pipeline::play_series(x.as_mut(), o.as_mut(), args.games, |game| {
        if let Some(pb) = &pb {
            if let Some(verdict) = game.outcome {
                pb.set_message(verdict.to_string());
            }
            pb.inc(1);
        }
    })?;
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    print_section(&format!("{} vs {}", x.name(), o.name()));
    print_kv("Games", &summary.total().to_string());
    print_kv("X wins", &summary.x_wins.to_string());
    print_kv("O wins", &summary.o_wins.to_string());
    print_kv("Ties", &summary.ties.to_string());

    Ok(())
}
