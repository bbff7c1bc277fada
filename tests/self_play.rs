//! Agent self-play through the pipeline

use tictac::{
    Player, Verdict,
    adapters::{AgentKind, OptimalAgent, RandomAgent},
    pipeline::{play_game, play_series},
    ports::Agent,
};

#[test]
fn optimal_never_loses_to_random() {
    for (optimal_side, seed) in [(Player::X, 1), (Player::O, 2)] {
        let mut optimal = OptimalAgent::new("optimal".to_string());
        let mut random = RandomAgent::with_seed("random".to_string(), seed);
        let summary = match optimal_side {
            Player::X => play_series(&mut optimal, &mut random, 30, |_| {}),
            Player::O => play_series(&mut random, &mut optimal, 30, |_| {}),
        }
        .unwrap();

        assert_eq!(summary.total(), 30);
        assert_eq!(summary.wins(optimal_side.opponent()), 0);
    }
}

#[test]
fn seeded_series_is_reproducible() {
    let run = || {
        let mut x = AgentKind::Random.into_agent("x".to_string(), Some(9));
        let mut o = AgentKind::Random.into_agent("o".to_string(), Some(10));
        let mut games = Vec::new();
        play_series(x.as_mut(), o.as_mut(), 15, |game| games.push(game.moves.clone())).unwrap();
        games
    };
    assert_eq!(run(), run());
}

#[test]
fn recorded_game_replays_to_final_board() {
    let mut x = RandomAgent::with_seed("x".to_string(), 5);
    let mut o = OptimalAgent::new("o".to_string());
    let game = play_game(&mut x, &mut o).unwrap();

    let states = game.state_sequence().unwrap();
    let last = *states.last().unwrap();
    assert!(last.is_terminal());
    assert_eq!(Some(last.verdict().unwrap()), game.outcome);
    assert_ne!(game.outcome, Some(Verdict::XWins));
    for (m, board) in game.moves.iter().zip(&states) {
        assert_eq!(m.player, board.player());
    }
}

#[test]
fn agent_names_come_from_kind() {
    let agent = AgentKind::Optimal.into_agent("engine".to_string(), None);
    assert_eq!(agent.name(), "engine");
    assert_eq!("minimax".parse::<AgentKind>().unwrap(), AgentKind::Optimal);
    assert_eq!(AgentKind::Random.to_string(), "random");
}
