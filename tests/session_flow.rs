//! Human-versus-engine sessions driven through the public API

use tictac::{
    Action, Error, Player, Verdict,
    adapters::AgentKind,
    app::SessionConfig,
    engine,
    search::BlunderRule,
    session::{Session, Status},
};

/// Play the game out, choosing human moves with `pick`, and return how many
/// human moves were flagged.
fn play_out(session: &mut Session, mut pick: impl FnMut(&Session) -> Action) -> usize {
    let mut flagged = 0;
    loop {
        match session.status() {
            Status::Over(_) => return flagged,
            Status::HumanTurn(_) => {
                let action = pick(&*session);
                if session.human_move(action).unwrap().blunder {
                    flagged += 1;
                }
            }
            Status::EngineTurn(_) => {
                session.engine_move().unwrap();
            }
            Status::ChoosingSide => panic!("side should be chosen"),
        }
    }
}

fn optimal_pick(session: &Session) -> Action {
    engine::minimax(session.board()).unwrap()
}

fn first_empty(session: &Session) -> Action {
    session.board().actions()[0]
}

#[test]
fn optimal_human_never_blunders_against_engine() {
    for side in [Player::X, Player::O] {
        let mut session = Session::new(SessionConfig::new().with_human(side)).unwrap();
        let flagged = play_out(&mut session, optimal_pick);
        assert_eq!(flagged, 0);
        assert_eq!(session.status(), Status::Over(Verdict::Tie));
        assert!(session.blunder().is_none());
    }
}

#[test]
fn edge_reply_to_corner_is_flagged_once() {
    let mut session = Session::new(SessionConfig::new().with_human(Player::O)).unwrap();

    // the engine opens in the first drawing cell, the corner
    assert_eq!(session.engine_move().unwrap(), Action::new(0, 0));

    let report = session.human_move(Action::new(0, 1)).unwrap();
    assert!(report.blunder);
    let blunder = *session.blunder().unwrap();
    assert_eq!(blunder.action, Action::new(0, 1));

    // later moves in a lost position are not flagged again
    let flagged = play_out(&mut session, first_empty);
    assert_eq!(flagged, 0);
    assert_eq!(session.status(), Status::Over(Verdict::XWins));
    assert_eq!(session.blunder(), Some(&blunder));
}

#[test]
fn reset_clears_blunder_and_counts_games() {
    let mut session = Session::new(SessionConfig::new().with_human(Player::O)).unwrap();
    session.engine_move().unwrap();
    session.human_move(Action::new(0, 1)).unwrap();
    assert!(session.blunder().is_some());
    assert_eq!(session.game_number(), 1);

    session.reset();
    assert!(session.blunder().is_none());
    assert_eq!(session.game_number(), 2);
    assert_eq!(session.status(), Status::EngineTurn(Player::X));
}

#[test]
fn reference_rule_flags_a_winning_human_move() {
    // with a random engine, the human (X, playing optimally) wins some game;
    // the reference check flags the move that leaves a won position
    let mut wins_flagged = 0;
    for seed in 0..20 {
        let config = SessionConfig::new()
            .with_human(Player::X)
            .with_engine(AgentKind::Random)
            .with_seed(seed);
        let mut session = Session::new(config).unwrap();
        let flagged = play_out(&mut session, optimal_pick);
        assert!(flagged <= 1);
        if session.status() == Status::Over(Verdict::XWins) {
            assert_eq!(flagged, 1);
            wins_flagged += 1;
        }
    }
    assert!(wins_flagged > 0);
}

#[test]
fn lost_value_rule_never_flags_optimal_moves() {
    for seed in 0..10 {
        let config = SessionConfig::new()
            .with_human(Player::O)
            .with_engine(AgentKind::Random)
            .with_seed(seed)
            .with_blunder_rule(BlunderRule::LostValue);
        let mut session = Session::new(config).unwrap();
        let flagged = play_out(&mut session, optimal_pick);
        assert_eq!(flagged, 0);
        assert_ne!(session.status(), Status::Over(Verdict::XWins));
    }
}

#[test]
fn lost_value_rule_flags_the_edge_reply() {
    let config = SessionConfig::new()
        .with_human(Player::O)
        .with_blunder_rule(BlunderRule::LostValue);
    let mut session = Session::new(config).unwrap();
    session.engine_move().unwrap();
    assert!(session.human_move(Action::new(0, 1)).unwrap().blunder);
}

#[test]
fn moves_after_game_over_are_rejected() {
    let mut session = Session::new(SessionConfig::new().with_human(Player::X)).unwrap();
    play_out(&mut session, optimal_pick);
    assert!(matches!(
        session.human_move(Action::new(0, 0)),
        Err(Error::GameOver)
    ));
    assert!(matches!(session.engine_move(), Err(Error::GameOver)));
}
