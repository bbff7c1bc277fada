//! Loading and saving session configuration files

use std::fs;

use tempfile::TempDir;
use tictac::{
    Error, Player, adapters::AgentKind, app::SessionConfig, search::BlunderRule, session::Session,
};

#[test]
fn save_then_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");

    let config = SessionConfig::new()
        .with_human(Player::O)
        .with_engine(AgentKind::Random)
        .with_seed(11)
        .with_blunder_rule(BlunderRule::LostValue)
        .with_first_game(4);
    config.save(&path).unwrap();

    let loaded = SessionConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn partial_file_takes_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    fs::write(&path, r#"{ "engine": "random", "first_game": 12 }"#).unwrap();

    let config = SessionConfig::load(&path).unwrap();
    assert_eq!(config.engine, AgentKind::Random);
    assert_eq!(config.first_game, 12);
    assert_eq!(config.human, None);
    assert_eq!(config.blunder_rule, BlunderRule::NonDrawnPosition);

    let session = Session::new(config).unwrap();
    assert_eq!(session.game_number(), 12);
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        SessionConfig::load(&path),
        Err(Error::Serialization(_))
    ));
}

#[test]
fn unknown_engine_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    fs::write(&path, r#"{ "engine": "oracle" }"#).unwrap();

    assert!(SessionConfig::load(&path).is_err());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = SessionConfig::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("read config"));
}

#[test]
fn zero_first_game_is_invalid() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    fs::write(&path, r#"{ "first_game": 0 }"#).unwrap();

    assert!(matches!(
        SessionConfig::load(&path),
        Err(Error::InvalidConfiguration { .. })
    ));
}
