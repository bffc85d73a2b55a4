//! Tests for loading player configuration.

use numpad_tictactoe::{Game, GameConfig, Mark};
use std::io::Write;

#[test]
fn test_from_toml_str() {
    let config = GameConfig::from_toml_str(
        r#"
        [first]
        name = "Ada"
        mark = "O"

        [second]
        name = "Grace"
        mark = "X"
        "#,
    )
    .expect("Valid config");

    let game = Game::from_config(&config);
    assert_eq!(game.current_player().name(), "Ada");
    assert_eq!(game.current_player().mark(), Mark::O);
    assert_eq!(game.current_player().prompt(), "Ada's Turn: ");
}

#[test]
fn test_missing_seats_use_defaults() {
    let config = GameConfig::from_toml_str("").expect("Empty config is valid");
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_duplicate_marks_rejected() {
    let result = GameConfig::from_toml_str(
        r#"
        [first]
        name = "Ada"
        mark = "O"
        "#,
    );
    let err = result.unwrap_err();
    assert!(err.message.contains("Both players use mark O"));
}

#[test]
fn test_direct_deserialize_cannot_seat_duplicate_marks() {
    let result = toml::from_str::<GameConfig>(
        r#"
        [first]
        name = "Ada"
        mark = "O"
        "#,
    );
    assert!(result.is_err());

    let result = toml::from_str::<GameConfig>(
        r#"
        [first]
        name = "Ada"
        mark = "X"

        [second]
        name = "Grace"
        mark = "X"
        "#,
    );
    assert!(result.is_err());
}

#[test]
fn test_direct_deserialize_rejects_blank_name() {
    let result = toml::from_str::<GameConfig>("[second]\nname = \" \"\nmark = \"O\"");
    assert!(result.is_err());
}

#[test]
fn test_unknown_mark_rejected() {
    let result = GameConfig::from_toml_str(
        r#"
        [first]
        name = "Ada"
        mark = "Z"
        "#,
    );
    assert!(result.is_err());
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[second]\nname = \"Lin\"\nmark = \"O\"").unwrap();

    let config = GameConfig::from_file(file.path()).expect("Valid config file");
    assert_eq!(config.second().name(), "Lin");
    assert_eq!(config.first().name(), "Player 1");
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = GameConfig::from_file(dir.path().join("missing.toml"));
    assert!(result.unwrap_err().message.contains("Failed to read"));
}
