//! Tests for the interactive game loop with scripted input.

use noughts::{Difficulty, FirstPlayer, GameConfig, GameEngine, PlayerConfig};
use noughts_cli::play;
use std::io::Cursor;

fn session(config: GameConfig, input: &str) -> (u32, String) {
    let game = GameEngine::new(config).unwrap();
    let mut output = Vec::new();
    let played = play::run(game, Cursor::new(input.to_string()), &mut output).unwrap();
    (played, String::from_utf8(output).unwrap())
}

#[test]
fn test_named_players_prompted_in_turn() {
    let config = GameConfig::default()
        .with_first(PlayerConfig::human("Ada"))
        .with_second(PlayerConfig::human("Grace"));

    // Grace takes the left column.
    let (played, output) = session(config, "2\n1\n3\n4\n9\n7\n");

    assert_eq!(played, 1);
    assert!(output.contains("Ada (O), choose a square"), "{}", output);
    assert!(output.contains("Grace (X), choose a square"), "{}", output);
    assert!(output.contains("Grace wins!"), "{}", output);
}

#[test]
fn test_draw_reports_tie() {
    // O X O / O X X / X O O
    let (played, output) = session(GameConfig::default(), "1\n2\n3\n5\n4\n6\n8\n7\n9\nn\n");
    assert_eq!(played, 1);
    assert!(output.contains("It's a Tie!"), "{}", output);
}

#[test]
fn test_labels_and_coordinates_accepted() {
    let (_, output) = session(GameConfig::default(), "center\n0,0\nq\n");
    assert!(output.contains("X|2|3"), "{}", output);
    assert!(!output.contains("Unrecognized square"), "{}", output);
}

#[test]
fn test_play_again_starts_fresh_game() {
    let (played, output) = session(
        GameConfig::default(),
        "1\n4\n2\n5\n3\ny\n1\n4\n2\n5\n3\nn\n",
    );
    assert_eq!(played, 2);
    assert_eq!(output.matches("Player 1 wins!").count(), 2);
}

#[test]
fn test_impossible_computer_is_not_beaten() {
    let config = GameConfig::against_computer("Ada", Difficulty::Impossible)
        .with_first_player(FirstPlayer::First);

    // Try every square in order; occupied ones are re-prompted.
    let script = "1\n2\n3\n4\n5\n6\n7\n8\n9\n".repeat(5);
    let (_, output) = session(config, &script);

    assert!(!output.contains("Ada wins!"), "{}", output);
}
