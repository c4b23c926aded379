//! Tests for headless replay.

use strictly_tictactoe::{AppConfig, Phase, ReplayFormat, run_replay};

fn replay(moves: &[&str], format: ReplayFormat) -> (String, Phase) {
    let moves: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
    let mut out = Vec::new();
    let engine = run_replay(&moves, &AppConfig::default(), format, &mut out).unwrap();
    (String::from_utf8(out).unwrap(), engine.phase())
}

#[test]
fn test_text_replay_reports_each_move() {
    let (text, phase) = replay(&["0", "1", "middle-left", "4", "6", "8"], ReplayFormat::Text);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(phase, Phase::Finished);
    assert_eq!(lines[0], "Player O is on turn!");
    assert_eq!(lines[1], "Player X is on turn!");
    assert_eq!(lines[5], "Player O has won!");
    assert_eq!(lines[6], "Ignored 8: Game is already over");
    assert!(text.ends_with("O|X|3\n-+-+-\nO|X|6\n-+-+-\nO|8|9\n"));
}

#[test]
fn test_text_replay_ignores_bad_input() {
    let (text, phase) = replay(&["12", "nowhere", "4", "center"], ReplayFormat::Text);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(phase, Phase::InProgress);
    assert_eq!(lines[1], "Ignored 12: Index 12 is outside the board (0-8)");
    assert_eq!(lines[2], "Ignored nowhere: not a cell");
    assert_eq!(lines[3], "Player X is on turn!");
    assert_eq!(lines[4], "Ignored center: Square Center is already occupied");
}

#[test]
fn test_json_replay() {
    let (text, _) = replay(&["4", "4"], ReplayFormat::Json);
    let lines: Vec<serde_json::Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["index"], 4);
    assert_eq!(lines[0]["outcome"]["Continue"], "A");
    assert_eq!(lines[0]["message"], "Player X is on turn!");
    assert!(lines[1]["message"].is_null());
    assert_eq!(lines[2]["phase"], "InProgress");
    assert_eq!(lines[2]["state"]["moves_b"], serde_json::json!([4]));
}

#[test]
fn test_restart_token_starts_a_new_game() {
    let (text, phase) = replay(&["0", "1", "3", "4", "6", "restart", "center"], ReplayFormat::Text);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(phase, Phase::InProgress);
    assert_eq!(lines[5], "Player O has won!");
    assert_eq!(lines[6], "Player O is on turn!");
    assert_eq!(lines[7], "Player X is on turn!");
    assert!(text.ends_with("1|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9\n"));
}

#[test]
fn test_json_replay_marks_restarts() {
    let (text, _) = replay(&["4", "restart"], ReplayFormat::Json);
    let lines: Vec<serde_json::Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(lines[0]["restarted"], false);
    assert_eq!(lines[1]["restarted"], true);
    assert!(lines[1]["outcome"].is_null());
    assert_eq!(lines[1]["message"], "Player O is on turn!");
    assert_eq!(lines[2]["state"]["moves_b"], serde_json::json!([]));
}
