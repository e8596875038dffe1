//! Tests for the headless script runner.

use strictly_rewind::Position;
use strictly_rewind_tui::{ScriptOptions, script};

fn cells(ids: &[u8]) -> Vec<Position> {
    ids.iter()
        .map(|&id| Position::from_id(id).expect("valid id"))
        .collect()
}

fn run(options: &ScriptOptions) -> String {
    let mut out = Vec::new();
    script::run(options, &mut out).expect("script runs");
    String::from_utf8(out).expect("utf-8 output")
}

#[test]
fn test_win_prints_notification_board_and_history() {
    let output = run(&ScriptOptions {
        cells: cells(&[1, 2, 4, 3, 7]),
        ..Default::default()
    });

    let expected = "\
! Winner: X
X|O|O
-+-+-
X|5|6
-+-+-
X|8|9

Winner: X

  0. Go to game start
  1. Go to move #1
  2. Go to move #2
  3. Go to move #3
  4. Go to move #4
> 5. Go to game over (Player X wins)
";
    assert_eq!(output, expected);
}

#[test]
fn test_rejections_are_reported_and_ignored() {
    let output = run(&ScriptOptions {
        cells: cells(&[1, 1, 2]),
        ..Default::default()
    });

    assert!(output.starts_with("! Cell 1 (Top-left) is already occupied\n"));
    assert!(output.contains("Next player: X"));
    assert!(output.contains("> 2. Go to move #2"));
}

#[test]
fn test_select_keeps_future_entries() {
    let output = run(&ScriptOptions {
        cells: cells(&[5, 1, 9]),
        select: Some(0),
        json: false,
    });

    assert!(output.starts_with("1|2|3\n"));
    assert!(output.contains("> 0. Go to game start"));
    assert!(output.contains("  3. Go to move #3"));
}

#[test]
fn test_bad_selection_fails() {
    let mut out = Vec::new();
    let result = script::run(
        &ScriptOptions {
            cells: cells(&[5]),
            select: Some(4),
            json: false,
        },
        &mut out,
    );

    let err = result.unwrap_err();
    assert!(format!("{:#}", err).contains("History entry 4 does not exist"));
}

#[test]
fn test_json_report() {
    let output = run(&ScriptOptions {
        cells: cells(&[5, 5]),
        select: None,
        json: true,
    });

    let value: serde_json::Value = serde_json::from_str(&output).expect("valid json");
    assert_eq!(
        value["notifications"][0],
        "Cell 5 (Center) is already occupied"
    );
    assert_eq!(value["session"]["current"], 1);
}
