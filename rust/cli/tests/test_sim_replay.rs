use std::fs;
use std::path::Path;

use holdem_cli::run;
use holdem_engine::logger::{read_history, HistoryEntry, RoundRecord};

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

fn simulate(path: &Path, hands: &str, players: &str, seed: &str) {
    let (code, stdout, stderr) = run_cli(&[
        "holdem",
        "sim",
        "--hands",
        hands,
        "--players",
        players,
        "--seed",
        seed,
        "--output",
        path.to_str().unwrap(),
    ]);
    assert_eq!(code, 0, "stderr: {stderr}");
    assert!(stdout.contains(&format!("Hands played: {hands}")));
}

fn rounds(path: &Path) -> Vec<RoundRecord> {
    read_history(path)
        .unwrap()
        .into_iter()
        .filter_map(|e| match e {
            HistoryEntry::Round(r) => Some(r),
            HistoryEntry::Action(_) => None,
        })
        .collect()
}

#[test]
fn sim_history_replays_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("session.jsonl");
    simulate(&path, "25", "5", "8675309");

    let recorded = rounds(&path);
    assert_eq!(recorded.len(), 25);
    assert!(recorded.iter().all(|r| r.seed.is_some()));
    assert!(recorded.iter().all(|r| r.ts.is_some()));

    let (code, stdout, stderr) = run_cli(&["holdem", "replay", "--input", path.to_str().unwrap()]);
    assert_eq!(code, 0, "stdout: {stdout}\nstderr: {stderr}");
    assert!(stdout.contains("Replayed 25 rounds"));
    assert!(stdout.contains("25 ok, 0 failed"));
    assert!(!stdout.contains("FAILED"));
}

#[test]
fn deal_matches_the_first_simulated_hand() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("one.jsonl");
    simulate(&path, "1", "3", "4242");
    let first = &rounds(&path)[0];

    let (code, dealt, _) = run_cli(&["holdem", "deal", "--seed", "4242", "--players", "3"]);
    assert_eq!(code, 0);
    assert!(dealt.contains(&format!("Shuffle seed: {}", first.seed.unwrap())));
    for p in &first.players {
        let line = format!("Hole {}: {}", p.player_id, p.cards.join(" "));
        assert!(dealt.contains(&line), "{line} not in\n{dealt}");
    }
    let board = dealt
        .lines()
        .find_map(|l| l.strip_prefix("Board: "))
        .unwrap();
    assert!(board.starts_with(&first.board.join(" ")));
}

#[test]
fn tampered_history_fails_replay() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.jsonl");
    simulate(&path, "10", "3", "99");

    let mut lines: Vec<String> = fs::read_to_string(&path)
        .unwrap()
        .lines()
        .map(String::from)
        .collect();
    let idx = lines
        .iter()
        .position(|l| l.contains("\"kind\":\"round\""))
        .unwrap();
    let mut entry: serde_json::Value = serde_json::from_str(&lines[idx]).unwrap();
    let won = entry["players"][0]["won"].as_u64().unwrap();
    entry["players"][0]["won"] = serde_json::json!(won + 1);
    lines[idx] = entry.to_string();
    fs::write(&path, lines.join("\n")).unwrap();

    let (code, stdout, stderr) = run_cli(&["holdem", "replay", "--input", path.to_str().unwrap()]);
    assert_eq!(code, 2);
    assert!(stdout.contains("FAILED: chips do not balance"));
    assert!(stdout.contains("1 failed"));
    assert!(stderr.contains("1 of 10 rounds failed verification"));
}

#[test]
fn replay_skips_and_reports_garbage_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.jsonl");
    simulate(&path, "3", "2", "7");
    let mut content = fs::read_to_string(&path).unwrap();
    content.push_str("{not json\n");
    fs::write(&path, content).unwrap();

    let (code, stdout, stderr) = run_cli(&["holdem", "replay", "--input", path.to_str().unwrap()]);
    assert_eq!(code, 2);
    assert!(stdout.contains("3 ok, 0 failed"));
    assert!(stderr.contains("Failed to parse line"));
    assert!(stderr.contains("1 unreadable lines skipped"));
}

#[test]
fn replay_of_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.jsonl");
    let (code, _, stderr) = run_cli(&["holdem", "replay", "--input", missing.to_str().unwrap()]);
    assert_eq!(code, 2);
    assert!(stderr.starts_with("Error: I/O error"));
}
