use std::fs;

use holdem_cli::run;
use serial_test::serial;

struct TempEnvVar {
    key: &'static str,
    previous: Option<String>,
}

impl TempEnvVar {
    fn set(key: &'static str, value: &str) -> Self {
        let previous = std::env::var(key).ok();
        unsafe { std::env::set_var(key, value) };
        Self { key, previous }
    }

    fn unset(key: &'static str) -> Self {
        let previous = std::env::var(key).ok();
        unsafe { std::env::remove_var(key) };
        Self { key, previous }
    }
}

impl Drop for TempEnvVar {
    fn drop(&mut self) {
        match &self.previous {
            Some(prev) => unsafe { std::env::set_var(self.key, prev) },
            None => unsafe { std::env::remove_var(self.key) },
        }
    }
}

fn clean_env() -> Vec<TempEnvVar> {
    [
        "HOLDEM_CONFIG",
        "HOLDEM_SEED",
        "HOLDEM_BUY_IN",
        "HOLDEM_BIG_BLIND",
        "HOLDEM_ACTION_TIMEOUT",
    ]
    .into_iter()
    .map(TempEnvVar::unset)
    .collect()
}

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

#[test]
fn help_lists_every_command() {
    let (code, stdout, _) = run_cli(&["holdem", "--help"]);
    assert_eq!(code, 0);
    for cmd in ["eval", "deal", "sim", "replay", "cfg"] {
        assert!(stdout.contains(cmd), "missing {cmd} in help");
    }
}

#[test]
fn unknown_command_fails_with_usage() {
    let (code, _, stderr) = run_cli(&["holdem", "shuffle"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("Commands:"));
}

#[test]
fn eval_ranks_a_royal_flush() {
    let (code, stdout, _) = run_cli(&["holdem", "eval", "AH", "KH", "QH", "JH", "TH", "2C", "3D"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Hand: Royal Flush"));
    assert!(stdout.contains("Value: 7462"));
}

#[test]
fn eval_reports_bad_cards_on_stderr() {
    let (code, stdout, stderr) = run_cli(&["holdem", "eval", "AH", "KH", "1H", "JH", "TH"]);
    assert_eq!(code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.starts_with("Error: Invalid input"));
}

#[test]
fn deal_is_repeatable_with_a_seed() {
    let first = run_cli(&["holdem", "deal", "--seed", "2024", "--players", "4"]);
    let second = run_cli(&["holdem", "deal", "--seed", "2024", "--players", "4"]);
    assert_eq!(first.0, 0);
    assert_eq!(first.1, second.1);
    assert!(first.1.contains("Seed: 2024"));
    assert!(first.1.contains("Hole p4: "));
    assert!(!first.1.contains("Hole p5: "));
}

#[test]
#[serial]
fn cfg_reports_defaults() {
    let _env = clean_env();
    let (code, stdout, stderr) = run_cli(&["holdem", "cfg"]);
    assert_eq!(code, 0, "stderr: {stderr}");
    let v: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(v["big_blind"]["value"].as_u64(), Some(2));
    assert_eq!(v["big_blind"]["source"].as_str(), Some("default"));
    assert!(v["seed"]["value"].is_null());
}

#[test]
#[serial]
fn cfg_env_overrides_file() {
    let _env = clean_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("holdem.toml");
    fs::write(&path, "buy_in = 500\nbig_blind = 10\nsmall_blind = 5\nseed = 456\n").unwrap();

    let _config = TempEnvVar::set("HOLDEM_CONFIG", path.to_str().unwrap());
    let _seed = TempEnvVar::set("HOLDEM_SEED", "123");
    let (code, stdout, stderr) = run_cli(&["holdem", "cfg"]);
    assert_eq!(code, 0, "stderr: {stderr}");
    let v: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(v["buy_in"]["value"].as_u64(), Some(500));
    assert_eq!(v["buy_in"]["source"].as_str(), Some("file"));
    assert_eq!(v["small_blind"]["source"].as_str(), Some("file"));
    assert_eq!(v["seed"]["value"].as_u64(), Some(123));
    assert_eq!(v["seed"]["source"].as_str(), Some("env"));
    assert_eq!(v["action_timeout_secs"]["source"].as_str(), Some("default"));
}

#[test]
#[serial]
fn cfg_rejects_bad_values() {
    let _env = clean_env();
    let _bb = TempEnvVar::set("HOLDEM_BIG_BLIND", "lots");
    let (code, _, stderr) = run_cli(&["holdem", "cfg"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("HOLDEM_BIG_BLIND"));

    // a big blind under the small blind parses but does not validate
    let _bb = TempEnvVar::set("HOLDEM_BIG_BLIND", "0");
    let (code, _, stderr) = run_cli(&["holdem", "cfg"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("Invalid configuration"));
}

#[test]
#[serial]
fn seed_from_env_drives_deal() {
    let _env = clean_env();
    let _seed = TempEnvVar::set("HOLDEM_SEED", "77");
    let (code, from_env, _) = run_cli(&["holdem", "deal"]);
    assert_eq!(code, 0);
    let (_, explicit, _) = run_cli(&["holdem", "deal", "--seed", "77"]);
    assert_eq!(from_env, explicit);
}
