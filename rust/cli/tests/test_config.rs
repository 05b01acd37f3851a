use std::fs;

use nines_cli::config::{self, ValueSource};
use nines_cli::exit_code;
use nines_cli::run;
use serde_json::Value;
use serial_test::serial;

const VARS: [&str; 5] = [
    "NINES_CONFIG",
    "NINES_SEED",
    "NINES_PILES",
    "NINES_AI",
    "NINES_MAX_MOVES",
];

fn clear_env() {
    for var in VARS {
        unsafe {
            std::env::remove_var(var);
        }
    }
}

fn cfg_json() -> (i32, Value, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["nines", "cfg"], &mut out, &mut err);
    let stdout = String::from_utf8(out).unwrap();
    let json = serde_json::from_str(&stdout).unwrap_or(Value::Null);
    (code, json, String::from_utf8(err).unwrap())
}

#[test]
#[serial]
fn defaults_without_file_or_env() {
    clear_env();
    let resolved = config::load_with_sources().unwrap();
    assert_eq!(resolved.config, config::Config::default());
    assert_eq!(resolved.sources.piles, ValueSource::Default);

    let (code, json, _) = cfg_json();
    assert_eq!(code, exit_code::SUCCESS);
    assert_eq!(json["piles"]["value"].as_u64(), Some(4));
    assert_eq!(json["ai"]["value"].as_str(), Some("baseline"));
    assert!(json["seed"]["value"].is_null());
    assert_eq!(json["seed"]["source"].as_str(), Some("default"));
}

#[test]
#[serial]
fn env_overrides_file_overrides_default() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("nines.toml");
    fs::write(&cfg_path, "seed = 456\npiles = 6\nai = \"random\"\n").unwrap();
    unsafe {
        std::env::set_var("NINES_CONFIG", &cfg_path);
    }

    let (code, json1, _) = cfg_json();
    assert_eq!(code, exit_code::SUCCESS);
    assert_eq!(json1["seed"]["value"].as_u64(), Some(456));
    assert_eq!(json1["seed"]["source"].as_str(), Some("file"));
    assert_eq!(json1["piles"]["value"].as_u64(), Some(6));
    assert_eq!(json1["ai"]["source"].as_str(), Some("file"));
    assert_eq!(json1["max_moves"]["source"].as_str(), Some("default"));

    unsafe {
        std::env::set_var("NINES_SEED", "123");
        std::env::set_var("NINES_MAX_MOVES", "50");
    }
    let (_, json2, _) = cfg_json();
    assert_eq!(json2["seed"]["value"].as_u64(), Some(123));
    assert_eq!(json2["seed"]["source"].as_str(), Some("env"));
    assert_eq!(json2["max_moves"]["value"].as_u64(), Some(50));
    assert_eq!(json2["piles"]["source"].as_str(), Some("file"));

    clear_env();
}

#[test]
#[serial]
fn configured_seed_and_piles_drive_deal() {
    clear_env();
    unsafe {
        std::env::set_var("NINES_SEED", "77");
        std::env::set_var("NINES_PILES", "2");
    }
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["nines", "deal", "--cards", "6"], &mut out, &mut err);
    clear_env();

    assert_eq!(code, exit_code::SUCCESS);
    let stdout = String::from_utf8(out).unwrap();
    assert!(stdout.starts_with("Seed: 77\n"));
    assert_eq!(stdout.lines().filter(|l| l.starts_with("Pile ")).count(), 2);
}

#[test]
#[serial]
fn invalid_env_value_is_reported() {
    clear_env();
    unsafe {
        std::env::set_var("NINES_PILES", "many");
    }
    let (code, _, stderr) = cfg_json();
    clear_env();
    assert_eq!(code, exit_code::ERROR);
    assert!(stderr.contains("Invalid NINES_PILES: many"));
}

#[test]
#[serial]
fn unknown_ai_in_file_is_rejected() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("nines.toml");
    fs::write(&cfg_path, "ai = \"oracle\"\n").unwrap();
    unsafe {
        std::env::set_var("NINES_CONFIG", &cfg_path);
    }
    let result = config::load();
    clear_env();
    assert!(result.is_err());
}
