//! Config subcommand tests

use super::helpers::TestEnv;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn config_path_prints_override() {
    let env = TestEnv::new();
    let (stdout, _, code) = env.run(&["config", "path"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), env.config_path().to_string_lossy());
}

#[test]
fn config_show_merges_file_with_defaults() {
    let env = TestEnv::with_config("[display]\nmode = \"indexed4\"\n");
    let (stdout, stderr, code) = env.run(&["config", "show"]);
    assert_eq!(code, 0, "{}", stderr);
    assert!(stdout.contains("mode = \"indexed4\""));
    assert!(stdout.contains("cell_size = 64"));
    assert!(stdout.contains("ramp = \" .:-=+*#%@\""));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("termpix.toml");

    Command::cargo_bin("termpix")
        .unwrap()
        .args(["config", "init", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));
    assert!(path.exists());

    Command::cargo_bin("termpix")
        .unwrap()
        .args(["config", "init", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn invalid_config_is_reported() {
    let env = TestEnv::with_config("[display]\nramp = \"\"\n");
    let (_, stderr, code) = env.run(&["config", "show"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Invalid config"), "{}", stderr);
}
