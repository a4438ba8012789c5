//! build-table command tests

use super::helpers::TestEnv;

use std::fs;

const TABLE_LEN: u64 = 1 << 24;

#[test]
fn builds_into_tables_directory() {
    let env = TestEnv::new();
    let (stdout, stderr, code) = env.run(&["build-table", "indexed4", "--workers", "2"]);
    assert_eq!(code, 0, "{}", stderr);

    let path = env.tables_dir().join("ansi_4bit_lookup");
    assert_eq!(fs::metadata(&path).unwrap().len(), TABLE_LEN);
    assert!(stdout.contains("ansi_4bit_lookup"));
    assert!(stdout.contains("16 MiB"));
    // Progress bar is drawn on stderr, ending at the full slab count
    assert!(stderr.contains("[XXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX] 4/4"));
}

#[test]
fn quiet_build_to_explicit_output() {
    let env = TestEnv::new();
    let output = env.home.path().join("out").join("table.bin");
    let (stdout, stderr, code) = env.run(&[
        "build-table",
        "indexed8",
        "--cell-size",
        "128",
        "--output",
        output.to_str().unwrap(),
        "--quiet",
    ]);
    assert_eq!(code, 0, "{}", stderr);
    assert!(stdout.is_empty());
    assert!(stderr.is_empty());

    let bytes = fs::read(&output).unwrap();
    assert_eq!(bytes.len() as u64, TABLE_LEN);
    // Pure red is entry 9 of the 256-color palette
    assert_eq!(bytes[255], 9);
    assert!(!env.tables_dir().exists());
}

#[test]
fn invalid_cell_size_fails() {
    let env = TestEnv::new();
    let (_, stderr, code) = env.run(&["build-table", "indexed4", "--cell-size", "0", "-q"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Cell size must be in 1..=256"), "{}", stderr);
}
