//! demo command tests

use super::helpers::{escaped, TestEnv};

#[test]
fn truecolor_checkerboard_with_tag() {
    let env = TestEnv::new();
    let (stdout, stderr, code) = env.run(&[
        "demo",
        "--mode",
        "truecolor",
        "--pattern",
        "checkerboard",
        "--width",
        "2",
        "--height",
        "2",
        "--tag",
        "hi@1,1",
        "--tag-color",
        "#ff0000",
    ]);
    assert_eq!(code, 0, "{}", stderr);
    insta::assert_snapshot!(
        escaped(&stdout),
        @r"^[[48;2;255;255;255m  ^[[48;2;0;0;0m  ^[[0m\n^[[48;2;0;0;0m  ^[[48;2;255;255;255m^[[38;2;255;0;0mhi^[[0m\n^[[0m\n"
    );
}

#[test]
fn grayscale_uses_configured_ramp() {
    let env = TestEnv::with_config("[display]\nmode = \"grayscale\"\nramp = \"ab\"\n");
    let (stdout, stderr, code) = env.run(&[
        "demo",
        "--pattern",
        "checkerboard",
        "--width",
        "3",
        "--height",
        "1",
    ]);
    assert_eq!(code, 0, "{}", stderr);
    assert_eq!(stdout, "bbaabb\x1b[0m\n\x1b[0m\n");
}

#[test]
fn indexed_mode_builds_and_caches_table() {
    let env = TestEnv::new();
    let args = [
        "demo", "--mode", "indexed4", "--pattern", "solid", "--width", "1", "--height", "1",
    ];

    let (first, stderr, code) = env.run(&args);
    assert_eq!(code, 0, "{}", stderr);
    assert!(env.tables_dir().join("ansi_4bit_lookup").exists());
    // (30, 30, 46) is closest to black
    assert_eq!(first, "\x1b[40m  \x1b[0m\n\x1b[0m\n");

    let (second, stderr, code) = env.run(&args);
    assert_eq!(code, 0);
    assert_eq!(second, first);
    assert!(stderr.is_empty(), "cached table should not rebuild: {}", stderr);
}

#[test]
fn negative_tag_position_fails() {
    let env = TestEnv::new();
    let (_, stderr, code) = env.run(&["demo", "--width", "2", "--height", "1", "--tag", "x@-1,0"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Invalid tag"), "{}", stderr);
}

#[test]
fn zero_width_fails() {
    let env = TestEnv::new();
    let (_, stderr, code) = env.run(&["demo", "--width", "0", "--height", "1"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Frame dimensions must be positive"), "{}", stderr);
}
