//! Unit tests for the frame compositor

use std::sync::atomic::AtomicBool;

use super::helpers::{escaped, glyphs};

use termpix::quantize::TABLE_LEN;
use termpix::render::{render, DisplayMode, RenderOptions};
use termpix::{Color, Config, Error, Frame, QuantizationTable, TextTag};

fn truecolor() -> RenderOptions<'static> {
    RenderOptions::new(DisplayMode::Truecolor)
}

#[test]
fn red_green_pair_renders_exactly() {
    let frame =
        Frame::from_pixels(2, 1, vec![Color::rgb(255, 0, 0), Color::rgb(0, 255, 0)]).unwrap();
    let out = render(&frame, &[], &truecolor()).unwrap();
    assert_eq!(
        out,
        "\x1b[48;2;255;0;0m  \x1b[48;2;0;255;0m  \x1b[0m\n\x1b[0m\n"
    );
}

#[test]
fn later_of_two_tags_at_origin_is_rendered() {
    let frame = Frame::new(4, 1).unwrap();
    let tags = [
        TextTag::new("first!", 0, 0).unwrap(),
        TextTag::new("second", 0, 0).unwrap(),
    ];
    let out = render(&frame, &tags, &truecolor()).unwrap();
    assert_eq!(glyphs(&out), "second  \n\n");
}

#[test]
fn tag_starting_left_of_frame_shows_suffix() {
    let frame = Frame::new(4, 1).unwrap();
    let tag = TextTag::builder("abcdefghijkl")
        .centered(true)
        .build()
        .unwrap();
    let out = render(&frame, &[tag], &truecolor()).unwrap();
    assert_eq!(glyphs(&out), "ghijkl  \n\n");
}

#[test]
fn tag_beyond_frame_is_harmless() {
    let frame = Frame::new(2, 2).unwrap();
    let tag = TextTag::new("far away", 10, 10).unwrap();
    let out = render(&frame, &[tag], &truecolor()).unwrap();
    assert_eq!(glyphs(&out), "    \n    \n\n");
}

#[test]
fn every_row_ends_with_reset() {
    let frame = Frame::gradient(5, 4).unwrap();
    let out = render(&frame, &[], &truecolor()).unwrap();
    let lines: Vec<&str> = out.split_inclusive('\n').collect();
    assert_eq!(lines.len(), 5);
    assert!(lines.iter().all(|line| line.ends_with("\x1b[0m\n")));
    assert_eq!(lines[4], "\x1b[0m\n");
}

#[test]
fn indexed8_render_uses_built_table() {
    let table = QuantizationTable::from_bytes(vec![0; TABLE_LEN]).unwrap();
    let frame = Frame::checkerboard(2, 1).unwrap();
    let tag = TextTag::builder("ab").color(Color::WHITE).build().unwrap();
    let options = RenderOptions::new(DisplayMode::Indexed8).table(table.as_bytes());
    let out = render(&frame, &[tag], &options).unwrap();
    insta::assert_snapshot!(
        escaped(&out),
        @r"^[[48;5;0m^[[38;5;0mab^[[48;5;0m  ^[[0m\n^[[0m\n"
    );
}

#[test]
fn grayscale_with_configured_ramp() {
    let config = Config::default();
    let frame = Frame::checkerboard(3, 2).unwrap();
    let mut options = config.render_options(None);
    options.mode = DisplayMode::Grayscale;
    let out = render(&frame, &[], &options).unwrap();
    assert_eq!(out, "@@  @@\x1b[0m\n  @@  \x1b[0m\n\x1b[0m\n");
}

#[test]
fn identical_rows_are_made_distinct() {
    let frame = Frame::new(2, 2).unwrap();
    let out = render(&frame, &[], &truecolor().prevent_identical_lines(true)).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_ne!(lines[0], lines[1]);
    assert_eq!(lines[1], format!("{} ", &lines[0][..lines[0].len() - 4]) + "\x1b[0m");
}

#[test]
fn validation_happens_before_output() {
    let frame = Frame::new(1, 1).unwrap();
    let err = render(&frame, &[], &RenderOptions::new(DisplayMode::Indexed4)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Display mode Indexed4 requires a quantization table of exactly 16777216 bytes"
    );
}

#[test]
fn unset_cancel_flag_does_not_interrupt() {
    let frame = Frame::new(2, 2).unwrap();
    let flag = AtomicBool::new(false);
    assert!(render(&frame, &[], &truecolor().cancel(&flag)).is_ok());

    let flag = AtomicBool::new(true);
    assert_eq!(
        render(&frame, &[], &truecolor().cancel(&flag)),
        Err(Error::Cancelled)
    );
}

#[test]
fn translucent_tag_is_looked_up_after_compositing() {
    let pixel = Color::rgb(0, 0, 100);
    let tag_color = Color::rgba(200, 0, 0, 128);
    let blended = pixel.composite(tag_color);

    let mut bytes = vec![0u8; TABLE_LEN];
    bytes[pixel.key()] = 17;
    bytes[tag_color.key()] = 196;
    bytes[blended.key()] = 88;
    let table = QuantizationTable::from_bytes(bytes).unwrap();
    assert_eq!(table.lookup(blended), 88);

    let frame = Frame::filled(2, 1, pixel).unwrap();
    let tag = TextTag::builder("hi").color(tag_color).build().unwrap();
    let options = RenderOptions::new(DisplayMode::Indexed8).table(table.as_bytes());
    let out = render(&frame, &[tag], &options).unwrap();
    insta::assert_snapshot!(
        escaped(&out),
        @r"^[[48;5;17m^[[38;5;88mhi^[[48;5;17m  ^[[0m\n^[[0m\n"
    );
}
