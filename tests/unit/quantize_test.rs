//! Unit tests for the palette quantizer

use termpix::palette::{ansi16, xterm256};
use termpix::progress::ProgressReporter;
use termpix::quantize::{BuildOptions, QuantizationTable, TABLE_LEN};
use termpix::{Color, Error};

fn brute_force(palette: &[Color], color: Color) -> u8 {
    palette
        .iter()
        .enumerate()
        .min_by_key(|(i, entry)| (entry.distance_squared(&color), *i))
        .map(|(i, _)| i as u8)
        .unwrap()
}

/// Spread of colors across the cube, including its corners
fn probe_colors() -> Vec<Color> {
    let levels = [0u8, 1, 37, 95, 127, 128, 200, 254, 255];
    let mut colors = Vec::new();
    for &r in &levels {
        for &g in &levels {
            for &b in &levels {
                colors.push(Color::rgb(r, g, b));
            }
        }
    }
    colors
}

#[test]
fn table_has_one_entry_per_color() {
    let table = QuantizationTable::build(&ansi16(), 32).unwrap();
    assert_eq!(table.as_bytes().len(), TABLE_LEN);
}

#[test]
fn xterm_colors_map_to_first_matching_index() {
    let palette = xterm256();
    let table = QuantizationTable::build(&palette, 8).unwrap();
    for (i, color) in palette.iter().enumerate() {
        let first = palette.iter().position(|c| c == color).unwrap();
        assert_eq!(table.lookup(*color) as usize, first, "index {}", i);
    }
}

#[test]
fn single_cell_search_is_exact() {
    let palette = ansi16();
    let table = QuantizationTable::build(&palette, 256).unwrap();
    for color in probe_colors() {
        assert_eq!(table.lookup(color), brute_force(&palette, color), "{}", color);
    }
}

#[test]
fn nearest_entry_never_loses_to_own_cell_entries() {
    // Every color's own cell is occupied, so the chosen entry must be the
    // closest within that cell
    let corner = |i: u8, lo: u8, hi: u8| {
        let pick = |bit: u8| if i >> bit & 1 == 1 { hi } else { lo };
        Color::rgb(pick(0), pick(1), pick(2))
    };
    let palette: Vec<Color> = (0..8u8)
        .map(|i| corner(i, 0, 255))
        .chain((0..8u8).map(|i| corner(i, 64, 191)))
        .collect();
    let table = QuantizationTable::build(&palette, 128).unwrap();
    for color in probe_colors() {
        let chosen = palette[table.lookup(color) as usize];
        let cell = |c: &Color| (c.r / 128, c.g / 128, c.b / 128);
        for entry in palette.iter().filter(|e| cell(e) == cell(&color)) {
            assert!(chosen.distance_squared(&color) <= entry.distance_squared(&color));
        }
    }
}

#[test]
fn worker_count_does_not_change_result() {
    let palette = ansi16();
    let progress = ProgressReporter::silent();
    let one = QuantizationTable::build_with(
        &palette,
        &BuildOptions {
            cell_size: 32,
            workers: Some(1),
        },
        &progress,
    )
    .unwrap();
    let four = QuantizationTable::build_with(
        &palette,
        &BuildOptions {
            cell_size: 32,
            workers: Some(4),
        },
        &progress,
    )
    .unwrap();
    assert!(one == four);
    assert_eq!(progress.get_progress(), (8, 8));
}

#[test]
fn invalid_inputs_are_rejected() {
    assert_eq!(
        QuantizationTable::build(&[], 8),
        Err(Error::InvalidPalette { len: 0 })
    );
    assert_eq!(
        QuantizationTable::build(&ansi16(), 0),
        Err(Error::InvalidCellSize(0))
    );
}
