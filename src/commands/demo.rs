//! Demo command handler

use anyhow::{Context, Result};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};
use terminal_size::{terminal_size, Height, Width};

use termpix::cli::{DemoArgs, Pattern};
use termpix::input::{read_key, Key};
use termpix::progress::ProgressBar;
use termpix::render::{render, DisplayMode, RenderOptions};
use termpix::storage::{TableSource, TableStore};
use termpix::{Color, Config, Frame, QuantizationTable, TextTag};

use super::build_table::progress_for;

/// Used when stdout is not a terminal
const FALLBACK_SIZE: (usize, usize) = (40, 20);

const SOLID: Color = Color::rgb(30, 30, 46);

const HELP_LINE: &str = "arrows: move  c: center  w: wrap  h: hide  q: quit";

#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, args: &DemoArgs) -> Result<()> {
    let mode = args.mode.unwrap_or(config.display.mode);
    let (default_width, default_height) = frame_size_for_terminal();
    let width = args.width.unwrap_or(default_width);
    let height = args.height.unwrap_or(default_height);

    let frame = pattern_frame(args.pattern, width, height)?;
    let mut tags = build_tags(args)?;
    let table = load_table(config, mode)?;

    let mut options = config.render_options(table.as_ref().map(|t| t.as_bytes()));
    options.mode = mode;
    options.prevent_identical_lines |= args.prevent_identical_lines;

    if args.interactive {
        return run_interactive(&frame, &mut tags, &options);
    }

    let output = render(&frame, &tags, &options)?;
    let mut stdout = io::stdout();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Half the terminal width (each pixel is two columns) by the terminal
/// height minus the trailing reset line and the prompt.
pub fn frame_size_for_terminal() -> (usize, usize) {
    match terminal_size() {
        Some((Width(cols), Height(rows))) => (
            (cols as usize / 2).max(1),
            (rows as usize).saturating_sub(2).max(1),
        ),
        None => FALLBACK_SIZE,
    }
}

pub fn pattern_frame(pattern: Pattern, width: usize, height: usize) -> Result<Frame> {
    let frame = match pattern {
        Pattern::Gradient => Frame::gradient(width, height),
        Pattern::Checkerboard => Frame::checkerboard(width, height),
        Pattern::Solid => Frame::filled(width, height, SOLID),
    };
    Ok(frame?)
}

pub fn build_tags(args: &DemoArgs) -> Result<Vec<TextTag>> {
    args.tags
        .iter()
        .map(|spec| {
            let mut builder = TextTag::builder(spec.text.clone())
                .position(spec.x, spec.y)
                .centered(args.centered);
            if let Some(color) = args.tag_color {
                builder = builder.color(color);
            }
            builder
                .build()
                .with_context(|| format!("Invalid tag {:?}", spec.text))
        })
        .collect()
}

/// Load or build the table the mode needs, drawing progress on stderr
/// when a build is necessary.
fn load_table(config: &Config, mode: DisplayMode) -> Result<Option<QuantizationTable>> {
    let Some(kind) = mode.palette_kind() else {
        return Ok(None);
    };
    let bar = ProgressBar::new(40);
    let progress = progress_for(&bar);
    let (table, source) = TableStore::from_config(config)
        .load_or_build(kind, &config.build_options(), &progress)?;
    if source == TableSource::Built {
        bar.finish();
    }
    Ok(Some(table))
}

#[cfg(not(tarpaulin_include))]
fn run_interactive(frame: &Frame, tags: &mut Vec<TextTag>, options: &RenderOptions) -> Result<()> {
    if tags.is_empty() {
        tags.push(TextTag::builder("termpix").color(Color::WHITE).build()?);
    }

    let mut stdout = io::stdout();
    let mut status = String::new();
    loop {
        execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        stdout.write_all(render(frame, &tags[..], options)?.as_bytes())?;
        writeln!(stdout, "{}  {}", HELP_LINE, status)?;
        stdout.flush()?;

        let tag = &mut tags[0];
        let result = match read_key()? {
            Key::Char('q') | Key::Escape | Key::Interrupt => break,
            Key::Left => nudge(tag, -1, 0),
            Key::Right => nudge(tag, 1, 0),
            Key::Up => nudge(tag, 0, -1),
            Key::Down => nudge(tag, 0, 1),
            Key::Char('c') => toggle_centered(tag),
            Key::Char('w') => tag.set_line_wrap(!tag.line_wrap()),
            Key::Char('h') => {
                tag.set_disabled(!tag.is_disabled());
                Ok(())
            }
            _ => Ok(()),
        };
        status = match result {
            Ok(()) => String::new(),
            Err(e) => e.to_string(),
        };
    }
    Ok(())
}

fn nudge(tag: &mut TextTag, dx: i32, dy: i32) -> termpix::Result<()> {
    let position = tag.starting_position();
    tag.set_position((position.x + dx, position.y + dy))
}

/// Centering requires line wrap off, so turn it off first.
fn toggle_centered(tag: &mut TextTag) -> termpix::Result<()> {
    let centered = !tag.is_centered();
    if centered {
        tag.set_line_wrap(false)?;
    }
    tag.set_centered(centered)
}
