//! Build-table command handler

use anyhow::Result;
use humansize::{format_size, BINARY};
use std::path::PathBuf;
use std::time::Instant;

use termpix::palette::PaletteKind;
use termpix::progress::{ProgressBar, ProgressReporter};
use termpix::quantize::TABLE_LEN;
use termpix::storage::{write_table, TableStore};
use termpix::{Config, QuantizationTable};

/// Width of the progress bar in slots
const BAR_WIDTH: usize = 40;

/// Build the table for `palette` and write it to `output` or the tables
/// directory.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    config: &Config,
    palette: PaletteKind,
    cell_size: Option<u16>,
    workers: Option<usize>,
    output: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    let mut options = config.build_options();
    if let Some(cell_size) = cell_size {
        options.cell_size = cell_size;
    }
    if workers.is_some() {
        options.workers = workers;
    }

    let bar = if quiet {
        ProgressBar::quiet()
    } else {
        ProgressBar::new(BAR_WIDTH)
    };
    let progress = progress_for(&bar);

    let started = Instant::now();
    let store = TableStore::from_config(config);
    let path = match output {
        Some(path) => {
            let table =
                QuantizationTable::build_with(&palette.colors(), &options, &progress)?;
            write_table(&path, &table)?;
            path
        }
        None => {
            store.build(palette, &options, &progress)?;
            store.table_path(palette)
        }
    };
    bar.finish();

    if !quiet {
        println!(
            "Wrote {} ({}) in {:.1}s",
            path.display(),
            format_size(TABLE_LEN as u64, BINARY),
            started.elapsed().as_secs_f64()
        );
    }
    Ok(())
}

/// Reporter that redraws `bar` on every finished slab.
pub fn progress_for(bar: &ProgressBar) -> ProgressReporter {
    let bar = bar.clone();
    ProgressReporter::with_callback(move |completed, total| bar.draw(completed, total))
}
