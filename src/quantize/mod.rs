//! Palette quantization table.
//!
//! Builds a lookup table from every 24-bit color to the index of its nearest
//! palette entry, so indexed display modes can map a pixel with one array
//! read.
//!
//! # Design
//!
//! - [`CellGrid`] buckets the palette into cubic cells and answers "which
//!   entries are worth measuring for this cell" with a shell search.
//! - Candidate lists depend only on the cell, so they are computed once per
//!   cell rather than once per color.
//! - The table is split into contiguous slabs (all colors whose blue channel
//!   falls in one cell layer) and the slabs are filled in parallel by a
//!   dedicated Rayon pool. Workers share the palette and the grid read-only
//!   and each owns a disjoint slice of the output.
//! - Progress is reported per finished slab via [`ProgressReporter`].

mod grid;

pub use grid::{CellCoord, CellGrid};

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::color::Color;
use crate::error::{Error, Result};
use crate::palette::MAX_PALETTE_LEN;
use crate::progress::ProgressReporter;

/// Number of entries in a quantization table, one per 24-bit color.
pub const TABLE_LEN: usize = 1 << 24;

/// Cell size used when the caller has no preference.
pub const DEFAULT_CELL_SIZE: u16 = 8;

/// Tunables for [`QuantizationTable::build_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Side of a spatial cell, `1..=256`
    pub cell_size: u16,
    /// Worker thread count; `None` lets Rayon pick
    pub workers: Option<usize>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            workers: None,
        }
    }
}

/// Nearest-palette-index lookup over all 2^24 colors.
///
/// Entry `R | G << 8 | B << 16` holds the palette index for that color.
#[derive(Clone, PartialEq, Eq)]
pub struct QuantizationTable {
    entries: Box<[u8]>,
}

impl QuantizationTable {
    /// Build a table for `palette` using the given cell size.
    pub fn build(palette: &[Color], cell_size: u16) -> Result<Self> {
        let options = BuildOptions {
            cell_size,
            ..BuildOptions::default()
        };
        Self::build_with(palette, &options, &ProgressReporter::silent())
    }

    /// Build a table, reporting one progress step per finished slab.
    pub fn build_with(
        palette: &[Color],
        options: &BuildOptions,
        progress: &ProgressReporter,
    ) -> Result<Self> {
        if palette.is_empty() || palette.len() > MAX_PALETTE_LEN {
            return Err(Error::InvalidPalette { len: palette.len() });
        }
        if options.cell_size == 0 || options.cell_size as usize > 256 {
            return Err(Error::InvalidCellSize(options.cell_size));
        }

        let cell_size = options.cell_size as usize;
        let grid = CellGrid::new(palette, cell_size);
        let slab_len = cell_size << 16;
        let slabs = grid.per_axis();

        debug!(
            palette_len = palette.len(),
            cell_size,
            cells_per_axis = slabs,
            occupied_cells = grid.occupied_cells(),
            "Building quantization table"
        );

        let mut entries = vec![0u8; TABLE_LEN].into_boxed_slice();
        progress.start(slabs);

        let fill = |(layer, slab): (usize, &mut [u8])| {
            fill_slab(palette, &grid, layer, slab);
            progress.report_progress();
        };

        let mut builder = rayon::ThreadPoolBuilder::new().thread_name(|i| format!("quantize-{}", i));
        if let Some(workers) = options.workers {
            builder = builder.num_threads(workers.max(1));
        }

        match builder.build() {
            Ok(pool) => pool.install(|| {
                entries
                    .par_chunks_mut(slab_len)
                    .enumerate()
                    .for_each(fill)
            }),
            Err(e) => {
                warn!(error = %e, "Failed to create thread pool, building sequentially");
                entries.chunks_mut(slab_len).enumerate().for_each(fill);
            }
        }

        Ok(Self { entries })
    }

    /// Wrap raw table bytes, checking the length.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        if bytes.len() != TABLE_LEN {
            return Err(Error::InvalidTableLength {
                expected: TABLE_LEN,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            entries: bytes.into_boxed_slice(),
        })
    }

    /// Palette index for `color`. Alpha is ignored.
    pub fn lookup(&self, color: Color) -> u8 {
        self.entries[color.key()]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.entries
    }
}

impl AsRef<[u8]> for QuantizationTable {
    fn as_ref(&self) -> &[u8] {
        &self.entries
    }
}

impl std::fmt::Debug for QuantizationTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuantizationTable")
            .field("len", &self.entries.len())
            .finish()
    }
}

/// Fill the slab covering blue cell layer `layer`.
fn fill_slab(palette: &[Color], grid: &CellGrid, layer: usize, slab: &mut [u8]) {
    let per_axis = grid.per_axis();
    let cell_size = grid.cell_size();

    // Every color in this slab shares the blue cell coordinate
    let candidates: Vec<Vec<u8>> = (0..per_axis * per_axis)
        .map(|i| grid.candidates((i % per_axis, i / per_axis, layer)))
        .collect();

    let base = (layer * cell_size) << 16;
    for (offset, entry) in slab.iter_mut().enumerate() {
        let color = Color::from_key(base + offset);
        let cell = (color.g as usize / cell_size) * per_axis + color.r as usize / cell_size;
        *entry = nearest(palette, &candidates[cell], color);
    }
}

/// Index of the candidate closest to `color`; ties go to the lowest index.
fn nearest(palette: &[Color], candidates: &[u8], color: Color) -> u8 {
    let mut best = candidates[0];
    let mut best_distance = u32::MAX;
    for &index in candidates {
        let distance = palette[index as usize].distance_squared(&color);
        if distance < best_distance {
            best = index;
            best_distance = distance;
        }
    }
    best
}
