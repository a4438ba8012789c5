//! Spatial index over the palette.
//!
//! The color cube is cut into cubic cells of side `cell_size`. Every palette
//! entry is filed under the cell containing it, so a nearest-entry query only
//! has to look at the query's own cell and, if that is empty, at the shells
//! of cells around it.

use crate::color::Color;

const EMPTY: u16 = u16::MAX;

/// Cell coordinates `(r, g, b)` in units of `cell_size`.
pub type CellCoord = (usize, usize, usize);

/// Palette entries bucketed by cell.
#[derive(Debug)]
pub struct CellGrid {
    cell_size: usize,
    per_axis: usize,
    /// Dense `per_axis^3` map from cell to bucket index, `EMPTY` when vacant
    occupancy: Vec<u16>,
    /// Palette indices per occupied cell, ascending
    buckets: Vec<Vec<u8>>,
}

impl CellGrid {
    /// Bucket `palette` into cells of side `cell_size`.
    ///
    /// The caller guarantees `1 <= cell_size <= 256` and
    /// `palette.len() <= 256`.
    pub fn new(palette: &[Color], cell_size: usize) -> Self {
        let per_axis = 256usize.div_ceil(cell_size);
        let mut grid = Self {
            cell_size,
            per_axis,
            occupancy: vec![EMPTY; per_axis * per_axis * per_axis],
            buckets: Vec::new(),
        };

        for (index, color) in palette.iter().enumerate() {
            let slot = grid.slot(grid.cell_of(*color));
            if grid.occupancy[slot] == EMPTY {
                grid.occupancy[slot] = grid.buckets.len() as u16;
                grid.buckets.push(Vec::new());
            }
            grid.buckets[grid.occupancy[slot] as usize].push(index as u8);
        }

        grid
    }

    pub fn cell_size(&self) -> usize {
        self.cell_size
    }

    /// Cells along each axis, `ceil(256 / cell_size)`.
    pub fn per_axis(&self) -> usize {
        self.per_axis
    }

    /// Number of cells holding at least one palette entry.
    pub fn occupied_cells(&self) -> usize {
        self.buckets.len()
    }

    pub fn cell_of(&self, color: Color) -> CellCoord {
        (
            color.r as usize / self.cell_size,
            color.g as usize / self.cell_size,
            color.b as usize / self.cell_size,
        )
    }

    /// Palette indices worth measuring for any color inside `cell`.
    ///
    /// Returns the entries of `cell` itself when it has any; otherwise the
    /// entries of the first non-empty Chebyshev shell around it. The shell
    /// beyond the first hit is not inspected, so the nearest entry overall
    /// may be missed near cell borders. Result is sorted and deduplicated.
    pub fn candidates(&self, cell: CellCoord) -> Vec<u8> {
        let mut found = Vec::new();
        self.collect(cell, &mut found);

        let mut shell = 1;
        while found.is_empty() && shell < self.per_axis {
            self.collect_shell(cell, shell, &mut found);
            shell += 1;
        }

        found.sort_unstable();
        found.dedup();
        found
    }

    /// Gather every cell at Chebyshev distance exactly `radius` from
    /// `center`, clamped to the cube.
    fn collect_shell(&self, center: CellCoord, radius: usize, out: &mut Vec<u8>) {
        let (cr, cg, cb) = center;
        let last = self.per_axis - 1;
        let (r_lo, r_hi) = (cr.saturating_sub(radius), (cr + radius).min(last));
        let (g_lo, g_hi) = (cg.saturating_sub(radius), (cg + radius).min(last));
        let (b_lo, b_hi) = (cb.saturating_sub(radius), (cb + radius).min(last));

        for b in b_lo..=b_hi {
            let b_face = b.abs_diff(cb) == radius;
            for g in g_lo..=g_hi {
                if b_face || g.abs_diff(cg) == radius {
                    // Whole row lies on the shell surface
                    for r in r_lo..=r_hi {
                        self.collect((r, g, b), out);
                    }
                } else {
                    // Interior row: only its two ends touch the surface
                    if cr >= radius {
                        self.collect((cr - radius, g, b), out);
                    }
                    if cr + radius <= last {
                        self.collect((cr + radius, g, b), out);
                    }
                }
            }
        }
    }

    fn collect(&self, cell: CellCoord, out: &mut Vec<u8>) {
        let bucket = self.occupancy[self.slot(cell)];
        if bucket != EMPTY {
            out.extend_from_slice(&self.buckets[bucket as usize]);
        }
    }

    fn slot(&self, (r, g, b): CellCoord) -> usize {
        (b * self.per_axis + g) * self.per_axis + r
    }
}
