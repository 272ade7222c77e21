// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Fans the escape-time computation out across worker threads.
//!
//! The pixel buffer is split into horizontal bands of whole rows,
//! one band per worker.  Bands never overlap and together cover
//! every row, so the workers write to the buffer without any
//! locking; the scope join is the only synchronization point.
//! `Renderer::render` does not return until every worker has
//! finished, so the caller always observes a completely populated
//! buffer.

extern crate crossbeam;

use errors::RenderError;
use escape::classify;
use itertools::iproduct;
use planes::PlaneMapper;

/// The number of whole rows in each band when `height` rows are
/// shared between `workers` workers.  Rounds up so that the bands
/// cover every row: when the division is uneven the final band is
/// the one that comes up short, and when `workers` exceeds the row
/// count some workers simply receive no band at all.
pub fn rows_per_band(height: usize, workers: usize) -> usize {
    (height + workers - 1) / workers
}

/// Renders the Mandelbrot set over a fixed plane mapping with a
/// fixed iteration budget.  The renderer itself is immutable; a
/// fresh set of worker threads is spawned for every `render` call
/// and joined before it returns.
pub struct Renderer {
    plane: PlaneMapper,
    limit: usize,
}

impl Renderer {
    /// Constructor.  `limit` is the iteration budget handed to the
    /// escape-time classifier for every pixel.
    pub fn new(plane: PlaneMapper, limit: usize) -> Renderer {
        Renderer { plane, limit }
    }

    /// Populate `pixels` with the classification color of every
    /// point in the plane, using up to `workers` threads.  Each
    /// worker owns a disjoint band of rows, handed out through
    /// `chunks_mut` so the disjointness is enforced by the borrow
    /// checker rather than by a lock.  Blocks until every worker has
    /// finished; on return every pixel holds one of the two
    /// classification colors.  A worker that fails to start or
    /// panics aborts the render.
    pub fn render(&self, pixels: &mut [u32], workers: usize) -> Result<(), RenderError> {
        if workers == 0 {
            return Err(RenderError::NoWorkers);
        }
        assert_eq!(pixels.len(), self.plane.len());

        let band_rows = rows_per_band(self.plane.height, workers);
        crossbeam::scope(|spawner| {
            for (i, band) in pixels.chunks_mut(band_rows * self.plane.width).enumerate() {
                let top = i * band_rows;
                spawner.spawn(move |_| {
                    self.render_band(band, top);
                });
            }
        })
        .unwrap();
        Ok(())
    }

    /// Classify every pixel in one band.  `top` is the image row at
    /// which the band starts; the band holds whole rows, though the
    /// final band of an uneven split holds fewer than the others.
    fn render_band(&self, band: &mut [u32], top: usize) {
        let width = self.plane.width;
        for (row, column) in iproduct!(0..band.len() / width, 0..width) {
            let point = self.plane.pixel_to_point(column, top + row);
            band[row * width + column] = classify(point, self.limit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use escape::{INSIDE_COLOR, OUTSIDE_COLOR};
    use planes::{PlaneMapper, PlaneRect};

    /// A sentinel no classification ever produces, for catching rows
    /// the workers skipped.
    const UNWRITTEN: u32 = 0xFFFF_FFFF;

    fn standard_rect() -> PlaneRect {
        PlaneRect {
            left: -2.0,
            right: 1.0,
            top: 1.125,
            bottom: -1.125,
        }
    }

    fn renderer(width: usize, height: usize, limit: usize) -> Renderer {
        Renderer::new(
            PlaneMapper::new(width, height, standard_rect()).unwrap(),
            limit,
        )
    }

    /// Reproduces the row ranges `render` hands to its workers.
    fn band_ranges(height: usize, workers: usize) -> Vec<(usize, usize)> {
        let rows = rows_per_band(height, workers);
        (0..height)
            .step_by(rows)
            .map(|top| (top, (top + rows).min(height)))
            .collect()
    }

    #[test]
    fn zero_workers_is_rejected() {
        let r = renderer(4, 4, 500);
        let mut pixels = vec![UNWRITTEN; 16];
        assert_eq!(r.render(&mut pixels, 0), Err(RenderError::NoWorkers));
    }

    #[test]
    fn two_workers_split_four_rows_evenly() {
        assert_eq!(band_ranges(4, 2), vec![(0, 2), (2, 4)]);
    }

    #[test]
    fn bands_cover_every_row_exactly_once() {
        for height in 1..24 {
            for workers in 1..height + 3 {
                let mut seen = vec![0usize; height];
                for (start, end) in band_ranges(height, workers) {
                    for row in start..end {
                        seen[row] += 1;
                    }
                }
                assert!(
                    seen.iter().all(|&count| count == 1),
                    "height {} workers {}",
                    height,
                    workers
                );
            }
        }
    }

    #[test]
    fn every_cell_is_classified() {
        let r = renderer(4, 4, 500);
        let mut pixels = vec![UNWRITTEN; 16];
        r.render(&mut pixels, 2).unwrap();
        for pixel in &pixels {
            assert!(*pixel == INSIDE_COLOR || *pixel == OUTSIDE_COLOR);
        }
    }

    #[test]
    fn worker_count_does_not_change_the_image() {
        let r = renderer(60, 48, 120);
        let mut reference = vec![UNWRITTEN; 60 * 48];
        r.render(&mut reference, 1).unwrap();
        for &workers in &[2, 3, 5, 7, 48] {
            let mut pixels = vec![UNWRITTEN; 60 * 48];
            r.render(&mut pixels, workers).unwrap();
            assert_eq!(reference, pixels, "worker count {}", workers);
        }
    }

    #[test]
    fn one_row_per_worker_still_fills_the_grid() {
        let r = renderer(8, 8, 60);
        let mut pixels = vec![UNWRITTEN; 64];
        r.render(&mut pixels, 8).unwrap();
        assert!(pixels
            .iter()
            .all(|&pixel| pixel == INSIDE_COLOR || pixel == OUTSIDE_COLOR));
    }
}
