//! Fast marching inpainting
//!
//! Reconstructs the pixels under an inpaint mask by marching a front inward
//! from the known pixels that surround them. Every pixel is in one of three
//! states:
//!
//! - `Known`: its value is final. Unmasked pixels start here.
//! - `Band`: on the front. Its value is estimated and it waits in the
//!   [`NarrowBand`] keyed by arrival distance.
//! - `Unknown`: masked and not yet reached.
//!
//! The front always advances at its nearest pixel. Arrival distances are
//! recomputed from the known diagonal neighbor pairs with a first-order
//! eikonal update, so the march moves outward in roughly circular layers.
//!
//! A pixel's value is fixed the moment it joins the band: the integer mean
//! of its known 8-neighbors whose source value is nonzero. Zero stands for
//! "no signal" and never feeds an estimate.

use crate::{InpaintError, InpaintResult, NarrowBand};
use radar_core::{CROSS_4, Grid, Palette, RING_8, Surface};
use std::sync::Arc;

/// March state of a single pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelState {
    /// Value final
    Known,
    /// On the front, queued by distance
    Band,
    /// Masked and not yet reached
    Unknown,
}

/// Counters collected during one inpainting run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InpaintStats {
    /// Masked pixels seeded onto the front at initialization
    pub band_seeds: usize,
    /// Masked pixels seeded as unreached
    pub unknown_seeds: usize,
    /// Live entries popped from the band
    pub pops: usize,
    /// Superseded band entries discarded on pop
    pub stale_skipped: usize,
    /// Masked pixels that ended without an estimate and were written as 0
    pub unresolved: usize,
}

/// Solve the eikonal update for one pair of known neighbor distances.
///
/// With both distances present the arrival time `s` satisfies
/// `(s - t1)^2 + (s - t2)^2 = 1`. The smaller root is taken when it is not
/// below either input, otherwise the larger one. When the neighbors are too
/// far apart for a real root the update falls back to one step from the
/// nearer neighbor. Either way the result is never below the later of the
/// two neighbors. With a single distance the result is one step from it;
/// with none it is infinite.
///
/// # Examples
///
/// ```
/// use radar_inpaint::solve_eikonal;
///
/// assert_eq!(solve_eikonal(Some(0.0), None), 1.0);
/// assert_eq!(solve_eikonal(None, None), f32::INFINITY);
/// let s = solve_eikonal(Some(0.0), Some(0.0));
/// assert!((s - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
/// ```
pub fn solve_eikonal(t1: Option<f32>, t2: Option<f32>) -> f32 {
    match (t1, t2) {
        (Some(t1), Some(t2)) => {
            let floor = t1.max(t2);
            let disc = 2.0 - (t1 - t2) * (t1 - t2);
            if disc < 0.0 {
                return (1.0 + t1.min(t2)).max(floor);
            }
            let root = disc.sqrt();
            let low = (t1 + t2 - root) / 2.0;
            let high = (t1 + t2 + root) / 2.0;
            if low >= floor { low } else { high.max(floor) }
        }
        (Some(t), None) | (None, Some(t)) => 1.0 + t,
        (None, None) => f32::INFINITY,
    }
}

/// Inpaint the masked pixels of `data`.
///
/// Unmasked pixels are copied unchanged. The output keeps the palette of
/// `data`, or gets the radar palette if `data` has none.
///
/// # Arguments
/// * `data` - source surface
/// * `mask` - binary surface of the same size, 1 marks a pixel to rebuild
///
/// # Errors
///
/// Returns an error if the sizes differ or `mask` is not binary.
pub fn inpaint(data: &Surface, mask: &Surface) -> InpaintResult<Surface> {
    inpaint_with_stats(data, mask).map(|(out, _)| out)
}

/// Inpaint the masked pixels of `data` and report run statistics.
///
/// See [`inpaint`].
pub fn inpaint_with_stats(data: &Surface, mask: &Surface) -> InpaintResult<(Surface, InpaintStats)> {
    if !data.sizes_equal(mask) {
        return Err(radar_core::Error::DimensionMismatch {
            expected: data.size(),
            actual: mask.size(),
        }
        .into());
    }
    if let Some(i) = mask.data().iter().position(|&v| v > 1) {
        let (x, y) = mask.grid().coords_of(i);
        return Err(InpaintError::NotBinaryMask {
            x,
            y,
            found: mask.data()[i],
        });
    }

    let mut march = March::new(data.grid(), mask.grid())?;
    march.seed();
    march.run();

    let mut out = data.clone();
    if !out.has_palette() {
        out.set_palette(Some(Arc::new(Palette::radar())));
    }
    let stats = march.write_into(out.grid_mut());

    log::debug!(
        "inpaint {}x{}: {} band seeds, {} unknown seeds, {} pops, {} stale, {} unresolved",
        data.width(),
        data.height(),
        stats.band_seeds,
        stats.unknown_seeds,
        stats.pops,
        stats.stale_skipped,
        stats.unresolved
    );
    Ok((out, stats))
}

struct March<'a> {
    src: &'a Grid<u8>,
    mask: &'a Grid<u8>,
    state: Grid<PixelState>,
    dist: Grid<f32>,
    value: Grid<Option<u8>>,
    band: NarrowBand<usize>,
    stats: InpaintStats,
}

impl<'a> March<'a> {
    fn new(src: &'a Grid<u8>, mask: &'a Grid<u8>) -> InpaintResult<Self> {
        let (w, h) = (src.width(), src.height());
        Ok(March {
            src,
            mask,
            state: Grid::new(w, h, PixelState::Known)?,
            dist: Grid::new(w, h, 0.0)?,
            value: Grid::new(w, h, None)?,
            band: NarrowBand::new(),
            stats: InpaintStats::default(),
        })
    }

    fn masked(&self, x: u32, y: u32) -> bool {
        self.mask.get_unchecked(x, y) != 0
    }

    /// Classify every pixel, then estimate and queue the band.
    ///
    /// States are all assigned before any estimate is taken, so a band
    /// pixel never averages over a neighbor that has not been classified.
    fn seed(&mut self) {
        let (w, h) = (self.src.width(), self.src.height());
        let mut seeds = Vec::new();
        for y in 0..h {
            for x in 0..w {
                if !self.masked(x, y) {
                    continue;
                }
                let mut in_bounds = 0;
                let mut masked = 0;
                for &(dx, dy) in &CROSS_4 {
                    if let Some((nx, ny)) = self.src.neighbor(x, y, dx, dy) {
                        in_bounds += 1;
                        if self.masked(nx, ny) {
                            masked += 1;
                        }
                    }
                }
                if in_bounds > 0 && masked == in_bounds {
                    self.state.set_unchecked(x, y, PixelState::Unknown);
                    self.dist.set_unchecked(x, y, f32::INFINITY);
                    self.stats.unknown_seeds += 1;
                } else {
                    self.state.set_unchecked(x, y, PixelState::Band);
                    seeds.push((x, y));
                }
            }
        }

        self.stats.band_seeds = seeds.len();
        for (x, y) in seeds {
            let estimate = self.estimate(x, y);
            self.value.set_unchecked(x, y, estimate);
            self.band.push(self.src.index_of(x, y), 0.0);
        }
    }

    fn run(&mut self) {
        while let Some((index, _)) = self.band.pop() {
            self.stats.pops += 1;
            let (x, y) = self.state.coords_of(index);
            self.state.set_unchecked(x, y, PixelState::Known);

            for &(dx, dy) in &CROSS_4 {
                let Some((nx, ny)) = self.src.neighbor(x, y, dx, dy) else {
                    continue;
                };
                let state = self.state.get_unchecked(nx, ny);
                if state == PixelState::Known {
                    continue;
                }
                let d = self.arrival(nx as i32, ny as i32);
                self.dist.set_unchecked(nx, ny, d);
                if state == PixelState::Unknown {
                    self.state.set_unchecked(nx, ny, PixelState::Band);
                    let estimate = self.estimate(nx, ny);
                    self.value.set_unchecked(nx, ny, estimate);
                }
                self.band.push(self.src.index_of(nx, ny), d);
            }
        }
        self.stats.stale_skipped = self.band.stale_skipped();
    }

    /// Minimum arrival distance over the four diagonal neighbor pairs.
    fn arrival(&self, x: i32, y: i32) -> f32 {
        [(-1, -1), (1, -1), (-1, 1), (1, 1)]
            .iter()
            .map(|&(sx, sy)| solve_eikonal(self.known_dist(x + sx, y), self.known_dist(x, y + sy)))
            .fold(f32::INFINITY, f32::min)
    }

    fn known_dist(&self, x: i32, y: i32) -> Option<f32> {
        match self.state.get_signed(x, y) {
            Some(PixelState::Known) => self.dist.get_signed(x, y),
            _ => None,
        }
    }

    /// Integer mean of known 8-neighbors carrying signal.
    fn estimate(&self, x: u32, y: u32) -> Option<u8> {
        let mut sum = 0u32;
        let mut count = 0u32;
        for &(dx, dy) in &RING_8 {
            let Some((nx, ny)) = self.src.neighbor(x, y, dx, dy) else {
                continue;
            };
            if self.state.get_unchecked(nx, ny) != PixelState::Known {
                continue;
            }
            let v = self.src.get_unchecked(nx, ny);
            if v != 0 {
                sum += u32::from(v);
                count += 1;
            }
        }
        (count > 0).then(|| (sum / count) as u8)
    }

    fn write_into(mut self, out: &mut Grid<u8>) -> InpaintStats {
        for (i, &m) in self.mask.data().iter().enumerate() {
            if m == 0 {
                continue;
            }
            let value = match self.value.data()[i] {
                Some(v) if self.state.data()[i] == PixelState::Known => v,
                _ => {
                    self.stats.unresolved += 1;
                    0
                }
            };
            out.data_mut()[i] = value;
        }
        self.stats
    }
}
