//! Binary morphological operations
//!
//! Implements erosion, dilation, opening, and closing for binary surfaces
//! (every index 0 or 1).
//!
//! Boundary conditions are lenient in both directions: a SEL offset that
//! falls outside the surface neither disqualifies a pixel during erosion nor
//! sets it during dilation. Each axis is bounded by its own dimension, so
//! non-square surfaces behave the same as square ones at every edge.

use crate::{MorphError, MorphResult, Sel};
use radar_core::{Palette, Surface};
use std::sync::Arc;

/// Dilate a binary surface
///
/// Output pixel is 1 iff any in-bounds hit offset of the SEL lands on a 1.
pub fn dilate(surface: &Surface, sel: &Sel) -> MorphResult<Surface> {
    check_binary(surface)?;
    let offsets: Vec<_> = sel.hit_offsets().collect();
    let grid = surface.grid();
    Ok(apply(surface, |x, y| {
        offsets
            .iter()
            .any(|&(dx, dy)| grid.get_signed(x + dx, y + dy) == Some(1))
    }))
}

/// Erode a binary surface
///
/// Output pixel is 1 iff every in-bounds hit offset of the SEL lands on a
/// 1. Offsets outside the surface are treated as satisfied.
pub fn erode(surface: &Surface, sel: &Sel) -> MorphResult<Surface> {
    check_binary(surface)?;
    let offsets: Vec<_> = sel.hit_offsets().collect();
    let grid = surface.grid();
    Ok(apply(surface, |x, y| {
        offsets
            .iter()
            .all(|&(dx, dy)| grid.get_signed(x + dx, y + dy) != Some(0))
    }))
}

/// Open a binary surface
///
/// Opening = Erosion followed by Dilation.
/// Removes small foreground objects and smooths contours.
pub fn open(surface: &Surface, sel: &Sel) -> MorphResult<Surface> {
    let eroded = erode(surface, sel)?;
    dilate(&eroded, sel)
}

/// Close a binary surface
///
/// Closing = Dilation followed by Erosion.
/// Fills small holes and bridges thin gaps between regions.
pub fn close(surface: &Surface, sel: &Sel) -> MorphResult<Surface> {
    let dilated = dilate(surface, sel)?;
    erode(&dilated, sel)
}

fn apply(surface: &Surface, mut keep: impl FnMut(i32, i32) -> bool) -> Surface {
    let (w, h) = surface.size();
    let mut out = surface.create_template();
    out.set_palette(Some(Arc::new(Palette::binary())));
    for y in 0..h {
        for x in 0..w {
            if keep(x as i32, y as i32) {
                out.set_pixel_unchecked(x, y, 1);
            }
        }
    }
    out
}

pub(crate) fn check_binary(surface: &Surface) -> MorphResult<()> {
    match surface.data().iter().position(|&v| v > 1) {
        None => Ok(()),
        Some(i) => {
            let (x, y) = surface.grid().coords_of(i);
            Err(MorphError::NotBinary {
                x,
                y,
                found: surface.data()[i],
            })
        }
    }
}
