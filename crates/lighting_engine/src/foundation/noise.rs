//! Smooth 2D value noise
//!
//! Lattice values come from an integer hash and are blended with smoothstep,
//! so the result is deterministic for a given coordinate, continuous as either
//! coordinate moves, and always inside `[0, 1]`.

use super::math::{lerp, smoothstep};

/// Hash an integer lattice point into `[0, 1]`
fn lattice(ix: i32, iy: i32) -> f32 {
    let mut h = (ix as u32).wrapping_mul(73_856_093) ^ (iy as u32).wrapping_mul(19_349_663);
    h ^= h >> 13;
    h = h.wrapping_mul(1_274_126_177);
    h ^= h >> 16;
    (h & 0x00ff_ffff) as f32 / 16_777_215.0
}

/// Sample value noise at `(x, y)`
///
/// Non-finite coordinates sample the origin cell.
pub fn value_noise(x: f32, y: f32) -> f32 {
    let (x, y) = if x.is_finite() && y.is_finite() { (x, y) } else { (0.0, 0.0) };

    let x0 = x.floor();
    let y0 = y.floor();
    let ix = x0 as i32;
    let iy = y0 as i32;

    let sx = smoothstep(x - x0);
    let sy = smoothstep(y - y0);

    let top = lerp(lattice(ix, iy), lattice(ix.wrapping_add(1), iy), sx);
    let bottom = lerp(
        lattice(ix, iy.wrapping_add(1)),
        lattice(ix.wrapping_add(1), iy.wrapping_add(1)),
        sx,
    );
    lerp(top, bottom, sy).clamp(0.0, 1.0)
}
