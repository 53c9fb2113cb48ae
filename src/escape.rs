// src/escape.rs

//! Escape-time iteration for the quadratic map `z -> z² + c`.

use crate::viewport::Point;

/// `|z|² > 4` means `|z| > 2`, after which the orbit is known to diverge.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Counts the iterations of `z -> z² + c`, starting at `z = 0`, until `|z| > 2`.
///
/// The result is in `0..=max_iter`. A result of `max_iter` means the orbit
/// stayed bounded for the whole budget and `c` is presumed to be in the set.
pub fn escape_time(c: Point, max_iter: u32) -> u32 {
    let (mut zx, mut zy) = (0.0f64, 0.0f64);
    let mut iter = 0;
    while zx * zx + zy * zy <= ESCAPE_RADIUS_SQUARED && iter < max_iter {
        // zy must be updated from the old zx.
        let next_zx = zx * zx - zy * zy + c.re;
        zy = 2.0 * zx * zy + c.im;
        zx = next_zx;
        iter += 1;
    }
    iter
}

/// True when `iter` is the "never escaped" sentinel for `max_iter`.
pub fn is_bounded(iter: u32, max_iter: u32) -> bool {
    iter >= max_iter
}
