// src/palette.rs

//! The ASCII density ramp and the quantization of escape counts onto it.

use crate::escape::is_bounded;

/// Ten glyphs ordered from sparsest to densest.
pub const ASCII_RAMP: &[u8; 10] = b" .:-=+*#%@";

/// An ordered set of glyphs used to encode escape speed as density.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    glyphs: &'static [u8],
}

impl Palette {
    /// The standard ten-glyph ramp.
    pub const fn ascii() -> Self {
        Palette {
            glyphs: ASCII_RAMP,
        }
    }

    /// Glyph at `index`, or `None` past the end of the ramp.
    pub fn glyph(&self, index: usize) -> Option<char> {
        self.glyphs.get(index).map(|&b| b as char)
    }

    pub fn sparsest(&self) -> char {
        self.glyphs[0] as char
    }

    pub fn densest(&self) -> char {
        self.glyphs[self.glyphs.len() - 1] as char
    }

    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.glyphs.contains(&(c as u8))
    }

    /// Quantizes an escape count to a ramp index.
    ///
    /// Counts at or past `max_iter` (never escaped) take the last index.
    /// Everything else is `floor(iter * (N - 1) / max_iter)`, which stays
    /// within `0..=N-2`. Integer division, never rounding.
    pub fn index_for(&self, iter: u32, max_iter: u32) -> usize {
        let last = self.glyphs.len() - 1;
        if is_bounded(iter, max_iter) {
            return last;
        }
        // u64 keeps `iter * last` from overflowing on 32-bit targets.
        (u64::from(iter) * last as u64 / u64::from(max_iter)) as usize
    }

    /// Glyph for an escape count.
    pub fn glyph_for(&self, iter: u32, max_iter: u32) -> char {
        self.glyphs[self.index_for(iter, max_iter)] as char
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn it_should_order_glyphs_from_sparse_to_dense() {
        let palette = Palette::ascii();
        assert_eq!(palette.glyph(9), Some('@'));
        assert_eq!(palette.sparsest(), ' ');
        assert_eq!(palette.densest(), '@');
        assert_eq!(palette.glyph(4), Some('='));
        assert_eq!(palette.glyph(10), None);
    }

    #[test]
    fn it_should_map_bounded_points_to_the_last_index() {
        let palette = Palette::ascii();
        for max_iter in [1, 2, 9, 80, 10_000, u32::MAX] {
            assert_eq!(palette.index_for(max_iter, max_iter), 9);
            assert_eq!(palette.glyph_for(max_iter, max_iter), '@');
        }
    }

    #[test]
    fn it_should_agree_with_the_iteration_on_what_counts_as_bounded() {
        let palette = Palette::ascii();
        for max_iter in [1u32, 10, 80] {
            for iter in 0..=max_iter + 2 {
                let densest = palette.index_for(iter, max_iter) == 9;
                assert_eq!(densest, is_bounded(iter, max_iter), "{}/{}", iter, max_iter);
            }
        }
    }

    #[test]
    fn it_should_floor_instead_of_rounding() {
        let palette = Palette::ascii();
        // 8 * 9 / 10 = 7.2 -> 7, and 9 * 9 / 10 = 8.1 -> 8.
        assert_eq!(palette.index_for(8, 10), 7);
        assert_eq!(palette.index_for(9, 10), 8);
        // 79 * 9 / 80 = 8.8875 -> 8 (rounding would give 9).
        assert_eq!(palette.index_for(79, 80), 8);
        assert_eq!(palette.index_for(1, 80), 0);
        assert_eq!(palette.index_for(9, 80), 1);
    }

    #[test]
    fn it_should_never_reach_the_last_index_for_escaped_points() {
        let palette = Palette::ascii();
        for max_iter in 1..200u32 {
            for iter in 0..max_iter {
                assert!(palette.index_for(iter, max_iter) <= 8);
            }
        }
    }

    #[test]
    fn it_should_be_monotonic_in_the_escape_count() {
        let palette = Palette::ascii();
        for max_iter in [1, 7, 80, 313] {
            let mut previous = 0;
            for iter in 0..=max_iter {
                let index = palette.index_for(iter, max_iter);
                assert!(index >= previous, "index dropped at {}/{}", iter, max_iter);
                previous = index;
            }
        }
    }

    #[test]
    fn it_should_not_overflow_on_huge_budgets() {
        let palette = Palette::ascii();
        assert_eq!(palette.index_for(u32::MAX - 1, u32::MAX), 8);
    }

    #[test]
    fn it_should_report_membership() {
        let palette = Palette::ascii();
        assert!(palette.contains('#'));
        assert!(!palette.contains('x'));
        assert!(!palette.contains('é'));
    }
}
