// src/viewport.rs

//! Maps pixel coordinates of the output grid onto the complex plane.

use serde::{Deserialize, Serialize};

/// Dimensions of the output raster, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Grid { width, height }
    }

    /// A grid with no cells along at least one axis renders nothing.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A point `re + i·im` on the complex plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub re: f64,
    pub im: f64,
}

impl Point {
    pub fn new(re: f64, im: f64) -> Self {
        Point { re, im }
    }
}

/// Rectangular region of the complex plane sampled by the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Real component at the left edge.
    pub re_min: f64,
    /// Width of the region along the real axis.
    pub re_span: f64,
    /// Imaginary component at the top edge (row 0).
    pub im_min: f64,
    /// Height of the region along the imaginary axis.
    pub im_span: f64,
}

/// The region every frame is drawn from: real [-2.5, 1.0], imaginary [-1.0, 1.0].
pub const VIEWPORT: Viewport = Viewport {
    re_min: -2.5,
    re_span: 3.5,
    im_min: -1.0,
    im_span: 2.0,
};

impl Viewport {
    /// Precomputes the per-axis scale factors for `grid`.
    ///
    /// Returns `None` for a degenerate grid, where there are no cells to map
    /// and the scale factors would divide by zero.
    pub fn mapper(&self, grid: Grid) -> Option<Mapper> {
        if grid.is_degenerate() {
            return None;
        }
        Some(Mapper {
            origin: Point::new(self.re_min, self.im_min),
            scale_x: self.re_span / grid.width as f64,
            scale_y: self.im_span / grid.height as f64,
        })
    }
}

/// Linear pixel-to-plane transform for one (viewport, grid) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mapper {
    origin: Point,
    scale_x: f64,
    scale_y: f64,
}

impl Mapper {
    /// Real component for column `x`.
    pub fn re_at(&self, x: usize) -> f64 {
        self.origin.re + x as f64 * self.scale_x
    }

    /// Imaginary component for row `y`.
    pub fn im_at(&self, y: usize) -> f64 {
        self.origin.im + y as f64 * self.scale_y
    }

    /// Plane coordinate of the cell at column `x`, row `y`.
    pub fn map(&self, x: usize, y: usize) -> Point {
        Point::new(self.re_at(x), self.im_at(y))
    }
}
