// src/renderer.rs

//! This module defines the `Renderer`.
//!
//! The `Renderer` turns a `Config` into text: a header line, one row of
//! palette glyphs per grid row, and an optional trailing note. Each cell is
//! mapped onto the complex plane by the viewport `Mapper`, run through the
//! escape-time iteration, and quantized onto the `Palette`.
//!
//! Rows are built and handed to the `Driver` one at a time, in increasing `y`
//! order. No frame is retained between rows; `render_frame()` exists for
//! callers that want the rows collected.

use crate::config::Config;
use crate::display::Driver;
use crate::escape::escape_time;
use crate::palette::Palette;
use crate::viewport::{Grid, Mapper, Viewport, VIEWPORT};

use anyhow::Result;
use log::{debug, trace};

/// Renders the escape-time picture for one configuration.
///
/// The `Renderer` holds only derived, immutable settings. Every method is a
/// pure function of them, so two renders of the same `Renderer` (or of two
/// `Renderer`s built from equal configs) produce identical output.
#[derive(Debug, Clone)]
pub struct Renderer {
    grid: Grid,
    max_iter: u32,
    palette: Palette,
    viewport: Viewport,
    note: Option<String>,
}

impl Renderer {
    /// Creates a `Renderer` for `config` over the standard viewport and palette.
    pub fn new(config: &Config) -> Self {
        Renderer {
            grid: config.grid(),
            max_iter: config.iteration_budget(),
            palette: Palette::ascii(),
            viewport: VIEWPORT,
            note: config.note().map(str::to_owned),
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn max_iter(&self) -> u32 {
        self.max_iter
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// The line printed before the frame.
    pub fn header(&self) -> String {
        format!(
            "Mandelbrot demo ({}x{}, iters={})",
            self.grid.width, self.grid.height, self.max_iter
        )
    }

    /// Glyph for a single cell.
    pub fn cell(&self, mapper: &Mapper, x: usize, y: usize) -> char {
        let iter = escape_time(mapper.map(x, y), self.max_iter);
        self.palette.glyph_for(iter, self.max_iter)
    }

    /// Builds row `y` as exactly `grid.width` glyphs.
    ///
    /// Returns `None` for a degenerate grid or a row outside it.
    pub fn render_row(&self, y: usize) -> Option<String> {
        if y >= self.grid.height {
            return None;
        }
        let mapper = self.viewport.mapper(self.grid)?;
        Some(self.build_row(&mapper, y))
    }

    fn build_row(&self, mapper: &Mapper, y: usize) -> String {
        let mut line = String::with_capacity(self.grid.width);
        for x in 0..self.grid.width {
            line.push(self.cell(mapper, x, y));
        }
        line
    }

    /// Iterates the frame's rows top to bottom, building each lazily.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        let height = self.grid.height;
        self.viewport
            .mapper(self.grid)
            .into_iter()
            .flat_map(move |mapper| (0..height).map(move |y| self.build_row(&mapper, y)))
    }

    /// Collects the whole frame. Empty for a degenerate grid.
    pub fn render_frame(&self) -> Vec<String> {
        self.rows().collect()
    }

    /// Emits the header, every row, and the note (if any) to `driver`.
    pub fn draw(&self, driver: &mut dyn Driver) -> Result<()> {
        debug!(
            "Renderer: Drawing {}x{} frame with budget {}",
            self.grid.width, self.grid.height, self.max_iter
        );
        driver.write_line(&self.header())?;
        for (y, row) in self.rows().enumerate() {
            trace!("Renderer: Emitting row {}", y);
            driver.write_line(&row)?;
        }

        if let Some(note) = &self.note {
            driver.write_line(&format!("Note: {}", note))?;
        }

        driver.present()
    }
}
