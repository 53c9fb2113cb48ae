// src/lib.rs

//! termbrot library crate.
//!
//! Renders an ASCII escape-time picture of the Mandelbrot set. The modules
//! are exposed for the binary, the plugin entry points, and tests.

/// Configuration loading and defaults.
pub mod config;
/// Line-oriented output drivers.
pub mod display;
/// The escape-time iteration.
pub mod escape;
/// Glyph ramp and quantization.
pub mod palette;
/// Exported entry points for a plugin host.
pub mod plugin;
/// Frame assembly.
pub mod renderer;
/// Pixel-to-plane mapping.
pub mod viewport;

pub use config::Config;
pub use renderer::Renderer;
