// src/plugin.rs

//! Entry points exported for a plugin host.
//!
//! A host loads the library and calls these symbols by name. `run` performs
//! the full compute-and-print cycle; `plugin_init` is the no-op hook some
//! loaders insist on; `add` and `fib` are small typed calls a host can use
//! to check that argument and return values cross the boundary intact.

use crate::config::Config;
use crate::display::{ConsoleDriver, Driver};
use crate::renderer::Renderer;

use anyhow::Result;
use log::{error, info};

/// Loads a fresh `Config` from `lookup` and draws its frame to `driver`.
///
/// Every call starts from scratch; nothing carries over between runs.
pub fn load_and_render<F>(lookup: F, driver: &mut dyn Driver) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let config = Config::from_lookup(lookup);
    Renderer::new(&config).draw(driver)?;
    Ok(config)
}

/// Loads the configuration from the environment and prints the frame.
#[no_mangle]
pub extern "C" fn run() {
    let mut driver = ConsoleDriver::stdout();
    match load_and_render(|key| std::env::var(key).ok(), &mut driver) {
        Ok(_) => info!("Plugin: Wrote {} lines", driver.lines_written()),
        Err(e) => error!("Plugin: Render failed: {:#}", e),
    }
}

/// Initialization hook required by the loader. Does nothing.
#[no_mangle]
pub extern "C" fn plugin_init() {}

#[no_mangle]
pub extern "C" fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// The `n`th Fibonacci number, wrapping past `u64::MAX` (from `n = 94` on).
#[no_mangle]
pub extern "C" fn fib(n: u32) -> u64 {
    match n {
        0 => 0,
        1 => 1,
        _ => {
            let (mut a, mut b) = (0u64, 1u64);
            for _ in 2..=n {
                let next = a.wrapping_add(b);
                a = b;
                b = next;
            }
            b
        }
    }
}
