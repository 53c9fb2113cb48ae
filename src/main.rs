// src/main.rs

//! Demonstration harness for `termbrot`.
//!
//! Calls the library's plugin entry points the same way a plugin host
//! would: the no-op init hook, then `run`, then the two typed calls.

use termbrot::config::Config;
use termbrot::plugin;

use anyhow::{bail, Context};
use log::info;

const USAGE: &str = "usage: termbrot [--print-config]";

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the frame.
    // Default filter is "warn" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => {}
        [flag] if flag == "--print-config" => {
            let json = serde_json::to_string_pretty(&Config::from_env())
                .context("Failed to serialize configuration")?;
            println!("{}", json);
            return Ok(());
        }
        _ => bail!("unrecognized arguments {:?}\n{}", args, USAGE),
    }

    info!("Starting termbrot");

    plugin::plugin_init();
    plugin::run();

    let sum = plugin::add(20, 22);
    println!("add(20, 22) -> {}", sum);

    let f10 = plugin::fib(10);
    println!("fib(10) -> {}", f10);

    println!("Plugin executed successfully!");
    info!("termbrot exited successfully.");

    Ok(())
}
