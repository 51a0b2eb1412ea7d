#![allow(clippy::multiple_crate_versions)]

//! Spy - Machine identity wallpaper generator.
//!
//! This binary serves both the interactive console run and the CLI:
//! - When called with no arguments: runs the interactive session and waits
//!   for Enter before exiting, so a double-clicked console stays readable
//! - When called with arguments (e.g., `spy generate --no-apply`): runs CLI commands

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let result = if args.len() == 1 { spy_lib::run() } else { spy_lib::cli::run() };

    if let Err(err) = result {
        eprintln!("spy: {err}");
        std::process::exit(1);
    }
}
