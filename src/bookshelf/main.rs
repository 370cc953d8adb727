//! # Bookshelf CLI
//!
//! The binary is thin: the CLI lives in `cli/`, this file only invokes
//! `cli::run()` and handles process termination.
//!
//! - `cli/args.rs`: clap argument definitions
//! - `cli/mod.rs`: context wiring (config, logging, catalog) and handlers
//! - `cli/print.rs`: prints the page after each action

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
