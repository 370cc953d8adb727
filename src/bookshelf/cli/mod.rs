//! # CLI Behavior
//!
//! One possible client for bookshelf: every invocation performs a single user
//! action against the catalog and prints the resulting page.
//!
//! ## Naked Execution
//!
//! `bookshelf` with no subcommand is `bookshelf list`: the full reload with
//! statistics, as a browser shows on first load.
//!
//! ## Catalog URL
//!
//! Priority order:
//!
//! 1. `--url URL`
//! 2. `BOOKSHELF_CATALOG_URL`
//! 3. `catalog-url` in `config.json` (see `bookshelf config`)
//! 4. the built-in default, `http://localhost:8080/api/book`
//!
//! `BOOKSHELF_CONFIG_DIR` replaces the platform config directory.
//!
//! ## Rejections
//!
//! A catalog rejection (bad input, unknown title) is printed as field errors
//! and a red status line. The process still exits 0; only transport and
//! configuration failures exit 1.

mod args;
mod print;

use args::{Cli, Commands, FilterBy};
use bookshelf::api::{Action, Bookshelf};
use bookshelf::catalog::http::HttpCatalog;
use bookshelf::config::{BookshelfConfig, CATALOG_URL_KEY};
use bookshelf::error::{BookshelfError, Result};
use bookshelf::model::NewBook;
use bookshelf::surface::page::Page;
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CATALOG_URL_ENV: &str = "BOOKSHELF_CATALOG_URL";
const CONFIG_DIR_ENV: &str = "BOOKSHELF_CONFIG_DIR";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    configure_logging(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config_dir = config_dir()?;
    let config = BookshelfConfig::load(&config_dir)?;

    let action = match cli.command {
        Some(Commands::Config { key, value }) => {
            return handle_config(&config_dir, config, key, value);
        }
        None | Some(Commands::List) => Action::Reset,
        Some(Commands::Add {
            title,
            stock,
            price,
            in_color,
        }) => Action::Add(NewBook::new(title, stock, price, in_color)),
        Some(Commands::Delete { title }) => Action::Delete { title },
        Some(Commands::Filter { by }) => match by {
            FilterBy::Price { threshold } => Action::FilterByPrice(threshold),
            FilterBy::Title { text } => Action::FilterByTitle(text),
            FilterBy::Color { off } => Action::ToggleColor(!off),
        },
    };

    let env_url = std::env::var(CATALOG_URL_ENV).ok();
    let url = config.resolve_catalog_url(cli.url.as_deref(), env_url.as_deref());
    debug!(%url, "using catalog");

    let mut shelf = Bookshelf::new(HttpCatalog::new(&url)?, Page::new());
    shelf.dispatch(action)?;
    print::print_page(shelf.surface());
    Ok(())
}

/// Logs go to stderr. `RUST_LOG` wins unless `--verbose` asks for debug.
fn configure_logging(verbose: bool) {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "bookshelf", "bookshelf")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| BookshelfError::Config("Could not determine config dir".into()))
}

fn handle_config(
    config_dir: &Path,
    mut config: BookshelfConfig,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    match (key.as_deref(), value) {
        (None, _) => println!("{} = {}", CATALOG_URL_KEY, config.catalog_url),
        (Some(key), None) => println!("{} = {}", key, config.get(key)?),
        (Some(key), Some(value)) => {
            config.set(key, &value)?;
            config.save(config_dir)?;
            println!("{}", format!("{} set to {}", key, value).green());
        }
    }
    Ok(())
}
