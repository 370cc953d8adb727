//! # Bookshelf Architecture
//!
//! Bookshelf is a **front-end library** for a remote book-inventory catalog. It
//! lists, filters, adds and removes books held by a catalog service, and keeps
//! a page (table, status panel, statistics, field error labels) in step with
//! what the service answered. The terminal client in `cli/` is one way to show
//! that page.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints the page, picks exit codes      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Bookshelf facade, one method per user action             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Workflow Layer (commands/*.rs)                             │
//! │  - Clear stale errors, call the catalog, update the view    │
//! │    state, render                                            │
//! └─────────────────────────────────────────────────────────────┘
//!             │                                  │
//!             ▼                                  ▼
//! ┌───────────────────────────┐    ┌───────────────────────────┐
//! │  Catalog (catalog/)       │    │  View + Render            │
//! │  - CatalogClient trait    │    │  (view.rs, render.rs,     │
//! │  - HttpCatalog            │    │   surface/)               │
//! │  - InMemoryCatalog        │    │  - Surface trait, Page    │
//! └───────────────────────────┘    └───────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. The page is a value behind the [`surface::Surface`] trait; the
//! CLI prints it, tests read it.
//!
//! ## Validation Rejections Are Answers
//!
//! The catalog turns down bad input with HTTP 400 and a `field → message`
//! body. That is an [`model::Outcome::Rejected`], shown in the field labels,
//! and never an error. [`error::BookshelfError`] is kept for transport,
//! decoding and configuration failures.
//!
//! ## Testing Strategy
//!
//! 1. **Workflows** (`commands/*.rs`): driven by
//!    [`catalog::memory::InMemoryCatalog`] and [`surface::page::Page`]. Most
//!    tests live here.
//! 2. **API** (`api.rs`): dispatch of each [`api::Action`].
//! 3. **HTTP + CLI** (`tests/`): a mock catalog server checks the wire
//!    format and the printed page.
//!
//! ## Module Overview

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod money;
pub mod render;
pub mod surface;
pub mod view;
