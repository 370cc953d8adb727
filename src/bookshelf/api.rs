//! # API Facade
//!
//! [`Bookshelf`] is the single entry point a front-end talks to. It owns the
//! three pieces every workflow needs (the catalog client, the view state and
//! the surface) and forwards each user action to `commands/*.rs`.
//!
//! ## What the facade does
//!
//! - **Dispatches** an [`Action`] to the matching workflow
//! - **Serializes** actions: every action takes `&mut self`, so one runs to
//!   completion (reload and statistics included) before the next can start
//! - **Returns** what the catalog answered, so callers can tell an accepted
//!   add from a rejected one without reading the page
//!
//! ## What it does not do
//!
//! - No business rules: those live in the command modules
//! - No printing: the page is handed back through [`Bookshelf::surface`]
//!
//! ## Generic over the catalog and the surface
//!
//! - Production: `Bookshelf<HttpCatalog, Page>`
//! - Testing: `Bookshelf<InMemoryCatalog, Page>`

use crate::catalog::CatalogClient;
use crate::commands;
use crate::error::Result;
use crate::model::{Book, NewBook, Outcome};
use crate::surface::{Surface, TableRow};
use crate::view::ViewState;

/// A user action, as a front-end would emit it.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Initial load, or any full reload.
    Reset,
    Add(NewBook),
    Delete { title: String },
    FilterByPrice(f64),
    FilterByTitle(String),
    /// The color checkbox changed to the given state.
    ToggleColor(bool),
}

impl Action {
    /// The action bound to a row's delete control.
    pub fn delete_row(row: &TableRow) -> Self {
        Action::Delete {
            title: row.delete_title.clone(),
        }
    }
}

/// What a dispatched action produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult {
    Shown,
    Added(Outcome<Book>),
    Removed(Outcome<Option<Book>>),
}

impl ActionResult {
    pub fn is_rejected(&self) -> bool {
        match self {
            ActionResult::Shown => false,
            ActionResult::Added(outcome) => outcome.is_rejected(),
            ActionResult::Removed(outcome) => outcome.is_rejected(),
        }
    }
}

pub struct Bookshelf<C: CatalogClient, S: Surface> {
    client: C,
    view: ViewState,
    surface: S,
}

impl<C: CatalogClient, S: Surface> Bookshelf<C, S> {
    pub fn new(client: C, surface: S) -> Self {
        Self {
            client,
            view: ViewState::new(),
            surface,
        }
    }

    pub fn reset(&mut self) -> Result<()> {
        commands::reset::run(&self.client, &mut self.view, &mut self.surface)
    }

    pub fn add_book(&mut self, book: &NewBook) -> Result<Outcome<Book>> {
        commands::add::run(&mut self.client, &mut self.view, &mut self.surface, book)
    }

    pub fn delete_book(&mut self, title: &str) -> Result<Outcome<Option<Book>>> {
        commands::delete::run(&mut self.client, &mut self.view, &mut self.surface, title)
    }

    pub fn filter_by_price(&mut self, threshold: f64) -> Result<()> {
        commands::filter::by_price(&self.client, &mut self.view, &mut self.surface, threshold)
    }

    pub fn filter_by_title(&mut self, substring: &str) -> Result<()> {
        commands::filter::by_title(&self.client, &mut self.view, &mut self.surface, substring)
    }

    pub fn toggle_color(&mut self, checked: bool) -> Result<()> {
        commands::filter::by_color(&self.client, &mut self.view, &mut self.surface, checked)
    }

    pub fn dispatch(&mut self, action: Action) -> Result<ActionResult> {
        match action {
            Action::Reset => self.reset().map(|_| ActionResult::Shown),
            Action::Add(book) => self.add_book(&book).map(ActionResult::Added),
            Action::Delete { title } => self.delete_book(&title).map(ActionResult::Removed),
            Action::FilterByPrice(threshold) => {
                self.filter_by_price(threshold).map(|_| ActionResult::Shown)
            }
            Action::FilterByTitle(substring) => {
                self.filter_by_title(&substring).map(|_| ActionResult::Shown)
            }
            Action::ToggleColor(checked) => self.toggle_color(checked).map(|_| ActionResult::Shown),
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn into_parts(self) -> (C, ViewState, S) {
        (self.client, self.view, self.surface)
    }
}
