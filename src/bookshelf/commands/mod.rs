//! # Workflows
//!
//! One module per user action. Each `run`:
//!
//! 1. clears the transient error displays that belong to the action,
//! 2. calls the catalog and waits for the answer,
//! 3. replaces the view state with that answer,
//! 4. renders.
//!
//! Adding or deleting a book always ends with a full reload ([`reset`]), so
//! whatever filter was active is dropped and the table shows the catalog as
//! the server now has it.
//!
//! Workflows take the client, the view state and the surface as plain
//! arguments and never print; the caller decides what to do with the page.

use crate::model::{Book, Outcome};
use crate::view::ViewState;

pub mod add;
pub mod delete;
pub mod filter;
pub mod reset;

/// Applies a list answer to the view: both lists are cleared, then the books
/// or the rejection take their place.
pub fn replace_view(view: &mut ViewState, outcome: Outcome<Vec<Book>>) {
    view.clear();
    match outcome {
        Outcome::Accepted(books) => view.reset_to(books),
        Outcome::Rejected(errors) => view.reset_errors(vec![errors]),
    }
}
