//! # Renderer
//!
//! Projects the [`ViewState`] onto a [`Surface`]. It returns nothing; its
//! effects on the page are the only result.
//!
//! Exactly one of three things happens:
//!
//! 1. **Errors present**: each message is written into the label of its field
//!    (`<field>-error`). The table keeps its rows while the view still holds
//!    books (a rejected add); with no books left it is emptied and hidden.
//! 2. **No books**: the table is hidden and the status panel reports
//!    `No books in the library.` (once, see [`surface::add_status_error`]).
//! 3. **Books**: the table is shown, its rows are cleared and rebuilt one per
//!    book in view order. Rendering the same state twice yields the same rows.

use crate::model::Book;
use crate::money::format_money;
use crate::surface::{self, ids, Surface, TableRow};
use crate::view::ViewState;

pub const NO_BOOKS: &str = "No books in the library.";

pub fn render_books<S: Surface + ?Sized>(view: &ViewState, surface: &mut S) {
    if view.has_errors() {
        for errors in view.errors() {
            for (field, message) in errors {
                surface.set_text(&ids::field_error(field), message);
            }
        }
        if view.books().is_empty() {
            surface::clear_table_rows(surface);
            surface.set_visible(ids::BOOKS_TABLE, false);
        }
        return;
    }

    if view.books().is_empty() {
        surface::add_table_error(surface, NO_BOOKS);
        return;
    }

    surface::remove_table_error(surface);
    surface::clear_table_rows(surface);
    for book in view.books() {
        surface::add_table_row(surface, book_row(book));
    }
}

/// Cells: title, stock, price, price in dollar (two decimals).
pub fn book_row(book: &Book) -> TableRow {
    TableRow {
        cells: vec![
            book.title.clone(),
            book.number_in_stock.to_string(),
            book.price.to_string(),
            format_money(book.price_in_dollar),
        ],
        delete_title: book.title.clone(),
    }
}
