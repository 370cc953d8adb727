//! # View State
//!
//! The client-held snapshot of what is currently rendered: the books of the last
//! completed fetch and the validation errors it produced.
//!
//! Both lists are only ever replaced wholesale. There is deliberately no way to
//! insert, update or remove a single book: after any action the rendered table
//! mirrors what the catalog last answered, never a locally patched guess.

use crate::model::{Book, FieldErrors};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    books: Vec<Book>,
    errors: Vec<FieldErrors>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the book list, keeping the order it was given in.
    pub fn reset_to(&mut self, books: Vec<Book>) {
        self.books = books;
    }

    /// Replaces the error list.
    pub fn reset_errors(&mut self, errors: Vec<FieldErrors>) {
        self.errors = errors;
    }

    /// Clears both lists; done at the start of every fetch.
    pub fn clear(&mut self) {
        self.books.clear();
        self.errors.clear();
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn errors(&self) -> &[FieldErrors] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
