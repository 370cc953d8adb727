//! # Rendering Surface
//!
//! Everything the front-end shows goes through the [`Surface`] trait: a document
//! of elements addressed by id, whose text, visibility, input values and
//! children (paragraphs, table rows) can be set. The library never assumes
//! what sits behind it.
//!
//! ## Implementations
//!
//! - [`page::Page`]: an in-memory document. The CLI prints it after every
//!   action; tests inspect it directly.
//!
//! A browser build would implement the same trait over the real DOM.
//!
//! ## Helpers
//!
//! The free functions in this module are the small page operations the
//! workflows are written in terms of (clear the table, show a status error,
//! reset the filters, ...). They only use the trait, so they behave the same on
//! every surface. The one rule they enforce: at most one status error is
//! visible at a time.

pub mod ids;
pub mod page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphClass {
    Plain,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub class: ParagraphClass,
    pub text: String,
}

impl Paragraph {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            class: ParagraphClass::Plain,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            class: ParagraphClass::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            class: ParagraphClass::Error,
            text: text.into(),
        }
    }
}

/// One rendered book: its display cells plus the title its delete control is
/// bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub delete_title: String,
}

/// An id-addressable document.
///
/// Writes to an id that does not exist yet create the element.
pub trait Surface {
    fn set_text(&mut self, id: &str, text: &str);

    fn set_visible(&mut self, id: &str, visible: bool);

    /// Sets the value of an input element.
    fn set_value(&mut self, id: &str, value: &str);

    /// Sets the state of a checkbox element.
    fn set_checked(&mut self, id: &str, checked: bool);

    /// Removes all paragraphs and rows below `id`.
    fn clear_children(&mut self, id: &str);

    fn append_paragraph(&mut self, id: &str, paragraph: Paragraph);

    fn has_paragraph(&self, id: &str, class: ParagraphClass) -> bool;

    fn remove_paragraphs(&mut self, id: &str, class: ParagraphClass);

    fn append_row(&mut self, id: &str, row: TableRow);
}

pub fn clear_text<S: Surface + ?Sized>(surface: &mut S, id: &str) {
    surface.set_text(id, "");
}

pub fn clear_table_rows<S: Surface + ?Sized>(surface: &mut S) {
    surface.clear_children(ids::BOOKS_TABLE_BODY);
}

pub fn add_table_row<S: Surface + ?Sized>(surface: &mut S, row: TableRow) {
    surface.append_row(ids::BOOKS_TABLE_BODY, row);
}

pub fn clear_status<S: Surface + ?Sized>(surface: &mut S) {
    surface.clear_children(ids::STATUS);
}

pub fn add_status_success<S: Surface + ?Sized>(surface: &mut S, text: &str) {
    surface.append_paragraph(ids::STATUS, Paragraph::success(text));
}

/// Shows a status error unless one is already visible.
pub fn add_status_error<S: Surface + ?Sized>(surface: &mut S, text: &str) {
    if !surface.has_paragraph(ids::STATUS, ParagraphClass::Error) {
        surface.append_paragraph(ids::STATUS, Paragraph::error(text));
    }
}

pub fn remove_status_errors<S: Surface + ?Sized>(surface: &mut S) {
    surface.remove_paragraphs(ids::STATUS, ParagraphClass::Error);
}

/// Hides the books table and explains why in the status panel.
pub fn add_table_error<S: Surface + ?Sized>(surface: &mut S, text: &str) {
    surface.set_visible(ids::BOOKS_TABLE, false);
    add_status_error(surface, text);
}

pub fn remove_table_error<S: Surface + ?Sized>(surface: &mut S) {
    surface.set_visible(ids::BOOKS_TABLE, true);
    remove_status_errors(surface);
}

pub fn clear_statistics<S: Surface + ?Sized>(surface: &mut S) {
    surface.clear_children(ids::STATS);
}

pub fn add_statistic<S: Surface + ?Sized>(surface: &mut S, text: &str) {
    surface.append_paragraph(ids::STATS, Paragraph::plain(text));
}

/// Resets the filter inputs and their error labels.
pub fn clear_filters<S: Surface + ?Sized>(surface: &mut S) {
    clear_text(surface, ids::PRICE_FILTER_ERROR);
    clear_text(surface, ids::TITLE_FILTER_ERROR);
    surface.set_value(ids::TITLE_INPUT, "");
    surface.set_value(ids::PRICE_INPUT, "");
    surface.set_checked(ids::COLOR_CHECKBOX, false);
}
