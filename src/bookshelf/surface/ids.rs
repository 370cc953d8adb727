//! Element ids of the fixed rendering regions.

pub const BOOKS_TABLE: &str = "booksTable";
pub const BOOKS_TABLE_BODY: &str = "booksTableBody";
pub const STATUS: &str = "status";
pub const STATS: &str = "stats";
pub const MESSAGE: &str = "message";

pub const PRICE_FILTER_ERROR: &str = "price-filter-error";
pub const TITLE_FILTER_ERROR: &str = "title-filter-error";

pub const TITLE_INPUT: &str = "title";
pub const PRICE_INPUT: &str = "price";
pub const COLOR_CHECKBOX: &str = "color";

/// Labels of the add form, cleared before every submission.
pub const ADD_FORM_ERRORS: [&str; 3] = ["price-error", "title-error", "numberInStock-error"];

/// The label that shows validation messages for `field`.
pub fn field_error(field: &str) -> String {
    format!("{}-error", field)
}
