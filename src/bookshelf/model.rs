use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field name → human-readable message, as sent by the catalog on HTTP 400.
pub type FieldErrors = BTreeMap<String, String>;

/// A book as the catalog reports it. `title` is the identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub title: String,
    pub number_in_stock: i64,
    pub price: f64,
    pub in_color: bool,
    // Computed by the server from `price`
    pub price_in_dollar: f64,
}

/// The body posted to the catalog when adding a book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub title: String,
    pub number_in_stock: i64,
    pub price: f64,
    pub in_color: bool,
}

impl NewBook {
    pub fn new(title: impl Into<String>, number_in_stock: i64, price: f64, in_color: bool) -> Self {
        Self {
            title: title.into(),
            number_in_stock,
            price,
            in_color,
        }
    }
}

/// Result of a catalog call that the server may turn down with a validation
/// rejection. A rejection is a normal answer, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Accepted(T),
    Rejected(FieldErrors),
}

impl<T> Outcome<T> {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }
}
