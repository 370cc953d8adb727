//! # Catalog Client
//!
//! The [`CatalogClient`] trait is the only way the front-end talks to the book
//! catalog. Every method is one fresh round trip: no retries, no caching, no
//! timeouts.
//!
//! ## Answers
//!
//! Operations the catalog validates return [`Outcome`]: a validation rejection
//! (HTTP 400 with a field → message body) comes back as
//! `Ok(Outcome::Rejected(..))`. Anything else that goes wrong (other non-2xx
//! statuses, network failures, undecodable bodies) is an `Err`.
//!
//! ## Implementations
//!
//! - [`http::HttpCatalog`]: the real catalog service over HTTP
//! - [`memory::InMemoryCatalog`]: a local stand-in that follows the same
//!   contract, including the server's validation messages. Used by tests.

use crate::error::Result;
use crate::model::{Book, NewBook, Outcome};

pub mod http;
pub mod memory;

pub const DEFAULT_CATALOG_URL: &str = "http://localhost:8080/api/book";

pub trait CatalogClient {
    /// `GET /all`
    fn list_all(&self) -> Result<Outcome<Vec<Book>>>;

    /// `GET /search/priceMoreThen?price=P`
    fn search_by_price_above(&self, threshold: f64) -> Result<Outcome<Vec<Book>>>;

    /// `GET /search/title/{substring}`
    fn search_by_title(&self, substring: &str) -> Result<Outcome<Vec<Book>>>;

    /// `GET /search/inColor`
    fn list_in_color(&self) -> Result<Outcome<Vec<Book>>>;

    /// `POST /add`
    fn add(&mut self, book: &NewBook) -> Result<Outcome<Book>>;

    /// `DELETE /remove/{title}`; `None` when the catalog answers `null`.
    fn remove(&mut self, title: &str) -> Result<Outcome<Option<Book>>>;

    /// `GET /mostExpensive`; `None` for an empty catalog.
    fn most_expensive(&self) -> Result<Option<Book>>;

    /// `GET /totalValue`
    fn total_value(&self) -> Result<f64>;
}
