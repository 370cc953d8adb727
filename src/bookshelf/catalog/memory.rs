use super::CatalogClient;
use crate::error::Result;
use crate::model::{Book, FieldErrors, NewBook, Outcome};
use std::cell::RefCell;

/// Conversion rate the catalog uses to derive `priceInDollar`.
pub const DOLLAR_RATE: f64 = 1.06;

/// Catalog kept in memory, answering like the real service does.
///
/// Every call is logged as `"<METHOD> <path>"` so tests can check which
/// endpoints a workflow touched.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    books: Vec<Book>,
    requests: RefCell<Vec<String>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: impl IntoIterator<Item = NewBook>) -> Self {
        Self {
            books: books.into_iter().map(priced).collect(),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Requests seen so far, oldest first.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn clear_requests(&self) {
        self.requests.borrow_mut().clear();
    }

    fn record(&self, request: impl Into<String>) {
        self.requests.borrow_mut().push(request.into());
    }

    fn validate(&self, book: &NewBook) -> FieldErrors {
        let mut errors = FieldErrors::new();
        let title = book.title.trim();

        if title.is_empty() {
            errors.insert("title".into(), "Title is required".into());
        } else if title.chars().count() < 3 {
            errors.insert("title".into(), "Title must have at least 3 chars".into());
        } else if self.books.iter().any(|b| b.title == book.title) {
            errors.insert("title".into(), "Title must be unique".into());
        }

        if !(1..=5).contains(&book.number_in_stock) {
            errors.insert(
                "numberInStock".into(),
                "Number in stock must be between 1 and 5".into(),
            );
        }

        if book.price < 0.0 {
            errors.insert("price".into(), "Price must be positive".into());
        }

        errors
    }
}

fn priced(book: NewBook) -> Book {
    Book {
        price_in_dollar: book.price * DOLLAR_RATE,
        title: book.title,
        number_in_stock: book.number_in_stock,
        price: book.price,
        in_color: book.in_color,
    }
}

fn rejection(field: &str, message: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.insert(field.to_string(), message.to_string());
    errors
}

impl CatalogClient for InMemoryCatalog {
    fn list_all(&self) -> Result<Outcome<Vec<Book>>> {
        self.record("GET /all");
        Ok(Outcome::Accepted(self.books.clone()))
    }

    fn search_by_price_above(&self, threshold: f64) -> Result<Outcome<Vec<Book>>> {
        self.record(format!("GET /search/priceMoreThen?price={}", threshold));
        if threshold < 0.0 {
            return Ok(Outcome::Rejected(rejection(
                "price-filter",
                "Price must be a non-negative number",
            )));
        }
        let found = self
            .books
            .iter()
            .filter(|b| b.price > threshold)
            .cloned()
            .collect();
        Ok(Outcome::Accepted(found))
    }

    fn search_by_title(&self, substring: &str) -> Result<Outcome<Vec<Book>>> {
        self.record(format!("GET /search/title/{}", substring));
        if substring.chars().count() < 3 {
            return Ok(Outcome::Rejected(rejection(
                "title-filter",
                "Title must have at least 3 chars",
            )));
        }
        let needle = substring.to_lowercase();
        let found = self
            .books
            .iter()
            .filter(|b| b.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        Ok(Outcome::Accepted(found))
    }

    fn list_in_color(&self) -> Result<Outcome<Vec<Book>>> {
        self.record("GET /search/inColor");
        let found = self.books.iter().filter(|b| b.in_color).cloned().collect();
        Ok(Outcome::Accepted(found))
    }

    fn add(&mut self, book: &NewBook) -> Result<Outcome<Book>> {
        self.record("POST /add");
        let errors = self.validate(book);
        if !errors.is_empty() {
            return Ok(Outcome::Rejected(errors));
        }
        let added = priced(book.clone());
        self.books.push(added.clone());
        Ok(Outcome::Accepted(added))
    }

    fn remove(&mut self, title: &str) -> Result<Outcome<Option<Book>>> {
        self.record(format!("DELETE /remove/{}", title));
        match self.books.iter().position(|b| b.title == title) {
            Some(pos) => Ok(Outcome::Accepted(Some(self.books.remove(pos)))),
            None => Ok(Outcome::Rejected(rejection(
                "title",
                "Book with given title does not exist",
            ))),
        }
    }

    fn most_expensive(&self) -> Result<Option<Book>> {
        self.record("GET /mostExpensive");
        // First book wins on equal prices
        let best = self.books.iter().fold(None, |best: Option<&Book>, book| match best {
            Some(current) if current.price >= book.price => Some(current),
            _ => Some(book),
        });
        Ok(best.cloned())
    }

    fn total_value(&self) -> Result<f64> {
        self.record("GET /totalValue");
        Ok(self
            .books
            .iter()
            .map(|b| b.price * b.number_in_stock as f64)
            .sum())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// A small catalog: two colored books, one black-and-white.
    pub fn sample_catalog() -> InMemoryCatalog {
        InMemoryCatalog::with_books([
            NewBook::new("Don Quichotte", 3, 20.7, true),
            NewBook::new("Harry Potter", 5, 20.07, false),
            NewBook::new("Jane Eyre", 4, 33.02, true),
        ])
    }
}
