use super::CatalogClient;
use crate::error::{BookshelfError, Result};
use crate::model::{Book, FieldErrors, NewBook, Outcome};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

/// Catalog client speaking to the book service over HTTP.
pub struct HttpCatalog {
    client: Client,
    base: Url,
}

impl HttpCatalog {
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url)?;
        if base.cannot_be_a_base() {
            return Err(BookshelfError::Config(format!(
                "{} cannot be used as a catalog base URL",
                base_url
            )));
        }
        Ok(Self {
            client: Client::new(),
            base,
        })
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                BookshelfError::Config(format!("{} cannot be used as a catalog base URL", self.base))
            })?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    fn send(&self, method: &str, request: RequestBuilder) -> Result<Response> {
        let response = request.header(ACCEPT, "application/json").send()?;
        debug!(method, url = %response.url(), status = %response.status(), "catalog request");
        Ok(response)
    }

    fn get_validated<T: DeserializeOwned>(&self, url: Url) -> Result<Outcome<T>> {
        let response = self.send("GET", self.client.get(url))?;
        validated(response)
    }

    fn get_plain<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self.send("GET", self.client.get(url))?;
        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(BookshelfError::Transport {
                status: status.as_u16(),
                body,
            });
        }
        parse_body(&body)
    }
}

/// Turns a 400 into a rejection, any other failure status into an error.
fn validated<T: DeserializeOwned>(response: Response) -> Result<Outcome<T>> {
    let status = response.status();
    let body = response.text()?;

    if status == StatusCode::BAD_REQUEST {
        let errors: FieldErrors = serde_json::from_str(&body)?;
        warn!(?errors, "catalog rejected request");
        return Ok(Outcome::Rejected(errors));
    }
    if !status.is_success() {
        return Err(BookshelfError::Transport {
            status: status.as_u16(),
            body,
        });
    }
    Ok(Outcome::Accepted(parse_body(&body)?))
}

// An empty 200 body stands for `null`
fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T> {
    let body = if body.trim().is_empty() { "null" } else { body };
    Ok(serde_json::from_str(body)?)
}

impl CatalogClient for HttpCatalog {
    fn list_all(&self) -> Result<Outcome<Vec<Book>>> {
        self.get_validated(self.endpoint(&["all"])?)
    }

    fn search_by_price_above(&self, threshold: f64) -> Result<Outcome<Vec<Book>>> {
        let mut url = self.endpoint(&["search", "priceMoreThen"])?;
        url.query_pairs_mut()
            .append_pair("price", &threshold.to_string());
        self.get_validated(url)
    }

    fn search_by_title(&self, substring: &str) -> Result<Outcome<Vec<Book>>> {
        self.get_validated(self.endpoint(&["search", "title", substring])?)
    }

    fn list_in_color(&self) -> Result<Outcome<Vec<Book>>> {
        self.get_validated(self.endpoint(&["search", "inColor"])?)
    }

    fn add(&mut self, book: &NewBook) -> Result<Outcome<Book>> {
        let url = self.endpoint(&["add"])?;
        let response = self.send("POST", self.client.post(url).json(book))?;
        validated(response)
    }

    fn remove(&mut self, title: &str) -> Result<Outcome<Option<Book>>> {
        let url = self.endpoint(&["remove", title])?;
        let response = self.send("DELETE", self.client.delete(url))?;
        validated(response)
    }

    fn most_expensive(&self) -> Result<Option<Book>> {
        self.get_plain(self.endpoint(&["mostExpensive"])?)
    }

    fn total_value(&self) -> Result<f64> {
        self.get_plain(self.endpoint(&["totalValue"])?)
    }
}
