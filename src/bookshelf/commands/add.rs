use crate::catalog::CatalogClient;
use crate::error::Result;
use crate::model::{Book, NewBook, Outcome};
use crate::render::render_books;
use crate::surface::{self, ids, Surface};
use crate::view::ViewState;
use tracing::{info, warn};

use super::reset;

pub const NOT_ADDED: &str = "Book is not added.";

pub fn run<C, S>(
    client: &mut C,
    view: &mut ViewState,
    surface: &mut S,
    book: &NewBook,
) -> Result<Outcome<Book>>
where
    C: CatalogClient + ?Sized,
    S: Surface + ?Sized,
{
    surface::clear_status(surface);
    for label in ids::ADD_FORM_ERRORS {
        surface::clear_text(surface, label);
    }

    info!(title = %book.title, "adding book");
    let outcome = client.add(book)?;
    match &outcome {
        Outcome::Rejected(errors) => {
            warn!(?errors, "book rejected");
            view.reset_errors(vec![errors.clone()]);
            render_books(view, surface);
            surface::add_status_error(surface, NOT_ADDED);
        }
        Outcome::Accepted(added) => {
            surface::add_status_success(surface, &format!("Book {} is added.", added.title));
            reset::run(client, view, surface)?;
        }
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::memory::fixtures::sample_catalog;
    use crate::commands::filter;
    use crate::surface::page::Page;
    use crate::surface::{Paragraph, ParagraphClass};

    #[test]
    fn rejected_book_fills_labels_and_one_status_error() {
        let mut catalog = sample_catalog();
        let mut view = ViewState::new();
        let mut page = Page::new();
        reset::run(&catalog, &mut view, &mut page).unwrap();
        let table_before = page.rows(ids::BOOKS_TABLE_BODY).to_vec();

        let outcome = run(
            &mut catalog,
            &mut view,
            &mut page,
            &NewBook::new("", 9, 12.0, false),
        )
        .unwrap();

        assert!(outcome.is_rejected());
        assert_eq!(page.text("title-error"), "Title is required");
        assert_eq!(
            page.text("numberInStock-error"),
            "Number in stock must be between 1 and 5"
        );
        assert_eq!(page.paragraphs(ids::STATUS), vec![Paragraph::error(NOT_ADDED)]);
        assert_eq!(page.rows(ids::BOOKS_TABLE_BODY), table_before.as_slice());
        assert_eq!(catalog.books().len(), 3);
    }

    #[test]
    fn resubmitting_clears_stale_labels() {
        let mut catalog = sample_catalog();
        let mut view = ViewState::new();
        let mut page = Page::new();

        run(&mut catalog, &mut view, &mut page, &NewBook::new("", 1, 1.0, false)).unwrap();
        run(&mut catalog, &mut view, &mut page, &NewBook::new("Dune", 9, 1.0, false)).unwrap();

        assert_eq!(page.text("title-error"), "");
        assert_eq!(
            page.text("numberInStock-error"),
            "Number in stock must be between 1 and 5"
        );
        assert_eq!(page.paragraphs(ids::STATUS).len(), 1);
    }

    #[test]
    fn accepted_book_reloads_the_unfiltered_catalog() {
        let mut catalog = sample_catalog();
        let mut view = ViewState::new();
        let mut page = Page::new();
        filter::by_color(&catalog, &mut view, &mut page, true).unwrap();
        assert_eq!(view.books().len(), 2);

        catalog.clear_requests();
        let outcome = run(
            &mut catalog,
            &mut view,
            &mut page,
            &NewBook::new("Dune", 2, 15.0, false),
        )
        .unwrap();

        assert!(!outcome.is_rejected());
        assert_eq!(view.books().len(), 4);
        assert_eq!(page.rows(ids::BOOKS_TABLE_BODY).len(), 4);
        assert!(!page.is_checked(ids::COLOR_CHECKBOX));
        assert_eq!(
            catalog.requests(),
            vec!["POST /add", "GET /all", "GET /mostExpensive", "GET /totalValue"]
        );
        assert_eq!(
            page.paragraphs(ids::STATUS),
            vec![Paragraph::success("Book Dune is added.")]
        );
        assert!(!page.has_paragraph(ids::STATUS, ParagraphClass::Error));
    }
}
