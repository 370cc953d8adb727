use crate::catalog::CatalogClient;
use crate::error::Result;
use crate::money::format_money;
use crate::render::{render_books, NO_BOOKS};
use crate::surface::{self, Surface};
use crate::view::ViewState;
use tracing::info;

use super::replace_view;

/// Reloads the whole catalog, clears the filters and refreshes the statistics.
///
/// The aggregate endpoints are only asked when there is at least one book;
/// otherwise both statistics show the empty-library placeholder.
pub fn run<C, S>(client: &C, view: &mut ViewState, surface: &mut S) -> Result<()>
where
    C: CatalogClient + ?Sized,
    S: Surface + ?Sized,
{
    info!("reloading full catalog");
    replace_view(view, client.list_all()?);
    render_books(view, surface);
    surface::clear_filters(surface);
    surface::clear_statistics(surface);

    let most_expensive = if view.books().is_empty() {
        NO_BOOKS.to_string()
    } else {
        client
            .most_expensive()?
            .map(|book| book.title)
            .unwrap_or_else(|| NO_BOOKS.to_string())
    };
    surface::add_statistic(
        surface,
        &format!("The most expensive book is: {}", most_expensive),
    );

    let total_value = if view.books().is_empty() {
        NO_BOOKS.to_string()
    } else {
        format_money(client.total_value()?)
    };
    surface::add_statistic(
        surface,
        &format!("The total value of the collection is: {}", total_value),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::memory::fixtures::sample_catalog;
    use crate::catalog::memory::InMemoryCatalog;
    use crate::surface::page::Page;
    use crate::surface::{ids, Paragraph};

    #[test]
    fn renders_catalog_and_statistics() {
        let catalog = sample_catalog();
        let mut view = ViewState::new();
        let mut page = Page::new();

        run(&catalog, &mut view, &mut page).unwrap();

        assert_eq!(view.books().len(), 3);
        assert_eq!(page.rows(ids::BOOKS_TABLE_BODY).len(), 3);
        assert_eq!(
            page.paragraphs(ids::STATS),
            vec![
                Paragraph::plain("The most expensive book is: Jane Eyre"),
                Paragraph::plain("The total value of the collection is: 294.53"),
            ]
        );
    }

    #[test]
    fn empty_catalog_skips_aggregate_endpoints() {
        let catalog = InMemoryCatalog::new();
        let mut view = ViewState::new();
        let mut page = Page::new();

        run(&catalog, &mut view, &mut page).unwrap();

        assert_eq!(catalog.requests(), vec!["GET /all"]);
        assert_eq!(
            page.paragraphs(ids::STATS),
            vec![
                Paragraph::plain("The most expensive book is: No books in the library."),
                Paragraph::plain("The total value of the collection is: No books in the library."),
            ]
        );
        assert!(!page.is_visible(ids::BOOKS_TABLE));
    }

    #[test]
    fn clears_filters_and_replaces_old_statistics() {
        let catalog = sample_catalog();
        let mut view = ViewState::new();
        let mut page = Page::new();
        page.set_value(ids::TITLE_INPUT, "Jane");
        page.set_checked(ids::COLOR_CHECKBOX, true);
        page.set_text(ids::TITLE_FILTER_ERROR, "Title must have at least 3 chars");

        run(&catalog, &mut view, &mut page).unwrap();
        run(&catalog, &mut view, &mut page).unwrap();

        assert_eq!(page.value(ids::TITLE_INPUT), "");
        assert!(!page.is_checked(ids::COLOR_CHECKBOX));
        assert_eq!(page.text(ids::TITLE_FILTER_ERROR), "");
        assert_eq!(page.paragraphs(ids::STATS).len(), 2);
    }
}
