use crate::catalog::CatalogClient;
use crate::error::Result;
use crate::render::render_books;
use crate::surface::{self, ids, Surface};
use crate::view::ViewState;
use tracing::info;

use super::replace_view;

/// Shows the books priced above `threshold`.
pub fn by_price<C, S>(client: &C, view: &mut ViewState, surface: &mut S, threshold: f64) -> Result<()>
where
    C: CatalogClient + ?Sized,
    S: Surface + ?Sized,
{
    surface::clear_text(surface, ids::PRICE_FILTER_ERROR);
    surface.set_value(ids::PRICE_INPUT, &threshold.to_string());

    info!(threshold, "filtering by price");
    replace_view(view, client.search_by_price_above(threshold)?);
    render_books(view, surface);
    Ok(())
}

/// Shows the books whose title contains `substring`.
pub fn by_title<C, S>(client: &C, view: &mut ViewState, surface: &mut S, substring: &str) -> Result<()>
where
    C: CatalogClient + ?Sized,
    S: Surface + ?Sized,
{
    surface::clear_text(surface, ids::TITLE_FILTER_ERROR);
    surface.set_value(ids::TITLE_INPUT, substring);

    info!(substring, "filtering by title");
    replace_view(view, client.search_by_title(substring)?);
    render_books(view, surface);
    Ok(())
}

/// Shows only books in color when `checked`, the full list otherwise.
pub fn by_color<C, S>(client: &C, view: &mut ViewState, surface: &mut S, checked: bool) -> Result<()>
where
    C: CatalogClient + ?Sized,
    S: Surface + ?Sized,
{
    surface.set_checked(ids::COLOR_CHECKBOX, checked);

    info!(checked, "toggling color filter");
    let outcome = if checked {
        client.list_in_color()?
    } else {
        client.list_all()?
    };
    replace_view(view, outcome);
    render_books(view, surface);
    Ok(())
}
