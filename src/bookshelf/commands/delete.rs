use crate::catalog::CatalogClient;
use crate::error::Result;
use crate::model::{Book, Outcome};
use crate::render::render_books;
use crate::surface::{self, ids, Surface};
use crate::view::ViewState;
use tracing::{info, warn};

use super::reset;

pub const NOT_REMOVED: &str = "Book is not removed.";

/// Removes the book with `title`, then reloads the full catalog.
///
/// The `remove` endpoint documents no 400 body. A 400 is still read as a
/// rejection here, since the catalog service raises one for an unknown title:
/// its messages go to the field labels with [`NOT_REMOVED`] as status, and
/// the catalog is not reloaded.
pub fn run<C, S>(
    client: &mut C,
    view: &mut ViewState,
    surface: &mut S,
    title: &str,
) -> Result<Outcome<Option<Book>>>
where
    C: CatalogClient + ?Sized,
    S: Surface + ?Sized,
{
    surface::clear_text(surface, ids::MESSAGE);
    surface::clear_text(surface, &ids::field_error("title"));

    info!(title, "removing book");
    let outcome = client.remove(title)?;
    match &outcome {
        Outcome::Accepted(removed) => {
            if let Some(book) = removed {
                surface.set_text(
                    ids::MESSAGE,
                    &format!("Book with title {} is removed", book.title),
                );
            }
            reset::run(client, view, surface)?;
        }
        Outcome::Rejected(errors) => {
            warn!(?errors, "removal rejected");
            view.reset_errors(vec![errors.clone()]);
            render_books(view, surface);
            surface::add_status_error(surface, NOT_REMOVED);
        }
    }
    Ok(outcome)
}
