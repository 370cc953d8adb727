use bookshelf::api::Bookshelf;
use bookshelf::catalog::http::HttpCatalog;
use bookshelf::catalog::CatalogClient;
use bookshelf::error::BookshelfError;
use bookshelf::model::{NewBook, Outcome};
use bookshelf::surface::page::Page;
use bookshelf::surface::{ids, Paragraph};
use httpmock::prelude::*;
use serde_json::json;

fn catalog(server: &MockServer) -> HttpCatalog {
    HttpCatalog::new(&server.url("/api/book")).unwrap()
}

fn dune() -> serde_json::Value {
    json!({
        "title": "Dune",
        "numberInStock": 2,
        "price": 15.0,
        "inColor": false,
        "priceInDollar": 15.9
    })
}

#[test]
fn list_all_decodes_camel_case_books() {
    let server = MockServer::start();
    let all = server.mock(|when, then| {
        when.method(GET).path("/api/book/all");
        then.status(200).json_body(json!([dune()]));
    });

    let outcome = catalog(&server).list_all().unwrap();

    all.assert();
    let Outcome::Accepted(books) = outcome else {
        panic!("expected books");
    };
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "Dune");
    assert_eq!(books[0].number_in_stock, 2);
    assert_eq!(books[0].price_in_dollar, 15.9);
}

#[test]
fn book_without_dollar_price_fails_to_decode() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/book/search/inColor");
        then.status(200).json_body(json!([{
            "title": "Dune",
            "numberInStock": 2,
            "price": 15.0,
            "inColor": true
        }]));
    });

    let err = catalog(&server).list_in_color().unwrap_err();

    assert!(matches!(err, BookshelfError::Serialization(_)));
    assert!(err.to_string().contains("priceInDollar"));
}

#[test]
fn price_search_sends_threshold_as_query() {
    let server = MockServer::start();
    let search = server.mock(|when, then| {
        when.method(GET)
            .path("/api/book/search/priceMoreThen")
            .query_param("price", "20.5");
        then.status(200).json_body(json!([]));
    });

    let outcome = catalog(&server).search_by_price_above(20.5).unwrap();

    search.assert();
    assert_eq!(outcome, Outcome::Accepted(vec![]));
}

#[test]
fn add_posts_json_and_maps_400_to_rejection() {
    let server = MockServer::start();
    let add = server.mock(|when, then| {
        when.method(POST).path("/api/book/add").json_body(json!({
            "title": "",
            "numberInStock": 9,
            "price": 12.0,
            "inColor": true
        }));
        then.status(400).json_body(json!({
            "title": "Title is required",
            "numberInStock": "Number in stock must be between 1 and 5"
        }));
    });

    let outcome = catalog(&server)
        .add(&NewBook::new("", 9, 12.0, true))
        .unwrap();

    add.assert();
    let Outcome::Rejected(errors) = outcome else {
        panic!("expected rejection");
    };
    assert_eq!(errors["title"], "Title is required");
    assert_eq!(errors.len(), 2);
}

#[test]
fn remove_accepts_a_null_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/api/book/remove/Dune");
        then.status(200).body("null");
    });

    let outcome = catalog(&server).remove("Dune").unwrap();

    assert_eq!(outcome, Outcome::Accepted(None));
}

#[test]
fn server_errors_are_transport_failures() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/book/all");
        then.status(500).body("boom");
    });

    let err = catalog(&server).list_all().unwrap_err();

    match err {
        BookshelfError::Transport { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn aggregates_decode_plain_values() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/book/mostExpensive");
        then.status(200).json_body(dune());
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/book/totalValue");
        then.status(200).body("30.0");
    });

    let catalog = catalog(&server);

    assert_eq!(
        catalog.most_expensive().unwrap().map(|b| b.title),
        Some("Dune".to_string())
    );
    assert_eq!(catalog.total_value().unwrap(), 30.0);
}

#[test]
fn rejected_add_shows_label_and_single_status_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/book/add");
        then.status(400).json_body(json!({"title": "Title required"}));
    });

    let mut shelf = Bookshelf::new(catalog(&server), Page::new());
    shelf.add_book(&NewBook::new("", 1, 1.0, false)).unwrap();
    shelf.add_book(&NewBook::new("", 1, 1.0, false)).unwrap();

    let page = shelf.surface();
    assert_eq!(page.text("title-error"), "Title required");
    assert_eq!(
        page.paragraphs(ids::STATUS),
        vec![Paragraph::error("Book is not added.")]
    );
}

#[test]
fn deleting_the_last_book_empties_the_page() {
    let server = MockServer::start();
    let remove = server.mock(|when, then| {
        when.method(DELETE).path("/api/book/remove/Dune");
        then.status(200).json_body(dune());
    });
    let all = server.mock(|when, then| {
        when.method(GET).path("/api/book/all");
        then.status(200).json_body(json!([]));
    });
    let most_expensive = server.mock(|when, then| {
        when.method(GET).path("/api/book/mostExpensive");
        then.status(200).body("null");
    });

    let mut shelf = Bookshelf::new(catalog(&server), Page::new());
    shelf.delete_book("Dune").unwrap();

    remove.assert();
    all.assert();
    most_expensive.assert_hits(0);

    let page = shelf.surface();
    assert_eq!(page.text(ids::MESSAGE), "Book with title Dune is removed");
    assert!(!page.is_visible(ids::BOOKS_TABLE));
    assert_eq!(
        page.paragraphs(ids::STATS),
        vec![
            Paragraph::plain("The most expensive book is: No books in the library."),
            Paragraph::plain("The total value of the collection is: No books in the library."),
        ]
    );
}

#[test]
fn full_reload_renders_rows_and_statistics() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/book/all");
        then.status(200).json_body(json!([
            dune(),
            {
                "title": "Emma",
                "numberInStock": 1,
                "price": 9.005,
                "inColor": true,
                "priceInDollar": 9.005
            }
        ]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/book/mostExpensive");
        then.status(200).json_body(dune());
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/book/totalValue");
        then.status(200).body("39.005");
    });

    let mut shelf = Bookshelf::new(catalog(&server), Page::new());
    shelf.reset().unwrap();

    let page = shelf.surface();
    let rows = page.rows(ids::BOOKS_TABLE_BODY);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].cells, vec!["Dune", "2", "15", "15.90"]);
    assert_eq!(rows[1].cells[3], "9.01");
    assert_eq!(
        page.paragraphs(ids::STATS)[1],
        Paragraph::plain("The total value of the collection is: 39.01")
    );
}
