use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::{from_fn_with_state, Next};
use axum::response::{IntoResponse, Response};
use book_inventory::books::dto::{BookDraft, BookDto};
use book_inventory::catalog::controller::{BookTableController, SubmitOutcome};
use book_inventory::core::domain::Configuration;
use book_inventory::core::events::Severity;
use book_inventory::core::library::BookStatus;
use book_inventory::form::Field;
use book_inventory::gateway::http::HttpBookGateway;
use book_inventory::gateway::memory::InMemoryBookGateway;
use book_inventory::mockapi::router::create_router;
use book_inventory::mockapi::store::{sample_books, BookStore};

// Harness pairs a controller with a switch that takes its backend down
struct Harness {
    ctrl: BookTableController,
    outage: Box<dyn Fn(bool) + Send>,
}

fn in_memory(books: Vec<BookDto>) -> Harness {
    let gateway = Arc::new(InMemoryBookGateway::new(BookStore::with_books(books)));
    let switch = gateway.clone();
    Harness {
        ctrl: BookTableController::new(&Configuration::default(), gateway),
        outage: Box::new(move |down| switch.set_failing(down)),
    }
}

async fn refuse_when_down(State(down): State<Arc<AtomicBool>>, req: Request, next: Next) -> Response {
    if down.load(Ordering::SeqCst) {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }
    next.run(req).await
}

async fn over_http(books: Vec<BookDto>) -> Harness {
    let down = Arc::new(AtomicBool::new(false));
    let router = create_router(BookStore::with_books(books))
        .layer(from_fn_with_state(down.clone(), refuse_when_down));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("should bind");
    let port = listener.local_addr().expect("local addr").port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock server");
    });

    let config = Configuration::new(format!("http://127.0.0.1:{}/books", port).as_str());
    let gateway = HttpBookGateway::new(config.base_url.as_str()).expect("should build gateway");
    Harness {
        ctrl: BookTableController::new(&config, Arc::new(gateway)),
        outage: Box::new(move |flag| down.store(flag, Ordering::SeqCst)),
    }
}

fn book_a() -> BookDto {
    BookDto::new("1", &BookDraft::new("A", "X", "Fiction", 2000, BookStatus::Available))
}

async fn delete_then_fail(mut h: Harness) {
    assert!(h.ctrl.load().await);
    assert_eq!(vec![book_a()], h.ctrl.books().to_vec());

    h.ctrl.request_delete("1").expect("should ask for confirmation");
    assert!(h.ctrl.confirm_delete().await);
    assert!(h.ctrl.books().is_empty());
    let toasts = h.ctrl.take_notifications();
    assert_eq!(1, toasts.len());
    assert_eq!(Severity::Success, toasts[0].severity);

    h.ctrl.open_add();
    for (field, value) in [(Field::Title, "A"), (Field::Author, "X"), (Field::Genre, "Fiction"),
                           (Field::PublishedYear, "2000")] {
        h.ctrl.set_field(field, value).expect("should set field");
    }
    assert!(matches!(h.ctrl.submit_at(2026).await, SubmitOutcome::Saved(_)));
    h.ctrl.take_notifications();

    (h.outage)(true);
    let id = h.ctrl.books()[0].id.to_string();
    h.ctrl.request_delete(id.as_str()).expect("should ask for confirmation");
    assert!(!h.ctrl.confirm_delete().await);
    assert_eq!(1, h.ctrl.books().len());
    let toasts = h.ctrl.take_notifications();
    assert_eq!(1, toasts.len());
    assert!(toasts[0].is_error());
    assert_eq!("Failed to delete book", toasts[0].detail.as_str());
}

async fn create_appends_one(mut h: Harness) {
    assert!(h.ctrl.load().await);
    let before = h.ctrl.books().to_vec();

    h.ctrl.open_add();
    for (field, value) in [(Field::Title, "B"), (Field::Author, "Y"), (Field::Genre, "Sci-Fi"),
                           (Field::PublishedYear, "1999"), (Field::Status, "unavailable")] {
        h.ctrl.set_field(field, value).expect("should set field");
    }
    let SubmitOutcome::Saved(book) = h.ctrl.submit_at(2026).await else {
        panic!("should create book");
    };
    assert!(!book.id.is_empty());
    assert!(before.iter().all(|b| b.id != book.id));
    assert_eq!(before.len() + 1, h.ctrl.books().len());
    assert_eq!(before.as_slice(), &h.ctrl.books()[..before.len()]);
    assert_eq!(&book, h.ctrl.books().last().expect("last"));
    assert_eq!(BookStatus::Unavailable, book.status);
    assert_eq!(1999, book.published_year);
    let toasts = h.ctrl.take_notifications();
    assert_eq!(Severity::Success, toasts[0].severity);
    assert_eq!("Book has been added successfully", toasts[0].detail.as_str());
}

async fn load_failure_keeps_ui_usable(mut h: Harness) {
    (h.outage)(true);
    assert!(!h.ctrl.load().await);
    assert!(h.ctrl.take_notifications()[0].is_error());
    (h.outage)(false);
    assert!(h.ctrl.load().await);
    assert_eq!(24, h.ctrl.books().len());
    assert!(h.ctrl.go_to_page(3));
    assert_eq!(4, h.ctrl.visible().records.len());
}

#[tokio::test]
async fn test_should_delete_then_report_failure_in_memory() {
    delete_then_fail(in_memory(vec![book_a()])).await;
}

#[tokio::test]
async fn test_should_delete_then_report_failure_over_http() {
    delete_then_fail(over_http(vec![book_a()]).await).await;
}

#[tokio::test]
async fn test_should_append_created_book_in_memory() {
    create_appends_one(in_memory(vec![book_a()])).await;
}

#[tokio::test]
async fn test_should_append_created_book_over_http() {
    create_appends_one(over_http(sample_books()).await).await;
}

#[tokio::test]
async fn test_should_recover_after_load_failure_in_memory() {
    load_failure_keeps_ui_usable(in_memory(sample_books())).await;
}

#[tokio::test]
async fn test_should_recover_after_load_failure_over_http() {
    load_failure_keeps_ui_usable(over_http(sample_books()).await).await;
}
