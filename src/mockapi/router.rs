use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use tracing::info;
use crate::books::dto::{BookDraft, BookDto};
use crate::core::library::LibraryError;
use crate::mockapi::store::BookStore;

pub(crate) type ServerError = (StatusCode, String);

fn to_server_error(err: LibraryError) -> ServerError {
    match err {
        LibraryError::NotFound { .. } => {
            (StatusCode::NOT_FOUND, format!("{}", err))
        }
        LibraryError::Validation { .. } | LibraryError::Serialization { .. } => {
            (StatusCode::BAD_REQUEST, format!("{}", err))
        }
        _ => {
            (StatusCode::INTERNAL_SERVER_ERROR, format!("{}", err))
        }
    }
}

async fn list_books(State(store): State<BookStore>) -> Json<Vec<BookDto>> {
    Json(store.list().await)
}

async fn add_book(
    State(store): State<BookStore>,
    Json(draft): Json<BookDraft>) -> (StatusCode, Json<BookDto>) {
    let book = store.create(&draft).await;
    info!("created book {}", book.id);
    (StatusCode::CREATED, Json(book))
}

async fn find_book_by_id(
    State(store): State<BookStore>,
    Path(book_id): Path<String>) -> Result<Json<BookDto>, ServerError> {
    store.get(book_id.as_str()).await.map(Json).map_err(to_server_error)
}

async fn replace_book(
    State(store): State<BookStore>,
    Path(book_id): Path<String>,
    Json(draft): Json<BookDraft>) -> Result<Json<BookDto>, ServerError> {
    let book = store.replace(book_id.as_str(), &draft).await.map_err(to_server_error)?;
    info!("replaced book {}", book.id);
    Ok(Json(book))
}

async fn remove_book(
    State(store): State<BookStore>,
    Path(book_id): Path<String>) -> Result<Json<BookDto>, ServerError> {
    let book = store.delete(book_id.as_str()).await.map_err(to_server_error)?;
    info!("deleted book {}", book.id);
    Ok(Json(book))
}

pub fn create_router(store: BookStore) -> Router {
    Router::new()
        .route("/books", get(list_books).post(add_book))
        .route("/books/:id",
               get(find_book_by_id).put(replace_book).delete(remove_book))
        .with_state(store)
}
