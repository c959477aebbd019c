use async_trait::async_trait;
use crate::books::dto::{BookDraft, BookDto};
use crate::core::library::LibraryResult;

pub(crate) const LIST_FAILED: &str = "Failed to fetch books";
pub(crate) const CREATE_FAILED: &str = "Failed to add book";
pub(crate) const REPLACE_FAILED: &str = "Failed to update book";
pub(crate) const REMOVE_FAILED: &str = "Failed to delete book";

// BookGateway is the remote collection of books. Every call is one round trip; failures
// of any kind surface as LibraryError::Fetch naming the operation.
#[async_trait]
pub trait BookGateway: Sync + Send {
    // all books in backend order
    async fn list(&self) -> LibraryResult<Vec<BookDto>>;

    // persists a draft and returns the record with its assigned id
    async fn create(&self, draft: &BookDraft) -> LibraryResult<BookDto>;

    // replaces the record keyed by id, returning the backend's copy verbatim
    async fn replace(&self, id: &str, draft: &BookDraft) -> LibraryResult<BookDto>;

    // deletes the record keyed by id
    async fn remove(&self, id: &str) -> LibraryResult<()>;
}
