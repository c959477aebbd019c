use std::sync::atomic::{AtomicBool, Ordering};
use async_trait::async_trait;
use tracing::{info, warn};
use crate::books::dto::{BookDraft, BookDto};
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::books::{BookGateway, CREATE_FAILED, LIST_FAILED, REMOVE_FAILED, REPLACE_FAILED};
use crate::mockapi::store::BookStore;

// InMemoryBookGateway serves the gateway contract from a local BookStore. It backs the
// offline mode and lets tests simulate a failing backend.
#[derive(Debug, Default)]
pub struct InMemoryBookGateway {
    store: BookStore,
    failing: AtomicBool,
}

impl InMemoryBookGateway {
    pub fn new(store: BookStore) -> Self {
        Self {
            store,
            failing: AtomicBool::new(false),
        }
    }

    pub fn store(&self) -> &BookStore {
        &self.store
    }

    // While set, every call fails as if the backend answered with a 500.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self, failure: &str) -> LibraryResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            warn!("{}: simulated backend failure", failure);
            return Err(LibraryError::fetch(failure, Some(500)));
        }
        Ok(())
    }
}

fn collapse(failure: &str) -> impl Fn(LibraryError) -> LibraryError + '_ {
    move |err| {
        warn!("{}: {}", failure, err);
        LibraryError::fetch(failure, Some(404))
    }
}

#[async_trait]
impl BookGateway for InMemoryBookGateway {
    async fn list(&self) -> LibraryResult<Vec<BookDto>> {
        self.check(LIST_FAILED)?;
        let books = self.store.list().await;
        info!("fetched {} books from memory", books.len());
        Ok(books)
    }

    async fn create(&self, draft: &BookDraft) -> LibraryResult<BookDto> {
        self.check(CREATE_FAILED)?;
        Ok(self.store.create(draft).await)
    }

    async fn replace(&self, id: &str, draft: &BookDraft) -> LibraryResult<BookDto> {
        self.check(REPLACE_FAILED)?;
        self.store.replace(id, draft).await.map_err(collapse(REPLACE_FAILED))
    }

    async fn remove(&self, id: &str) -> LibraryResult<()> {
        self.check(REMOVE_FAILED)?;
        self.store.delete(id).await.map(|_| ()).map_err(collapse(REMOVE_FAILED))
    }
}
