use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;
use crate::books::dto::{BookDraft, BookDto};
use crate::core::command::{Command, CommandError};
use crate::gateway::books::BookGateway;

pub struct UpdateBookCommand {
    gateway: Arc<dyn BookGateway>,
}

impl UpdateBookCommand {
    pub fn new(gateway: Arc<dyn BookGateway>) -> Self {
        Self {
            gateway,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookCommandRequest {
    pub book_id: String,
    pub draft: BookDraft,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: &str, draft: BookDraft) -> Self {
        Self {
            book_id: book_id.to_string(),
            draft,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct UpdateBookCommandResponse {
    // the backend's copy, trusted as returned
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        let book = self.gateway.replace(req.book_id.as_str(), &req.draft).await.map_err(CommandError::from)?;
        info!("updated book {}", book.id);
        Ok(UpdateBookCommandResponse::new(book))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::books::dto::BookDraft;
    use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
    use crate::core::command::{Command, CommandError};
    use crate::core::library::BookStatus;
    use crate::gateway::memory::InMemoryBookGateway;
    use crate::mockapi::store::BookStore;

    #[tokio::test]
    async fn test_should_run_update_book() {
        let store = BookStore::new();
        let book = store.create(&BookDraft::new("A", "X", "Fiction", 2000, BookStatus::Available)).await;
        let cmd = UpdateBookCommand::new(Arc::new(InMemoryBookGateway::new(store)));

        let draft = BookDraft::new("A", "X", "Fiction", 2000, BookStatus::Unavailable);
        let res = cmd.execute(UpdateBookCommandRequest::new(book.id.as_str(), draft)).await.expect("should update book");
        assert_eq!(book.id, res.book.id);
        assert_eq!(BookStatus::Unavailable, res.book.status);
    }

    #[tokio::test]
    async fn test_should_fail_update_unknown_book() {
        let cmd = UpdateBookCommand::new(Arc::new(InMemoryBookGateway::new(BookStore::new())));
        let draft = BookDraft::new("A", "X", "Fiction", 2000, BookStatus::Unavailable);
        let err = cmd.execute(UpdateBookCommandRequest::new("9", draft)).await.expect_err("should fail");
        assert!(matches!(err, CommandError::Fetch { .. }));
        assert_eq!("Failed to update book", err.message());
    }
}
