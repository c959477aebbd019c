use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;
use crate::books::dto::{BookDraft, BookDto};
use crate::core::command::{Command, CommandError};
use crate::gateway::books::BookGateway;

pub struct AddBookCommand {
    gateway: Arc<dyn BookGateway>,
}

impl AddBookCommand {
    pub fn new(gateway: Arc<dyn BookGateway>) -> Self {
        Self {
            gateway,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub draft: BookDraft,
}

impl AddBookCommandRequest {
    pub fn new(draft: BookDraft) -> Self {
        Self {
            draft,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = self.gateway.create(&req.draft).await.map_err(CommandError::from)?;
        info!("added book {} {:?}", book.id, book.title);
        Ok(AddBookCommandResponse::new(book))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::books::dto::BookDraft;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::core::command::{Command, CommandError};
    use crate::core::library::BookStatus;
    use crate::gateway::memory::InMemoryBookGateway;
    use crate::mockapi::store::BookStore;

    #[tokio::test]
    async fn test_should_run_add_book() {
        let gateway = Arc::new(InMemoryBookGateway::new(BookStore::new()));
        let cmd = AddBookCommand::new(gateway.clone());

        let draft = BookDraft::new("B", "Y", "Sci-Fi", 1999, BookStatus::Unavailable);
        let res = cmd.execute(AddBookCommandRequest::new(draft)).await.expect("should add book");
        assert_eq!("1", res.book.id.as_str());
        assert_eq!(1, gateway.store().list().await.len());
    }

    #[tokio::test]
    async fn test_should_fail_add_book() {
        let gateway = Arc::new(InMemoryBookGateway::new(BookStore::new()));
        gateway.set_failing(true);
        let cmd = AddBookCommand::new(gateway);

        let draft = BookDraft::new("B", "Y", "Sci-Fi", 1999, BookStatus::Unavailable);
        let err = cmd.execute(AddBookCommandRequest::new(draft)).await.expect_err("should fail");
        assert!(matches!(err, CommandError::Fetch { .. }));
        assert_eq!("Failed to add book", err.message());
    }
}
