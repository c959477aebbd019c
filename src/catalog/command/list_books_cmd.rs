use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use tracing::info;
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::gateway::books::BookGateway;

pub struct ListBooksCommand {
    gateway: Arc<dyn BookGateway>,
}

impl ListBooksCommand {
    pub fn new(gateway: Arc<dyn BookGateway>) -> Self {
        Self {
            gateway,
        }
    }
}

#[derive(Debug, Default)]
pub struct ListBooksCommandRequest {}

#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, _req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        let books = self.gateway.list().await.map_err(CommandError::from)?;
        info!("loaded {} books", books.len());
        Ok(ListBooksCommandResponse { books })
    }
}
