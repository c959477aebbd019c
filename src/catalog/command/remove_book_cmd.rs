use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;
use crate::core::command::{Command, CommandError};
use crate::gateway::books::BookGateway;

pub struct RemoveBookCommand {
    gateway: Arc<dyn BookGateway>,
}

impl RemoveBookCommand {
    pub fn new(gateway: Arc<dyn BookGateway>) -> Self {
        Self {
            gateway,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveBookCommandRequest {
    pub book_id: String,
}

impl RemoveBookCommandRequest {
    pub fn new(book_id: &str) -> Self {
        Self {
            book_id: book_id.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct RemoveBookCommandResponse {
    pub book_id: String,
}

impl RemoveBookCommandResponse {
    pub fn new(book_id: String) -> Self {
        Self { book_id }
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.gateway.remove(req.book_id.as_str()).await.map_err(CommandError::from)?;
        info!("removed book {}", req.book_id);
        Ok(RemoveBookCommandResponse::new(req.book_id))
    }
}
