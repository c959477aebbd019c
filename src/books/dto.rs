use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

// BookDto is the record exchanged with the remote backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    #[serde(with = "crate::utils::json::id")]
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    #[serde(with = "crate::utils::json::year")]
    pub published_year: i32,
    pub status: BookStatus,
}

impl BookDto {
    pub fn new(id: &str, draft: &BookDraft) -> BookDto {
        BookDto {
            id: id.to_string(),
            title: draft.title.to_string(),
            author: draft.author.to_string(),
            genre: draft.genre.to_string(),
            published_year: draft.published_year,
            status: draft.status,
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.id.to_string()
    }
}

impl Book for BookDto {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn genre(&self) -> &str {
        self.genre.as_str()
    }

    fn status(&self) -> BookStatus {
        self.status
    }
}

// BookDraft is a validated book without an id, as submitted on create and replace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub genre: String,
    #[serde(with = "crate::utils::json::year")]
    pub published_year: i32,
    #[serde(default)]
    pub status: BookStatus,
}

impl BookDraft {
    pub fn new(title: &str, author: &str, genre: &str, published_year: i32, status: BookStatus) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            published_year,
            status,
        }
    }
}

impl From<&BookDto> for BookDraft {
    fn from(other: &BookDto) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            genre: other.genre.to_string(),
            published_year: other.published_year,
            status: other.status,
        }
    }
}
