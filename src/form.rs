pub mod dialog;
pub mod validation;

use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use crate::books::dto::{BookDraft, BookDto};
use crate::core::library::BookStatus;
use crate::locale::MessageId;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub enum Field {
    Title,
    Author,
    Genre,
    PublishedYear,
    Status,
}

impl Field {
    pub fn all() -> [Field; 5] {
        [Field::Title, Field::Author, Field::Genre, Field::PublishedYear, Field::Status]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::Genre => "genre",
            Field::PublishedYear => "publishedYear",
            Field::Status => "status",
        }
    }

    pub fn label(&self) -> MessageId {
        match self {
            Field::Title => MessageId::FieldTitle,
            Field::Author => MessageId::FieldAuthor,
            Field::Genre => MessageId::FieldGenre,
            Field::PublishedYear => MessageId::FieldPublishedYear,
            Field::Status => MessageId::FieldStatus,
        }
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(Field::Title),
            "author" => Ok(Field::Author),
            "genre" => Ok(Field::Genre),
            "publishedyear" | "published_year" | "year" => Ok(Field::PublishedYear),
            "status" => Ok(Field::Status),
            other => Err(format!("unknown field {:?}", other)),
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// BookForm is the editable draft behind the create/edit dialog. Text is kept as typed;
// the year is parsed only by validation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub published_year: String,
    pub status: BookStatus,
}

impl BookForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field from user input. Status accepts only `available`/`unavailable`.
    pub fn set(&mut self, field: Field, value: &str) -> Result<(), String> {
        match field {
            Field::Title => self.title = value.to_string(),
            Field::Author => self.author = value.to_string(),
            Field::Genre => self.genre = value.to_string(),
            Field::PublishedYear => self.published_year = value.to_string(),
            Field::Status => self.status = BookStatus::try_from(value)?,
        }
        Ok(())
    }

    pub fn get(&self, field: Field) -> String {
        match field {
            Field::Title => self.title.to_string(),
            Field::Author => self.author.to_string(),
            Field::Genre => self.genre.to_string(),
            Field::PublishedYear => self.published_year.to_string(),
            Field::Status => self.status.to_string(),
        }
    }

    /// The submitted payload; `None` unless the year parses.
    pub fn to_draft(&self) -> Option<BookDraft> {
        let year = self.published_year.trim().parse::<i32>().ok()?;
        Some(BookDraft::new(self.title.trim(), self.author.trim(), self.genre.trim(), year, self.status))
    }
}

impl From<&BookDto> for BookForm {
    fn from(other: &BookDto) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            genre: other.genre.to_string(),
            published_year: other.published_year.to_string(),
            status: other.status,
        }
    }
}
