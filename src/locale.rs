//! Typed UI message tables.
//!
//! Every string the presentation layer shows is addressed by a [`MessageId`], so a
//! missing translation is a compile error instead of a silent lookup miss.

use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
pub enum Locale {
    #[default]
    En,
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub enum MessageId {
    AppTitle,
    AppHeading,
    AppSubtitle,
    SearchPlaceholder,
    GenrePlaceholder,
    GenreAll,
    StatusPlaceholder,
    StatusAll,
    HeaderId,
    HeaderTitle,
    HeaderAuthor,
    HeaderGenre,
    HeaderPublishedYear,
    HeaderStatus,
    HeaderActions,
    PaginationShowing,
    PaginationTo,
    PaginationOf,
    PaginationResults,
    PaginationPrevious,
    PaginationNext,
    Loading,
    LoadErrorTitle,
    NoResults,
    AddBook,
    ToastSuccessTitle,
    ToastCreated,
    ToastUpdated,
    ToastDeleted,
    ToastErrorTitle,
    DeleteConfirmHeader,
    DeleteConfirmMessage,
    DialogAddTitle,
    DialogEditTitle,
    FieldTitle,
    FieldAuthor,
    FieldGenre,
    FieldPublishedYear,
    FieldStatus,
    SelectStatus,
    StatusAvailable,
    StatusUnavailable,
    ButtonSave,
    ButtonCancel,
    TitleRequired,
    AuthorRequired,
    GenreRequired,
    YearRequired,
    YearInvalid,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
        }
    }

    pub fn message(&self, id: MessageId) -> &'static str {
        match self {
            Locale::En => en(id),
        }
    }

    /// Delete confirmation text naming the target book.
    pub fn confirm_delete(&self, title: &str) -> String {
        self.message(MessageId::DeleteConfirmMessage).replace("{title}", title)
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "en-us" | "en_us" => Ok(Locale::En),
            other => Err(format!("unsupported locale {:?}", other)),
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

fn en(id: MessageId) -> &'static str {
    match id {
        MessageId::AppTitle => "Library Management System",
        MessageId::AppHeading => "Book Inventory",
        MessageId::AppSubtitle => "Manage and track your library's book inventory",
        MessageId::SearchPlaceholder => "Search by title or author...",
        MessageId::GenrePlaceholder => "Select Genre",
        MessageId::GenreAll => "All Genres",
        MessageId::StatusPlaceholder => "Select Status",
        MessageId::StatusAll => "All Statuses",
        MessageId::HeaderId => "ID",
        MessageId::HeaderTitle => "Title",
        MessageId::HeaderAuthor => "Author",
        MessageId::HeaderGenre => "Genre",
        MessageId::HeaderPublishedYear => "Published Year",
        MessageId::HeaderStatus => "Status",
        MessageId::HeaderActions => "Actions",
        MessageId::PaginationShowing => "Showing",
        MessageId::PaginationTo => "to",
        MessageId::PaginationOf => "of",
        MessageId::PaginationResults => "results",
        MessageId::PaginationPrevious => "Previous",
        MessageId::PaginationNext => "Next",
        MessageId::Loading => "Loading books...",
        MessageId::LoadErrorTitle => "Error loading books",
        MessageId::NoResults => "No books found",
        MessageId::AddBook => "Add Book",
        MessageId::ToastSuccessTitle => "Success",
        MessageId::ToastCreated => "Book has been added successfully",
        MessageId::ToastUpdated => "Book has been updated successfully",
        MessageId::ToastDeleted => "Book has been deleted successfully",
        MessageId::ToastErrorTitle => "Error",
        MessageId::DeleteConfirmHeader => "Delete Confirmation",
        MessageId::DeleteConfirmMessage => "Are you sure you want to delete \"{title}\"?",
        MessageId::DialogAddTitle => "Add New Book",
        MessageId::DialogEditTitle => "Edit Book",
        MessageId::FieldTitle => "Title",
        MessageId::FieldAuthor => "Author",
        MessageId::FieldGenre => "Genre",
        MessageId::FieldPublishedYear => "Published Year",
        MessageId::FieldStatus => "Status",
        MessageId::SelectStatus => "Select Status",
        MessageId::StatusAvailable => "Available",
        MessageId::StatusUnavailable => "Unavailable",
        MessageId::ButtonSave => "Save",
        MessageId::ButtonCancel => "Cancel",
        MessageId::TitleRequired => "Title is required",
        MessageId::AuthorRequired => "Author is required",
        MessageId::GenreRequired => "Genre is required",
        MessageId::YearRequired => "Published year is required",
        MessageId::YearInvalid => "Published year must be between 1800 and current year",
    }
}
