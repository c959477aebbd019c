use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    // Any failed exchange with the remote backend: transport failure, non-2xx status or
    // an undecodable body. The message names the operation that failed.
    Fetch {
        message: String,
        status: Option<u16>,
    },
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn fetch(message: &str, status: Option<u16>) -> LibraryError {
        LibraryError::Fetch { message: message.to_string(), status }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn message(&self) -> &str {
        match self {
            LibraryError::Fetch { message, .. } => message,
            LibraryError::NotFound { message } => message,
            LibraryError::Validation { message, .. } => message,
            LibraryError::Serialization { message } => message,
            LibraryError::Runtime { message, .. } => message,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            LibraryError::Fetch { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("io {:?}", err).as_str(), None)
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl From<reqwest::Error> for LibraryError {
    fn from(err: reqwest::Error) -> Self {
        LibraryError::fetch(
            format!("http client {}", err).as_str(), err.status().map(|s| s.as_u16()))
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Fetch { message, .. } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the inventory client.
pub type LibraryResult<T> = Result<T, LibraryError>;

// It defines abstraction for one page of an in-memory result set
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedResult<T> {
    // 1-based page number
    pub page: usize,
    // page size
    pub page_size: usize,
    // number of records across all pages
    pub total_records: usize,
    // ceil(total_records / page_size), zero when there are no records
    pub total_pages: usize,
    // records of this page
    pub records: Vec<T>,
}

impl<T> PaginatedResult<T> {
    pub(crate) fn new(page: usize, page_size: usize,
                      total_records: usize, records: Vec<T>) -> Self {
        PaginatedResult {
            page,
            page_size,
            total_records,
            total_pages: total_pages(total_records, page_size),
            records,
        }
    }

    /// 1-based index of the first record shown, 0 for an empty page.
    pub fn first_index(&self) -> usize {
        if self.records.is_empty() {
            0
        } else {
            (self.page - 1) * self.page_size + 1
        }
    }

    /// 1-based index of the last record shown, 0 for an empty page.
    pub fn last_index(&self) -> usize {
        if self.records.is_empty() {
            0
        } else {
            (self.page - 1) * self.page_size + self.records.len()
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

pub fn total_pages(total_records: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_records.div_ceil(page_size)
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum BookStatus {
    #[default]
    Available,
    Unavailable,
}

impl BookStatus {
    pub fn all() -> [BookStatus; 2] {
        [BookStatus::Available, BookStatus::Unavailable]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "available",
            BookStatus::Unavailable => "unavailable",
        }
    }
}

impl TryFrom<String> for BookStatus {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        BookStatus::try_from(s.as_str())
    }
}

impl TryFrom<&str> for BookStatus {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "available" => Ok(BookStatus::Available),
            "unavailable" => Ok(BookStatus::Unavailable),
            _ => Err(format!("unknown book status {:?}", s)),
        }
    }
}

impl From<BookStatus> for String {
    fn from(status: BookStatus) -> Self {
        status.as_str().to_string()
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
