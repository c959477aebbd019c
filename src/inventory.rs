//! In-memory query engine over the loaded books.
//!
//! Everything here is pure and synchronous: given the current list and a [`BookQuery`]
//! it derives the filter options, the filtered subset and the visible page.

use crate::books::domain::Book;
use crate::core::library::{total_pages, BookStatus, PaginatedResult};

/// Selectable values for the genre and status dropdowns, deduplicated in first-seen order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterOptions {
    pub genres: Vec<String>,
    pub statuses: Vec<BookStatus>,
}

pub fn derive_options<B: Book>(books: &[B]) -> FilterOptions {
    let mut options = FilterOptions::default();
    for book in books {
        if !options.genres.iter().any(|g| g == book.genre()) {
            options.genres.push(book.genre().to_string());
        }
        if !options.statuses.contains(&book.status()) {
            options.statuses.push(book.status());
        }
    }
    options
}

/// Current search text, filter selections and page. `None` means "all".
#[derive(Debug, Clone, PartialEq)]
pub struct BookQuery {
    search: String,
    genre: Option<String>,
    status: Option<BookStatus>,
    page: usize,
}

impl Default for BookQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            genre: None,
            status: None,
            page: 1,
        }
    }
}

impl BookQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        self.search.as_str()
    }

    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref()
    }

    pub fn status(&self) -> Option<BookStatus> {
        self.status
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_search(&mut self, search: &str) {
        self.search = search.to_string();
        self.page = 1;
    }

    pub fn set_genre(&mut self, genre: Option<&str>) {
        self.genre = genre.map(str::to_string);
        self.page = 1;
    }

    pub fn set_status(&mut self, status: Option<BookStatus>) {
        self.status = status;
        self.page = 1;
    }

    /// Moves to `page` if it lies in `[1, total_pages]`; otherwise the request is ignored.
    pub fn go_to_page(&mut self, page: usize, total_pages: usize) -> bool {
        if page < 1 || page > total_pages {
            return false;
        }
        self.page = page;
        true
    }

    /// Pulls the page back into range after the underlying list changed.
    pub fn clamp_page(&mut self, total_pages: usize) {
        self.page = self.page.clamp(1, total_pages.max(1));
    }

    pub fn matches<B: Book>(&self, book: &B) -> bool {
        let matches_search = self.search.is_empty() || {
            let needle = self.search.to_lowercase();
            book.title().to_lowercase().contains(&needle)
                || book.author().to_lowercase().contains(&needle)
        };
        let matches_genre = self.genre.as_deref().map_or(true, |g| book.genre() == g);
        let matches_status = self.status.map_or(true, |s| book.status() == s);
        matches_search && matches_genre && matches_status
    }

    pub fn filter<'a, B: Book>(&self, books: &'a [B]) -> Vec<&'a B> {
        books.iter().filter(|b| self.matches(*b)).collect()
    }

    /// Filters `books` and slices out the current page.
    pub fn run<'a, B: Book>(&self, books: &'a [B], page_size: usize) -> PaginatedResult<&'a B> {
        paginate(self.filter(books), self.page, page_size)
    }
}

/// Slice `[(page-1)*size, page*size)` of `items`, clamped to the list bounds.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> PaginatedResult<T> {
    let total = items.len();
    let page = page.max(1);
    let start = (page - 1).saturating_mul(page_size).min(total);
    let end = page.saturating_mul(page_size).min(total);
    let records: Vec<T> = items.into_iter().skip(start).take(end - start).collect();
    PaginatedResult::new(page, page_size, total, records)
}

pub fn page_count<B: Book>(query: &BookQuery, books: &[B], page_size: usize) -> usize {
    total_pages(books.iter().filter(|b| query.matches(*b)).count(), page_size)
}
