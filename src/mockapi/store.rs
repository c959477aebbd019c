use std::sync::Arc;
use tokio::sync::RwLock;
use crate::books::dto::{BookDraft, BookDto};
use crate::core::library::{BookStatus, LibraryError, LibraryResult};

#[derive(Debug, Default)]
struct StoreState {
    books: Vec<BookDto>,
    next_id: u64,
}

// BookStore is the in-memory collection behind the local mock backend. Ids are assigned
// sequentially as strings, the way the hosted mock API does it.
#[derive(Debug, Clone, Default)]
pub struct BookStore {
    state: Arc<RwLock<StoreState>>,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: Vec<BookDto>) -> Self {
        let max_id = books.iter()
            .filter_map(|b| b.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            state: Arc::new(RwLock::new(StoreState { books, next_id: max_id })),
        }
    }

    pub async fn list(&self) -> Vec<BookDto> {
        self.state.read().await.books.clone()
    }

    pub async fn get(&self, id: &str) -> LibraryResult<BookDto> {
        self.state.read().await.books.iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))
    }

    pub async fn create(&self, draft: &BookDraft) -> BookDto {
        let mut state = self.state.write().await;
        state.next_id += 1;
        let book = BookDto::new(state.next_id.to_string().as_str(), draft);
        state.books.push(book.clone());
        book
    }

    pub async fn replace(&self, id: &str, draft: &BookDraft) -> LibraryResult<BookDto> {
        let mut state = self.state.write().await;
        let existing = state.books.iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))?;
        *existing = BookDto::new(id, draft);
        Ok(existing.clone())
    }

    pub async fn delete(&self, id: &str) -> LibraryResult<BookDto> {
        let mut state = self.state.write().await;
        let pos = state.books.iter()
            .position(|b| b.id == id)
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))?;
        Ok(state.books.remove(pos))
    }
}

// A small catalog for offline runs and the seeded mock backend; large enough to span
// several pages.
pub fn sample_books() -> Vec<BookDto> {
    let rows: [(&str, &str, &str, i32, BookStatus); 24] = [
        ("Pride and Prejudice", "Jane Austen", "Romance", 1813, BookStatus::Available),
        ("Moby-Dick", "Herman Melville", "Adventure", 1851, BookStatus::Available),
        ("Great Expectations", "Charles Dickens", "Fiction", 1861, BookStatus::Unavailable),
        ("Crime and Punishment", "Fyodor Dostoevsky", "Fiction", 1866, BookStatus::Available),
        ("Dracula", "Bram Stoker", "Horror", 1897, BookStatus::Available),
        ("The Great Gatsby", "F. Scott Fitzgerald", "Fiction", 1925, BookStatus::Unavailable),
        ("Brave New World", "Aldous Huxley", "Sci-Fi", 1932, BookStatus::Available),
        ("The Hobbit", "J. R. R. Tolkien", "Fantasy", 1937, BookStatus::Available),
        ("Nineteen Eighty-Four", "George Orwell", "Sci-Fi", 1949, BookStatus::Unavailable),
        ("I, Robot", "Isaac Asimov", "Sci-Fi", 1950, BookStatus::Available),
        ("The Catcher in the Rye", "J. D. Salinger", "Fiction", 1951, BookStatus::Available),
        ("Fahrenheit 451", "Ray Bradbury", "Sci-Fi", 1953, BookStatus::Available),
        ("The Lord of the Rings", "J. R. R. Tolkien", "Fantasy", 1954, BookStatus::Unavailable),
        ("To Kill a Mockingbird", "Harper Lee", "Fiction", 1960, BookStatus::Available),
        ("Dune", "Frank Herbert", "Sci-Fi", 1965, BookStatus::Available),
        ("One Hundred Years of Solitude", "Gabriel Garcia Marquez", "Fiction", 1967, BookStatus::Available),
        ("A Wizard of Earthsea", "Ursula K. Le Guin", "Fantasy", 1968, BookStatus::Unavailable),
        ("The Shining", "Stephen King", "Horror", 1977, BookStatus::Available),
        ("Neuromancer", "William Gibson", "Sci-Fi", 1984, BookStatus::Available),
        ("Beloved", "Toni Morrison", "Fiction", 1987, BookStatus::Available),
        ("The Name of the Wind", "Patrick Rothfuss", "Fantasy", 2007, BookStatus::Unavailable),
        ("The Road", "Cormac McCarthy", "Fiction", 2006, BookStatus::Available),
        ("The Martian", "Andy Weir", "Sci-Fi", 2011, BookStatus::Available),
        ("Project Hail Mary", "Andy Weir", "Sci-Fi", 2021, BookStatus::Available),
    ];
    rows.iter()
        .enumerate()
        .map(|(i, (title, author, genre, year, status))| {
            BookDto::new((i + 1).to_string().as_str(),
                         &BookDraft::new(title, author, genre, *year, *status))
        })
        .collect()
}
