use std::sync::Arc;
use tracing::{debug, warn};
use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
use crate::core::command::{Command, CommandError};
use crate::core::domain::Configuration;
use crate::core::events::Notification;
use crate::core::library::{BookStatus, PaginatedResult};
use crate::form::dialog::{BookDialog, DialogMode};
use crate::form::Field;
use crate::gateway::books::BookGateway;
use crate::inventory::{derive_options, page_count, BookQuery, FilterOptions};
use crate::locale::{Locale, MessageId};
use crate::utils::date::current_year;

// LoadState tracks the initial fetch of the book list
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

// PendingDelete is the book awaiting delete confirmation
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDelete {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    // no dialog was open
    Idle,
    Invalid,
    Saved(BookDto),
    Failed(String),
}

/// Owns the whole table view state: the loaded books, the query, the create/edit
/// dialog, the delete confirmation and the toast queue.
///
/// Mutations go through the gateway first and touch the local list only on success.
pub struct BookTableController {
    config: Configuration,
    list_cmd: ListBooksCommand,
    add_cmd: AddBookCommand,
    update_cmd: UpdateBookCommand,
    remove_cmd: RemoveBookCommand,
    books: Vec<BookDto>,
    load_state: LoadState,
    query: BookQuery,
    dialog: BookDialog,
    pending_delete: Option<PendingDelete>,
    notifications: Vec<Notification>,
}

impl BookTableController {
    pub fn new(config: &Configuration, gateway: Arc<dyn BookGateway>) -> Self {
        Self {
            config: config.clone(),
            list_cmd: ListBooksCommand::new(gateway.clone()),
            add_cmd: AddBookCommand::new(gateway.clone()),
            update_cmd: UpdateBookCommand::new(gateway.clone()),
            remove_cmd: RemoveBookCommand::new(gateway),
            books: vec![],
            load_state: LoadState::Loading,
            query: BookQuery::new(),
            dialog: BookDialog::default(),
            pending_delete: None,
            notifications: vec![],
        }
    }

    pub fn locale(&self) -> Locale {
        self.config.locale
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn books(&self) -> &[BookDto] {
        self.books.as_slice()
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn query(&self) -> &BookQuery {
        &self.query
    }

    pub fn dialog(&self) -> &BookDialog {
        &self.dialog
    }

    pub fn pending_delete(&self) -> Option<&PendingDelete> {
        self.pending_delete.as_ref()
    }

    pub fn notifications(&self) -> &[Notification] {
        self.notifications.as_slice()
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Fetches the full list once. A failure replaces the table with the error panel and
    /// may be retried; after a successful load the local list is never re-fetched.
    pub async fn load(&mut self) -> bool {
        if self.load_state == LoadState::Ready {
            debug!("books already loaded, keeping the local list");
            return true;
        }
        self.load_state = LoadState::Loading;
        match self.list_cmd.execute(ListBooksCommandRequest::default()).await {
            Ok(res) => {
                self.books = res.books;
                self.load_state = LoadState::Ready;
                self.clamp_page();
                true
            }
            Err(err) => {
                warn!("initial load failed: {}", err);
                self.load_state = LoadState::Failed(err.message().to_string());
                self.notify_error(&err);
                false
            }
        }
    }

    pub fn options(&self) -> FilterOptions {
        derive_options(self.books.as_slice())
    }

    pub fn visible(&self) -> PaginatedResult<&BookDto> {
        self.query.run(self.books.as_slice(), self.config.page_size)
    }

    pub fn total_pages(&self) -> usize {
        page_count(&self.query, self.books.as_slice(), self.config.page_size)
    }

    pub fn find(&self, id: &str) -> Option<&BookDto> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn set_search(&mut self, search: &str) {
        self.query.set_search(search);
    }

    pub fn set_genre(&mut self, genre: Option<&str>) {
        self.query.set_genre(genre);
    }

    pub fn set_status(&mut self, status: Option<BookStatus>) {
        self.query.set_status(status);
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        let total = self.total_pages();
        let moved = self.query.go_to_page(page, total);
        if !moved {
            debug!("ignored page {} of {}", page, total);
        }
        moved
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.query.page() + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        match self.query.page() {
            0 | 1 => false,
            page => self.go_to_page(page - 1),
        }
    }

    pub fn open_add(&mut self) {
        self.dialog.open_create();
    }

    pub fn open_edit(&mut self, id: &str) -> bool {
        let Some(book) = self.books.iter().find(|b| b.id == id) else {
            return false;
        };
        self.dialog.open_edit(book);
        true
    }

    pub fn cancel_dialog(&mut self) {
        self.dialog.close();
    }

    pub fn set_field(&mut self, field: Field, value: &str) -> Result<(), String> {
        self.dialog.set_field(field, value)
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        self.submit_at(current_year()).await
    }

    /// Validates and submits the open dialog. On a gateway failure the dialog stays
    /// open with its draft so the user can retry.
    pub async fn submit_at(&mut self, year: i32) -> SubmitOutcome {
        if !self.dialog.is_open() {
            return SubmitOutcome::Idle;
        }
        let Some((mode, draft)) = self.dialog.validate(year) else {
            return SubmitOutcome::Invalid;
        };
        let result = match mode {
            DialogMode::Create => self.add_cmd.execute(AddBookCommandRequest::new(draft))
                .await.map(|res| {
                self.books.push(res.book.clone());
                (res.book, MessageId::ToastCreated)
            }),
            DialogMode::Edit(id) => self.update_cmd.execute(UpdateBookCommandRequest::new(id.as_str(), draft))
                .await.map(|res| {
                if let Some(existing) = self.books.iter_mut().find(|b| b.id == id) {
                    *existing = res.book.clone();
                }
                (res.book, MessageId::ToastUpdated)
            }),
        };
        match result {
            Ok((book, message)) => {
                self.dialog.close();
                self.clamp_page();
                self.notify_success(message);
                SubmitOutcome::Saved(book)
            }
            Err(err) => {
                self.notify_error(&err);
                SubmitOutcome::Failed(err.message().to_string())
            }
        }
    }

    /// Starts the delete confirmation and returns the confirmation text.
    pub fn request_delete(&mut self, id: &str) -> Option<String> {
        let book = self.books.iter().find(|b| b.id == id)?;
        let message = self.config.locale.confirm_delete(book.title.as_str());
        self.pending_delete = Some(PendingDelete { id: book.id.to_string(), title: book.title.to_string() });
        Some(message)
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Removes the pending book. The local list is left as is when the backend refuses.
    pub async fn confirm_delete(&mut self) -> bool {
        let Some(pending) = self.pending_delete.take() else {
            return false;
        };
        match self.remove_cmd.execute(RemoveBookCommandRequest::new(pending.id.as_str())).await {
            Ok(res) => {
                self.books.retain(|b| b.id != res.book_id);
                self.clamp_page();
                self.notify_success(MessageId::ToastDeleted);
                true
            }
            Err(err) => {
                self.notify_error(&err);
                false
            }
        }
    }

    fn clamp_page(&mut self) {
        let total = self.total_pages();
        self.query.clamp_page(total);
    }

    fn notify_success(&mut self, detail: MessageId) {
        self.notifications.push(Notification::success(self.config.locale, detail, self.config.toast_life_ms));
    }

    fn notify_error(&mut self, err: &CommandError) {
        self.notifications.push(Notification::error(self.config.locale, err.message(), self.config.toast_life_ms));
    }
}
