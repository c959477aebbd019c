//! Plain-text rendering of the table view.

use std::fmt::Write;
use crate::books::dto::BookDto;
use crate::catalog::controller::{BookTableController, LoadState};
use crate::core::events::{Notification, Severity};
use crate::core::library::{BookStatus, PaginatedResult};
use crate::form::dialog::BookDialog;
use crate::form::Field;
use crate::locale::{Locale, MessageId};

const COLUMNS: [(MessageId, usize); 7] = [
    (MessageId::HeaderId, 4),
    (MessageId::HeaderTitle, 32),
    (MessageId::HeaderAuthor, 22),
    (MessageId::HeaderGenre, 12),
    (MessageId::HeaderPublishedYear, 14),
    (MessageId::HeaderStatus, 11),
    (MessageId::HeaderActions, 20),
];

pub fn render(ctrl: &BookTableController) -> String {
    let locale = ctrl.locale();
    let mut out = String::new();
    let _ = writeln!(out, "{}", locale.message(MessageId::AppTitle));
    let _ = writeln!(out, "{}", locale.message(MessageId::AppHeading));
    let _ = writeln!(out, "{}", locale.message(MessageId::AppSubtitle));
    out.push('\n');
    match ctrl.load_state() {
        LoadState::Loading => {
            let _ = writeln!(out, "{}", locale.message(MessageId::Loading));
        }
        LoadState::Failed(message) => {
            out.push_str(render_error_panel(locale, message).as_str());
        }
        LoadState::Ready => {
            out.push_str(render_filters(ctrl).as_str());
            let _ = writeln!(out, "[{}]", locale.message(MessageId::AddBook));
            out.push('\n');
            let page = ctrl.visible();
            out.push_str(render_table(locale, &page).as_str());
            out.push_str(render_pagination(locale, &page).as_str());
        }
    }
    if ctrl.dialog().is_open() {
        out.push('\n');
        out.push_str(render_dialog(locale, ctrl.dialog()).as_str());
    }
    if let Some(pending) = ctrl.pending_delete() {
        out.push('\n');
        let _ = writeln!(out, "{}", locale.message(MessageId::DeleteConfirmHeader));
        let _ = writeln!(out, "{} [yes/no]", locale.confirm_delete(pending.title.as_str()));
    }
    out
}

pub fn render_error_panel(locale: Locale, message: &str) -> String {
    format!("{}\n{}\n", locale.message(MessageId::LoadErrorTitle), message)
}

fn render_filters(ctrl: &BookTableController) -> String {
    let locale = ctrl.locale();
    let query = ctrl.query();
    let search = if query.search().is_empty() {
        locale.message(MessageId::SearchPlaceholder).to_string()
    } else {
        format!("\"{}\"", query.search())
    };
    let genre = query.genre().unwrap_or(locale.message(MessageId::GenreAll));
    let status = query.status().map_or(locale.message(MessageId::StatusAll), |s| status_label(locale, s));
    let options = ctrl.options();
    format!("{}: {}  |  {}: {} ({})  |  {}: {}\n",
            locale.message(MessageId::HeaderTitle), search,
            locale.message(MessageId::GenrePlaceholder), genre, options.genres.join(", "),
            locale.message(MessageId::StatusPlaceholder), status)
}

pub fn render_table(locale: Locale, page: &PaginatedResult<&BookDto>) -> String {
    let mut out = String::new();
    let header: Vec<String> = COLUMNS.iter()
        .map(|(id, width)| cell(locale.message(*id), *width))
        .collect();
    let _ = writeln!(out, "{}", header.join(" ").trim_end());
    let width = COLUMNS.iter().map(|(_, w)| w + 1).sum::<usize>() - 1;
    let _ = writeln!(out, "{}", "-".repeat(width));
    if page.records.is_empty() {
        let _ = writeln!(out, "{}", locale.message(MessageId::NoResults));
        return out;
    }
    for book in &page.records {
        let row = [
            cell(book.id.as_str(), COLUMNS[0].1),
            cell(book.title.as_str(), COLUMNS[1].1),
            cell(book.author.as_str(), COLUMNS[2].1),
            cell(book.genre.as_str(), COLUMNS[3].1),
            cell(book.published_year.to_string().as_str(), COLUMNS[4].1),
            cell(status_label(locale, book.status), COLUMNS[5].1),
            cell(format!("edit {0} | delete {0}", book.id).as_str(), COLUMNS[6].1),
        ];
        let _ = writeln!(out, "{}", row.join(" ").trim_end());
    }
    out
}

/// "Showing X to Y of N results" plus numbered page buttons; the current page is
/// bracketed and unavailable previous/next buttons are shown in parentheses.
pub fn render_pagination(locale: Locale, page: &PaginatedResult<&BookDto>) -> String {
    if page.total_records == 0 {
        return String::new();
    }
    let summary = format!("{} {} {} {} {} {} {}",
                          locale.message(MessageId::PaginationShowing), page.first_index(),
                          locale.message(MessageId::PaginationTo), page.last_index(),
                          locale.message(MessageId::PaginationOf), page.total_records,
                          locale.message(MessageId::PaginationResults));
    let mut buttons = vec![button(locale.message(MessageId::PaginationPrevious), page.has_previous())];
    for n in 1..=page.total_pages {
        if n == page.page {
            buttons.push(format!("[{}]", n));
        } else {
            buttons.push(n.to_string());
        }
    }
    buttons.push(button(locale.message(MessageId::PaginationNext), page.has_next()));
    format!("{}\n{}\n", summary, buttons.join(" "))
}

pub fn render_dialog(locale: Locale, dialog: &BookDialog) -> String {
    let (Some(mode), Some(form), Some(errors)) = (dialog.mode(), dialog.form(), dialog.errors()) else {
        return String::new();
    };
    let mut out = String::new();
    let _ = writeln!(out, "{}", locale.message(mode.header()));
    for field in Field::all() {
        let value = match field {
            Field::Status => status_label(locale, form.status).to_string(),
            _ => form.get(field),
        };
        let _ = writeln!(out, "  {} ({}): {}", locale.message(field.label()), field.name(), value);
        if field == Field::Status {
            let choices: Vec<&str> = BookStatus::all().iter().map(|s| s.as_str()).collect();
            let _ = writeln!(out, "    {}: {}", locale.message(MessageId::SelectStatus), choices.join(" | "));
        }
        if let Some(message) = errors.message(field, locale) {
            let _ = writeln!(out, "    ! {}", message);
        }
    }
    let _ = writeln!(out, "  [{}] [{}]", locale.message(MessageId::ButtonSave), locale.message(MessageId::ButtonCancel));
    out
}

pub fn render_notification(toast: &Notification) -> String {
    let marker = match toast.severity {
        Severity::Success => "+",
        Severity::Error => "!",
    };
    format!("{} {}: {} [{}s]", marker, toast.summary, toast.detail, toast.life_ms.div_ceil(1000))
}

pub fn status_label(locale: Locale, status: BookStatus) -> &'static str {
    match status {
        BookStatus::Available => locale.message(MessageId::StatusAvailable),
        BookStatus::Unavailable => locale.message(MessageId::StatusUnavailable),
    }
}

fn button(label: &str, enabled: bool) -> String {
    if enabled {
        label.to_string()
    } else {
        format!("({})", label)
    }
}

fn cell(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count > width {
        let cut: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{}~", cut)
    } else {
        format!("{:<width$}", text, width = width)
    }
}
