use std::str::FromStr;
use tracing::debug;
use crate::catalog::controller::{BookTableController, SubmitOutcome};
use crate::catalog::view::{render, render_dialog, render_notification};
use crate::core::library::BookStatus;
use crate::form::Field;
use crate::locale::MessageId;

pub const HELP: &str = "\
commands:
  search [text]        filter by title or author, empty clears
  genre <name|all>     filter by genre
  status <value|all>   filter by status (available, unavailable)
  page <n> | next | prev
  add | edit <id>      open the book dialog
  set <field> <value>  title, author, genre, year, status
  save | cancel        submit or discard the dialog
  delete <id>          ask to delete a book, answer with yes or no
  show | help | quit";

// ShellCommand is one parsed line of the interactive shell
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Search(String),
    Genre(Option<String>),
    Status(Option<BookStatus>),
    Page(usize),
    Next,
    Prev,
    Add,
    Edit(String),
    Set(Field, String),
    Save,
    Cancel,
    Delete(String),
    Yes,
    No,
    Show,
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        match word.to_lowercase().as_str() {
            "search" | "s" => Ok(ShellCommand::Search(rest.to_string())),
            "genre" | "g" => Ok(ShellCommand::Genre(all_or(rest, "genre")?.map(str::to_string))),
            "status" => {
                let status = all_or(rest, "status")?.map(BookStatus::try_from).transpose()?;
                Ok(ShellCommand::Status(status))
            }
            "page" | "p" => rest.parse::<usize>()
                .map(ShellCommand::Page)
                .map_err(|_| format!("invalid page {:?}", rest)),
            "next" | "n" => Ok(ShellCommand::Next),
            "prev" | "previous" => Ok(ShellCommand::Prev),
            "add" | "a" => Ok(ShellCommand::Add),
            "edit" | "e" => required(rest, "edit <id>").map(ShellCommand::Edit),
            "set" => {
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let field = required(field, "set <field> <value>")?.parse::<Field>()?;
                Ok(ShellCommand::Set(field, value.trim().to_string()))
            }
            "save" => Ok(ShellCommand::Save),
            "cancel" => Ok(ShellCommand::Cancel),
            "delete" | "d" | "rm" => required(rest, "delete <id>").map(ShellCommand::Delete),
            "yes" | "y" => Ok(ShellCommand::Yes),
            "no" => Ok(ShellCommand::No),
            "show" | "ls" | "" => Ok(ShellCommand::Show),
            "help" | "h" | "?" => Ok(ShellCommand::Help),
            "quit" | "q" | "exit" => Ok(ShellCommand::Quit),
            other => Err(format!("unknown command {:?}, try help", other)),
        }
    }
}

fn all_or<'a>(value: &'a str, what: &str) -> Result<Option<&'a str>, String> {
    match value {
        "" => Err(format!("{} needs a value or all", what)),
        v if v.eq_ignore_ascii_case("all") => Ok(None),
        v => Ok(Some(v)),
    }
}

fn required(value: &str, usage: &str) -> Result<String, String> {
    if value.is_empty() {
        Err(format!("usage: {}", usage))
    } else {
        Ok(value.to_string())
    }
}

// ShellReply is the text to print and whether the loop should stop
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShellReply {
    pub output: String,
    pub quit: bool,
}

impl ShellReply {
    fn text(output: String) -> Self {
        Self { output, quit: false }
    }
}

/// Runs one command against the controller and renders the result with any toasts
/// the command raised.
pub async fn apply(ctrl: &mut BookTableController, cmd: ShellCommand) -> ShellReply {
    debug!("shell command {:?}", cmd);
    let locale = ctrl.locale();
    let mut reply = match cmd {
        ShellCommand::Search(text) => {
            ctrl.set_search(text.as_str());
            ShellReply::text(render(ctrl))
        }
        ShellCommand::Genre(genre) => {
            ctrl.set_genre(genre.as_deref());
            ShellReply::text(render(ctrl))
        }
        ShellCommand::Status(status) => {
            ctrl.set_status(status);
            ShellReply::text(render(ctrl))
        }
        ShellCommand::Page(page) => page_reply(ctrl, |c| c.go_to_page(page), format!("no page {}", page)),
        ShellCommand::Next => page_reply(ctrl, |c| c.next_page(), "already on the last page".to_string()),
        ShellCommand::Prev => page_reply(ctrl, |c| c.previous_page(), "already on the first page".to_string()),
        ShellCommand::Add => {
            ctrl.open_add();
            ShellReply::text(render_dialog(locale, ctrl.dialog()))
        }
        ShellCommand::Edit(id) => {
            if ctrl.open_edit(id.as_str()) {
                ShellReply::text(render_dialog(locale, ctrl.dialog()))
            } else {
                ShellReply::text(format!("no book with id {}", id))
            }
        }
        ShellCommand::Set(field, value) => match ctrl.set_field(field, value.as_str()) {
            Ok(()) => ShellReply::text(render_dialog(locale, ctrl.dialog())),
            Err(err) => ShellReply::text(err),
        },
        ShellCommand::Save => match ctrl.submit().await {
            SubmitOutcome::Idle => ShellReply::text("no book dialog is open".to_string()),
            SubmitOutcome::Invalid | SubmitOutcome::Failed(_) => ShellReply::text(render_dialog(locale, ctrl.dialog())),
            SubmitOutcome::Saved(_) => ShellReply::text(render(ctrl)),
        },
        ShellCommand::Cancel => {
            ctrl.cancel_dialog();
            ctrl.cancel_delete();
            ShellReply::text(render(ctrl))
        }
        ShellCommand::Delete(id) => match ctrl.request_delete(id.as_str()) {
            Some(message) => ShellReply::text(format!("{}\n{} [yes/no]",
                                                      locale.message(MessageId::DeleteConfirmHeader), message)),
            None => ShellReply::text(format!("no book with id {}", id)),
        },
        ShellCommand::Yes => {
            if ctrl.pending_delete().is_none() {
                ShellReply::text("nothing to confirm".to_string())
            } else {
                ctrl.confirm_delete().await;
                ShellReply::text(render(ctrl))
            }
        }
        ShellCommand::No => {
            ctrl.cancel_delete();
            ShellReply::default()
        }
        ShellCommand::Show => ShellReply::text(render(ctrl)),
        ShellCommand::Help => ShellReply::text(HELP.to_string()),
        ShellCommand::Quit => ShellReply { output: String::new(), quit: true },
    };
    for toast in ctrl.take_notifications() {
        if !reply.output.is_empty() && !reply.output.ends_with('\n') {
            reply.output.push('\n');
        }
        reply.output.push_str(render_notification(&toast).as_str());
    }
    reply
}

fn page_reply<F>(ctrl: &mut BookTableController, go: F, refused: String) -> ShellReply
    where F: FnOnce(&mut BookTableController) -> bool {
    if go(ctrl) {
        ShellReply::text(render(ctrl))
    } else {
        ShellReply::text(refused)
    }
}
