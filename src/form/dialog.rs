use tracing::debug;
use crate::books::dto::{BookDraft, BookDto};
use crate::form::validation::{validate, ValidationErrors};
use crate::form::{BookForm, Field};
use crate::locale::MessageId;

#[derive(Debug, Clone, PartialEq)]
pub enum DialogMode {
    Create,
    Edit(String),
}

impl DialogMode {
    pub fn header(&self) -> MessageId {
        match self {
            DialogMode::Create => MessageId::DialogAddTitle,
            DialogMode::Edit(_) => MessageId::DialogEditTitle,
        }
    }
}

// BookDialog is the create/edit dialog. Opening always starts from a fresh form with no
// errors; closing discards the draft.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum BookDialog {
    #[default]
    Closed,
    Open {
        mode: DialogMode,
        form: BookForm,
        errors: ValidationErrors,
    },
}

impl BookDialog {
    pub fn open_create(&mut self) {
        debug!("dialog open for create");
        *self = BookDialog::Open {
            mode: DialogMode::Create,
            form: BookForm::new(),
            errors: ValidationErrors::default(),
        };
    }

    pub fn open_edit(&mut self, book: &BookDto) {
        debug!("dialog open for edit {}", book.id);
        *self = BookDialog::Open {
            mode: DialogMode::Edit(book.id.to_string()),
            form: BookForm::from(book),
            errors: ValidationErrors::default(),
        };
    }

    pub fn close(&mut self) {
        debug!("dialog closed");
        *self = BookDialog::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, BookDialog::Open { .. })
    }

    pub fn mode(&self) -> Option<&DialogMode> {
        match self {
            BookDialog::Open { mode, .. } => Some(mode),
            BookDialog::Closed => None,
        }
    }

    pub fn form(&self) -> Option<&BookForm> {
        match self {
            BookDialog::Open { form, .. } => Some(form),
            BookDialog::Closed => None,
        }
    }

    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            BookDialog::Open { errors, .. } => Some(errors),
            BookDialog::Closed => None,
        }
    }

    pub fn set_field(&mut self, field: Field, value: &str) -> Result<(), String> {
        match self {
            BookDialog::Open { form, .. } => form.set(field, value),
            BookDialog::Closed => Err("no book dialog is open".to_string()),
        }
    }

    /// Validates the open form, storing the errors on the dialog. Returns the mode and
    /// draft to submit when the form is valid.
    pub fn validate(&mut self, current_year: i32) -> Option<(DialogMode, BookDraft)> {
        match self {
            BookDialog::Open { mode, form, errors } => {
                *errors = validate(form, current_year);
                if !errors.is_empty() {
                    debug!("dialog has {} invalid fields", errors.len());
                    return None;
                }
                form.to_draft().map(|draft| (mode.clone(), draft))
            }
            BookDialog::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::{BookDraft, BookDto};
    use crate::core::library::BookStatus;
    use crate::form::dialog::{BookDialog, DialogMode};
    use crate::form::Field;
    use crate::locale::MessageId;

    fn book() -> BookDto {
        BookDto::new("1", &BookDraft::new("A", "X", "Fiction", 2000, BookStatus::Available))
    }

    #[tokio::test]
    async fn test_should_open_blank_for_create() {
        let mut dialog = BookDialog::default();
        assert!(!dialog.is_open());
        dialog.open_create();
        assert_eq!(Some(&DialogMode::Create), dialog.mode());
        assert_eq!(MessageId::DialogAddTitle, DialogMode::Create.header());
        assert!(dialog.form().expect("form").title.is_empty());
    }

    #[tokio::test]
    async fn test_should_prefill_for_edit() {
        let mut dialog = BookDialog::default();
        dialog.open_edit(&book());
        assert_eq!(Some(&DialogMode::Edit("1".to_string())), dialog.mode());
        assert_eq!("A", dialog.form().expect("form").title.as_str());
        assert_eq!(MessageId::DialogEditTitle, dialog.mode().expect("mode").header());
    }

    #[tokio::test]
    async fn test_should_return_draft_when_valid() {
        let mut dialog = BookDialog::default();
        dialog.open_edit(&book());
        dialog.set_field(Field::Title, "A2").expect("set");
        let (mode, draft) = dialog.validate(2026).expect("valid");
        assert_eq!(DialogMode::Edit("1".to_string()), mode);
        assert_eq!("A2", draft.title.as_str());
    }

    #[tokio::test]
    async fn test_should_keep_errors_until_reopened() {
        let mut dialog = BookDialog::default();
        dialog.open_create();
        assert!(dialog.validate(2026).is_none());
        assert_eq!(4, dialog.errors().expect("errors").len());

        dialog.close();
        assert!(dialog.errors().is_none());
        dialog.open_create();
        assert!(dialog.errors().expect("errors").is_empty());

        assert!(dialog.validate(2026).is_none());
        dialog.open_edit(&book());
        assert!(dialog.errors().expect("errors").is_empty());
    }

    #[tokio::test]
    async fn test_should_ignore_closed_dialog() {
        let mut dialog = BookDialog::default();
        assert!(dialog.set_field(Field::Title, "x").is_err());
        assert!(dialog.validate(2026).is_none());
    }
}
