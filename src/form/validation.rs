use std::collections::BTreeMap;
use crate::form::{BookForm, Field};
use crate::locale::{Locale, MessageId};

pub const MIN_PUBLISHED_YEAR: i32 = 1800;

// ValidationErrors maps each failing field to its message. Empty means the form may be
// submitted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, MessageId>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> Option<MessageId> {
        self.errors.get(&field).copied()
    }

    pub fn message(&self, field: Field, locale: Locale) -> Option<&'static str> {
        self.get(field).map(|id| locale.message(id))
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    /// Field name to message text, e.g. `{"title": "Title is required"}`.
    pub fn to_map(&self, locale: Locale) -> BTreeMap<&'static str, &'static str> {
        self.errors.iter().map(|(f, id)| (f.name(), locale.message(*id))).collect()
    }

    fn insert(&mut self, field: Field, message: MessageId) {
        self.errors.insert(field, message);
    }
}

/// Checks a form against the submission rules; `current_year` bounds the published year.
pub fn validate(form: &BookForm, current_year: i32) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    if form.title.trim().is_empty() {
        errors.insert(Field::Title, MessageId::TitleRequired);
    }
    if form.author.trim().is_empty() {
        errors.insert(Field::Author, MessageId::AuthorRequired);
    }
    if form.genre.trim().is_empty() {
        errors.insert(Field::Genre, MessageId::GenreRequired);
    }
    let year = form.published_year.trim();
    if year.is_empty() {
        errors.insert(Field::PublishedYear, MessageId::YearRequired);
    } else {
        match year.parse::<i32>() {
            Ok(y) if (MIN_PUBLISHED_YEAR..=current_year).contains(&y) => {}
            _ => errors.insert(Field::PublishedYear, MessageId::YearInvalid),
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use crate::form::validation::validate;
    use crate::form::{BookForm, Field};
    use crate::locale::{Locale, MessageId};

    fn valid_form() -> BookForm {
        BookForm {
            title: "A".to_string(),
            author: "X".to_string(),
            genre: "Fiction".to_string(),
            published_year: "2020".to_string(),
            ..BookForm::default()
        }
    }

    #[tokio::test]
    async fn test_should_accept_valid_form() {
        assert!(validate(&valid_form(), 2026).is_empty());
    }

    #[tokio::test]
    async fn test_should_flag_only_empty_title() {
        let mut form = valid_form();
        form.title = "   ".to_string();
        let errors = validate(&form, 2026);
        assert_eq!(1, errors.len());
        assert_eq!(Some(MessageId::TitleRequired), errors.get(Field::Title));
        assert_eq!(Some("Title is required"), errors.message(Field::Title, Locale::En));
    }

    #[tokio::test]
    async fn test_should_flag_each_empty_text_field() {
        let errors = validate(&BookForm::default(), 2026);
        assert_eq!(vec![Field::Title, Field::Author, Field::Genre, Field::PublishedYear],
                   errors.fields().collect::<Vec<_>>());
        assert_eq!(Some(MessageId::YearRequired), errors.get(Field::PublishedYear));
        assert_eq!(None, errors.get(Field::Status));
    }

    #[tokio::test]
    async fn test_should_flag_year_out_of_range() {
        let mut form = valid_form();
        form.published_year = "1700".to_string();
        let errors = validate(&form, 2026);
        assert_eq!(1, errors.len());
        assert_eq!(Some(MessageId::YearInvalid), errors.get(Field::PublishedYear));

        form.published_year = "2027".to_string();
        assert_eq!(Some(MessageId::YearInvalid), validate(&form, 2026).get(Field::PublishedYear));
    }

    #[tokio::test]
    async fn test_should_accept_range_bounds() {
        let mut form = valid_form();
        form.published_year = "1800".to_string();
        assert!(validate(&form, 2026).is_empty());
        form.published_year = "2026".to_string();
        assert!(validate(&form, 2026).is_empty());
    }

    #[tokio::test]
    async fn test_should_flag_non_numeric_year() {
        let mut form = valid_form();
        for bad in ["abc", "19x9", "2000.5", "-"] {
            form.published_year = bad.to_string();
            assert_eq!(Some(MessageId::YearInvalid), validate(&form, 2026).get(Field::PublishedYear));
        }
    }

    #[tokio::test]
    async fn test_should_render_error_map() {
        let mut form = valid_form();
        form.author = String::new();
        let map = validate(&form, 2026).to_map(Locale::En);
        assert_eq!(Some(&"Author is required"), map.get("author"));
        assert_eq!(1, map.len());
    }
}
