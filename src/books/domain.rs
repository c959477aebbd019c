use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

// Book is the view the query engine needs of a catalog record.
pub trait Book: Identifiable {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn genre(&self) -> &str;
    fn status(&self) -> BookStatus;
}
