pub mod books;
pub mod catalog;
pub mod core;
pub mod form;
pub mod gateway;
pub mod inventory;
pub mod locale;
pub mod mockapi;
pub mod utils;
