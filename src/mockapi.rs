pub mod router;
pub mod store;
