pub mod books;
pub mod factory;
pub mod http;
pub mod memory;

// GatewayVia selects the backend the book gateway talks to
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum GatewayVia {
    Remote,
    InMemory,
}
