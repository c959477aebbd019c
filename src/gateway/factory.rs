use std::sync::Arc;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::gateway::books::BookGateway;
use crate::gateway::http::HttpBookGateway;
use crate::gateway::memory::InMemoryBookGateway;
use crate::gateway::GatewayVia;
use crate::mockapi::store::{sample_books, BookStore};

pub fn create_gateway(config: &Configuration, via: GatewayVia) -> LibraryResult<Arc<dyn BookGateway>> {
    match via {
        GatewayVia::Remote => {
            Ok(Arc::new(HttpBookGateway::new(config.base_url.as_str())?))
        }
        GatewayVia::InMemory => {
            Ok(Arc::new(InMemoryBookGateway::new(BookStore::with_books(sample_books()))))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::gateway::books::BookGateway;
    use crate::gateway::factory::create_gateway;
    use crate::gateway::GatewayVia;

    #[tokio::test]
    async fn test_should_create_in_memory_gateway() {
        let gateway = create_gateway(&Configuration::default(), GatewayVia::InMemory).expect("gateway");
        let books = gateway.list().await.expect("should list sample books");
        assert!(!books.is_empty());
    }

    #[tokio::test]
    async fn test_should_create_remote_gateway() {
        assert!(create_gateway(&Configuration::default(), GatewayVia::Remote).is_ok());
        assert!(create_gateway(&Configuration::new("nonsense"), GatewayVia::Remote).is_err());
    }
}
