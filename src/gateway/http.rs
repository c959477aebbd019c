use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{info, warn};
use crate::books::dto::{BookDraft, BookDto};
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::books::{BookGateway, CREATE_FAILED, LIST_FAILED, REMOVE_FAILED, REPLACE_FAILED};

// HttpBookGateway talks REST/JSON to the collection endpoint, e.g. `https://host/books`.
#[derive(Debug, Clone)]
pub struct HttpBookGateway {
    client: Client,
    base_url: Url,
}

impl HttpBookGateway {
    pub fn new(base_url: &str) -> LibraryResult<Self> {
        let base_url = Url::parse(base_url).map_err(|err| LibraryError::validation(
            format!("invalid base url {} due to {}", base_url, err).as_str(), None))?;
        if base_url.scheme() != "http" && base_url.scheme() != "https" {
            return Err(LibraryError::validation(
                format!("base url must be http or https {}", base_url).as_str(), None));
        }
        let client = Client::builder()
            .user_agent(concat!("book-inventory/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    fn item_url(&self, id: &str, failure: &str) -> LibraryResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LibraryError::fetch(failure, None))?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder, failure: &str) -> LibraryResult<Response> {
        let res = request.send().await.map_err(|err| {
            warn!("{}: request error {}", failure, err);
            LibraryError::fetch(failure, err.status().map(|s| s.as_u16()))
        })?;
        let status = res.status();
        if !status.is_success() {
            warn!("{}: backend returned {}", failure, status);
            return Err(LibraryError::fetch(failure, Some(status.as_u16())));
        }
        Ok(res)
    }

    async fn decode<T: DeserializeOwned>(res: Response, failure: &str) -> LibraryResult<T> {
        let status = res.status().as_u16();
        res.json::<T>().await.map_err(|err| {
            warn!("{}: undecodable body {}", failure, err);
            LibraryError::fetch(failure, Some(status))
        })
    }
}

#[async_trait]
impl BookGateway for HttpBookGateway {
    async fn list(&self) -> LibraryResult<Vec<BookDto>> {
        info!("GET {}", self.base_url);
        let res = self.send(self.client.get(self.base_url.clone()), LIST_FAILED).await?;
        let books: Vec<BookDto> = Self::decode(res, LIST_FAILED).await?;
        info!("fetched {} books", books.len());
        Ok(books)
    }

    async fn create(&self, draft: &BookDraft) -> LibraryResult<BookDto> {
        info!("POST {}", self.base_url);
        let res = self.send(self.client.post(self.base_url.clone()).json(draft), CREATE_FAILED).await?;
        Self::decode(res, CREATE_FAILED).await
    }

    async fn replace(&self, id: &str, draft: &BookDraft) -> LibraryResult<BookDto> {
        let url = self.item_url(id, REPLACE_FAILED)?;
        info!("PUT {}", url);
        let res = self.send(self.client.put(url).json(draft), REPLACE_FAILED).await?;
        Self::decode(res, REPLACE_FAILED).await
    }

    async fn remove(&self, id: &str) -> LibraryResult<()> {
        let url = self.item_url(id, REMOVE_FAILED)?;
        info!("DELETE {}", url);
        // the response body is not used
        self.send(self.client.delete(url), REMOVE_FAILED).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::Router;
    use crate::books::dto::BookDraft;
    use crate::core::library::{BookStatus, LibraryError};
    use crate::gateway::books::BookGateway;
    use crate::gateway::http::HttpBookGateway;
    use crate::mockapi::router::create_router;
    use crate::mockapi::store::BookStore;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("should bind");
        let port = listener.local_addr().expect("local addr").port();
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("mock server");
        });
        format!("http://127.0.0.1:{}/books", port)
    }

    async fn failing_backend() -> String {
        serve(Router::new().fallback(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") })).await
    }

    fn draft(title: &str) -> BookDraft {
        BookDraft::new(title, "Y", "Sci-Fi", 1999, BookStatus::Unavailable)
    }

    #[tokio::test]
    async fn test_should_reject_invalid_base_url() {
        assert!(matches!(HttpBookGateway::new("not a url"), Err(LibraryError::Validation { .. })));
        assert!(matches!(HttpBookGateway::new("ftp://host/books"), Err(LibraryError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_should_build_item_url() {
        let gateway = HttpBookGateway::new("http://127.0.0.1:3000/books/").expect("gateway");
        let url = gateway.item_url("7", "x").expect("url");
        assert_eq!("http://127.0.0.1:3000/books/7", url.as_str());
        let url = gateway.item_url("a b", "x").expect("url");
        assert_eq!("http://127.0.0.1:3000/books/a%20b", url.as_str());
    }

    #[tokio::test]
    async fn test_should_create_list_books() {
        let base = serve(create_router(BookStore::new())).await;
        let gateway = HttpBookGateway::new(base.as_str()).expect("gateway");

        let created = gateway.create(&draft("B")).await.expect("should create book");
        assert!(!created.id.is_empty());
        assert_eq!("B", created.title.as_str());
        assert_eq!(BookStatus::Unavailable, created.status);

        let books = gateway.list().await.expect("should list books");
        assert_eq!(vec![created], books);
    }

    #[tokio::test]
    async fn test_should_replace_remove_books() {
        let base = serve(create_router(BookStore::new())).await;
        let gateway = HttpBookGateway::new(base.as_str()).expect("gateway");
        let created = gateway.create(&draft("B")).await.expect("should create book");

        let mut edited = draft("B2");
        edited.status = BookStatus::Available;
        let updated = gateway.replace(created.id.as_str(), &edited).await.expect("should replace book");
        assert_eq!(created.id, updated.id);
        assert_eq!("B2", updated.title.as_str());
        assert_eq!(BookStatus::Available, updated.status);

        gateway.remove(created.id.as_str()).await.expect("should remove book");
        assert!(gateway.list().await.expect("should list").is_empty());
    }

    #[tokio::test]
    async fn test_should_fail_on_unknown_id() {
        let base = serve(create_router(BookStore::new())).await;
        let gateway = HttpBookGateway::new(base.as_str()).expect("gateway");
        let err = gateway.remove("404").await.expect_err("should fail");
        assert_eq!("Failed to delete book", err.to_string());
        assert_eq!(Some(404), err.status());
        let err = gateway.replace("404", &draft("x")).await.expect_err("should fail");
        assert_eq!("Failed to update book", err.to_string());
    }

    #[tokio::test]
    async fn test_should_collapse_server_errors() {
        let base = failing_backend().await;
        let gateway = HttpBookGateway::new(base.as_str()).expect("gateway");
        let err = gateway.list().await.expect_err("should fail");
        assert!(matches!(err, LibraryError::Fetch { status: Some(500), .. }));
        assert_eq!("Failed to fetch books", err.to_string());
        assert_eq!("Failed to add book", gateway.create(&draft("B")).await.expect_err("fail").to_string());
        assert_eq!("Failed to update book", gateway.replace("1", &draft("B")).await.expect_err("fail").to_string());
        assert_eq!("Failed to delete book", gateway.remove("1").await.expect_err("fail").to_string());
    }

    #[tokio::test]
    async fn test_should_fail_on_unreachable_backend() {
        // nothing listens on the port once the listener is dropped
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("should bind");
        let port = listener.local_addr().expect("local addr").port();
        drop(listener);
        let gateway = HttpBookGateway::new(format!("http://127.0.0.1:{}/books", port).as_str()).expect("gateway");
        let err = gateway.list().await.expect_err("should fail");
        assert!(matches!(err, LibraryError::Fetch { status: None, .. }));
        assert_eq!("Failed to fetch books", err.to_string());
    }

    #[tokio::test]
    async fn test_should_fail_on_undecodable_body() {
        let base = serve(Router::new().fallback(|| async { "not json" })).await;
        let gateway = HttpBookGateway::new(base.as_str()).expect("gateway");
        let err = gateway.list().await.expect_err("should fail");
        assert_eq!("Failed to fetch books", err.to_string());
    }
}
