use crate::locale::Locale;

const DEFAULT_API_URL: &str = "https://684d88e665ed08713916668f.mockapi.io/books";

// Collection endpoint of the remote backend, fixed at build time.
pub const API_URL: &str = match option_env!("BOOKS_API_URL") {
    Some(url) => url,
    None => DEFAULT_API_URL,
};

// Identifiable defines common traits that can be shared by remote records
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

// Configuration abstracts config options for the inventory client
#[derive(Debug, PartialEq, Clone)]
pub struct Configuration {
    pub base_url: String,
    pub page_size: usize,
    pub locale: Locale,
    pub toast_life_ms: u64,
}

impl Configuration {
    pub fn new(base_url: &str) -> Self {
        Configuration {
            base_url: base_url.trim_end_matches('/').to_string(),
            page_size: 10,
            locale: Locale::default(),
            toast_life_ms: 3000,
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new(API_URL)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::{Configuration, API_URL};
    use crate::locale::Locale;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::default();
        assert_eq!(API_URL, config.base_url.as_str());
        assert_eq!(10, config.page_size);
        assert_eq!(3000, config.toast_life_ms);
        assert_eq!(Locale::En, config.locale);
    }

    #[tokio::test]
    async fn test_should_trim_trailing_slash() {
        let config = Configuration::new("http://127.0.0.1:3000/books/");
        assert_eq!("http://127.0.0.1:3000/books", config.base_url.as_str());
    }
}
