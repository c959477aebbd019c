use chrono::{Datelike, Local};

// Calendar year on the local clock, the upper bound for a book's published year.
pub fn current_year() -> i32 {
    Local::now().year()
}

#[cfg(test)]
mod tests {
    use crate::utils::date::current_year;

    #[tokio::test]
    async fn test_should_return_current_year() {
        assert!(current_year() >= 2024);
    }
}
