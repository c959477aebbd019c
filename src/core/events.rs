use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::locale::{Locale, MessageId};

// Severity of a transient notification
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum Severity {
    Success,
    Error,
}

// Notification abstracts a transient toast shown after a user action completes.
// The queue is drained on render; showing life_ms and expiring the toast from
// created_at is left to the renderer.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
    pub life_ms: u64,
    pub created_at: NaiveDateTime,
}

impl Notification {
    pub fn success(locale: Locale, detail: MessageId, life_ms: u64) -> Self {
        Self::build(Severity::Success, locale.message(MessageId::ToastSuccessTitle),
                    locale.message(detail), life_ms)
    }

    pub fn error(locale: Locale, detail: &str, life_ms: u64) -> Self {
        Self::build(Severity::Error, locale.message(MessageId::ToastErrorTitle), detail, life_ms)
    }

    fn build(severity: Severity, summary: &str, detail: &str, life_ms: u64) -> Notification {
        Notification {
            severity,
            summary: summary.to_string(),
            detail: detail.to_string(),
            life_ms,
            created_at: Utc::now().naive_utc(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
