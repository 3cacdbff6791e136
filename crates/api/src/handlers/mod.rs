pub mod chat;
pub mod checklist;
pub mod checkpoints;
pub mod comments;
pub mod diaries;
pub mod favorites;
pub mod health;
pub mod integrations;
pub mod itinerary;
pub mod notifications;
pub mod participants;
pub mod reviews;
pub mod tags;
pub mod trips;

/// Maximum page size for list endpoints.
pub(crate) const MAX_LIMIT: i64 = 100;

/// Default page size for list endpoints.
pub(crate) const DEFAULT_LIMIT: i64 = 50;

/// Common pagination query parameters.
#[derive(Debug, serde::Deserialize)]
pub struct Page {
    /// Maximum number of results. Defaults to 50, capped at 100.
    pub limit: Option<i64>,
    /// Number of results to skip. Defaults to 0.
    pub offset: Option<i64>,
}

impl Page {
    pub(crate) fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    pub(crate) fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}
