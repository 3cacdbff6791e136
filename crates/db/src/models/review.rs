//! Place review models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tripline_core::types::{DbId, Timestamp};

/// A row from the `reviews` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub place_id: DbId,
    pub user_id: DbId,
    /// 1 through 5.
    pub rating: i32,
    pub content: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a review.
#[derive(Debug, Deserialize)]
pub struct CreateReview {
    pub rating: i32,
    pub content: Option<String>,
}

/// DTO for updating a review.
#[derive(Debug, Deserialize)]
pub struct UpdateReview {
    pub rating: Option<i32>,
    pub content: Option<String>,
}
