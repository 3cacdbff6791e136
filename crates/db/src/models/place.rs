//! Place entity model.
//!
//! Coordinates are stored as NUMERIC and fetched as text; the presenter
//! layer owns the float coercion so a malformed value surfaces as a
//! serialization error instead of a silently corrupted coordinate.

use serde::Serialize;
use sqlx::FromRow;
use tripline_core::types::{DbId, Timestamp};

/// A row from the `places` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Place {
    pub id: DbId,
    pub name: String,
    pub address: Option<String>,
    pub category: Option<String>,
    pub lat: String,
    pub lng: String,
    pub naver_place_id: Option<String>,
    pub created_at: Timestamp,
}
