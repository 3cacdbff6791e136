//! Access token model for bearer authentication.
//!
//! Token issuance and revocation live in the account service; this
//! backend only looks tokens up to resolve the calling user.

use sqlx::FromRow;
use tripline_core::types::{DbId, Timestamp};

/// A row from the `access_tokens` table.
#[derive(Debug, Clone, FromRow)]
pub struct AccessToken {
    pub id: DbId,
    pub user_id: DbId,
    pub token: String,
    pub expires_at: Option<Timestamp>,
    pub created_at: Timestamp,
}
