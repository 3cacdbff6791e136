//! Repository for the `access_tokens` table.

use sqlx::PgPool;

use crate::models::token::AccessToken;

/// Column list for `access_tokens` queries.
const COLUMNS: &str = "id, user_id, token, expires_at, created_at";

/// Bearer-token lookup. Issuance and revocation are external.
pub struct AccessTokenRepo;

impl AccessTokenRepo {
    /// Resolve a bearer token to its row, ignoring expired tokens.
    pub async fn find_valid(
        pool: &PgPool,
        token: &str,
    ) -> Result<Option<AccessToken>, sqlx::Error> {
        sqlx::query_as::<_, AccessToken>(&format!(
            "SELECT {COLUMNS} FROM access_tokens \
             WHERE token = $1 AND (expires_at IS NULL OR expires_at > NOW())"
        ))
        .bind(token)
        .fetch_optional(pool)
        .await
    }
}
