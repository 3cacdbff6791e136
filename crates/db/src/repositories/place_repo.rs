//! Repository for the `places` table.

use sqlx::PgPool;
use tripline_core::types::DbId;

use crate::models::place::Place;

/// Column list for `places` queries. Coordinates come back as text so the
/// presenter layer owns the float coercion.
const COLUMNS: &str =
    "id, name, address, category, lat::text AS lat, lng::text AS lng, naver_place_id, created_at";

/// Provides read and upsert access to places.
pub struct PlaceRepo;

impl PlaceRepo {
    /// Fetch a single place by ID.
    pub async fn get(pool: &PgPool, place_id: DbId) -> Result<Option<Place>, sqlx::Error> {
        sqlx::query_as::<_, Place>(&format!("SELECT {COLUMNS} FROM places WHERE id = $1"))
            .bind(place_id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch several places by ID, in no particular order.
    pub async fn fetch_many(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Place>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, Place>(&format!("SELECT {COLUMNS} FROM places WHERE id = ANY($1)"))
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Insert a place discovered via NAVER local search, or return the
    /// existing row keyed by `naver_place_id`.
    pub async fn upsert_from_naver(
        pool: &PgPool,
        name: &str,
        address: Option<&str>,
        category: Option<&str>,
        lat: f64,
        lng: f64,
        naver_place_id: &str,
    ) -> Result<Place, sqlx::Error> {
        sqlx::query_as::<_, Place>(&format!(
            "INSERT INTO places (name, address, category, lat, lng, naver_place_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             ON CONFLICT (naver_place_id) DO UPDATE SET \
               name = EXCLUDED.name, \
               address = EXCLUDED.address, \
               category = EXCLUDED.category, \
               lat = EXCLUDED.lat, \
               lng = EXCLUDED.lng \
             RETURNING {COLUMNS}"
        ))
        .bind(name)
        .bind(address)
        .bind(category)
        .bind(lat)
        .bind(lng)
        .bind(naver_place_id)
        .fetch_one(pool)
        .await
    }
}
