//! Favorite models and the polymorphic favoritable target.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tripline_core::rel::Rel;
use tripline_core::types::{DbId, Timestamp};

use crate::models::checkpoint::MapCheckpoint;
use crate::models::place::Place;
use crate::models::trip::Trip;

/// A row from the `favorites` table.
///
/// `favoritable_type` holds the raw internal discriminator
/// (see `tripline_core::favorite`), not the client-facing short label.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Favorite {
    pub id: DbId,
    pub user_id: DbId,
    pub favoritable_type: String,
    pub favoritable_id: DbId,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

/// The resolved target of a favorite's polymorphic relation.
///
/// Closed set: a discriminator outside this set cannot be resolved and the
/// repository records the relation as loaded-but-missing.
#[derive(Debug, Clone)]
pub enum Favoritable {
    Place(Place),
    Trip(Trip),
    MapCheckpoint(MapCheckpoint),
}

/// A favorite together with the loading state of its target.
#[derive(Debug, Clone)]
pub struct FavoriteView {
    pub favorite: Favorite,
    pub favoritable: Rel<Favoritable>,
}

/// DTO for creating a favorite.
#[derive(Debug, Deserialize)]
pub struct CreateFavorite {
    pub favoritable_type: String,
    pub favoritable_id: DbId,
}
