//! JSON presenters: pure transforms from entity views to response shapes.
//!
//! Each presenter maps one entity (plus the loading state of its
//! relations, see `tripline_core::rel::Rel`) to a `serde_json::Map`.
//! Field presence is part of the contract: a gated relation that was not
//! loaded is an absent key, not `null`. Presenters never touch the
//! database; eager-load decisions are made in the repositories before a
//! presenter runs.
//!
//! Two embed policies coexist:
//! - gate-checked nested presenter (checkpoint → place, checklist → trip),
//! - gate-checked raw embedding (diary/participant → trip/user), where the
//!   related model is serialized as-is without its own presenter.
//!
//! Timestamp rendering is likewise split: the checkpoint/chat/favorite
//! family formats explicitly (RFC 3339 or `null`), while diaries and
//! participants pass timestamps through serde's default serialization.
//! Both splits reproduce the shapes existing API consumers depend on.

pub mod chat_message;
pub mod checklist_item;
pub mod favorite;
pub mod map_checkpoint;
pub mod place;
pub mod trip;
pub mod trip_diary;
pub mod trip_participant;

use serde_json::Value;
use tripline_core::error::CoreError;
use tripline_core::types::Timestamp;

/// Output type of every presenter.
pub type JsonMap = serde_json::Map<String, Value>;

/// Render an optional timestamp as an RFC 3339 string, or `null`.
pub(crate) fn iso8601_or_null(ts: Option<&Timestamp>) -> Value {
    match ts {
        Some(ts) => Value::String(ts.to_rfc3339()),
        None => Value::Null,
    }
}

/// Coerce a stored coordinate to `f64`.
///
/// Coordinates are carried as text from NUMERIC columns; a value that
/// does not parse is a data corruption and must surface as an error,
/// never be swallowed.
pub(crate) fn coerce_coord(value: &str, field: &str) -> Result<f64, CoreError> {
    value.trim().parse::<f64>().map_err(|_| {
        CoreError::Validation(format!(
            "Invalid numeric value '{value}' for coordinate field '{field}'"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_iso8601_renders_null_for_absent_timestamp() {
        assert_eq!(iso8601_or_null(None), Value::Null);
    }

    #[test]
    fn test_iso8601_renders_rfc3339_when_present() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        assert_eq!(
            iso8601_or_null(Some(&ts)),
            Value::String("2024-05-01T12:30:00+00:00".to_string())
        );
    }

    #[test]
    fn test_coerce_coord_parses_decimal_text() {
        assert_eq!(coerce_coord("37.5665000", "lat").unwrap(), 37.5665);
        assert_eq!(coerce_coord("-126.978", "lng").unwrap(), -126.978);
    }

    #[test]
    fn test_coerce_coord_rejects_garbage() {
        let err = coerce_coord("not-a-number", "lat").unwrap_err();
        assert!(err.to_string().contains("lat"));
    }
}
