//! Presenter for trips.

use serde_json::json;
use tripline_db::models::trip::Trip;

use super::JsonMap;

/// Shape a trip for embedding or direct response.
///
/// Trip dates are date-only; `NaiveDate` formats as `YYYY-MM-DD`.
pub fn present(trip: &Trip) -> JsonMap {
    let mut out = JsonMap::new();
    out.insert("id".into(), json!(trip.id));
    out.insert("owner_id".into(), json!(trip.owner_id));
    out.insert("title".into(), json!(trip.title));
    out.insert("destination".into(), json!(trip.destination));
    out.insert("description".into(), json!(trip.description));
    out.insert(
        "start_date".into(),
        json!(trip.start_date.format("%Y-%m-%d").to_string()),
    );
    out.insert(
        "end_date".into(),
        json!(trip.end_date.format("%Y-%m-%d").to_string()),
    );
    out
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{NaiveDate, TimeZone, Utc};
    use tripline_db::models::trip::Trip;

    pub fn trip() -> Trip {
        Trip {
            id: 4,
            owner_id: 9,
            title: "Jeju long weekend".to_string(),
            destination: "Jeju".to_string(),
            description: None,
            start_date: NaiveDate::from_ymd_opt(2024, 6, 6).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 9).unwrap(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 5, 2, 8, 0, 0).unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::trip;
    use super::*;

    #[test]
    fn test_dates_render_as_plain_dates() {
        let out = present(&trip());
        assert_eq!(out["start_date"], json!("2024-06-06"));
        assert_eq!(out["end_date"], json!("2024-06-09"));
    }

    #[test]
    fn test_scalar_fields_pass_through() {
        let out = present(&trip());
        assert_eq!(out["id"], json!(4));
        assert_eq!(out["owner_id"], json!(9));
        assert_eq!(out["title"], json!("Jeju long weekend"));
        assert_eq!(out["description"], serde_json::Value::Null);
    }
}
